//! Host page around the graph.
//!
//! The page has an optional emoji favicon, a sidebar with an optional logo
//! and the physics checkbox, and a main area with the heading and an
//! `iframe` showing the graph document. Both renders, physics off and on,
//! are embedded; toggling the checkbox swaps the frame's `srcdoc`, so the
//! graph is drawn again from its initial placement.

use log::debug;

use crate::{
    config::PageConfig,
    export::{self, SceneData, escape_html, html::HtmlDocument, script_json},
};

const PHYSICS_LABEL: &str = "Fyzika (táhni uzly myší)";
const PHYSICS_CAPTION: &str = "Zapni/vypni, jestli mají uzly po puštění „dojíždět“.";

const FAVICON_SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'>\
<text y='.9em' font-size='90'>{icon}</text></svg>";

const STYLE: &str = "<style>\n\
body { margin: 0; display: flex; min-height: 100vh; font-family: \"Source Sans Pro\", sans-serif; color: #31333f; }\n\
aside { width: 18rem; flex-shrink: 0; padding: 2rem 1.5rem; box-sizing: border-box; background: #f0f2f6; }\n\
aside img { width: 100%; margin-bottom: 1.5rem; }\n\
aside .caption { font-size: 0.875rem; color: #808495; }\n\
main { flex: 1; min-width: 0; padding: 1.5rem 2.5rem; }\n\
main iframe { width: 100%; border: none; display: block; }\n\
</style>\n";

/// Builder for the [`HostPage`] exporter.
pub struct PageBuilder<'a> {
    file_name: String,
    page: &'a PageConfig,
    physics: bool,
}

impl<'a> PageBuilder<'a> {
    pub fn new(file_name: &str, page: &'a PageConfig) -> Self {
        Self {
            file_name: file_name.to_string(),
            page,
            physics: false,
        }
    }

    /// Set the initial state of the physics checkbox.
    pub fn with_physics(mut self, physics: bool) -> Self {
        self.physics = physics;
        self
    }

    pub fn build(self) -> Result<HostPage, export::Error> {
        if self.page.height() == 0 || self.page.embed_height() == 0 {
            return Err(export::Error::Render(
                "page heights must be positive".to_string(),
            ));
        }

        Ok(HostPage {
            file_name: self.file_name,
            tab_title: self.page.tab_title().to_string(),
            title: self.page.title().to_string(),
            icon: self.page.icon().map(str::to_string),
            logo: self.page.logo().map(str::to_string),
            embed_height: self.page.embed_height(),
            physics: self.physics,
            document: HtmlDocument::new(self.page.script_url(), self.page.height()),
        })
    }
}

/// Exporter writing the host page.
pub struct HostPage {
    file_name: String,
    tab_title: String,
    title: String,
    icon: Option<String>,
    logo: Option<String>,
    embed_height: u32,
    physics: bool,
    document: HtmlDocument,
}

impl HostPage {
    fn render(&self, physics_off: &SceneData, physics_on: &SceneData) -> Result<String, export::Error> {
        let off = self.document.render(physics_off);
        let on = self.document.render(physics_on);
        let initial = if self.physics { &on } else { &off };

        let to_script = |doc: &str| {
            script_json(doc).map_err(|err| export::Error::Render(err.to_string()))
        };
        let off_json = to_script(&off)?;
        let on_json = to_script(&on)?;

        let mut head = format!("<title>{}</title>\n", escape_html(&self.tab_title));
        let mut heading = escape_html(&self.title).into_owned();
        if let Some(icon) = &self.icon {
            let svg = FAVICON_SVG.replace("{icon}", &escape_html(icon));
            head.push_str(&format!(
                "<link rel=\"icon\" href=\"data:image/svg+xml,{}\">\n",
                escape_html(&svg)
            ));
            heading = format!("{} {heading}", escape_html(icon));
        }

        let logo = self
            .logo
            .as_deref()
            .map(|logo| format!("<img src=\"{}\" alt=\"logo\">\n", escape_html(logo)))
            .unwrap_or_default();
        let sidebar = format!(
            "{logo}<label><input type=\"checkbox\" id=\"physics\"{checked}> {label}</label>\n\
             <p class=\"caption\">{caption}</p>\n",
            checked = if self.physics { " checked" } else { "" },
            label = escape_html(PHYSICS_LABEL),
            caption = escape_html(PHYSICS_CAPTION),
        );
        let content = format!(
            "<h1>{heading}</h1>\n\
             <iframe id=\"graph\" title=\"graph\" scrolling=\"no\" height=\"{height}\" \
             style=\"height: {height}px\" srcdoc=\"{srcdoc}\"></iframe>\n",
            height = self.embed_height,
            srcdoc = escape_html(initial),
        );

        let mut html = String::with_capacity(content.len() + off_json.len() + on_json.len() + 2048);
        html.push_str("<!DOCTYPE html>\n<html lang=\"cs\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&head);
        html.push_str(STYLE);
        html.push_str("</head>\n<body>\n<aside>\n");
        html.push_str(&sidebar);
        html.push_str("</aside>\n<main>\n");
        html.push_str(&content);
        html.push_str("</main>\n<script>\n");
        html.push_str(&format!(
            "const graphDocuments = {{ off: {off_json}, on: {on_json} }};\n"
        ));
        html.push_str(
            "const physicsToggle = document.getElementById(\"physics\");\n\
             const graphFrame = document.getElementById(\"graph\");\n\
             physicsToggle.addEventListener(\"change\", () => {\n\
             \x20 graphFrame.srcdoc = physicsToggle.checked ? graphDocuments.on : graphDocuments.off;\n\
             });\n\
             </script>\n</body>\n</html>\n",
        );

        Ok(html)
    }
}

impl export::Exporter for HostPage {
    fn export_page(
        &self,
        physics_off: &SceneData,
        physics_on: &SceneData,
    ) -> Result<(), export::Error> {
        let html = self.render(physics_off, physics_on)?;
        debug!(bytes = html.len(), physics = self.physics; "Host page rendered");
        export::write_document(&self.file_name, &html)
    }
}
