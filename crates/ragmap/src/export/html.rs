//! Standalone graph document.
//!
//! The document loads vis-network from a script URL and draws the scene into
//! a fluid-width container of fixed height.

use log::debug;

use crate::{
    config::PageConfig,
    export::{self, SceneData, escape_html},
};

const DEFAULT_SCRIPT_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/vis-network/9.1.2/dist/vis-network.min.js";

/// Renders [`SceneData`] into a complete HTML document.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    script_url: String,
    height: u32,
}

impl HtmlDocument {
    pub fn new(script_url: impl Into<String>, height: u32) -> Self {
        Self {
            script_url: script_url.into(),
            height,
        }
    }

    /// Returns the full HTML text for `data`.
    pub fn render(&self, data: &SceneData) -> String {
        let head = format!(
            "<script src=\"{script}\"></script>\n\
             <style>\n\
             html, body {{ margin: 0; padding: 0; }}\n\
             #mynetwork {{ width: 100%; height: {height}px; background-color: {background}; }}\n\
             </style>\n",
            script = escape_html(&self.script_url),
            height = self.height,
            background = data.background(),
        );
        let body = format!(
            "const nodes = new vis.DataSet({nodes});\n\
             const edges = new vis.DataSet({edges});\n\
             const options = {options};\n",
            nodes = data.nodes(),
            edges = data.edges(),
            options = data.options(),
        );

        let mut html = String::with_capacity(head.len() + body.len() + 512);
        html.push_str("<!DOCTYPE html>\n<html lang=\"cs\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&head);
        html.push_str("</head>\n<body>\n<div id=\"mynetwork\"></div>\n<script>\n");
        html.push_str(&body);
        html.push_str(
            "const container = document.getElementById(\"mynetwork\");\n\
             const network = new vis.Network(container, { nodes: nodes, edges: edges }, options);\n\
             </script>\n</body>\n</html>\n",
        );

        html
    }
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT_URL, 900)
    }
}

/// Builder for the [`Html`] exporter.
pub struct HtmlBuilder<'a> {
    file_name: String,
    page: Option<&'a PageConfig>,
}

impl<'a> HtmlBuilder<'a> {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            page: None,
        }
    }

    /// Take the script URL and canvas height from `page`.
    pub fn with_page(mut self, page: &'a PageConfig) -> Self {
        self.page = Some(page);
        self
    }

    pub fn build(self) -> Result<Html, export::Error> {
        let document = match self.page {
            Some(page) => {
                if page.height() == 0 {
                    return Err(export::Error::Render(
                        "graph canvas height must be positive".to_string(),
                    ));
                }
                HtmlDocument::new(page.script_url(), page.height())
            }
            None => HtmlDocument::default(),
        };

        Ok(Html {
            file_name: self.file_name,
            document,
        })
    }
}

/// Exporter writing a single graph document.
pub struct Html {
    file_name: String,
    document: HtmlDocument,
}

impl export::Exporter for Html {
    fn export_graph(&self, data: &SceneData) -> Result<(), export::Error> {
        let html = self.document.render(data);
        debug!(bytes = html.len(), physics = data.physics(); "Graph document rendered");
        export::write_document(&self.file_name, &html)
    }
}
