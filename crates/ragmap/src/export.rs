//! Writing scenes out as HTML.
//!
//! [`SceneData`] is the JSON form of a [`Scene`] in the shape vis-network
//! consumes. The [`html`] exporter writes it into a standalone document and
//! the [`page`] exporter wraps two such documents in the host page.

pub mod html;
pub mod page;

use std::{borrow::Cow, fs::File, io::Write};

use log::{error, info};
use serde::Serialize;

use ragmap_core::{color::Color, draw::Shape, identifier::Id};

use crate::scene::Scene;

// A single Exporter trait shared by the document and page exporters
pub trait Exporter {
    fn export_graph(&self, _data: &SceneData) -> Result<(), Error> {
        Err(Error::Render("Graph export not implemented".to_string()))
    }

    fn export_page(&self, _physics_off: &SceneData, _physics_on: &SceneData) -> Result<(), Error> {
        Err(Error::Render("Page export not implemented".to_string()))
    }
}

#[derive(Debug)]
pub enum Error {
    Render(String),
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

/// Serialized node, edge and option payloads of a [`Scene`].
///
/// Every payload is safe to paste into a `<script>` element.
#[derive(Debug, Clone)]
pub struct SceneData {
    nodes: String,
    edges: String,
    options: String,
    background: Color,
    physics: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VisNode<'a> {
    id: Id,
    label: &'a str,
    title: &'a str,
    color: VisColor,
    font: VisFont,
    shape: Shape,
    size: f32,
    border_width: f32,
    x: f32,
    y: f32,
}

#[derive(Serialize)]
struct VisColor {
    background: Color,
    border: Color,
}

#[derive(Serialize)]
struct VisFont {
    color: Color,
}

#[derive(Serialize)]
struct VisEdge {
    from: Id,
    to: Id,
}

impl SceneData {
    /// Serializes `scene`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if any payload fails to serialize.
    pub fn from_scene(scene: &Scene) -> Result<Self, serde_json::Error> {
        let nodes: Vec<_> = scene
            .nodes()
            .iter()
            .map(|marker| VisNode {
                id: marker.id(),
                label: marker.label(),
                title: marker.tooltip(),
                color: VisColor {
                    background: marker.fill(),
                    border: marker.style().border_color(),
                },
                font: VisFont {
                    color: scene.font_color(),
                },
                shape: marker.style().shape(),
                size: marker.style().size(),
                border_width: marker.style().border_width(),
                x: marker.position().x(),
                y: marker.position().y(),
            })
            .collect();

        let edges: Vec<_> = scene
            .edges()
            .iter()
            .map(|line| VisEdge {
                from: line.source(),
                to: line.target(),
            })
            .collect();

        Ok(Self {
            nodes: script_json(&nodes)?,
            edges: script_json(&edges)?,
            options: script_json(scene.options())?,
            background: scene.background(),
            physics: scene.physics_enabled(),
        })
    }

    pub fn nodes(&self) -> &str {
        &self.nodes
    }

    pub fn edges(&self) -> &str {
        &self.edges
    }

    pub fn options(&self) -> &str {
        &self.options
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn physics(&self) -> bool {
        self.physics
    }
}

/// Serializes `value` to JSON that is inert inside an enclosing `<script>`.
///
/// `<`, `>` and `&` only occur inside JSON strings, where their `\uXXXX`
/// escapes decode to the same text. With none of them left, no `</script>`
/// or `<!--` sequence can reach the HTML tokenizer.
pub(crate) fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value).map(|json| {
        json.replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026")
    })
}

/// Escapes text for use in HTML content or a double-quoted attribute.
pub(crate) fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Writes a rendered document to `file_name`.
pub(crate) fn write_document(file_name: &str, content: &str) -> Result<(), Error> {
    info!(file_name = file_name; "Creating HTML file");
    // Create the output file
    let mut f = match File::create(file_name) {
        Ok(file) => file,
        Err(err) => {
            error!(file_name = file_name, err:err; "Failed to create HTML file");
            return Err(Error::Io(err));
        }
    };

    // Write the HTML content to the file
    if let Err(err) = f.write_all(content.as_bytes()) {
        error!(file_name = file_name, err:err; "Failed to write HTML content");
        return Err(Error::Io(err));
    }

    Ok(())
}
