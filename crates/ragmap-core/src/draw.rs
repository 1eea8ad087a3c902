//! Visual definitions for node markers and edges.
//!
//! These types describe how an element looks, independent of where it is
//! placed. They serialize straight into the option names understood by the
//! browser graph view (`shape`, `size`, `borderWidth`, `scaleFactor`, ...).
//!
//! # Overview
//!
//! - [`Shape`] - Marker shape drawn for a node
//! - [`NodeStyle`] - Fixed marker attributes shared by every node
//! - [`ArrowHead`] - Arrow drawn at the destination end of an edge

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Marker shape drawn for a node.
///
/// All variants are drawn with the label below the marker and scale with
/// [`NodeStyle::size`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Filled circle.
    #[default]
    Dot,
    Square,
    Diamond,
    Triangle,
}

/// Fixed marker attributes shared by every node in a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    shape: Shape,
    size: f32,
    border_width: f32,
    border_color: Color,
}

impl NodeStyle {
    /// Creates a node style.
    ///
    /// # Arguments
    ///
    /// * `shape` - Marker shape
    /// * `size` - Marker radius in pixels
    /// * `border_width` - Border stroke width in pixels
    /// * `border_color` - Border stroke color
    pub fn new(shape: Shape, size: f32, border_width: f32, border_color: Color) -> Self {
        Self {
            shape,
            size,
            border_width,
            border_color,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }
}

impl Default for NodeStyle {
    /// Circular dot of radius 22 with a 2px dark border.
    fn default() -> Self {
        Self::new(
            Shape::Dot,
            22.0,
            2.0,
            Color::new("#222").expect("'#222' is a valid CSS color"),
        )
    }
}

/// Arrow drawn at the destination end of a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowHead {
    enabled: bool,
    scale_factor: f32,
}

impl ArrowHead {
    /// Creates an enabled arrow head with the given scale factor.
    pub fn new(scale_factor: f32) -> Self {
        Self {
            enabled: true,
            scale_factor,
        }
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }
}
