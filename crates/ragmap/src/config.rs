//! Configuration types for ragmap rendering.
//!
//! This module provides configuration structures that control how the graph
//! is simulated, laid out, styled and embedded. All types implement
//! [`serde::Deserialize`] and every field has a default, so a partial TOML
//! file only overrides what it names.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`RenderConfig`] - Physics flag and the options handed to the browser.
//! - [`LayoutConfig`] - Seed and spacing of the initial placement.
//! - [`StyleConfig`] - Node styling and document colors.
//! - [`PageConfig`] - Host page chrome.
//!
//! # Example
//!
//! ```
//! # use ragmap::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(!config.render().physics());
//! assert_eq!(config.render().stabilization_iterations(), 240);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use ragmap_core::{
    color::Color,
    draw::{NodeStyle, Shape},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    render: RenderConfig,

    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    page: PageConfig,
}

impl AppConfig {
    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the page configuration.
    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    /// Overrides the default physics flag.
    pub fn set_physics(&mut self, physics: bool) -> &mut Self {
        self.render.physics = physics;
        self
    }
}

/// Simulation and interaction settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Physics flag used when a render does not pass its own.
    physics: bool,
    stabilization_iterations: usize,
    font_size: u32,
    arrow_scale_factor: f32,
    hover: bool,
}

impl RenderConfig {
    pub fn physics(&self) -> bool {
        self.physics
    }

    /// Number of simulation steps before the layout counts as settled.
    pub fn stabilization_iterations(&self) -> usize {
        self.stabilization_iterations
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn arrow_scale_factor(&self) -> f32 {
        self.arrow_scale_factor
    }

    /// Whether tooltips are shown on hover.
    pub fn hover(&self) -> bool {
        self.hover
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            physics: false,
            stabilization_iterations: 240,
            font_size: 18,
            arrow_scale_factor: 0.7,
            hover: true,
        }
    }
}

/// Initial placement settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Seed for the placement jitter.
    seed: u64,
    /// Grid cell size and edge rest length.
    spacing: f32,
    /// Largest width or height the initial placement may span.
    max_dimension: f32,
}

impl LayoutConfig {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn max_dimension(&self) -> f32 {
        self.max_dimension
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spacing: 120.0,
            max_dimension: 1200.0,
        }
    }
}

/// Visual styling of nodes and the rendered document.
///
/// Colors are kept as strings and parsed on access.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    shape: Shape,
    node_size: f32,
    border_width: f32,
    border_color: String,
    background_color: String,
    font_color: String,
}

impl StyleConfig {
    /// Returns the [`NodeStyle`] shared by every node marker.
    ///
    /// # Errors
    ///
    /// Returns an error if the border color cannot be parsed.
    pub fn node_style(&self) -> Result<NodeStyle, String> {
        let border_color = parse_color("border", &self.border_color)?;
        Ok(NodeStyle::new(
            self.shape,
            self.node_size,
            self.border_width,
            border_color,
        ))
    }

    /// Returns the parsed document background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        parse_color("background", &self.background_color)
    }

    /// Returns the parsed label font [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn font_color(&self) -> Result<Color, String> {
        parse_color("font", &self.font_color)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Dot,
            node_size: 22.0,
            border_width: 2.0,
            border_color: "#222".to_string(),
            background_color: "#ffffff".to_string(),
            font_color: "#222".to_string(),
        }
    }
}

fn parse_color(what: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {what} color `{value}` in config: {err}"))
}

/// Host page settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Browser tab title.
    tab_title: String,
    /// Heading above the graph.
    title: String,
    /// Height of the graph canvas, in pixels.
    height: u32,
    /// Height of the frame the graph is embedded in, in pixels.
    embed_height: u32,
    /// Emoji shown as the favicon and before the heading.
    icon: Option<String>,
    logo: Option<String>,
    script_url: String,
}

impl PageConfig {
    pub fn tab_title(&self) -> &str {
        &self.tab_title
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn embed_height(&self) -> u32 {
        self.embed_height
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Path or URL of the sidebar logo, if any.
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    /// URL the vis-network script is loaded from.
    pub fn script_url(&self) -> &str {
        &self.script_url
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            tab_title: "RAG + Agents + Prompting + Fine-tuning (+ skills)".to_string(),
            title: "RAG pipeline + agenti + prompting + fine-tuning aj.".to_string(),
            height: 900,
            embed_height: 920,
            icon: Some("🕸️".to_string()),
            logo: Some("qest-logo-new.png".to_string()),
            script_url:
                "https://cdnjs.cloudflare.com/ajax/libs/vis-network/9.1.2/dist/vis-network.min.js"
                    .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert!(!config.render().physics());
        assert_eq!(config.render().font_size(), 18);
        assert_approx_eq!(f32, config.render().arrow_scale_factor(), 0.7);
        assert!(config.render().hover());
        assert_eq!(config.layout().seed(), 42);
        assert_eq!(config.page().height(), 900);
        assert_eq!(config.page().embed_height(), 920);
        assert_eq!(config.page().logo(), Some("qest-logo-new.png"));
        assert_eq!(config.page().icon(), Some("🕸️"));
    }

    #[test]
    fn test_default_style_matches_node_defaults() {
        let style = StyleConfig::default().node_style().unwrap();
        assert_eq!(style, NodeStyle::default());
        assert_eq!(
            StyleConfig::default().background_color().unwrap().to_hex(),
            "#ffffff"
        );
        assert_eq!(StyleConfig::default().font_color().unwrap().to_hex(), "#222222");
    }

    #[test]
    fn test_invalid_color() {
        let style = StyleConfig {
            font_color: "not-a-color".to_string(),
            ..StyleConfig::default()
        };

        let err = style.font_color().unwrap_err();
        assert!(err.contains("font"));
        assert!(err.contains("not-a-color"));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"layout": {"seed": 7}, "page": {"logo": null}}"#).unwrap();

        assert_eq!(config.layout().seed(), 7);
        assert_approx_eq!(f32, config.layout().spacing(), 120.0);
        assert_approx_eq!(f32, config.layout().max_dimension(), 1200.0);
        assert_eq!(config.page().logo(), None);
        assert_eq!(config.render().stabilization_iterations(), 240);
    }

    #[test]
    fn test_shape_from_config() {
        let config: AppConfig =
            serde_json::from_str(r#"{"style": {"shape": "diamond"}}"#).unwrap();
        let style = config.style().node_style().unwrap();

        assert_eq!(style.shape(), Shape::Diamond);
        assert_approx_eq!(f32, style.size(), 22.0);
    }

    #[test]
    fn test_unknown_shape_is_rejected() {
        let result: Result<AppConfig, _> =
            serde_json::from_str(r#"{"style": {"shape": "hexagon"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_set_physics() {
        let mut config = AppConfig::default();
        config.set_physics(true);
        assert!(config.render().physics());
    }
}
