//! Options handed to the browser-side network renderer.
//!
//! [`RenderOptions`] serializes to the JSON object vis-network expects as its
//! `options` argument:
//!
//! ```json
//! {
//!   "physics": {"enabled": false, "stabilization": {"iterations": 240}},
//!   "nodes": {"font": {"size": 18}},
//!   "edges": {"smooth": false, "arrows": {"to": {"enabled": true, "scaleFactor": 0.7}}},
//!   "interaction": {"hover": true}
//! }
//! ```

use serde::Serialize;

use ragmap_core::draw::ArrowHead;

use crate::config::RenderConfig;

/// Browser renderer options for a single render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOptions {
    physics: PhysicsOptions,
    nodes: NodeOptions,
    edges: EdgeOptions,
    interaction: InteractionOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct PhysicsOptions {
    enabled: bool,
    stabilization: Stabilization,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Stabilization {
    iterations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct NodeOptions {
    font: FontOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct FontOptions {
    size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct EdgeOptions {
    smooth: bool,
    arrows: Arrows,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Arrows {
    to: ArrowHead,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct InteractionOptions {
    hover: bool,
}

impl RenderOptions {
    /// Builds the options for a render with the given physics flag.
    pub fn new(config: &RenderConfig, physics: bool) -> Self {
        Self {
            physics: PhysicsOptions {
                enabled: physics,
                stabilization: Stabilization {
                    iterations: config.stabilization_iterations(),
                },
            },
            nodes: NodeOptions {
                font: FontOptions {
                    size: config.font_size(),
                },
            },
            edges: EdgeOptions {
                smooth: false,
                arrows: Arrows {
                    to: ArrowHead::new(config.arrow_scale_factor()),
                },
            },
            interaction: InteractionOptions {
                hover: config.hover(),
            },
        }
    }

    pub fn physics_enabled(&self) -> bool {
        self.physics.enabled
    }

    /// Stabilization steps the browser runs when physics is enabled.
    pub fn stabilization_iterations(&self) -> usize {
        self.physics.stabilization.iterations
    }

    pub fn font_size(&self) -> u32 {
        self.nodes.font.size
    }

    pub fn arrow(&self) -> ArrowHead {
        self.edges.arrows.to
    }

    /// Edges are always drawn as straight lines.
    pub fn smooth_edges(&self) -> bool {
        self.edges.smooth
    }

    pub fn hover(&self) -> bool {
        self.interaction.hover
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_shape() {
        let options = RenderOptions::new(&RenderConfig::default(), false);

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "physics": {"enabled": false, "stabilization": {"iterations": 240}},
                "nodes": {"font": {"size": 18}},
                "edges": {"smooth": false, "arrows": {"to": {"enabled": true, "scaleFactor": 0.7f32}}},
                "interaction": {"hover": true}
            })
        );
    }

    #[test]
    fn test_physics_flag() {
        let config = RenderConfig::default();

        assert!(RenderOptions::new(&config, true).physics_enabled());
        assert!(!RenderOptions::new(&config, false).physics_enabled());
        assert_eq!(
            RenderOptions::new(&config, true).stabilization_iterations(),
            RenderOptions::new(&config, false).stabilization_iterations()
        );
    }

    #[test]
    fn test_serialized_scale_factor_is_short() {
        let json = serde_json::to_string(&RenderOptions::new(&RenderConfig::default(), true)).unwrap();
        assert!(json.contains(r#""scaleFactor":0.7"#), "{json}");
        assert!(json.contains(r#""smooth":false"#));
    }
}
