//! Sway scene file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use sway_core::{Point, SceneNode, Vec2};

/// Top-level scene description (sway.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct SceneConfig {
    pub scene: SceneMeta,
    #[serde(default)]
    pub node: NodeConfig,
    #[serde(default, rename = "motion")]
    pub motions: Vec<MotionEntry>,
}

/// Scene metadata
#[derive(Debug, Deserialize, Serialize)]
pub struct SceneMeta {
    pub name: String,
    /// Playback frame rate
    #[serde(default = "default_fps")]
    pub fps: u32,
}

fn default_fps() -> u32 {
    60
}

/// Initial state of the animated node
#[derive(Debug, Deserialize, Serialize)]
pub struct NodeConfig {
    #[serde(default)]
    pub position: [f32; 2],
    #[serde(default = "default_scale")]
    pub scale: [f32; 2],
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_scale() -> [f32; 2] {
    [1.0, 1.0]
}

fn default_font_size() -> f32 {
    SceneNode::DEFAULT_FONT_SIZE
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            scale: default_scale(),
            rotation: 0.0,
            font_size: default_font_size(),
        }
    }
}

impl NodeConfig {
    pub fn to_node(&self) -> SceneNode {
        SceneNode::at(Point::from(self.position))
            .with_scale(Vec2::from(self.scale))
            .with_rotation(self.rotation)
            .with_font_size(self.font_size)
    }
}

/// One `[[motion]]` table
#[derive(Debug, Deserialize, Serialize)]
pub struct MotionEntry {
    /// Start delay in seconds
    #[serde(default)]
    pub offset: f32,
    pub duration: f32,
    #[serde(flatten)]
    pub kind: MotionKind,
}

/// Motion parameters, selected by `kind`
///
/// Omitted `from` values default to the node's initial state.
#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MotionKind {
    Move {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<[f32; 2]>,
        to: [f32; 2],
        #[serde(default, skip_serializing_if = "Option::is_none")]
        overshoot: Option<f32>,
    },
    Scale {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<f32>,
        to: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        overshoot: Option<f32>,
    },
    ScaleXy {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<[f32; 2]>,
        to: [f32; 2],
        #[serde(default, skip_serializing_if = "Option::is_none")]
        overshoot: Option<f32>,
    },
    Rotate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<f32>,
        to: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        overshoot: Option<f32>,
    },
    Orbit {
        center: [f32; 2],
        radius: f32,
        /// Time offset into the turn, in seconds
        #[serde(default)]
        start: f32,
        #[serde(default)]
        direction: OrbitDirection,
    },
    FontSize {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<f32>,
        to: f32,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitDirection {
    #[default]
    CounterClockwise,
    Clockwise,
}

impl SceneConfig {
    /// Load a scene from a file, or from `sway.toml` inside a directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join("sway.toml")
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No sway.toml found in {}. Run `sway init` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// A small scene exercising a bounce, a rotation and a font change
    pub fn example(name: &str) -> Self {
        Self {
            scene: SceneMeta {
                name: name.to_string(),
                fps: default_fps(),
            },
            node: NodeConfig::default(),
            motions: vec![
                MotionEntry {
                    offset: 0.0,
                    duration: 0.8,
                    kind: MotionKind::Move {
                        from: None,
                        to: [120.0, 40.0],
                        overshoot: Some(0.2),
                    },
                },
                MotionEntry {
                    offset: 0.2,
                    duration: 0.6,
                    kind: MotionKind::Rotate {
                        from: None,
                        to: 90.0,
                        overshoot: None,
                    },
                },
                MotionEntry {
                    offset: 0.0,
                    duration: 1.0,
                    kind: MotionKind::FontSize {
                        from: None,
                        to: 24.0,
                    },
                },
            ],
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize scene")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_scene_uses_defaults() {
        let scene = SceneConfig::from_toml(
            r#"
            [scene]
            name = "empty"
            "#,
        )
        .unwrap();

        assert_eq!(scene.scene.fps, 60);
        assert!(scene.motions.is_empty());
        assert_eq!(scene.node.to_node(), SceneNode::default());
    }

    #[test]
    fn test_parses_every_motion_kind() {
        let scene = SceneConfig::from_toml(
            r#"
            [scene]
            name = "all"
            fps = 30

            [node]
            position = [5.0, 6.0]

            [[motion]]
            kind = "move"
            to = [10.0, 20.0]
            duration = 1
            overshoot = 0.25

            [[motion]]
            kind = "scale"
            to = 2.0
            duration = 0.5
            offset = 0.1

            [[motion]]
            kind = "scale_xy"
            from = [1.0, 1.0]
            to = [2.0, 0.5]
            duration = 0.5

            [[motion]]
            kind = "rotate"
            to = -45.0
            duration = 0.3

            [[motion]]
            kind = "orbit"
            center = [0.0, 0.0]
            radius = 4.0
            direction = "clockwise"
            duration = 2.0

            [[motion]]
            kind = "font_size"
            to = 32.0
            duration = 0.4
            "#,
        )
        .unwrap();

        assert_eq!(scene.scene.fps, 30);
        assert_eq!(scene.node.position, [5.0, 6.0]);
        assert_eq!(scene.motions.len(), 6);

        assert_eq!(scene.motions[0].duration, 1.0);
        assert!(matches!(
            scene.motions[0].kind,
            MotionKind::Move {
                from: None,
                overshoot: Some(o),
                ..
            } if o == 0.25
        ));
        assert_eq!(scene.motions[1].offset, 0.1);
        assert!(matches!(
            scene.motions[4].kind,
            MotionKind::Orbit {
                direction: OrbitDirection::Clockwise,
                start,
                ..
            } if start == 0.0
        ));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = SceneConfig::from_toml(
            r#"
            [scene]
            name = "bad"

            [[motion]]
            kind = "teleport"
            duration = 1.0
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_example_round_trips_through_toml() {
        let example = SceneConfig::example("demo");
        let text = example.to_toml().unwrap();
        let parsed = SceneConfig::from_toml(&text).unwrap();

        assert_eq!(parsed.scene.name, "demo");
        assert_eq!(parsed.motions.len(), example.motions.len());
        assert_eq!(parsed.motions[1].offset, 0.2);
    }
}
