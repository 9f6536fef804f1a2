//! Animated node capability
//!
//! Motions never own the object they animate. They receive a `&mut dyn Node`
//! on every frame and read-modify-write the attribute they drive, which keeps
//! them agnostic of the host scene graph.

use crate::geometry::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A host object whose transform and text size can be driven by motions.
///
/// Every attribute is independently settable. Rotation is in degrees.
pub trait Node {
    fn position(&self) -> Point;
    fn set_position(&mut self, position: Point);

    fn scale(&self) -> Vec2;
    fn set_scale(&mut self, scale: Vec2);

    fn rotation(&self) -> f32;
    fn set_rotation(&mut self, degrees: f32);

    fn font_size(&self) -> f32;
    fn set_font_size(&mut self, size: f32);
}

/// Plain-data node, useful for headless playback and tests
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub position: Point,
    pub scale: Vec2,
    pub rotation: f32,
    pub font_size: f32,
}

impl SceneNode {
    pub const DEFAULT_FONT_SIZE: f32 = 16.0;

    /// Node at `position` with unit scale, no rotation and the default font size
    pub fn at(position: Point) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder: set scale
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Builder: set rotation in degrees
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Builder: set font size
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            font_size: Self::DEFAULT_FONT_SIZE,
        }
    }
}

impl Node for SceneNode {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn scale(&self) -> Vec2 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }
}
