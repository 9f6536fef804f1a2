//! Geometry primitives
//!
//! Plain `f32` points and vectors. Motions only need a handful of operations
//! from them: Euclidean distance, vector length and `atan2` angle.

use serde::{Deserialize, Serialize};

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f32 {
        Vec2::between(*self, other).length()
    }

    /// Offset the point by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Point::new(x, y)
    }
}

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Uniform vector with both components set to `value`
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }

    /// Displacement from `from` to `to`
    pub fn between(from: Point, to: Point) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Angle in radians measured from the positive x axis, `atan2(y, x)`
    pub fn angle(&self) -> f32 {
        self.y.atan2(self.x)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_distance_is_euclidean() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_angle_uses_atan2_quadrants() {
        assert_eq!(Vec2::new(1.0, 0.0).angle(), 0.0);
        assert!((Vec2::new(0.0, 3.0).angle() - FRAC_PI_2).abs() < 1e-6);
        assert!((Vec2::new(-1.0, -1.0).angle() + 3.0 * std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        // Zero vector has a defined angle, so zero-length moves stay finite
        assert_eq!(Vec2::ZERO.angle(), 0.0);
    }

    #[test]
    fn test_between_points() {
        let v = Vec2::between(Point::new(2.0, 2.0), Point::new(5.0, -2.0));
        assert_eq!(v, Vec2::new(3.0, -4.0));
        assert_eq!(v.length(), 5.0);
        assert_eq!(Vec2::between(Point::ZERO, Point::ZERO), Vec2::ZERO);
    }
}
