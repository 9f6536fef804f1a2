//! Circular paths
//!
//! Direct trigonometric placement on a circle. No step response is involved,
//! so there is no smoothing or bounce.

use crate::error::Result;
use crate::motion::{Frame, FrameClock, Motion};
use std::f32::consts::TAU;
use sway_core::{Node, Point};

/// Travel direction around the circle (y grows downward on most hosts)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    CounterClockwise,
    Clockwise,
}

impl Direction {
    fn sign(self) -> f32 {
        match self {
            Direction::CounterClockwise => 1.0,
            Direction::Clockwise => -1.0,
        }
    }
}

/// Place a node on a circle, one full turn per `duration`
pub struct Orbit {
    center: Point,
    radius: f32,
    /// Time offset into the turn, in seconds
    start: f32,
    direction: Direction,
    clock: FrameClock,
}

impl Orbit {
    pub fn new(center: Point, radius: f32, duration: f32) -> Result<Self> {
        let clock = FrameClock::new(duration)?;

        tracing::debug!(?center, radius, duration, "orbit");

        Ok(Self {
            center,
            radius,
            start: 0.0,
            direction: Direction::default(),
            clock,
        })
    }

    /// Builder: begin the turn `start` seconds in
    pub fn starting_at(mut self, start: f32) -> Self {
        self.start = start;
        self
    }

    /// Builder: set travel direction
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Position on the circle at `elapsed`
    pub fn position_at(&self, elapsed: f32) -> Point {
        let phase = (elapsed + self.start) / self.clock.duration();
        let angle = TAU * phase;
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin() * self.direction.sign(),
        )
    }
}

impl Motion for Orbit {
    fn duration(&self) -> f32 {
        self.clock.duration()
    }

    fn update(&mut self, node: &mut dyn Node, elapsed: f32) {
        match self.clock.tick(elapsed) {
            Frame::Sample(t) => node.set_position(self.position_at(t)),
            Frame::Final => node.set_position(self.position_at(self.clock.duration())),
            Frame::Done => {}
        }
    }

    fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sway_core::SceneNode;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn test_quarter_turns() {
        let orbit = Orbit::new(Point::new(10.0, 10.0), 5.0, 4.0).unwrap();

        assert!(close(orbit.position_at(0.0), Point::new(15.0, 10.0)));
        assert!(close(orbit.position_at(1.0), Point::new(10.0, 15.0)));
        assert!(close(orbit.position_at(2.0), Point::new(5.0, 10.0)));
        assert!(close(orbit.position_at(3.0), Point::new(10.0, 5.0)));
    }

    #[test]
    fn test_clockwise_mirrors_y() {
        let ccw = Orbit::new(Point::ZERO, 2.0, 1.0).unwrap();
        let cw = Orbit::new(Point::ZERO, 2.0, 1.0)
            .unwrap()
            .direction(Direction::Clockwise);

        for i in 0..8 {
            let t = i as f32 * 0.125;
            let a = ccw.position_at(t);
            let b = cw.position_at(t);
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, -b.y);
        }
    }

    #[test]
    fn test_starting_time_shifts_phase() {
        let orbit = Orbit::new(Point::ZERO, 1.0, 2.0).unwrap().starting_at(0.5);
        assert!(close(orbit.position_at(0.0), Point::new(0.0, 1.0)));
    }

    #[test]
    fn test_orbit_keeps_radius_while_playing() {
        let center = Point::new(-3.0, 8.0);
        let mut node = SceneNode::default();
        let mut orbit = Orbit::new(center, 6.0, 1.5).unwrap();

        for i in 0..=30 {
            orbit.update(&mut node, i as f32 * 0.05);
            assert!((node.position().distance(center) - 6.0).abs() < 1e-4);
        }

        assert!(orbit.is_finished());
        assert!(close(node.position(), Point::new(3.0, 8.0)));
    }
}
