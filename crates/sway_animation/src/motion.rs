//! Node motions
//!
//! A motion owns one or two [`Curve`]s and, once per frame, writes the change
//! since the previous frame into a [`Node`] attribute. Applying deltas rather
//! than absolute values lets several motions drive the same attribute at once
//! and lets the host move the node between frames without being overwritten.
//!
//! When the elapsed time reaches the duration the attribute is snapped to the
//! exact target, which removes the residual the curve leaves behind.

use crate::error::{ensure_positive, Result};
use crate::step_response::Curve;
use sway_core::{Node, Point, Vec2};

/// Something that animates a node over a fixed duration
pub trait Motion: Send {
    /// Total duration in seconds
    fn duration(&self) -> f32;

    /// Apply the frame at `elapsed` seconds since the motion started
    ///
    /// `elapsed` must be non-decreasing across calls. Calls after the motion
    /// finished are ignored.
    fn update(&mut self, node: &mut dyn Node, elapsed: f32);

    fn is_finished(&self) -> bool;
}

/// What a motion should do for a given frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Frame {
    /// Sample the curves at this elapsed time
    Sample(f32),
    /// Duration reached: snap to the target
    Final,
    /// Already snapped, nothing to do
    Done,
}

/// Tracks elapsed time for a single motion run
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrameClock {
    duration: f32,
    last_elapsed: Option<f32>,
    finished: bool,
}

impl FrameClock {
    pub(crate) fn new(duration: f32) -> Result<Self> {
        Ok(Self {
            duration: ensure_positive("duration", duration)?,
            last_elapsed: None,
            finished: false,
        })
    }

    pub(crate) fn duration(&self) -> f32 {
        self.duration
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }

    pub(crate) fn tick(&mut self, elapsed: f32) -> Frame {
        if self.finished {
            return Frame::Done;
        }

        if let Some(last) = self.last_elapsed {
            if elapsed < last {
                tracing::warn!(elapsed, last, "motion time went backwards");
            }
        }
        self.last_elapsed = Some(elapsed);

        if elapsed >= self.duration {
            self.finished = true;
            Frame::Final
        } else {
            Frame::Sample(elapsed)
        }
    }
}

fn axis_curve(gain: f32, overshoot: Option<f32>, duration: f32) -> Result<Curve> {
    Curve::with_overshoot(gain, overshoot.unwrap_or(0.0), duration)
}

// ============================================================================
// Position
// ============================================================================

/// Move a node from one point to another
pub struct MoveTo {
    target: Point,
    x: Curve,
    y: Curve,
    clock: FrameClock,
}

impl MoveTo {
    /// `overshoot` of `None` or `Some(0.0)` moves without bouncing
    pub fn new(from: Point, to: Point, duration: f32, overshoot: Option<f32>) -> Result<Self> {
        let clock = FrameClock::new(duration)?;

        let distance = from.distance(to);
        let angle = Vec2::between(from, to).angle();

        tracing::debug!(?from, ?to, distance, angle, duration, ?overshoot, "move");

        Ok(Self {
            target: to,
            x: axis_curve(distance * angle.cos(), overshoot, duration)?,
            y: axis_curve(distance * angle.sin(), overshoot, duration)?,
            clock,
        })
    }

    pub fn target(&self) -> Point {
        self.target
    }
}

impl Motion for MoveTo {
    fn duration(&self) -> f32 {
        self.clock.duration()
    }

    fn update(&mut self, node: &mut dyn Node, elapsed: f32) {
        match self.clock.tick(elapsed) {
            Frame::Sample(t) => {
                let dx = self.x.advance(t);
                let dy = self.y.advance(t);
                node.set_position(node.position().offset(dx, dy));
            }
            Frame::Final => {
                tracing::trace!(to = ?self.target, "move finished");
                node.set_position(self.target);
            }
            Frame::Done => {}
        }
    }

    fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }
}

// ============================================================================
// Scale
// ============================================================================

enum ScaleCurves {
    /// One curve shared by both axes
    Uniform(Curve),
    PerAxis { x: Curve, y: Curve },
}

/// Scale a node, either uniformly or per axis
pub struct ScaleTo {
    target: Vec2,
    curves: ScaleCurves,
    clock: FrameClock,
}

impl ScaleTo {
    /// Scale both axes from `from` to `to` with a single curve
    pub fn uniform(from: f32, to: f32, duration: f32, overshoot: Option<f32>) -> Result<Self> {
        let clock = FrameClock::new(duration)?;

        tracing::debug!(from, to, duration, ?overshoot, "uniform scale");

        Ok(Self {
            target: Vec2::splat(to),
            curves: ScaleCurves::Uniform(axis_curve(to - from, overshoot, duration)?),
            clock,
        })
    }

    /// Scale each axis independently
    pub fn new(from: Vec2, to: Vec2, duration: f32, overshoot: Option<f32>) -> Result<Self> {
        let clock = FrameClock::new(duration)?;

        tracing::debug!(?from, ?to, duration, ?overshoot, "scale");

        Ok(Self {
            target: to,
            curves: ScaleCurves::PerAxis {
                x: axis_curve(to.x - from.x, overshoot, duration)?,
                y: axis_curve(to.y - from.y, overshoot, duration)?,
            },
            clock,
        })
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }
}

impl Motion for ScaleTo {
    fn duration(&self) -> f32 {
        self.clock.duration()
    }

    fn update(&mut self, node: &mut dyn Node, elapsed: f32) {
        match self.clock.tick(elapsed) {
            Frame::Sample(t) => {
                let (dx, dy) = match &mut self.curves {
                    ScaleCurves::Uniform(curve) => {
                        let d = curve.advance(t);
                        (d, d)
                    }
                    ScaleCurves::PerAxis { x, y } => (x.advance(t), y.advance(t)),
                };
                let scale = node.scale();
                node.set_scale(Vec2::new(scale.x + dx, scale.y + dy));
            }
            Frame::Final => {
                tracing::trace!(to = ?self.target, "scale finished");
                node.set_scale(self.target);
            }
            Frame::Done => {}
        }
    }

    fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }
}

// ============================================================================
// Rotation
// ============================================================================

/// Sweep a node's rotation between two angles in degrees
pub struct RotateTo {
    target: f32,
    curve: Curve,
    clock: FrameClock,
}

impl RotateTo {
    pub fn new(from: f32, to: f32, duration: f32, overshoot: Option<f32>) -> Result<Self> {
        let clock = FrameClock::new(duration)?;

        tracing::debug!(from, to, duration, ?overshoot, "rotate");

        Ok(Self {
            target: to,
            curve: axis_curve(to - from, overshoot, duration)?,
            clock,
        })
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

impl Motion for RotateTo {
    fn duration(&self) -> f32 {
        self.clock.duration()
    }

    fn update(&mut self, node: &mut dyn Node, elapsed: f32) {
        match self.clock.tick(elapsed) {
            Frame::Sample(t) => {
                let delta = self.curve.advance(t);
                node.set_rotation(node.rotation() + delta);
            }
            Frame::Final => {
                tracing::trace!(to = self.target, "rotate finished");
                node.set_rotation(self.target);
            }
            Frame::Done => {}
        }
    }

    fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }
}
