//! Font size interpolation

use crate::error::Result;
use crate::motion::{Frame, FrameClock, Motion};
use sway_core::Node;

/// Linearly resize a node's text
pub struct FontSizeTo {
    from: f32,
    to: f32,
    clock: FrameClock,
}

impl FontSizeTo {
    pub fn new(from: f32, to: f32, duration: f32) -> Result<Self> {
        let clock = FrameClock::new(duration)?;

        tracing::debug!(from, to, duration, "font size");

        Ok(Self { from, to, clock })
    }

    /// Size at `elapsed`, linear between the endpoints
    pub fn size_at(&self, elapsed: f32) -> f32 {
        self.from + (self.to - self.from) * (elapsed / self.clock.duration())
    }
}

impl Motion for FontSizeTo {
    fn duration(&self) -> f32 {
        self.clock.duration()
    }

    fn update(&mut self, node: &mut dyn Node, elapsed: f32) {
        match self.clock.tick(elapsed) {
            Frame::Sample(t) => node.set_font_size(self.size_at(t)),
            Frame::Final => node.set_font_size(self.to),
            Frame::Done => {}
        }
    }

    fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }
}
