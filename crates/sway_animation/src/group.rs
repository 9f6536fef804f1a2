//! Motion groups
//!
//! Play several motions against one node, each starting at its own offset.
//! Every motion keeps its own curve state and applies deltas, so overlapping
//! motions on the same attribute add up.

use crate::error::{ensure_finite, Result};
use crate::motion::Motion;
use slotmap::{new_key_type, SlotMap};
use sway_core::Node;

new_key_type! {
    pub struct MotionId;
}

/// An entry in a group
struct GroupEntry {
    /// Start delay in seconds from group start
    offset: f32,
    motion: Box<dyn Motion>,
}

/// Motions played in parallel with per-motion start offsets
pub struct MotionGroup {
    entries: SlotMap<MotionId, GroupEntry>,
    duration: f32,
}

impl MotionGroup {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            duration: 0.0,
        }
    }

    /// Add a motion that starts `offset` seconds after the group
    ///
    /// Negative offsets start the motion part-way through. Fails when the
    /// offset is NaN or infinite.
    pub fn add(&mut self, offset: f32, motion: impl Motion + 'static) -> Result<MotionId> {
        self.add_boxed(offset, Box::new(motion))
    }

    /// Same as [`MotionGroup::add`] for an already boxed motion
    pub fn add_boxed(&mut self, offset: f32, motion: Box<dyn Motion>) -> Result<MotionId> {
        let offset = ensure_finite("offset", offset)?;
        self.duration = self.duration.max(end_time(offset, motion.as_ref()));

        tracing::debug!(offset, duration = motion.duration(), "motion added to group");

        Ok(self.entries.insert(GroupEntry { offset, motion }))
    }

    /// Cancel a motion, leaving the node where it currently is
    pub fn remove(&mut self, id: MotionId) -> Option<Box<dyn Motion>> {
        let removed = self.entries.remove(id).map(|entry| entry.motion);
        self.duration = self
            .entries
            .values()
            .map(|entry| end_time(entry.offset, entry.motion.as_ref()))
            .fold(0.0, f32::max);
        removed
    }

    pub fn get(&self, id: MotionId) -> Option<&dyn Motion> {
        self.entries.get(id).map(|entry| entry.motion.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of motions that have not finished yet
    pub fn active_count(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| !entry.motion.is_finished())
            .count()
    }
}

fn end_time(offset: f32, motion: &dyn Motion) -> f32 {
    (offset + motion.duration()).max(0.0)
}

impl Default for MotionGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl Motion for MotionGroup {
    fn duration(&self) -> f32 {
        self.duration
    }

    fn update(&mut self, node: &mut dyn Node, elapsed: f32) {
        for entry in self.entries.values_mut() {
            let local = elapsed - entry.offset;
            if local < 0.0 || entry.motion.is_finished() {
                continue;
            }
            entry.motion.update(node, local);
        }
    }

    fn is_finished(&self) -> bool {
        self.entries.values().all(|entry| entry.motion.is_finished())
    }
}
