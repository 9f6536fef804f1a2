//! Headless scene playback
//!
//! Stands in for a host frame loop: a fixed-step clock drives a
//! [`MotionGroup`] built from the scene until every motion has finished.

use anyhow::{Context, Result};
use serde::Serialize;
use sway_animation::{
    Curve, Direction, FontSizeTo, Motion, MotionGroup, MoveTo, Orbit, RotateTo, ScaleTo,
};
use sway_core::{Point, SceneNode, Vec2};

use crate::config::{MotionEntry, MotionKind, OrbitDirection, SceneConfig};

/// Upper bound on frames produced by one playback or curve sampling run
pub const MAX_FRAMES: u64 = 1_000_000;

/// Frames needed to cover `seconds` at `fps`, plus one for rounding at the end
fn frame_budget(seconds: f32, fps: u32) -> Result<u64> {
    let frames = (f64::from(seconds) * f64::from(fps)).ceil() + 1.0;
    if !frames.is_finite() || frames > MAX_FRAMES as f64 {
        anyhow::bail!("{seconds}s at {fps} fps needs more than {MAX_FRAMES} frames");
    }
    Ok(frames as u64)
}

/// Node state after one frame
#[derive(Debug, Serialize)]
pub struct FrameSample {
    pub frame: u32,
    pub time: f32,
    pub node: SceneNode,
}

/// One sample of a single curve
#[derive(Debug, Serialize)]
pub struct CurveSample {
    pub time: f32,
    pub value: f32,
    pub delta: f32,
}

/// Build the motion for one scene entry
fn build_motion(entry: &MotionEntry, initial: &SceneNode) -> Result<Box<dyn Motion>> {
    let duration = entry.duration;
    let motion: Box<dyn Motion> = match entry.kind {
        MotionKind::Move {
            from,
            to,
            overshoot,
        } => {
            let from = from.map(Point::from).unwrap_or(initial.position);
            Box::new(MoveTo::new(from, Point::from(to), duration, overshoot)?)
        }
        MotionKind::Scale {
            from,
            to,
            overshoot,
        } => {
            let from = from.unwrap_or(initial.scale.x);
            Box::new(ScaleTo::uniform(from, to, duration, overshoot)?)
        }
        MotionKind::ScaleXy {
            from,
            to,
            overshoot,
        } => {
            let from = from.map(Vec2::from).unwrap_or(initial.scale);
            Box::new(ScaleTo::new(from, Vec2::from(to), duration, overshoot)?)
        }
        MotionKind::Rotate {
            from,
            to,
            overshoot,
        } => {
            let from = from.unwrap_or(initial.rotation);
            Box::new(RotateTo::new(from, to, duration, overshoot)?)
        }
        MotionKind::Orbit {
            center,
            radius,
            start,
            direction,
        } => {
            let direction = match direction {
                OrbitDirection::CounterClockwise => Direction::CounterClockwise,
                OrbitDirection::Clockwise => Direction::Clockwise,
            };
            Box::new(
                Orbit::new(Point::from(center), radius, duration)?
                    .starting_at(start)
                    .direction(direction),
            )
        }
        MotionKind::FontSize { from, to } => {
            let from = from.unwrap_or(initial.font_size);
            Box::new(FontSizeTo::new(from, to, duration)?)
        }
    };
    Ok(motion)
}

/// Build the group for a whole scene
pub fn build_group(scene: &SceneConfig) -> Result<MotionGroup> {
    let initial = scene.node.to_node();
    let mut group = MotionGroup::new();

    for (index, entry) in scene.motions.iter().enumerate() {
        let context = || {
            format!(
                "Invalid motion #{} in scene `{}`",
                index + 1,
                scene.scene.name
            )
        };
        let motion = build_motion(entry, &initial).with_context(context)?;
        group
            .add_boxed(entry.offset, motion)
            .with_context(context)?;
    }

    Ok(group)
}

/// Play a scene to completion, one sample per frame
pub fn play(scene: &SceneConfig) -> Result<Vec<FrameSample>> {
    if scene.scene.fps == 0 {
        anyhow::bail!("Scene `{}` has fps = 0", scene.scene.name);
    }

    let mut node = scene.node.to_node();
    let mut group = build_group(scene)?;
    let step = 1.0 / scene.scene.fps as f32;
    // One spare frame in case `frame * step` lands just short of the end
    let last_frame = frame_budget(group.duration(), scene.scene.fps)?;

    tracing::info!(
        scene = %scene.scene.name,
        motions = group.len(),
        duration = group.duration(),
        fps = scene.scene.fps,
        "playing scene"
    );

    let mut frames = Vec::new();
    for frame in 0..=last_frame as u32 {
        // Multiply rather than accumulate so long scenes don't drift
        let time = frame as f32 * step;
        group.update(&mut node, time);
        frames.push(FrameSample { frame, time, node });

        if group.is_finished() {
            break;
        }
    }

    if !group.is_finished() {
        tracing::warn!(
            active = group.active_count(),
            frames = frames.len(),
            "scene stopped before every motion finished"
        );
    }

    tracing::debug!(frames = frames.len(), "scene finished");
    Ok(frames)
}

/// Sample a single curve at a fixed rate from 0 to `until` inclusive
pub fn sample_curve(curve: &mut Curve, fps: u32, until: f32) -> Result<Vec<CurveSample>> {
    if fps == 0 {
        anyhow::bail!("fps must be at least 1");
    }
    if !until.is_finite() || until < 0.0 {
        anyhow::bail!("Sampling window must be a finite value >= 0, got {until}");
    }

    let count = frame_budget(until, fps)? - 1;
    let samples = (0..=count as u32)
        .map(|i| {
            let time = (i as f32 / fps as f32).min(until);
            let delta = curve.advance(time);
            CurveSample {
                time,
                value: curve.last_value(),
                delta,
            }
        })
        .collect();
    Ok(samples)
}
