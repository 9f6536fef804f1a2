//! Integration tests for curves + motions + groups
//!
//! These tests verify that:
//! - Motions driven at irregular frame rates land exactly on their targets
//! - A bounce layered on top of a base move composes by addition
//! - Groups drive different attributes of one node independently

use sway_animation::{
    Curve, Direction, FontSizeTo, Motion, MotionGroup, MoveTo, Orbit, RotateTo, ScaleTo,
};
use sway_core::{Node, Point, SceneNode, Vec2};

/// Frame times with jitter, the way a real host delivers them
fn jittered_frames(duration: f32) -> Vec<f32> {
    let steps: [f32; 6] = [0.016, 0.017, 0.033, 0.008, 0.016, 0.050];
    let mut frames = vec![0.0];
    let mut t = 0.0f32;
    let mut i = 0;
    while t < duration {
        t += steps[i % steps.len()];
        frames.push(t.min(duration));
        i += 1;
    }
    frames
}

/// Test that irregular frame pacing still ends on the exact target
#[test]
fn test_irregular_frames_reach_target() {
    let mut node = SceneNode::at(Point::new(3.0, -7.0));
    let target = Point::new(-41.5, 93.25);
    let mut motion = MoveTo::new(node.position(), target, 1.3, Some(0.35)).unwrap();

    for t in jittered_frames(1.3) {
        motion.update(&mut node, t);
    }

    assert!(motion.is_finished());
    assert_eq!(node.position(), target);
}

/// Test that positions track the summed curves before the snap
#[test]
fn test_frame_positions_match_curves() {
    let from = Point::new(0.0, 0.0);
    let to = Point::new(0.0, -80.0);
    let mut node = SceneNode::at(from);
    let mut motion = MoveTo::new(from, to, 2.0, None).unwrap();
    let mut reference = Curve::new_real(-80.0, 2.0).unwrap();

    for t in jittered_frames(2.0) {
        if t >= 2.0 {
            break;
        }
        motion.update(&mut node, t);
        assert!((node.position().y - reference.evaluate(t)).abs() < 1e-3, "t={t}");
        assert!(node.position().x.abs() < 1e-3);
    }
}

/// Test a base move plus a bounce offset played on the same node
#[test]
fn test_bounce_layered_on_move() {
    let mut node = SceneNode::default();
    let mut group = MotionGroup::new();
    group
        .add(0.0, MoveTo::new(Point::ZERO, Point::new(200.0, 0.0), 1.0, None).unwrap())
        .unwrap();
    // A bounce that starts halfway and ends 30 below the base target
    group
        .add(
            0.5,
            MoveTo::new(Point::new(200.0, 0.0), Point::new(200.0, 30.0), 1.0, Some(0.3)).unwrap(),
        )
        .unwrap();

    let base = Curve::new_real(200.0, 1.0).unwrap();
    let bounce = Curve::new_complex(30.0, 0.3, 1.0).unwrap();

    for i in 0..20 {
        let t = i as f32 * 0.045;
        group.update(&mut node, t);

        let expected_y = if t >= 0.5 {
            bounce.config().value_at(t - 0.5)
        } else {
            0.0
        };
        assert!((node.position().x - base.config().value_at(t)).abs() < 1e-2, "t={t}");
        assert!((node.position().y - expected_y).abs() < 1e-2, "t={t}");
    }

    group.update(&mut node, 1.5);
    assert!(group.is_finished());
    assert_eq!(node.position(), Point::new(200.0, 30.0));
}

/// Test one group animating every attribute of a node
#[test]
fn test_group_drives_all_attributes() {
    let mut node = SceneNode::at(Point::new(50.0, 50.0)).with_font_size(14.0);
    let mut group = MotionGroup::new();
    group.add(0.0, ScaleTo::uniform(1.0, 1.5, 0.4, Some(0.2)).unwrap()).unwrap();
    group.add(0.1, RotateTo::new(0.0, 360.0, 0.6, None).unwrap()).unwrap();
    group.add(0.0, FontSizeTo::new(14.0, 28.0, 0.7).unwrap()).unwrap();
    group
        .add(
            0.2,
            Orbit::new(Point::new(50.0, 50.0), 10.0, 0.5)
                .unwrap()
                .direction(Direction::Clockwise),
        )
        .unwrap();
    assert!((group.duration() - 0.7).abs() < 1e-6);

    let mut t = 0.0;
    while !group.is_finished() {
        group.update(&mut node, t);
        t += 1.0 / 60.0;
        assert!(t < 2.0, "group never finished");
    }

    assert_eq!(node.scale(), Vec2::splat(1.5));
    assert_eq!(node.rotation(), 360.0);
    assert_eq!(node.font_size(), 28.0);
    assert!((node.position().distance(Point::new(60.0, 50.0))) < 1e-3);
}
