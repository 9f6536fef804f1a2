//! Sway Animation System
//!
//! Step-response motion curves and the motions that apply them to nodes.
//!
//! # Features
//!
//! - **Step Responses**: closed-form first-order (smooth) and second-order
//!   (bouncy) curves, O(1) per sample with no integration drift
//! - **Node Motions**: move, scale and rotate a [`sway_core::Node`] by
//!   incremental deltas, snapping to the exact target at the end
//! - **Paths**: circular orbits placed by direct parameterization
//! - **Text**: linear font size interpolation
//! - **Groups**: play motions in parallel with start offsets
//!
//! # Example
//!
//! ```rust
//! use sway_animation::{Motion, MoveTo};
//! use sway_core::{Node, Point, SceneNode};
//!
//! let mut node = SceneNode::default();
//! let mut motion = MoveTo::new(Point::ZERO, Point::new(120.0, 40.0), 0.5, Some(0.2))?;
//!
//! // The host calls update once per frame with the elapsed time
//! for frame in 0..=30 {
//!     motion.update(&mut node, frame as f32 / 60.0);
//! }
//!
//! assert!(motion.is_finished());
//! assert_eq!(node.position(), Point::new(120.0, 40.0));
//! # Ok::<(), sway_animation::CurveError>(())
//! ```

pub mod error;
pub mod group;
pub mod motion;
pub mod path;
pub mod step_response;
pub mod text;

pub use error::{CurveError, Result};
pub use group::{MotionGroup, MotionId};
pub use motion::{Motion, MoveTo, RotateTo, ScaleTo};
pub use path::{Direction, Orbit};
pub use step_response::{Curve, CurveConfig, CurveProfile, CurveState, SETTLING_TIME_CONSTANTS};
pub use text::FontSizeTo;
