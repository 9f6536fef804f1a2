//! Sway Core
//!
//! Foundational types shared by the Sway motion crates:
//!
//! - **Geometry**: 2D points and vectors with the distance, length and angle
//!   helpers motions use to split a displacement into per-axis gains
//! - **Node**: the capability a host object exposes so motions can drive its
//!   position, scale, rotation and font size
//!
//! # Example
//!
//! ```rust
//! use sway_core::{Node, Point, SceneNode, Vec2};
//!
//! let mut node = SceneNode::at(Point::new(10.0, 20.0));
//! node.set_position(node.position().offset(5.0, 0.0));
//!
//! let travel = Vec2::between(Point::new(10.0, 20.0), node.position());
//! assert_eq!(travel.length(), 5.0);
//! assert_eq!(travel.angle(), 0.0);
//! ```

pub mod geometry;
pub mod node;

pub use geometry::{Point, Vec2};
pub use node::{Node, SceneNode};
