//! Core/common math functions for working with 2D points, segments and intersections.
mod base_math;
mod edge_intersect;
mod vector2;

pub use base_math::*;
pub use edge_intersect::{edge_edge_intr, EdgeEdgeIntr};
pub use vector2::{vec2, Vector2};
