//! A 2D simple polygon geometry kernel.
//!
//! A [Polygon](polygon::Polygon) is an ordered ring of 2D points (implicitly closed, no
//! duplicated closing point). The kernel provides containment and nearest point queries, signed
//! distance, convex hulls, boolean combination (union, difference, intersection) of two
//! polygons, and the pole of inaccessibility (the interior point farthest from the boundary).
//!
//! All algorithms assume simple (non self intersecting) rings without holes, and rely on an
//! epsilon tolerance rather than exact arithmetic.
//!
//! # Examples
//!
//! ```
//! # use polygon_kernel::polygon;
//! # use polygon_kernel::core::math::Vector2;
//! # use polygon_kernel::core::traits::FuzzyEq;
//! let a = polygon![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
//! let b = polygon![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)];
//!
//! assert!(a.contains_point(Vector2::new(1.0, 1.0)));
//! assert!(a.signed_distance(Vector2::new(1.0, 1.0)).unwrap().fuzzy_eq(1.0));
//!
//! let union = a.union(&b).unwrap();
//! assert!(union.area().fuzzy_eq(7.0));
//! let overlap = a.intersection(&b).unwrap();
//! assert!(overlap.area().fuzzy_eq(1.0));
//! ```
#[macro_use]
mod macros;
pub mod core;
mod error;
pub mod polygon;

pub use static_aabb2d_index::AABB;

pub use crate::error::{PolygonError, PolygonResult};
