//! Algorithm implementations behind the [Polygon](crate::polygon::Polygon) methods.
//!
//! These are exposed for callers that need the building blocks directly (e.g. the raw boundary
//! crossings), most code should use the methods on [Polygon](crate::polygon::Polygon).
pub mod convex_hull;
pub mod pole;
pub mod poly_boolean;
pub mod poly_bridge;
mod poly_intersects;

pub use poly_intersects::{find_intersects, PolygonIntersect};
