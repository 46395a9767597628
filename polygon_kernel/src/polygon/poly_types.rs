//! Supporting public types used by the polygon methods.

use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Winding direction of a polygon, derived from its signed area.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Vertexes wind clockwise (negative signed area). Zero area rings are also reported as
    /// clockwise.
    Clockwise,
    /// Vertexes wind counter clockwise (positive signed area).
    CounterClockwise,
}

impl Orientation {
    /// Returns the opposite orientation.
    #[inline]
    pub fn inverted(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Result from calling [Polygon::closest_point](crate::polygon::Polygon::closest_point).
#[derive(Debug, Copy, Clone)]
pub struct ClosestPointResult<T>
where
    T: Real,
{
    /// The start vertex index of the closest edge.
    pub edge_start_index: usize,
    /// The closest point on the closest edge.
    pub edge_point: Vector2<T>,
    /// The distance between the points.
    pub distance: T,
}

/// Result from calling [Polygon::ray_intersect](crate::polygon::Polygon::ray_intersect).
#[derive(Debug, Copy, Clone)]
pub struct RayHit<T>
where
    T: Real,
{
    /// Start vertex index of the edge hit.
    pub edge_start_index: usize,
    /// Point where the ray meets the edge.
    pub point: Vector2<T>,
    /// Distance along the ray, in multiples of the ray direction length.
    pub distance: T,
}

/// Boolean operation to apply to two polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BooleanOp {
    /// Area covered by either polygon.
    Union,
    /// Area of the first polygon not covered by the second.
    Difference,
    /// Area covered by both polygons.
    Intersection,
}

/// Options for boolean operations between polygons.
#[derive(Debug, Clone)]
pub struct PolygonBooleanOptions<T>
where
    T: Real,
{
    /// Fuzzy comparison epsilon used for parallel edge detection and for deciding that two
    /// positions (intersect points, vertexes) are the same.
    pub pos_equal_eps: T,
}

impl<T> PolygonBooleanOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from(1e-3).unwrap(),
        }
    }
}

impl<T> Default for PolygonBooleanOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Options for the pole of inaccessibility search.
#[derive(Debug, Clone)]
pub struct PoleOptions<T>
where
    T: Real,
{
    /// Stopping tolerance for the search. If `None` it is derived from the polygon size as
    /// `min(1, h / 50)` where `h` is half the initial cell size.
    pub precision: Option<T>,
    /// Maximum number of cells probed before the best candidate found is returned.
    pub max_probes: usize,
}

impl<T> PoleOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            precision: None,
            max_probes: 1000,
        }
    }
}

impl<T> Default for PoleOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Options for convex hull construction.
#[derive(Debug, Clone, Default)]
pub struct ConvexHullOptions {
    /// Discard points strictly inside the quadrilateral of the extreme points before wrapping.
    /// Off by default.
    pub cull_interior_points: bool,
}

impl ConvexHullOptions {
    #[inline]
    pub fn new() -> Self {
        Self {
            cull_interior_points: false,
        }
    }
}
