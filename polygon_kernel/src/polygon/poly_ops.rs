//! Polygon methods backed by the algorithms in [internal](super::internal).
use super::{
    internal::{convex_hull::convex_hull, pole::pole_of_inaccessibility, poly_boolean::polygon_boolean},
    BooleanOp, ConvexHullOptions, PoleOptions, Polygon, PolygonBooleanOptions,
};
use crate::{
    core::{math::Vector2, traits::Real},
    PolygonResult,
};

impl<T> Polygon<T>
where
    T: Real,
{
    /// Perform a boolean `operation` between this polygon and another using default options.
    ///
    /// See [Polygon::boolean_opt] for more information.
    #[inline]
    pub fn boolean(&self, other: &Polygon<T>, operation: BooleanOp) -> PolygonResult<Polygon<T>> {
        self.boolean_opt(other, operation, &PolygonBooleanOptions::new())
    }

    /// Perform a boolean `operation` between this polygon and another.
    ///
    /// Crossing points are inserted into both boundaries, then the result is traced along this
    /// polygon and detours along `other` between crossings. When the boundaries do not cross:
    /// * union of nested polygons returns the outer one, union of disjoint polygons joins both
    ///   rings with a zero width bridge,
    /// * difference returns this polygon unchanged if they are disjoint, an empty polygon if
    ///   `other` covers this polygon, and [PolygonError::UnsupportedTopology] if `other` is nested
    ///   inside (the result would have a hole),
    /// * intersection returns the nested polygon, or an empty polygon if disjoint.
    ///
    /// Both polygons must be simple (not self intersecting), otherwise the result is undefined.
    ///
    /// # Errors
    ///
    /// [PolygonError::InvalidPolygon] if either polygon has fewer than 3 vertexes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon_kernel::polygon;
    /// # use polygon_kernel::polygon::*;
    /// # use polygon_kernel::core::traits::*;
    /// let a = polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    /// let b = polygon![(2.0, -1.0), (6.0, -1.0), (6.0, 5.0), (2.0, 5.0)];
    /// let options = PolygonBooleanOptions::new();
    /// let difference = a.boolean_opt(&b, BooleanOp::Difference, &options).unwrap();
    /// assert!(difference.area().fuzzy_eq(8.0));
    /// ```
    ///
    /// [PolygonError::UnsupportedTopology]: crate::PolygonError::UnsupportedTopology
    /// [PolygonError::InvalidPolygon]: crate::PolygonError::InvalidPolygon
    #[inline]
    pub fn boolean_opt(
        &self,
        other: &Polygon<T>,
        operation: BooleanOp,
        options: &PolygonBooleanOptions<T>,
    ) -> PolygonResult<Polygon<T>> {
        polygon_boolean(self, other, operation, options)
    }

    /// Area covered by either polygon.
    #[inline]
    pub fn union(&self, other: &Polygon<T>) -> PolygonResult<Polygon<T>> {
        self.boolean(other, BooleanOp::Union)
    }

    /// Area of this polygon not covered by `other`.
    #[inline]
    pub fn difference(&self, other: &Polygon<T>) -> PolygonResult<Polygon<T>> {
        self.boolean(other, BooleanOp::Difference)
    }

    /// Area covered by both polygons.
    #[inline]
    pub fn intersection(&self, other: &Polygon<T>) -> PolygonResult<Polygon<T>> {
        self.boolean(other, BooleanOp::Intersection)
    }

    /// Convex hull of a set of points using default options.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon_kernel::polygon::Polygon;
    /// # use polygon_kernel::core::math::Vector2;
    /// let points = vec![
    ///     Vector2::new(0.0, 0.0),
    ///     Vector2::new(4.0, 0.0),
    ///     Vector2::new(2.0, 1.0),
    ///     Vector2::new(4.0, 4.0),
    ///     Vector2::new(0.0, 4.0),
    /// ];
    /// let hull = Polygon::convex_hull(&points).unwrap();
    /// assert_eq!(hull.vertex_count(), 4);
    /// assert!(!hull.vertexes().contains(&Vector2::new(2.0, 1.0)));
    /// ```
    #[inline]
    pub fn convex_hull(points: &[Vector2<T>]) -> PolygonResult<Polygon<T>> {
        Self::convex_hull_opt(points, &ConvexHullOptions::new())
    }

    /// Convex hull of a set of points.
    ///
    /// The hull is counter clockwise and only contains input points.
    ///
    /// # Errors
    ///
    /// [PolygonError::InsufficientPoints](crate::PolygonError::InsufficientPoints) if fewer than 3
    /// points are given.
    #[inline]
    pub fn convex_hull_opt(
        points: &[Vector2<T>],
        options: &ConvexHullOptions,
    ) -> PolygonResult<Polygon<T>> {
        convex_hull(points, options)
    }

    /// Point inside the polygon farthest from the boundary using default options.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon_kernel::polygon;
    /// # use polygon_kernel::core::math::Vector2;
    /// let square = polygon![(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
    /// let pole = square.pole_of_inaccessibility().unwrap();
    /// assert!(pole.length() < 0.01);
    /// ```
    #[inline]
    pub fn pole_of_inaccessibility(&self) -> PolygonResult<Vector2<T>> {
        self.pole_of_inaccessibility_opt(&PoleOptions::new())
    }

    /// Point inside the polygon farthest from the boundary.
    ///
    /// # Errors
    ///
    /// [PolygonError::InvalidPolygon](crate::PolygonError::InvalidPolygon) if the polygon has
    /// fewer than 3 vertexes.
    #[inline]
    pub fn pole_of_inaccessibility_opt(
        &self,
        options: &PoleOptions<T>,
    ) -> PolygonResult<Vector2<T>> {
        pole_of_inaccessibility(self, options)
    }
}
