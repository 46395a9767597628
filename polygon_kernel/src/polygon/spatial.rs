//! Containment, nearest point, signed distance and ray queries.
use super::{ClosestPointResult, Polygon, RayHit};
use crate::{
    core::{
        math::{line_seg_closest_point, Vector2},
        traits::Real,
    },
    PolygonResult,
};

impl<T> Polygon<T>
where
    T: Real,
{
    /// Test if `point` is inside the polygon using the even-odd rule.
    ///
    /// A horizontal ray is cast from `point` and edge crossings are counted, edges are half open
    /// in y so shared vertexes are counted once. No epsilon is applied, the result for a point
    /// lying exactly on the boundary is implementation defined. Combine with
    /// [Polygon::is_on_boundary] when boundary points must be treated as contained.
    ///
    /// Always returns false for polygons with fewer than 3 vertexes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon_kernel::polygon;
    /// # use polygon_kernel::core::math::Vector2;
    /// let square = polygon![(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
    /// assert!(square.contains_point(Vector2::new(0.0, 0.0)));
    /// assert!(!square.contains_point(Vector2::new(2.0, 2.0)));
    /// ```
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        if !self.is_valid() {
            return false;
        }

        let mut inside = false;
        for (v1, v2) in self.iter_edges() {
            if (v1.y > point.y) != (v2.y > point.y) {
                let x_intercept = v1.x + (point.y - v1.y) * (v2.x - v1.x) / (v2.y - v1.y);
                if point.x < x_intercept {
                    inside = !inside;
                }
            }
        }

        inside
    }

    /// Find the closest point on the polygon boundary to `point`.
    ///
    /// Every edge is checked (clamped segment projection), `None` is returned if the polygon is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon_kernel::polygon;
    /// # use polygon_kernel::core::traits::*;
    /// # use polygon_kernel::core::math::Vector2;
    /// let square = polygon![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
    /// let result = square.closest_point(Vector2::new(3.0, 1.0)).unwrap();
    /// assert_eq!(result.edge_start_index, 1);
    /// assert!(result.edge_point.fuzzy_eq(Vector2::new(2.0, 1.0)));
    /// assert!(result.distance.fuzzy_eq(1.0));
    /// ```
    pub fn closest_point(&self, point: Vector2<T>) -> Option<ClosestPointResult<T>> {
        let first = self.get(0)?;
        let mut result = ClosestPointResult {
            edge_start_index: 0,
            edge_point: first,
            distance: (first - point).length(),
        };

        if self.vertex_count() == 1 {
            return Some(result);
        }

        let mut dist_squared = <T as Real>::max_value();
        for (i, (v1, v2)) in self.iter_edges().enumerate() {
            let cp = line_seg_closest_point(v1, v2, point);
            let dist2 = (point - cp).length_squared();
            if dist2 < dist_squared {
                result.edge_start_index = i;
                result.edge_point = cp;
                dist_squared = dist2;
            }
        }

        result.distance = dist_squared.sqrt();
        Some(result)
    }

    /// Closest point on the polygon boundary to `point`, `None` if the polygon is empty.
    #[inline]
    pub fn closest_point_on_boundary(&self, point: Vector2<T>) -> Option<Vector2<T>> {
        self.closest_point(point).map(|r| r.edge_point)
    }

    /// Index pair `(i, i + 1)` (wrapped) of the edge closest to `point`.
    #[inline]
    pub fn closest_edge_indices(&self, point: Vector2<T>) -> Option<(usize, usize)> {
        self.closest_point(point).map(|r| {
            (
                r.edge_start_index,
                self.next_wrapping_index(r.edge_start_index),
            )
        })
    }

    /// Index of the vertex nearest to `point` (vertexes only, edges are ignored).
    pub fn closest_vertex_index(&self, point: Vector2<T>) -> Option<usize> {
        let mut result = None;
        let mut dist_squared = <T as Real>::max_value();
        for (i, v) in self.iter_vertexes().enumerate() {
            let dist2 = (v - point).length_squared();
            if dist2 < dist_squared {
                dist_squared = dist2;
                result = Some(i);
            }
        }

        result
    }

    /// Vertex nearest to `point`.
    #[inline]
    pub fn closest_vertex(&self, point: Vector2<T>) -> Option<Vector2<T>> {
        self.closest_vertex_index(point).map(|i| self.at(i))
    }

    /// Signed distance from `point` to the polygon boundary, positive inside and negative
    /// outside.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon_kernel::polygon;
    /// # use polygon_kernel::core::traits::*;
    /// # use polygon_kernel::core::math::Vector2;
    /// let square = polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    /// assert!(square.signed_distance(Vector2::new(1.0, 2.0)).unwrap().fuzzy_eq(1.0));
    /// assert!(square.signed_distance(Vector2::new(6.0, 2.0)).unwrap().fuzzy_eq(-2.0));
    /// ```
    pub fn signed_distance(&self, point: Vector2<T>) -> PolygonResult<T> {
        self.check_valid()?;
        let distance = self
            .closest_point(point)
            .map_or(T::zero(), |r| r.distance);
        Ok(if self.contains_point(point) {
            distance
        } else {
            -distance
        })
    }

    /// Returns true if `point` is within `eps` of the polygon boundary.
    #[inline]
    pub fn is_on_boundary(&self, point: Vector2<T>, eps: T) -> bool {
        self.closest_point(point)
            .is_some_and(|r| r.distance.fuzzy_lt_eps(T::zero(), eps))
    }

    /// Find the nearest boundary crossing of the ray starting at `origin` heading in
    /// `direction`.
    ///
    /// Edges parallel to the ray are skipped. Returns `None` if nothing is hit (or `direction` is
    /// zero).
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon_kernel::polygon;
    /// # use polygon_kernel::core::traits::*;
    /// # use polygon_kernel::core::math::Vector2;
    /// let square = polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    /// let hit = square.ray_intersect(Vector2::new(1.0, 2.0), Vector2::new(1.0, 0.0)).unwrap();
    /// assert_eq!(hit.edge_start_index, 1);
    /// assert!(hit.distance.fuzzy_eq(3.0));
    /// assert!(hit.point.fuzzy_eq(Vector2::new(4.0, 2.0)));
    /// assert!(square.ray_intersect(Vector2::new(5.0, 2.0), Vector2::new(1.0, 0.0)).is_none());
    /// ```
    pub fn ray_intersect(&self, origin: Vector2<T>, direction: Vector2<T>) -> Option<RayHit<T>> {
        if self.vertex_count() < 2 {
            return None;
        }

        let eps = T::fuzzy_epsilon();
        let mut result: Option<RayHit<T>> = None;
        for (i, (v1, v2)) in self.iter_edges().enumerate() {
            let e = v2 - v1;
            let denom = direction.perp_dot(e);
            if denom.fuzzy_eq_zero() {
                continue;
            }

            let w = v1 - origin;
            let t = w.perp_dot(e) / denom;
            let s = w.perp_dot(direction) / denom;
            if t < -eps || !s.fuzzy_in_range(T::zero(), T::one()) {
                continue;
            }

            // origins on the boundary report a zero distance, never a negative zero
            let t = if t <= T::zero() { T::zero() } else { t };
            if result.map_or(true, |r| t < r.distance) {
                result = Some(RayHit {
                    edge_start_index: i,
                    point: origin + direction.scale(t),
                    distance: t,
                });
            }
        }

        result
    }

    /// Index of the vertex farthest along `direction` (the support point), `None` if empty.
    pub fn find_point_index_in_direction(&self, direction: Vector2<T>) -> Option<usize> {
        let mut result = None;
        let mut max_dot = <T as Real>::min_value();
        for (i, v) in self.iter_vertexes().enumerate() {
            let d = v.dot(direction);
            if result.is_none() || d > max_dot {
                max_dot = d;
                result = Some(i);
            }
        }

        result
    }

    /// Vertex farthest along `direction` (the support point), `None` if empty.
    #[inline]
    pub fn find_point_in_direction(&self, direction: Vector2<T>) -> Option<Vector2<T>> {
        self.find_point_index_in_direction(direction)
            .map(|i| self.at(i))
    }

    /// Splice `point` into the ring on the edge closest to it, returns the index of the new
    /// vertex.
    pub fn insert_vertex_on_closest_edge(&mut self, point: Vector2<T>) -> usize {
        match self.closest_edge_indices(point) {
            Some((i, _)) if self.vertex_count() >= 2 => {
                self.insert_vertex(i + 1, point);
                i + 1
            }
            _ => {
                self.add_vertex(point);
                self.vertex_count() - 1
            }
        }
    }
}
