use super::Orientation;
use crate::{
    core::{
        math::{midpoint, Vector2},
        traits::Real,
    },
    PolygonError, PolygonResult,
};
use static_aabb2d_index::{
    IndexableNum, StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder, AABB,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Simple polygon represented as an implicitly closed ring of vertexes.
///
/// Edge `i` goes from vertex `i` to vertex `(i + 1) % n`, there is no duplicated closing vertex.
/// No validation is done at construction, [Polygon::is_valid] reports whether the ring has enough
/// vertexes (3 or more) to be used as a closed shape. Winding direction is never stored, it is
/// derived from the signed area when needed.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T = f64> {
    #[cfg_attr(feature = "serde", serde(rename = "vertexes"))]
    /// Contiguous sequence of vertexes.
    pub vertex_data: Vec<Vector2<T>>,
}

impl<T> Default for Polygon<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a new empty [Polygon].
    #[inline]
    pub fn new() -> Self {
        Polygon {
            vertex_data: Vec::new(),
        }
    }

    /// Create a new empty [Polygon] with space reserved for `capacity` vertexes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Polygon {
            vertex_data: Vec::with_capacity(capacity),
        }
    }

    /// Create a polygon from a sequence of points (copied in order).
    #[inline]
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector2<T>>,
    {
        Polygon {
            vertex_data: points.into_iter().collect(),
        }
    }

    /// Total number of vertexes.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len()
    }

    /// Returns true if vertex count is 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_data.is_empty()
    }

    /// Returns true if the polygon has at least 3 vertexes and so forms a closed ring.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.vertex_data.len() >= 3
    }

    /// Returns an error if the polygon is not [valid](Polygon::is_valid).
    #[inline]
    pub(crate) fn check_valid(&self) -> PolygonResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(PolygonError::InvalidPolygon {
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Slice of all vertexes.
    #[inline]
    pub fn vertexes(&self) -> &[Vector2<T>] {
        &self.vertex_data
    }

    /// Get the vertex at `index` position. Returns `None` if `index` out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Vector2<T>> {
        self.vertex_data.get(index).copied()
    }

    /// Same as [Polygon::get] but panics if `index` is out of bounds.
    #[inline]
    pub fn at(&self, index: usize) -> Vector2<T> {
        self.vertex_data[index]
    }

    /// Map a cyclic `index` (negative values wrap backward) to a position in the vertex data.
    #[inline]
    pub fn wrapping_index(&self, index: isize) -> PolygonResult<usize> {
        let n = self.vertex_count();
        if n == 0 {
            return Err(PolygonError::EmptyPolygon);
        }

        Ok(index.rem_euclid(n as isize) as usize)
    }

    /// Vertex at cyclic `index`, e.g. `-1` is the last vertex and `n` is the first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon_kernel::{polygon, PolygonError};
    /// # use polygon_kernel::polygon::Polygon;
    /// # use polygon_kernel::core::math::Vector2;
    /// let square = polygon![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    /// assert_eq!(square.vertex(-1), Ok(Vector2::new(0.0, 1.0)));
    /// assert_eq!(square.vertex(5), Ok(Vector2::new(1.0, 0.0)));
    /// assert_eq!(Polygon::<f64>::new().vertex(0), Err(PolygonError::EmptyPolygon));
    /// ```
    #[inline]
    pub fn vertex(&self, index: isize) -> PolygonResult<Vector2<T>> {
        Ok(self.vertex_data[self.wrapping_index(index)?])
    }

    /// Next index, wrapping around to 0 at the end of the ring.
    #[inline]
    pub fn next_wrapping_index(&self, i: usize) -> usize {
        let next = i + 1;
        if next >= self.vertex_count() {
            0
        } else {
            next
        }
    }

    /// Previous index, wrapping around to the last vertex before 0.
    #[inline]
    pub fn prev_wrapping_index(&self, i: usize) -> usize {
        if i == 0 {
            self.vertex_count() - 1
        } else {
            i - 1
        }
    }

    /// Number of forward steps from `start_index` to reach `end_index`, wrapping around.
    #[inline]
    pub fn fwd_wrapping_dist(&self, start_index: usize, end_index: usize) -> usize {
        if start_index <= end_index {
            end_index - start_index
        } else {
            self.vertex_count() - start_index + end_index
        }
    }

    /// Iterator over all vertexes.
    #[inline]
    pub fn iter_vertexes(&self) -> impl DoubleEndedIterator<Item = Vector2<T>> + Clone + '_ {
        self.vertex_data.iter().copied()
    }

    /// Iterator over all edges as `(start, end)` pairs, including the closing edge.
    #[inline]
    pub fn iter_edges(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        let n = self.vertex_count();
        (0..n).map(move |i| (self.vertex_data[i], self.vertex_data[(i + 1) % n]))
    }

    /// Edge starting at cyclic `index`.
    #[inline]
    pub fn edge(&self, index: isize) -> PolygonResult<(Vector2<T>, Vector2<T>)> {
        let i = self.wrapping_index(index)?;
        Ok((self.at(i), self.at(self.next_wrapping_index(i))))
    }

    /// Normalized direction of the edge starting at cyclic `index`.
    ///
    /// Zero length edges yield the zero vector.
    #[inline]
    pub fn edge_tangent(&self, index: isize) -> PolygonResult<Vector2<T>> {
        let (v1, v2) = self.edge(index)?;
        Ok((v2 - v1).normalize())
    }

    /// Outward unit normal of the edge starting at cyclic `index`.
    ///
    /// The polygon winding is passed in (see [Polygon::is_clockwise]) so that repeated calls do
    /// not recompute it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon_kernel::polygon;
    /// # use polygon_kernel::core::math::Vector2;
    /// let square = polygon![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    /// let is_clockwise = square.is_clockwise();
    /// assert!(!is_clockwise);
    /// // bottom edge points down and away from the interior
    /// assert_eq!(square.edge_normal(0, is_clockwise), Ok(Vector2::new(0.0, -1.0)));
    /// ```
    #[inline]
    pub fn edge_normal(&self, index: isize, is_clockwise: bool) -> PolygonResult<Vector2<T>> {
        let (v1, v2) = self.edge(index)?;
        let n = (v2 - v1).unit_perp();
        // counter clockwise rings have their interior on the left
        Ok(if is_clockwise { n } else { -n })
    }

    /// Outward unit normal at the vertex at cyclic `index`, the normalized average of the two
    /// adjacent edge normals (angle bisector).
    #[inline]
    pub fn vertex_normal(&self, index: isize, is_clockwise: bool) -> PolygonResult<Vector2<T>> {
        let prev = self.edge_normal(index - 1, is_clockwise)?;
        let next = self.edge_normal(index, is_clockwise)?;
        Ok((prev + next).normalize())
    }

    /// Signed area of the polygon, positive for counter clockwise rings.
    ///
    /// Computed by summing the triangles of a fan around the first vertex. Rings with fewer than
    /// 3 vertexes have zero area.
    pub fn signed_area(&self) -> T {
        if !self.is_valid() {
            return T::zero();
        }

        let origin = self.at(0);
        let mut double_total_area = T::zero();
        for i in 1..self.vertex_count() - 1 {
            let a = self.at(i) - origin;
            let b = self.at(i + 1) - origin;
            double_total_area = double_total_area + a.perp_dot(b);
        }

        double_total_area / T::two()
    }

    /// Area of the polygon, always non-negative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon_kernel::polygon;
    /// # use polygon_kernel::core::traits::*;
    /// let mut triangle = polygon![(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)];
    /// assert!(triangle.area().fuzzy_eq(6.0));
    /// triangle.reverse_winding_mut();
    /// assert!(triangle.area().fuzzy_eq(6.0));
    /// assert!(triangle.signed_area().fuzzy_eq(-6.0));
    /// ```
    #[inline]
    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    /// Winding direction of the polygon.
    ///
    /// A zero signed area (degenerate ring) is classified as clockwise.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        if self.signed_area() > T::zero() {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    /// Returns true if [Polygon::orientation] is clockwise.
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.orientation() == Orientation::Clockwise
    }

    /// Arithmetic mean of the vertexes.
    ///
    /// This is not the area centroid (see [Polygon::centroid]) and is not guaranteed to lie
    /// inside non convex polygons.
    pub fn center(&self) -> PolygonResult<Vector2<T>> {
        if self.is_empty() {
            return Err(PolygonError::EmptyPolygon);
        }

        let mut sum = Vector2::zero();
        for v in self.iter_vertexes() {
            sum += v;
        }

        let count = T::from(self.vertex_count()).unwrap_or_else(T::one);
        Ok(sum.scale(T::one() / count))
    }

    /// Area weighted centroid of the polygon.
    ///
    /// Falls back to [Polygon::center] for rings with (almost) zero area.
    pub fn centroid(&self) -> PolygonResult<Vector2<T>> {
        if !self.is_valid() {
            return self.center();
        }

        let origin = self.at(0);
        let mut double_area = T::zero();
        let mut weighted = Vector2::zero();
        for i in 1..self.vertex_count() - 1 {
            let a = self.at(i) - origin;
            let b = self.at(i + 1) - origin;
            let cross = a.perp_dot(b);
            double_area = double_area + cross;
            weighted += (a + b).scale(cross);
        }

        if double_area.fuzzy_eq_zero() {
            return self.center();
        }

        // each fan triangle centroid is (origin + a + b) / 3 relative to origin
        Ok(origin + weighted.scale(T::one() / (T::from(3.0).unwrap_or_else(T::one) * double_area)))
    }

    /// Total length of all edges including the closing edge.
    #[inline]
    pub fn perimeter(&self) -> T {
        if self.vertex_count() < 2 {
            return T::zero();
        }

        self.iter_edges()
            .fold(T::zero(), |acc, (v1, v2)| acc + (v2 - v1).length())
    }

    /// Axis aligned bounding box of the vertexes, `None` if the polygon is empty.
    pub fn extents(&self) -> Option<AABB<T>> {
        let first = self.get(0)?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);
        for v in self.iter_vertexes().skip(1) {
            result.min_x = num_traits::real::Real::min(result.min_x, v.x);
            result.min_y = num_traits::real::Real::min(result.min_y, v.y);
            result.max_x = num_traits::real::Real::max(result.max_x, v.x);
            result.max_y = num_traits::real::Real::max(result.max_y, v.y);
        }

        Some(result)
    }

    /// Creates a spatial index of all the polygon edges.
    ///
    /// The edge start vertex index is used as the key to the edge bounding box in the
    /// `StaticAABB2DIndex`.
    ///
    /// # Panics
    ///
    /// Panics if `T` fails to cast to/from a `u16`.
    pub fn create_aabb_index(&self) -> StaticAABB2DIndex<T> {
        let vc = self.vertex_count();
        if vc < 2 {
            return unwrap_spatial_index(StaticAABB2DIndexBuilder::new(0));
        }

        let mut builder = StaticAABB2DIndexBuilder::new(vc);
        for (v1, v2) in self.iter_edges() {
            builder.add(
                num_traits::real::Real::min(v1.x, v2.x),
                num_traits::real::Real::min(v1.y, v2.y),
                num_traits::real::Real::max(v1.x, v2.x),
                num_traits::real::Real::max(v1.y, v2.y),
            );
        }

        unwrap_spatial_index(builder)
    }

    /// Fuzzy compare with another polygon vertex by vertex using `eps`.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: &Polygon<T>, eps: T) -> bool {
        self.vertex_count() == other.vertex_count()
            && self
                .iter_vertexes()
                .zip(other.iter_vertexes())
                .all(|(v1, v2)| v1.fuzzy_eq_eps(v2, eps))
    }

    /// Append a vertex at the end of the ring.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.vertex_data.push(Vector2::new(x, y));
    }

    /// Append a vertex at the end of the ring.
    #[inline]
    pub fn add_vertex(&mut self, vertex: Vector2<T>) {
        self.vertex_data.push(vertex);
    }

    /// Replace the vertex at `index`.
    #[inline]
    pub fn set_vertex(&mut self, index: usize, vertex: Vector2<T>) {
        self.vertex_data[index] = vertex;
    }

    /// Insert a vertex at `index`, shifting all vertexes after it.
    #[inline]
    pub fn insert_vertex(&mut self, index: usize, vertex: Vector2<T>) {
        self.vertex_data.insert(index, vertex);
    }

    /// Remove and return the vertex at `index`, shifting all vertexes after it.
    #[inline]
    pub fn remove_vertex(&mut self, index: usize) -> Vector2<T> {
        self.vertex_data.remove(index)
    }

    /// Remove all vertexes.
    #[inline]
    pub fn clear(&mut self) {
        self.vertex_data.clear();
    }

    /// Translate all vertexes by `delta`.
    #[inline]
    pub fn translate_mut(&mut self, delta: Vector2<T>) {
        for v in self.vertex_data.iter_mut() {
            *v += delta;
        }
    }

    /// Uniformly scale the polygon about its [center](Polygon::center).
    #[inline]
    pub fn scale_mut(&mut self, scale_factor: T) {
        self.scale_xy_mut(scale_factor, scale_factor);
    }

    /// Scale the polygon about its [center](Polygon::center) with separate x and y factors.
    pub fn scale_xy_mut(&mut self, scale_x: T, scale_y: T) {
        let Ok(c) = self.center() else {
            return;
        };

        for v in self.vertex_data.iter_mut() {
            *v = c + (*v - c).scale_xy(scale_x, scale_y);
        }
    }

    /// Scale each vertex about the polygon [center](Polygon::center) by its own factor.
    ///
    /// `scale_factors` must have one entry per vertex.
    pub fn scale_each_mut(&mut self, scale_factors: &[T]) -> PolygonResult<()> {
        if scale_factors.len() != self.vertex_count() {
            return Err(PolygonError::VertexCountMismatch {
                expected: self.vertex_count(),
                actual: scale_factors.len(),
            });
        }

        let c = self.center()?;
        for (v, &f) in self.vertex_data.iter_mut().zip(scale_factors) {
            *v = c + (*v - c).scale(f);
        }

        Ok(())
    }

    /// Move every vertex by `amount` along its outward [vertex normal](Polygon::vertex_normal).
    ///
    /// Negative `amount` shrinks the polygon. Normals are computed from the unmodified ring.
    pub fn expand_mut(&mut self, amount: T) -> PolygonResult<()> {
        self.check_valid()?;
        let is_clockwise = self.is_clockwise();
        let normals = (0..self.vertex_count() as isize)
            .map(|i| self.vertex_normal(i, is_clockwise))
            .collect::<PolygonResult<Vec<_>>>()?;

        for (v, n) in self.vertex_data.iter_mut().zip(normals) {
            *v += n.scale(amount);
        }

        Ok(())
    }

    /// Reverse the vertex order, flipping the winding direction.
    #[inline]
    pub fn reverse_winding_mut(&mut self) {
        self.vertex_data.reverse();
    }

    /// Returns a copy of the polygon with reversed winding direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        let mut result = self.clone();
        result.reverse_winding_mut();
        result
    }

    /// Vertex by vertex linear interpolation between `a` (t = 0) and `b` (t = 1).
    pub fn lerp(a: &Polygon<T>, b: &Polygon<T>, t: T) -> PolygonResult<Self> {
        if a.vertex_count() != b.vertex_count() {
            return Err(PolygonError::VertexCountMismatch {
                expected: a.vertex_count(),
                actual: b.vertex_count(),
            });
        }

        Ok(Polygon::from_points(
            a.iter_vertexes()
                .zip(b.iter_vertexes())
                .map(|(v1, v2)| v1.lerp(v2, t)),
        ))
    }

    /// Midpoint of the edge starting at `index`, panics if out of bounds.
    #[inline]
    pub(crate) fn edge_midpoint(&self, index: usize) -> Vector2<T> {
        midpoint(self.at(index), self.at(self.next_wrapping_index(index)))
    }
}

impl<T> FromIterator<Vector2<T>> for Polygon<T>
where
    T: Real,
{
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(iter: I) -> Self {
        Polygon::from_points(iter)
    }
}

impl<T> Index<usize> for Polygon<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertex_data[index]
    }
}

impl<T> IndexMut<usize> for Polygon<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vertex_data[index]
    }
}

/// Helper function to unwrap a spatial index from a builder or panic for the unexpected case of
/// failure.
fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: IndexableNum,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast numeric type: {e}")
            }
        },
    }
}
