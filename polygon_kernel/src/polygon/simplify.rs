//! Ramer-Douglas-Peucker point sequence simplification.
use super::Polygon;
use crate::core::{
    math::{line_seg_distance, Vector2},
    traits::Real,
};
use tracing::debug;

/// Simplify an open sequence of points using the Ramer-Douglas-Peucker algorithm.
///
/// Points closer than `epsilon` to the segment joining the retained neighbors are dropped. The
/// first and last points are always kept. Sequences with fewer than 3 points are returned as is.
///
/// The split is driven by an explicit stack so deeply nested inputs cannot overflow the call
/// stack.
///
/// # Examples
///
/// ```
/// # use polygon_kernel::polygon::simplify;
/// # use polygon_kernel::core::math::Vector2;
/// let points = vec![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 0.1),
///     Vector2::new(2.0, 0.0),
///     Vector2::new(3.0, 2.0),
///     Vector2::new(4.0, 0.0),
/// ];
/// let simplified = simplify(&points, 0.5);
/// assert_eq!(
///     simplified,
///     vec![
///         Vector2::new(0.0, 0.0),
///         Vector2::new(2.0, 0.0),
///         Vector2::new(3.0, 2.0),
///         Vector2::new(4.0, 0.0),
///     ]
/// );
/// ```
pub fn simplify<T>(points: &[Vector2<T>], epsilon: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;
    mark_retained(points, 0, n - 1, epsilon, &mut keep);

    points
        .iter()
        .zip(keep)
        .filter_map(|(&p, k)| if k { Some(p) } else { None })
        .collect()
}

/// Mark the points between `start` and `end` (exclusive) that must be retained.
fn mark_retained<T>(points: &[Vector2<T>], start: usize, end: usize, epsilon: T, keep: &mut [bool])
where
    T: Real,
{
    let mut stack = vec![(start, end)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }

        let p0 = points[start];
        let p1 = points[end];
        let mut max_dist = T::zero();
        let mut max_idx = start;
        for (i, &p) in points.iter().enumerate().take(end).skip(start + 1) {
            let dist = line_seg_distance(p0, p1, p);
            if dist > max_dist {
                max_dist = dist;
                max_idx = i;
            }
        }

        if max_dist > epsilon {
            keep[max_idx] = true;
            stack.push((max_idx, end));
            stack.push((start, max_idx));
        }
    }
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Returns a copy of the polygon with vertexes removed by Ramer-Douglas-Peucker
    /// simplification.
    ///
    /// The ring is split at its first vertex and the vertex farthest from it, both chains are
    /// simplified independently. If simplification would leave fewer than 3 vertexes the polygon
    /// is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon_kernel::polygon;
    /// let square = polygon![
    ///     (0.0, 0.0),
    ///     (1.0, 0.0),
    ///     (2.0, 0.01),
    ///     (2.0, 2.0),
    ///     (1.0, 2.0),
    ///     (0.0, 2.0)
    /// ];
    /// let simplified = square.simplified(0.1);
    /// assert_eq!(simplified.vertex_count(), 4);
    /// ```
    pub fn simplified(&self, epsilon: T) -> Polygon<T> {
        let n = self.vertex_count();
        if n <= 3 {
            return self.clone();
        }

        // closed chain with the first vertex repeated at the end
        let mut chain = Vec::with_capacity(n + 1);
        chain.extend(self.iter_vertexes());
        chain.push(self.at(0));

        let origin = self.at(0);
        let mut far_idx = 0;
        let mut far_dist = T::zero();
        for (i, v) in self.iter_vertexes().enumerate().skip(1) {
            let d = (v - origin).length_squared();
            if d > far_dist {
                far_dist = d;
                far_idx = i;
            }
        }

        if far_idx == 0 {
            return self.clone();
        }

        let mut keep = vec![false; n + 1];
        keep[0] = true;
        keep[far_idx] = true;
        mark_retained(&chain, 0, far_idx, epsilon, &mut keep);
        mark_retained(&chain, far_idx, n, epsilon, &mut keep);

        let result: Polygon<T> = chain[..n]
            .iter()
            .zip(keep)
            .filter_map(|(&p, k)| if k { Some(p) } else { None })
            .collect();

        if result.is_valid() {
            debug!(
                removed = n - result.vertex_count(),
                "simplified polygon ring"
            );
            result
        } else {
            debug!(
                vertex_count = result.vertex_count(),
                "simplified ring collapsed, returning original"
            );
            self.clone()
        }
    }
}
