use super::{base_math::parametric_from_point, point_from_parametric, Vector2};
use crate::core::traits::Real;

/// How two polygon edges meet, see [edge_edge_intr].
///
/// Parametric values are for `P(t) = start + t * (end - start)` and always lie in `[0, 1]`.
#[derive(Debug, Copy, Clone)]
pub enum EdgeEdgeIntr<T>
where
    T: Real,
{
    /// Edges do not meet. This includes parallel edges apart from each other, edges whose lines
    /// cross outside of either edge, and zero length edges.
    NoIntersect,
    /// Edges meet at a single point. Either a proper crossing or an end point of one edge touching
    /// the other edge (shared vertexes of adjacent edges land here).
    Point {
        /// Position along the first edge.
        t1: T,
        /// Position along the second edge.
        t2: T,
    },
    /// Edges lie on the same line and share a stretch of positive length.
    Collinear {
        /// Start of the shared stretch along the first edge.
        t1_start: T,
        /// End of the shared stretch along the first edge, always greater than `t1_start`.
        t1_end: T,
    },
}

#[inline]
fn clamp_unit<T>(t: T) -> T
where
    T: Real,
{
    num_traits::real::Real::min(num_traits::real::Real::max(t, T::zero()), T::one())
}

/// Finds where the polygon edge `v1->v2` meets the polygon edge `u1->u2`.
///
/// Every tolerance is a distance: edges are parallel when the end points of the second edge are
/// at the same distance (within `pos_equal_eps`) from the line of the first, and an end point
/// within `pos_equal_eps` of the other edge counts as touching it. Parametric values of touching
/// points are clamped to the edge.
///
/// Zero length edges (end points within `pos_equal_eps`) never meet anything, the edges adjacent
/// to them report the shared vertex instead.
///
/// # Examples
///
/// ```
/// # use polygon_kernel::core::math::*;
/// // bottom edge of one square crossed by the left edge of another
/// let v1 = Vector2::new(0.0, 1.0);
/// let v2 = Vector2::new(2.0, 1.0);
/// let u1 = Vector2::new(1.0, 0.0);
/// let u2 = Vector2::new(1.0, 4.0);
/// match edge_edge_intr(v1, v2, u1, u2, 1e-5) {
///     EdgeEdgeIntr::Point { t1, t2 } => {
///         assert_eq!(t1, 0.5);
///         assert_eq!(t2, 0.25);
///     }
///     r => unreachable!("expected edges to cross, got {:?}", r),
/// }
///
/// // stacked edges one unit apart
/// let w1 = Vector2::new(0.0, 2.0);
/// let w2 = Vector2::new(2.0, 2.0);
/// assert!(matches!(edge_edge_intr(v1, v2, w1, w2, 1e-5), EdgeEdgeIntr::NoIntersect));
/// ```
pub fn edge_edge_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    pos_equal_eps: T,
) -> EdgeEdgeIntr<T>
where
    T: Real,
{
    use EdgeEdgeIntr::*;
    let eps = pos_equal_eps;

    let d1 = v2 - v1;
    let d2 = u2 - u1;
    let len1 = d1.length();
    let len2 = d2.length();
    if len1 <= eps || len2 <= eps {
        return NoIntersect;
    }

    // signed distances of the second edge end points from the line of the first edge
    let w = u1 - v1;
    let side1 = d1.perp_dot(w) / len1;
    let side2 = d1.perp_dot(u2 - v1) / len1;

    if !(side1 - side2).fuzzy_eq_zero_eps(eps) {
        let denom = d1.perp_dot(d2);
        let t1 = w.perp_dot(d2) / denom;
        let t2 = w.perp_dot(d1) / denom;
        let on_edge1 = (t1 * len1).fuzzy_in_range_eps(T::zero(), len1, eps);
        let on_edge2 = (t2 * len2).fuzzy_in_range_eps(T::zero(), len2, eps);
        if !on_edge1 || !on_edge2 {
            return NoIntersect;
        }

        return Point {
            t1: clamp_unit(t1),
            t2: clamp_unit(t2),
        };
    }

    if !side1.fuzzy_eq_zero_eps(eps) {
        // parallel on separate lines
        return NoIntersect;
    }

    // same line, project the second edge onto the first
    let len1_squared = len1 * len1;
    let a = w.dot(d1) / len1_squared;
    let b = (u2 - v1).dot(d1) / len1_squared;
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    if hi * len1 < -eps || lo * len1 > len1 + eps {
        return NoIntersect;
    }

    let t1_start = clamp_unit(lo);
    let t1_end = clamp_unit(hi);
    if ((t1_end - t1_start) * len1).fuzzy_eq_zero_eps(eps) {
        // end to end
        let point = point_from_parametric(v1, v2, t1_start);
        return Point {
            t1: t1_start,
            t2: clamp_unit(parametric_from_point(u1, u2, point, eps)),
        };
    }

    Collinear { t1_start, t1_end }
}
