use crate::{
    core::{
        math::{edge_edge_intr, point_from_parametric, EdgeEdgeIntr, Vector2},
        traits::Real,
    },
    polygon::Polygon,
};
use static_aabb2d_index::StaticAABB2DIndex;
use tracing::trace;

/// Crossing point between an edge of the first polygon and an edge of the second polygon.
#[derive(Debug, Copy, Clone)]
pub struct PolygonIntersect<T> {
    /// Start vertex index of the edge on the first polygon.
    pub edge_index1: usize,
    /// Start vertex index of the edge on the second polygon.
    pub edge_index2: usize,
    /// Parametric position of the intersect along the first edge, in `[0, 1]`.
    pub t1: T,
    /// Parametric position of the intersect along the second edge, in `[0, 1]`.
    pub t2: T,
    /// Intersect point.
    pub point: Vector2<T>,
}

/// Find all the edge crossings between `pg1` and `pg2`.
///
/// `pg2_aabb_index` is the spatial index of `pg2` edges (see [Polygon::create_aabb_index]).
/// Collinear overlapping edges are not reported, they do not cross. Intersects at a shared vertex
/// may be reported more than once (once per edge touching the vertex), callers are expected to
/// merge them by position.
pub fn find_intersects<T>(
    pg1: &Polygon<T>,
    pg2: &Polygon<T>,
    pg2_aabb_index: &StaticAABB2DIndex<T>,
    pos_equal_eps: T,
) -> Vec<PolygonIntersect<T>>
where
    T: Real,
{
    let mut result = Vec::new();
    if pg1.vertex_count() < 2 || pg2.vertex_count() < 2 {
        return result;
    }

    let mut query_stack = Vec::with_capacity(8);
    for (i1, (v1, v2)) in pg1.iter_edges().enumerate() {
        let mut query_visitor = |i2: usize| {
            let u1 = pg2.at(i2);
            let u2 = pg2.at(pg2.next_wrapping_index(i2));
            match edge_edge_intr(v1, v2, u1, u2, pos_equal_eps) {
                EdgeEdgeIntr::Point { t1, t2 } => {
                    result.push(PolygonIntersect {
                        edge_index1: i1,
                        edge_index2: i2,
                        t1,
                        t2,
                        point: point_from_parametric(v1, v2, t1),
                    });
                }
                EdgeEdgeIntr::Collinear { .. } => {
                    trace!(i1, i2, "skipping collinear overlapping edges");
                }
                EdgeEdgeIntr::NoIntersect => {}
            }
        };

        pg2_aabb_index.visit_query_with_stack(
            num_traits::real::Real::min(v1.x, v2.x) - pos_equal_eps,
            num_traits::real::Real::min(v1.y, v2.y) - pos_equal_eps,
            num_traits::real::Real::max(v1.x, v2.x) + pos_equal_eps,
            num_traits::real::Real::max(v1.y, v2.y) + pos_equal_eps,
            &mut query_visitor,
            &mut query_stack,
        );
    }

    result
}
