//! Boolean combination of two simple polygons by intersect insertion and boundary walking.
//!
//! Both boundaries are augmented with every crossing point. Crossing points get a stable id so
//! the same point can be found on the other boundary without coordinate lookups. The result ring
//! is traced by walking the first polygon and detouring along the second between crossings.
use super::{find_intersects, poly_bridge::bridge_disjoint};
use crate::{
    core::{math::Vector2, traits::Real},
    polygon::{BooleanOp, Polygon, PolygonBooleanOptions},
    PolygonError, PolygonResult,
};
use tracing::{debug, error, instrument, warn};

/// Vertex of an augmented boundary ring.
#[derive(Debug, Copy, Clone)]
struct RingNode<T> {
    pos: Vector2<T>,
    /// Id of the crossing point at this node, `None` for original vertexes that are not crossings.
    intersect_id: Option<usize>,
}

/// Boundary ring with crossing points spliced in.
#[derive(Debug, Clone)]
struct AugmentedRing<T> {
    nodes: Vec<RingNode<T>>,
    /// Maps crossing id to node index, `None` if the crossing was merged away on this ring.
    id_to_node: Vec<Option<usize>>,
}

impl<T> AugmentedRing<T>
where
    T: Real,
{
    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn next(&self, i: usize) -> usize {
        if i + 1 == self.nodes.len() {
            0
        } else {
            i + 1
        }
    }

    #[inline]
    fn prev(&self, i: usize) -> usize {
        if i == 0 {
            self.nodes.len() - 1
        } else {
            i - 1
        }
    }

    #[inline]
    fn step(&self, i: usize, forward: bool) -> usize {
        if forward {
            self.next(i)
        } else {
            self.prev(i)
        }
    }

    /// Midpoint of the sub edge starting at node `i`.
    #[inline]
    fn sub_edge_midpoint(&self, i: usize) -> Vector2<T> {
        let p0 = self.nodes[i].pos;
        let p1 = self.nodes[self.next(i)].pos;
        (p0 + p1).scale(T::half())
    }
}

/// A crossing found on one edge of a polygon, pending insertion into the augmented ring.
#[derive(Debug, Copy, Clone)]
struct EdgeHit<T> {
    edge_index: usize,
    t: T,
    id: usize,
}

/// Splice the crossing points into `polygon`. Hits coinciding with an existing vertex (within
/// `eps`) tag that vertex instead of adding a new node.
fn build_augmented_ring<T>(
    polygon: &Polygon<T>,
    hits: &[EdgeHit<T>],
    intersect_points: &[Vector2<T>],
    eps: T,
) -> AugmentedRing<T>
where
    T: Real,
{
    let n = polygon.vertex_count();
    let mut vertex_ids: Vec<Option<usize>> = vec![None; n];
    let mut edge_hits: Vec<EdgeHit<T>> = Vec::with_capacity(hits.len());
    for hit in hits.iter() {
        let p = intersect_points[hit.id];
        let start = hit.edge_index;
        let end = polygon.next_wrapping_index(start);
        let on_vertex = if polygon.at(start).fuzzy_eq_eps(p, eps) {
            Some(start)
        } else if polygon.at(end).fuzzy_eq_eps(p, eps) {
            Some(end)
        } else {
            None
        };

        match on_vertex {
            Some(vi) => {
                if vertex_ids[vi].is_none() {
                    vertex_ids[vi] = Some(hit.id);
                }
            }
            None => edge_hits.push(*hit),
        }
    }

    edge_hits.sort_by(|a, b| {
        a.edge_index
            .cmp(&b.edge_index)
            .then(a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut ring = AugmentedRing {
        nodes: Vec::with_capacity(n + edge_hits.len()),
        id_to_node: vec![None; intersect_points.len()],
    };

    let place = |ring: &mut AugmentedRing<T>, pos: Vector2<T>, id: Option<usize>| {
        let id = id.filter(|&id| ring.id_to_node[id].is_none());
        if let Some(id) = id {
            ring.id_to_node[id] = Some(ring.nodes.len());
        }
        ring.nodes.push(RingNode {
            pos,
            intersect_id: id,
        });
    };

    let mut hit_iter = edge_hits.iter().peekable();
    for (i, &vertex_id) in vertex_ids.iter().enumerate() {
        place(&mut ring, polygon.at(i), vertex_id);
        while let Some(hit) = hit_iter.next_if(|h| h.edge_index == i) {
            if ring.id_to_node[hit.id].is_some() {
                // same crossing already placed (found on an adjacent edge)
                continue;
            }
            place(&mut ring, intersect_points[hit.id], Some(hit.id));
        }
    }

    ring
}

/// Even-odd containment used for sub edge classification.
#[inline]
fn inside<T>(pg: &Polygon<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    pg.contains_point(point)
}

/// Sample whether `pg1` lies inside `pg2` using a vertex (or edge midpoint) of `pg1` that is not on
/// the boundary of `pg2`. Returns `None` if every sample lies on the boundary.
fn sample_inside<T>(pg1: &Polygon<T>, pg2: &Polygon<T>, eps: T) -> Option<bool>
where
    T: Real,
{
    let candidates = pg1
        .iter_vertexes()
        .chain((0..pg1.vertex_count()).map(|i| pg1.edge_midpoint(i)));
    for p in candidates {
        if !pg2.is_on_boundary(p, eps) {
            return Some(pg2.contains_point(p));
        }
    }

    None
}

/// Remove consecutive vertexes (including across the wrap around) closer than `eps`.
fn remove_repeat_vertexes<T>(points: Vec<Vector2<T>>, eps: T) -> Polygon<T>
where
    T: Real,
{
    let mut result = Polygon::with_capacity(points.len());
    for p in points {
        let is_repeat = result
            .vertexes()
            .last()
            .is_some_and(|last: &Vector2<T>| last.fuzzy_eq_eps(p, eps));
        if !is_repeat {
            result.add_vertex(p);
        }
    }

    while result.vertex_count() > 1 {
        let last = result.at(result.vertex_count() - 1);
        if last.fuzzy_eq_eps(result.at(0), eps) {
            result.remove_vertex(result.vertex_count() - 1);
        } else {
            break;
        }
    }

    result
}

/// Resolve the boolean operation when the boundaries never cross (disjoint, nested, touching or
/// identical polygons).
///
/// A polygon nested inside another and touching its boundary is treated like a nested one, so
/// subtracting it is reported as a hole.
fn combine_without_crossings<T>(
    pg1: &Polygon<T>,
    pg2: &Polygon<T>,
    operation: BooleanOp,
    eps: T,
) -> PolygonResult<Polygon<T>>
where
    T: Real,
{
    // all samples on the boundary means the polygons coincide, treat as mutually contained
    let pg1_in_pg2 = sample_inside(pg1, pg2, eps).unwrap_or(true);
    let pg2_in_pg1 = sample_inside(pg2, pg1, eps).unwrap_or(true);
    debug!(pg1_in_pg2, pg2_in_pg1, "boundaries do not cross");

    match operation {
        BooleanOp::Union => {
            if pg2_in_pg1 {
                Ok(pg1.clone())
            } else if pg1_in_pg2 {
                Ok(pg2.clone())
            } else {
                Ok(bridge_disjoint(pg1, pg2, eps))
            }
        }
        BooleanOp::Difference => {
            if pg1_in_pg2 {
                Ok(Polygon::new())
            } else if pg2_in_pg1 {
                error!("difference would create a hole, polygons with holes are not supported");
                Err(PolygonError::UnsupportedTopology {
                    reason: "difference would create a hole",
                })
            } else {
                Ok(pg1.clone())
            }
        }
        BooleanOp::Intersection => {
            if pg2_in_pg1 {
                Ok(pg2.clone())
            } else if pg1_in_pg2 {
                Ok(pg1.clone())
            } else {
                Ok(Polygon::new())
            }
        }
    }
}

/// Perform a boolean `operation` between `pg1` and `pg2`.
///
/// Both polygons must be valid (3 or more vertexes). The result is always a single ring:
/// * disjoint union results are joined by a zero width bridge (see [bridge_disjoint]),
/// * an empty polygon is returned when nothing remains,
/// * when the result has several separate pieces only the one reached first is returned,
/// * a difference that would leave a hole is an [PolygonError::UnsupportedTopology] error.
#[instrument(level = "debug", skip_all, fields(
    operation = ?operation,
    vertex_count1 = pg1.vertex_count(),
    vertex_count2 = pg2.vertex_count()
))]
pub fn polygon_boolean<T>(
    pg1: &Polygon<T>,
    pg2: &Polygon<T>,
    operation: BooleanOp,
    options: &PolygonBooleanOptions<T>,
) -> PolygonResult<Polygon<T>>
where
    T: Real,
{
    pg1.check_valid()?;
    pg2.check_valid()?;

    let eps = options.pos_equal_eps;
    let pg2_index = pg2.create_aabb_index();
    let intrs = find_intersects(pg1, pg2, &pg2_index, eps);
    if intrs.is_empty() {
        return combine_without_crossings(pg1, pg2, operation, eps);
    }

    // merge crossings by position and assign ids
    let mut intersect_points: Vec<Vector2<T>> = Vec::new();
    let mut hits1 = Vec::with_capacity(intrs.len());
    let mut hits2 = Vec::with_capacity(intrs.len());
    for intr in intrs.iter() {
        let id = match intersect_points
            .iter()
            .position(|p| p.fuzzy_eq_eps(intr.point, eps))
        {
            Some(id) => id,
            None => {
                intersect_points.push(intr.point);
                intersect_points.len() - 1
            }
        };

        hits1.push(EdgeHit {
            edge_index: intr.edge_index1,
            t: intr.t1,
            id,
        });
        hits2.push(EdgeHit {
            edge_index: intr.edge_index2,
            t: intr.t2,
            id,
        });
    }

    debug!(
        raw_count = intrs.len(),
        merged_count = intersect_points.len(),
        "found boundary crossings"
    );

    let ring1 = build_augmented_ring(pg1, &hits1, &intersect_points, eps);
    let ring2 = build_augmented_ring(pg2, &hits2, &intersect_points, eps);

    if (0..ring1.len()).all(|i| pg2.is_on_boundary(ring1.sub_edge_midpoint(i), eps)) {
        debug!("boundaries coincide");
        return combine_without_crossings(pg1, pg2, operation, eps);
    }

    // classify every sub edge by testing its midpoint against the other polygon
    let keep1: Vec<bool> = (0..ring1.len())
        .map(|i| {
            let is_inside = inside(pg2, ring1.sub_edge_midpoint(i));
            match operation {
                BooleanOp::Union | BooleanOp::Difference => !is_inside,
                BooleanOp::Intersection => is_inside,
            }
        })
        .collect();

    let keep2: Vec<bool> = (0..ring2.len())
        .map(|i| {
            let is_inside = inside(pg1, ring2.sub_edge_midpoint(i));
            match operation {
                BooleanOp::Union => !is_inside,
                BooleanOp::Difference | BooleanOp::Intersection => is_inside,
            }
        })
        .collect();

    // default walking direction along pg2 when the sub edge test is inconclusive
    let same_orientation = pg1.orientation() == pg2.orientation();
    let default_forward2 = match operation {
        BooleanOp::Union | BooleanOp::Intersection => same_orientation,
        BooleanOp::Difference => !same_orientation,
    };

    let start = (0..ring1.len())
        .find(|&i| keep1[i] && ring1.nodes[i].intersect_id.is_none())
        .or_else(|| (0..ring1.len()).find(|&i| keep1[i]));

    let Some(start) = start else {
        // crossings flip the kept state along a boundary, so these are only touching points
        debug!("no part of the first boundary is kept");
        return combine_without_crossings(pg1, pg2, operation, eps);
    };

    let mut visited1 = vec![false; ring1.len()];
    let mut visited2 = vec![false; ring2.len()];
    let mut points = Vec::with_capacity(ring1.len() + ring2.len());
    let mut on_ring1 = true;
    let mut idx = start;
    let mut forward2 = default_forward2;
    let mut switch_count = 0;
    let budget = 2 * (ring1.len() + ring2.len()) + 1;
    let mut closed = false;

    for _ in 0..budget {
        if on_ring1 {
            if visited1[idx] {
                closed = true;
                break;
            }
            visited1[idx] = true;
            let node = ring1.nodes[idx];
            points.push(node.pos);

            let switch_to = node
                .intersect_id
                .filter(|_| !keep1[idx])
                .and_then(|id| ring2.id_to_node[id]);

            match switch_to {
                Some(idx2) => {
                    visited2[idx2] = true;
                    forward2 = if keep2[idx2] {
                        true
                    } else if keep2[ring2.prev(idx2)] {
                        false
                    } else {
                        default_forward2
                    };
                    switch_count += 1;
                    on_ring1 = false;
                    idx = ring2.step(idx2, forward2);
                }
                None => idx = ring1.next(idx),
            }
        } else {
            let node = ring2.nodes[idx];
            let switch_to = node
                .intersect_id
                .and_then(|id| ring1.id_to_node[id])
                .filter(|&idx1| keep1[idx1]);

            if let Some(idx1) = switch_to {
                visited2[idx] = true;
                on_ring1 = true;
                idx = idx1;
                continue;
            }

            if visited2[idx] {
                closed = true;
                break;
            }
            visited2[idx] = true;
            points.push(node.pos);
            idx = ring2.step(idx, forward2);
        }
    }

    if !closed {
        warn!(budget, "boundary walk did not close within its step budget");
    }

    if switch_count == 0 {
        // only touching points, the boundaries do not actually cross
        return combine_without_crossings(pg1, pg2, operation, eps);
    }

    let unvisited_kept = (0..ring1.len())
        .filter(|&i| keep1[i] && !visited1[i])
        .count();
    if unvisited_kept > 0 {
        debug!(
            unvisited_kept,
            "result has more than one piece, returning the first traced"
        );
    }

    let result = remove_repeat_vertexes(points, eps);
    if !result.is_valid() {
        debug!(
            vertex_count = result.vertex_count(),
            "degenerate result discarded"
        );
        return Ok(Polygon::new());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Polygon<f64> {
        polygon![(x, y), (x + size, y), (x + size, y + size), (x, y + size)]
    }

    #[test]
    fn augmented_ring_has_stable_ids() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 1.0, 2.0);
        let index = b.create_aabb_index();
        let intrs = find_intersects(&a, &b, &index, 1e-5);
        assert_eq!(intrs.len(), 2);

        let points: Vec<_> = intrs.iter().map(|i| i.point).collect();
        let hits: Vec<_> = intrs
            .iter()
            .enumerate()
            .map(|(id, i)| EdgeHit {
                edge_index: i.edge_index1,
                t: i.t1,
                id,
            })
            .collect();
        let ring = build_augmented_ring(&a, &hits, &points, 1e-5);
        assert_eq!(ring.len(), 6);
        for (id, node) in ring.id_to_node.iter().enumerate() {
            let node = node.expect("every crossing is placed");
            assert_eq!(ring.nodes[node].intersect_id, Some(id));
            assert!(ring.nodes[node].pos.fuzzy_eq(points[id]));
        }
    }

    #[test]
    fn crossing_at_vertex_tags_vertex() {
        // b vertex (2, 0) lies on a's bottom edge, b's left edge crosses a's top edge
        let a = polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)];
        let b = polygon![(2.0, 0.0), (6.0, -1.0), (6.0, 3.0), (2.0, 3.0)];
        let index = b.create_aabb_index();
        let intrs = find_intersects(&a, &b, &index, 1e-5);
        let mut points: Vec<Vector2<f64>> = Vec::new();
        let mut hits = Vec::new();
        for intr in intrs.iter() {
            let id = points
                .iter()
                .position(|p| p.fuzzy_eq_eps(intr.point, 1e-5))
                .unwrap_or_else(|| {
                    points.push(intr.point);
                    points.len() - 1
                });
            hits.push(EdgeHit {
                edge_index: intr.edge_index2,
                t: intr.t2,
                id,
            });
        }

        let ring = build_augmented_ring(&b, &hits, &points, 1e-5);
        // vertex 0 is tagged rather than duplicated
        assert!(ring.nodes[0].intersect_id.is_some());
        assert!(ring.nodes[0].pos.fuzzy_eq(Vector2::new(2.0, 0.0)));
        let tagged = ring
            .nodes
            .iter()
            .filter(|n| n.intersect_id.is_some())
            .count();
        assert_eq!(tagged, points.len());
    }

    #[test]
    fn repeat_vertexes_removed() {
        let points = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 0.0005),
        ];
        let result = remove_repeat_vertexes(points, 1e-3);
        assert_eq!(result.vertex_count(), 3);
    }
}
