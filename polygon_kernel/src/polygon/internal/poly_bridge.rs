//! Joining two disjoint polygons into a single ring.
use crate::{
    core::{
        math::{edge_edge_intr, midpoint, EdgeEdgeIntr, Vector2},
        traits::Real,
    },
    polygon::Polygon,
};
use tracing::{debug, warn};

/// Candidate pair of bridge edges between two polygons.
#[derive(Debug, Copy, Clone)]
struct BridgeCandidate<T> {
    /// Closest vertex on the first polygon, the first bridge starts here.
    i: usize,
    /// Neighbor of `i` where the second bridge ends.
    i_n: usize,
    /// Closest vertex on the second polygon, the first bridge ends here.
    j: usize,
    /// Neighbor of `j` where the second bridge starts.
    j_n: usize,
    /// Change in perimeter from removing the two replaced edges and adding the bridges.
    perimeter_delta: T,
}

/// Returns true if the segment `p -> q` crosses any edge of `pg` other than edges touching `p` or
/// `q`.
fn crosses_boundary<T>(pg: &Polygon<T>, p: Vector2<T>, q: Vector2<T>, eps: T) -> bool
where
    T: Real,
{
    pg.iter_edges().any(|(u1, u2)| {
        let shares_end = u1.fuzzy_eq_eps(p, eps)
            || u1.fuzzy_eq_eps(q, eps)
            || u2.fuzzy_eq_eps(p, eps)
            || u2.fuzzy_eq_eps(q, eps);
        if shares_end {
            return false;
        }

        !matches!(edge_edge_intr(p, q, u1, u2, eps), EdgeEdgeIntr::NoIntersect)
    })
}

fn is_valid_bridge<T>(
    pg1: &Polygon<T>,
    pg2: &Polygon<T>,
    c: &BridgeCandidate<T>,
    eps: T,
) -> bool
where
    T: Real,
{
    let bridges = [
        (pg1.at(c.i), pg2.at(c.j)),
        (pg2.at(c.j_n), pg1.at(c.i_n)),
    ];

    for &(p, q) in bridges.iter() {
        let mid = midpoint(p, q);
        if pg1.contains_point(mid) || pg2.contains_point(mid) {
            return false;
        }

        if crosses_boundary(pg1, p, q, eps) || crosses_boundary(pg2, p, q, eps) {
            return false;
        }
    }

    let (b1, b2) = (bridges[0], bridges[1]);
    matches!(
        edge_edge_intr(b1.0, b1.1, b2.0, b2.1, eps),
        EdgeEdgeIntr::NoIntersect
    )
}

/// Emit the vertexes of `pg` starting at `start`, stepping forward or backward, until `end` has
/// been emitted.
fn push_chain<T>(result: &mut Polygon<T>, pg: &Polygon<T>, start: usize, end: usize, forward: bool)
where
    T: Real,
{
    let mut i = start;
    loop {
        result.add_vertex(pg.at(i));
        if i == end {
            break;
        }
        i = if forward {
            pg.next_wrapping_index(i)
        } else {
            pg.prev_wrapping_index(i)
        };
    }
}

/// Join two disjoint polygons into one ring with two bridge edges.
///
/// The closest vertex pair `(i, j)` anchors the first bridge. For each polygon one of the edges
/// adjacent to the anchor vertex is replaced, its other end anchoring the second bridge. Of the
/// candidate edge choices, the one which keeps both traversals in their native winding relative
/// to each other, does not cross either boundary, and adds the least perimeter is chosen.
///
/// The result contains every vertex of both polygons exactly once (`n + m` vertexes) and
/// follows the winding of `pg1`.
pub fn bridge_disjoint<T>(pg1: &Polygon<T>, pg2: &Polygon<T>, eps: T) -> Polygon<T>
where
    T: Real,
{
    let mut closest = (0, 0);
    let mut min_dist2 = <T as Real>::max_value();
    for (i, v1) in pg1.iter_vertexes().enumerate() {
        for (j, v2) in pg2.iter_vertexes().enumerate() {
            let d2 = (v2 - v1).length_squared();
            if d2 < min_dist2 {
                min_dist2 = d2;
                closest = (i, j);
            }
        }
    }

    let (i, j) = closest;
    let same_orientation = pg1.orientation() == pg2.orientation();
    let dist = |a: Vector2<T>, b: Vector2<T>| (b - a).length();

    let mut candidates = Vec::with_capacity(4);
    for i_n in [pg1.next_wrapping_index(i), pg1.prev_wrapping_index(i)] {
        for j_n in [pg2.prev_wrapping_index(j), pg2.next_wrapping_index(j)] {
            let forward1 = i_n == pg1.next_wrapping_index(i);
            let forward2 = j_n == pg2.prev_wrapping_index(j);
            if (forward1 == forward2) != same_orientation {
                continue;
            }

            let perimeter_delta = dist(pg1.at(i), pg2.at(j)) + dist(pg1.at(i_n), pg2.at(j_n))
                - dist(pg1.at(i), pg1.at(i_n))
                - dist(pg2.at(j), pg2.at(j_n));
            candidates.push(BridgeCandidate {
                i,
                i_n,
                j,
                j_n,
                perimeter_delta,
            });
        }
    }

    let chosen = candidates
        .iter()
        .filter(|c| is_valid_bridge(pg1, pg2, c, eps))
        .min_by(|a, b| {
            a.perimeter_delta
                .partial_cmp(&b.perimeter_delta)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .copied();

    let chosen = match chosen {
        Some(c) => c,
        None => {
            warn!(i, j, "no crossing free bridge found, using first candidate");
            candidates[0]
        }
    };

    debug!(
        i = chosen.i,
        i_n = chosen.i_n,
        j = chosen.j,
        j_n = chosen.j_n,
        "bridging disjoint polygons"
    );

    let forward1 = chosen.i_n == pg1.next_wrapping_index(chosen.i);
    let forward2 = chosen.j_n == pg2.prev_wrapping_index(chosen.j);
    let mut result = Polygon::with_capacity(pg1.vertex_count() + pg2.vertex_count());
    push_chain(&mut result, pg1, chosen.i_n, chosen.i, forward1);
    push_chain(&mut result, pg2, chosen.j, chosen.j_n, forward2);
    result
}
