//! Gift wrapping (Jarvis march) convex hull.
use crate::{
    core::{
        math::{pseudo_angle, Vector2},
        traits::Real,
    },
    polygon::{ConvexHullOptions, Polygon},
    PolygonError, PolygonResult,
};
use tracing::{debug, instrument};

/// Best next hull point found while scanning the candidates.
#[derive(Debug, Copy, Clone)]
struct WrapCandidate<T> {
    index: usize,
    angle: T,
    dist_squared: T,
}

/// Index of the lowest point (smallest y, ties broken by smallest x).
fn lowest_point_index<T>(points: &[Vector2<T>]) -> usize
where
    T: Real,
{
    let mut result = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let best = points[result];
        if p.y < best.y || (p.y == best.y && p.x < best.x) {
            result = i;
        }
    }

    result
}

/// Remove points strictly inside the quadrilateral formed by the extreme points in x and y
/// (Akl-Toussaint heuristic). Points on or near the quadrilateral boundary are kept.
fn cull_interior_points<T>(points: &mut Vec<Vector2<T>>)
where
    T: Real,
{
    let extreme = |better: &dyn Fn(Vector2<T>, Vector2<T>) -> bool| {
        points
            .iter()
            .copied()
            .reduce(|acc, p| if better(p, acc) { p } else { acc })
    };

    let (Some(min_y), Some(max_x), Some(max_y), Some(min_x)) = (
        extreme(&|p: Vector2<T>, acc: Vector2<T>| p.y < acc.y),
        extreme(&|p: Vector2<T>, acc: Vector2<T>| p.x > acc.x),
        extreme(&|p: Vector2<T>, acc: Vector2<T>| p.y > acc.y),
        extreme(&|p: Vector2<T>, acc: Vector2<T>| p.x < acc.x),
    ) else {
        return;
    };

    // counter clockwise quadrilateral
    let quad = [min_y, max_x, max_y, min_x];
    let eps = T::fuzzy_epsilon();
    let strictly_inside = |p: Vector2<T>| {
        (0..4).all(|k| {
            let a = quad[k];
            let b = quad[(k + 1) % 4];
            (b - a).perp_dot(p - a) > eps
        })
    };

    let count_before = points.len();
    points.retain(|&p| !strictly_inside(p));
    debug!(
        culled = count_before - points.len(),
        "culled interior points"
    );
}

/// Compute the convex hull of `points` by gift wrapping.
///
/// Starting at the lowest point, the next hull point is the one with the smallest
/// [pseudo angle](crate::core::math::pseudo_angle) not less than the current sweep angle (ties
/// go to the farthest point so collinear points are not included). Wrapping stops as soon as
/// returning to the start point is at least as good as any remaining candidate.
///
/// The result is counter clockwise and every vertex is one of the input points. If all points
/// are collinear the result has only 2 vertexes. Fewer than 2 distinct points is an
/// [PolygonError::InsufficientPoints] error, `actual` being the distinct point count.
#[instrument(level = "debug", skip_all, fields(point_count = points.len()))]
pub fn convex_hull<T>(
    points: &[Vector2<T>],
    options: &ConvexHullOptions,
) -> PolygonResult<Polygon<T>>
where
    T: Real,
{
    if points.len() < 3 {
        return Err(PolygonError::InsufficientPoints {
            expected: 3,
            actual: points.len(),
        });
    }

    let mut candidates = points.to_vec();
    if options.cull_interior_points {
        cull_interior_points(&mut candidates);
    }

    let start = candidates.swap_remove(lowest_point_index(&candidates));
    let mut hull = Polygon::new();
    hull.add_vertex(start);

    let eps = T::fuzzy_epsilon();
    let mut sweep = T::zero();
    let max_steps = candidates.len() + 1;
    for _ in 0..max_steps {
        let current = hull.at(hull.vertex_count() - 1);
        let mut best: Option<WrapCandidate<T>> = None;
        for (index, &p) in candidates.iter().enumerate() {
            let d = p - current;
            if d.x.fuzzy_eq_zero() && d.y.fuzzy_eq_zero() {
                continue;
            }

            let angle = pseudo_angle(d.x, d.y);
            if angle < sweep - eps {
                continue;
            }

            let dist_squared = d.length_squared();
            let is_better = match best {
                None => true,
                Some(b) => {
                    angle < b.angle - eps
                        || (angle.fuzzy_eq_eps(b.angle, eps) && dist_squared > b.dist_squared)
                }
            };

            if is_better {
                best = Some(WrapCandidate {
                    index,
                    angle,
                    dist_squared,
                });
            }
        }

        let Some(best) = best else {
            break;
        };

        if hull.vertex_count() > 1 {
            let to_start = start - current;
            let closing_angle = pseudo_angle(to_start.x, to_start.y);
            if closing_angle <= best.angle + eps {
                break;
            }
        }

        hull.add_vertex(candidates.swap_remove(best.index));
        sweep = best.angle;
    }

    if hull.vertex_count() < 2 {
        // every input point is the same point
        return Err(PolygonError::InsufficientPoints {
            expected: 3,
            actual: hull.vertex_count(),
        });
    }

    debug!(hull_count = hull.vertex_count(), "convex hull complete");
    Ok(hull)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Vector2<f64>> {
        coords.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
    }

    #[test]
    fn lowest_point_ties_on_x() {
        let points = pts(&[(3.0, 0.0), (1.0, 0.0), (2.0, 5.0)]);
        assert_eq!(lowest_point_index(&points), 1);
    }

    #[test]
    fn culling_keeps_extremes() {
        let mut points = pts(&[
            (0.0, -2.0),
            (2.0, 0.0),
            (0.0, 2.0),
            (-2.0, 0.0),
            (0.0, 0.0),
            (0.5, 0.5),
            (1.0, 1.0),
        ]);
        cull_interior_points(&mut points);
        assert_eq!(points.len(), 5);
        assert!(!points.contains(&Vector2::new(0.0, 0.0)));
        assert!(!points.contains(&Vector2::new(0.5, 0.5)));
        // on the quadrilateral edge
        assert!(points.contains(&Vector2::new(1.0, 1.0)));
    }

    #[test]
    fn collinear_points_give_segment() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let hull = convex_hull(&points, &ConvexHullOptions::new()).unwrap();
        assert_eq!(hull.vertex_count(), 2);
    }
}
