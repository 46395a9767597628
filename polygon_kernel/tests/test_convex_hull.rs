mod test_utils;

use polygon_kernel::{
    assert_fuzzy_eq,
    core::{math::Vector2, traits::FuzzyEq},
    polygon,
    polygon::{ConvexHullOptions, Orientation, Polygon},
    PolygonError,
};
use test_utils::has_all_vertexes;

fn pts(coords: &[(f64, f64)]) -> Vec<Vector2<f64>> {
    coords.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

fn assert_is_input_point(hull: &Polygon<f64>, points: &[Vector2<f64>]) {
    for v in hull.iter_vertexes() {
        assert!(points.contains(&v), "hull vertex {:?} is not an input point", v);
    }
}

fn assert_convex_ccw(hull: &Polygon<f64>) {
    assert_eq!(hull.orientation(), Orientation::CounterClockwise);
    for i in 0..hull.vertex_count() as isize {
        let a = hull.vertex(i).unwrap();
        let b = hull.vertex(i + 1).unwrap();
        let c = hull.vertex(i + 2).unwrap();
        assert!((b - a).perp_dot(c - b) > 0.0, "not convex at {}", i + 1);
    }
}

#[test]
fn square_with_interior_points() {
    let points = pts(&[
        (0.5, 0.5),
        (2.0, 2.0),
        (1.0, 1.5),
        (0.0, 0.0),
        (2.0, 0.0),
        (0.2, 1.8),
        (0.0, 2.0),
        (1.9, 0.1),
    ]);
    for cull in [false, true] {
        let options = ConvexHullOptions {
            cull_interior_points: cull,
        };
        let hull = Polygon::convex_hull_opt(&points, &options).unwrap();
        assert_eq!(hull.vertex_count(), 4);
        assert_fuzzy_eq!(hull.area(), 4.0);
        let expected = polygon![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
        assert!(has_all_vertexes(&hull, &expected, 0.0));
        assert_convex_ccw(&hull);
        // starts at the lowest point
        assert_eq!(hull.at(0), Vector2::new(0.0, 0.0));
    }
}

#[test]
fn collinear_boundary_points_skipped() {
    let points = pts(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (2.0, 2.0),
        (0.0, 2.0),
        (1.0, 1.0),
    ]);
    let hull = Polygon::convex_hull(&points).unwrap();
    assert_eq!(hull.vertex_count(), 4);
    assert!(!hull.vertexes().contains(&Vector2::new(1.0, 0.0)));
    assert_convex_ccw(&hull);
}

#[test]
fn duplicate_points() {
    let points = pts(&[
        (0.0, 0.0),
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 0.0),
        (0.0, 1.0),
    ]);
    let hull = Polygon::convex_hull(&points).unwrap();
    assert_eq!(hull.vertex_count(), 3);
    assert_fuzzy_eq!(hull.area(), 0.5);
}

#[test]
fn hull_contains_all_points() {
    // deterministic scatter inside a circle of radius 5
    let points: Vec<Vector2<f64>> = (0..200)
        .map(|i| {
            let i = i as f64;
            let r = 5.0 * ((i * 0.618_033_988_7) % 1.0).sqrt();
            let a = i * 2.399_963_229_7;
            Vector2::new(r * a.cos(), r * a.sin())
        })
        .collect();

    let hull = Polygon::convex_hull(&points).unwrap();
    assert!(hull.vertex_count() >= 3);
    assert_is_input_point(&hull, &points);
    for &p in points.iter() {
        assert!(
            hull.contains_point(p) || hull.is_on_boundary(p, 1e-6),
            "{:?} outside hull",
            p
        );
    }

    let culled = Polygon::convex_hull_opt(
        &points,
        &ConvexHullOptions {
            cull_interior_points: true,
        },
    )
    .unwrap();
    assert!(culled.fuzzy_eq_eps(&hull, 1e-12));
}

#[test]
fn collinear_input_gives_segment() {
    let points = pts(&[(0.0, 0.0), (3.0, 3.0), (1.0, 1.0), (2.0, 2.0)]);
    let hull = Polygon::convex_hull(&points).unwrap();
    assert_eq!(hull.vertex_count(), 2);
    assert!(!hull.is_valid());
}

#[test]
fn too_few_points() {
    let points = pts(&[(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(
        Polygon::convex_hull(&points),
        Err(PolygonError::InsufficientPoints {
            expected: 3,
            actual: 2
        })
    );
}

#[test]
fn identical_points() {
    let points = pts(&[(1.0, 2.0), (1.0, 2.0), (1.0, 2.0), (1.0, 2.0)]);
    for cull in [false, true] {
        let options = ConvexHullOptions {
            cull_interior_points: cull,
        };
        assert_eq!(
            Polygon::convex_hull_opt(&points, &options),
            Err(PolygonError::InsufficientPoints {
                expected: 3,
                actual: 1
            })
        );
    }
}
