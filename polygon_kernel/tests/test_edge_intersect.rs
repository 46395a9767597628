use polygon_kernel::core::{
    math::{edge_edge_intr, EdgeEdgeIntr, Vector2},
    traits::FuzzyEq,
};

const EPS: f64 = 1e-5;

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

fn assert_point(result: EdgeEdgeIntr<f64>, expected_t1: f64, expected_t2: f64) {
    match result {
        EdgeEdgeIntr::Point { t1, t2 }
            if t1.fuzzy_eq(expected_t1) && t2.fuzzy_eq(expected_t2) => {}
        r => panic!(
            "expected point at ({}, {}), got: {:?}",
            expected_t1, expected_t2, r
        ),
    }
}

fn assert_collinear(result: EdgeEdgeIntr<f64>, expected_start: f64, expected_end: f64) {
    match result {
        EdgeEdgeIntr::Collinear { t1_start, t1_end }
            if t1_start.fuzzy_eq(expected_start) && t1_end.fuzzy_eq(expected_end) => {}
        r => panic!(
            "expected collinear from {} to {}, got: {:?}",
            expected_start, expected_end, r
        ),
    }
}

fn assert_no_intersect(result: EdgeEdgeIntr<f64>) {
    assert!(
        matches!(result, EdgeEdgeIntr::NoIntersect),
        "expected no intersect, got: {:?}",
        result
    );
}

mod crossing {
    use super::*;

    #[test]
    fn overlapping_squares() {
        // right edge of the square at the origin against the bottom edge of the square at (1, 1)
        let r = edge_edge_intr(v(2.0, 0.0), v(2.0, 2.0), v(1.0, 1.0), v(3.0, 1.0), EPS);
        assert_point(r, 0.5, 0.5);
    }

    #[test]
    fn argument_order_swaps_parameters() {
        let (v1, v2) = (v(0.0, 1.0), v(2.0, 1.0));
        let (u1, u2) = (v(1.0, 0.0), v(1.0, 4.0));
        assert_point(edge_edge_intr(v1, v2, u1, u2, EPS), 0.5, 0.25);
        assert_point(edge_edge_intr(u1, u2, v1, v2, EPS), 0.25, 0.5);
        // reversing an edge mirrors its parameter
        assert_point(edge_edge_intr(v2, v1, u1, u2, EPS), 0.5, 0.25);
        assert_point(edge_edge_intr(v1, v2, u2, u1, EPS), 0.5, 0.75);
    }

    #[test]
    fn lines_cross_outside_edges() {
        let r = edge_edge_intr(v(0.0, 0.0), v(1.0, 0.0), v(2.0, -1.0), v(2.0, 1.0), EPS);
        assert_no_intersect(r);
        let r = edge_edge_intr(v(0.0, 0.0), v(1.0, 0.0), v(0.5, 0.5), v(0.5, 2.0), EPS);
        assert_no_intersect(r);
    }

    #[test]
    fn single_precision() {
        let r = edge_edge_intr(
            Vector2::new(2.0f32, 0.0),
            Vector2::new(2.0, 2.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(3.0, 1.0),
            1e-4,
        );
        match r {
            EdgeEdgeIntr::Point { t1, t2 } => {
                assert!(t1.fuzzy_eq(0.5));
                assert!(t2.fuzzy_eq(0.5));
            }
            r => panic!("expected edges to cross, got: {:?}", r),
        }
    }
}

mod touching {
    use super::*;

    #[test]
    fn vertex_on_edge() {
        // triangle with its bottom vertex (2, 0) resting on the square's bottom edge
        let (s1, s2) = (v(0.0, 0.0), v(4.0, 0.0));
        assert_point(edge_edge_intr(s1, s2, v(2.0, 0.0), v(3.0, 2.0), EPS), 0.5, 0.0);
        assert_point(edge_edge_intr(s1, s2, v(1.0, 2.0), v(2.0, 0.0), EPS), 0.5, 1.0);
    }

    #[test]
    fn adjacent_edges_share_vertex() {
        let r = edge_edge_intr(v(0.0, 0.0), v(2.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), EPS);
        assert_point(r, 1.0, 0.0);
    }

    #[test]
    fn end_point_within_epsilon() {
        // end of the first edge stops just short of the second edge
        let (u1, u2) = (v(1.0 + 1e-7, -1.0), v(1.0 + 1e-7, 1.0));
        let r = edge_edge_intr(v(0.0, 0.0), v(1.0, 0.0), u1, u2, EPS);
        match r {
            // clamped onto the edge
            EdgeEdgeIntr::Point { t1, t2 } => {
                assert_eq!(t1, 1.0);
                assert!(t2.fuzzy_eq(0.5));
            }
            r => panic!("expected touching point, got: {:?}", r),
        }

        let r = edge_edge_intr(v(0.0, 0.0), v(1.0, 0.0), u1, u2, 1e-9);
        assert_no_intersect(r);
    }
}

mod parallel {
    use super::*;

    #[test]
    fn stacked_edges() {
        let r = edge_edge_intr(v(0.0, 0.0), v(2.0, 0.0), v(2.0, 1.0), v(0.0, 1.0), EPS);
        assert_no_intersect(r);
    }

    #[test]
    fn nearly_parallel_edges() {
        // lines meet far away, treated as parallel
        let r = edge_edge_intr(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), v(1.0, 1.0 + 1e-7), EPS);
        assert_no_intersect(r);
    }

    #[test]
    fn shared_edge_of_adjacent_squares() {
        // right edge of one square is the left edge of its neighbor (opposite direction)
        let r = edge_edge_intr(v(2.0, 0.0), v(2.0, 2.0), v(2.0, 2.0), v(2.0, 0.0), EPS);
        assert_collinear(r, 0.0, 1.0);

        // neighbor shifted up by one
        let r = edge_edge_intr(v(2.0, 0.0), v(2.0, 2.0), v(2.0, 3.0), v(2.0, 1.0), EPS);
        assert_collinear(r, 0.5, 1.0);
    }

    #[test]
    fn collinear_within_epsilon() {
        let r = edge_edge_intr(v(0.0, 0.0), v(2.0, 0.0), v(1.0, 1e-7), v(3.0, 1e-7), EPS);
        assert_collinear(r, 0.5, 1.0);
    }

    #[test]
    fn collinear_end_to_end() {
        let r = edge_edge_intr(v(0.0, 0.0), v(2.0, 0.0), v(2.0, 0.0), v(3.0, 0.0), EPS);
        assert_point(r, 1.0, 0.0);
    }

    #[test]
    fn collinear_apart() {
        let r = edge_edge_intr(v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(3.0, 0.0), EPS);
        assert_no_intersect(r);
    }
}

#[test]
fn zero_length_edge_never_meets() {
    let (p1, p2) = (v(0.0, 0.0), v(2.0, 0.0));
    let repeated = v(1.0, 0.0);
    assert_no_intersect(edge_edge_intr(p1, p2, repeated, repeated, EPS));
    assert_no_intersect(edge_edge_intr(repeated, repeated, p1, p2, EPS));
    assert_no_intersect(edge_edge_intr(repeated, v(1.0, 1e-7), p1, p2, EPS));
}
