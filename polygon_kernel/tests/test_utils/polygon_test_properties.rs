use polygon_kernel::{core::traits::FuzzyEq, polygon::Polygon};
use static_aabb2d_index::AABB;

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a polygon for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct PolygonProperties {
    pub vertex_count: usize,
    pub area: f64,
    pub perimeter: f64,
    pub extents: AABB<f64>,
}

impl PolygonProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-4;

    pub fn new(
        vertex_count: usize,
        area: f64,
        perimeter: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            vertex_count,
            area,
            perimeter,
            extents: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    /// Properties of `polygon`, area is always positive so winding does not matter.
    pub fn from_polygon(polygon: &Polygon<f64>) -> Self {
        Self {
            vertex_count: polygon.vertex_count(),
            area: polygon.area(),
            perimeter: polygon.perimeter(),
            extents: polygon.extents().unwrap(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        if self.vertex_count != other.vertex_count {
            return false;
        }
        if !self.area.fuzzy_eq_eps(other.area, eps) {
            return false;
        }
        if !self.perimeter.fuzzy_eq_eps(other.perimeter, eps) {
            return false;
        }
        if !aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps) {
            return false;
        }
        true
    }
}

/// Compare polygon properties, printing both sets when they do not match.
pub fn properties_match(result: &PolygonProperties, expected: &PolygonProperties) -> bool {
    let matches = result.fuzzy_eq_eps(expected, PolygonProperties::PROP_CMP_EPS);
    if !matches {
        eprintln!("result:\n{:?}", result);
        eprintln!("expected:\n{:?}", expected);
    }

    matches
}

/// Returns true if every vertex of `expected` appears in `result` (within `eps`), in any order.
pub fn has_all_vertexes(result: &Polygon<f64>, expected: &Polygon<f64>, eps: f64) -> bool {
    expected
        .iter_vertexes()
        .all(|v| result.iter_vertexes().any(|r| r.fuzzy_eq_eps(v, eps)))
}
