//! Pole of inaccessibility by branch and bound over square cells.
use crate::{
    core::{math::Vector2, traits::Real},
    polygon::{Polygon, PoleOptions},
    PolygonError, PolygonResult,
};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, instrument, warn};

/// Square cell of the search grid.
#[derive(Debug, Copy, Clone)]
struct Cell<T> {
    center: Vector2<T>,
    /// Half the cell side length.
    h: T,
    /// Signed distance from the cell center to the polygon boundary (positive inside).
    distance: T,
    /// Upper bound on the distance any point in the cell can reach.
    max_distance: T,
}

impl<T> Cell<T>
where
    T: Real,
{
    fn new(center: Vector2<T>, h: T, polygon: &Polygon<T>) -> PolygonResult<Self> {
        let distance = polygon.signed_distance(center)?;
        Ok(Cell {
            center,
            h,
            distance,
            max_distance: distance + h * T::sqrt2(),
        })
    }
}

impl<T> PartialEq for Cell<T>
where
    T: Real,
{
    fn eq(&self, other: &Self) -> bool {
        self.max_distance == other.max_distance
    }
}

impl<T> Eq for Cell<T> where T: Real {}

impl<T> PartialOrd for Cell<T>
where
    T: Real,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cell<T>
where
    T: Real,
{
    fn cmp(&self, other: &Self) -> Ordering {
        // max heap on the distance upper bound
        self.max_distance
            .partial_cmp(&other.max_distance)
            .unwrap_or(Ordering::Equal)
    }
}

/// Find the point inside `polygon` farthest from its boundary.
///
/// The bounding box is tiled with square cells of side `min(width, height)` which are then
/// refined, always expanding the cell with the greatest possible distance first. Cells that
/// cannot improve on the best distance found by more than the precision are discarded. The
/// search stops when no cells remain or `options.max_probes` cells have been examined.
///
/// Degenerate polygons with a zero width or height bounding box return the
/// [centroid](Polygon::centroid).
#[instrument(level = "debug", skip_all, fields(vertex_count = polygon.vertex_count()))]
pub fn pole_of_inaccessibility<T>(
    polygon: &Polygon<T>,
    options: &PoleOptions<T>,
) -> PolygonResult<Vector2<T>>
where
    T: Real,
{
    polygon.check_valid()?;
    let extents = polygon.extents().ok_or(PolygonError::EmptyPolygon)?;
    let width = extents.max_x - extents.min_x;
    let height = extents.max_y - extents.min_y;
    let cell_size = num_traits::real::Real::min(width, height);
    if cell_size.fuzzy_eq_zero() {
        debug!("zero size bounding box, using centroid");
        return polygon.centroid();
    }

    let h = cell_size / T::two();
    let precision = options.precision.unwrap_or_else(|| {
        num_traits::real::Real::min(T::one(), h / T::from(50.0).unwrap_or_else(T::one))
    });

    let mut cell_queue = BinaryHeap::new();
    let mut x = extents.min_x;
    while x < extents.max_x {
        let mut y = extents.min_y;
        while y < extents.max_y {
            cell_queue.push(Cell::new(Vector2::new(x + h, y + h), h, polygon)?);
            y = y + cell_size;
        }
        x = x + cell_size;
    }

    let mut best = Cell::new(polygon.centroid()?, T::zero(), polygon)?;
    let bbox_center = Vector2::new(
        extents.min_x + width / T::two(),
        extents.min_y + height / T::two(),
    );
    let bbox_cell = Cell::new(bbox_center, T::zero(), polygon)?;
    if bbox_cell.distance > best.distance {
        best = bbox_cell;
    }

    let mut probes = 0;
    while let Some(cell) = cell_queue.pop() {
        if probes >= options.max_probes {
            warn!(
                probes,
                queued = cell_queue.len() + 1,
                "probe budget exhausted, returning best candidate"
            );
            break;
        }
        probes += 1;

        if cell.distance > best.distance {
            best = cell;
        }

        if cell.max_distance - best.distance <= precision {
            continue;
        }

        let h = cell.h / T::two();
        let c = cell.center;
        cell_queue.push(Cell::new(Vector2::new(c.x - h, c.y - h), h, polygon)?);
        cell_queue.push(Cell::new(Vector2::new(c.x + h, c.y - h), h, polygon)?);
        cell_queue.push(Cell::new(Vector2::new(c.x - h, c.y + h), h, polygon)?);
        cell_queue.push(Cell::new(Vector2::new(c.x + h, c.y + h), h, polygon)?);
    }

    debug!(probes, distance = ?best.distance, "pole of inaccessibility found");
    Ok(best.center)
}
