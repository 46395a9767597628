use super::Vector2;
use crate::core::traits::Real;

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the parametric value on the line segment going from `p0` to `p1` at the `point` given.
///
/// Assumes `point` lies on the line. Vertical segments are detected with `epsilon` and use the y
/// coordinate instead of x.
#[inline]
pub fn parametric_from_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>, epsilon: T) -> T
where
    T: Real,
{
    if p0.x.fuzzy_eq_eps(p1.x, epsilon) {
        (point.y - p0.y) / (p1.y - p0.y)
    } else {
        (point.x - p0.x) / (p1.x - p0.x)
    }
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
///
/// The projection of `point` onto the segment line is clamped to the segment end points.
///
/// # Examples
///
/// ```
/// # use polygon_kernel::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(2.0, 0.0);
/// assert!(line_seg_closest_point(p0, p1, Vector2::new(1.0, 3.0)).fuzzy_eq(Vector2::new(1.0, 0.0)));
/// assert!(line_seg_closest_point(p0, p1, Vector2::new(-1.0, 1.0)).fuzzy_eq(p0));
/// assert!(line_seg_closest_point(p0, p1, Vector2::new(5.0, 1.0)).fuzzy_eq(p1));
/// ```
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 < T::fuzzy_epsilon() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 < c1 + T::fuzzy_epsilon() {
        return p1;
    }

    let b = c1 / c2;
    p0 + v.scale(b)
}

/// Monotonic pseudo angle of the direction vector `(dx, dy)` in the range `[0, 4)`.
///
/// The value orders directions the same way as `atan2` mapped to `[0, 2PI)` does but only uses a
/// division. `(0, 0)` maps to 0.
///
/// # Examples
///
/// ```
/// # use polygon_kernel::core::math::*;
/// assert_eq!(pseudo_angle(1.0, 0.0), 0.0);
/// assert_eq!(pseudo_angle(0.0, 1.0), 1.0);
/// assert_eq!(pseudo_angle(-1.0, 0.0), 2.0);
/// assert_eq!(pseudo_angle(0.0, -1.0), 3.0);
/// assert!(pseudo_angle(1.0, 1.0) < pseudo_angle(-1.0, 1.0));
/// ```
#[inline]
pub fn pseudo_angle<T>(dx: T, dy: T) -> T
where
    T: Real,
{
    let denom = dx.abs() + dy.abs();
    if denom == T::zero() {
        return T::zero();
    }

    let p = dy / denom;
    if dx < T::zero() {
        T::two() - p
    } else if dy < T::zero() {
        T::four() + p
    } else {
        p
    }
}

/// Perpendicular distance from `point` to the line segment `p0` to `p1`.
#[inline]
pub fn line_seg_distance<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    (line_seg_closest_point(p0, p1, point) - point).length()
}
