use polygon_kernel::{core::math::Vector2, core::traits::Real, polygon::Polygon};

/// Regular polygon approximating a circle of radius 40.
pub fn circle<T>(vertex_count: usize) -> Polygon<T>
where
    T: Real,
{
    spiky(vertex_count, T::zero())
}

/// Star polygon alternating between radius 40 and `40 - spike_depth`, concave when
/// `spike_depth > 0`.
pub fn spiky<T>(vertex_count: usize, spike_depth: T) -> Polygon<T>
where
    T: Real,
{
    let radius = T::from(40.0).unwrap();
    let tau = T::from(std::f64::consts::TAU).unwrap();
    let mut result = Polygon::with_capacity(vertex_count);

    for i in 0..vertex_count {
        let angle = T::from(i).unwrap() * tau / T::from(vertex_count).unwrap();
        let r = if i % 2 == 0 { radius } else { radius - spike_depth };
        result.add(r * angle.cos(), r * angle.sin());
    }

    result
}

/// Deterministic scatter of points inside a disk of radius 40.
pub fn point_cloud<T>(count: usize) -> Vec<Vector2<T>>
where
    T: Real,
{
    (0..count)
        .map(|i| {
            let i = T::from(i).unwrap();
            let golden = T::from(0.618_033_988_7).unwrap();
            let r = T::from(40.0).unwrap() * (i * golden).fract().sqrt();
            let a = i * T::from(2.399_963_229_7).unwrap();
            Vector2::new(r * a.cos(), r * a.sin())
        })
        .collect()
}
