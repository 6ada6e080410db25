//! Small 2D vector helpers on top of nalgebra
//!
//! nalgebra already covers addition, scaling, dot products and magnitudes.
//! The functions here fill the few gaps the engine needs in two dimensions.

use nalgebra::{Point2, Vector2};

/// Z-component of the cross product of two 2D vectors
///
/// # Examples
///
/// ```
/// use orrery::math::cross_z;
/// use nalgebra::Vector2;
///
/// let x = Vector2::new(1.0, 0.0);
/// let y = Vector2::new(0.0, 1.0);
/// assert_eq!(cross_z(&x, &y), 1.0);
/// assert_eq!(cross_z(&y, &x), -1.0);
/// ```
pub fn cross_z(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

pub fn distance_squared(a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    (b - a).magnitude_squared()
}

pub fn distance(a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    (b - a).magnitude()
}

/// Rotates a vector by +90°, the direction of counter-clockwise motion
/// for a body sitting at `v` relative to its center
pub fn perpendicular_ccw(v: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Mass-weighted mean of `(mass, position)` pairs
///
/// Returns `None` when the total mass is not positive, since the
/// mean is undefined there.
///
/// # Examples
///
/// ```
/// use orrery::math::center_of_mass;
/// use nalgebra::Point2;
///
/// let com = center_of_mass([(1.0, Point2::new(0.0, 0.0)), (3.0, Point2::new(4.0, 0.0))]);
/// assert_eq!(com, Some(Point2::new(3.0, 0.0)));
/// ```
pub fn center_of_mass<I>(bodies: I) -> Option<Point2<f64>>
where
    I: IntoIterator<Item = (f64, Point2<f64>)>,
{
    let (total_mass, weighted) = bodies.into_iter().fold(
        (0.0, Vector2::zeros()),
        |(m_acc, p_acc): (f64, Vector2<f64>), (m, p)| (m_acc + m, p_acc + p.coords * m),
    );

    (total_mass > 0.0).then(|| Point2::from(weighted / total_mass))
}
