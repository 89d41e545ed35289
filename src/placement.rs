//! Clock-hour placement.
//!
//! Every positioned element on the dial is located by a clock-hour `vector`
//! (0–12, fractional values allowed) and a radial `offset` from the dial
//! centre. The dial lies in the XY plane with +Y towards 12 o'clock and +X
//! towards 3 o'clock, so hours advance clockwise when viewed from +Z.

use crate::float_types::{FRAC_PI_6, Real};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Angle (radians, clockwise from +Y) of a clock-hour vector.
///
/// `vector = 0` and `vector = 12` both resolve to exactly `0.0`. Values outside
/// `0..=12` are not clamped; the trigonometry in [`resolve`] is periodic in 12.
#[inline]
pub fn hour_angle(vector: Real) -> Real {
    let hour = if vector % 12.0 == 0.0 { 0.0 } else { vector };
    hour * FRAC_PI_6
}

/// Convert a clock-hour vector and radial offset into dial coordinates.
///
/// ```
/// use dialforge::placement::resolve;
/// let p = resolve(3.0, 17.0);
/// assert!((p.x - 17.0).abs() < 1e-9 && p.y.abs() < 1e-9);
/// ```
#[inline]
pub fn resolve(vector: Real, offset: Real) -> Point2<Real> {
    let angle = hour_angle(vector);
    Point2::new(angle.sin() * offset, angle.cos() * offset)
}

/// Z rotation that turns a shape drawn pointing at 12 o'clock (+Y) so it
/// points outward along `vector`.
#[inline]
pub fn radial_rotation(vector: Real) -> Real {
    -hour_angle(vector)
}

/// A stored `{vector, offset}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub vector: Real,
    pub offset: Real,
}

impl Placement {
    pub const fn new(vector: Real, offset: Real) -> Self {
        Self { vector, offset }
    }

    pub fn position(&self) -> Point2<Real> {
        resolve(self.vector, self.offset)
    }

    pub fn angle(&self) -> Real {
        hour_angle(self.vector)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point2<Real>, b: Point2<Real>) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn cardinal_hours() {
        let d = 10.0;
        assert_eq!(resolve(0.0, d), resolve(12.0, d));
        assert!(close(resolve(0.0, d), Point2::new(0.0, d)));
        assert!(close(resolve(3.0, d), Point2::new(d, 0.0)));
        assert!(close(resolve(6.0, d), Point2::new(0.0, -d)));
        assert!(close(resolve(9.0, d), Point2::new(-d, 0.0)));
    }

    #[test]
    fn twelve_is_exactly_zero_angle() {
        assert_eq!(hour_angle(12.0), 0.0);
        assert_eq!(hour_angle(24.0), 0.0);
        assert_eq!(hour_angle(0.0), 0.0);
    }

    #[test]
    fn fractional_vectors_interpolate_clockwise() {
        // half past one on the hour ring is between 1 and 2 o'clock
        let p = resolve(1.5, 1.0);
        assert!(p.x > 0.0 && p.y > 0.0);
        assert!((hour_angle(1.5) - 1.5 * FRAC_PI_6).abs() < 1e-12);
    }

    #[test]
    fn radial_rotation_turns_up_vector_outward() {
        let rot = nalgebra::Rotation2::new(radial_rotation(3.0));
        let v = rot * nalgebra::Vector2::new(0.0, 1.0);
        assert!((v.x - 1.0).abs() < 1e-9 && v.y.abs() < 1e-9);
    }
}
