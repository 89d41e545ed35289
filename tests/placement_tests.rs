mod support;

use dialforge::float_types::Real;
use dialforge::placement::{Placement, hour_angle, radial_rotation, resolve};
use proptest::prelude::*;
use support::approx_eq;

#[test]
fn twelve_and_zero_are_the_top() {
    assert_eq!(hour_angle(0.0), hour_angle(12.0));
    assert_eq!(resolve(0.0, 17.0), resolve(12.0, 17.0));
    let top = resolve(12.0, 17.0);
    assert!(approx_eq(top.x, 0.0, 1e-12) && approx_eq(top.y, 17.0, 1e-12));
}

#[test]
fn quarter_hours() {
    let right = resolve(3.0, 10.0);
    assert!(approx_eq(right.x, 10.0, 1e-9) && approx_eq(right.y, 0.0, 1e-9));
    let bottom = resolve(6.0, 10.0);
    assert!(approx_eq(bottom.x, 0.0, 1e-9) && approx_eq(bottom.y, -10.0, 1e-9));
    let left = Placement::new(9.0, 10.0).position();
    assert!(approx_eq(left.x, -10.0, 1e-9) && approx_eq(left.y, 0.0, 1e-9));
}

proptest! {
    #[test]
    fn distance_from_center_is_the_offset(vector in 0.0..12.0 as Real, offset in 0.0..50.0 as Real) {
        let p = resolve(vector, offset);
        prop_assert!(approx_eq(p.coords.norm(), offset, 1e-9));
    }

    #[test]
    fn opposite_hours_mirror_through_the_center(vector in 0.0..6.0 as Real, offset in 0.0..50.0 as Real) {
        let a = resolve(vector, offset);
        let b = resolve(vector + 6.0, offset);
        prop_assert!(approx_eq(a.x, -b.x, 1e-9));
        prop_assert!(approx_eq(a.y, -b.y, 1e-9));
    }

    #[test]
    fn radial_rotation_points_outward(vector in 0.0..12.0 as Real) {
        // +Y turned by the radial rotation lands on the placement direction
        let r = radial_rotation(vector);
        let dir = resolve(vector, 1.0);
        prop_assert!(approx_eq(-r.sin(), dir.x, 1e-9));
        prop_assert!(approx_eq(r.cos(), dir.y, 1e-9));
    }
}
