mod support;

use dialforge::Profile;
use dialforge::float_types::Real;
use dialforge::profile::{ProfileShape, mirror_outline};
use dialforge::traits::TransformOps;
use support::approx_eq;

#[test]
fn mirrored_outline_closes_on_the_axis() {
    let outline = mirror_outline(&[[0.5, 0.0], [0.3, 5.0]]);
    // two injected axis points make m = 4, so 2m vertices
    assert_eq!(outline.points.len(), 8);
    assert_eq!(outline.points[0], [0.0, 0.0]);
    assert_eq!(outline.points[3], [0.0, 5.0]);
    assert_eq!(outline.points[4], [-0.0, 5.0]);
    assert_eq!(outline.source[0], None);
    assert_eq!(outline.source[1], Some(0));
    assert_eq!(outline.source[6], Some(0));
}

#[test]
fn points_on_the_axis_are_not_injected() {
    let outline = mirror_outline(&[[0.0, -1.0], [0.4, 2.0], [0.0, 6.0]]);
    assert_eq!(outline.points.len(), 6);
    assert!(outline.source.iter().all(Option::is_some));
}

#[test]
fn mirrored_profile_is_symmetric() {
    let p: Profile<()> = Profile::mirrored(&[[0.6, -1.0], [0.4, 4.0], [0.1, 8.0]], None, None);
    let bb = p.bounding_box();
    assert!(approx_eq(bb.mins.x, -bb.maxs.x, 1e-12));
    assert!(approx_eq(bb.mins.y, -1.0, 1e-12));
    assert!(approx_eq(bb.maxs.y, 8.0, 1e-12));
}

#[test]
fn short_cutout_is_skipped() {
    let points = [[0.6, 0.0], [0.4, 6.0]];
    let plain: Profile<()> = Profile::mirrored(&points, None, None);
    let skipped: Profile<()> = Profile::mirrored(&points, Some(&[[0.2, 2.0]][..]), None);
    let no_points: [[Real; 2]; 0] = [];
    let empty: Profile<()> = Profile::mirrored(&points, Some(&no_points[..]), None);
    let notched: Profile<()> = Profile::mirrored(&points, Some(&[[0.2, 2.0], [0.2, 4.0]][..]), None);
    assert!(approx_eq(plain.area(), skipped.area(), 1e-12));
    assert!(approx_eq(plain.area(), empty.area(), 1e-12));
    assert!(notched.area() < plain.area());
    assert!(!notched.is_empty());
}

#[test]
fn short_outline_is_empty() {
    assert!(Profile::<()>::mirrored(&[[0.5, 1.0]], None, None).is_empty());
    assert!(Profile::<()>::mirrored(&[], None, None).is_empty());
}

#[test]
fn ring_hole_is_concentric() {
    let ring: Profile<()> = ProfileShape::Ring {
        outer_radius: 2.0,
        inner_radius: 1.0,
    }
    .build(None);
    let rings = ring.rings();
    assert_eq!(rings.len(), 1);
    assert_eq!(rings[0].1.len(), 1);
    let (lo, hi) = support::radial_range(&rings[0].1[0], nalgebra::Point2::origin());
    assert!(approx_eq(lo, 1.0, 1e-9) && approx_eq(hi, 1.0, 1e-9));
}

#[test]
fn triangle_marker_has_a_point() {
    let tri: Profile<()> = ProfileShape::Trapezoid {
        top_width: 1.2,
        bottom_width: 0.0,
        length: 3.0,
        cutout: 0.0,
    }
    .build(None);
    assert_eq!(tri.rings()[0].0.len(), 3);
    assert!(approx_eq(tri.area(), 0.5 * 1.2 * 3.0, 1e-9));
}

#[test]
fn trapezoid_cutout_scales_the_outline() {
    let solid: Profile<()> = Profile::trapezoid(1.2, 0.8, 3.0, None);
    let hollow = solid.clone().with_scaled_hole(0.5);
    assert!(approx_eq(hollow.area(), solid.area() * 0.75, 1e-9));
    // out of range factors leave the outline alone
    assert!(approx_eq(solid.clone().with_scaled_hole(1.5).area(), solid.area(), 1e-12));
}

#[test]
fn crescent_spans_its_radius() {
    let c: Profile<()> = Profile::crescent(3.0, None);
    let bb = c.bounding_box();
    assert!(approx_eq(bb.mins.x, -3.0, 1e-9));
    assert!(approx_eq(bb.maxs.x, 3.0, 1e-9));
    assert!(approx_eq(bb.mins.y, -3.0, 1e-6));
    assert!(bb.maxs.y < 3.0);
}

#[test]
#[cfg(feature = "hershey-text")]
fn numerals_center_on_their_width() {
    let eight: Profile<()> = Profile::numeral("8", 2.0, None);
    let double: Profile<()> = Profile::numeral("88", 2.0, None);
    let (a, b) = (eight.bounding_box(), double.bounding_box());
    // glyph ink is not exactly symmetric inside its advance box
    assert!(approx_eq(a.mins.x + a.maxs.x, 0.0, 0.2));
    assert!(approx_eq(b.mins.x + b.maxs.x, 0.0, 0.2));
    assert!(b.mins.x < a.mins.x - 0.5);
    assert!(approx_eq(a.mins.y + a.maxs.y, 0.0, 1e-9));
}
