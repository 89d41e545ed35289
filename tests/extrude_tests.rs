mod support;

use dialforge::Profile;
use dialforge::extrude::{Bevel, ExtrudePolicy};
use dialforge::float_types::Real;
use dialforge::traits::TransformOps;
use proptest::prelude::*;
use support::{approx_eq, mesh_bounds};

fn bevel(enabled: bool, thickness: Real, size: Real, segments: Real) -> Bevel {
    Bevel {
        enabled,
        thickness,
        size,
        segments,
    }
}

#[test]
fn fractional_segments_round() {
    assert_eq!(bevel(true, 0.1, 0.1, 2.4).policy(1.0).segment_count(), 2);
    assert_eq!(bevel(true, 0.1, 0.1, 2.6).policy(1.0).segment_count(), 3);
    assert_eq!(bevel(true, 0.1, 0.1, 0.2).policy(1.0).segment_count(), 1);
    assert_eq!(bevel(true, 0.1, 0.1, -3.0).policy(1.0).segment_count(), 1);
}

#[test]
fn flat_solid_is_centered_on_its_mid_plane() {
    let solid = Profile::<()>::rectangle(2.0, 4.0, None).to_solid(&ExtrudePolicy::flat(1.0));
    let bb = mesh_bounds(&solid);
    assert!(approx_eq(bb[2], -0.5, 1e-12));
    assert!(approx_eq(bb[5], 0.5, 1e-12));
    assert!(approx_eq(bb[3], 1.0, 1e-12));
    // 2 caps of 2 triangles plus 4 walls
    assert_eq!(solid.polygons.len(), 8);
}

#[test]
fn bevel_adds_height_and_width() {
    let policy = bevel(true, 0.2, 0.1, 3.0).policy(1.0);
    let solid = Profile::<()>::rectangle(2.0, 2.0, None).to_solid(&policy);
    let bb = solid.bounding_box();
    assert!(approx_eq(bb.maxs.z - bb.mins.z, 1.4, 1e-12));
    assert!(approx_eq(bb.maxs.z + bb.mins.z, 0.0, 1e-12));
    assert!(approx_eq(bb.maxs.x, 1.1, 1e-9));
}

#[test]
fn empty_profile_gives_no_solid() {
    let solid = Profile::<()>::circle(0.0, 64, None).to_solid(&ExtrudePolicy::flat(1.0));
    assert!(solid.is_empty());
    let flat = Profile::<()>::circle(1.0, 64, None).to_solid(&ExtrudePolicy::flat(0.0));
    assert!(flat.is_empty());
}

proptest! {
    #[test]
    fn effective_policy_is_idempotent(
        enabled in any::<bool>(),
        thickness in -1.0..2.0 as Real,
        size in -1.0..2.0 as Real,
        segments in -2.0..12.0 as Real,
        depth in -1.0..5.0 as Real,
    ) {
        let policy = bevel(enabled, thickness, size, segments).policy(depth);
        let once = policy.effective();
        prop_assert_eq!(once.effective(), once);
        prop_assert_eq!(once.layers(), policy.layers());
        prop_assert!(once.segments >= 1.0 && once.segments.fract() == 0.0);
    }

    #[test]
    fn layers_climb(
        thickness in 0.0..1.0 as Real,
        size in 0.0..1.0 as Real,
        segments in 1.0..8.0 as Real,
        depth in 0.01..5.0 as Real,
    ) {
        let layers = bevel(true, thickness, size, segments).policy(depth).layers();
        prop_assert!(layers.windows(2).all(|w| w[0].0 <= w[1].0));
        let total = layers[layers.len() - 1].0 - layers[0].0;
        prop_assert!(approx_eq(total, depth + 2.0 * thickness, 1e-9));
    }
}
