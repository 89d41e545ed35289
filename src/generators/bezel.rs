//! The bezel ring around the face.

use super::face::FACE_SEGMENTS;
use super::{Layer, LocalTransform, Part, standing_solid};
use crate::config::{BezelConfig, FaceConfig};
use crate::float_types::Real;
use crate::profile::Profile;

/// Inner and outer radius of the bezel profile. A bevel grows the profile
/// by its size in every direction, so both radii move out by the same
/// amount to keep the inner edge flush with the face.
pub fn radii(bezel: &BezelConfig, face: &FaceConfig) -> (Real, Real) {
    let bevel = bezel.bevel();
    let grow = if bevel.enabled { bevel.size.max(0.0) } else { 0.0 };
    let inner = face.radius() + grow;
    (inner, inner + bezel.width())
}

pub fn generate(bezel: &BezelConfig, face: &FaceConfig) -> Vec<Part> {
    if bezel.is_hidden() {
        return Vec::new();
    }
    let (inner, outer) = radii(bezel, face);
    let profile = Profile::ring(outer, inner, FACE_SEGMENTS, None);
    let (mesh, z) = standing_solid(&profile, &bezel.bevel().policy(bezel.thickness()));
    if mesh.is_empty() {
        tracing::warn!(inner, outer, "bezel has no area");
        return Vec::new();
    }
    vec![Part::new(
        "bezel",
        mesh,
        bezel.material(),
        LocalTransform::new(0.0, 0.0, z, 0.0),
        Layer::Bezel,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TransformOps;
    use serde_json::json;

    #[test]
    fn flush_with_the_face() {
        let bezel = BezelConfig::default();
        let face = FaceConfig::default();
        assert_eq!(radii(&bezel, &face), (20.0, 22.0));
        let parts = generate(&bezel, &face);
        let bb = parts[0].world_mesh().bounding_box();
        assert!((bb.maxs.x - 22.0).abs() < 1e-9);
        assert!(bb.mins.z.abs() < 1e-12);
        assert!((bb.maxs.z - 1.5).abs() < 1e-12);
    }

    #[test]
    fn bevel_moves_the_ring_out() {
        let bezel: BezelConfig =
            serde_json::from_value(json!({"bevel": {"enabled": true, "size": 0.25}})).unwrap();
        let (inner, outer) = radii(&bezel, &FaceConfig::default());
        assert!((inner - 20.25).abs() < 1e-12);
        assert!((outer - 22.25).abs() < 1e-12);
    }

    #[test]
    fn hidden_bezel() {
        let bezel: BezelConfig = serde_json::from_value(json!({"hidden": true})).unwrap();
        assert!(generate(&bezel, &FaceConfig::default()).is_empty());
    }
}
