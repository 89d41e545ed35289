//! The dial face: a disk with one hole per visible complication window.

use super::{Layer, LocalTransform, Part, windows};
use crate::config::{FaceConfig, Item, WindowItem};
use crate::profile::Profile;

/// Segments of the face outline.
pub const FACE_SEGMENTS: usize = 256;

/// The face disk with every visible window punched through it, using the
/// same outline and placement as the window backgrounds.
pub fn profile(face: &FaceConfig, windows: &[WindowItem]) -> Profile<()> {
    let disk = Profile::circle(face.radius(), FACE_SEGMENTS, None);
    windows
        .iter()
        .filter(|w| !w.is_hidden())
        .filter_map(windows::placed_outline)
        .fold(disk, |face, hole| face.punch(&hole))
}

pub fn generate(face: &FaceConfig, windows: &[WindowItem]) -> Vec<Part> {
    let policy = face.bevel().policy(face.thickness());
    let mesh = profile(face, windows).to_solid(&policy);
    if mesh.is_empty() {
        tracing::warn!(radius = face.radius(), "face has no area");
        return Vec::new();
    }
    // top of the face on z = 0
    let z = -policy.total_height() / 2.0;
    vec![Part::new(
        "face",
        mesh,
        face.material(),
        LocalTransform::new(0.0, 0.0, z, 0.0),
        Layer::Face,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TransformOps;
    use serde_json::json;

    #[test]
    fn face_top_is_at_zero() {
        let parts = generate(&FaceConfig::default(), &[]);
        let bb = parts[0].world_mesh().bounding_box();
        assert!(bb.maxs.z.abs() < 1e-12);
        assert!((bb.mins.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn hidden_windows_leave_no_hole() {
        let hidden: WindowItem = serde_json::from_value(json!({"hidden": true})).unwrap();
        let shown: WindowItem = serde_json::from_value(json!({})).unwrap();
        let face = FaceConfig::default();
        assert!(profile(&face, &[hidden]).rings()[0].1.is_empty());
        assert_eq!(profile(&face, &[shown]).rings()[0].1.len(), 1);
    }
}
