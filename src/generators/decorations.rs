//! Rings and lines drawn on the face.

use super::{Layer, LocalTransform, Part, standing_solid};
use crate::config::{DecorationItem, DecorationType};
use crate::placement::radial_rotation;
use crate::profile::Profile;
use crate::profile::shapes::CIRCLE_SEGMENTS;

/// Segments of a decoration ring; rings can span most of the dial.
pub const RING_SEGMENTS: usize = 4 * CIRCLE_SEGMENTS;

pub fn generate(item: &DecorationItem) -> Vec<Part> {
    let placement = item.placement();
    let (profile, rotation) = match item.kind() {
        DecorationType::Ring => (
            Profile::ring(item.radius() + item.width(), item.radius(), RING_SEGMENTS, None),
            0.0,
        ),
        DecorationType::Line => (
            Profile::rectangle(item.width(), item.length(), None),
            radial_rotation(placement.vector) + item.angle().to_radians(),
        ),
        DecorationType::Unknown(name) => {
            tracing::debug!(%name, "unknown decoration type renders nothing");
            return Vec::new();
        },
    };
    let (mesh, z) = standing_solid(&profile, &item.bevel().policy(item.thickness()));
    if mesh.is_empty() {
        return Vec::new();
    }
    let name = item.name.clone().unwrap_or_else(|| "decoration".to_string());
    vec![Part::new(
        name,
        mesh,
        item.material(),
        LocalTransform::at(placement.position(), z, rotation),
        Layer::Surface,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TransformOps;
    use serde_json::json;

    fn decoration(doc: serde_json::Value) -> DecorationItem {
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn ring_is_centered_by_default() {
        let parts = generate(&decoration(json!({"type": "ring", "radius": 10.0, "width": 0.5})));
        let bb = parts[0].world_mesh().bounding_box();
        assert!((bb.maxs.x - 10.5).abs() < 1e-9);
        assert!((bb.mins.y + 10.5).abs() < 1e-9);
        assert!(bb.mins.z.abs() < 1e-12);
    }

    #[test]
    fn line_points_outward_plus_angle() {
        let parts = generate(&decoration(json!({"type": "line", "vector": 3.0, "offset": 8.0, "angle": 90.0})));
        let t = parts[0].transform;
        assert!((t.position.x - 8.0).abs() < 1e-9);
        // radial at 3 o'clock is a quarter turn clockwise, the angle undoes it
        assert!(t.rotation_z.abs() < 1e-12);
    }

    #[test]
    fn unknown_decoration_is_empty() {
        assert!(generate(&decoration(json!({"type": "spiral"}))).is_empty());
    }
}
