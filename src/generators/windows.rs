//! Complication windows: a background plane under the face, seen through
//! the face's hole, and an optional frame standing on the face.

use super::{Layer, LocalTransform, Part, standing_solid};
use crate::config::{WindowItem, WindowType};
use crate::float_types::Real;
use crate::profile::Profile;
use crate::profile::shapes::CIRCLE_SEGMENTS;
use crate::traits::TransformOps;

/// The window opening centered on the origin, or `None` for a window type
/// the engine does not know. The face punches exactly this outline.
pub fn outline(item: &WindowItem) -> Option<Profile<()>> {
    match item.kind() {
        WindowType::Circle => Some(Profile::circle(item.radius(), CIRCLE_SEGMENTS, None)),
        WindowType::Rectangle => Some(Profile::rectangle(item.width(), item.height(), None)),
        WindowType::Crescent => Some(Profile::crescent(item.radius(), None)),
        WindowType::Unknown(_) => None,
    }
}

/// [`outline`] moved to the window's dial position.
pub fn placed_outline(item: &WindowItem) -> Option<Profile<()>> {
    let position = item.placement().position();
    outline(item).map(|p| p.translate(position.x, position.y, 0.0))
}

fn frame_profile(item: &WindowItem) -> Option<Profile<()>> {
    let fw = item.frame_width();
    match item.kind() {
        WindowType::Circle => Some(Profile::ring(
            item.radius() + fw,
            item.radius(),
            CIRCLE_SEGMENTS,
            None,
        )),
        WindowType::Rectangle => Some(Profile::rectangle_frame(
            item.width() + 2.0 * fw,
            item.height() + 2.0 * fw,
            fw,
            None,
        )),
        WindowType::Crescent | WindowType::Unknown(_) => None,
    }
}

pub fn generate(item: &WindowItem, face_thickness: Real) -> Vec<Part> {
    let Some(opening) = outline(item) else {
        tracing::debug!(?item.kind, "unknown window type renders nothing");
        return Vec::new();
    };
    let position = item.placement().position();
    let label = item.name.clone().unwrap_or_else(|| "window".to_string());

    let mut parts = vec![Part::new(
        format!("{label} background"),
        opening.to_plane(),
        item.background_material(),
        LocalTransform::at(position, -face_thickness / 2.0, 0.0),
        Layer::Background,
    )];

    if item.frame() {
        if let Some(frame) = frame_profile(item) {
            let (mesh, z) = standing_solid(&frame, &item.bevel().policy(item.frame_thickness()));
            parts.push(Part::new(
                format!("{label} frame"),
                mesh,
                item.frame_material(),
                LocalTransform::at(position, z, 0.0),
                Layer::Surface,
            ));
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn window(doc: serde_json::Value) -> WindowItem {
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn crescent_has_no_frame() {
        let parts = generate(&window(json!({"type": "crescent", "frame": true})), 1.0);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].layer, Layer::Background);
    }

    #[test]
    fn background_sits_inside_the_face() {
        let parts = generate(&window(json!({"type": "circle"})), 1.0);
        assert_eq!(parts.len(), 2);
        let bb = parts[0].world_mesh().bounding_box();
        assert!((bb.mins.z + 0.5).abs() < 1e-12 && (bb.maxs.z + 0.5).abs() < 1e-12);
        let frame = parts[1].world_mesh().bounding_box();
        assert!(frame.mins.z.abs() < 1e-12);
    }

    #[test]
    fn unknown_window_is_empty() {
        assert!(generate(&window(json!({"type": "hexagon"})), 1.0).is_empty());
    }
}
