//! Hour markers: twelve positions per item, `i = 0` standing for 12.

use super::{Layer, LocalTransform, Part, offset_point, standing_solid};
use crate::config::{MarkerItem, MarkerType};
use crate::float_types::Real;
use crate::placement::{radial_rotation, resolve};
use crate::profile::{Profile, ProfileShape};
use nalgebra::Vector2;

/// Clock number shown at hour index `i`.
pub const fn hour_number(i: usize) -> usize {
    if i == 0 { 12 } else { i }
}

fn shape(item: &MarkerItem, number: usize) -> Option<ProfileShape> {
    match item.kind() {
        MarkerType::Blocks => Some(ProfileShape::Trapezoid {
            top_width: item.top_width(),
            bottom_width: item.bottom_width(),
            length: item.length(),
            cutout: item.cutout(),
        }),
        MarkerType::Triangle => Some(ProfileShape::Trapezoid {
            top_width: item.top_width(),
            bottom_width: 0.0,
            length: item.length(),
            cutout: item.cutout(),
        }),
        MarkerType::Circle => {
            let radius = item.circle_radius();
            let cutout = item.cutout();
            Some(ProfileShape::Ring {
                outer_radius: radius,
                inner_radius: if cutout > 0.0 && cutout < 1.0 { radius * cutout } else { 0.0 },
            })
        },
        MarkerType::Numeral => Some(ProfileShape::Numeral {
            text: number.to_string(),
            size: item.font_size(),
        }),
        MarkerType::Unknown(_) => None,
    }
}

pub fn generate(item: &MarkerItem) -> Vec<Part> {
    let kind = item.kind();
    if let MarkerType::Unknown(name) = &kind {
        tracing::debug!(%name, "unknown marker type renders nothing");
        return Vec::new();
    }
    let policy = item.bevel().policy(item.thickness());
    let label = item.name.clone().unwrap_or_else(|| "marker".to_string());

    let mut parts = Vec::new();
    for i in (0..12).filter(|&i| item.is_hour_visible(i)) {
        let number = hour_number(i);
        let Some(shape) = shape(item, number) else {
            continue;
        };
        let (mesh, z) = standing_solid(&shape.build::<()>(None), &policy);
        if mesh.is_empty() {
            tracing::trace!(hour = number, "marker has no area, skipped");
            continue;
        }

        let vector = i as Real;
        let center = resolve(vector, item.offset());
        let rotation = match kind {
            MarkerType::Blocks | MarkerType::Triangle => radial_rotation(vector),
            MarkerType::Numeral if item.rotate() => radial_rotation(vector),
            _ => 0.0,
        };

        if kind == MarkerType::Blocks && item.double_block() {
            let half = item.separation() / 2.0;
            for (side, dx) in [("a", -half), ("b", half)] {
                let position = offset_point(center, Vector2::new(dx, 0.0), rotation);
                parts.push(Part::new(
                    format!("{label} {number}{side}"),
                    mesh.clone(),
                    item.material(),
                    LocalTransform::at(position, z, rotation),
                    Layer::Surface,
                ));
            }
        } else {
            parts.push(Part::new(
                format!("{label} {number}"),
                mesh,
                item.material(),
                LocalTransform::at(center, z, rotation),
                Layer::Surface,
            ));
        }
    }
    parts
}

/// Profile of a single marker at hour index `i`, before placement.
pub fn marker_profile(item: &MarkerItem, i: usize) -> Profile<()> {
    shape(item, hour_number(i))
        .map(|s| s.build(None))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn marker(doc: serde_json::Value) -> MarkerItem {
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn all_hours_by_default() {
        assert_eq!(generate(&marker(json!({}))).len(), 12);
    }

    #[test]
    fn visible_hours_filter() {
        let parts = generate(&marker(json!({"visibleHours": [12, 6]})));
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].name, "marker 12");
        assert!((parts[0].transform.position.y - 17.0).abs() < 1e-12);
    }

    #[test]
    fn double_block_makes_pairs() {
        let parts = generate(&marker(json!({"doubleBlock": true, "visibleHours": [3]})));
        assert_eq!(parts.len(), 2);
    }

    #[test]
    #[cfg(feature = "hershey-text")]
    fn numerals_stay_upright_unless_rotated() {
        let upright = generate(&marker(json!({"type": "numeral", "visibleHours": [3]})));
        assert_eq!(upright[0].transform.rotation_z, 0.0);
        let turned = generate(&marker(json!({"type": "numeral", "visibleHours": [3], "rotate": true})));
        assert!(turned[0].transform.rotation_z < 0.0);
    }

    #[test]
    #[cfg(feature = "hershey-text")]
    fn two_digit_numerals_are_wider() {
        let twelve = marker_profile(&marker(json!({"type": "numeral"})), 0);
        let three = marker_profile(&marker(json!({"type": "numeral"})), 3);
        use crate::traits::TransformOps;
        assert!(twelve.bounding_box().mins.x < three.bounding_box().mins.x);
    }

    #[test]
    fn circle_cutout_makes_a_ring() {
        let p = marker_profile(&marker(json!({"type": "circle", "cutout": 0.5})), 1);
        assert_eq!(p.rings()[0].1.len(), 1);
    }
}
