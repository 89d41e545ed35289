//! Free-form elements: single numbers, circular label sets and stand-alone
//! hand-shaped outlines.

use super::{Layer, LocalTransform, Part, standing_solid};
use crate::config::{PrimitiveItem, PrimitiveType};
use crate::float_types::Real;
use crate::placement::{radial_rotation, resolve};
use crate::profile::Profile;

/// Clock vector of label `k` out of `n`, starting at `start` and going
/// clockwise in equal steps.
pub fn label_vector(start: Real, k: usize, n: usize) -> Real {
    if n == 0 {
        return start;
    }
    start + 12.0 * k as Real / n as Real
}

pub fn generate(item: &PrimitiveItem) -> Vec<Part> {
    let policy = item.bevel().policy(item.thickness());
    let placement = item.placement();
    let label = item.name.clone().unwrap_or_else(|| "primitive".to_string());
    let turn = |vector: Real| if item.rotate() { radial_rotation(vector) } else { 0.0 };

    match item.kind() {
        PrimitiveType::Number => {
            let (mesh, z) = standing_solid(&Profile::numeral(item.text(), item.font_size(), None), &policy);
            if mesh.is_empty() {
                tracing::debug!(text = item.text(), "number has no drawable digits");
                return Vec::new();
            }
            vec![Part::new(
                label,
                mesh,
                item.material(),
                LocalTransform::at(placement.position(), z, turn(placement.vector)),
                Layer::Surface,
            )]
        },
        PrimitiveType::CircularLabels => {
            let labels = item.labels();
            let n = labels.len();
            labels
                .iter()
                .enumerate()
                .filter_map(|(k, text)| {
                    let (mesh, z) = standing_solid(&Profile::numeral(text, item.font_size(), None), &policy);
                    if mesh.is_empty() {
                        return None;
                    }
                    let vector = label_vector(placement.vector, k, n);
                    Some(Part::new(
                        format!("{label} {text}"),
                        mesh,
                        item.material(),
                        LocalTransform::at(resolve(vector, placement.offset), z, turn(vector)),
                        Layer::Surface,
                    ))
                })
                .collect()
        },
        PrimitiveType::HandShape => {
            let profile = Profile::mirrored(&item.points(), item.cutout_points(), None);
            let (mesh, z) = standing_solid(&profile, &policy);
            if mesh.is_empty() {
                return Vec::new();
            }
            vec![Part::new(
                label,
                mesh,
                item.material(),
                LocalTransform::at(placement.position(), z, turn(placement.vector)),
                Layer::Surface,
            )]
        },
        PrimitiveType::Unknown(name) => {
            tracing::debug!(%name, "unknown primitive type renders nothing");
            Vec::new()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn primitive(doc: serde_json::Value) -> PrimitiveItem {
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    #[cfg(feature = "hershey-text")]
    fn circular_labels_go_round_the_dial() {
        let parts = generate(&primitive(json!({"type": "circularLabels", "count": 4})));
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0].name, "primitive 4");
        let top = parts[0].transform.position;
        assert!(top.x.abs() < 1e-9 && (top.y - 14.0).abs() < 1e-9);
        let right = parts[1].transform.position;
        assert!((right.x - 14.0).abs() < 1e-9 && right.y.abs() < 1e-9);
    }

    #[test]
    #[cfg(feature = "hershey-text")]
    fn explicit_labels_win() {
        let parts = generate(&primitive(json!({"type": "circularLabels", "labels": ["10", "20"], "count": 9})));
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].name, "primitive 20");
    }

    #[test]
    #[cfg(feature = "hershey-text")]
    fn number_sits_at_the_center_by_default() {
        let parts = generate(&primitive(json!({"type": "number", "text": "7"})));
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].transform.position.x, 0.0);
        assert_eq!(generate(&primitive(json!({"type": "number", "text": "IV"}))).len(), 1);
        assert!(generate(&primitive(json!({"type": "number", "text": ""}))).is_empty());
    }

    #[test]
    fn hand_shape_uses_the_outline() {
        let parts = generate(&primitive(json!({"type": "handShape", "vector": 6.0, "offset": 5.0, "rotate": true})));
        assert_eq!(parts.len(), 1);
        assert!((parts[0].transform.position.y + 5.0).abs() < 1e-9);
    }

    #[test]
    fn label_vectors() {
        assert_eq!(label_vector(0.0, 3, 12), 3.0);
        assert_eq!(label_vector(1.0, 0, 0), 1.0);
    }
}
