//! Minute track: sixty positions per item.

use super::{Layer, LocalTransform, Part, standing_solid};
use crate::config::{MinuteMarkerItem, MinuteMarkerType};
use crate::float_types::{PI, Real};
use crate::placement::{radial_rotation, resolve};
use crate::profile::ProfileShape;

/// Minute indices that carry geometry for `item`.
///
/// Numerals appear only on multiples of five. Other types cover all sixty
/// minutes, minus the multiples of five when `hideHourMarks` is set.
pub fn minute_indices(item: &MinuteMarkerItem) -> Vec<usize> {
    match item.kind() {
        MinuteMarkerType::Numeral => (0..60).step_by(5).collect(),
        MinuteMarkerType::Unknown(_) => Vec::new(),
        _ if item.hide_hour_marks() => (0..60).filter(|i| i % 5 != 0).collect(),
        _ => (0..60).collect(),
    }
}

/// Label of a numeral at minute `i`; the top reads 60.
pub fn minute_label(i: usize) -> String {
    if i == 0 { "60".to_string() } else { i.to_string() }
}

/// Z rotation of the element at minute `i`. Turned numerals on the lower
/// half of the dial (minutes 20 to 40) get an extra half turn so they read
/// upright.
pub fn minute_rotation(item: &MinuteMarkerItem, i: usize) -> Real {
    if !item.rotate() {
        return 0.0;
    }
    let radial = radial_rotation(i as Real / 5.0);
    match item.kind() {
        MinuteMarkerType::Numeral if (20..=40).contains(&i) => radial + PI,
        MinuteMarkerType::Circle => 0.0,
        _ => radial,
    }
}

fn shape(item: &MinuteMarkerItem, i: usize) -> Option<ProfileShape> {
    match item.kind() {
        MinuteMarkerType::Line => Some(ProfileShape::Rectangle {
            width: item.width(),
            height: item.length(),
        }),
        MinuteMarkerType::Circle => Some(ProfileShape::Circle {
            radius: item.circle_radius(),
        }),
        MinuteMarkerType::Blocks => Some(ProfileShape::Trapezoid {
            top_width: item.top_width(),
            bottom_width: item.bottom_width(),
            length: item.length(),
            cutout: 0.0,
        }),
        MinuteMarkerType::Numeral => Some(ProfileShape::Numeral {
            text: minute_label(i),
            size: item.font_size(),
        }),
        MinuteMarkerType::Unknown(_) => None,
    }
}

pub fn generate(item: &MinuteMarkerItem) -> Vec<Part> {
    if let MinuteMarkerType::Unknown(name) = item.kind() {
        tracing::debug!(%name, "unknown minute marker type renders nothing");
        return Vec::new();
    }
    let policy = item.bevel().policy(item.thickness());
    let label = item.name.clone().unwrap_or_else(|| "minute".to_string());

    // every non-numeral tick shares one mesh
    let shared = match item.kind() {
        MinuteMarkerType::Numeral => None,
        _ => shape(item, 0).map(|s| standing_solid(&s.build::<()>(None), &policy)),
    };

    let mut parts = Vec::new();
    for i in minute_indices(item) {
        let (mesh, z) = match &shared {
            Some((mesh, z)) => (mesh.clone(), *z),
            None => match shape(item, i) {
                Some(s) => standing_solid(&s.build::<()>(None), &policy),
                None => continue,
            },
        };
        if mesh.is_empty() {
            continue;
        }
        let center = resolve(i as Real / 5.0, item.offset());
        parts.push(Part::new(
            format!("{label} {i}"),
            mesh,
            item.material(),
            LocalTransform::at(center, z, minute_rotation(item, i)),
            Layer::Surface,
        ));
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn track(doc: serde_json::Value) -> MinuteMarkerItem {
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn hour_marks_can_be_hidden() {
        let item = track(json!({"type": "line", "hideHourMarks": true}));
        let idx = minute_indices(&item);
        assert_eq!(idx.len(), 48);
        assert!(idx.iter().all(|i| i % 5 != 0));
        assert_eq!(generate(&item).len(), 48);
    }

    #[test]
    #[cfg(feature = "hershey-text")]
    fn numerals_ignore_hide_hour_marks() {
        let item = track(json!({"type": "numeral", "hideHourMarks": true}));
        assert_eq!(minute_indices(&item), (0..60).step_by(5).collect::<Vec<_>>());
        let parts = generate(&item);
        assert_eq!(parts.len(), 12);
        assert_eq!(parts[0].name, "minute 0");
    }

    #[test]
    fn lower_half_numerals_flip() {
        let item = track(json!({"type": "numeral"}));
        let at_30 = minute_rotation(&item, 30);
        // radial rotation at the bottom is a half turn; the flip cancels it
        assert!((at_30 - 0.0).abs() < 1e-12);
        let at_15 = minute_rotation(&item, 15);
        assert!((at_15 + PI / 2.0).abs() < 1e-12);
        let at_20 = minute_rotation(&item, 20);
        assert!((at_20 - (radial_rotation(4.0) + PI)).abs() < 1e-12);
    }

    #[test]
    fn labels() {
        assert_eq!(minute_label(0), "60");
        assert_eq!(minute_label(35), "35");
    }
}
