//! Hands. Every hand mesh points at 12 o'clock with the pivot at the
//! origin; its z rotation comes from [`crate::kinematics`].

use super::{Layer, LocalTransform, Part};
use crate::config::defaults::{HAND_PIVOT_HEIGHT, HAND_SEGMENTS};
use crate::config::{HandItem, HandSettings, HandType, Item};
use crate::extrude::ExtrudePolicy;
use crate::float_types::Real;
use crate::kinematics::{HandTime, hand_angle};
use crate::mesh::Mesh;
use crate::profile::Profile;
use crate::traits::TransformOps;
use nalgebra::Point3;

/// Tilt of each half of a faceted hand, in degrees.
pub const FACET_TILT_DEGREES: Real = 15.0;

/// Revolved taper from the tail to the tip with a sphere on each end and a
/// pivot cylinder. The tail sits at `-offset * length`.
pub fn tapered_cylinder(item: &HandItem) -> Mesh<()> {
    let length = item.length();
    let tail_y = -item.offset() * length;
    let tip_y = tail_y + length;
    let (tail_r, tip_r) = (item.width() / 2.0, item.tip_width() / 2.0);
    let stacks = HAND_SEGMENTS / 2;

    let taper = Mesh::frustum_ptp(
        Point3::new(0.0, tail_y, 0.0),
        Point3::new(0.0, tip_y, 0.0),
        tail_r,
        tip_r,
        HAND_SEGMENTS,
        None,
    );
    let tail_cap = Mesh::sphere(tail_r, HAND_SEGMENTS, stacks, None).translate(0.0, tail_y, 0.0);
    let tip_cap = Mesh::sphere(tip_r, HAND_SEGMENTS, stacks, None).translate(0.0, tip_y, 0.0);
    // hub around the pivot, as tall as the tail is thick
    let hub = Mesh::cylinder(item.width(), 2.0 * tail_r, HAND_SEGMENTS, None)
        .translate(0.0, 0.0, -tail_r);

    Mesh::merge_all([&taper, &tail_cap, &tip_cap, &hub])
}

/// Mirrored outline with an optional notch, extruded with the hand's bevel.
pub fn parametric_flat(item: &HandItem) -> Mesh<()> {
    let cutout = item.cutout_points();
    if let Some(points) = cutout {
        if points.len() < 2 {
            tracing::debug!(points = points.len(), "hand cutout needs two points, ignored");
        }
    }
    Profile::mirrored(&item.points(), cutout, None).to_solid(&item.bevel().policy(item.thickness()))
}

/// Two half outlines, each extruded flat and tilted about Y so they meet in
/// a ridge along the hand's axis.
pub fn parametric_faceted(item: &HandItem) -> Mesh<()> {
    let points = item.points();
    let policy = ExtrudePolicy::flat(item.thickness());
    let right = Profile::half(&points, None);
    if right.is_empty() {
        return Mesh::new();
    }
    let left = right.mirror_x();
    let right = right.to_solid(&policy).rotate(0.0, FACET_TILT_DEGREES, 0.0);
    let left = left.to_solid(&policy).rotate(0.0, -FACET_TILT_DEGREES, 0.0);
    right.merge(&left)
}

/// Hand mesh in local space, or an empty mesh for unknown types.
pub fn hand_mesh(item: &HandItem) -> Mesh<()> {
    match item.kind() {
        HandType::TaperedCylinder => tapered_cylinder(item),
        HandType::ParametricFlat => parametric_flat(item),
        HandType::ParametricFaceted => parametric_faceted(item),
        HandType::Unknown(name) => {
            tracing::debug!(%name, "unknown hand type renders nothing");
            Mesh::new()
        },
    }
}

/// A posed hand. Frozen settings override `time` with the reference instant.
pub fn generate(item: &HandItem, settings: &HandSettings, time: HandTime) -> Vec<Part> {
    let mesh = hand_mesh(item);
    if mesh.is_empty() {
        return Vec::new();
    }
    let time = if settings.frozen() { HandTime::Frozen } else { time };
    let kind = item.hand();
    let name = item.name.clone().unwrap_or_else(|| format!("{kind:?} hand").to_lowercase());
    let mut part = Part::new(
        name,
        mesh,
        item.material(),
        LocalTransform::new(0.0, 0.0, item.z(), hand_angle(kind, time)),
        Layer::Hands,
    );
    part.hand = Some(kind);
    vec![part]
}

/// Shared center cap rising from the face to just above the highest hand.
pub fn pivot(settings: &HandSettings, hands: &[HandItem]) -> Option<Part> {
    if !settings.pivot() {
        return None;
    }
    let top = hands
        .iter()
        .filter(|h| !h.is_hidden())
        .map(|h| h.z() + h.thickness() / 2.0)
        .fold(None, |acc: Option<Real>, z| Some(acc.map_or(z, |a| a.max(z))))?;
    let height = top + HAND_PIVOT_HEIGHT / 2.0;
    let mesh = Mesh::cylinder(settings.pivot_radius(), height, HAND_SEGMENTS, None);
    if mesh.is_empty() {
        return None;
    }
    Some(Part::new(
        "pivot",
        mesh,
        settings.pivot_material(),
        LocalTransform::default(),
        Layer::Hands,
    ))
}
