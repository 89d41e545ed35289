//! Element generators: one module per configuration category.
//!
//! A generator maps one configuration record to zero or more [`Part`]s. A
//! part's mesh is in local space, drawn pointing at 12 o'clock where that
//! matters, and its [`LocalTransform`] places it on the dial. Generators
//! never fail; anything they cannot build is skipped and logged.
//!
//! Z placement follows one convention: the face top is `z = 0` and the face
//! extends down to `-thickness`; window backgrounds sit at half the face
//! thickness below the top; everything else stands on `z = 0`, except hands
//! which float at their own height.

use crate::config::HandKind;
use crate::extrude::ExtrudePolicy;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::profile::Profile;
use crate::traits::TransformOps;
use nalgebra::{Matrix4, Point2, Rotation3, Translation3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

pub mod bezel;
pub mod decorations;
pub mod face;
pub mod hands;
pub mod markers;
pub mod minute_markers;
pub mod primitives;
pub mod windows;

/// Stacking group of an element; the scene is ordered by layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Layer {
    Background,
    Face,
    Surface,
    Bezel,
    Hands,
}

/// Position plus rotation about +Z, applied rotation first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocalTransform {
    pub position: Vector3<Real>,
    pub rotation_z: Real,
}

impl LocalTransform {
    pub fn new(x: Real, y: Real, z: Real, rotation_z: Real) -> Self {
        LocalTransform {
            position: Vector3::new(x, y, z),
            rotation_z,
        }
    }

    pub fn at(point: Point2<Real>, z: Real, rotation_z: Real) -> Self {
        Self::new(point.x, point.y, z, rotation_z)
    }

    pub fn matrix(&self) -> Matrix4<Real> {
        Translation3::from(self.position).to_homogeneous()
            * Rotation3::from_axis_angle(&Vector3::z_axis(), self.rotation_z).to_homogeneous()
    }
}

/// One positioned solid produced by a generator.
#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub mesh: Mesh<()>,
    pub material: String,
    pub transform: LocalTransform,
    pub layer: Layer,
    /// Set for hands so the host can re-pose them every tick.
    pub hand: Option<HandKind>,
}

impl Part {
    pub fn new(
        name: impl Into<String>,
        mesh: Mesh<()>,
        material: &str,
        transform: LocalTransform,
        layer: Layer,
    ) -> Self {
        Part {
            name: name.into(),
            mesh,
            material: material.to_string(),
            transform,
            layer,
            hand: None,
        }
    }

    /// The mesh with its transform applied.
    pub fn world_mesh(&self) -> Mesh<()> {
        self.mesh.transform(&self.transform.matrix())
    }
}

/// Extrude `profile` and report the z that puts the solid's bottom on
/// `z = 0` (the solid itself is centered on its mid-plane).
pub(crate) fn standing_solid(profile: &Profile<()>, policy: &ExtrudePolicy) -> (Mesh<()>, Real) {
    (profile.to_solid(policy), policy.total_height() / 2.0)
}

/// Rotate a local offset by `rotation_z` and add it to `center`.
pub(crate) fn offset_point(center: Point2<Real>, local: Vector2<Real>, rotation_z: Real) -> Point2<Real> {
    let (s, c) = rotation_z.sin_cos();
    center + Vector2::new(c * local.x - s * local.y, s * local.x + c * local.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::FRAC_PI_2;

    #[test]
    fn transform_rotates_then_translates() {
        let t = LocalTransform::new(5.0, 0.0, 1.0, FRAC_PI_2);
        let p = t.matrix().transform_point(&nalgebra::Point3::new(0.0, 1.0, 0.0));
        assert!((p - nalgebra::Point3::new(4.0, 0.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn offset_point_follows_rotation() {
        let p = offset_point(Point2::new(17.0, 0.0), Vector2::new(1.0, 0.0), -FRAC_PI_2);
        assert!((p - Point2::new(17.0, -1.0)).norm() < 1e-12);
    }
}
