//! Geometry export for the host renderer.
//!
//! Every writer consumes [`Triangulated3D`](crate::triangulated::Triangulated3D),
//! so meshes, profiles and whole scenes share the same back ends. Each
//! format is behind a cargo feature.

#[cfg(feature = "stl-io")]
pub mod stl;

#[cfg(feature = "gltf-io")]
pub mod gltf;

use crate::float_types::Real;
use crate::mesh::vertex::Vertex;
use nalgebra::Vector3;

/// Unit normal of a triangle from its winding, or the first vertex normal
/// when the triangle has no area.
pub(crate) fn facet_normal(tri: &[Vertex; 3]) -> Vector3<Real> {
    let n = (tri[1].pos - tri[0].pos).cross(&(tri[2].pos - tri[0].pos));
    match n.try_normalize(0.0) {
        Some(n) => n,
        None => tri[0].normal,
    }
}
