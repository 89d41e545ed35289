use crate::float_types::Real;
use crate::mesh::{Mesh, vertex::Vertex};
use crate::profile::Profile;
use nalgebra::Vector3;
use std::fmt::Debug;

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each triangle.
    ///
    /// The triangle is `[v0, v1, v2]` with positions+normals.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]);

    /// Collect every triangle into a vector.
    fn triangles(&self) -> Vec<[Vertex; 3]> {
        let mut out = Vec::new();
        self.visit_triangles(|tri| out.push(tri));
        out
    }
}

impl<S: Clone + Send + Sync + Debug> Triangulated3D for Mesh<S> {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for poly in &self.polygons {
            for tri in poly.triangulate() {
                f(tri);
            }
        }
    }
}

impl<S: Clone + Send + Sync + Debug> Triangulated3D for Profile<S> {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        let up: Vector3<Real> = Vector3::z();
        for tri in self.triangulate() {
            f(tri.map(|p| Vertex::new(p, up)));
        }
    }
}
