//! Planar, convex facets that make up a [`Mesh`](super::Mesh).

use crate::float_types::{Real, tolerance};
use crate::mesh::vertex::Vertex;
use nalgebra::{Matrix3, Matrix4, Vector3};

/// A convex planar polygon with per-vertex normals and optional metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<S: Clone> {
    pub vertices: Vec<Vertex>,
    /// Unit face normal (Newell's method); zero for degenerate polygons.
    pub normal: Vector3<Real>,
    pub metadata: Option<S>,
}

impl<S: Clone> Polygon<S> {
    /// Build a polygon from its vertices in counter-clockwise order (seen from
    /// the side the normal points to). Vertices carrying a zero normal get the
    /// face normal.
    pub fn new(mut vertices: Vec<Vertex>, metadata: Option<S>) -> Self {
        let normal = newell_normal(&vertices);
        for v in &mut vertices {
            if v.normal.norm_squared() < tolerance() {
                v.normal = normal;
            }
        }
        Polygon {
            vertices,
            normal,
            metadata,
        }
    }

    /// True when the polygon encloses no area.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3 || self.normal.norm_squared() < 0.5
    }

    /// Reverse winding order and flip every normal.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
        self.normal = -self.normal;
    }

    /// Fan-triangulate. Facets produced by this crate are always convex.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        if self.vertices.len() < 3 {
            return Vec::new();
        }
        let anchor = self.vertices[0];
        self.vertices
            .windows(2)
            .skip(1)
            .map(|pair| [anchor, pair[0], pair[1]])
            .collect()
    }

    /// Apply `matrix` to every vertex. A mirroring matrix (negative
    /// determinant) also reverses winding so the polygon keeps facing outward.
    pub fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        let linear: Matrix3<Real> = matrix.fixed_view::<3, 3>(0, 0).into_owned();
        let normal_matrix = linear
            .try_inverse()
            .map(|inv| inv.transpose())
            .unwrap_or_else(Matrix3::identity);
        let vertices: Vec<Vertex> = self
            .vertices
            .iter()
            .map(|v| v.transformed(matrix, &normal_matrix))
            .collect();
        let mut poly = Polygon::new(vertices, self.metadata.clone());
        if linear.determinant() < 0.0 {
            poly.vertices.reverse();
            poly.normal = newell_normal(&poly.vertices);
        }
        poly
    }

    /// Returns a reference to the metadata, if any.
    pub const fn metadata(&self) -> Option<&S> {
        self.metadata.as_ref()
    }

    /// Returns a mutable reference to the metadata, if any.
    pub const fn metadata_mut(&mut self) -> Option<&mut S> {
        self.metadata.as_mut()
    }

    /// Sets the metadata to the given value.
    pub fn set_metadata(&mut self, data: S) {
        self.metadata = Some(data);
    }
}

/// Newell's method: robust normal for any simple planar polygon.
fn newell_normal(vertices: &[Vertex]) -> Vector3<Real> {
    let mut n = Vector3::zeros();
    for (i, current) in vertices.iter().enumerate() {
        let next = &vertices[(i + 1) % vertices.len()];
        let (c, d) = (current.pos, next.pos);
        n.x += (c.y - d.y) * (c.z + d.z);
        n.y += (c.z - d.z) * (c.x + d.x);
        n.z += (c.x - d.x) * (c.y + d.y);
    }
    if n.norm() > tolerance() {
        n.normalize()
    } else {
        Vector3::zeros()
    }
}
