//! Struct and functions for working with `Vertex`s from which `Polygon`s are composed.

use crate::float_types::Real;
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

/// A vertex of a polygon, holding position and normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – (optionally non‑unit) normal; a zero normal is replaced by
    ///              the owning polygon's face normal in `Polygon::new`.
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { pos, normal }
    }

    /// Flip vertex normal
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Apply an affine transform. Normals go through the inverse-transpose of
    /// the linear part so non-uniform scales keep them perpendicular.
    pub fn transformed(&self, matrix: &Matrix4<Real>, normal_matrix: &Matrix3<Real>) -> Vertex {
        let pos = matrix.transform_point(&self.pos);
        let n = normal_matrix * self.normal;
        let normal = if n.norm_squared() > 0.0 { n.normalize() } else { n };
        Vertex::new(pos, normal)
    }

    /// Return the linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        let new_pos = self.pos + (other.pos - self.pos) * t;
        let new_normal = self.normal + (other.normal - self.normal) * t;
        Vertex::new(new_pos, new_normal)
    }
}
