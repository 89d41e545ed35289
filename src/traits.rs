use crate::aabb::Aabb;
use crate::float_types::Real;
use nalgebra::{Matrix4, Rotation3, Translation3, Vector3};

/// Affine transformations shared by 2D profiles and 3D meshes.
pub trait TransformOps: Sized + Clone {
    fn new() -> Self;
    fn transform(&self, matrix: &Matrix4<Real>) -> Self;
    fn bounding_box(&self) -> Aabb;
    fn invalidate_bounding_box(&mut self);

    /// Returns a new Self translated by vector.
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        self.transform(&Translation3::from(vector).to_homogeneous())
    }

    /// Returns a new Self translated by x, y, and z.
    fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }

    /// Returns a new Self translated so that its bounding-box center is at the origin (0,0,0).
    fn center(&self) -> Self {
        let c = self.bounding_box().center();
        self.translate(-c.x, -c.y, -c.z)
    }

    /// Translates the object so that its bottommost point(s) sit exactly at z=0.
    fn float(&self) -> Self {
        let min_z = self.bounding_box().mins.z;
        self.translate(0.0, 0.0, -min_z)
    }

    /// Rotates by x_degrees, y_degrees, z_degrees (applied x, then y, then z).
    fn rotate(&self, x_deg: Real, y_deg: Real, z_deg: Real) -> Self {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), x_deg.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), y_deg.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), z_deg.to_radians());

        let rot = rz * ry * rx;
        self.transform(&rot.to_homogeneous())
    }

    /// Rotates about the z axis by `radians` (counter-clockwise seen from +Z).
    fn rotate_z(&self, radians: Real) -> Self {
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), radians);
        self.transform(&rz.to_homogeneous())
    }

    /// Scales by scale_x, scale_y, scale_z
    fn scale(&self, sx: Real, sy: Real, sz: Real) -> Self {
        let mat4 = Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz));
        self.transform(&mat4)
    }

    /// Mirror across the YZ plane (x → -x).
    fn mirror_x(&self) -> Self {
        self.scale(-1.0, 1.0, 1.0)
    }
}
