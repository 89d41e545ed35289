//! 3D primitives that are not profile extrusions: spheres and frustums,
//! used for tapered-cylinder hands and pivot caps.

use crate::float_types::{PI, Real, TAU, tolerance};
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use crate::traits::TransformOps;
use nalgebra::{Point3, Rotation3, Translation3, Unit, Vector3};
use std::fmt::Debug;
use std::sync::OnceLock;

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// UV sphere centered at the origin with poles on the Y axis.
    ///
    /// `segments` is the number of slices around Y, `stacks` the number of
    /// bands from pole to pole. Fewer than 3 segments or 2 stacks yields an
    /// empty mesh.
    pub fn sphere(radius: Real, segments: usize, stacks: usize, metadata: Option<S>) -> Mesh<S> {
        if radius <= 0.0 || segments < 3 || stacks < 2 {
            return Mesh::new();
        }

        let point = |j: usize, i: usize| -> Vertex {
            let phi = PI * (j as Real) / (stacks as Real);
            let theta = TAU * (i as Real) / (segments as Real);
            let ring_radius = radius * phi.sin();
            let pos = Point3::new(
                ring_radius * theta.cos(),
                radius * phi.cos(),
                ring_radius * theta.sin(),
            );
            Vertex::new(pos, pos.coords / radius)
        };

        let mut polygons = Vec::with_capacity(segments * stacks);
        for j in 0..stacks {
            for i in 0..segments {
                let next_i = (i + 1) % segments;
                let (v1, v2) = (point(j, i), point(j, next_i));
                let (v3, v4) = (point(j + 1, i), point(j + 1, next_i));

                let verts = if j == 0 {
                    // north pole fan
                    vec![v1, v4, v3]
                } else if j == stacks - 1 {
                    // south pole fan
                    vec![v1, v2, v3]
                } else {
                    vec![v1, v2, v4, v3]
                };
                polygons.push(Polygon::new(verts, metadata.clone()));
            }
        }

        Mesh {
            polygons,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    /// Closed frustum along +Z from `z = 0` (radius `radius1`) to `z = height`
    /// (radius `radius2`). A radius of zero produces a cone tip without a cap.
    pub fn frustum(
        radius1: Real,
        radius2: Real,
        height: Real,
        segments: usize,
        metadata: Option<S>,
    ) -> Mesh<S> {
        if segments < 3 || height <= 0.0 || (radius1 <= 0.0 && radius2 <= 0.0) {
            return Mesh::new();
        }

        let ring = |radius: Real, z: Real, i: usize| -> Point3<Real> {
            let angle = TAU * (i as Real) / (segments as Real);
            Point3::new(radius * angle.cos(), radius * angle.sin(), z)
        };
        let bottom_center = Vertex::new(Point3::origin(), -Vector3::z());
        let top_center = Vertex::new(Point3::new(0.0, 0.0, height), Vector3::z());

        let mut polygons = Vec::with_capacity(segments * 3);
        for i in 0..segments {
            let next_i = (i + 1) % segments;
            let b1 = ring(radius1, 0.0, i);
            let b2 = ring(radius1, 0.0, next_i);
            let t1 = ring(radius2, height, i);
            let t2 = ring(radius2, height, next_i);

            if radius1 > tolerance() {
                polygons.push(Polygon::new(
                    vec![
                        bottom_center,
                        Vertex::new(b2, -Vector3::z()),
                        Vertex::new(b1, -Vector3::z()),
                    ],
                    metadata.clone(),
                ));
            }
            if radius2 > tolerance() {
                polygons.push(Polygon::new(
                    vec![
                        top_center,
                        Vertex::new(t1, Vector3::z()),
                        Vertex::new(t2, Vector3::z()),
                    ],
                    metadata.clone(),
                ));
            }

            // smooth side normals: radial direction tilted by the taper
            let slope = (radius1 - radius2) / height;
            let side_normal = |p: Point3<Real>| -> Vector3<Real> {
                let radial = Vector3::new(p.x, p.y, 0.0);
                let radial = if radial.norm() > tolerance() {
                    radial.normalize()
                } else {
                    Vector3::zeros()
                };
                (radial + Vector3::new(0.0, 0.0, slope)).normalize()
            };
            let mut side = vec![Vertex::new(b1, side_normal(b1)), Vertex::new(b2, side_normal(b2))];
            if radius2 > tolerance() {
                side.push(Vertex::new(t2, side_normal(t2)));
            }
            side.push(Vertex::new(t1, side_normal(t1)));
            if radius1 <= tolerance() {
                side.remove(0);
            }
            polygons.push(Polygon::new(side, metadata.clone()));
        }

        Mesh {
            polygons,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    /// Cylinder along +Z from `z = 0` to `z = height`.
    pub fn cylinder(radius: Real, height: Real, segments: usize, metadata: Option<S>) -> Mesh<S> {
        Self::frustum(radius, radius, height, segments, metadata)
    }

    /// Frustum between two arbitrary points, `radius1` at `start` and
    /// `radius2` at `end`.
    pub fn frustum_ptp(
        start: Point3<Real>,
        end: Point3<Real>,
        radius1: Real,
        radius2: Real,
        segments: usize,
        metadata: Option<S>,
    ) -> Mesh<S> {
        let axis = end - start;
        let height = axis.norm();
        if height < tolerance() {
            return Mesh::new();
        }
        let rotation = Rotation3::rotation_between(&Vector3::z(), &axis).unwrap_or_else(|| {
            // axis is anti-parallel to +Z
            Rotation3::from_axis_angle(&Unit::new_normalize(Vector3::x()), PI)
        });
        let matrix = Translation3::from(start.coords).to_homogeneous() * rotation.to_homogeneous();
        Self::frustum(radius1, radius2, height, segments, metadata).transform(&matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_bounds() {
        let s: Mesh<()> = Mesh::sphere(2.0, 16, 8, None);
        let bb = s.bounding_box();
        assert!((bb.maxs.y - 2.0).abs() < 1e-9);
        assert!((bb.mins.y + 2.0).abs() < 1e-9);
        assert_eq!(s.polygons.len(), 16 * 8);
    }

    #[test]
    fn frustum_side_normals_point_outward() {
        let f: Mesh<()> = Mesh::frustum(1.0, 0.5, 2.0, 24, None);
        for poly in &f.polygons {
            let centroid = poly
                .vertices
                .iter()
                .fold(Vector3::zeros(), |acc, v| acc + v.pos.coords)
                / poly.vertices.len() as Real;
            let to_face = centroid - Vector3::new(0.0, 0.0, 1.0);
            assert!(poly.normal.dot(&to_face) > 0.0);
        }
    }

    #[test]
    fn frustum_ptp_spans_points() {
        let f: Mesh<()> = Mesh::frustum_ptp(
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 5.0, 0.0),
            0.4,
            0.2,
            16,
            None,
        );
        let bb = f.bounding_box();
        assert!((bb.mins.y + 1.0).abs() < 1e-9);
        assert!((bb.maxs.y - 5.0).abs() < 1e-9);
    }
}
