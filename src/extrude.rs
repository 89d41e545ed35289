//! Bevel/extrude policy and profile-to-solid extrusion.
//!
//! The solid is built from a stack of layers, each a copy of the profile
//! rings pushed outward by a bevel offset at some height. With the bevel
//! enabled the stack rounds from the original outline at `z = -thickness`
//! out to `size` at `z = 0`, runs straight up to `z = depth`, and rounds
//! back in to the original outline at `z = depth + thickness`. The result is
//! re-centered so its mid-plane sits at `z = 0`.

use crate::float_types::{FRAC_PI_2, Real, tolerance};
use crate::mesh::{Mesh, polygon::Polygon, vertex::Vertex};
use crate::profile::Profile;
use crate::traits::TransformOps;
use nalgebra::{Point2, Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Longest allowed miter vector, in units of the bevel size.
const MITER_LIMIT: Real = 4.0;

/// Most rounding steps a bevel can use; larger stored values are clamped.
pub const MAX_BEVEL_SEGMENTS: Real = 32.0;

/// Bevel record as stored in configuration items:
/// `{ enabled, thickness, size, segments }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bevel {
    pub enabled: bool,
    pub thickness: Real,
    pub size: Real,
    /// May be fractional; rounded when the solid is built.
    pub segments: Real,
}

impl Default for Bevel {
    fn default() -> Self {
        Bevel {
            enabled: false,
            thickness: 0.1,
            size: 0.1,
            segments: 3.0,
        }
    }
}

impl Bevel {
    /// Extrusion policy for a solid `depth` deep using this bevel.
    pub const fn policy(&self, depth: Real) -> ExtrudePolicy {
        ExtrudePolicy {
            enabled: self.enabled,
            thickness: self.thickness,
            size: self.size,
            segments: self.segments,
            depth,
        }
    }
}

/// Everything needed to turn a profile into a solid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtrudePolicy {
    pub enabled: bool,
    pub thickness: Real,
    pub size: Real,
    pub segments: Real,
    pub depth: Real,
}

impl ExtrudePolicy {
    /// Sharp-edged extrusion of `depth`.
    pub const fn flat(depth: Real) -> Self {
        ExtrudePolicy {
            enabled: false,
            thickness: 0.0,
            size: 0.0,
            segments: 1.0,
            depth,
        }
    }

    /// The values actually used for geometry. A disabled bevel collapses to
    /// zero thickness and size with a single segment; stored values are
    /// left alone on `self`. Segments are rounded to the nearest integer
    /// and kept within `1..=MAX_BEVEL_SEGMENTS`.
    pub fn effective(&self) -> ExtrudePolicy {
        let depth = self.depth.max(0.0);
        if !self.enabled {
            return ExtrudePolicy::flat(depth);
        }
        ExtrudePolicy {
            enabled: true,
            thickness: self.thickness.max(0.0),
            size: self.size.max(0.0),
            segments: self.segments.round().max(1.0).min(MAX_BEVEL_SEGMENTS),
            depth,
        }
    }

    /// Rounded segment count of the effective policy.
    pub fn segment_count(&self) -> usize {
        self.effective().segments as usize
    }

    /// Height of the finished solid: depth plus a bevel on each side.
    pub fn total_height(&self) -> Real {
        let eff = self.effective();
        eff.depth + 2.0 * eff.thickness
    }

    /// `(z, offset)` of every ring layer, bottom to top, before
    /// re-centering. Consecutive duplicates are removed.
    pub fn layers(&self) -> Vec<(Real, Real)> {
        let eff = self.effective();
        let (t, s, d) = (eff.thickness, eff.size, eff.depth);
        let n = eff.segments as usize;

        let mut layers = Vec::with_capacity(2 * n + 2);
        let bevelled = t > 0.0 || s > 0.0;
        if bevelled {
            for b in 0..n {
                let angle = b as Real / n as Real * FRAC_PI_2;
                layers.push((-t * angle.cos(), s * angle.sin()));
            }
        }
        layers.push((0.0, s));
        layers.push((d, s));
        if bevelled {
            for b in (0..n).rev() {
                let angle = b as Real / n as Real * FRAC_PI_2;
                layers.push((d + t * angle.cos(), s * angle.sin()));
            }
        }

        let eps = tolerance();
        layers.dedup_by(|a, b| (a.0 - b.0).abs() <= eps && (a.1 - b.1).abs() <= eps);
        layers
    }
}

impl<S: Clone + Send + Sync + Debug> Profile<S> {
    /// Extrude along +Z by `policy`, then translate by `-depth / 2`.
    ///
    /// An empty profile, or a policy of zero total height, yields an empty
    /// mesh.
    pub fn to_solid(&self, policy: &ExtrudePolicy) -> Mesh<S> {
        let layers = policy.layers();
        if self.is_empty() || layers.len() < 2 {
            return Mesh::new();
        }
        let depth = policy.effective().depth;
        let metadata = self.metadata.clone();
        let mut polygons = Vec::new();

        // caps sit on the un-offset outline
        let (z_bottom, z_top) = (layers[0].0, layers[layers.len() - 1].0);
        for tri in self.triangulate() {
            let at = |p: &Point3<Real>, z: Real| Point3::new(p.x, p.y, z);
            polygons.push(Polygon::new(
                vec![
                    Vertex::new(at(&tri[0], z_bottom), -Vector3::z()),
                    Vertex::new(at(&tri[2], z_bottom), -Vector3::z()),
                    Vertex::new(at(&tri[1], z_bottom), -Vector3::z()),
                ],
                metadata.clone(),
            ));
            polygons.push(Polygon::new(
                tri.iter().map(|p| Vertex::new(at(p, z_top), Vector3::z())).collect(),
                metadata.clone(),
            ));
        }

        for (exterior, holes) in self.rings() {
            for ring in std::iter::once(&exterior).chain(holes.iter()) {
                side_walls(ring, &layers, &metadata, &mut polygons);
            }
        }

        Mesh::from_polygons(&polygons, metadata)
            .without_degenerate()
            .translate(0.0, 0.0, -depth / 2.0)
    }
}

/// Quads joining consecutive layers along every edge of `ring`.
fn side_walls<S: Clone>(
    ring: &[Point2<Real>],
    layers: &[(Real, Real)],
    metadata: &Option<S>,
    out: &mut Vec<Polygon<S>>,
) {
    let m = ring.len();
    if m < 3 {
        return;
    }
    let moves: Vec<Vector2<Real>> = (0..m)
        .map(|i| bevel_vector(ring[(i + m - 1) % m], ring[i], ring[(i + 1) % m]))
        .collect();
    let at = |i: usize, (z, offset): (Real, Real)| -> Vertex {
        let p = ring[i] + moves[i] * offset;
        Vertex::new(Point3::new(p.x, p.y, z), Vector3::zeros())
    };

    for pair in layers.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        for i in 0..m {
            let j = (i + 1) % m;
            out.push(Polygon::new(
                vec![at(i, lower), at(j, lower), at(j, upper), at(i, upper)],
                metadata.clone(),
            ));
        }
    }
}

/// Miter direction at `current` scaled so the offset edges stay parallel to
/// the originals at unit distance. Points away from the filled side for
/// counter-clockwise exteriors and clockwise holes.
fn bevel_vector(prev: Point2<Real>, current: Point2<Real>, next: Point2<Real>) -> Vector2<Real> {
    let right_normal = |from: Point2<Real>, to: Point2<Real>| -> Vector2<Real> {
        let d = to - from;
        let len = d.norm();
        if len < tolerance() {
            Vector2::zeros()
        } else {
            Vector2::new(d.y, -d.x) / len
        }
    };
    let n1 = right_normal(prev, current);
    let n2 = right_normal(current, next);
    let denom = 1.0 + n1.dot(&n2);
    if denom < tolerance() {
        return n1;
    }
    let miter = (n1 + n2) / denom;
    if miter.norm() > MITER_LIMIT {
        miter.normalize() * MITER_LIMIT
    } else {
        miter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Profile<()> {
        Profile::rectangle(2.0, 2.0, None)
    }

    #[test]
    fn disabled_bevel_collapses() {
        let stored = ExtrudePolicy {
            enabled: false,
            thickness: 5.0,
            size: 5.0,
            segments: 7.0,
            depth: 1.0,
        };
        assert_eq!(stored.effective(), ExtrudePolicy::flat(1.0));
        assert_eq!(stored.layers(), vec![(0.0, 0.0), (1.0, 0.0)]);
        // stored values survive for a later re-enable
        assert_eq!(stored.thickness, 5.0);
    }

    #[test]
    fn segments_round_to_at_least_one() {
        let mut p = Bevel {
            enabled: true,
            thickness: 0.1,
            size: 0.1,
            segments: 2.6,
        }
        .policy(1.0);
        assert_eq!(p.segment_count(), 3);
        p.segments = 0.2;
        assert_eq!(p.segment_count(), 1);
        p.segments = Real::NAN;
        assert_eq!(p.segment_count(), 1);
    }

    #[test]
    fn huge_segment_counts_are_clamped() {
        let p = Bevel {
            enabled: true,
            thickness: 0.1,
            size: 0.1,
            segments: 1e20,
        }
        .policy(1.0);
        assert_eq!(p.segment_count(), MAX_BEVEL_SEGMENTS as usize);
        assert_eq!(p.layers().len(), 2 * MAX_BEVEL_SEGMENTS as usize + 2);
        let infinite = ExtrudePolicy {
            segments: Real::INFINITY,
            ..p
        };
        assert_eq!(infinite.segment_count(), MAX_BEVEL_SEGMENTS as usize);
    }

    #[test]
    fn flat_box_is_centered() {
        let solid = square().to_solid(&ExtrudePolicy::flat(1.0));
        let bb = solid.bounding_box();
        assert!((bb.mins.z + 0.5).abs() < 1e-12);
        assert!((bb.maxs.z - 0.5).abs() < 1e-12);
        // two triangles per cap, four walls
        assert_eq!(solid.polygons.len(), 8);
    }

    #[test]
    fn bevel_adds_height_and_width() {
        let policy = Bevel {
            enabled: true,
            thickness: 0.2,
            size: 0.1,
            segments: 3.0,
        }
        .policy(1.0);
        assert!((policy.total_height() - 1.4).abs() < 1e-12);
        let bb = square().to_solid(&policy).bounding_box();
        assert!((bb.maxs.z - bb.mins.z - 1.4).abs() < 1e-9);
        assert!((bb.maxs.x - 1.1).abs() < 1e-9);
        assert!((bb.maxs.z + bb.mins.z).abs() < 1e-9);
    }

    #[test]
    fn hole_walls_face_into_the_hole() {
        let ring: Profile<()> = Profile::ring(2.0, 1.0, 32, None);
        let solid = ring.to_solid(&ExtrudePolicy::flat(1.0));
        for poly in &solid.polygons {
            if poly.normal.z.abs() > 0.5 {
                continue;
            }
            let c = poly.vertices.iter().fold(Vector3::zeros(), |a, v| a + v.pos.coords)
                / poly.vertices.len() as Real;
            let radial = Vector3::new(c.x, c.y, 0.0);
            if radial.norm() < 1.5 {
                assert!(poly.normal.dot(&radial) < 0.0);
            } else {
                assert!(poly.normal.dot(&radial) > 0.0);
            }
        }
    }

    #[test]
    fn miter_of_right_angle() {
        let v = bevel_vector(
            Point2::new(0.0, -1.0),
            Point2::new(0.0, 0.0),
            Point2::new(-1.0, 0.0),
        );
        // counter-clockwise corner at the top right of a square
        assert!((v - Vector2::new(1.0, 1.0)).norm() < 1e-12);
    }
}
