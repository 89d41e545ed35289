//! `Profile` struct and implementations of the `TransformOps` trait for `Profile`
//!
//! A `Profile` is a planar region in the XY plane built from `geo` polygons.
//! Polygon interiors are holes. Profiles are the input of every extrusion in
//! the crate, see [`crate::extrude`].

use crate::aabb::Aabb;
use crate::float_types::{Real, tolerance};
use crate::mesh::{Mesh, polygon::Polygon, vertex::Vertex};
use crate::traits::TransformOps;
use geo::orient::{Direction, Orient};
use geo::{
    AffineOps, AffineTransform, Area, Centroid, Contains, Coord, LineString, MultiPolygon,
    Polygon as GeoPolygon, TriangulateEarcut,
};
use nalgebra::{Matrix4, Point2, Point3, Vector3};
use std::fmt::Debug;
use std::sync::OnceLock;

#[cfg(feature = "hershey-text")]
pub mod hershey;
pub mod shapes;

pub use shapes::{MirroredOutline, ProfileShape, mirror_outline};

#[derive(Clone, Debug)]
pub struct Profile<S: Clone + Send + Sync + Debug> {
    /// Polygons with holes; exteriors counter-clockwise, interiors clockwise.
    pub geometry: MultiPolygon<Real>,

    /// Lazily calculated AABB that spans `geometry`.
    pub bounding_box: OnceLock<Aabb>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Profile<S> {
    /// Build a profile from `geo` polygons. Orientation is normalized and
    /// polygons without area are dropped.
    pub fn from_polygons(polygons: Vec<GeoPolygon<Real>>, metadata: Option<S>) -> Self {
        let polygons = polygons
            .into_iter()
            .filter(|p| p.unsigned_area() > tolerance())
            .map(|p| p.orient(Direction::Default))
            .collect::<Vec<_>>();
        Profile {
            geometry: MultiPolygon(polygons),
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    /// Closed ring through `points`. Consecutive duplicates are collapsed;
    /// fewer than three distinct points or a zero area gives an empty profile.
    pub fn from_ring(points: &[[Real; 2]], metadata: Option<S>) -> Self {
        let coords = dedup_ring(points);
        if coords.len() < 3 {
            return Profile::from_polygons(Vec::new(), metadata);
        }
        let polygon = GeoPolygon::new(LineString::new(coords), vec![]);
        Profile::from_polygons(vec![polygon], metadata)
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.0.is_empty()
    }

    /// Filled area, holes excluded.
    pub fn area(&self) -> Real {
        self.geometry.unsigned_area()
    }

    /// Concatenate the polygons of `other`. Overlaps are not resolved.
    pub fn merge(&self, other: &Profile<S>) -> Profile<S> {
        let mut polygons = self.geometry.0.clone();
        polygons.extend(other.geometry.0.iter().cloned());
        Profile {
            geometry: MultiPolygon(polygons),
            bounding_box: OnceLock::new(),
            metadata: self.metadata.clone().or_else(|| other.metadata.clone()),
        }
    }

    /// Punch every exterior ring of `holes` into the polygon that contains
    /// it. Holes whose centroid lies outside every polygon are ignored.
    pub fn punch(&self, holes: &Profile<S>) -> Profile<S> {
        let mut polygons = self.geometry.0.clone();
        for hole in &holes.geometry.0 {
            let Some(centroid) = hole.centroid() else {
                continue;
            };
            match polygons
                .iter_mut()
                .find(|p| GeoPolygon::new(p.exterior().clone(), vec![]).contains(&centroid))
            {
                Some(target) => target.interiors_push(hole.exterior().clone()),
                None => tracing::debug!(
                    x = centroid.x(),
                    y = centroid.y(),
                    "hole lies outside the profile, skipped"
                ),
            }
        }
        Profile::from_polygons(polygons, self.metadata.clone())
    }

    /// Each polygon as `(exterior, holes)` with the closing point removed.
    pub fn rings(&self) -> Vec<(Vec<Point2<Real>>, Vec<Vec<Point2<Real>>>)> {
        self.geometry
            .0
            .iter()
            .map(|poly| {
                (
                    open_ring(poly.exterior()),
                    poly.interiors().iter().map(open_ring).collect(),
                )
            })
            .collect()
    }

    /// Ear-cut triangulation of every polygon (holes respected). Triangles
    /// are counter-clockwise seen from +Z.
    pub fn triangulate(&self) -> Vec<[Point3<Real>; 3]> {
        let mut result = Vec::new();
        for polygon in &self.geometry.0 {
            let triangulation = polygon.earcut_triangles_raw();
            let vertices = triangulation.vertices;
            for tri in triangulation.triangle_indices.chunks_exact(3) {
                let mut pts = [
                    Point3::new(vertices[2 * tri[0]], vertices[2 * tri[0] + 1], 0.0),
                    Point3::new(vertices[2 * tri[1]], vertices[2 * tri[1] + 1], 0.0),
                    Point3::new(vertices[2 * tri[2]], vertices[2 * tri[2] + 1], 0.0),
                ];
                let cross = (pts[1] - pts[0]).cross(&(pts[2] - pts[0]));
                if cross.z.abs() < tolerance() {
                    continue;
                }
                if cross.z < 0.0 {
                    pts.swap(1, 2);
                }
                result.push(pts);
            }
        }
        result
    }

    /// Zero-thickness mesh of the profile facing +Z at `z = 0`.
    pub fn to_plane(&self) -> Mesh<S> {
        let polygons = self
            .triangulate()
            .into_iter()
            .map(|tri| {
                Polygon::new(
                    tri.iter().map(|p| Vertex::new(*p, Vector3::z())).collect(),
                    self.metadata.clone(),
                )
            })
            .collect::<Vec<_>>();
        Mesh::from_polygons(&polygons, self.metadata.clone())
    }
}

impl<S: Clone + Send + Sync + Debug> TransformOps for Profile<S> {
    fn new() -> Self {
        Profile {
            geometry: MultiPolygon(Vec::new()),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    /// Apply the XY part of `matrix`; the Z row and column are ignored.
    fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        let affine = AffineTransform::new(
            matrix[(0, 0)],
            matrix[(0, 1)],
            matrix[(0, 3)],
            matrix[(1, 0)],
            matrix[(1, 1)],
            matrix[(1, 3)],
        );
        let polygons = self
            .geometry
            .0
            .iter()
            .map(|p| p.affine_transform(&affine))
            .collect();
        Profile::from_polygons(polygons, self.metadata.clone())
    }

    fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let points = self
                .geometry
                .0
                .iter()
                .flat_map(|p| p.exterior().coords())
                .map(|c| Point3::new(c.x, c.y, 0.0))
                .collect::<Vec<_>>();
            Aabb::from_points(points.iter())
        })
    }

    fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }
}

impl<S: Clone + Send + Sync + Debug> Default for Profile<S> {
    fn default() -> Self {
        <Profile<S> as TransformOps>::new()
    }
}

#[cfg(not(feature = "hershey-text"))]
impl<S: Clone + Send + Sync + Debug> Profile<S> {
    /// Without the `hershey-text` feature there is no font; labels are empty.
    pub fn numeral(text: &str, _size: Real, metadata: Option<S>) -> Self {
        tracing::debug!(text, "built without hershey-text, label skipped");
        Profile::from_polygons(Vec::new(), metadata)
    }
}

/// Collapse consecutive duplicates, including a duplicated closing point.
pub(crate) fn dedup_ring(points: &[[Real; 2]]) -> Vec<Coord<Real>> {
    let eps = tolerance();
    let mut coords: Vec<Coord<Real>> = Vec::with_capacity(points.len());
    for &[x, y] in points {
        if let Some(last) = coords.last() {
            if (last.x - x).abs() <= eps && (last.y - y).abs() <= eps {
                continue;
            }
        }
        coords.push(Coord { x, y });
    }
    while coords.len() > 1 {
        let (first, last) = (coords[0], coords[coords.len() - 1]);
        if (first.x - last.x).abs() <= eps && (first.y - last.y).abs() <= eps {
            coords.pop();
        } else {
            break;
        }
    }
    coords
}

fn open_ring(ring: &LineString<Real>) -> Vec<Point2<Real>> {
    let mut points: Vec<Point2<Real>> = ring.coords().map(|c| Point2::new(c.x, c.y)).collect();
    if ring.is_closed() && points.len() > 1 {
        points.pop();
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Profile<()> {
        Profile::from_ring(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]], None)
    }

    #[test]
    fn clockwise_input_is_reoriented() {
        let p: Profile<()> =
            Profile::from_ring(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]], None);
        let tris = p.triangulate();
        assert_eq!(tris.len(), 2);
        for t in tris {
            assert!((t[1] - t[0]).cross(&(t[2] - t[0])).z > 0.0);
        }
    }

    #[test]
    fn degenerate_ring_is_empty() {
        let p: Profile<()> = Profile::from_ring(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]], None);
        assert!(p.is_empty());
        let q: Profile<()> = Profile::from_ring(&[[0.0, 0.0], [0.0, 0.0], [1.0, 1.0]], None);
        assert!(q.is_empty());
    }

    #[test]
    fn punch_subtracts_area() {
        let outer = unit_square().scale(4.0, 4.0, 1.0);
        let hole = unit_square().translate(1.0, 1.0, 0.0);
        let punched = outer.punch(&hole);
        assert!((punched.area() - 15.0).abs() < 1e-9);
        assert_eq!(punched.rings()[0].1.len(), 1);
    }

    #[test]
    fn punch_ignores_outside_holes() {
        let hole = unit_square().translate(10.0, 10.0, 0.0);
        let punched = unit_square().punch(&hole);
        assert!((punched.area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn plane_faces_up() {
        let plane = unit_square().to_plane();
        assert_eq!(plane.polygons.len(), 2);
        assert!(plane.polygons.iter().all(|p| (p.normal - Vector3::z()).norm() < 1e-9));
    }

    #[test]
    fn mirror_keeps_orientation() {
        let mirrored = unit_square().mirror_x();
        let bb = mirrored.bounding_box();
        assert!((bb.mins.x + 1.0).abs() < 1e-9);
        assert!(mirrored.triangulate().iter().all(|t| (t[1] - t[0]).cross(&(t[2] - t[0])).z > 0.0));
    }
}
