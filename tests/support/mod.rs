//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use dialforge::{
    Configuration, MaterialRegistry, Scene,
    float_types::Real,
    kinematics::HandTime,
    mesh::{Mesh, polygon::Polygon},
};
use nalgebra::Point2;

/// Returns the approximate bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]`
/// for a set of polygons.
pub fn bounding_box<S: Clone + Send + Sync + std::fmt::Debug>(polygons: &[Polygon<S>]) -> [Real; 6] {
    let mut bb = [Real::MAX, Real::MAX, Real::MAX, Real::MIN, Real::MIN, Real::MIN];
    for v in polygons.iter().flat_map(|p| p.vertices.iter()) {
        let p = v.pos;
        bb[0] = bb[0].min(p.x);
        bb[1] = bb[1].min(p.y);
        bb[2] = bb[2].min(p.z);
        bb[3] = bb[3].max(p.x);
        bb[4] = bb[4].max(p.y);
        bb[5] = bb[5].max(p.z);
    }
    bb
}

/// Bounding box of a whole mesh.
pub fn mesh_bounds(mesh: &Mesh<()>) -> [Real; 6] {
    bounding_box(&mesh.polygons)
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Smallest and largest distance from `center` over a ring of points.
pub fn radial_range(points: &[Point2<Real>], center: Point2<Real>) -> (Real, Real) {
    points
        .iter()
        .map(|p| (p - center).norm())
        .fold((Real::MAX, Real::MIN), |(lo, hi), d| (lo.min(d), hi.max(d)))
}

/// Parse a configuration document and compose it with the built-in
/// materials at the reference time.
pub fn compose(doc: serde_json::Value) -> Scene {
    let config = Configuration::from_json_value(doc).expect("test document parses");
    Scene::compose(&config, &MaterialRegistry::new(), HandTime::Frozen)
}
