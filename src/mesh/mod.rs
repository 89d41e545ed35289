//! `Mesh` struct and implementations of the `TransformOps` trait for `Mesh`
//!
//! A `Mesh` is a polygon soup: a list of convex planar facets. Solids produced
//! by extrusion are closed, but merging two meshes simply concatenates their
//! facets. No boolean solid operations are performed anywhere in this crate.

use crate::aabb::Aabb;
use crate::float_types::Real;
use crate::mesh::{polygon::Polygon, vertex::Vertex};
use crate::traits::TransformOps;
use nalgebra::{Matrix4, Point3};
use std::{fmt::Debug, sync::OnceLock};

pub mod polygon;
pub mod shapes;
pub mod vertex;

#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    /// 3D polygons for volumetric shapes
    pub polygons: Vec<Polygon<S>>,

    /// Lazily calculated AABB that spans `polygons`.
    pub bounding_box: OnceLock<Aabb>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Build a Mesh from an existing polygon list
    pub fn from_polygons(polygons: &[Polygon<S>], metadata: Option<S>) -> Self {
        Mesh {
            polygons: polygons.to_vec(),
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    /// Helper to collect all vertices from the mesh.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.polygons
            .iter()
            .flat_map(|p| p.vertices.iter().copied())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Number of triangles after fan triangulation.
    pub fn triangle_count(&self) -> usize {
        self.polygons
            .iter()
            .map(|p| p.vertices.len().saturating_sub(2))
            .sum()
    }

    /// Triangulate each polygon in the Mesh returning a Mesh containing triangles
    pub fn triangulate(&self) -> Mesh<S> {
        let triangles = self
            .polygons
            .iter()
            .flat_map(|poly| {
                poly.triangulate().into_iter().map(move |triangle| {
                    Polygon::new(triangle.to_vec(), poly.metadata.clone())
                })
            })
            .collect::<Vec<_>>();

        Mesh::from_polygons(&triangles, self.metadata.clone())
    }

    /// Concatenate the facets of `other` onto a copy of `self`.
    ///
    /// This is not a boolean union: overlapping volumes stay overlapping.
    pub fn merge(&self, other: &Mesh<S>) -> Mesh<S> {
        let mut polygons = Vec::with_capacity(self.polygons.len() + other.polygons.len());
        polygons.extend_from_slice(&self.polygons);
        polygons.extend_from_slice(&other.polygons);
        Mesh {
            polygons,
            bounding_box: OnceLock::new(),
            metadata: self.metadata.clone().or_else(|| other.metadata.clone()),
        }
    }

    /// Merge any number of meshes into one.
    pub fn merge_all<'a, I>(meshes: I) -> Mesh<S>
    where
        I: IntoIterator<Item = &'a Mesh<S>>,
        S: 'a,
    {
        meshes
            .into_iter()
            .fold(Mesh::new(), |acc, mesh| acc.merge(mesh))
    }

    /// Replace the metadata on the mesh and on every facet.
    pub fn with_metadata(mut self, metadata: Option<S>) -> Self {
        for poly in &mut self.polygons {
            poly.metadata = metadata.clone();
        }
        self.metadata = metadata;
        self
    }

    /// Map the metadata type, e.g. from `()` to a material key.
    pub fn map_metadata<T, F>(&self, f: F) -> Mesh<T>
    where
        T: Clone + Send + Sync + Debug,
        F: Fn(&S) -> T,
    {
        Mesh {
            polygons: self
                .polygons
                .iter()
                .map(|p| Polygon {
                    vertices: p.vertices.clone(),
                    normal: p.normal,
                    metadata: p.metadata.as_ref().map(&f),
                })
                .collect(),
            bounding_box: OnceLock::new(),
            metadata: self.metadata.as_ref().map(&f),
        }
    }

    /// Drop facets that enclose no area.
    pub fn without_degenerate(mut self) -> Self {
        self.polygons.retain(|p| !p.is_degenerate());
        self.bounding_box = OnceLock::new();
        self
    }
}

impl<S: Clone + Send + Sync + Debug> TransformOps for Mesh<S> {
    /// Returns a new empty Mesh
    fn new() -> Self {
        Mesh {
            polygons: Vec::new(),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    /// Apply an arbitrary 3D transform (as a 4x4 matrix) to every polygon.
    fn transform(&self, matrix: &Matrix4<Real>) -> Mesh<S> {
        Mesh {
            polygons: self.polygons.iter().map(|p| p.transform(matrix)).collect(),
            bounding_box: OnceLock::new(),
            metadata: self.metadata.clone(),
        }
    }

    fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            Aabb::from_points(
                self.polygons
                    .iter()
                    .flat_map(|p| p.vertices.iter().map(|v| &v.pos)),
            )
        })
    }

    fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }
}

impl<S: Clone + Send + Sync + Debug> Default for Mesh<S> {
    fn default() -> Self {
        <Mesh<S> as TransformOps>::new()
    }
}

/// Positions of every vertex, handy for tests and exporters.
pub fn positions<S: Clone + Send + Sync + Debug>(mesh: &Mesh<S>) -> Vec<Point3<Real>> {
    mesh.vertices().into_iter().map(|v| v.pos).collect()
}
