#![doc = " glTF 2.0 file format support"]
#![doc = ""]
#![doc = " Meshes and whole scenes are written as a single `.gltf` JSON document"]
#![doc = " with one base64-embedded buffer. Scene export keeps each element's"]
#![doc = " local mesh and places it with a node transform, so hands can be"]
#![doc = " re-posed by the host without touching vertex data."]

use crate::errors::ExportError;
use crate::float_types::Real;
use crate::materials::snapshot;
use crate::scene::Scene;
use crate::triangulated::Triangulated3D;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};
use serde_json::{Value, json};
use std::fmt::Debug;
use std::io::Write;

const ARRAY_BUFFER: u32 = 34962;
const ELEMENT_ARRAY_BUFFER: u32 = 34963;
const FLOAT: u32 = 5126;
const UNSIGNED_INT: u32 = 5125;

#[derive(Clone)]
struct GltfVertex {
    position: Point3<Real>,
    normal: Vector3<Real>,
}

/// Index and vertex lists with exact-duplicate vertices shared. Vertices are
/// compared after the f32 conversion the buffer applies anyway.
fn build_gltf_buffers<T: Triangulated3D>(shape: &T) -> (Vec<GltfVertex>, Vec<u32>) {
    let mut vertices = Vec::<GltfVertex>::new();
    let mut indices = Vec::<u32>::new();
    let mut seen = HashMap::<[u32; 6], u32>::new();

    shape.visit_triangles(|tri| {
        for v in tri {
            #[allow(clippy::unnecessary_cast)]
            let key = [
                (v.pos.x as f32).to_bits(),
                (v.pos.y as f32).to_bits(),
                (v.pos.z as f32).to_bits(),
                (v.normal.x as f32).to_bits(),
                (v.normal.y as f32).to_bits(),
                (v.normal.z as f32).to_bits(),
            ];
            let idx = *seen.entry(key).or_insert_with(|| {
                vertices.push(GltfVertex {
                    position: v.pos,
                    normal: v.normal,
                });
                (vertices.len() - 1) as u32
            });
            indices.push(idx);
        }
    });

    (vertices, indices)
}

/// Accumulates every mesh's bytes into one buffer.
#[derive(Default)]
struct BufferBuilder {
    data: Vec<u8>,
    views: Vec<Value>,
    accessors: Vec<Value>,
}

impl BufferBuilder {
    fn push_view(&mut self, bytes: &[u8], target: u32) -> usize {
        self.views.push(json!({
            "buffer": 0,
            "byteOffset": self.data.len(),
            "byteLength": bytes.len(),
            "target": target,
        }));
        self.data.extend_from_slice(bytes);
        self.views.len() - 1
    }

    fn push_accessor(&mut self, accessor: Value) -> usize {
        self.accessors.push(accessor);
        self.accessors.len() - 1
    }

    /// Append one primitive and return its `primitives[]` entry.
    #[allow(clippy::unnecessary_cast)]
    fn push_primitive(&mut self, vertices: &[GltfVertex], indices: &[u32]) -> Value {
        let mut position_bytes = Vec::with_capacity(vertices.len() * 12);
        let mut normal_bytes = Vec::with_capacity(vertices.len() * 12);
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        for v in vertices {
            let p = [v.position.x as f32, v.position.y as f32, v.position.z as f32];
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
                position_bytes.extend_from_slice(&p[axis].to_le_bytes());
            }
            for n in [v.normal.x, v.normal.y, v.normal.z] {
                normal_bytes.extend_from_slice(&(n as f32).to_le_bytes());
            }
        }
        let index_bytes: Vec<u8> = indices.iter().flat_map(|i| i.to_le_bytes()).collect();

        let positions = self.push_view(&position_bytes, ARRAY_BUFFER);
        let normals = self.push_view(&normal_bytes, ARRAY_BUFFER);
        let elements = self.push_view(&index_bytes, ELEMENT_ARRAY_BUFFER);

        let position = self.push_accessor(json!({
            "bufferView": positions,
            "componentType": FLOAT,
            "count": vertices.len(),
            "type": "VEC3",
            "min": min,
            "max": max,
        }));
        let normal = self.push_accessor(json!({
            "bufferView": normals,
            "componentType": FLOAT,
            "count": vertices.len(),
            "type": "VEC3",
        }));
        let index = self.push_accessor(json!({
            "bufferView": elements,
            "componentType": UNSIGNED_INT,
            "count": indices.len(),
            "type": "SCALAR",
        }));

        json!({"attributes": {"POSITION": position, "NORMAL": normal}, "indices": index})
    }

    fn buffer(&self) -> Value {
        json!([{
            "byteLength": self.data.len(),
            "uri": format!("data:application/octet-stream;base64,{}", BASE64_ENGINE.encode(&self.data)),
        }])
    }
}

fn asset() -> Value {
    json!({"version": "2.0", "generator": "dialforge"})
}

/// Build a glTF 2.0 JSON document with a single mesh & single scene,
/// using POSITION and NORMAL attributes and UNSIGNED_INT indices.
fn gltf_from_shape<T: Triangulated3D>(shape: &T, object_name: &str) -> Value {
    let (vertices, indices) = build_gltf_buffers(shape);
    let mut builder = BufferBuilder::default();
    let primitive = builder.push_primitive(&vertices, &indices);
    json!({
        "asset": asset(),
        "buffers": builder.buffer(),
        "bufferViews": builder.views,
        "accessors": builder.accessors,
        "meshes": [{"name": object_name, "primitives": [primitive]}],
        "nodes": [{"mesh": 0, "name": object_name}],
        "scenes": [{"nodes": [0]}],
        "scene": 0,
    })
}

impl<S: Clone + Debug + Send + Sync> crate::mesh::Mesh<S> {
    pub fn to_gltf(&self, object_name: &str) -> String {
        format!("{:#}", gltf_from_shape(self, object_name))
    }

    pub fn write_gltf<W: Write>(&self, writer: &mut W, object_name: &str) -> std::io::Result<()> {
        writer.write_all(self.to_gltf(object_name).as_bytes())
    }
}

impl Scene {
    /// One node per element carrying its translation and z rotation, one
    /// glTF material per distinct material key.
    pub fn to_gltf(&self, scene_name: &str) -> Result<String, ExportError> {
        let mut builder = BufferBuilder::default();
        let mut meshes = Vec::new();
        let mut nodes = Vec::new();
        let mut materials = Vec::new();
        let mut material_index = HashMap::<&str, usize>::new();

        for element in &self.elements {
            let (vertices, indices) = build_gltf_buffers(&element.mesh);
            if indices.is_empty() {
                continue;
            }
            let material = *material_index
                .entry(element.material_key.as_str())
                .or_insert_with(|| {
                    let props = snapshot(&element.material);
                    let intensity = props.emissive_intensity.unwrap_or(1.0);
                    let emissive = props.emissive.map_or([0.0; 3], |c| c.map(|v| v * intensity));
                    materials.push(json!({
                        "name": element.material_key,
                        "pbrMetallicRoughness": {
                            "baseColorFactor": [props.color[0], props.color[1], props.color[2], 1.0],
                            "metallicFactor": props.metalness,
                            "roughnessFactor": props.roughness,
                        },
                        "emissiveFactor": emissive,
                    }));
                    materials.len() - 1
                });

            let mut primitive = builder.push_primitive(&vertices, &indices);
            primitive["material"] = json!(material);
            meshes.push(json!({"name": element.name, "primitives": [primitive]}));

            let t = element.transform;
            let half = t.rotation_z / 2.0;
            nodes.push(json!({
                "name": element.name,
                "mesh": meshes.len() - 1,
                "translation": [t.position.x, t.position.y, t.position.z],
                "rotation": [0.0, 0.0, half.sin(), half.cos()],
            }));
        }

        if nodes.is_empty() {
            return Err(ExportError::Empty);
        }
        let roots: Vec<usize> = (0..nodes.len()).collect();
        let doc = json!({
            "asset": asset(),
            "buffers": builder.buffer(),
            "bufferViews": builder.views,
            "accessors": builder.accessors,
            "materials": materials,
            "meshes": meshes,
            "nodes": nodes,
            "scenes": [{"name": scene_name, "nodes": roots}],
            "scene": 0,
        });
        Ok(format!("{doc:#}"))
    }

    pub fn write_gltf<W: Write>(&self, writer: &mut W, scene_name: &str) -> Result<(), ExportError> {
        let text = self.to_gltf(scene_name)?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;

    #[test]
    fn shared_vertices_are_deduplicated() {
        let mesh: Mesh<()> = Mesh::cylinder(1.0, 1.0, 8, None);
        let (vertices, indices) = build_gltf_buffers(&mesh);
        assert_eq!(indices.len(), mesh.triangles().len() * 3);
        assert!(vertices.len() < indices.len());
    }

    #[test]
    fn mesh_document_is_valid_json() {
        let mesh: Mesh<()> = Mesh::cylinder(1.0, 1.0, 8, None);
        let doc: Value = serde_json::from_str(&mesh.to_gltf("pivot")).unwrap();
        assert_eq!(doc["asset"]["version"], "2.0");
        assert_eq!(doc["accessors"].as_array().unwrap().len(), 3);
        let uri = doc["buffers"][0]["uri"].as_str().unwrap();
        assert!(uri.starts_with("data:application/octet-stream;base64,"));
    }
}
