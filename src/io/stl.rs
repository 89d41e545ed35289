use crate::errors::ExportError;
use crate::io::facet_normal;
use crate::scene::Scene;
use crate::triangulated::Triangulated3D;
use std::fmt::Debug;
use std::fmt::Write as _;
use std::io::Cursor;

/// Export to ASCII STL
/// Convert a triangulated shape to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use dialforge::mesh::Mesh;
/// let mesh = Mesh::<()>::cylinder(1.0, 2.0, 16, None);
/// let text = mesh.to_stl_ascii("pivot");
/// assert!(text.starts_with("solid pivot"));
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "solid {name}");

    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        let _ = writeln!(out, "  facet normal {:.6} {:.6} {:.6}", n.x, n.y, n.z);
        out.push_str("    outer loop\n");
        for v in &tri {
            let _ = writeln!(out, "      vertex {:.6} {:.6} {:.6}", v.pos.x, v.pos.y, v.pos.z);
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    let _ = writeln!(out, "endsolid {name}");
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// Binary STL has no room for a name; the header is left blank.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();
    shape.visit_triangles(|tri| {
        let n = facet_normal(&tri);
        #[allow(clippy::unnecessary_cast)]
        triangles.push(Triangle {
            normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
            vertices: tri.map(|v| Vertex::new([v.pos.x as f32, v.pos.y as f32, v.pos.z as f32])),
        });
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl<S: Clone + Debug + Send + Sync> crate::mesh::Mesh<S> {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self)
    }
}

impl<S: Clone + Debug + Send + Sync> crate::profile::Profile<S> {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
}

impl Scene {
    /// The whole dial as one ASCII STL solid in world space.
    pub fn to_stl_ascii(&self, name: &str) -> Result<String, ExportError> {
        let merged = self.merged_mesh();
        if merged.is_empty() {
            return Err(ExportError::Empty);
        }
        Ok(self::to_stl_ascii(&merged, name))
    }

    pub fn to_stl_binary(&self) -> Result<Vec<u8>, ExportError> {
        let merged = self.merged_mesh();
        if merged.is_empty() {
            return Err(ExportError::Empty);
        }
        Ok(self::to_stl_binary(&merged)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::mesh::Mesh;
    use crate::triangulated::Triangulated3D;

    #[test]
    fn binary_stl_has_one_record_per_triangle() {
        let mesh: Mesh<()> = Mesh::cylinder(1.0, 1.0, 12, None);
        let bytes = mesh.to_stl_binary().unwrap();
        let count = mesh.triangles().len();
        assert_eq!(bytes.len(), 84 + 50 * count);
        assert_eq!(u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize, count);
    }

    #[test]
    fn ascii_stl_normals_follow_winding() {
        let mesh: Mesh<()> = Mesh::cylinder(1.0, 1.0, 8, None);
        let text = mesh.to_stl_ascii("c");
        assert_eq!(text.matches("facet normal").count(), mesh.triangles().len());
        // the top cap faces +Z
        assert!(text.lines().any(|l| l.contains("facet normal") && l.ends_with(" 1.000000")));
        assert!(text.trim_end().ends_with("endsolid c"));
    }
}
