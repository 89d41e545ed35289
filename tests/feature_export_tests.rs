mod support;

use dialforge::config::Configuration;
use dialforge::errors::ExportError;
use dialforge::kinematics::HandTime;
use dialforge::{MaterialRegistry, Scene};
use serde_json::json;

fn sample_scene() -> Scene {
    Scene::compose(&Configuration::sample(), &MaterialRegistry::new(), HandTime::Frozen)
}

fn empty_scene() -> Scene {
    support::compose(json!({"face": {"radius": 0}, "bezel": {"hidden": true}, "handSettings": {"pivot": false}}))
}

#[cfg(feature = "stl-io")]
#[test]
fn scene_to_stl() {
    let scene = sample_scene();
    let ascii = scene.to_stl_ascii("dial").unwrap();
    assert!(ascii.starts_with("solid dial\n"));
    assert!(ascii.contains("endsolid dial"));

    let binary = scene.to_stl_binary().unwrap();
    let triangles = u32::from_le_bytes([binary[80], binary[81], binary[82], binary[83]]) as usize;
    assert_eq!(triangles, scene.merged_mesh().triangle_count());
    assert_eq!(binary.len(), 84 + 50 * triangles);
}

#[cfg(feature = "stl-io")]
#[test]
fn empty_scene_has_nothing_to_export() {
    let scene = empty_scene();
    assert!(scene.is_empty());
    assert!(matches!(scene.to_stl_binary(), Err(ExportError::Empty)));
}

#[cfg(feature = "gltf-io")]
#[test]
fn scene_to_gltf() {
    let scene = sample_scene();
    let text = scene.to_gltf("dial").unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();

    let nodes = doc["nodes"].as_array().unwrap();
    let exported = scene.elements.iter().filter(|e| !e.mesh.is_empty()).count();
    assert_eq!(nodes.len(), exported);
    assert_eq!(doc["scenes"][0]["nodes"].as_array().unwrap().len(), exported);

    // one material per distinct key
    let mut keys: Vec<&str> = scene.elements.iter().map(|e| e.material_key.as_str()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(doc["materials"].as_array().unwrap().len(), keys.len());

    // every node rotation is a unit quaternion about +Z
    for node in nodes {
        let q: Vec<f64> = node["rotation"].as_array().unwrap().iter().map(|v| v.as_f64().unwrap()).collect();
        assert_eq!((q[0], q[1]), (0.0, 0.0));
        assert!((q[2] * q[2] + q[3] * q[3] - 1.0).abs() < 1e-6);
    }
}

#[cfg(feature = "gltf-io")]
#[test]
fn empty_scene_gltf_fails() {
    assert!(matches!(empty_scene().to_gltf("dial"), Err(ExportError::Empty)));
}
