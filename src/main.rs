// main.rs
//
// Demo: build a dial from a configuration file (or the built-in sample) and
// write it out as STL and glTF, one file for the whole dial plus one STL per
// category.

use dialforge::config::{Category, Configuration};
use dialforge::kinematics::HandTime;
use dialforge::mesh::Mesh;
use dialforge::{MaterialRegistry, Scene};
use std::error::Error;
use std::fs;
use std::path::Path;

const OUT_DIR: &str = "out";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(%path, "loading configuration");
            Configuration::load(&path)?
        },
        None => {
            tracing::info!("no configuration given, using the sample dial");
            Configuration::sample()
        },
    };

    let registry = MaterialRegistry::new();
    let scene = Scene::compose(&config, &registry, HandTime::Frozen);
    tracing::info!(elements = scene.len(), "scene ready");

    let out = Path::new(OUT_DIR);
    fs::create_dir_all(out)?;
    config.save(out.join("dial.json"))?;

    #[cfg(feature = "stl-io")]
    {
        fs::write(out.join("dial.stl"), scene.to_stl_binary()?)?;
        for category in Category::ALL {
            let parts: Vec<Mesh<()>> = scene.by_category(category).map(|e| e.world_mesh()).collect();
            if parts.is_empty() {
                continue;
            }
            let merged = Mesh::merge_all(&parts);
            let name = category.as_str();
            fs::write(out.join(format!("{name}.stl")), merged.to_stl_ascii(name))?;
        }
    }

    #[cfg(feature = "gltf-io")]
    fs::write(out.join("dial.gltf"), scene.to_gltf("dial")?)?;

    tracing::info!(dir = OUT_DIR, "export finished");
    Ok(())
}
