//! Parametric **watch dial geometry**: a configuration document describing a
//! dial (face, hour and minute markers, hands, complication windows,
//! decorations, bezel and free-form primitives) is turned into positioned,
//! bevelled solids ready for a renderer.
//!
//! The pipeline is one-way. [`config::Configuration`] is the only persistent
//! state; [`scene::Scene::compose`] derives every solid from it through
//! [`placement`], [`profile`], [`extrude`] and the per-category
//! [`generators`], resolving appearance through [`materials`].
//!
//! ```rust
//! use dialforge::config::Configuration;
//! use dialforge::kinematics::HandTime;
//! use dialforge::materials::MaterialRegistry;
//! use dialforge::scene::Scene;
//!
//! let scene = Scene::compose(&Configuration::sample(), &MaterialRegistry::new(), HandTime::Frozen);
//! assert!(!scene.is_empty());
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//! - [**gltf-io**](https://www.khronos.org/gltf/): `.gltf` export with embedded buffers
//! - **hershey-text**: numerals and labels drawn with Hershey stroke fonts
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod config;
pub mod errors;
pub mod extrude;
pub mod float_types;
pub mod generators;
pub mod io;
pub mod kinematics;
pub mod materials;
pub mod mesh;
pub mod placement;
pub mod profile;
pub mod scene;
pub mod traits;
pub mod triangulated;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::Configuration;
pub use materials::MaterialRegistry;
pub use mesh::Mesh;
pub use profile::Profile;
pub use scene::Scene;
pub use traits::TransformOps;
