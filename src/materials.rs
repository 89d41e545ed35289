//! Material registry.
//!
//! Every element holding the same material key holds the same handle, so a
//! change made through the registry (for example a lume color theme) is
//! seen by all of them at once. The registry is owned by whoever composes
//! the scene; there is no global material state.

use crate::config::defaults::MATERIAL;
use crate::float_types::Real;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

/// PBR parameters handed to the renderer as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialProps {
    /// Linear RGB in `0..=1`.
    pub color: [Real; 3],
    pub roughness: Real,
    pub metalness: Real,
    pub clearcoat: Real,
    pub clearcoat_roughness: Real,
    pub reflectivity: Real,
    pub ior: Real,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissive: Option<[Real; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissive_intensity: Option<Real>,
}

impl MaterialProps {
    const fn metal(color: [Real; 3], roughness: Real) -> Self {
        MaterialProps {
            color,
            roughness,
            metalness: 1.0,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            reflectivity: 0.9,
            ior: 1.5,
            emissive: None,
            emissive_intensity: None,
        }
    }

    const fn lacquer(color: [Real; 3]) -> Self {
        MaterialProps {
            color,
            roughness: 0.2,
            metalness: 0.0,
            clearcoat: 1.0,
            clearcoat_roughness: 0.05,
            reflectivity: 0.5,
            ior: 1.5,
            emissive: None,
            emissive_intensity: None,
        }
    }
}

/// Partial update for [`MaterialRegistry::update_global`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialPatch {
    pub color: Option<[Real; 3]>,
    pub roughness: Option<Real>,
    pub metalness: Option<Real>,
    pub clearcoat: Option<Real>,
    pub clearcoat_roughness: Option<Real>,
    pub reflectivity: Option<Real>,
    pub ior: Option<Real>,
    pub emissive: Option<[Real; 3]>,
    pub emissive_intensity: Option<Real>,
}

impl MaterialPatch {
    fn apply(&self, props: &mut MaterialProps) {
        if let Some(v) = self.color {
            props.color = v;
        }
        if let Some(v) = self.roughness {
            props.roughness = v;
        }
        if let Some(v) = self.metalness {
            props.metalness = v;
        }
        if let Some(v) = self.clearcoat {
            props.clearcoat = v;
        }
        if let Some(v) = self.clearcoat_roughness {
            props.clearcoat_roughness = v;
        }
        if let Some(v) = self.reflectivity {
            props.reflectivity = v;
        }
        if let Some(v) = self.ior {
            props.ior = v;
        }
        if self.emissive.is_some() {
            props.emissive = self.emissive;
        }
        if self.emissive_intensity.is_some() {
            props.emissive_intensity = self.emissive_intensity;
        }
    }
}

/// Shared reference to one material's properties.
pub type MaterialHandle = Arc<RwLock<MaterialProps>>;

/// Read a handle's current properties.
pub fn snapshot(handle: &MaterialHandle) -> MaterialProps {
    handle.read().unwrap_or_else(PoisonError::into_inner).clone()
}

#[derive(Debug, Clone)]
pub struct MaterialRegistry {
    materials: HashMap<String, MaterialHandle>,
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialRegistry {
    /// Registry holding the built-in material table.
    pub fn new() -> Self {
        let table: [(&str, MaterialProps); 10] = [
            (MATERIAL, MaterialProps::metal([0.97, 0.96, 0.95], 0.08)),
            ("brushedSteel", MaterialProps::metal([0.78, 0.78, 0.8], 0.35)),
            ("yellowGold", MaterialProps::metal([1.0, 0.78, 0.34], 0.12)),
            ("roseGold", MaterialProps::metal([0.96, 0.64, 0.54], 0.12)),
            ("blueSteel", MaterialProps::metal([0.1, 0.2, 0.6], 0.15)),
            ("blackLacquer", MaterialProps::lacquer([0.01, 0.01, 0.012])),
            ("whiteEnamel", MaterialProps::lacquer([0.95, 0.94, 0.9])),
            ("ceramicBlack", MaterialProps {
                roughness: 0.4,
                clearcoat: 0.3,
                ..MaterialProps::lacquer([0.03, 0.03, 0.03])
            }),
            ("superLume", MaterialProps {
                emissive: Some([0.45, 1.0, 0.55]),
                emissive_intensity: Some(0.6),
                ..MaterialProps::lacquer([0.85, 0.95, 0.8])
            }),
            ("sapphire", MaterialProps {
                roughness: 0.0,
                reflectivity: 0.7,
                ior: 1.77,
                ..MaterialProps::lacquer([0.98, 0.98, 1.0])
            }),
        ];

        MaterialRegistry {
            materials: table
                .into_iter()
                .map(|(key, props)| (key.to_string(), Arc::new(RwLock::new(props))))
                .collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.materials.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }

    /// Add or replace a material. Handles to a replaced material keep the
    /// old values; use [`update_global`](Self::update_global) to change a
    /// material in place.
    pub fn insert(&mut self, key: impl Into<String>, props: MaterialProps) -> MaterialHandle {
        let handle = Arc::new(RwLock::new(props));
        self.materials.insert(key.into(), handle.clone());
        handle
    }

    /// Shared handle for `key`; unknown keys resolve to the default
    /// material's handle.
    pub fn resolve(&self, key: &str) -> MaterialHandle {
        if let Some(handle) = self.materials.get(key) {
            return handle.clone();
        }
        tracing::debug!(key, fallback = MATERIAL, "unknown material key");
        match self.materials.get(MATERIAL) {
            Some(handle) => handle.clone(),
            None => Arc::new(RwLock::new(MaterialProps::metal([0.97, 0.96, 0.95], 0.08))),
        }
    }

    /// Patch the material behind `key` in place; every holder of its handle
    /// sees the change. Returns `false` for unknown keys.
    pub fn update_global(&self, key: &str, patch: &MaterialPatch) -> bool {
        let Some(handle) = self.materials.get(key) else {
            tracing::warn!(key, "update for unknown material ignored");
            return false;
        };
        let mut props = handle.write().unwrap_or_else(PoisonError::into_inner);
        patch.apply(&mut props);
        true
    }

    /// Set the emissive color of every emissive material; returns how many
    /// materials changed.
    pub fn set_emissive_theme(&self, color: [Real; 3]) -> usize {
        let mut changed = 0;
        for handle in self.materials.values() {
            let mut props = handle.write().unwrap_or_else(PoisonError::into_inner);
            if props.emissive.is_some() {
                props.emissive = Some(color);
                changed += 1;
            }
        }
        changed
    }
}
