//! Scene composition.
//!
//! A [`Scene`] is the full set of positioned solids derived from one
//! [`Configuration`]: every generator's parts, with hidden items skipped,
//! materials resolved to shared handles and the result ordered by
//! [`Layer`]. Scenes are disposable; rebuild one whenever the
//! configuration changes.

use crate::config::{Category, Configuration, HandKind, Item};
use crate::generators::{
    Layer, LocalTransform, Part, bezel, decorations, face, hands, markers, minute_markers,
    primitives, windows,
};
use crate::kinematics::{HandTime, hand_angle};
use crate::materials::{MaterialHandle, MaterialRegistry};
use crate::mesh::Mesh;
use crate::traits::TransformOps;
use tracing::{debug, instrument};

/// One solid of the scene with everything a host needs to display it.
#[derive(Debug, Clone)]
pub struct Element {
    pub name: String,
    /// Category the element was generated from.
    pub category: Category,
    /// Item index within a list category; `None` for single records and
    /// for the shared hand pivot.
    pub index: Option<usize>,
    pub layer: Layer,
    /// Local-space mesh; see [`Element::world_mesh`].
    pub mesh: Mesh<()>,
    pub material_key: String,
    pub material: MaterialHandle,
    pub transform: LocalTransform,
    pub hand: Option<HandKind>,
}

impl Element {
    fn from_part(part: Part, category: Category, index: Option<usize>, registry: &MaterialRegistry) -> Self {
        Element {
            material: registry.resolve(&part.material),
            name: part.name,
            category,
            index,
            layer: part.layer,
            mesh: part.mesh,
            material_key: part.material,
            transform: part.transform,
            hand: part.hand,
        }
    }

    pub fn world_mesh(&self) -> Mesh<()> {
        self.mesh.transform(&self.transform.matrix())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub elements: Vec<Element>,
    /// Hands ignore [`Scene::update_hands`] while frozen.
    pub frozen: bool,
}

impl Scene {
    /// Build every element of `config`. Hands are posed at `time` unless
    /// the configuration freezes them.
    #[instrument(skip_all, fields(time = ?time))]
    pub fn compose(config: &Configuration, registry: &MaterialRegistry, time: HandTime) -> Scene {
        let mut scene = Scene {
            elements: Vec::new(),
            frozen: config.hand_settings.frozen(),
        };
        let mut push = |parts: Vec<Part>, category: Category, index: Option<usize>| {
            scene.elements.extend(
                parts
                    .into_iter()
                    .map(|part| Element::from_part(part, category, index, registry)),
            );
        };

        push(
            face::generate(&config.face, &config.complication_windows),
            Category::Face,
            None,
        );
        for (i, item) in visible(&config.complication_windows) {
            push(
                windows::generate(item, config.face.thickness()),
                Category::ComplicationWindows,
                Some(i),
            );
        }
        for (i, item) in visible(&config.markers) {
            push(markers::generate(item), Category::Markers, Some(i));
        }
        for (i, item) in visible(&config.minute_markers) {
            push(minute_markers::generate(item), Category::MinuteMarkers, Some(i));
        }
        for (i, item) in visible(&config.decorations) {
            push(decorations::generate(item), Category::Decorations, Some(i));
        }
        for (i, item) in visible(&config.primitives) {
            push(primitives::generate(item), Category::Primitives, Some(i));
        }
        push(bezel::generate(&config.bezel, &config.face), Category::Bezel, None);
        for (i, item) in visible(&config.hands) {
            push(
                hands::generate(item, &config.hand_settings, time),
                Category::Hands,
                Some(i),
            );
        }
        if let Some(pivot) = hands::pivot(&config.hand_settings, &config.hands) {
            push(vec![pivot], Category::HandSettings, None);
        }

        // stable: insertion order survives within a layer
        scene.elements.sort_by_key(|e| e.layer);
        debug!(elements = scene.elements.len(), "scene composed");
        scene
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements generated from `category`.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.category == category)
    }

    /// Re-pose every hand at `time`; other elements are untouched.
    pub fn update_hands(&mut self, time: HandTime) {
        if self.frozen {
            return;
        }
        for element in &mut self.elements {
            if let Some(kind) = element.hand {
                element.transform.rotation_z = hand_angle(kind, time);
            }
        }
    }

    /// Every element in world space, merged into one mesh whose facets
    /// carry their material key.
    pub fn merged_mesh(&self) -> Mesh<String> {
        self.elements
            .iter()
            .map(|e| {
                let key = e.material_key.clone();
                e.world_mesh().with_metadata(Some(())).map_metadata(|_| key.clone())
            })
            .fold(Mesh::new(), |acc, mesh| acc.merge(&mesh))
    }
}

fn visible<T: Item>(items: &[T]) -> impl Iterator<Item = (usize, &T)> {
    items.iter().enumerate().filter(|(i, item)| {
        if item.is_hidden() {
            debug!(category = %T::CATEGORY, index = i, "hidden item skipped");
            return false;
        }
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::snapshot;
    use serde_json::json;

    #[test]
    fn sample_scene_is_layered() {
        let scene = Scene::compose(&Configuration::sample(), &MaterialRegistry::new(), HandTime::Frozen);
        assert!(!scene.is_empty());
        assert!(scene.elements.windows(2).all(|w| w[0].layer <= w[1].layer));
        assert_eq!(scene.elements[0].layer, Layer::Background);
        assert_eq!(scene.by_category(Category::Bezel).count(), 1);
    }

    #[test]
    fn hidden_items_are_skipped() {
        let config = Configuration::from_json_value(json!({
            "markers": [{"hidden": true}, {"visibleHours": [12]}],
            "bezel": {"hidden": true},
            "handSettings": {"pivot": false}
        }))
        .unwrap();
        let scene = Scene::compose(&config, &MaterialRegistry::new(), HandTime::Frozen);
        let markers: Vec<_> = scene.by_category(Category::Markers).collect();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].index, Some(1));
        assert_eq!(scene.by_category(Category::Bezel).count(), 0);
    }

    #[test]
    fn unknown_material_falls_back() {
        let config = Configuration::from_json_value(json!({"face": {"material": "unobtainium"}})).unwrap();
        let registry = MaterialRegistry::new();
        let scene = Scene::compose(&config, &registry, HandTime::Frozen);
        let face = scene.by_category(Category::Face).next().unwrap();
        assert_eq!(face.material_key, "unobtainium");
        assert_eq!(snapshot(&face.material), snapshot(&registry.resolve("polishedSilver")));
    }

    #[test]
    fn running_hands_update() {
        let config = Configuration::from_json_value(json!({
            "hands": [{"hand": "seconds"}],
            "handSettings": {"frozen": false}
        }))
        .unwrap();
        let mut scene = Scene::compose(&config, &MaterialRegistry::new(), HandTime::Frozen);
        scene.update_hands(HandTime::Elapsed(30.0));
        let hand = scene.elements.iter().find(|e| e.hand.is_some()).unwrap();
        assert!((hand.transform.rotation_z + crate::float_types::PI).abs() < 1e-12);
    }

    #[test]
    fn merged_mesh_keeps_material_keys() {
        let scene = Scene::compose(&Configuration::sample(), &MaterialRegistry::new(), HandTime::Frozen);
        let merged = scene.merged_mesh();
        let total: usize = scene.elements.iter().map(|e| e.mesh.polygons.len()).sum();
        assert_eq!(merged.polygons.len(), total);
        assert!(merged.polygons.iter().all(|p| p.metadata.is_some()));
    }
}
