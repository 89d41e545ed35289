//! The configuration document: one record or item list per category.
//!
//! This is the only persisted state. Geometry is always derived from it and
//! never edited directly. Item edits go through JSON values so a form UI
//! can hand over exactly what it holds.

use crate::errors::ConfigError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub mod defaults;
pub mod items;
pub mod lenient;
pub mod schema;

pub use items::{
    BezelConfig, DecorationItem, DecorationType, FaceConfig, HandItem, HandKind, HandSettings,
    HandType, Item, MarkerItem, MarkerType, MinuteMarkerItem, MinuteMarkerType, PrimitiveItem,
    PrimitiveType, WindowItem, WindowType,
};

/// Top-level keys of the configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Face,
    Markers,
    MinuteMarkers,
    Hands,
    HandSettings,
    ComplicationWindows,
    Decorations,
    Bezel,
    Primitives,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Face,
        Category::Markers,
        Category::MinuteMarkers,
        Category::Hands,
        Category::HandSettings,
        Category::ComplicationWindows,
        Category::Decorations,
        Category::Bezel,
        Category::Primitives,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Face => "face",
            Category::Markers => "markers",
            Category::MinuteMarkers => "minuteMarkers",
            Category::Hands => "hands",
            Category::HandSettings => "handSettings",
            Category::ComplicationWindows => "complicationWindows",
            Category::Decorations => "decorations",
            Category::Bezel => "bezel",
            Category::Primitives => "primitives",
        }
    }

    /// True for categories holding an ordered list of items.
    pub const fn is_list(&self) -> bool {
        !matches!(self, Category::Face | Category::HandSettings | Category::Bezel)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub face: FaceConfig,
    #[serde(default)]
    pub markers: Vec<MarkerItem>,
    #[serde(default)]
    pub minute_markers: Vec<MinuteMarkerItem>,
    #[serde(default)]
    pub hands: Vec<HandItem>,
    #[serde(default)]
    pub hand_settings: HandSettings,
    #[serde(default)]
    pub complication_windows: Vec<WindowItem>,
    #[serde(default)]
    pub decorations: Vec<DecorationItem>,
    #[serde(default)]
    pub bezel: BezelConfig,
    #[serde(default)]
    pub primitives: Vec<PrimitiveItem>,
}

/// Dispatch a generic list helper to the item list of `$category`.
macro_rules! with_list {
    ($config:expr, $category:expr, $f:ident($($arg:expr),*)) => {
        match $category {
            Category::Markers => $f(&mut $config.markers, $($arg),*),
            Category::MinuteMarkers => $f(&mut $config.minute_markers, $($arg),*),
            Category::Hands => $f(&mut $config.hands, $($arg),*),
            Category::ComplicationWindows => $f(&mut $config.complication_windows, $($arg),*),
            Category::Decorations => $f(&mut $config.decorations, $($arg),*),
            Category::Primitives => $f(&mut $config.primitives, $($arg),*),
            other => Err(ConfigError::NotAList(other)),
        }
    };
}

impl Configuration {
    /// A document with no items and default single records.
    pub fn empty() -> Self {
        Configuration::default()
    }

    /// A complete dial: markers, a minute track, three hands, one window,
    /// a decoration ring and a bezel.
    pub fn sample() -> Self {
        let doc = serde_json::json!({
            "face": { "radius": 20.0, "thickness": 1.0, "material": "whiteEnamel" },
            "markers": [
                { "type": "blocks", "visibleHours": [1, 2, 4, 5, 7, 8, 10, 11], "material": "polishedSilver",
                  "bevel": { "enabled": true, "thickness": 0.1, "size": 0.05, "segments": 3 } },
                { "type": "blocks", "doubleBlock": true, "separation": 1.6, "visibleHours": [12],
                  "material": "polishedSilver" },
                { "type": "numeral", "visibleHours": [3, 9], "offset": 16.5, "material": "blackLacquer" }
            ],
            "minuteMarkers": [
                { "type": "line", "hideHourMarks": true, "material": "blackLacquer" }
            ],
            "hands": [
                { "type": "parametricFlat", "hand": "hours", "material": "blueSteel",
                  "cutoutPoints": [[0.25, 2.0], [0.3, 6.0]] },
                { "type": "parametricFaceted", "hand": "minutes", "material": "blueSteel" },
                { "type": "taperedCylinder", "hand": "seconds", "material": "yellowGold" }
            ],
            "handSettings": { "frozen": true, "pivot": true },
            "complicationWindows": [
                { "type": "crescent", "vector": 6, "offset": 10, "radius": 3.0,
                  "backgroundMaterial": "blackLacquer" }
            ],
            "decorations": [
                { "type": "ring", "radius": 12.0, "width": 0.15, "material": "polishedSilver" }
            ],
            "bezel": { "width": 2.0, "thickness": 1.5, "material": "brushedSteel",
                       "bevel": { "enabled": true, "thickness": 0.3, "size": 0.3, "segments": 4 } },
            "primitives": []
        });
        // the literal above is well formed; fall back to an empty dial rather than panic
        serde_json::from_value(doc).unwrap_or_default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_value(value: Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading configuration");
        Self::from_json_str(&text)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path.as_ref(), self.to_json_string()?)?;
        Ok(())
    }

    /// Number of items in a list category.
    pub fn len(&self, category: Category) -> Result<usize, ConfigError> {
        Ok(match category {
            Category::Markers => self.markers.len(),
            Category::MinuteMarkers => self.minute_markers.len(),
            Category::Hands => self.hands.len(),
            Category::ComplicationWindows => self.complication_windows.len(),
            Category::Decorations => self.decorations.len(),
            Category::Primitives => self.primitives.len(),
            other => return Err(ConfigError::NotAList(other)),
        })
    }

    /// Append an item given as JSON; returns its index.
    pub fn add_item(&mut self, category: Category, item: Value) -> Result<usize, ConfigError> {
        with_list!(self, category, push_item(item))
    }

    /// Append the default item of `type_name` built from the field
    /// descriptors.
    pub fn add_default_item(
        &mut self,
        category: Category,
        type_name: Option<&str>,
    ) -> Result<usize, ConfigError> {
        let item = schema::default_item(category, type_name)?;
        self.add_item(category, item)
    }

    /// Remove and return the item at `index`; later items shift down.
    pub fn remove_item(&mut self, category: Category, index: usize) -> Result<Value, ConfigError> {
        with_list!(self, category, take_item(index))
    }

    /// The item at `index` as JSON.
    pub fn item(&self, category: Category, index: usize) -> Result<Value, ConfigError> {
        match category {
            Category::Markers => read_item(&self.markers, index),
            Category::MinuteMarkers => read_item(&self.minute_markers, index),
            Category::Hands => read_item(&self.hands, index),
            Category::ComplicationWindows => read_item(&self.complication_windows, index),
            Category::Decorations => read_item(&self.decorations, index),
            Category::Primitives => read_item(&self.primitives, index),
            other => Err(ConfigError::NotAList(other)),
        }
    }

    /// Merge `patch` into the item at `index`. Keys set to `null` are
    /// removed; nested objects merge recursively. The item's `type` cannot
    /// change.
    pub fn update_item(
        &mut self,
        category: Category,
        index: usize,
        patch: Value,
    ) -> Result<(), ConfigError> {
        with_list!(self, category, patch_item(index, patch))
    }

    /// Set one field of a single-record category (`face`, `handSettings`,
    /// `bezel`).
    pub fn set_field(&mut self, category: Category, key: &str, value: Value) -> Result<(), ConfigError> {
        let mut patch = Map::new();
        patch.insert(key.to_string(), value);
        let patch = Value::Object(patch);
        match category {
            Category::Face => patch_record(&mut self.face, category, patch),
            Category::HandSettings => patch_record(&mut self.hand_settings, category, patch),
            Category::Bezel => patch_record(&mut self.bezel, category, patch),
            other => Err(ConfigError::Structure {
                category: other,
                message: "fields are set per item on list categories".to_string(),
            }),
        }
    }
}

fn push_item<T: Item>(list: &mut Vec<T>, item: Value) -> Result<usize, ConfigError> {
    if !item.is_object() {
        return Err(ConfigError::Structure {
            category: T::CATEGORY,
            message: format!("an item must be an object, got `{item}`"),
        });
    }
    list.push(serde_json::from_value(item)?);
    tracing::debug!(category = %T::CATEGORY, index = list.len() - 1, "item added");
    Ok(list.len() - 1)
}

fn take_item<T: Item>(list: &mut Vec<T>, index: usize) -> Result<Value, ConfigError> {
    check_index::<T>(list, index)?;
    let removed = list.remove(index);
    Ok(serde_json::to_value(removed)?)
}

fn read_item<T: Item>(list: &[T], index: usize) -> Result<Value, ConfigError> {
    check_index::<T>(list, index)?;
    Ok(serde_json::to_value(&list[index])?)
}

fn patch_item<T: Item>(list: &mut Vec<T>, index: usize, patch: Value) -> Result<(), ConfigError> {
    check_index::<T>(list, index)?;
    if let Some(new_type) = patch.get("type") {
        if *new_type != list[index].type_value() {
            return Err(ConfigError::ImmutableType {
                category: T::CATEGORY,
                index,
            });
        }
    }
    let mut current = serde_json::to_value(&list[index])?;
    merge(&mut current, patch);
    list[index] = serde_json::from_value(current)?;
    Ok(())
}

fn patch_record<T: Serialize + DeserializeOwned>(
    record: &mut T,
    category: Category,
    patch: Value,
) -> Result<(), ConfigError> {
    let mut current = serde_json::to_value(&*record)?;
    if !current.is_object() {
        return Err(ConfigError::Structure {
            category,
            message: "record does not serialize to an object".to_string(),
        });
    }
    merge(&mut current, patch);
    *record = serde_json::from_value(current)?;
    Ok(())
}

fn check_index<T: Item>(list: &[T], index: usize) -> Result<(), ConfigError> {
    if index >= list.len() {
        return Err(ConfigError::IndexOutOfRange {
            category: T::CATEGORY,
            index,
            len: list.len(),
        });
    }
    Ok(())
}

/// JSON merge patch: objects merge key by key, `null` deletes, anything
/// else replaces.
pub fn merge(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                if value.is_null() {
                    target.remove(&key);
                } else {
                    merge(target.entry(key).or_insert(Value::Null), value);
                }
            }
        },
        (target, patch) => *target = patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!(matches!(
            "dial".parse::<Category>(),
            Err(ConfigError::UnknownCategory(name)) if name == "dial"
        ));
    }

    #[test]
    fn sample_is_complete() {
        let config = Configuration::sample();
        assert_eq!(config.markers.len(), 3);
        assert_eq!(config.hands.len(), 3);
        assert_eq!(config.complication_windows.len(), 1);
    }

    #[test]
    fn merge_deletes_nulls_and_recurses() {
        let mut doc = json!({"a": 1, "b": {"c": 2, "d": 3}});
        merge(&mut doc, json!({"a": null, "b": {"c": 5}}));
        assert_eq!(doc, json!({"b": {"c": 5, "d": 3}}));
    }

    #[test]
    fn record_categories_reject_item_edits() {
        let mut config = Configuration::empty();
        assert!(matches!(
            config.add_item(Category::Face, json!({})),
            Err(ConfigError::NotAList(Category::Face))
        ));
        assert!(config.set_field(Category::Markers, "offset", json!(3)).is_err());
    }
}
