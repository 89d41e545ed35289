//! Declarative field descriptors for every category.
//!
//! Each descriptor names a field, its kind, its default and a predicate
//! telling a form UI when the field is relevant to an item. The geometry
//! generators never consult `applies_when`: they read every field through
//! the item accessors and ignore the ones that do not matter for the item's
//! `type`.

use super::defaults as d;
use super::Category;
use crate::errors::ConfigError;
use crate::float_types::Real;
use serde_json::{Map, Value, json};

/// What kind of input a field takes.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Number { min: Real, max: Real, step: Real },
    Integer { min: i64, max: i64 },
    Bool,
    Text,
    Material,
    Choice(&'static [&'static str]),
    Points,
    Hours,
    Bevel,
}

/// One field of a category record.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: FieldKind,
    pub default: Value,
    /// Display-only relevance test against the item as JSON.
    pub applies_when: fn(&Value) -> bool,
}

impl FieldSpec {
    fn new(key: &'static str, kind: FieldKind, default: Value) -> Self {
        FieldSpec {
            key,
            kind,
            default,
            applies_when: always,
        }
    }

    fn when(mut self, applies_when: fn(&Value) -> bool) -> Self {
        self.applies_when = applies_when;
        self
    }
}

fn always(_: &Value) -> bool {
    true
}

fn type_is(item: &Value, names: &[&str]) -> bool {
    item.get("type")
        .and_then(Value::as_str)
        .is_some_and(|t| names.contains(&t))
}

const fn number(min: Real, max: Real, step: Real) -> FieldKind {
    FieldKind::Number { min, max, step }
}

fn bevel_default() -> Value {
    json!({ "enabled": false, "thickness": 0.1, "size": 0.1, "segments": 3 })
}

pub const MARKER_TYPES: &[&str] = &["blocks", "triangle", "circle", "numeral"];
pub const MINUTE_MARKER_TYPES: &[&str] = &["line", "circle", "blocks", "numeral"];
pub const HAND_TYPES: &[&str] = &["parametricFlat", "parametricFaceted", "taperedCylinder"];
pub const HAND_KINDS: &[&str] = &["hours", "minutes", "seconds"];
pub const WINDOW_TYPES: &[&str] = &["circle", "rectangle", "crescent"];
pub const DECORATION_TYPES: &[&str] = &["ring", "line"];
pub const PRIMITIVE_TYPES: &[&str] = &["number", "circularLabels", "handShape"];

/// Allowed `type` values of a list category, default first.
pub const fn type_names(category: Category) -> &'static [&'static str] {
    match category {
        Category::Markers => MARKER_TYPES,
        Category::MinuteMarkers => MINUTE_MARKER_TYPES,
        Category::Hands => HAND_TYPES,
        Category::ComplicationWindows => WINDOW_TYPES,
        Category::Decorations => DECORATION_TYPES,
        Category::Primitives => PRIMITIVE_TYPES,
        _ => &[],
    }
}

/// Field descriptors of `category`, `type` first for list categories.
pub fn fields(category: Category) -> Vec<FieldSpec> {
    use FieldKind::*;
    let mut specs = Vec::new();
    let names = type_names(category);
    if let Some(first) = names.first() {
        specs.push(FieldSpec::new("type", Choice(names), json!(first)));
        specs.push(FieldSpec::new("hidden", Bool, json!(false)));
        specs.push(FieldSpec::new("name", Text, json!("")));
    }

    match category {
        Category::Face => {
            specs.push(FieldSpec::new("radius", number(5.0, 40.0, 0.5), json!(d::FACE_RADIUS)));
            specs.push(FieldSpec::new("thickness", number(0.1, 5.0, 0.1), json!(d::FACE_THICKNESS)));
            specs.push(FieldSpec::new("material", Material, json!(d::FACE_MATERIAL)));
            specs.push(FieldSpec::new("bevel", Bevel, bevel_default()));
        },
        Category::Markers => {
            specs.extend([
                FieldSpec::new("offset", number(0.0, 30.0, 0.1), json!(d::MARKER_OFFSET)),
                FieldSpec::new("visibleHours", Hours, json!((1..=12).collect::<Vec<_>>())),
                FieldSpec::new("topWidth", number(0.0, 5.0, 0.05), json!(d::MARKER_TOP_WIDTH))
                    .when(|i| type_is(i, &["blocks", "triangle"])),
                FieldSpec::new("bottomWidth", number(0.0, 5.0, 0.05), json!(d::MARKER_BOTTOM_WIDTH))
                    .when(|i| type_is(i, &["blocks"])),
                FieldSpec::new("length", number(0.1, 10.0, 0.1), json!(d::MARKER_LENGTH))
                    .when(|i| type_is(i, &["blocks", "triangle"])),
                FieldSpec::new("cutout", number(0.0, 0.95, 0.05), json!(d::MARKER_CUTOUT))
                    .when(|i| type_is(i, &["blocks", "triangle", "circle"])),
                FieldSpec::new("circleRadius", number(0.1, 5.0, 0.05), json!(d::MARKER_CIRCLE_RADIUS))
                    .when(|i| type_is(i, &["circle"])),
                FieldSpec::new("fontSize", number(0.5, 8.0, 0.1), json!(d::MARKER_FONT_SIZE))
                    .when(|i| type_is(i, &["numeral"])),
                FieldSpec::new("rotate", Bool, json!(false)).when(|i| type_is(i, &["numeral"])),
                FieldSpec::new("doubleBlock", Bool, json!(false)).when(|i| type_is(i, &["blocks"])),
                FieldSpec::new("separation", number(0.0, 5.0, 0.1), json!(d::MARKER_SEPARATION))
                    .when(|i| type_is(i, &["blocks"]) && i.get("doubleBlock") == Some(&json!(true))),
                FieldSpec::new("thickness", number(0.05, 3.0, 0.05), json!(d::MARKER_THICKNESS)),
                FieldSpec::new("material", Material, json!(d::MATERIAL)),
                FieldSpec::new("bevel", Bevel, bevel_default()),
            ]);
        },
        Category::MinuteMarkers => {
            specs.extend([
                FieldSpec::new("offset", number(0.0, 30.0, 0.1), json!(d::MINUTE_OFFSET)),
                FieldSpec::new("width", number(0.01, 2.0, 0.01), json!(d::MINUTE_WIDTH))
                    .when(|i| type_is(i, &["line"])),
                FieldSpec::new("length", number(0.1, 5.0, 0.05), json!(d::MINUTE_LENGTH))
                    .when(|i| type_is(i, &["line", "blocks"])),
                FieldSpec::new("topWidth", number(0.0, 2.0, 0.01), json!(d::MINUTE_TOP_WIDTH))
                    .when(|i| type_is(i, &["blocks"])),
                FieldSpec::new("bottomWidth", number(0.0, 2.0, 0.01), json!(d::MINUTE_BOTTOM_WIDTH))
                    .when(|i| type_is(i, &["blocks"])),
                FieldSpec::new("circleRadius", number(0.05, 2.0, 0.05), json!(d::MINUTE_CIRCLE_RADIUS))
                    .when(|i| type_is(i, &["circle"])),
                FieldSpec::new("fontSize", number(0.3, 4.0, 0.1), json!(d::MINUTE_FONT_SIZE))
                    .when(|i| type_is(i, &["numeral"])),
                FieldSpec::new("hideHourMarks", Bool, json!(false))
                    .when(|i| !type_is(i, &["numeral"])),
                FieldSpec::new("rotate", Bool, json!(true)),
                FieldSpec::new("thickness", number(0.05, 2.0, 0.05), json!(d::MINUTE_THICKNESS)),
                FieldSpec::new("material", Material, json!(d::MATERIAL)),
                FieldSpec::new("bevel", Bevel, bevel_default()),
            ]);
        },
        Category::Hands => {
            let parametric = |i: &Value| type_is(i, &["parametricFlat", "parametricFaceted"]);
            specs.extend([
                FieldSpec::new("hand", Choice(HAND_KINDS), json!("hours")),
                FieldSpec::new("length", number(1.0, 30.0, 0.5), json!(d::HOURS_HAND.0))
                    .when(|i| type_is(i, &["taperedCylinder"])),
                FieldSpec::new("width", number(0.05, 4.0, 0.05), json!(d::HOURS_HAND.1))
                    .when(|i| type_is(i, &["taperedCylinder"])),
                FieldSpec::new("tipWidth", number(0.0, 4.0, 0.05), json!(d::HOURS_HAND.2))
                    .when(|i| type_is(i, &["taperedCylinder"])),
                FieldSpec::new("offset", number(0.0, 1.0, 0.05), json!(d::HAND_OFFSET))
                    .when(|i| type_is(i, &["taperedCylinder"])),
                FieldSpec::new("points", Points, json!(d::HOURS_POINTS)).when(parametric),
                FieldSpec::new("cutoutPoints", Points, json!([])).when(|i| type_is(i, &["parametricFlat"])),
                FieldSpec::new("thickness", number(0.05, 2.0, 0.05), json!(d::HAND_THICKNESS))
                    .when(parametric),
                FieldSpec::new("z", number(0.0, 5.0, 0.1), json!(d::HOURS_HAND.3)),
                FieldSpec::new("material", Material, json!(d::MATERIAL)),
                FieldSpec::new("bevel", Bevel, bevel_default()).when(|i| type_is(i, &["parametricFlat"])),
            ]);
        },
        Category::HandSettings => {
            specs.extend([
                FieldSpec::new("frozen", Bool, json!(true)),
                FieldSpec::new("pivot", Bool, json!(true)),
                FieldSpec::new("pivotRadius", number(0.1, 3.0, 0.05), json!(d::HAND_PIVOT_RADIUS))
                    .when(|i| i.get("pivot") != Some(&json!(false))),
                FieldSpec::new("pivotMaterial", Material, json!(d::MATERIAL))
                    .when(|i| i.get("pivot") != Some(&json!(false))),
            ]);
        },
        Category::ComplicationWindows => {
            specs.extend([
                FieldSpec::new("vector", number(0.0, 12.0, 0.25), json!(d::WINDOW_VECTOR)),
                FieldSpec::new("offset", number(0.0, 30.0, 0.1), json!(d::WINDOW_OFFSET)),
                FieldSpec::new("radius", number(0.5, 10.0, 0.1), json!(d::WINDOW_RADIUS))
                    .when(|i| type_is(i, &["circle", "crescent"])),
                FieldSpec::new("width", number(0.5, 20.0, 0.1), json!(d::WINDOW_WIDTH))
                    .when(|i| type_is(i, &["rectangle"])),
                FieldSpec::new("height", number(0.5, 20.0, 0.1), json!(d::WINDOW_HEIGHT))
                    .when(|i| type_is(i, &["rectangle"])),
                FieldSpec::new("frame", Bool, json!(true)).when(|i| !type_is(i, &["crescent"])),
                FieldSpec::new("frameWidth", number(0.05, 2.0, 0.05), json!(d::WINDOW_FRAME_WIDTH))
                    .when(|i| !type_is(i, &["crescent"])),
                FieldSpec::new("frameThickness", number(0.05, 2.0, 0.05), json!(d::WINDOW_FRAME_THICKNESS))
                    .when(|i| !type_is(i, &["crescent"])),
                FieldSpec::new("frameMaterial", Material, json!(d::MATERIAL))
                    .when(|i| !type_is(i, &["crescent"])),
                FieldSpec::new("backgroundMaterial", Material, json!(d::WINDOW_BACKGROUND_MATERIAL)),
                FieldSpec::new("bevel", Bevel, bevel_default()).when(|i| !type_is(i, &["crescent"])),
            ]);
        },
        Category::Decorations => {
            specs.extend([
                FieldSpec::new("vector", number(0.0, 12.0, 0.25), json!(0.0)),
                FieldSpec::new("offset", number(0.0, 30.0, 0.1), json!(0.0)),
                FieldSpec::new("radius", number(0.1, 30.0, 0.1), json!(d::DECORATION_RING_RADIUS))
                    .when(|i| type_is(i, &["ring"])),
                FieldSpec::new("width", number(0.01, 5.0, 0.01), json!(d::DECORATION_RING_WIDTH)),
                FieldSpec::new("length", number(0.1, 40.0, 0.1), json!(d::DECORATION_LINE_LENGTH))
                    .when(|i| type_is(i, &["line"])),
                FieldSpec::new("angle", number(-180.0, 180.0, 1.0), json!(0.0))
                    .when(|i| type_is(i, &["line"])),
                FieldSpec::new("thickness", number(0.01, 2.0, 0.01), json!(d::DECORATION_THICKNESS)),
                FieldSpec::new("material", Material, json!(d::MATERIAL)),
                FieldSpec::new("bevel", Bevel, bevel_default()),
            ]);
        },
        Category::Bezel => {
            specs.extend([
                FieldSpec::new("hidden", Bool, json!(false)),
                FieldSpec::new("width", number(0.1, 10.0, 0.1), json!(d::BEZEL_WIDTH)),
                FieldSpec::new("thickness", number(0.1, 5.0, 0.1), json!(d::BEZEL_THICKNESS)),
                FieldSpec::new("material", Material, json!(d::MATERIAL)),
                FieldSpec::new("bevel", Bevel, bevel_default()),
            ]);
        },
        Category::Primitives => {
            let labels = |i: &Value| type_is(i, &["number", "circularLabels"]);
            specs.extend([
                FieldSpec::new("vector", number(0.0, 12.0, 0.25), json!(0.0))
                    .when(|i| !type_is(i, &["circularLabels"])),
                FieldSpec::new("offset", number(0.0, 30.0, 0.1), json!(d::PRIMITIVE_OFFSET)),
                FieldSpec::new("text", Text, json!("12")).when(|i| type_is(i, &["number"])),
                FieldSpec::new("fontSize", number(0.3, 8.0, 0.1), json!(d::PRIMITIVE_FONT_SIZE)).when(labels),
                FieldSpec::new("count", Integer { min: 1, max: 60 }, json!(d::PRIMITIVE_COUNT))
                    .when(|i| type_is(i, &["circularLabels"])),
                FieldSpec::new("points", Points, json!(d::HOURS_POINTS))
                    .when(|i| type_is(i, &["handShape"])),
                FieldSpec::new("cutoutPoints", Points, json!([])).when(|i| type_is(i, &["handShape"])),
                FieldSpec::new("rotate", Bool, json!(false)),
                FieldSpec::new("thickness", number(0.05, 3.0, 0.05), json!(d::PRIMITIVE_THICKNESS)),
                FieldSpec::new("material", Material, json!(d::MATERIAL)),
                FieldSpec::new("bevel", Bevel, bevel_default()),
            ]);
        },
    }
    specs
}

/// A fresh item of `type_name` (the category's first type when `None`)
/// holding the default of every field relevant to that type.
pub fn default_item(category: Category, type_name: Option<&str>) -> Result<Value, ConfigError> {
    let names = type_names(category);
    let mut item = Map::new();
    if !names.is_empty() {
        let chosen = match type_name {
            Some(name) if names.contains(&name) => name,
            Some(name) => {
                return Err(ConfigError::Structure {
                    category,
                    message: format!("unknown type `{name}`"),
                });
            },
            None => names[0],
        };
        item.insert("type".to_string(), json!(chosen));
    }

    let probe = Value::Object(item.clone());
    for field in fields(category) {
        if field.key == "type" || !(field.applies_when)(&probe) {
            continue;
        }
        item.insert(field.key.to_string(), field.default);
    }
    Ok(Value::Object(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_fields() {
        for category in Category::ALL {
            assert!(!fields(category).is_empty(), "{category}");
        }
    }

    #[test]
    fn default_item_only_carries_relevant_fields() {
        let circle = default_item(Category::ComplicationWindows, Some("circle")).unwrap();
        assert_eq!(circle["type"], "circle");
        assert!(circle.get("radius").is_some());
        assert!(circle.get("width").is_none());

        let crescent = default_item(Category::ComplicationWindows, Some("crescent")).unwrap();
        assert!(crescent.get("frame").is_none());
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(default_item(Category::Markers, Some("roman")).is_err());
    }

    #[test]
    fn default_items_deserialize() {
        for category in Category::ALL.into_iter().filter(Category::is_list) {
            for name in type_names(category) {
                let mut config = crate::config::Configuration::empty();
                config.add_default_item(category, Some(name)).unwrap();
                assert_eq!(config.len(category).unwrap(), 1);
            }
        }
    }
}
