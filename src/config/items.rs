//! Typed records for every configuration category.
//!
//! Scalar fields are optional and parsed leniently; the accessor of the same
//! name returns the value to use for geometry, falling back to
//! [`defaults`](super::defaults). Keys the engine does not know are kept in
//! `extra` so a document survives a load/save round trip unchanged.

use super::defaults as d;
use super::lenient::lenient;
use super::Category;
use crate::extrude::Bevel;
use crate::float_types::Real;
use crate::placement::Placement;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Behavior shared by the records of list categories.
pub trait Item: Serialize + DeserializeOwned + Clone {
    const CATEGORY: Category;

    /// Hidden items produce no geometry at all.
    fn is_hidden(&self) -> bool;

    /// The effective `type` discriminant as it appears in JSON.
    fn type_value(&self) -> Value;
}

fn type_value<T: Serialize>(kind: T) -> Value {
    serde_json::to_value(kind).unwrap_or(Value::Null)
}

fn points_or(points: &Option<Vec<[Real; 2]>>, fallback: &[[Real; 2]]) -> Vec<[Real; 2]> {
    points.clone().unwrap_or_else(|| fallback.to_vec())
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerType {
    Numeral,
    #[default]
    Blocks,
    Triangle,
    Circle,
    /// A type this engine does not draw; the name is kept for saving.
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MinuteMarkerType {
    #[default]
    Line,
    Circle,
    Blocks,
    Numeral,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HandType {
    TaperedCylinder,
    #[default]
    ParametricFlat,
    ParametricFaceted,
    #[serde(untagged)]
    Unknown(String),
}

/// Which clock quantity a hand shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HandKind {
    #[default]
    Hours,
    Minutes,
    Seconds,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowType {
    #[default]
    Circle,
    Rectangle,
    Crescent,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecorationType {
    #[default]
    Ring,
    Line,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveType {
    #[default]
    Number,
    CircularLabels,
    HandShape,
    #[serde(untagged)]
    Unknown(String),
}

// ---------------------------------------------------------------------------
// single-record categories

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceConfig {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub radius: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub thickness: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bevel: Option<Bevel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FaceConfig {
    pub fn radius(&self) -> Real {
        self.radius.unwrap_or(d::FACE_RADIUS)
    }
    pub fn thickness(&self) -> Real {
        self.thickness.unwrap_or(d::FACE_THICKNESS)
    }
    pub fn material(&self) -> &str {
        self.material.as_deref().unwrap_or(d::FACE_MATERIAL)
    }
    pub fn bevel(&self) -> Bevel {
        self.bevel.unwrap_or_default()
    }
}

/// Options shared by every hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandSettings {
    /// Pose every hand at the reference instant instead of the supplied time.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub frozen: Option<bool>,
    /// Emit a shared center cap over the hands.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pivot: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pivot_radius: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pivot_material: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HandSettings {
    pub fn frozen(&self) -> bool {
        self.frozen.unwrap_or(true)
    }
    pub fn pivot(&self) -> bool {
        self.pivot.unwrap_or(true)
    }
    pub fn pivot_radius(&self) -> Real {
        self.pivot_radius.unwrap_or(d::HAND_PIVOT_RADIUS)
    }
    pub fn pivot_material(&self) -> &str {
        self.pivot_material.as_deref().unwrap_or(d::MATERIAL)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BezelConfig {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub width: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub thickness: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bevel: Option<Bevel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BezelConfig {
    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }
    pub fn width(&self) -> Real {
        self.width.unwrap_or(d::BEZEL_WIDTH)
    }
    pub fn thickness(&self) -> Real {
        self.thickness.unwrap_or(d::BEZEL_THICKNESS)
    }
    pub fn material(&self) -> &str {
        self.material.as_deref().unwrap_or(d::MATERIAL)
    }
    pub fn bevel(&self) -> Bevel {
        self.bevel.unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// list categories

/// One ring of twelve hour markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerItem {
    #[serde(rename = "type", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MarkerType>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Radius of the marker ring.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub offset: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub visible_hours: Option<Vec<i64>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub top_width: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bottom_width: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub length: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub thickness: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cutout: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub circle_radius: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub double_block: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub separation: Option<Real>,
    /// Turn numerals to follow the radius; blocks always do.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub rotate: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bevel: Option<Bevel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MarkerItem {
    pub fn kind(&self) -> MarkerType {
        self.kind.clone().unwrap_or_default()
    }
    pub fn offset(&self) -> Real {
        self.offset.unwrap_or(d::MARKER_OFFSET)
    }
    /// Whether hour index `i` (0..12, 0 being twelve o'clock) is shown.
    /// Entries are taken modulo 12, so `12` and `0` both mean the top.
    pub fn is_hour_visible(&self, i: usize) -> bool {
        match &self.visible_hours {
            Some(hours) => hours.iter().any(|h| h.rem_euclid(12) as usize == i % 12),
            None => true,
        }
    }
    pub fn top_width(&self) -> Real {
        self.top_width.unwrap_or(d::MARKER_TOP_WIDTH)
    }
    pub fn bottom_width(&self) -> Real {
        self.bottom_width.unwrap_or(d::MARKER_BOTTOM_WIDTH)
    }
    pub fn length(&self) -> Real {
        self.length.unwrap_or(d::MARKER_LENGTH)
    }
    pub fn thickness(&self) -> Real {
        self.thickness.unwrap_or(d::MARKER_THICKNESS)
    }
    pub fn cutout(&self) -> Real {
        self.cutout.unwrap_or(d::MARKER_CUTOUT)
    }
    pub fn circle_radius(&self) -> Real {
        self.circle_radius.unwrap_or(d::MARKER_CIRCLE_RADIUS)
    }
    pub fn font_size(&self) -> Real {
        self.font_size.unwrap_or(d::MARKER_FONT_SIZE)
    }
    pub fn double_block(&self) -> bool {
        self.double_block.unwrap_or(false)
    }
    pub fn separation(&self) -> Real {
        self.separation.unwrap_or(d::MARKER_SEPARATION)
    }
    pub fn rotate(&self) -> bool {
        self.rotate.unwrap_or(false)
    }
    pub fn material(&self) -> &str {
        self.material.as_deref().unwrap_or(d::MATERIAL)
    }
    pub fn bevel(&self) -> Bevel {
        self.bevel.unwrap_or_default()
    }
}

impl Item for MarkerItem {
    const CATEGORY: Category = Category::Markers;
    fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }
    fn type_value(&self) -> Value {
        type_value(self.kind())
    }
}

/// One ring of sixty minute markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinuteMarkerItem {
    #[serde(rename = "type", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MinuteMarkerType>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub offset: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub width: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub length: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub top_width: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bottom_width: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub circle_radius: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub thickness: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hide_hour_marks: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub rotate: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bevel: Option<Bevel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MinuteMarkerItem {
    pub fn kind(&self) -> MinuteMarkerType {
        self.kind.clone().unwrap_or_default()
    }
    pub fn offset(&self) -> Real {
        self.offset.unwrap_or(d::MINUTE_OFFSET)
    }
    pub fn width(&self) -> Real {
        self.width.unwrap_or(d::MINUTE_WIDTH)
    }
    pub fn length(&self) -> Real {
        self.length.unwrap_or(d::MINUTE_LENGTH)
    }
    pub fn top_width(&self) -> Real {
        self.top_width.unwrap_or(d::MINUTE_TOP_WIDTH)
    }
    pub fn bottom_width(&self) -> Real {
        self.bottom_width.unwrap_or(d::MINUTE_BOTTOM_WIDTH)
    }
    pub fn circle_radius(&self) -> Real {
        self.circle_radius.unwrap_or(d::MINUTE_CIRCLE_RADIUS)
    }
    pub fn font_size(&self) -> Real {
        self.font_size.unwrap_or(d::MINUTE_FONT_SIZE)
    }
    pub fn thickness(&self) -> Real {
        self.thickness.unwrap_or(d::MINUTE_THICKNESS)
    }
    pub fn hide_hour_marks(&self) -> bool {
        self.hide_hour_marks.unwrap_or(false)
    }
    pub fn rotate(&self) -> bool {
        self.rotate.unwrap_or(true)
    }
    pub fn material(&self) -> &str {
        self.material.as_deref().unwrap_or(d::MATERIAL)
    }
    pub fn bevel(&self) -> Bevel {
        self.bevel.unwrap_or_default()
    }
}

impl Item for MinuteMarkerItem {
    const CATEGORY: Category = Category::MinuteMarkers;
    fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }
    fn type_value(&self) -> Value {
        type_value(self.kind())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandItem {
    #[serde(rename = "type", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kind: Option<HandType>,
    /// Hours, minutes or seconds.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hand: Option<HandKind>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub length: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub width: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tip_width: Option<Real>,
    /// Fraction of the length that extends behind the pivot.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub offset: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<[Real; 2]>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cutout_points: Option<Vec<[Real; 2]>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub thickness: Option<Real>,
    /// Height of the hand's mid-plane above the face.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub z: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bevel: Option<Bevel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HandItem {
    pub fn kind(&self) -> HandType {
        self.kind.clone().unwrap_or_default()
    }
    pub fn hand(&self) -> HandKind {
        self.hand.unwrap_or_default()
    }
    fn hand_defaults(&self) -> (Real, Real, Real, Real) {
        match self.hand() {
            HandKind::Hours => d::HOURS_HAND,
            HandKind::Minutes => d::MINUTES_HAND,
            HandKind::Seconds => d::SECONDS_HAND,
        }
    }
    pub fn length(&self) -> Real {
        self.length.unwrap_or(self.hand_defaults().0)
    }
    pub fn width(&self) -> Real {
        self.width.unwrap_or(self.hand_defaults().1)
    }
    pub fn tip_width(&self) -> Real {
        self.tip_width.unwrap_or(self.hand_defaults().2)
    }
    pub fn z(&self) -> Real {
        self.z.unwrap_or(self.hand_defaults().3)
    }
    pub fn offset(&self) -> Real {
        self.offset.unwrap_or(d::HAND_OFFSET).clamp(0.0, 1.0)
    }
    /// The stored outline, or the stock outline for this hand kind when the
    /// field is absent.
    pub fn points(&self) -> Vec<[Real; 2]> {
        let fallback = match self.hand() {
            HandKind::Hours => d::HOURS_POINTS,
            HandKind::Minutes => d::MINUTES_POINTS,
            HandKind::Seconds => d::SECONDS_POINTS,
        };
        points_or(&self.points, fallback)
    }
    pub fn cutout_points(&self) -> Option<&[[Real; 2]]> {
        self.cutout_points.as_deref()
    }
    pub fn thickness(&self) -> Real {
        self.thickness.unwrap_or(d::HAND_THICKNESS)
    }
    pub fn material(&self) -> &str {
        self.material.as_deref().unwrap_or(d::MATERIAL)
    }
    pub fn bevel(&self) -> Bevel {
        self.bevel.unwrap_or_default()
    }
}

impl Item for HandItem {
    const CATEGORY: Category = Category::Hands;
    fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }
    fn type_value(&self) -> Value {
        type_value(self.kind())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowItem {
    #[serde(rename = "type", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kind: Option<WindowType>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub vector: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub offset: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub radius: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub width: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub height: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub frame: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub frame_width: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub frame_thickness: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub frame_material: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub background_material: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bevel: Option<Bevel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WindowItem {
    pub fn kind(&self) -> WindowType {
        self.kind.clone().unwrap_or_default()
    }
    pub fn placement(&self) -> Placement {
        Placement::new(
            self.vector.unwrap_or(d::WINDOW_VECTOR),
            self.offset.unwrap_or(d::WINDOW_OFFSET),
        )
    }
    pub fn radius(&self) -> Real {
        self.radius.unwrap_or(d::WINDOW_RADIUS)
    }
    pub fn width(&self) -> Real {
        self.width.unwrap_or(d::WINDOW_WIDTH)
    }
    pub fn height(&self) -> Real {
        self.height.unwrap_or(d::WINDOW_HEIGHT)
    }
    pub fn frame(&self) -> bool {
        self.frame.unwrap_or(true)
    }
    pub fn frame_width(&self) -> Real {
        self.frame_width.unwrap_or(d::WINDOW_FRAME_WIDTH)
    }
    pub fn frame_thickness(&self) -> Real {
        self.frame_thickness.unwrap_or(d::WINDOW_FRAME_THICKNESS)
    }
    pub fn frame_material(&self) -> &str {
        self.frame_material.as_deref().unwrap_or(d::MATERIAL)
    }
    pub fn background_material(&self) -> &str {
        self.background_material
            .as_deref()
            .unwrap_or(d::WINDOW_BACKGROUND_MATERIAL)
    }
    pub fn bevel(&self) -> Bevel {
        self.bevel.unwrap_or_default()
    }
}

impl Item for WindowItem {
    const CATEGORY: Category = Category::ComplicationWindows;
    fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }
    fn type_value(&self) -> Value {
        type_value(self.kind())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationItem {
    #[serde(rename = "type", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kind: Option<DecorationType>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub vector: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub offset: Option<Real>,
    /// Inner radius of a ring.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub radius: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub width: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub length: Option<Real>,
    /// Extra rotation of a line in degrees, on top of the radial direction.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub angle: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub thickness: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bevel: Option<Bevel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DecorationItem {
    pub fn kind(&self) -> DecorationType {
        self.kind.clone().unwrap_or_default()
    }
    pub fn placement(&self) -> Placement {
        Placement::new(self.vector.unwrap_or(0.0), self.offset.unwrap_or(0.0))
    }
    pub fn radius(&self) -> Real {
        self.radius.unwrap_or(d::DECORATION_RING_RADIUS)
    }
    pub fn width(&self) -> Real {
        let fallback = match self.kind() {
            DecorationType::Line => d::DECORATION_LINE_WIDTH,
            _ => d::DECORATION_RING_WIDTH,
        };
        self.width.unwrap_or(fallback)
    }
    pub fn length(&self) -> Real {
        self.length.unwrap_or(d::DECORATION_LINE_LENGTH)
    }
    pub fn angle(&self) -> Real {
        self.angle.unwrap_or(0.0)
    }
    pub fn thickness(&self) -> Real {
        self.thickness.unwrap_or(d::DECORATION_THICKNESS)
    }
    pub fn material(&self) -> &str {
        self.material.as_deref().unwrap_or(d::MATERIAL)
    }
    pub fn bevel(&self) -> Bevel {
        self.bevel.unwrap_or_default()
    }
}

impl Item for DecorationItem {
    const CATEGORY: Category = Category::Decorations;
    fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }
    fn type_value(&self) -> Value {
        type_value(self.kind())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimitiveItem {
    #[serde(rename = "type", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PrimitiveType>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub vector: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub offset: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<[Real; 2]>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cutout_points: Option<Vec<[Real; 2]>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub rotate: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub thickness: Option<Real>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bevel: Option<Bevel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PrimitiveItem {
    pub fn kind(&self) -> PrimitiveType {
        self.kind.clone().unwrap_or_default()
    }
    pub fn placement(&self) -> Placement {
        let offset = match self.kind() {
            PrimitiveType::CircularLabels => d::PRIMITIVE_OFFSET,
            _ => 0.0,
        };
        Placement::new(self.vector.unwrap_or(0.0), self.offset.unwrap_or(offset))
    }
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("12")
    }
    pub fn font_size(&self) -> Real {
        self.font_size.unwrap_or(d::PRIMITIVE_FONT_SIZE)
    }
    /// Labels of a circular set: the explicit list, or clock numbering
    /// with `count` at the top followed by `1..count`. Generated sets stop
    /// at [`d::PRIMITIVE_MAX_COUNT`] labels.
    pub fn labels(&self) -> Vec<String> {
        match &self.labels {
            Some(labels) => labels.clone(),
            None => {
                let count = self
                    .count
                    .unwrap_or(d::PRIMITIVE_COUNT)
                    .min(d::PRIMITIVE_MAX_COUNT);
                (0..count)
                    .map(|k| if k == 0 { count } else { k }.to_string())
                    .collect()
            },
        }
    }
    pub fn points(&self) -> Vec<[Real; 2]> {
        points_or(&self.points, d::HOURS_POINTS)
    }
    pub fn cutout_points(&self) -> Option<&[[Real; 2]]> {
        self.cutout_points.as_deref()
    }
    pub fn rotate(&self) -> bool {
        self.rotate.unwrap_or(false)
    }
    pub fn thickness(&self) -> Real {
        self.thickness.unwrap_or(d::PRIMITIVE_THICKNESS)
    }
    pub fn material(&self) -> &str {
        self.material.as_deref().unwrap_or(d::MATERIAL)
    }
    pub fn bevel(&self) -> Bevel {
        self.bevel.unwrap_or_default()
    }
}

impl Item for PrimitiveItem {
    const CATEGORY: Category = Category::Primitives;
    fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }
    fn type_value(&self) -> Value {
        type_value(self.kind())
    }
}
