//! Per-field defaults applied when a configuration field is absent or
//! malformed. The field descriptors in [`super::schema`] report the same
//! values.

use crate::float_types::Real;

pub const MATERIAL: &str = "polishedSilver";

pub const FACE_RADIUS: Real = 20.0;
pub const FACE_THICKNESS: Real = 1.0;
pub const FACE_MATERIAL: &str = "whiteEnamel";

pub const MARKER_OFFSET: Real = 17.0;
pub const MARKER_TOP_WIDTH: Real = 1.2;
pub const MARKER_BOTTOM_WIDTH: Real = 0.8;
pub const MARKER_LENGTH: Real = 3.0;
pub const MARKER_THICKNESS: Real = 0.4;
pub const MARKER_CIRCLE_RADIUS: Real = 0.8;
pub const MARKER_FONT_SIZE: Real = 2.5;
pub const MARKER_SEPARATION: Real = 1.0;
pub const MARKER_CUTOUT: Real = 0.0;

pub const MINUTE_OFFSET: Real = 19.0;
pub const MINUTE_WIDTH: Real = 0.15;
pub const MINUTE_LENGTH: Real = 0.8;
pub const MINUTE_CIRCLE_RADIUS: Real = 0.2;
pub const MINUTE_FONT_SIZE: Real = 1.0;
pub const MINUTE_THICKNESS: Real = 0.2;

pub const HAND_OFFSET: Real = 0.2;
pub const HAND_THICKNESS: Real = 0.3;
pub const HAND_SEGMENTS: usize = 32;
pub const HAND_PIVOT_RADIUS: Real = 0.8;
pub const HAND_PIVOT_HEIGHT: Real = 0.6;

/// `(length, width, tip width, z)` per hand kind.
pub const HOURS_HAND: (Real, Real, Real, Real) = (10.0, 1.2, 0.6, 0.6);
pub const MINUTES_HAND: (Real, Real, Real, Real) = (15.0, 1.0, 0.4, 1.0);
pub const SECONDS_HAND: (Real, Real, Real, Real) = (17.0, 0.3, 0.15, 1.4);

/// Right-half outlines for parametric hands, pivot at `y = 0`.
pub const HOURS_POINTS: &[[Real; 2]] = &[[0.5, -2.0], [0.7, 0.0], [0.6, 7.5], [0.0, 10.0]];
pub const MINUTES_POINTS: &[[Real; 2]] = &[[0.4, -2.5], [0.55, 0.0], [0.4, 13.5], [0.0, 15.0]];
pub const SECONDS_POINTS: &[[Real; 2]] = &[[0.25, -4.0], [0.12, 0.0], [0.05, 17.0]];

pub const WINDOW_RADIUS: Real = 2.5;
pub const WINDOW_WIDTH: Real = 5.0;
pub const WINDOW_HEIGHT: Real = 3.0;
pub const WINDOW_FRAME_WIDTH: Real = 0.3;
pub const WINDOW_FRAME_THICKNESS: Real = 0.3;
pub const WINDOW_BACKGROUND_MATERIAL: &str = "blackLacquer";

pub const DECORATION_RING_RADIUS: Real = 12.0;
pub const DECORATION_RING_WIDTH: Real = 0.2;
pub const DECORATION_LINE_LENGTH: Real = 4.0;
pub const DECORATION_LINE_WIDTH: Real = 0.1;
pub const DECORATION_THICKNESS: Real = 0.1;

pub const BEZEL_WIDTH: Real = 2.0;
pub const BEZEL_THICKNESS: Real = 1.5;

pub const PRIMITIVE_FONT_SIZE: Real = 1.5;
pub const PRIMITIVE_OFFSET: Real = 14.0;
pub const PRIMITIVE_COUNT: usize = 12;
/// Upper bound on a generated circular label set.
pub const PRIMITIVE_MAX_COUNT: usize = 60;
pub const PRIMITIVE_THICKNESS: Real = 0.2;

pub const MINUTE_TOP_WIDTH: Real = 0.3;
pub const MINUTE_BOTTOM_WIDTH: Real = 0.15;

pub const WINDOW_VECTOR: Real = 6.0;
pub const WINDOW_OFFSET: Real = 10.0;
