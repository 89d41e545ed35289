//! Time to hand angle.
//!
//! Pure functions only: the host's frame loop calls [`hand_angle`] every
//! tick and writes the result into the hand's z rotation. Angles are
//! clockwise-negative about +Z, measured from 12 o'clock.

use crate::config::HandKind;
use crate::float_types::{Real, TAU};
use serde::{Deserialize, Serialize};

/// Seconds since midnight of the reference pose, 10:09:00.
pub const REFERENCE_SECONDS: Real = 10.0 * 3600.0 + 9.0 * 60.0;

/// Time input for the hands.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum HandTime {
    /// Stay at the reference instant.
    #[default]
    Frozen,
    /// Seconds elapsed since the reference instant.
    Elapsed(Real),
}

impl HandTime {
    /// Seconds since midnight this time stands for.
    pub fn seconds(&self) -> Real {
        match self {
            HandTime::Frozen => REFERENCE_SECONDS,
            HandTime::Elapsed(elapsed) => REFERENCE_SECONDS + elapsed,
        }
    }
}

/// Rotation of a `kind` hand at `seconds` since midnight.
pub fn angle_at_seconds(kind: HandKind, seconds: Real) -> Real {
    let fraction = match kind {
        HandKind::Hours => (seconds / 3600.0).rem_euclid(12.0) / 12.0,
        HandKind::Minutes => (seconds / 60.0).rem_euclid(60.0) / 60.0,
        HandKind::Seconds => seconds.rem_euclid(60.0) / 60.0,
    };
    -fraction * TAU
}

/// Rotation of a `kind` hand at `time`.
pub fn hand_angle(kind: HandKind, time: HandTime) -> Real {
    angle_at_seconds(kind, time.seconds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_pose() {
        let hours = hand_angle(HandKind::Hours, HandTime::Frozen);
        let minutes = hand_angle(HandKind::Minutes, HandTime::Frozen);
        let seconds = hand_angle(HandKind::Seconds, HandTime::Frozen);
        assert!((hours + (10.0 + 9.0 / 60.0) / 12.0 * TAU).abs() < 1e-12);
        assert!((minutes + 9.0 / 60.0 * TAU).abs() < 1e-12);
        assert_eq!(seconds, 0.0);
    }

    #[test]
    fn clockwise_is_negative() {
        let a = hand_angle(HandKind::Seconds, HandTime::Elapsed(15.0));
        assert!((a + TAU / 4.0).abs() < 1e-12);
    }

    #[test]
    fn wraps_after_twelve_hours() {
        let a = hand_angle(HandKind::Hours, HandTime::Elapsed(0.0));
        let b = hand_angle(HandKind::Hours, HandTime::Elapsed(12.0 * 3600.0));
        assert!((a - b).abs() < 1e-9);
    }
}
