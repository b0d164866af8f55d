//! Angle normalization.
//!
//! Every angle-valued field goes through [`normalize`] exactly once on the way
//! in and once on the way out. The routine is idempotent: any value it returns
//! is a fixed point, including both ends of each range.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The declared range of an angle-valued field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleRange {
    /// [-90, 90], clamped. Latitudes.
    Signed90,
    /// [-180, 180], wrapped. Longitudes, box bounds, rotations.
    Signed180,
    /// [0, 90], clamped. LookAt tilt.
    Positive90,
    /// [0, 180], clamped. Camera tilt.
    Positive180,
    /// [0, 360], wrapped. Headings.
    Full360,
}

impl AngleRange {
    /// Inclusive bounds of the range.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Signed90 => (-90.0, 90.0),
            Self::Signed180 => (-180.0, 180.0),
            Self::Positive90 => (0.0, 90.0),
            Self::Positive180 => (0.0, 180.0),
            Self::Full360 => (0.0, 360.0),
        }
    }

    /// True if values outside the range wrap around instead of clamping.
    pub fn wraps(self) -> bool {
        matches!(self, Self::Signed180 | Self::Full360)
    }
}

/// Bring `value` into `range`.
///
/// Values already inside the inclusive range are returned unchanged, so
/// `180.0` and `-180.0` both stay put under [`AngleRange::Signed180`].
/// Out-of-range values are wrapped into the half-open range `[min, max)` for
/// wrapping ranges and clamped otherwise.
pub fn normalize(value: f64, range: AngleRange) -> f64 {
    let (min, max) = range.bounds();
    if !value.is_finite() || (min..=max).contains(&value) {
        return value;
    }
    if range.wraps() {
        let span = max - min;
        (value - min).rem_euclid(span) + min
    } else {
        value.clamp(min, max)
    }
}
