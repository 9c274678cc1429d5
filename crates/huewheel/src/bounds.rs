use crate::config::WheelConfig;
use strum::Display;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("invalid ring bounds [{lo}, {hi}]: expected 0 <= lo < hi")]
pub struct BoundsError {
    pub lo: f64,
    pub hi: f64,
}

/// Closed interval of distances from the wheel center: an annulus, or a disc when `lo == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingBounds {
    lo: f64,
    hi: f64,
}

impl RingBounds {
    pub fn new(lo: f64, hi: f64) -> Result<Self, BoundsError> {
        if lo.is_finite() && hi.is_finite() && 0.0 <= lo && lo < hi {
            Ok(Self { lo, hi })
        } else {
            Err(BoundsError { lo, hi })
        }
    }

    pub fn contains(&self, distance: f64) -> bool {
        self.lo <= distance && distance <= self.hi
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Region {
    OuterRing,
    InnerRing,
    CenterDisc,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub outer: RingBounds,
    pub inner: RingBounds,
    pub center: RingBounds,
}

impl RingLayout {
    pub fn new(config: &WheelConfig) -> Result<Self, BoundsError> {
        let line_width = config.line_width();
        Ok(Self {
            outer: RingBounds::new(config.outer_radius() - line_width, config.outer_radius())?,
            inner: RingBounds::new(config.inner_radius() - line_width, config.inner_radius())?,
            center: RingBounds::new(0.0, config.center_radius())?,
        })
    }

    /// Outer ring wins ties; the inner ring only counts once it is on screen.
    pub fn classify(&self, distance: f64, inner_open: bool) -> Region {
        if self.outer.contains(distance) {
            Region::OuterRing
        } else if inner_open && self.inner.contains(distance) {
            Region::InnerRing
        } else if self.center.contains(distance) {
            Region::CenterDisc
        } else {
            Region::Outside
        }
    }
}
