use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

/// Validated value-space bounds of the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> SliderResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(SliderError::InvalidDomain { min, max });
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}
