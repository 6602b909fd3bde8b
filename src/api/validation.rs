use tracing::warn;

use crate::core::{POSITION_MAX, POSITION_MIN, PositionAlgorithm};
use crate::error::{SliderError, SliderResult};

use super::SliderEngine;
use super::engine_config::SliderEngineConfig;

/// Caller-supplied constraint over a proposed handle position.
pub(super) type PositionOverride = Box<dyn Fn(usize, f64) -> f64>;

pub(super) fn validate_config_numbers(config: &SliderEngineConfig) -> SliderResult<()> {
    if config.values.iter().any(|value| !value.is_finite()) {
        return Err(SliderError::InvalidData(
            "handle values must be finite".to_owned(),
        ));
    }

    if config.snap_points.iter().any(|point| !point.is_finite()) {
        return Err(SliderError::InvalidData(
            "snap points must be finite".to_owned(),
        ));
    }

    if config.snap_points.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(SliderError::InvalidData(
            "snap points must be sorted ascending".to_owned(),
        ));
    }

    Ok(())
}

impl<A: PositionAlgorithm> SliderEngine<A> {
    /// Minimum legal value for handle `index`: the previous handle's
    /// current value, or the domain minimum for the first handle.
    pub fn min_value(&self, index: usize) -> SliderResult<f64> {
        self.checked_handle(index)?;

        Ok(match index.checked_sub(1).map(|previous| self.values[previous]) {
            Some(previous) => previous.max(self.domain.min()),
            None => self.domain.min(),
        })
    }

    /// Maximum legal value for handle `index`: the next handle's current
    /// value, or the domain maximum for the last handle.
    pub fn max_value(&self, index: usize) -> SliderResult<f64> {
        self.checked_handle(index)?;

        Ok(match self.values.get(index + 1) {
            Some(&next) => next.min(self.domain.max()),
            None => self.domain.max(),
        })
    }

    /// Clamps `proposed` for handle `index` into the track and between its
    /// neighbors. Handles may touch but never cross.
    ///
    /// A configured position override runs first on the raw proposal; its
    /// output is re-checked and rejected with `InvalidOverride` when it is
    /// not a finite position in `[0, 100]`.
    pub fn validate_position(&self, index: usize, proposed: f64) -> SliderResult<f64> {
        self.checked_handle(index)?;
        let adjusted = self.apply_position_override(index, proposed)?;

        let lower = match index.checked_sub(1).map(|previous| self.handle_pos[previous]) {
            Some(previous) => previous,
            None => POSITION_MIN,
        };
        let upper = match self.handle_pos.get(index + 1) {
            Some(&next) => next,
            None => POSITION_MAX,
        };

        Ok(adjusted.min(upper).max(lower))
    }

    /// Whether `proposed` already respects the track bounds and both
    /// neighbors without modification.
    #[must_use]
    pub fn can_move(&self, index: usize, proposed: f64) -> bool {
        if !(POSITION_MIN..=POSITION_MAX).contains(&proposed) {
            return false;
        }

        if let Some(&next) = self.handle_pos.get(index + 1) {
            if proposed > next {
                return false;
            }
        }

        if let Some(previous) = index.checked_sub(1).and_then(|i| self.handle_pos.get(i)) {
            if proposed < *previous {
                return false;
            }
        }

        true
    }

    fn apply_position_override(&self, index: usize, proposed: f64) -> SliderResult<f64> {
        let Some(hook) = self.position_override.as_ref() else {
            return Ok(proposed);
        };

        let adjusted = hook(index, proposed);
        if !adjusted.is_finite() || !(POSITION_MIN..=POSITION_MAX).contains(&adjusted) {
            warn!(index, proposed, adjusted, "position override produced an unusable position");
            return Err(SliderError::InvalidOverride { position: adjusted });
        }

        Ok(adjusted)
    }
}
