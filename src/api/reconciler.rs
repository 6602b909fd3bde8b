use tracing::debug;

use crate::core::{Domain, HandleVec, PositionAlgorithm, handles};
use crate::error::SliderResult;

use super::SliderEngine;
use super::engine_config::SliderEngineConfig;
use super::validation::validate_config_numbers;

impl<A: PositionAlgorithm> SliderEngine<A> {
    /// Applies a new external configuration.
    ///
    /// Domain and value updates are skipped while a slide is active (the
    /// in-flight interaction wins); presentation flags always apply.
    /// Returns whether the public value set changed. The change listener is
    /// notified at most once per call, and applying the same configuration
    /// twice leaves the derived state untouched the second time.
    pub fn apply_config(&mut self, config: SliderEngineConfig) -> SliderResult<bool> {
        validate_config_numbers(&config)?;

        let SliderEngineConfig {
            min,
            max,
            values,
            snap,
            snap_points,
            orientation,
            disabled,
        } = config;

        let next_domain = if self.slide.is_sliding() {
            debug!("external domain/value update ignored during an active slide");
            None
        } else {
            Some(Domain::new(min, max)?)
        };

        self.snap = snap;
        self.snap_points = snap_points;
        self.orientation = orientation;

        let changed = match next_domain {
            Some(domain) => {
                let domain_changed = domain != self.domain;
                let values_changed = self.values.as_slice() != values.as_slice();

                if domain_changed || values_changed {
                    self.domain = domain;
                    self.commit_values(&values)
                } else {
                    false
                }
            }
            None => false,
        };

        let newly_disabled = disabled && !self.disabled;
        self.disabled = disabled;
        if newly_disabled && self.slide.is_sliding() {
            debug!("slider disabled mid-slide; ending the active slide");
            self.slide.finish();
        }

        Ok(changed)
    }

    /// Replaces the mapping algorithm and recomputes every derived
    /// position.
    ///
    /// Positions are derived, not a semantic value change; the change
    /// listener is not notified.
    pub fn set_algorithm(&mut self, algorithm: A) {
        self.algorithm = algorithm;
        self.refresh_positions();
    }

    /// Re-validates `proposed` against the current domain, rebuilds both
    /// arrays in lockstep, and notifies the listener when the value set
    /// genuinely changed.
    pub(super) fn commit_values(&mut self, proposed: &[f64]) -> bool {
        let next_values = handles::validate_values(proposed, self.domain);
        let next_positions: HandleVec = next_values
            .iter()
            .map(|&value| self.algorithm.value_to_position(value, self.domain))
            .collect();

        let changed = next_values != self.values;
        debug!(
            handles = next_values.len(),
            changed, "reconciled external values"
        );
        self.values = next_values;
        self.handle_pos = next_positions;

        if changed {
            self.fire_change_event();
        }
        changed
    }

    pub(super) fn refresh_positions(&mut self) {
        self.handle_pos = self
            .values
            .iter()
            .map(|&value| self.algorithm.value_to_position(value, self.domain))
            .collect();
    }
}
