use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Domain, HandleVec, LinearAlgorithm, PositionAlgorithm, closest_snap_point, handles};
use crate::error::{SliderError, SliderResult};
use crate::interaction::{SlideMode, SlideState};

use super::engine_config::{Orientation, SliderEngineConfig};
use super::validation::{PositionOverride, validate_config_numbers};

/// The externally observable contract: exactly the domain bounds and the
/// handle values, nothing derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicState {
    pub min: f64,
    pub max: f64,
    pub values: Vec<f64>,
}

pub(super) type ChangeListener = Box<dyn FnMut(&PublicState)>;

/// Main orchestration facade consumed by host slider components.
///
/// `SliderEngine` coordinates the value↔position mapping, handle ordering
/// and boundary validation, keyboard stepping, snap resolution, and the
/// reconciliation of external configuration against in-flight interaction.
/// It is single-threaded and synchronous; every operation is a pure
/// computation or an explicit state mutation.
pub struct SliderEngine<A: PositionAlgorithm = LinearAlgorithm> {
    pub(super) algorithm: A,
    pub(super) domain: Domain,
    pub(super) values: HandleVec,
    pub(super) handle_pos: HandleVec,
    pub(super) snap: bool,
    pub(super) snap_points: Vec<f64>,
    pub(super) orientation: Orientation,
    pub(super) disabled: bool,
    pub(super) slide: SlideState,
    pub(super) position_override: Option<PositionOverride>,
    pub(super) change_listener: Option<ChangeListener>,
}

impl SliderEngine<LinearAlgorithm> {
    /// Creates an engine with the default linear mapping.
    pub fn new(config: SliderEngineConfig) -> SliderResult<Self> {
        Self::with_algorithm(LinearAlgorithm, config)
    }
}

impl<A: PositionAlgorithm> SliderEngine<A> {
    /// Creates an engine with a caller-supplied mapping algorithm.
    pub fn with_algorithm(algorithm: A, config: SliderEngineConfig) -> SliderResult<Self> {
        validate_config_numbers(&config)?;
        let domain = Domain::new(config.min, config.max)?;

        let values = handles::validate_values(&config.values, domain);
        let handle_pos = values
            .iter()
            .map(|&value| algorithm.value_to_position(value, domain))
            .collect();

        Ok(Self {
            algorithm,
            domain,
            values,
            handle_pos,
            snap: config.snap,
            snap_points: config.snap_points,
            orientation: config.orientation,
            disabled: config.disabled,
            slide: SlideState::default(),
            position_override: None,
            change_listener: None,
        })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.domain.min()
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.domain.max()
    }

    /// Current handle values, ordered and within the domain.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Current handle positions in track percent, non-decreasing.
    #[must_use]
    pub fn handle_positions(&self) -> &[f64] {
        &self.handle_pos
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn snap(&self) -> bool {
        self.snap
    }

    /// Permitted stopping values, sorted ascending.
    #[must_use]
    pub fn snap_points(&self) -> &[f64] {
        &self.snap_points
    }

    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn slide_mode(&self) -> SlideMode {
        self.slide.mode()
    }

    #[must_use]
    pub fn active_handle(&self) -> Option<usize> {
        self.slide.active_handle()
    }

    #[must_use]
    pub fn public_state(&self) -> PublicState {
        PublicState {
            min: self.domain.min(),
            max: self.domain.max(),
            values: self.values.to_vec(),
        }
    }

    /// Index of the handle nearest to `position`; ties resolve to the lower
    /// index. `None` when the slider has no handles.
    #[must_use]
    pub fn closest_handle(&self, position: f64) -> Option<usize> {
        handles::closest_handle(&self.handle_pos, position)
    }

    /// Nearest permitted stopping value; the value itself when no snap
    /// points are configured.
    #[must_use]
    pub fn closest_snap_point(&self, value: f64) -> f64 {
        closest_snap_point(value, &self.snap_points)
    }

    /// Resolves `position` to the nearest permitted stop when snapping is
    /// enabled; passthrough otherwise.
    #[must_use]
    pub fn snap_position(&self, position: f64) -> f64 {
        if !self.snap_enabled() {
            return position;
        }

        let value = self.algorithm.position_to_value(position, self.domain);
        let snapped = closest_snap_point(value, &self.snap_points);
        self.algorithm.value_to_position(snapped, self.domain)
    }

    /// Begins an interactive slide on handle `index`.
    ///
    /// Returns `false` without starting when the slider is disabled.
    pub fn start_slide(&mut self, index: usize) -> SliderResult<bool> {
        self.checked_handle(index)?;
        if self.disabled {
            return Ok(false);
        }

        self.slide.begin(index);
        Ok(true)
    }

    /// Moves the active handle to the validated form of `position`.
    ///
    /// Returns whether the value set changed. No-op when no slide is
    /// active.
    pub fn slide_to(&mut self, position: f64) -> SliderResult<bool> {
        let Some(index) = self.slide.active_handle() else {
            return Ok(false);
        };

        self.move_handle(index, position)
    }

    /// Ends the active slide, if any. External updates apply again
    /// afterwards.
    pub fn end_slide(&mut self) {
        self.slide.finish();
    }

    /// Validates and commits `position` for handle `index`.
    ///
    /// The proposal is snapped (when enabled), run through the position
    /// override, and clamped into the track and between its neighbors.
    /// Returns whether the value set changed; inert when disabled.
    pub fn move_handle(&mut self, index: usize, position: f64) -> SliderResult<bool> {
        self.checked_handle(index)?;
        if self.disabled {
            return Ok(false);
        }

        let target = self.snap_position(position);
        let validated = self.validate_position(index, target)?;
        let value = self.algorithm.position_to_value(validated, self.domain);
        trace!(index, position, validated, value, "committing handle move");

        self.handle_pos[index] = validated;
        if self.values[index] == value {
            return Ok(false);
        }

        self.values[index] = value;
        self.fire_change_event();
        Ok(true)
    }

    /// Registers the listener invoked whenever the public value set changes
    /// through external reconfiguration or validated interaction.
    pub fn set_change_listener(&mut self, listener: impl FnMut(&PublicState) + 'static) {
        self.change_listener = Some(Box::new(listener));
    }

    pub fn clear_change_listener(&mut self) {
        self.change_listener = None;
    }

    /// Installs a caller-supplied position constraint.
    ///
    /// The hook runs on the raw proposal before any clamping. Its output is
    /// untrusted: non-finite or out-of-track results fail the move with
    /// `SliderError::InvalidOverride` rather than being coerced.
    pub fn set_position_override(&mut self, hook: impl Fn(usize, f64) -> f64 + 'static) {
        self.position_override = Some(Box::new(hook));
    }

    pub fn clear_position_override(&mut self) {
        self.position_override = None;
    }

    pub(super) fn snap_enabled(&self) -> bool {
        self.snap && !self.snap_points.is_empty()
    }

    pub(super) fn checked_handle(&self, index: usize) -> SliderResult<()> {
        if index >= self.values.len() {
            return Err(SliderError::InvalidHandle {
                index,
                len: self.values.len(),
            });
        }

        Ok(())
    }

    pub(super) fn fire_change_event(&mut self) {
        let state = self.public_state();
        if let Some(listener) = self.change_listener.as_mut() {
            listener(&state);
        }
    }
}
