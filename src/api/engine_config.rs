use serde::{Deserialize, Serialize};

/// Track orientation; selects which style coordinates `progress_style`
/// emits. A presentation concern delegated to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Public engine configuration.
///
/// This type is serializable so host applications can persist/load slider
/// setup without inventing their own ad-hoc format. The same type feeds
/// both construction and reconciliation (`SliderEngine::apply_config`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderEngineConfig {
    pub min: f64,
    pub max: f64,
    /// Ordered handle values; the length defines the handle count.
    pub values: Vec<f64>,
    #[serde(default)]
    pub snap: bool,
    /// Permitted stopping values, sorted ascending.
    #[serde(default)]
    pub snap_points: Vec<f64>,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub disabled: bool,
}

impl Default for SliderEngineConfig {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

impl SliderEngineConfig {
    /// Creates a minimal config with a single handle parked at `min`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            values: vec![min],
            snap: false,
            snap_points: Vec::new(),
            orientation: Orientation::default(),
            disabled: false,
        }
    }

    /// Sets the handle values.
    #[must_use]
    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.values = values;
        self
    }

    /// Enables or disables snapping to the configured snap points.
    #[must_use]
    pub fn with_snap(mut self, snap: bool) -> Self {
        self.snap = snap;
        self
    }

    /// Sets the permitted stopping values (sorted ascending).
    #[must_use]
    pub fn with_snap_points(mut self, snap_points: Vec<f64>) -> Self {
        self.snap_points = snap_points;
        self
    }

    /// Sets the track orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Marks the slider disabled; interaction entry points become inert.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
