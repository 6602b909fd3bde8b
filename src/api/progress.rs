use serde::{Deserialize, Serialize};

use crate::core::{POSITION_MIN, PositionAlgorithm};
use crate::error::SliderResult;

use super::SliderEngine;
use super::engine_config::Orientation;

/// Style coordinates for the progress segment trailing a handle.
///
/// The variant mirrors the configured orientation so hosts can copy the
/// fields straight into left/width or top/height styling. All values are
/// track percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProgressStyle {
    Horizontal { left: f64, width: f64 },
    Vertical { top: f64, height: f64 },
}

impl ProgressStyle {
    /// Span start, independent of orientation.
    #[must_use]
    pub fn start(self) -> f64 {
        match self {
            Self::Horizontal { left, .. } => left,
            Self::Vertical { top, .. } => top,
        }
    }

    /// Span length, independent of orientation.
    #[must_use]
    pub fn size(self) -> f64 {
        match self {
            Self::Horizontal { width, .. } => width,
            Self::Vertical { height, .. } => height,
        }
    }
}

impl<A: PositionAlgorithm> SliderEngine<A> {
    /// Style span for the progress segment behind handle `index`: from the
    /// track start for the first handle, from the previous handle
    /// otherwise.
    pub fn progress_style(&self, index: usize) -> SliderResult<ProgressStyle> {
        self.checked_handle(index)?;

        let end = self.handle_pos[index];
        let start = if index == 0 {
            POSITION_MIN
        } else {
            self.handle_pos[index - 1]
        };
        let span = end - start;

        Ok(match self.orientation {
            Orientation::Horizontal => ProgressStyle::Horizontal {
                left: start,
                width: span,
            },
            Orientation::Vertical => ProgressStyle::Vertical {
                top: start,
                height: span,
            },
        })
    }
}
