use serde::{Deserialize, Serialize};

use crate::core::{POSITION_MAX, POSITION_MIN, PositionAlgorithm, closest_snap_point};
use crate::error::SliderResult;

use super::SliderEngine;

/// Logical keyboard commands understood by the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCommand {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Escape,
}

impl<A: PositionAlgorithm> SliderEngine<A> {
    /// Computes the target position for a key press on handle `index`.
    ///
    /// The result is intentionally unclamped; `validate_position` bounds it
    /// before any commit. `Escape` yields `None`.
    ///
    /// One unit step is 1% of the track when the domain maximum reaches
    /// 100 (the current position is rounded to a whole percent first); on
    /// narrower domains a single value unit spans more than one percent and
    /// becomes the step, so a keypress always moves at least one whole
    /// value. Page keys use 10 unit steps, collapsing to a single step
    /// when the unit already exceeds one percent. With snapping enabled the
    /// target is constrained to the snap point adjacent to the handle's
    /// current stop in the direction of travel.
    pub fn next_position_for_key(
        &self,
        index: usize,
        key: KeyCommand,
    ) -> SliderResult<Option<f64>> {
        self.checked_handle(index)?;

        let mut proposed_value = self.values[index];
        let mut proposed_position = self.handle_pos[index];
        let original_position = proposed_position;

        let mut step = 1.0;
        if self.domain.max() >= 100.0 {
            proposed_position = proposed_position.round();
        } else {
            step = POSITION_MAX / self.domain.width();
        }

        match key {
            KeyCommand::Escape => return Ok(None),
            KeyCommand::Home => {
                proposed_position = POSITION_MIN;
                if self.snap_enabled() {
                    if let Some(&first) = self.snap_points.first() {
                        proposed_value = first;
                    }
                }
            }
            KeyCommand::End => {
                proposed_position = POSITION_MAX;
                if self.snap_enabled() {
                    if let Some(&last) = self.snap_points.last() {
                        proposed_value = last;
                    }
                }
            }
            KeyCommand::Left
            | KeyCommand::Right
            | KeyCommand::Up
            | KeyCommand::Down
            | KeyCommand::PageUp
            | KeyCommand::PageDown => {
                let magnitude = match key {
                    // Narrow domains already page by whole value units.
                    KeyCommand::PageUp | KeyCommand::PageDown if step <= 1.0 => step * 10.0,
                    _ => step,
                };
                let delta = match key {
                    KeyCommand::Left | KeyCommand::Down | KeyCommand::PageDown => -magnitude,
                    _ => magnitude,
                };
                proposed_position += delta;

                if self.snap_enabled() {
                    let nearest = closest_snap_point(self.values[index], &self.snap_points);
                    let current = self.snap_points.iter().position(|&point| point == nearest);
                    if let Some(current) = current {
                        if proposed_position > original_position {
                            if current + 1 < self.snap_points.len() {
                                proposed_value = self.snap_points[current + 1];
                            }
                        } else if current > 0 {
                            proposed_value = self.snap_points[current - 1];
                        }
                    }
                }
            }
        }

        if self.snap_enabled() {
            return Ok(Some(
                self.algorithm.value_to_position(proposed_value, self.domain),
            ));
        }

        Ok(Some(proposed_position))
    }
}
