use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::Domain;

/// Handle storage. Sliders overwhelmingly carry one or two handles, so the
/// arrays stay inline and spill to the heap only for unusual counts.
pub type HandleVec = SmallVec<[f64; 2]>;

/// Clamps every proposed value into the domain and enforces the
/// non-decreasing ordering invariant.
///
/// A later value overlapping an earlier one is pulled up to equal it, never
/// swapped: `[80, 20]` resolves to `[80, 80]`.
#[must_use]
pub fn validate_values(proposed: &[f64], domain: Domain) -> HandleVec {
    let mut validated = HandleVec::with_capacity(proposed.len());

    for &value in proposed {
        let mut next = domain.clamp(value);
        if let Some(&previous) = validated.last() {
            if next < previous {
                next = previous;
            }
        }
        validated.push(next);
    }

    validated
}

/// Index of the handle whose position is nearest to `position`.
///
/// Distance ties resolve to the lower index. `None` when there are no
/// handles.
#[must_use]
pub fn closest_handle(positions: &[f64], position: f64) -> Option<usize> {
    positions
        .iter()
        .copied()
        .enumerate()
        .min_by_key(|&(_, handle)| OrderedFloat((handle - position).abs()))
        .map(|(index, _)| index)
}
