use crate::core::Domain;

/// Track position of the domain minimum.
pub const POSITION_MIN: f64 = 0.0;
/// Track position of the domain maximum.
pub const POSITION_MAX: f64 = 100.0;

/// Bijective mapping between domain values and track positions.
///
/// Implementations must be monotonic over `[min, max] <-> [0, 100]` and
/// mutual inverses up to floating-point precision; the ordering and
/// round-trip guarantees of the engine depend on it.
pub trait PositionAlgorithm {
    /// Maps a domain value to a track position in `[0, 100]`.
    fn value_to_position(&self, value: f64, domain: Domain) -> f64;

    /// Maps a track position in `[0, 100]` back to a domain value.
    fn position_to_value(&self, position: f64, domain: Domain) -> f64;
}

/// Uniform spacing in raw value units. The default mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearAlgorithm;

impl PositionAlgorithm for LinearAlgorithm {
    fn value_to_position(&self, value: f64, domain: Domain) -> f64 {
        (value - domain.min()) / domain.width() * POSITION_MAX
    }

    fn position_to_value(&self, position: f64, domain: Domain) -> f64 {
        // Exact endpoints keep round trips stable on very wide domains.
        if position == POSITION_MIN {
            return domain.min();
        }
        if position == POSITION_MAX {
            return domain.max();
        }

        domain.min() + position / POSITION_MAX * domain.width()
    }
}

/// Quadratic spacing that stretches resolution near the domain minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeometricAlgorithm;

impl PositionAlgorithm for GeometricAlgorithm {
    fn value_to_position(&self, value: f64, domain: Domain) -> f64 {
        let normalized = (value - domain.min()) / domain.width();
        normalized * normalized * POSITION_MAX
    }

    fn position_to_value(&self, position: f64, domain: Domain) -> f64 {
        if position == POSITION_MIN {
            return domain.min();
        }
        if position == POSITION_MAX {
            return domain.max();
        }

        domain.min() + (position / POSITION_MAX).sqrt() * domain.width()
    }
}
