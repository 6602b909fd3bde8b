use approx::relative_eq;
use proptest::prelude::*;
use slider_rs::core::{
    Domain, GeometricAlgorithm, LinearAlgorithm, PositionAlgorithm, validate_values,
};

proptest! {
    #[test]
    fn linear_round_trip_property(
        min in -1_000_000.0f64..1_000_000.0,
        width in 0.001f64..1_000_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let max = min + width;
        let value = min + value_factor * width;

        let domain = Domain::new(min, max).expect("valid domain");
        let algorithm = LinearAlgorithm;

        let position = algorithm.value_to_position(value, domain);
        let recovered = algorithm.position_to_value(position, domain);

        prop_assert!(relative_eq!(recovered, value, epsilon = 1e-7, max_relative = 1e-9));
    }

    #[test]
    fn geometric_round_trip_property(
        min in -1_000_000.0f64..1_000_000.0,
        width in 0.001f64..1_000_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let max = min + width;
        let value = min + value_factor * width;

        let domain = Domain::new(min, max).expect("valid domain");
        let algorithm = GeometricAlgorithm;

        let position = algorithm.value_to_position(value, domain);
        let recovered = algorithm.position_to_value(position, domain);

        prop_assert!(relative_eq!(recovered, value, epsilon = 1e-7, max_relative = 1e-9));
    }

    #[test]
    fn linear_mapping_is_monotonic_property(
        min in -1_000_000.0f64..1_000_000.0,
        width in 0.001f64..1_000_000_000.0,
        factor_a in 0.0f64..1.0,
        factor_b in 0.0f64..1.0
    ) {
        let max = min + width;
        let domain = Domain::new(min, max).expect("valid domain");
        let algorithm = LinearAlgorithm;

        let (low, high) = if factor_a <= factor_b {
            (factor_a, factor_b)
        } else {
            (factor_b, factor_a)
        };
        let position_low = algorithm.value_to_position(min + low * width, domain);
        let position_high = algorithm.value_to_position(min + high * width, domain);

        prop_assert!(position_low <= position_high);
    }

    #[test]
    fn validated_values_are_ordered_and_in_domain(
        proposed in proptest::collection::vec(-500.0f64..500.0, 0..8)
    ) {
        let domain = Domain::new(-100.0, 100.0).expect("valid domain");

        let validated = validate_values(&proposed, domain);

        prop_assert_eq!(validated.len(), proposed.len());
        for window in validated.windows(2) {
            prop_assert!(window[0] <= window[1]);
        }
        for &value in validated.iter() {
            prop_assert!((-100.0..=100.0).contains(&value));
        }
    }
}
