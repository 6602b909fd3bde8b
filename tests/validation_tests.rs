use slider_rs::core::{Domain, validate_values};
use slider_rs::{SliderEngine, SliderEngineConfig, SliderError};

fn engine_with_values(values: Vec<f64>) -> SliderEngine {
    SliderEngine::new(SliderEngineConfig::new(0.0, 100.0).with_values(values)).expect("engine init")
}

#[test]
fn values_are_clamped_into_the_domain() {
    let domain = Domain::new(0.0, 100.0).expect("valid domain");

    assert_eq!(validate_values(&[-20.0], domain).as_slice(), &[0.0]);
    assert_eq!(validate_values(&[120.0], domain).as_slice(), &[100.0]);
}

#[test]
fn overlapping_values_pull_the_later_one_up() {
    let domain = Domain::new(0.0, 100.0).expect("valid domain");

    let validated = validate_values(&[80.0, 20.0], domain);
    assert_eq!(validated.as_slice(), &[80.0, 80.0]);
}

#[test]
fn validated_sequences_stay_non_decreasing() {
    let domain = Domain::new(0.0, 100.0).expect("valid domain");

    let validated = validate_values(&[30.0, 10.0, 50.0, 40.0], domain);
    assert_eq!(validated.as_slice(), &[30.0, 30.0, 50.0, 50.0]);
}

#[test]
fn min_value_for_a_single_handle_is_the_domain_minimum() {
    let engine = SliderEngine::new(
        SliderEngineConfig::new(10.0, 100.0).with_values(vec![20.0]),
    )
    .expect("engine init");

    assert_eq!(engine.min_value(0).expect("first handle"), 10.0);
}

#[test]
fn min_value_for_a_second_handle_is_its_left_neighbor() {
    let engine = engine_with_values(vec![20.0, 40.0]);

    assert_eq!(engine.min_value(1).expect("second handle"), 20.0);
}

#[test]
fn max_value_for_a_single_handle_is_the_domain_maximum() {
    let engine = SliderEngine::new(
        SliderEngineConfig::new(0.0, 50.0).with_values(vec![20.0]),
    )
    .expect("engine init");

    assert_eq!(engine.max_value(0).expect("single handle"), 50.0);
}

#[test]
fn max_value_for_a_first_handle_is_its_right_neighbor() {
    let engine = engine_with_values(vec![20.0, 30.0]);

    assert_eq!(engine.max_value(0).expect("first handle"), 30.0);
}

#[test]
fn positions_respect_track_bounds() {
    let engine = engine_with_values(vec![50.0]);

    assert_eq!(engine.validate_position(0, -20.0).expect("clamp"), 0.0);
    assert_eq!(engine.validate_position(0, 120.0).expect("clamp"), 100.0);
    assert_eq!(engine.validate_position(0, 25.0).expect("passthrough"), 25.0);
}

#[test]
fn handles_may_touch_but_never_cross() {
    let engine = engine_with_values(vec![25.0, 50.0]);

    assert_eq!(engine.validate_position(0, 90.0).expect("clamp"), 50.0);
    assert_eq!(engine.validate_position(1, 20.0).expect("clamp"), 25.0);
}

#[test]
fn position_override_precondition_is_honored() {
    const LEFT_MAX: f64 = 40.0;
    const LEFT_HANDLE: usize = 0;

    let mut engine = engine_with_values(vec![30.0]);
    engine.set_position_override(|index, position| {
        if index == LEFT_HANDLE && position > LEFT_MAX {
            LEFT_MAX
        } else {
            position
        }
    });

    assert_eq!(engine.validate_position(0, 90.0).expect("override"), 40.0);
    assert_eq!(engine.validate_position(0, 39.0).expect("default"), 39.0);
}

#[test]
fn non_finite_override_output_is_a_typed_error() {
    let mut engine = engine_with_values(vec![30.0]);
    engine.set_position_override(|_, _| f64::NAN);

    let error = engine.validate_position(0, 100.0).expect_err("rejected");
    assert!(matches!(error, SliderError::InvalidOverride { .. }));
}

#[test]
fn out_of_track_override_output_is_a_typed_error() {
    let mut engine = engine_with_values(vec![30.0]);
    engine.set_position_override(|_, _| -100.0);

    let error = engine.validate_position(0, 100.0).expect_err("rejected");
    assert!(matches!(
        error,
        SliderError::InvalidOverride { position } if position == -100.0
    ));
}

#[test]
fn cleared_override_restores_default_validation() {
    let mut engine = engine_with_values(vec![30.0]);
    engine.set_position_override(|_, _| f64::NAN);
    engine.clear_position_override();

    assert_eq!(engine.validate_position(0, 90.0).expect("default"), 90.0);
}

#[test]
fn can_move_rejects_track_overflow() {
    let engine = engine_with_values(vec![50.0]);

    assert!(!engine.can_move(0, 120.0));
    assert!(!engine.can_move(0, -20.0));
}

#[test]
fn can_move_rejects_neighbor_crossing() {
    let engine = engine_with_values(vec![20.0, 60.0]);

    assert!(!engine.can_move(0, 80.0));
    assert!(!engine.can_move(1, 10.0));
}

#[test]
fn can_move_accepts_legal_proposals() {
    let engine = engine_with_values(vec![25.0]);

    assert!(engine.can_move(0, 40.0));
}

#[test]
fn indexed_queries_reject_out_of_bounds_handles() {
    let engine = engine_with_values(vec![50.0]);

    let error = engine.min_value(3).expect_err("rejected");
    assert!(matches!(error, SliderError::InvalidHandle { index: 3, len: 1 }));
    assert!(engine.validate_position(1, 50.0).is_err());
}

#[test]
fn non_finite_config_values_are_rejected() {
    let config = SliderEngineConfig::new(0.0, 100.0).with_values(vec![f64::NAN]);
    assert!(SliderEngine::new(config).is_err());

    let config = SliderEngineConfig::new(0.0, 100.0).with_snap_points(vec![f64::INFINITY]);
    assert!(SliderEngine::new(config).is_err());
}
