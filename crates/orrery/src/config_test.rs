use crate::config::*;
use crate::error::ConfigError;

#[test]
fn test_defaults() {
    let config = SimulationConfig::default();

    assert_eq!(config.params.gravity, DEFAULT_GRAVITY);
    assert_eq!(config.params.sun_mass, DEFAULT_SUN_MASS);
    assert_eq!(config.time_control.time_scale, DEFAULT_TIME_SCALE);
    assert!(config.time_control.is_running);
    assert_eq!(config.prediction_steps, PREDICTION_STEPS);
    assert_eq!(config.trail_length, MAX_TRAIL_LENGTH);
    assert!(config.validate().is_ok());
}

#[test]
fn test_time_control_clamps() {
    let mut time = TimeControl::default();

    for _ in 0..10 {
        time.slow_down();
    }
    assert_eq!(time.time_scale, MIN_TIME_SCALE);

    for _ in 0..10 {
        time.speed_up();
    }
    assert_eq!(time.time_scale, MAX_TIME_SCALE);

    time.set_time_scale(0.0);
    assert_eq!(time.time_scale, MIN_TIME_SCALE);
    time.set_time_scale(2.5);
    assert_eq!(time.time_scale, 2.5);
}

#[test]
fn test_pause_gives_zero_dt() {
    let mut time = TimeControl::default();
    time.set_time_scale(4.0);
    assert_eq!(time.effective_dt(), 4.0);

    time.pause();
    assert_eq!(time.effective_dt(), 0.0);

    time.resume();
    assert_eq!(time.effective_dt(), 4.0);
}

#[test]
fn test_from_json_full() {
    let json = r#"{
        "params": { "gravity": 0.01, "sunMass": 5000 },
        "timeControl": { "timeScale": 2, "isRunning": false },
        "predictionSteps": 100,
        "trailLength": 20,
        "seed": 7
    }"#;

    let config = SimulationConfig::from_json_str(json).unwrap();

    assert_eq!(config.params.gravity, 0.01);
    assert_eq!(config.params.sun_mass, 5000.0);
    assert_eq!(config.time_control.time_scale, 2.0);
    assert!(!config.time_control.is_running);
    assert_eq!(config.prediction_steps, 100);
    assert_eq!(config.trail_length, 20);
    assert_eq!(config.seed, Some(7));
}

#[test]
fn test_from_json_empty_object_uses_defaults() {
    let config = SimulationConfig::from_json_str("{}").unwrap();
    assert_eq!(config, SimulationConfig::default());
}

#[test]
fn test_from_json_rejects_bad_sun_mass() {
    let err = SimulationConfig::from_json_str(r#"{ "params": { "gravity": 1.0, "sunMass": 0 } }"#)
        .unwrap_err();

    match err {
        ConfigError::InvalidParameter { name, .. } => assert_eq!(name, "sunMass"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_from_json_rejects_negative_gravity() {
    let err = SimulationConfig::from_json_str(r#"{ "params": { "gravity": -1.0, "sunMass": 10 } }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidParameter { name: "gravity", .. }));
}

#[test]
fn test_zero_gravity_is_valid() {
    let config = SimulationConfig {
        params: SimulationParameters {
            gravity: 0.0,
            sun_mass: 1.0,
        },
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_json_rejects_zero_prediction_steps() {
    let err = SimulationConfig::from_json_str(r#"{ "predictionSteps": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidParameter { name: "predictionSteps", .. }));
}

#[test]
fn test_from_json_malformed() {
    let err = SimulationConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}
