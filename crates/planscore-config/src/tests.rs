//! Tests for score configuration.

use planscore_core::{HardMediumSoftScore, SimpleDoubleScore};

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        score_type = "hard_medium_soft"
        best_score_limit = "0hard/0medium/-50soft"
    "#;

    let config = ScoreConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.score_type, ScoreType::HardMediumSoft);
    assert_eq!(config.bendable_hard_levels_size, None);
    assert_eq!(
        config.best_score_limit().unwrap(),
        Some(AnyScore::from(HardMediumSoftScore::of(0, 0, -50)))
    );
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        score_type: bendable_double
        bendable_hard_levels_size: 2
        bendable_soft_levels_size: 1
    "#;

    let config = ScoreConfig::from_yaml_str(yaml).unwrap();
    let definition = config.build_score_definition().unwrap();
    assert_eq!(definition, AnyScoreDefinition::bendable_double(2, 1));
    assert_eq!(
        definition.level_labels(),
        vec!["hard 0 score", "hard 1 score", "soft 0 score"]
    );
    assert_eq!(config.best_score_limit().unwrap(), None);
}

#[test]
fn test_unknown_score_type_rejected() {
    assert!(matches!(
        ScoreConfig::from_toml_str(r#"score_type = "hard_soft_decimal""#),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_bendable_requires_both_sizes() {
    let config = ScoreConfig::new(ScoreType::Bendable);
    assert!(matches!(
        config.build_score_definition(),
        Err(ConfigError::Invalid(_))
    ));

    let mut config = ScoreConfig::new(ScoreType::Bendable).with_bendable_levels(1, 2);
    config.bendable_soft_levels_size = None;
    assert!(matches!(
        config.build_score_definition(),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_fixed_type_rejects_bendable_sizes() {
    let config = ScoreConfig::new(ScoreType::HardSoft).with_bendable_levels(1, 1);
    assert!(matches!(
        config.build_score_definition(),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_malformed_best_score_limit() {
    let config = ScoreConfig::new(ScoreType::Bendable)
        .with_bendable_levels(1, 2)
        .with_best_score_limit("[0]hard/[0]soft");
    assert!(matches!(
        config.best_score_limit(),
        Err(ConfigError::Score(ScoreError::InvalidScoreFormat { .. }))
    ));
}

#[test]
fn test_builder() {
    let config = ScoreConfig::new(ScoreType::SimpleDouble).with_best_score_limit("-0.5");

    assert_eq!(
        config.best_score_limit().unwrap(),
        Some(AnyScore::from(SimpleDoubleScore::of(-0.5)))
    );
    assert_eq!(ScoreConfig::default().score_type, ScoreType::HardSoft);
}

#[test]
fn test_round_trip_through_toml() {
    let config = ScoreConfig::new(ScoreType::Bendable)
        .with_bendable_levels(0, 3)
        .with_best_score_limit("[]hard/[0/0/0]soft");

    let text = toml::to_string(&config).unwrap();
    assert_eq!(ScoreConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        ScoreConfig::load("does-not-exist/score.toml"),
        Err(ConfigError::Io(_))
    ));
}
