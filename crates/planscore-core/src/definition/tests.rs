//! Tests for score definitions.

use crate::definition::*;
use crate::error::ScoreError;
use crate::score::*;

#[test]
fn test_fixed_definitions_metadata() {
    assert_eq!(SimpleScoreDefinition.levels_count(), 1);
    assert_eq!(SimpleScoreDefinition.level_labels(), vec!["score"]);
    assert_eq!(SimpleDoubleScoreDefinition.score_type(), ScoreType::SimpleDouble);
    assert_eq!(
        HardSoftScoreDefinition.level_labels(),
        vec!["hard score", "soft score"]
    );
    assert_eq!(HardMediumSoftScoreDefinition.hard_levels_count(), 1);
    assert_eq!(HardMediumSoftScoreDefinition.soft_levels_count(), 2);
    assert_eq!(
        HardMediumSoftScoreDefinition.level_labels(),
        vec!["hard score", "medium score", "soft score"]
    );
    assert_eq!(HardSoftScoreDefinition.init_label(), "init");
}

#[test]
fn test_fixed_create_score() {
    assert_eq!(
        HardSoftScoreDefinition.create_score(&[-1, -20]).unwrap(),
        HardSoftScore::of(-1, -20)
    );
    assert_eq!(
        HardMediumSoftScoreDefinition
            .create_score_uninitialized(-3, &[-1, -2, -3])
            .unwrap(),
        HardMediumSoftScore::of_uninitialized(-3, -1, -2, -3).unwrap()
    );
    assert_eq!(
        SimpleDoubleScoreDefinition.create_score(&[-0.5]).unwrap(),
        SimpleDoubleScore::of(-0.5)
    );
    assert_eq!(SimpleScoreDefinition.zero_score(), SimpleScore::ZERO);

    assert!(matches!(
        HardSoftScoreDefinition.create_score(&[-1]),
        Err(ScoreError::InvalidScoreConstruction(_))
    ));
    assert!(matches!(
        SimpleScoreDefinition.create_score_uninitialized(1, &[0]),
        Err(ScoreError::InvalidScoreConstruction(_))
    ));
}

#[test]
fn test_fixed_parse_and_format() {
    let score = HardSoftScoreDefinition
        .parse_score("-7init/-1hard/0soft")
        .unwrap();
    assert_eq!(score, HardSoftScore::of_uninitialized(-7, -1, 0).unwrap());
    assert_eq!(
        HardSoftScoreDefinition.format_score(&score).unwrap(),
        "-7init/[-1]hard/[0]soft"
    );
    assert_eq!(
        HardSoftScoreDefinition.format_short_score(&score).unwrap(),
        "-7init/[-1]hard"
    );
    assert_eq!(score.to_string(), "-7init/-1hard/0soft");
    assert!(matches!(
        HardSoftScoreDefinition.parse_score("-1hard"),
        Err(ScoreError::InvalidScoreFormat { .. })
    ));
}

#[test]
fn test_fixed_parse_canonical_form() {
    assert_eq!(
        HardSoftScoreDefinition
            .parse_score("-7init/[-1]hard/[0]soft")
            .unwrap(),
        HardSoftScore::of_uninitialized(-7, -1, 0).unwrap()
    );
    assert_eq!(
        HardMediumSoftScoreDefinition
            .parse_score("[-1]hard/[-20/-300]soft")
            .unwrap(),
        HardMediumSoftScore::of(-1, -20, -300)
    );
    assert_eq!(
        SimpleScoreDefinition.parse_score("[-147]hard/[]soft").unwrap(),
        SimpleScore::of(-147)
    );
    assert_eq!(
        SimpleDoubleScoreDefinition
            .parse_score("-2init/[-0.5]hard/[]soft")
            .unwrap(),
        SimpleDoubleScore::of_uninitialized(-2, -0.5).unwrap()
    );

    let score = HardMediumSoftScore::of_uninitialized(-3, 0, -5, 0).unwrap();
    let text = HardMediumSoftScoreDefinition.format_score(&score).unwrap();
    assert_eq!(text, "-3init/[0]hard/[-5/0]soft");
    assert_eq!(HardMediumSoftScoreDefinition.parse_score(&text).unwrap(), score);
    assert_eq!(
        SimpleScoreDefinition.format_score(&SimpleScore::of(-147)).unwrap(),
        "[-147]hard/[]soft"
    );
    assert_eq!(
        SimpleScoreDefinition
            .format_short_score(&SimpleScore::ZERO)
            .unwrap(),
        "0"
    );
}

#[test]
fn test_fixed_parse_rejects_wrong_arity() {
    for text in [
        "[-1]hard/[0/0]soft",
        "[-1/0]hard/[0]soft",
        "[]hard/[-1/0]soft",
        "1init/[-1]hard/[0]soft",
        "[-1]hard/[0]",
    ] {
        assert!(
            matches!(
                HardSoftScoreDefinition.parse_score(text),
                Err(ScoreError::InvalidScoreFormat { .. })
            ),
            "expected {:?} to be rejected",
            text
        );
    }
}

#[test]
fn test_bendable_definition_metadata() {
    let definition: BendableScoreDefinition = BendableScoreDefinition::new(2, 3);
    assert_eq!(definition.score_type(), ScoreType::Bendable);
    assert_eq!(definition.levels_count(), 5);
    assert_eq!(
        definition.level_labels(),
        vec![
            "hard 0 score",
            "hard 1 score",
            "soft 0 score",
            "soft 1 score",
            "soft 2 score"
        ]
    );
    assert_eq!(definition.zero_score().to_short_string(), "0");
    assert_eq!(
        definition.zero_score().to_string(),
        "[0/0]hard/[0/0/0]soft"
    );
    assert_eq!(
        format!("{:?}", definition),
        "BendableScoreDefinition(2 hard, 3 soft)"
    );

    let double = BendableDoubleScoreDefinition::new(1, 0);
    assert_eq!(double.score_type(), ScoreType::BendableDouble);
    assert_eq!(double.score_type().number_kind(), NumberKind::Double);
}

#[test]
fn test_bendable_single_level_scores() {
    let definition: BendableScoreDefinition = BendableScoreDefinition::new(2, 1);
    assert_eq!(
        definition.create_hard_score(1, -4),
        definition.create_score(&[0, -4, 0]).unwrap()
    );
    assert_eq!(
        definition.create_soft_score(0, 7),
        definition.create_score(&[0, 0, 7]).unwrap()
    );
}

#[test]
fn test_bendable_definition_compatibility() {
    let definition: BendableScoreDefinition = BendableScoreDefinition::new(1, 2);
    let matching: BendableScore = BendableScore::of(&[-1], &[0, 0]);
    let other: BendableScore = BendableScore::of(&[-1, 0], &[0]);

    assert!(definition.is_compatible(&matching));
    assert!(!definition.is_compatible(&other));
    assert_eq!(
        definition.format_short_score(&matching).unwrap(),
        "[-1]hard"
    );
    match definition.format_score(&other) {
        Err(ScoreError::IncompatibleScoreDefinition { left, right }) => {
            assert_eq!(left, "BendableScoreDefinition(1 hard, 2 soft)");
            assert_eq!(right, "BendableScore(2 hard, 1 soft)");
        }
        result => panic!("expected incompatible error, got {:?}", result),
    }
}

#[test]
fn test_bendable_parse_rejects_wrong_arity() {
    let definition: BendableScoreDefinition = BendableScoreDefinition::new(1, 2);
    for text in ["[-1/0]hard/[0/0]soft", "[-1]hard/[0]soft", "[]hard/[]soft"] {
        assert!(
            matches!(
                definition.parse_score(text),
                Err(ScoreError::InvalidScoreFormat { .. })
            ),
            "expected {:?} to be rejected",
            text
        );
    }
}

#[test]
fn test_definitions_compare_by_shape() {
    let a: BendableScoreDefinition = BendableScoreDefinition::new(1, 2);
    let b: BendableScoreDefinition = BendableScoreDefinition::new(1, 2);
    let c: BendableScoreDefinition = BendableScoreDefinition::new(2, 1);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(
        crate::test_utils::hash_of(&a),
        crate::test_utils::hash_of(&b)
    );
}

#[test]
fn test_score_type_metadata() {
    assert_eq!(ScoreType::HardSoft.to_string(), "HardSoftScore");
    assert_eq!(ScoreType::Simple.number_kind(), NumberKind::Integer);
    assert!(ScoreType::BendableDouble.is_bendable());
    assert!(!ScoreType::HardMediumSoft.is_bendable());
}

#[test]
fn test_any_definition_fixed() {
    let definition = AnyScoreDefinition::fixed(ScoreType::HardMediumSoft).unwrap();
    assert_eq!(definition.score_type(), ScoreType::HardMediumSoft);
    assert_eq!(definition.levels_count(), 3);
    assert_eq!(
        definition.zero_score(),
        AnyScore::from(HardMediumSoftScore::ZERO)
    );

    let score = definition.parse_score("-1hard/0medium/-5soft").unwrap();
    assert_eq!(score, AnyScore::from(HardMediumSoftScore::of(-1, 0, -5)));
    assert_eq!(
        definition.parse_score("[-1]hard/[0/-5]soft").unwrap(),
        score
    );
    assert_eq!(
        definition.format_score(&score).unwrap(),
        "[-1]hard/[0/-5]soft"
    );
    assert_eq!(
        definition.format_short_score(&score).unwrap(),
        "[-1]hard/[0/-5]soft"
    );
    assert!(matches!(
        definition.format_score(&AnyScore::from(HardSoftScore::of(-1, 0))),
        Err(ScoreError::IncompatibleScoreDefinition { .. })
    ));

    assert!(matches!(
        AnyScoreDefinition::fixed(ScoreType::Bendable),
        Err(ScoreError::InvalidScoreConstruction(_))
    ));
}

#[test]
fn test_any_definition_bendable() {
    let definition = AnyScoreDefinition::bendable(0, 3);
    assert_eq!(definition.hard_levels_count(), 0);
    assert_eq!(definition.soft_levels_count(), 3);
    assert_eq!(
        definition.level_labels(),
        vec!["soft 0 score", "soft 1 score", "soft 2 score"]
    );

    let score = definition
        .parse_score("-7init/[]hard/[-147/-258/-369]soft")
        .unwrap();
    assert_eq!(score.init_score(), -7);
    assert_eq!(
        definition.format_score(&score).unwrap(),
        "-7init/[]hard/[-147/-258/-369]soft"
    );
    assert_eq!(
        definition.format_short_score(&score).unwrap(),
        "-7init/[-147/-258/-369]soft"
    );

    let double = AnyScoreDefinition::bendable_double(1, 1);
    let parsed = double.parse_score("[-0.5]hard/[2]soft").unwrap();
    assert_eq!(parsed.score_type(), ScoreType::BendableDouble);
    assert!(!definition.is_compatible(&parsed));
    assert!(matches!(
        definition.format_score(&parsed),
        Err(ScoreError::IncompatibleScoreDefinition { .. })
    ));
}

#[test]
fn test_any_definition_from_typed() {
    let typed: BendableScoreDefinition = BendableScoreDefinition::new(1, 1);
    let definition = AnyScoreDefinition::from(typed);
    assert_eq!(definition, AnyScoreDefinition::bendable(1, 1));
    assert_ne!(definition, AnyScoreDefinition::bendable_double(1, 1));
}
