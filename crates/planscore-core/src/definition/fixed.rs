//! Definitions for the fixed-arity score types.
//!
//! These parse the canonical bracketed form and also the labeled form the score
//! types print with `Display` (`-7init/-1hard/0soft`).

use super::{
    check_levels_count, parse_bracketed, traced_parse, LevelNumber, ScoreDefinition, ScoreType,
};
use crate::error::ScoreResult;
use crate::score::{
    HardMediumSoftScore, HardSoftScore, ParseableScore, SimpleDoubleScore, SimpleScore,
};

/// Generates a unit-struct definition for a score type whose arity is fixed.
///
/// `$build` receives the init score and a level slice already checked to hold
/// exactly `$hard + $soft` values.
macro_rules! fixed_definition {
    (
        $(#[$meta:meta])*
        $name:ident => $score:ident, $score_type:expr, hard: $hard:literal, soft: $soft:literal,
        labels: [$($label:literal),+],
        zero: $zero:expr,
        build: |$init:ident, $levels:ident| $build:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl ScoreDefinition for $name {
            type Score = $score;

            fn score_type(&self) -> ScoreType {
                $score_type
            }

            #[inline]
            fn hard_levels_count(&self) -> usize {
                $hard
            }

            #[inline]
            fn soft_levels_count(&self) -> usize {
                $soft
            }

            fn level_labels(&self) -> Vec<String> {
                vec![$($label.to_string()),+]
            }

            fn zero_score(&self) -> $score {
                $zero
            }

            fn from_level_numbers(
                &self,
                $init: i64,
                $levels: &[LevelNumber<Self>],
            ) -> ScoreResult<$score> {
                check_levels_count($score_type, $hard + $soft, $levels.len())?;
                $build
            }

            fn parse_score(&self, text: &str) -> ScoreResult<$score> {
                let result = if text.contains('[') {
                    parse_bracketed(self, text)
                } else {
                    <$score as ParseableScore>::parse(text)
                };
                traced_parse($score_type, text, result)
            }
        }
    };
}

fixed_definition!(
    /// Definition of [`SimpleScore`]: a single integer level.
    SimpleScoreDefinition => SimpleScore, ScoreType::Simple, hard: 1, soft: 0,
    labels: ["score"],
    zero: SimpleScore::ZERO,
    build: |init_score, levels| SimpleScore::of_uninitialized(init_score, levels[0])
);

fixed_definition!(
    /// Definition of [`SimpleDoubleScore`]: a single floating point level.
    SimpleDoubleScoreDefinition => SimpleDoubleScore, ScoreType::SimpleDouble, hard: 1, soft: 0,
    labels: ["score"],
    zero: SimpleDoubleScore::ZERO,
    build: |init_score, levels| SimpleDoubleScore::of_uninitialized(init_score, levels[0])
);

fixed_definition!(
    /// Definition of [`HardSoftScore`]: one hard and one soft level.
    HardSoftScoreDefinition => HardSoftScore, ScoreType::HardSoft, hard: 1, soft: 1,
    labels: ["hard score", "soft score"],
    zero: HardSoftScore::ZERO,
    build: |init_score, levels| HardSoftScore::of_uninitialized(init_score, levels[0], levels[1])
);

fixed_definition!(
    /// Definition of [`HardMediumSoftScore`]: hard, medium and soft levels.
    HardMediumSoftScoreDefinition => HardMediumSoftScore, ScoreType::HardMediumSoft, hard: 1, soft: 2,
    labels: ["hard score", "medium score", "soft score"],
    zero: HardMediumSoftScore::ZERO,
    build: |init_score, levels| {
        HardMediumSoftScore::of_uninitialized(init_score, levels[0], levels[1], levels[2])
    }
);
