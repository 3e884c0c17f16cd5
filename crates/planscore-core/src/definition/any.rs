//! AnyScoreDefinition - a definition chosen at runtime

use super::{
    BendableDoubleScoreDefinition, BendableScoreDefinition, HardMediumSoftScoreDefinition,
    HardSoftScoreDefinition, ScoreDefinition, ScoreType, SimpleDoubleScoreDefinition,
    SimpleScoreDefinition,
};
use crate::error::{ScoreError, ScoreResult};
use crate::score::AnyScore;

/// A score definition of any supported variant.
///
/// Parses and builds [`AnyScore`] values so the score shape can come from
/// configuration.
///
/// # Examples
///
/// ```
/// use planscore_core::{AnyScoreDefinition, ScoreType};
///
/// let definition = AnyScoreDefinition::bendable(1, 2);
/// let score = definition.parse_score("[-147]hard/[-258/-369]soft").unwrap();
/// assert_eq!(score.score_type(), ScoreType::Bendable);
/// assert_eq!(score.to_short_string(), "[-147]hard/[-258/-369]soft");
///
/// let hard_soft = AnyScoreDefinition::fixed(ScoreType::HardSoft).unwrap();
/// assert!(!hard_soft.is_compatible(&score));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyScoreDefinition {
    Simple(SimpleScoreDefinition),
    SimpleDouble(SimpleDoubleScoreDefinition),
    HardSoft(HardSoftScoreDefinition),
    HardMediumSoft(HardMediumSoftScoreDefinition),
    Bendable(BendableScoreDefinition),
    BendableDouble(BendableDoubleScoreDefinition),
}

macro_rules! each_definition {
    ($value:expr, $d:ident => $body:expr) => {
        match $value {
            AnyScoreDefinition::Simple($d) => $body,
            AnyScoreDefinition::SimpleDouble($d) => $body,
            AnyScoreDefinition::HardSoft($d) => $body,
            AnyScoreDefinition::HardMediumSoft($d) => $body,
            AnyScoreDefinition::Bendable($d) => $body,
            AnyScoreDefinition::BendableDouble($d) => $body,
        }
    };
}

/// Pairs a definition with a score of the same variant, or takes `$otherwise`.
macro_rules! with_matching_score {
    ($definition:expr, $score:expr, ($d:ident, $s:ident) => $body:expr, $otherwise:expr) => {
        match ($definition, $score) {
            (AnyScoreDefinition::Simple($d), AnyScore::Simple($s)) => $body,
            (AnyScoreDefinition::SimpleDouble($d), AnyScore::SimpleDouble($s)) => $body,
            (AnyScoreDefinition::HardSoft($d), AnyScore::HardSoft($s)) => $body,
            (AnyScoreDefinition::HardMediumSoft($d), AnyScore::HardMediumSoft($s)) => $body,
            (AnyScoreDefinition::Bendable($d), AnyScore::Bendable($s)) => $body,
            (AnyScoreDefinition::BendableDouble($d), AnyScore::BendableDouble($s)) => $body,
            _ => $otherwise,
        }
    };
}

impl AnyScoreDefinition {
    /// Returns the definition of a fixed-arity score type.
    ///
    /// Fails for bendable types, which need level counts.
    pub fn fixed(score_type: ScoreType) -> ScoreResult<Self> {
        match score_type {
            ScoreType::Simple => Ok(AnyScoreDefinition::Simple(SimpleScoreDefinition)),
            ScoreType::SimpleDouble => Ok(AnyScoreDefinition::SimpleDouble(
                SimpleDoubleScoreDefinition,
            )),
            ScoreType::HardSoft => Ok(AnyScoreDefinition::HardSoft(HardSoftScoreDefinition)),
            ScoreType::HardMediumSoft => Ok(AnyScoreDefinition::HardMediumSoft(
                HardMediumSoftScoreDefinition,
            )),
            ScoreType::Bendable | ScoreType::BendableDouble => {
                Err(ScoreError::InvalidScoreConstruction(format!(
                    "{} requires hard and soft level counts",
                    score_type
                )))
            }
        }
    }

    /// Returns a bendable definition with integer levels.
    pub fn bendable(hard_levels_count: usize, soft_levels_count: usize) -> Self {
        AnyScoreDefinition::Bendable(BendableScoreDefinition::new(
            hard_levels_count,
            soft_levels_count,
        ))
    }

    /// Returns a bendable definition with floating point levels.
    pub fn bendable_double(hard_levels_count: usize, soft_levels_count: usize) -> Self {
        AnyScoreDefinition::BendableDouble(BendableDoubleScoreDefinition::new(
            hard_levels_count,
            soft_levels_count,
        ))
    }

    pub fn score_type(&self) -> ScoreType {
        each_definition!(self, d => d.score_type())
    }

    pub fn hard_levels_count(&self) -> usize {
        each_definition!(self, d => d.hard_levels_count())
    }

    pub fn soft_levels_count(&self) -> usize {
        each_definition!(self, d => d.soft_levels_count())
    }

    pub fn levels_count(&self) -> usize {
        each_definition!(self, d => d.levels_count())
    }

    pub fn level_labels(&self) -> Vec<String> {
        each_definition!(self, d => d.level_labels())
    }

    pub fn zero_score(&self) -> AnyScore {
        each_definition!(self, d => AnyScore::from(d.zero_score()))
    }

    /// Parses the full text form into a score of this definition's variant.
    pub fn parse_score(&self, text: &str) -> ScoreResult<AnyScore> {
        each_definition!(self, d => d.parse_score(text).map(AnyScore::from))
    }

    /// Returns true if the score has this definition's variant and level counts.
    pub fn is_compatible(&self, score: &AnyScore) -> bool {
        with_matching_score!(self, score, (d, s) => d.is_compatible(s), false)
    }

    /// Formats a compatible score in the full canonical form.
    pub fn format_score(&self, score: &AnyScore) -> ScoreResult<String> {
        with_matching_score!(
            self,
            score,
            (d, s) => d.format_score(s),
            Err(self.incompatible(score))
        )
    }

    /// Formats a compatible score in the short canonical form.
    pub fn format_short_score(&self, score: &AnyScore) -> ScoreResult<String> {
        with_matching_score!(
            self,
            score,
            (d, s) => d.format_short_score(s),
            Err(self.incompatible(score))
        )
    }

    fn incompatible(&self, score: &AnyScore) -> ScoreError {
        ScoreError::incompatible(format!("{:?}", self), score.shape())
    }
}

impl From<BendableScoreDefinition> for AnyScoreDefinition {
    fn from(definition: BendableScoreDefinition) -> Self {
        AnyScoreDefinition::Bendable(definition)
    }
}

impl From<BendableDoubleScoreDefinition> for AnyScoreDefinition {
    fn from(definition: BendableDoubleScoreDefinition) -> Self {
        AnyScoreDefinition::BendableDouble(definition)
    }
}
