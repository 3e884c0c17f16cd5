//! Score definitions: the factories that fix a score's shape.
//!
//! A definition knows how many hard and soft levels its scores carry and which
//! number kind backs them. It builds scores from raw level values, parses the
//! canonical text form and formats scores it is compatible with.
//!
//! The canonical form brackets the hard and soft sections for every variant, so
//! a `HardSoftScoreDefinition` and a one-by-one `BendableScoreDefinition` agree
//! on text: `-7init/[-1]hard/[0]soft`.

mod any;
mod bendable;
mod fixed;

#[cfg(test)]
mod tests;

use std::fmt::{self, Debug};

use tracing::debug;

use crate::error::{ScoreError, ScoreResult};
use crate::score::{grammar, NumberKind, Score};

pub use any::AnyScoreDefinition;
pub use bendable::{BendableDoubleScoreDefinition, BendableScoreDefinition};
pub use fixed::{
    HardMediumSoftScoreDefinition, HardSoftScoreDefinition, SimpleDoubleScoreDefinition,
    SimpleScoreDefinition,
};

/// Level values accepted by a definition's score constructors.
pub type LevelNumber<D> = <<D as ScoreDefinition>::Score as Score>::Number;

/// Factory and metadata for one score shape.
///
/// # Examples
///
/// ```
/// use planscore_core::{BendableScoreDefinition, Score, ScoreDefinition};
///
/// let definition: BendableScoreDefinition = BendableScoreDefinition::new(0, 3);
/// let parsed = definition.parse_score("-7init/[]hard/[-147/-258/-369]soft").unwrap();
///
/// let created = definition.create_score_uninitialized(-7, &[-147, -258, -369]).unwrap();
/// assert_eq!(parsed, created);
/// assert_eq!(parsed.init_score(), -7);
/// assert_eq!(
///     definition.format_short_score(&parsed).unwrap(),
///     "-7init/[-147/-258/-369]soft"
/// );
/// ```
pub trait ScoreDefinition: Clone + Debug + Send + Sync + 'static {
    /// The score type this definition produces.
    type Score: Score;

    /// Returns the variant of the scores this definition produces.
    fn score_type(&self) -> ScoreType;

    /// Returns the number of hard levels.
    fn hard_levels_count(&self) -> usize;

    /// Returns the number of soft levels.
    fn soft_levels_count(&self) -> usize;

    /// Returns the total number of levels (init score excluded).
    fn levels_count(&self) -> usize {
        self.hard_levels_count() + self.soft_levels_count()
    }

    /// Returns a human readable label per level, hard levels first.
    fn level_labels(&self) -> Vec<String>;

    /// Returns the label of the init score in the text grammar.
    fn init_label(&self) -> &'static str {
        grammar::INIT_LABEL
    }

    /// Returns the zero score of this shape.
    fn zero_score(&self) -> Self::Score;

    /// Builds a score from an init score and `levels_count()` level values.
    ///
    /// Fails with `InvalidScoreConstruction` if `init_score` is positive or the
    /// number of levels does not match.
    fn from_level_numbers(
        &self,
        init_score: i64,
        levels: &[LevelNumber<Self>],
    ) -> ScoreResult<Self::Score>;

    /// Builds a fully initialized score from hard then soft level values.
    fn create_score(&self, levels: &[LevelNumber<Self>]) -> ScoreResult<Self::Score> {
        self.from_level_numbers(0, levels)
    }

    /// Builds a score for a solution with `-init_score` unassigned entities.
    fn create_score_uninitialized(
        &self,
        init_score: i64,
        levels: &[LevelNumber<Self>],
    ) -> ScoreResult<Self::Score> {
        self.from_level_numbers(init_score, levels)
    }

    /// Parses the full canonical text form. Nothing is returned unless the whole
    /// text matches.
    fn parse_score(&self, text: &str) -> ScoreResult<Self::Score>;

    /// Returns true if the score has this definition's level counts.
    fn is_compatible(&self, score: &Self::Score) -> bool {
        score.hard_levels_count() == self.hard_levels_count()
            && score.soft_levels_count() == self.soft_levels_count()
    }

    /// Formats a score of this definition in the full canonical form.
    fn format_score(&self, score: &Self::Score) -> ScoreResult<String> {
        self.ensure_compatible(score)?;
        let levels = score.to_level_numbers();
        let (hard, soft) = levels.split_at(self.hard_levels_count());
        Ok(grammar::format_bendable(score.init_score(), hard, soft))
    }

    /// Formats a score of this definition in the short canonical form.
    fn format_short_score(&self, score: &Self::Score) -> ScoreResult<String> {
        self.ensure_compatible(score)?;
        let levels = score.to_level_numbers();
        let (hard, soft) = levels.split_at(self.hard_levels_count());
        Ok(grammar::format_bendable_short(score.init_score(), hard, soft))
    }

    /// Fails with `IncompatibleScoreDefinition` unless [`is_compatible`](Self::is_compatible).
    fn ensure_compatible(&self, score: &Self::Score) -> ScoreResult<()> {
        if self.is_compatible(score) {
            return Ok(());
        }
        Err(ScoreError::incompatible(
            format!("{:?}", self),
            format!(
                "{}({} hard, {} soft)",
                self.score_type().type_name(),
                score.hard_levels_count(),
                score.soft_levels_count()
            ),
        ))
    }
}

/// The closed set of score variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScoreType {
    /// One integer level.
    Simple,
    /// One floating point level.
    SimpleDouble,
    /// One hard and one soft integer level.
    HardSoft,
    /// Hard, medium and soft integer levels.
    HardMediumSoft,
    /// Runtime-chosen hard and soft integer levels.
    Bendable,
    /// Runtime-chosen hard and soft floating point levels.
    BendableDouble,
}

impl ScoreType {
    /// Returns the score type name used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            ScoreType::Simple => "SimpleScore",
            ScoreType::SimpleDouble => "SimpleDoubleScore",
            ScoreType::HardSoft => "HardSoftScore",
            ScoreType::HardMediumSoft => "HardMediumSoftScore",
            ScoreType::Bendable => "BendableScore",
            ScoreType::BendableDouble => "BendableDoubleScore",
        }
    }

    /// Returns the number kind backing this variant's levels.
    pub const fn number_kind(&self) -> NumberKind {
        match self {
            ScoreType::SimpleDouble | ScoreType::BendableDouble => NumberKind::Double,
            _ => NumberKind::Integer,
        }
    }

    /// Returns true if the level counts are chosen at runtime.
    pub const fn is_bendable(&self) -> bool {
        matches!(self, ScoreType::Bendable | ScoreType::BendableDouble)
    }
}

impl fmt::Display for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

pub(crate) fn check_levels_count(
    score_type: ScoreType,
    expected: usize,
    actual: usize,
) -> ScoreResult<()> {
    if expected == actual {
        return Ok(());
    }
    Err(ScoreError::InvalidScoreConstruction(format!(
        "{} requires {} levels, got {}",
        score_type, expected, actual
    )))
}

/// Parses `[{init}init/][h0/...]hard/[s0/...]soft` with the definition's arity.
pub(crate) fn parse_bracketed<D: ScoreDefinition>(
    definition: &D,
    text: &str,
) -> ScoreResult<D::Score> {
    let type_name = definition.score_type().type_name();
    let (init_score, hard, soft) = grammar::parse_bendable::<LevelNumber<D>>(type_name, text)?;
    if hard.len() != definition.hard_levels_count() || soft.len() != definition.soft_levels_count()
    {
        return Err(ScoreError::format(
            type_name,
            text,
            format!(
                "expected {} hard and {} soft levels, got {} and {}",
                definition.hard_levels_count(),
                definition.soft_levels_count(),
                hard.len(),
                soft.len()
            ),
        ));
    }
    let levels: Vec<LevelNumber<D>> = hard.into_iter().chain(soft).collect();
    definition.from_level_numbers(init_score, &levels)
}

/// Logs rejected score text at debug level.
pub(crate) fn traced_parse<S>(
    score_type: ScoreType,
    text: &str,
    result: ScoreResult<S>,
) -> ScoreResult<S> {
    if let Err(error) = &result {
        debug!(score_type = score_type.type_name(), text, %error, "Rejected score text");
    }
    result
}
