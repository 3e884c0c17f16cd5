//! Definition of bendable scores, whose level counts are chosen at runtime.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use tracing::debug;

use super::{check_levels_count, parse_bracketed, traced_parse, ScoreDefinition, ScoreType};
use crate::error::ScoreResult;
use crate::score::{BendableScore, NumberKind, ScoreNumber};

/// Definition of [`BendableScore`] with `hard_levels_count` hard levels and
/// `soft_levels_count` soft levels.
///
/// Every score built or parsed through one definition has exactly that arity.
///
/// # Examples
///
/// ```
/// use planscore_core::{BendableScoreDefinition, ScoreDefinition};
///
/// let definition: BendableScoreDefinition = BendableScoreDefinition::new(1, 2);
/// let score = definition.create_score(&[-5, -10, -200]).unwrap();
///
/// assert_eq!(score.hard_or_soft_score(0), -5);
/// assert_eq!(score.hard_or_soft_score(2), -200);
/// assert!(definition.parse_score("-147").is_err());
/// assert!(definition.create_score(&[-5, -10]).is_err());
/// ```
pub struct BendableScoreDefinition<N: ScoreNumber = i64> {
    hard_levels_count: usize,
    soft_levels_count: usize,
    _number: PhantomData<fn() -> N>,
}

/// Definition of [`BendableDoubleScore`](crate::BendableDoubleScore).
pub type BendableDoubleScoreDefinition = BendableScoreDefinition<f64>;

impl<N: ScoreNumber> BendableScoreDefinition<N> {
    /// Creates a definition with the given level counts.
    pub fn new(hard_levels_count: usize, soft_levels_count: usize) -> Self {
        debug!(
            hard_levels_count,
            soft_levels_count,
            number_kind = ?N::KIND,
            "Created bendable score definition"
        );
        BendableScoreDefinition {
            hard_levels_count,
            soft_levels_count,
            _number: PhantomData,
        }
    }

    /// Creates a score with a single non-zero hard level.
    ///
    /// # Panics
    /// Panics if `level >= hard_levels_count`.
    pub fn create_hard_score(&self, level: usize, value: N) -> BendableScore<N> {
        BendableScore::of_hard(self.hard_levels_count, self.soft_levels_count, level, value)
    }

    /// Creates a score with a single non-zero soft level.
    ///
    /// # Panics
    /// Panics if `level >= soft_levels_count`.
    pub fn create_soft_score(&self, level: usize, value: N) -> BendableScore<N> {
        BendableScore::of_soft(self.hard_levels_count, self.soft_levels_count, level, value)
    }
}

impl<N: ScoreNumber> ScoreDefinition for BendableScoreDefinition<N> {
    type Score = BendableScore<N>;

    fn score_type(&self) -> ScoreType {
        match N::KIND {
            NumberKind::Integer => ScoreType::Bendable,
            NumberKind::Double => ScoreType::BendableDouble,
        }
    }

    #[inline]
    fn hard_levels_count(&self) -> usize {
        self.hard_levels_count
    }

    #[inline]
    fn soft_levels_count(&self) -> usize {
        self.soft_levels_count
    }

    fn level_labels(&self) -> Vec<String> {
        let hard = (0..self.hard_levels_count).map(|i| format!("hard {} score", i));
        let soft = (0..self.soft_levels_count).map(|i| format!("soft {} score", i));
        hard.chain(soft).collect()
    }

    fn zero_score(&self) -> BendableScore<N> {
        BendableScore::zero(self.hard_levels_count, self.soft_levels_count)
    }

    fn from_level_numbers(&self, init_score: i64, levels: &[N]) -> ScoreResult<BendableScore<N>> {
        check_levels_count(self.score_type(), self.levels_count(), levels.len())?;
        let (hard, soft) = levels.split_at(self.hard_levels_count);
        BendableScore::of_uninitialized(init_score, hard, soft)
    }

    fn parse_score(&self, text: &str) -> ScoreResult<BendableScore<N>> {
        traced_parse(self.score_type(), text, parse_bracketed(self, text))
    }
}

impl<N: ScoreNumber> Clone for BendableScoreDefinition<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: ScoreNumber> Copy for BendableScoreDefinition<N> {}

impl<N: ScoreNumber> PartialEq for BendableScoreDefinition<N> {
    fn eq(&self, other: &Self) -> bool {
        self.hard_levels_count == other.hard_levels_count
            && self.soft_levels_count == other.soft_levels_count
    }
}

impl<N: ScoreNumber> Eq for BendableScoreDefinition<N> {}

impl<N: ScoreNumber> Hash for BendableScoreDefinition<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hard_levels_count.hash(state);
        self.soft_levels_count.hash(state);
    }
}

impl<N: ScoreNumber> fmt::Debug for BendableScoreDefinition<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}Definition({} hard, {} soft)",
            self.score_type().type_name(),
            self.hard_levels_count,
            self.soft_levels_count
        )
    }
}
