//! Core Score trait definition

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use super::number::ScoreNumber;
use super::ScoreLevel;
use crate::error::ScoreResult;

/// Core trait for all score types in planscore.
///
/// Scores represent the quality of a planning solution. They are used to:
/// - Compare solutions (better/worse/equal)
/// - Guide the optimization process
/// - Determine feasibility
///
/// All score implementations must be:
/// - Immutable (operations return new instances)
/// - Thread-safe (Send + Sync)
/// - Comparable (lexicographic over init score, hard levels, soft levels)
///
/// # Init score
///
/// Every score carries an init score: zero when every planning entity is
/// assigned, `-n` when `n` entities are still unassigned. It is compared before
/// any level, so a less negative init score always wins.
///
/// # Score Levels
///
/// - Hard levels: must all be non-negative for a solution to be feasible
/// - Soft levels: optimization objectives, never affect feasibility
///
/// Binary operations between scores of a different shape fail with
/// [`ScoreError::IncompatibleScoreDefinition`](crate::ScoreError::IncompatibleScoreDefinition).
pub trait Score: Clone + Debug + Display + PartialEq + PartialOrd + Send + Sync + 'static {
    /// The number stored in each level.
    type Number: ScoreNumber;

    /// Returns the init score (`<= 0` for any constructed score).
    fn init_score(&self) -> i64;

    /// Returns a copy of this score with another init score.
    ///
    /// Fails with `InvalidScoreConstruction` if `init_score` is positive.
    fn with_init_score(&self, init_score: i64) -> ScoreResult<Self>;

    /// Returns a copy of this score with an init score of zero.
    fn to_initialized_score(&self) -> Self;

    /// Returns true if every planning entity is assigned.
    fn is_solution_initialized(&self) -> bool {
        self.init_score() >= 0
    }

    /// Returns the number of hard levels.
    fn hard_levels_count(&self) -> usize;

    /// Returns the number of soft levels.
    fn soft_levels_count(&self) -> usize;

    /// Returns the total number of levels (init score excluded).
    fn levels_count(&self) -> usize {
        self.hard_levels_count() + self.soft_levels_count()
    }

    /// Returns the level values, hard levels first.
    fn to_level_numbers(&self) -> Vec<Self::Number>;

    /// Returns the semantic label for the level at the given index.
    ///
    /// # Panics
    /// Panics if `index >= levels_count()`.
    fn level_label(&self, index: usize) -> ScoreLevel;

    /// Returns true if the solution is initialized and no hard level is negative.
    ///
    /// Soft levels never affect feasibility.
    fn is_feasible(&self) -> bool;

    /// Adds two scores level by level, init score included.
    fn try_add(&self, other: &Self) -> ScoreResult<Self>;

    /// Subtracts two scores level by level, init score included.
    fn try_subtract(&self, other: &Self) -> ScoreResult<Self>;

    /// Negates the init score and every level.
    fn negate(&self) -> Self;

    /// Multiplies every component by a scalar.
    fn multiply(&self, multiplicand: f64) -> Self;

    /// Divides every component by a scalar.
    fn divide(&self, divisor: f64) -> Self;

    /// Raises every component to a power.
    ///
    /// An even exponent turns a negative init score positive; the result is
    /// returned as computed.
    fn power(&self, exponent: f64) -> Self;

    /// Returns the absolute value of every component.
    fn abs(&self) -> Self;

    /// Compares two scores, failing if their shapes differ.
    fn try_compare(&self, other: &Self) -> ScoreResult<Ordering>;

    /// Returns the abbreviated text form, omitting all-zero sections.
    fn to_short_string(&self) -> String;

    /// Returns true if this score is better than the other score.
    fn is_better_than(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Greater))
    }

    /// Returns true if this score is worse than the other score.
    fn is_worse_than(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Less))
    }
}

/// Trait for scores that can be parsed from their full text form.
pub trait ParseableScore: Score {
    /// Parses a score from a string representation.
    ///
    /// # Format
    /// - SimpleScore: "42" or "-7init/42"
    /// - HardSoftScore: "0hard/-100soft" or "-7init/-1hard/0soft"
    /// - HardMediumSoftScore: "0hard/0medium/-100soft"
    /// - BendableScore: "[0/-1]hard/[-10/-20]soft"
    fn parse(s: &str) -> ScoreResult<Self>;

    /// Returns the full string representation of this score.
    fn to_string_repr(&self) -> String {
        self.to_string()
    }
}
