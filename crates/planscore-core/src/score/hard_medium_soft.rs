//! HardMediumSoftScore - Three-level score with hard, medium, and soft constraints

use std::cmp::Ordering;
use std::fmt;

use super::grammar::check_init_score;
use super::levels;
use super::traits::Score;
use super::ScoreLevel;
use crate::error::ScoreResult;

/// A score with hard, medium, and soft constraint levels.
///
/// Hard constraints must be satisfied for feasibility.
/// Medium constraints have higher priority than soft constraints.
/// Soft constraints are the lowest priority optimization objectives.
///
/// Comparison order: init > hard > medium > soft
///
/// # Examples
///
/// ```
/// use planscore_core::HardMediumSoftScore;
///
/// let score1 = HardMediumSoftScore::of(0, -10, -100);
/// let score2 = HardMediumSoftScore::of(0, -5, -200);
///
/// // Better medium score wins even with worse soft score
/// assert!(score2 > score1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardMediumSoftScore {
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::score::deserialize_init_score")
    )]
    init_score: i64,
    hard: i64,
    medium: i64,
    soft: i64,
}

impl HardMediumSoftScore {
    /// The zero score.
    pub const ZERO: HardMediumSoftScore = HardMediumSoftScore::of(0, 0, 0);

    /// One hard constraint penalty.
    pub const ONE_HARD: HardMediumSoftScore = HardMediumSoftScore::of(1, 0, 0);

    /// One medium constraint penalty.
    pub const ONE_MEDIUM: HardMediumSoftScore = HardMediumSoftScore::of(0, 1, 0);

    /// One soft constraint penalty.
    pub const ONE_SOFT: HardMediumSoftScore = HardMediumSoftScore::of(0, 0, 1);

    /// Creates a new initialized HardMediumSoftScore.
    #[inline]
    pub const fn of(hard: i64, medium: i64, soft: i64) -> Self {
        HardMediumSoftScore {
            init_score: 0,
            hard,
            medium,
            soft,
        }
    }

    /// Creates a score for a solution with unassigned entities.
    pub fn of_uninitialized(
        init_score: i64,
        hard: i64,
        medium: i64,
        soft: i64,
    ) -> ScoreResult<Self> {
        Ok(HardMediumSoftScore {
            init_score: check_init_score(init_score)?,
            hard,
            medium,
            soft,
        })
    }

    /// Creates a score with only a hard component.
    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        HardMediumSoftScore::of(hard, 0, 0)
    }

    /// Creates a score with only a medium component.
    #[inline]
    pub const fn of_medium(medium: i64) -> Self {
        HardMediumSoftScore::of(0, medium, 0)
    }

    /// Creates a score with only a soft component.
    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        HardMediumSoftScore::of(0, 0, soft)
    }

    /// Returns the hard score component.
    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    /// Returns the medium score component.
    #[inline]
    pub const fn medium(&self) -> i64 {
        self.medium
    }

    /// Returns the soft score component.
    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }
}

impl Score for HardMediumSoftScore {
    type Number = i64;

    #[inline]
    fn is_feasible(&self) -> bool {
        levels::is_feasible(self.init_score, &[self.hard])
    }

    #[inline]
    fn hard_levels_count(&self) -> usize {
        1
    }

    #[inline]
    fn soft_levels_count(&self) -> usize {
        2
    }

    fn level_label(&self, index: usize) -> ScoreLevel {
        match index {
            0 => ScoreLevel::Hard,
            1 => ScoreLevel::Medium,
            2 => ScoreLevel::Soft,
            _ => panic!("HardMediumSoftScore has 3 levels, got index {}", index),
        }
    }

    fn to_short_string(&self) -> String {
        self.short_string()
    }

    impl_score_arith!(HardMediumSoftScore { hard, medium, soft });
}

impl Ord for HardMediumSoftScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_components(other)
    }
}

impl_score_ops!(HardMediumSoftScore { hard, medium, soft });

impl_score_parse!(HardMediumSoftScore<i64> { hard => "hard", medium => "medium", soft => "soft" });

impl fmt::Debug for HardMediumSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HardMediumSoftScore({})", self)
    }
}
