//! HardSoftScore - Two-level score with hard and soft constraints

use std::cmp::Ordering;
use std::fmt;

use super::grammar::check_init_score;
use super::levels;
use super::traits::Score;
use super::ScoreLevel;
use crate::error::ScoreResult;

/// A score with separate hard and soft constraint levels.
///
/// Hard constraints must be satisfied for a solution to be feasible.
/// Soft constraints are optimization objectives.
///
/// When comparing scores:
/// 1. Init scores are compared first
/// 2. Hard scores are compared next
/// 3. Soft scores are only compared when both are equal
///
/// # Examples
///
/// ```
/// use planscore_core::HardSoftScore;
///
/// let score1 = HardSoftScore::of(-1, -100);  // 1 hard constraint broken
/// let score2 = HardSoftScore::of(0, -200);   // Feasible but poor soft score
///
/// // Feasible solutions are always better than infeasible ones
/// assert!(score2 > score1);
///
/// // An uninitialized solution loses to any initialized one
/// let partial = HardSoftScore::of_uninitialized(-1, 0, 0).unwrap();
/// assert!(score1 > partial);
/// assert_eq!(partial.to_string(), "-1init/0hard/0soft");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardSoftScore {
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::score::deserialize_init_score")
    )]
    init_score: i64,
    hard: i64,
    soft: i64,
}

impl HardSoftScore {
    /// The zero score.
    pub const ZERO: HardSoftScore = HardSoftScore {
        init_score: 0,
        hard: 0,
        soft: 0,
    };

    /// One hard constraint penalty.
    pub const ONE_HARD: HardSoftScore = HardSoftScore {
        init_score: 0,
        hard: 1,
        soft: 0,
    };

    /// One soft constraint penalty.
    pub const ONE_SOFT: HardSoftScore = HardSoftScore {
        init_score: 0,
        hard: 0,
        soft: 1,
    };

    /// Creates a new initialized HardSoftScore.
    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        HardSoftScore {
            init_score: 0,
            hard,
            soft,
        }
    }

    /// Creates a score for a solution with unassigned entities.
    pub fn of_uninitialized(init_score: i64, hard: i64, soft: i64) -> ScoreResult<Self> {
        Ok(HardSoftScore {
            init_score: check_init_score(init_score)?,
            hard,
            soft,
        })
    }

    /// Creates a score with only a hard component.
    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        HardSoftScore::of(hard, 0)
    }

    /// Creates a score with only a soft component.
    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        HardSoftScore::of(0, soft)
    }

    /// Returns the hard score component.
    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    /// Returns the soft score component.
    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }

    /// Returns the hard score as a new HardSoftScore.
    pub const fn hard_score(&self) -> HardSoftScore {
        HardSoftScore::of_hard(self.hard)
    }

    /// Returns the soft score as a new HardSoftScore.
    pub const fn soft_score(&self) -> HardSoftScore {
        HardSoftScore::of_soft(self.soft)
    }
}

impl Score for HardSoftScore {
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
        1
    }

    fn level_label(&self, index: usize) -> ScoreLevel {
        match index {
            0 => ScoreLevel::Hard,
            1 => ScoreLevel::Soft,
            _ => panic!("HardSoftScore has 2 levels, got index {}", index),
        }
    }

    fn to_short_string(&self) -> String {
        self.short_string()
    }

    impl_score_arith!(HardSoftScore { hard, soft });
}

impl Ord for HardSoftScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_components(other)
    }
}

impl_score_ops!(HardSoftScore { hard, soft });

impl_score_parse!(HardSoftScore<i64> { hard => "hard", soft => "soft" });

impl fmt::Debug for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HardSoftScore({})", self)
    }
}
