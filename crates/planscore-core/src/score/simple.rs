//! SimpleScore - one integer level

use std::cmp::Ordering;
use std::fmt;

use super::grammar::check_init_score;
use super::levels;
use super::traits::Score;
use super::ScoreLevel;
use crate::error::ScoreResult;

/// A simple score with a single integer value.
///
/// Use it when every constraint weighs the same. Its single level counts as
/// a hard level: a negative value makes the solution infeasible.
///
/// # Examples
///
/// ```
/// use planscore_core::{SimpleScore, Score};
///
/// let score1 = SimpleScore::of(-5);
/// let score2 = SimpleScore::of(-3);
///
/// assert!(score2 > score1);  // -3 is better than -5
/// assert!(!score1.is_feasible());  // Negative scores are not feasible
/// assert_eq!(score1.to_string(), "-5");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleScore {
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::score::deserialize_init_score")
    )]
    init_score: i64,
    score: i64,
}

impl SimpleScore {
    /// The zero score.
    pub const ZERO: SimpleScore = SimpleScore {
        init_score: 0,
        score: 0,
    };

    /// A score of 1 (useful for incrementing).
    pub const ONE: SimpleScore = SimpleScore {
        init_score: 0,
        score: 1,
    };

    /// Creates a new initialized SimpleScore with the given value.
    #[inline]
    pub const fn of(score: i64) -> Self {
        SimpleScore {
            init_score: 0,
            score,
        }
    }

    /// Creates a score for a solution with unassigned entities.
    pub fn of_uninitialized(init_score: i64, score: i64) -> ScoreResult<Self> {
        Ok(SimpleScore {
            init_score: check_init_score(init_score)?,
            score,
        })
    }

    /// Returns the score value.
    #[inline]
    pub const fn score(&self) -> i64 {
        self.score
    }
}

impl Score for SimpleScore {
    type Number = i64;

    #[inline]
    fn is_feasible(&self) -> bool {
        levels::is_feasible(self.init_score, &[self.score])
    }

    #[inline]
    fn hard_levels_count(&self) -> usize {
        1
    }

    #[inline]
    fn soft_levels_count(&self) -> usize {
        0
    }

    fn level_label(&self, index: usize) -> ScoreLevel {
        match index {
            0 => ScoreLevel::Hard,
            _ => panic!("SimpleScore has 1 level, got index {}", index),
        }
    }

    fn to_short_string(&self) -> String {
        self.short_string()
    }

    impl_score_arith!(SimpleScore { score });
}

impl Ord for SimpleScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_components(other)
    }
}

impl_score_ops!(SimpleScore { score });

impl_score_parse!(SimpleScore<i64> { score => "" });

impl fmt::Debug for SimpleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimpleScore({})", self)
    }
}

impl From<i64> for SimpleScore {
    fn from(score: i64) -> Self {
        SimpleScore::of(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_and_conversion() {
        assert_eq!(SimpleScore::from(0), SimpleScore::ZERO);
        assert_eq!(SimpleScore::ONE.score(), 1);
        assert_eq!(SimpleScore::default(), SimpleScore::ZERO);
    }

    #[test]
    fn test_uninitialized_constructor_rejects_positive_init() {
        assert_eq!(
            SimpleScore::of_uninitialized(-3, -5).map(|s| s.init_score()),
            Ok(-3)
        );
        assert!(SimpleScore::of_uninitialized(1, -5).is_err());
    }

    #[test]
    fn test_std_operators_include_init_score() {
        let a = SimpleScore::of_uninitialized(-2, 10).unwrap();
        let b = SimpleScore::of_uninitialized(-1, -4).unwrap();
        let sum = a + b;
        assert_eq!((sum.init_score(), sum.score()), (-3, 6));
        assert_eq!(sum - b, a);
        assert_eq!((-a).init_score(), 2);
    }
}
