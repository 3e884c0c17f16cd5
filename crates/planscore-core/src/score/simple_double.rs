//! SimpleDoubleScore - Single-level floating point score

use std::fmt;
use std::hash::{Hash, Hasher};

use super::grammar::check_init_score;
use super::levels;
use super::traits::Score;
use super::ScoreLevel;
use crate::error::ScoreResult;

/// A single-level score backed by an `f64`.
///
/// Arithmetic uses native floating point operations: multiply, divide and
/// power are not rounded.
///
/// # Examples
///
/// ```
/// use planscore_core::{Score, SimpleDoubleScore};
///
/// let score = SimpleDoubleScore::of(-20.007);
/// assert!(score > SimpleDoubleScore::of(-20.06));
/// assert_eq!(score.multiply(2.0), SimpleDoubleScore::of(-40.014));
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleDoubleScore {
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::score::deserialize_init_score")
    )]
    init_score: i64,
    score: f64,
}

impl SimpleDoubleScore {
    /// The zero score.
    pub const ZERO: SimpleDoubleScore = SimpleDoubleScore {
        init_score: 0,
        score: 0.0,
    };

    /// Creates a new initialized score with the given value.
    #[inline]
    pub const fn of(score: f64) -> Self {
        SimpleDoubleScore {
            init_score: 0,
            score,
        }
    }

    /// Creates a score for a solution with unassigned entities.
    pub fn of_uninitialized(init_score: i64, score: f64) -> ScoreResult<Self> {
        Ok(SimpleDoubleScore {
            init_score: check_init_score(init_score)?,
            score,
        })
    }

    /// Returns the score value.
    #[inline]
    pub const fn score(&self) -> f64 {
        self.score
    }
}

impl Score for SimpleDoubleScore {
    type Number = f64;

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
            _ => panic!("SimpleDoubleScore has 1 level, got index {}", index),
        }
    }

    fn to_short_string(&self) -> String {
        self.short_string()
    }

    impl_score_arith!(SimpleDoubleScore { score });
}

impl_score_ops!(SimpleDoubleScore { score });

impl_score_parse!(SimpleDoubleScore<f64> { score => "" });

// 0.0 and -0.0 compare equal, so they must hash equal too.
impl Hash for SimpleDoubleScore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.init_score.hash(state);
        (self.score + 0.0).to_bits().hash(state);
    }
}

impl fmt::Debug for SimpleDoubleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimpleDoubleScore({})", self)
    }
}

impl From<f64> for SimpleDoubleScore {
    fn from(score: f64) -> Self {
        SimpleDoubleScore::of(score)
    }
}
