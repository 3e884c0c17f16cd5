//! BendableScore - Runtime-configurable multi-level score

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

use super::grammar::{self, check_init_score};
use super::levels::{self, LevelBuf};
use super::number::ScoreNumber;
use super::traits::{ParseableScore, Score};
use super::ScoreLevel;
use crate::error::{ScoreError, ScoreResult};

/// A score with a configurable number of hard and soft levels.
///
/// Unlike `HardSoftScore`, the number of levels is determined at runtime.
/// This is useful when the constraint structure varies between problem instances.
/// Two bendable scores only combine or compare when their hard and soft level
/// counts match; otherwise the `try_*` operations fail and `partial_cmp`
/// returns `None`.
///
/// # Examples
///
/// ```
/// use planscore_core::{BendableScore, Score};
///
/// // Create a score with 2 hard levels and 3 soft levels
/// let score: BendableScore = BendableScore::of(&[-1, -2], &[-10, -20, -30]);
///
/// assert_eq!(score.hard_levels_count(), 2);
/// assert_eq!(score.soft_levels_count(), 3);
/// assert!(!score.is_feasible());  // Negative hard scores
/// assert_eq!(score.to_string(), "[-1/-2]hard/[-10/-20/-30]soft");
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BendableScore<N: ScoreNumber = i64> {
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::score::deserialize_init_score")
    )]
    init_score: i64,
    hard_scores: LevelBuf<N>,
    soft_scores: LevelBuf<N>,
}

/// A bendable score backed by `f64` levels.
pub type BendableDoubleScore = BendableScore<f64>;

impl<N: ScoreNumber> BendableScore<N> {
    /// Creates an initialized score from hard and soft level values.
    pub fn of(hard_scores: &[N], soft_scores: &[N]) -> Self {
        BendableScore {
            init_score: 0,
            hard_scores: LevelBuf::from_slice(hard_scores),
            soft_scores: LevelBuf::from_slice(soft_scores),
        }
    }

    /// Creates a score for a solution with unassigned entities.
    pub fn of_uninitialized(
        init_score: i64,
        hard_scores: &[N],
        soft_scores: &[N],
    ) -> ScoreResult<Self> {
        Ok(BendableScore {
            init_score: check_init_score(init_score)?,
            hard_scores: LevelBuf::from_slice(hard_scores),
            soft_scores: LevelBuf::from_slice(soft_scores),
        })
    }

    pub(crate) fn from_parts(
        init_score: i64,
        hard_scores: LevelBuf<N>,
        soft_scores: LevelBuf<N>,
    ) -> Self {
        BendableScore {
            init_score,
            hard_scores,
            soft_scores,
        }
    }

    /// Creates a zero score with the specified number of levels.
    pub fn zero(hard_levels: usize, soft_levels: usize) -> Self {
        BendableScore {
            init_score: 0,
            hard_scores: LevelBuf::from_elem(N::zero(), hard_levels),
            soft_scores: LevelBuf::from_elem(N::zero(), soft_levels),
        }
    }

    /// Creates a score with a single non-zero hard level.
    ///
    /// # Panics
    /// Panics if `level >= hard_levels`.
    pub fn of_hard(hard_levels: usize, soft_levels: usize, level: usize, value: N) -> Self {
        let mut score = Self::zero(hard_levels, soft_levels);
        score.hard_scores[level] = value;
        score
    }

    /// Creates a score with a single non-zero soft level.
    ///
    /// # Panics
    /// Panics if `level >= soft_levels`.
    pub fn of_soft(hard_levels: usize, soft_levels: usize, level: usize, value: N) -> Self {
        let mut score = Self::zero(hard_levels, soft_levels);
        score.soft_scores[level] = value;
        score
    }

    /// Returns the hard score at the given level.
    ///
    /// # Panics
    /// Panics if the level is out of bounds.
    pub fn hard_score(&self, level: usize) -> N {
        self.hard_scores[level]
    }

    /// Returns the soft score at the given level.
    ///
    /// # Panics
    /// Panics if the level is out of bounds.
    pub fn soft_score(&self, level: usize) -> N {
        self.soft_scores[level]
    }

    /// Returns the level at a flat index over the hard levels followed by the soft levels.
    ///
    /// # Panics
    /// Panics if `index >= levels_count()`.
    pub fn hard_or_soft_score(&self, index: usize) -> N {
        let hard_levels = self.hard_scores.len();
        if index < hard_levels {
            self.hard_scores[index]
        } else {
            self.soft_scores[index - hard_levels]
        }
    }

    /// Returns all hard scores as a slice.
    pub fn hard_scores(&self) -> &[N] {
        &self.hard_scores
    }

    /// Returns all soft scores as a slice.
    pub fn soft_scores(&self) -> &[N] {
        &self.soft_scores
    }

    /// Returns true if both scores have the same hard and soft level counts.
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.hard_scores.len() == other.hard_scores.len()
            && self.soft_scores.len() == other.soft_scores.len()
    }

    fn ensure_compatible(&self, other: &Self) -> ScoreResult<()> {
        if self.is_compatible_with(other) {
            Ok(())
        } else {
            Err(ScoreError::incompatible(self.shape(), other.shape()))
        }
    }

    pub(crate) fn shape(&self) -> String {
        format!(
            "Bendable{}Score({} hard, {} soft)",
            match N::KIND {
                super::NumberKind::Integer => "",
                super::NumberKind::Double => "Double",
            },
            self.hard_scores.len(),
            self.soft_scores.len()
        )
    }

    fn zip_with(
        &self,
        other: &Self,
        init_op: impl Fn(i64, i64) -> i64,
        op: impl Fn(N, N) -> N,
    ) -> ScoreResult<Self> {
        self.ensure_compatible(other)?;
        Ok(BendableScore {
            init_score: init_op(self.init_score, other.init_score),
            hard_scores: levels::zip_levels(&self.hard_scores, &other.hard_scores, &op),
            soft_scores: levels::zip_levels(&self.soft_scores, &other.soft_scores, &op),
        })
    }

    fn map_with(&self, init_op: impl Fn(i64) -> i64, op: impl Fn(N) -> N) -> Self {
        BendableScore {
            init_score: init_op(self.init_score),
            hard_scores: levels::map_levels(&self.hard_scores, &op),
            soft_scores: levels::map_levels(&self.soft_scores, &op),
        }
    }

    fn has_unordered_level(&self) -> bool {
        self.hard_scores
            .iter()
            .chain(self.soft_scores.iter())
            .any(N::is_unordered)
    }

    fn compare_components(&self, other: &Self) -> Ordering {
        levels::compare_score(
            self.init_score,
            other.init_score,
            &[
                (self.hard_scores.as_slice(), other.hard_scores.as_slice()),
                (self.soft_scores.as_slice(), other.soft_scores.as_slice()),
            ],
        )
    }
}

impl<N: ScoreNumber> Score for BendableScore<N> {
    type Number = N;

    #[inline]
    fn init_score(&self) -> i64 {
        self.init_score
    }

    fn with_init_score(&self, init_score: i64) -> ScoreResult<Self> {
        Ok(BendableScore {
            init_score: check_init_score(init_score)?,
            ..self.clone()
        })
    }

    fn to_initialized_score(&self) -> Self {
        BendableScore {
            init_score: 0,
            ..self.clone()
        }
    }

    fn hard_levels_count(&self) -> usize {
        self.hard_scores.len()
    }

    fn soft_levels_count(&self) -> usize {
        self.soft_scores.len()
    }

    fn to_level_numbers(&self) -> Vec<N> {
        self.hard_scores
            .iter()
            .chain(self.soft_scores.iter())
            .copied()
            .collect()
    }

    fn level_label(&self, index: usize) -> ScoreLevel {
        let levels = self.levels_count();
        assert!(
            index < levels,
            "BendableScore has {} levels, got index {}",
            levels,
            index
        );
        if index < self.hard_scores.len() {
            ScoreLevel::Hard
        } else {
            ScoreLevel::Soft
        }
    }

    fn is_feasible(&self) -> bool {
        levels::is_feasible(self.init_score, &self.hard_scores)
    }

    fn try_add(&self, other: &Self) -> ScoreResult<Self> {
        self.zip_with(other, i64::wrapping_add, N::level_add)
    }

    fn try_subtract(&self, other: &Self) -> ScoreResult<Self> {
        self.zip_with(other, i64::wrapping_sub, N::level_sub)
    }

    fn negate(&self) -> Self {
        self.map_with(i64::wrapping_neg, N::level_neg)
    }

    fn multiply(&self, multiplicand: f64) -> Self {
        self.map_with(
            |i| i.multiply(multiplicand),
            |level| level.multiply(multiplicand),
        )
    }

    fn divide(&self, divisor: f64) -> Self {
        self.map_with(|i| i.divide(divisor), |level| level.divide(divisor))
    }

    fn power(&self, exponent: f64) -> Self {
        self.map_with(|i| i.power(exponent), |level| level.power(exponent))
    }

    fn abs(&self) -> Self {
        self.map_with(i64::wrapping_abs, N::level_abs)
    }

    fn try_compare(&self, other: &Self) -> ScoreResult<Ordering> {
        self.ensure_compatible(other)?;
        Ok(self.compare_components(other))
    }

    fn to_short_string(&self) -> String {
        grammar::format_bendable_short(self.init_score, &self.hard_scores, &self.soft_scores)
    }
}

impl<N: ScoreNumber> PartialOrd for BendableScore<N> {
    /// Returns `None` for incompatible arities or when a level is NaN.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.has_unordered_level() || other.has_unordered_level() {
            return None;
        }
        self.try_compare(other).ok()
    }
}

impl<N: ScoreNumber> Neg for BendableScore<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Hash for BendableScore<i64> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.init_score.hash(state);
        self.hard_scores.hash(state);
        self.soft_scores.hash(state);
    }
}

// 0.0 and -0.0 compare equal, so they must hash equal too.
impl Hash for BendableScore<f64> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.init_score.hash(state);
        self.hard_scores.len().hash(state);
        for level in self.hard_scores.iter() {
            (level + 0.0).to_bits().hash(state);
        }
        self.soft_scores.len().hash(state);
        for level in self.soft_scores.iter() {
            (level + 0.0).to_bits().hash(state);
        }
    }
}

impl<N: ScoreNumber> fmt::Debug for BendableScore<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BendableScore({})", self)
    }
}

impl<N: ScoreNumber> fmt::Display for BendableScore<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "[-7init/][0/0]hard/[-10/-20/-30]soft"
        f.write_str(&grammar::format_bendable(
            self.init_score,
            &self.hard_scores,
            &self.soft_scores,
        ))
    }
}

impl<N: ScoreNumber> ParseableScore for BendableScore<N> {
    /// Parses the full form, taking the level counts from the text.
    fn parse(s: &str) -> ScoreResult<Self> {
        let (init_score, hard_scores, soft_scores) =
            grammar::parse_bendable::<N>("BendableScore", s)?;
        Ok(BendableScore::from_parts(init_score, hard_scores, soft_scores))
    }
}

impl<N: ScoreNumber> std::str::FromStr for BendableScore<N> {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ParseableScore>::parse(s)
    }
}
