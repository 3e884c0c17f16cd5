//! AnyScore - closed set of every score variant
//!
//! Used where the score shape is only known at runtime, for example when the
//! score type comes from configuration. Operations between two different
//! variants, or two bendable scores of a different arity, fail with
//! [`ScoreError::IncompatibleScoreDefinition`].

use std::cmp::Ordering;
use std::fmt;

use super::{
    BendableDoubleScore, BendableScore, HardMediumSoftScore, HardSoftScore, Score,
    SimpleDoubleScore, SimpleScore,
};
use crate::definition::ScoreType;
use crate::error::{ScoreError, ScoreResult};

/// A score of any supported variant.
///
/// # Examples
///
/// ```
/// use planscore_core::{AnyScore, HardSoftScore, SimpleScore};
///
/// let a = AnyScore::from(HardSoftScore::of(-1, -10));
/// let b = AnyScore::from(HardSoftScore::of(0, -5));
/// assert_eq!(a.try_add(&b).unwrap(), AnyScore::from(HardSoftScore::of(-1, -15)));
///
/// let c = AnyScore::from(SimpleScore::of(3));
/// assert!(a.try_add(&c).is_err());
/// assert_eq!(a.partial_cmp(&c), None);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "score", rename_all = "snake_case")
)]
pub enum AnyScore {
    Simple(SimpleScore),
    SimpleDouble(SimpleDoubleScore),
    HardSoft(HardSoftScore),
    HardMediumSoft(HardMediumSoftScore),
    Bendable(BendableScore),
    BendableDouble(BendableDoubleScore),
}

macro_rules! each_variant {
    ($value:expr, $s:ident => $body:expr) => {
        match $value {
            AnyScore::Simple($s) => $body,
            AnyScore::SimpleDouble($s) => $body,
            AnyScore::HardSoft($s) => $body,
            AnyScore::HardMediumSoft($s) => $body,
            AnyScore::Bendable($s) => $body,
            AnyScore::BendableDouble($s) => $body,
        }
    };
}

macro_rules! zip_variant {
    ($left:expr, $right:expr, $a:ident, $b:ident => $body:expr) => {
        match ($left, $right) {
            (AnyScore::Simple($a), AnyScore::Simple($b)) => $body,
            (AnyScore::SimpleDouble($a), AnyScore::SimpleDouble($b)) => $body,
            (AnyScore::HardSoft($a), AnyScore::HardSoft($b)) => $body,
            (AnyScore::HardMediumSoft($a), AnyScore::HardMediumSoft($b)) => $body,
            (AnyScore::Bendable($a), AnyScore::Bendable($b)) => $body,
            (AnyScore::BendableDouble($a), AnyScore::BendableDouble($b)) => $body,
            (left, right) => Err(ScoreError::incompatible(left.shape(), right.shape())),
        }
    };
}

impl AnyScore {
    /// Returns the variant of this score.
    pub fn score_type(&self) -> ScoreType {
        match self {
            AnyScore::Simple(_) => ScoreType::Simple,
            AnyScore::SimpleDouble(_) => ScoreType::SimpleDouble,
            AnyScore::HardSoft(_) => ScoreType::HardSoft,
            AnyScore::HardMediumSoft(_) => ScoreType::HardMediumSoft,
            AnyScore::Bendable(_) => ScoreType::Bendable,
            AnyScore::BendableDouble(_) => ScoreType::BendableDouble,
        }
    }

    pub(crate) fn shape(&self) -> String {
        match self {
            AnyScore::Bendable(s) => s.shape(),
            AnyScore::BendableDouble(s) => s.shape(),
            other => other.score_type().type_name().to_string(),
        }
    }

    pub fn init_score(&self) -> i64 {
        each_variant!(self, s => s.init_score())
    }

    pub fn is_solution_initialized(&self) -> bool {
        each_variant!(self, s => s.is_solution_initialized())
    }

    pub fn is_feasible(&self) -> bool {
        each_variant!(self, s => s.is_feasible())
    }

    pub fn hard_levels_count(&self) -> usize {
        each_variant!(self, s => s.hard_levels_count())
    }

    pub fn soft_levels_count(&self) -> usize {
        each_variant!(self, s => s.soft_levels_count())
    }

    /// Returns the level values converted to `f64`, hard levels first.
    pub fn to_level_doubles(&self) -> Vec<f64> {
        match self {
            AnyScore::Simple(s) => s.to_level_numbers().into_iter().map(|n| n as f64).collect(),
            AnyScore::SimpleDouble(s) => s.to_level_numbers(),
            AnyScore::HardSoft(s) => s.to_level_numbers().into_iter().map(|n| n as f64).collect(),
            AnyScore::HardMediumSoft(s) => {
                s.to_level_numbers().into_iter().map(|n| n as f64).collect()
            }
            AnyScore::Bendable(s) => s.to_level_numbers().into_iter().map(|n| n as f64).collect(),
            AnyScore::BendableDouble(s) => s.to_level_numbers(),
        }
    }

    pub fn with_init_score(&self, init_score: i64) -> ScoreResult<AnyScore> {
        each_variant!(self, s => s.with_init_score(init_score).map(AnyScore::from))
    }

    pub fn to_initialized_score(&self) -> AnyScore {
        each_variant!(self, s => AnyScore::from(s.to_initialized_score()))
    }

    pub fn try_add(&self, other: &AnyScore) -> ScoreResult<AnyScore> {
        zip_variant!(self, other, a, b => a.try_add(b).map(AnyScore::from))
    }

    pub fn try_subtract(&self, other: &AnyScore) -> ScoreResult<AnyScore> {
        zip_variant!(self, other, a, b => a.try_subtract(b).map(AnyScore::from))
    }

    pub fn try_compare(&self, other: &AnyScore) -> ScoreResult<Ordering> {
        zip_variant!(self, other, a, b => a.try_compare(b))
    }

    pub fn negate(&self) -> AnyScore {
        each_variant!(self, s => AnyScore::from(s.negate()))
    }

    pub fn multiply(&self, multiplicand: f64) -> AnyScore {
        each_variant!(self, s => AnyScore::from(s.multiply(multiplicand)))
    }

    pub fn divide(&self, divisor: f64) -> AnyScore {
        each_variant!(self, s => AnyScore::from(s.divide(divisor)))
    }

    pub fn power(&self, exponent: f64) -> AnyScore {
        each_variant!(self, s => AnyScore::from(s.power(exponent)))
    }

    pub fn abs(&self) -> AnyScore {
        each_variant!(self, s => AnyScore::from(s.abs()))
    }

    pub fn to_short_string(&self) -> String {
        each_variant!(self, s => s.to_short_string())
    }
}

impl PartialOrd for AnyScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_compare(other).ok()
    }
}

impl fmt::Display for AnyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each_variant!(self, s => fmt::Display::fmt(s, f))
    }
}

impl fmt::Debug for AnyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each_variant!(self, s => fmt::Debug::fmt(s, f))
    }
}

impl From<SimpleScore> for AnyScore {
    fn from(score: SimpleScore) -> Self {
        AnyScore::Simple(score)
    }
}

impl From<SimpleDoubleScore> for AnyScore {
    fn from(score: SimpleDoubleScore) -> Self {
        AnyScore::SimpleDouble(score)
    }
}

impl From<HardSoftScore> for AnyScore {
    fn from(score: HardSoftScore) -> Self {
        AnyScore::HardSoft(score)
    }
}

impl From<HardMediumSoftScore> for AnyScore {
    fn from(score: HardMediumSoftScore) -> Self {
        AnyScore::HardMediumSoft(score)
    }
}

impl From<BendableScore> for AnyScore {
    fn from(score: BendableScore) -> Self {
        AnyScore::Bendable(score)
    }
}

impl From<BendableDoubleScore> for AnyScore {
    fn from(score: BendableDoubleScore) -> Self {
        AnyScore::BendableDouble(score)
    }
}
