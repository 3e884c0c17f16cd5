//! Numeric kinds a score level can hold

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use num_traits::Signed;

/// The numeric representation backing a score's levels.
///
/// A score type never mixes the two kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NumberKind {
    /// Signed 64-bit integer levels.
    Integer,
    /// 64-bit floating point levels.
    Double,
}

/// A number that can be stored in a score level.
///
/// Integer levels round every scaled result toward negative infinity, so
/// `-1 * 1.2` becomes `-2` and `21 / 5.0` becomes `4`. An integral factor that
/// keeps the result in range is applied with integer arithmetic and is exact
/// for every `i64`. Any other factor goes through `f64`, which is exact for
/// magnitudes up to 2^53 and saturates at the `i64` bounds. Double levels apply
/// the floating point operation directly.
///
/// Level addition, subtraction, negation and absolute value wrap on integer
/// overflow, so `-i64::MIN` is `i64::MIN`.
///
/// NaN double levels are unordered: scores holding one return `None` from
/// `partial_cmp`. [`compare`](Self::compare) still places them by the total
/// order so sorting stays deterministic.
pub trait ScoreNumber:
    Signed + Copy + Debug + Display + Default + PartialOrd + Send + Sync + 'static
{
    /// The kind reported for this number type.
    const KIND: NumberKind;

    /// Multiplies by `multiplicand`.
    fn multiply(self, multiplicand: f64) -> Self;

    /// Divides by `divisor`.
    fn divide(self, divisor: f64) -> Self;

    /// Raises to `exponent`.
    fn power(self, exponent: f64) -> Self;

    /// Adds two levels, wrapping on integer overflow.
    fn level_add(self, other: Self) -> Self;

    /// Subtracts two levels, wrapping on integer overflow.
    fn level_sub(self, other: Self) -> Self;

    /// Negates a level, wrapping on integer overflow.
    fn level_neg(self) -> Self;

    /// Absolute value of a level, wrapping on integer overflow.
    fn level_abs(self) -> Self;

    /// Total comparison used for score ordering.
    fn compare(&self, other: &Self) -> Ordering;

    /// Returns true if this level has no place in the partial order (NaN).
    #[inline]
    fn is_unordered(&self) -> bool {
        false
    }

    /// Parses a single level token.
    fn parse_level(text: &str) -> Result<Self, String>;

    /// Returns true if this level does not indicate a broken constraint.
    #[inline]
    fn is_non_negative(&self) -> bool {
        *self >= Self::zero()
    }
}

#[inline]
fn floor_to_i64(value: f64) -> i64 {
    value.floor() as i64
}

/// Returns the factor as an `i64` if it is a whole number well inside range.
#[inline]
fn integral_factor(factor: f64) -> Option<i64> {
    const LIMIT: f64 = (1u64 << 62) as f64;
    (factor.is_finite() && factor.fract() == 0.0 && factor.abs() < LIMIT).then(|| factor as i64)
}

/// Integer division rounding toward negative infinity.
#[inline]
fn checked_floor_div(dividend: i64, divisor: i64) -> Option<i64> {
    let quotient = dividend.checked_div(divisor)?;
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

impl ScoreNumber for i64 {
    const KIND: NumberKind = NumberKind::Integer;

    fn multiply(self, multiplicand: f64) -> Self {
        integral_factor(multiplicand)
            .and_then(|factor| self.checked_mul(factor))
            .unwrap_or_else(|| floor_to_i64(self as f64 * multiplicand))
    }

    fn divide(self, divisor: f64) -> Self {
        integral_factor(divisor)
            .and_then(|factor| checked_floor_div(self, factor))
            .unwrap_or_else(|| floor_to_i64(self as f64 / divisor))
    }

    fn power(self, exponent: f64) -> Self {
        integral_factor(exponent)
            .and_then(|exp| u32::try_from(exp).ok())
            .and_then(|exp| self.checked_pow(exp))
            .unwrap_or_else(|| floor_to_i64((self as f64).powf(exponent)))
    }

    #[inline]
    fn level_add(self, other: Self) -> Self {
        self.wrapping_add(other)
    }

    #[inline]
    fn level_sub(self, other: Self) -> Self {
        self.wrapping_sub(other)
    }

    #[inline]
    fn level_neg(self) -> Self {
        self.wrapping_neg()
    }

    #[inline]
    fn level_abs(self) -> Self {
        self.wrapping_abs()
    }

    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn parse_level(text: &str) -> Result<Self, String> {
        text.parse::<i64>().map_err(|e| e.to_string())
    }
}

impl ScoreNumber for f64 {
    const KIND: NumberKind = NumberKind::Double;

    #[inline]
    fn multiply(self, multiplicand: f64) -> Self {
        self * multiplicand
    }

    #[inline]
    fn divide(self, divisor: f64) -> Self {
        self / divisor
    }

    #[inline]
    fn power(self, exponent: f64) -> Self {
        self.powf(exponent)
    }

    #[inline]
    fn level_add(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn level_sub(self, other: Self) -> Self {
        self - other
    }

    #[inline]
    fn level_neg(self) -> Self {
        -self
    }

    #[inline]
    fn level_abs(self) -> Self {
        self.abs()
    }

    // IEEE ordering; NaN falls back to the total order.
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or_else(|| self.total_cmp(other))
    }

    #[inline]
    fn is_unordered(&self) -> bool {
        self.is_nan()
    }

    fn parse_level(text: &str) -> Result<Self, String> {
        text.parse::<f64>().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_scaling_floors() {
        assert_eq!(1i64.multiply(1.2), 1);
        assert_eq!((-1i64).multiply(1.2), -2);
        assert_eq!((-4i64).multiply(1.2), -5);
        assert_eq!(21i64.divide(5.0), 4);
        assert_eq!((-21i64).divide(5.0), -5);
        assert_eq!((-4i64).power(2.0), 16);
        assert_eq!((-7i64).power(3.0), -343);
        assert_eq!(16i64.power(0.5), 4);
    }

    #[test]
    fn test_integer_scaling_is_exact_beyond_f64_precision() {
        let big = (1i64 << 53) + 1;
        assert_eq!(big.multiply(1.0), big);
        assert_eq!(big.multiply(2.0), (1i64 << 54) + 2);
        assert_eq!(big.divide(1.0), big);
        assert_eq!(big.power(1.0), big);
        assert_eq!((-big).multiply(-1.0), big);
        assert_eq!(3_037_000_499i64.power(2.0), 9_223_372_030_926_249_001);
    }

    #[test]
    fn test_integral_divisor_floors() {
        assert_eq!((-7i64).divide(2.0), -4);
        assert_eq!(7i64.divide(-2.0), -4);
        assert_eq!((-7i64).divide(-2.0), 3);
        assert_eq!((-8i64).divide(2.0), -4);
        assert_eq!(i64::MIN.divide(-1.0), i64::MAX);
    }

    #[test]
    fn test_integer_scaling_saturates_out_of_range() {
        assert_eq!(i64::MAX.multiply(2.0), i64::MAX);
        assert_eq!(i64::MIN.multiply(2.0), i64::MIN);
        assert_eq!(10i64.power(40.0), i64::MAX);
    }

    #[test]
    fn test_integer_level_ops_wrap() {
        assert_eq!(i64::MIN.level_neg(), i64::MIN);
        assert_eq!(i64::MIN.level_abs(), i64::MIN);
        assert_eq!(i64::MIN.level_add(-1), i64::MAX);
        assert_eq!(i64::MAX.level_sub(-1), i64::MIN);
        assert_eq!(3i64.level_add(-5), -2);
    }

    #[test]
    fn test_unordered_levels() {
        assert!(f64::NAN.is_unordered());
        assert!(!1.0f64.is_unordered());
        assert!(!i64::MIN.is_unordered());
    }

    #[test]
    fn test_double_scaling_is_exact() {
        assert_eq!((-1.0f64).multiply(1.5), -1.5);
        assert_eq!(21.0f64.divide(5.0), 4.2);
        assert_eq!(3.0f64.power(2.0), 9.0);
    }

    #[test]
    fn test_double_compare() {
        assert_eq!((-20.06f64).compare(&-20.007), Ordering::Less);
        assert_eq!(0.0f64.compare(&-0.0), Ordering::Equal);
        assert_eq!(f64::NAN.compare(&1.0), Ordering::Greater);
    }

    #[test]
    fn test_non_negative() {
        assert!(0i64.is_non_negative());
        assert!(!(-1i64).is_non_negative());
        assert!((-0.0f64).is_non_negative());
        assert!(!(-0.5f64).is_non_negative());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(i64::parse_level("-147"), Ok(-147));
        assert!(i64::parse_level("-1.5").is_err());
        assert_eq!(f64::parse_level("-1.5"), Ok(-1.5));
        assert!(f64::parse_level("abc").is_err());
    }
}
