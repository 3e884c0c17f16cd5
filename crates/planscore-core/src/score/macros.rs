//! Declarative macros for reducing score type boilerplate.
//!
//! These macros generate the repetitive trait implementations that all
//! field-based score types share: arithmetic ops, ordering, scaling and the
//! slash-separated text form. Every generated body treats `init_score` as the
//! most significant component.

/// Generates `PartialOrd`, `Add`, `Sub`, and `Neg` for a field-based score type.
///
/// Fields are listed from most to least significant. The operators wrap on
/// integer overflow, and `partial_cmp` returns `None` when a level is NaN.
///
/// # Usage
/// ```ignore
/// impl_score_ops!(HardSoftScore { hard, soft });
/// ```
macro_rules! impl_score_ops {
    ($type:ident { $($field:ident),+ }) => {
        impl $type {
            fn compare_components(&self, other: &Self) -> std::cmp::Ordering {
                use $crate::score::ScoreNumber;

                self.init_score
                    .cmp(&other.init_score)
                    $(.then_with(|| self.$field.compare(&other.$field)))+
            }
        }

        impl PartialOrd for $type {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                use $crate::score::ScoreNumber;

                if $(self.$field.is_unordered() || other.$field.is_unordered())||+ {
                    return None;
                }
                Some(self.compare_components(other))
            }
        }

        impl std::ops::Add for $type {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                use $crate::score::ScoreNumber;

                $type {
                    init_score: self.init_score.wrapping_add(other.init_score),
                    $($field: self.$field.level_add(other.$field)),+
                }
            }
        }

        impl std::ops::Sub for $type {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                use $crate::score::ScoreNumber;

                $type {
                    init_score: self.init_score.wrapping_sub(other.init_score),
                    $($field: self.$field.level_sub(other.$field)),+
                }
            }
        }

        impl std::ops::Neg for $type {
            type Output = Self;

            fn neg(self) -> Self {
                use $crate::score::ScoreNumber;

                $type {
                    init_score: self.init_score.wrapping_neg(),
                    $($field: self.$field.level_neg()),+
                }
            }
        }
    };
}

/// Generates the component-wise `Score` methods for a field-based score type.
///
/// Intended to be used *inside* an `impl Score for Type { ... }` block.
///
/// # Usage
/// ```ignore
/// impl Score for HardSoftScore {
///     // ...other methods...
///     impl_score_arith!(HardSoftScore { hard, soft });
/// }
/// ```
macro_rules! impl_score_arith {
    ($type:ident { $($field:ident),+ }) => {
        #[inline]
        fn init_score(&self) -> i64 {
            self.init_score
        }

        fn with_init_score(&self, init_score: i64) -> $crate::error::ScoreResult<Self> {
            Ok($type {
                init_score: $crate::score::grammar::check_init_score(init_score)?,
                ..*self
            })
        }

        fn to_initialized_score(&self) -> Self {
            $type {
                init_score: 0,
                ..*self
            }
        }

        fn try_add(&self, other: &Self) -> $crate::error::ScoreResult<Self> {
            Ok(*self + *other)
        }

        fn try_subtract(&self, other: &Self) -> $crate::error::ScoreResult<Self> {
            Ok(*self - *other)
        }

        fn negate(&self) -> Self {
            -*self
        }

        fn multiply(&self, multiplicand: f64) -> Self {
            use $crate::score::ScoreNumber;
            $type {
                init_score: self.init_score.multiply(multiplicand),
                $($field: self.$field.multiply(multiplicand)),+
            }
        }

        fn divide(&self, divisor: f64) -> Self {
            use $crate::score::ScoreNumber;
            $type {
                init_score: self.init_score.divide(divisor),
                $($field: self.$field.divide(divisor)),+
            }
        }

        fn power(&self, exponent: f64) -> Self {
            use $crate::score::ScoreNumber;
            $type {
                init_score: self.init_score.power(exponent),
                $($field: self.$field.power(exponent)),+
            }
        }

        fn abs(&self) -> Self {
            use $crate::score::ScoreNumber;
            $type {
                init_score: self.init_score.wrapping_abs(),
                $($field: self.$field.level_abs()),+
            }
        }

        fn try_compare(&self, other: &Self) -> $crate::error::ScoreResult<std::cmp::Ordering> {
            Ok(self.compare_components(other))
        }

        fn to_level_numbers(&self) -> Vec<Self::Number> {
            vec![$(self.$field),+]
        }
    };
}

/// Generates `Display`, `FromStr`, `ParseableScore` and a short-form helper for
/// scores using the `"[{init}init/]Xsuffix/Ysuffix"` format.
///
/// # Usage
/// ```ignore
/// impl_score_parse!(HardSoftScore<i64> { hard => "hard", soft => "soft" });
/// impl_score_parse!(SimpleScore<i64> { score => "" });
/// ```
macro_rules! impl_score_parse {
    ($type:ident < $num:ty > { $($field:ident => $suffix:literal),+ }) => {
        impl $type {
            fn short_string(&self) -> String {
                $crate::score::grammar::format_labeled_short::<$num>(
                    self.init_score,
                    &[$((self.$field, $suffix)),+],
                )
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::score::grammar::format_labeled::<$num>(
                    self.init_score,
                    &[$((self.$field, $suffix)),+],
                ))
            }
        }

        impl $crate::score::traits::ParseableScore for $type {
            fn parse(s: &str) -> $crate::error::ScoreResult<Self> {
                let (init_score, levels) = $crate::score::grammar::parse_labeled::<$num>(
                    stringify!($type),
                    s,
                    &[$($suffix),+],
                )?;
                let mut _idx = 0usize;
                $(
                    let $field = levels[_idx];
                    _idx += 1;
                )+
                Ok($type { init_score, $($field),+ })
            }
        }

        impl std::str::FromStr for $type {
            type Err = $crate::error::ScoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::score::traits::ParseableScore>::parse(s)
            }
        }
    };
}

// Macros are used via #[macro_use] on the module declaration.
