//! Score types for representing solution quality
//!
//! Scores are used to compare solutions and guide the optimization process.
//! All score types are immutable and implement arithmetic operations.

#[macro_use]
mod macros;

mod any;
mod bendable;
pub(crate) mod grammar;
mod hard_medium_soft;
mod hard_soft;
mod level;
pub(crate) mod levels;
mod number;
mod simple;
mod simple_double;
mod traits;


pub use any::AnyScore;
pub use bendable::{BendableDoubleScore, BendableScore};
pub use hard_medium_soft::HardMediumSoftScore;
pub use hard_soft::HardSoftScore;
pub use level::ScoreLevel;
pub use number::{NumberKind, ScoreNumber};
pub use simple::SimpleScore;
pub use simple_double::SimpleDoubleScore;
pub use traits::{ParseableScore, Score};

/// Deserializes an init score, rejecting positive values.
#[cfg(feature = "serde")]
pub(crate) fn deserialize_init_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let init_score = <i64 as serde::Deserialize>::deserialize(deserializer)?;
    grammar::check_init_score(init_score).map_err(serde::de::Error::custom)
}
