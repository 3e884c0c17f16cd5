//! planscore Core - Score values for metaheuristic planning solvers
//!
//! This crate provides the value type every candidate solution is reduced to:
//! - Score types (simple, hard/soft, hard/medium/soft, bendable) with exact
//!   arithmetic, ordering and feasibility rules
//! - Score definitions that fix a score's shape and build, parse and format scores
//! - The canonical text grammar in its full and short forms

pub mod definition;
pub mod error;
pub mod score;

#[cfg(test)]
mod test_utils;

pub use definition::{
    AnyScoreDefinition, BendableDoubleScoreDefinition, BendableScoreDefinition,
    HardMediumSoftScoreDefinition, HardSoftScoreDefinition, ScoreDefinition, ScoreType,
    SimpleDoubleScoreDefinition, SimpleScoreDefinition,
};
pub use error::{ScoreError, ScoreResult};
pub use score::{
    AnyScore, BendableDoubleScore, BendableScore, HardMediumSoftScore, HardSoftScore,
    NumberKind, ParseableScore, Score, ScoreLevel, ScoreNumber, SimpleDoubleScore, SimpleScore,
};
