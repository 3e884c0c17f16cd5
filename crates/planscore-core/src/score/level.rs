/// Semantic class of one level within a [`Score`](super::Score).
///
/// Returned by [`Score::level_label`](super::Score::level_label). Bendable
/// scores only ever report `Hard` and `Soft`; `Medium` is the middle level of
/// `HardMediumSoftScore`, which counts as a soft level for feasibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreLevel {
    Hard,
    Medium,
    Soft,
}

impl ScoreLevel {
    /// Returns the suffix used for this level in the score text grammar.
    pub const fn label(&self) -> &'static str {
        match self {
            ScoreLevel::Hard => "hard",
            ScoreLevel::Medium => "medium",
            ScoreLevel::Soft => "soft",
        }
    }

    /// Returns true if a negative value at this level makes a solution infeasible.
    pub const fn affects_feasibility(&self) -> bool {
        matches!(self, ScoreLevel::Hard)
    }
}
