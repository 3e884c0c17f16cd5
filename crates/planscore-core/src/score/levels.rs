//! Level vector helpers shared by every score type.
//!
//! A score's levels are an ordered sequence, most significant first: the hard
//! levels followed by the soft levels. The init score is kept outside the level
//! vector but is always compared before it.

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::number::ScoreNumber;

/// Inline capacity before a level vector spills to the heap.
pub(crate) const INLINE_LEVELS: usize = 4;

/// Storage for one section (hard or soft) of a runtime-sized score.
pub(crate) type LevelBuf<N> = SmallVec<[N; INLINE_LEVELS]>;

/// Pairwise combination of two equally sized level slices.
pub(crate) fn zip_levels<N: ScoreNumber>(
    left: &[N],
    right: &[N],
    op: impl Fn(N, N) -> N,
) -> LevelBuf<N> {
    debug_assert_eq!(left.len(), right.len());
    left.iter().zip(right).map(|(&a, &b)| op(a, b)).collect()
}

pub(crate) fn map_levels<N: ScoreNumber>(levels: &[N], op: impl Fn(N) -> N) -> LevelBuf<N> {
    levels.iter().map(|&level| op(level)).collect()
}

/// Lexicographic comparison; the first differing level decides.
pub(crate) fn compare_levels<N: ScoreNumber>(left: &[N], right: &[N]) -> Ordering {
    for (a, b) in left.iter().zip(right) {
        match a.compare(b) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Compares the init scores first, then each level section in order.
pub(crate) fn compare_score<N: ScoreNumber>(
    left_init: i64,
    right_init: i64,
    sections: &[(&[N], &[N])],
) -> Ordering {
    match left_init.cmp(&right_init) {
        Ordering::Equal => {}
        other => return other,
    }
    for (left, right) in sections {
        match compare_levels(left, right) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

pub(crate) fn all_non_negative<N: ScoreNumber>(levels: &[N]) -> bool {
    levels.iter().all(ScoreNumber::is_non_negative)
}

pub(crate) fn any_non_zero<N: ScoreNumber>(levels: &[N]) -> bool {
    levels.iter().any(|level| !level.is_zero())
}

/// Feasible means fully initialized with no negative hard level.
#[inline]
pub(crate) fn is_feasible<N: ScoreNumber>(init_score: i64, hard_levels: &[N]) -> bool {
    init_score == 0 && all_non_negative(hard_levels)
}
