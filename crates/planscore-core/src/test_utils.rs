//! Test utilities for planscore-core
//!
//! Assertion helpers shared by the score and definition test modules.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::score::Score;

/// Hashes a value with the standard hasher.
pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Asserts that `scores` are listed in strictly ascending order.
///
/// Every pair is checked in both directions, through `try_compare` and `partial_cmp`.
pub fn assert_compare_to_order<S: Score>(scores: &[S]) {
    for (i, a) in scores.iter().enumerate() {
        for (j, b) in scores.iter().enumerate() {
            let expected = i.cmp(&j);
            assert_eq!(
                a.try_compare(b).unwrap(),
                expected,
                "comparing {} with {}",
                a,
                b
            );
            assert_eq!(a.partial_cmp(b), Some(expected), "comparing {} with {}", a, b);
            assert_eq!(a == b, expected == Ordering::Equal, "equality of {} and {}", a, b);
        }
    }
}

/// Asserts that all scores are equal to each other and hash identically.
pub fn assert_scores_equal_and_hash<S: Score + Hash>(scores: &[S]) {
    for a in scores {
        for b in scores {
            assert_eq!(a, b);
            assert_eq!(hash_of(a), hash_of(b), "hash of {} and {}", a, b);
            assert_eq!(a.try_compare(b).unwrap(), Ordering::Equal);
        }
    }
}

/// Asserts that no two scores are equal.
pub fn assert_scores_not_equal<S: Score>(scores: &[S]) {
    for (i, a) in scores.iter().enumerate() {
        for (j, b) in scores.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
                assert_ne!(a.try_compare(b).unwrap(), Ordering::Equal);
            }
        }
    }
}

pub fn assert_feasible<S: Score>(scores: &[S]) {
    for score in scores {
        assert!(score.is_feasible(), "expected {} to be feasible", score);
    }
}

pub fn assert_not_feasible<S: Score>(scores: &[S]) {
    for score in scores {
        assert!(!score.is_feasible(), "expected {} to be infeasible", score);
    }
}

/// Serializes to JSON and back, asserting the result equals the input.
#[cfg(feature = "serde")]
pub fn serde_round_trip<S>(score: &S) -> S
where
    S: Score + serde::Serialize + serde::de::DeserializeOwned,
{
    let json = serde_json::to_string(score).unwrap();
    let output: S = serde_json::from_str(&json).unwrap();
    assert_eq!(&output, score, "round trip through {}", json);
    output
}
