//! Canonical score text grammar.
//!
//! Full form: an optional `{init}init/` prefix (omitted when the init score is
//! zero) followed by every level section. Fixed-arity scores label each level
//! (`-1hard/-100soft`), bendable scores bracket each section
//! (`[-1/0]hard/[-100]soft`), and both sections are always printed.
//!
//! Short form: the same prefix, but a level or section whose values are all zero
//! is left out entirely. A score with nothing left prints as `0`.

use std::fmt::Display;

use super::levels::{any_non_zero, LevelBuf};
use super::number::ScoreNumber;
use super::ScoreLevel;
use crate::error::{ScoreError, ScoreResult};

pub(crate) const INIT_LABEL: &str = "init";
pub(crate) const HARD_LABEL: &str = ScoreLevel::Hard.label();
pub(crate) const SOFT_LABEL: &str = ScoreLevel::Soft.label();

const SEPARATOR: &str = "/";

/// Rejects a positive init score.
pub(crate) fn check_init_score(init_score: i64) -> ScoreResult<i64> {
    if init_score > 0 {
        return Err(ScoreError::InvalidScoreConstruction(format!(
            "init score ({}) must be less than or equal to 0",
            init_score
        )));
    }
    Ok(init_score)
}

fn init_part(init_score: i64) -> Option<String> {
    (init_score != 0).then(|| format!("{}{}", init_score, INIT_LABEL))
}

/// Full form of a fixed-arity score: `[-7init/]-1hard/-100soft`.
pub(crate) fn format_labeled<N: Display>(init_score: i64, levels: &[(N, &str)]) -> String {
    let mut parts: Vec<String> = init_part(init_score).into_iter().collect();
    parts.extend(
        levels
            .iter()
            .map(|(value, label)| format!("{}{}", value, label)),
    );
    parts.join(SEPARATOR)
}

/// Short form of a fixed-arity score, zero levels omitted.
pub(crate) fn format_labeled_short<N: ScoreNumber>(init_score: i64, levels: &[(N, &str)]) -> String {
    let mut parts: Vec<String> = init_part(init_score).into_iter().collect();
    parts.extend(
        levels
            .iter()
            .filter(|(value, _)| !value.is_zero())
            .map(|(value, label)| format!("{}{}", value, label)),
    );
    if parts.is_empty() {
        return "0".to_string();
    }
    parts.join(SEPARATOR)
}

fn bracketed<N: Display>(levels: &[N], label: &str) -> String {
    let values: Vec<String> = levels.iter().map(|level| level.to_string()).collect();
    format!("[{}]{}", values.join(SEPARATOR), label)
}

/// Full form of a bendable score: `[-7init/][h0/h1]hard/[s0/s1]soft`.
pub(crate) fn format_bendable<N: Display>(init_score: i64, hard: &[N], soft: &[N]) -> String {
    let mut parts: Vec<String> = init_part(init_score).into_iter().collect();
    parts.push(bracketed(hard, HARD_LABEL));
    parts.push(bracketed(soft, SOFT_LABEL));
    parts.join(SEPARATOR)
}

/// Short form of a bendable score; an all-zero section is dropped whole.
pub(crate) fn format_bendable_short<N: ScoreNumber>(
    init_score: i64,
    hard: &[N],
    soft: &[N],
) -> String {
    let mut parts: Vec<String> = init_part(init_score).into_iter().collect();
    if any_non_zero(hard) {
        parts.push(bracketed(hard, HARD_LABEL));
    }
    if any_non_zero(soft) {
        parts.push(bracketed(soft, SOFT_LABEL));
    }
    if parts.is_empty() {
        return "0".to_string();
    }
    parts.join(SEPARATOR)
}

fn parse_init_token(score_type: &'static str, text: &str, token: &str) -> ScoreResult<i64> {
    let number = token.trim().strip_suffix(INIT_LABEL).ok_or_else(|| {
        ScoreError::format(
            score_type,
            text,
            format!("init part '{}' must end with '{}'", token, INIT_LABEL),
        )
    })?;
    let init_score = number.parse::<i64>().map_err(|e| {
        ScoreError::format(
            score_type,
            text,
            format!("invalid init score '{}': {}", number, e),
        )
    })?;
    if init_score > 0 {
        return Err(ScoreError::format(
            score_type,
            text,
            format!("init score ({}) must not be positive", init_score),
        ));
    }
    Ok(init_score)
}

fn parse_level_token<N: ScoreNumber>(
    score_type: &'static str,
    text: &str,
    token: &str,
    label: &str,
) -> ScoreResult<N> {
    let token = token.trim();
    N::parse_level(token).map_err(|e| {
        ScoreError::format(
            score_type,
            text,
            format!("invalid {} score '{}': {}", label, token, e),
        )
    })
}

/// Parses `[{init}init/]{v0}{suffix0}/{v1}{suffix1}/...`.
///
/// Returns the init score and one value per suffix, in suffix order.
pub(crate) fn parse_labeled<N: ScoreNumber>(
    score_type: &'static str,
    text: &str,
    suffixes: &[&str],
) -> ScoreResult<(i64, LevelBuf<N>)> {
    let trimmed = text.trim();
    let tokens: Vec<&str> = trimmed.split(SEPARATOR).collect();

    let (init_score, level_tokens) = if tokens.len() == suffixes.len() {
        (0, tokens.as_slice())
    } else if tokens.len() == suffixes.len() + 1 {
        (parse_init_token(score_type, text, tokens[0])?, &tokens[1..])
    } else {
        return Err(ScoreError::format(
            score_type,
            text,
            format!(
                "expected {} parts separated by '{}', optionally preceded by an init part",
                suffixes.len(),
                SEPARATOR
            ),
        ));
    };

    let mut levels = LevelBuf::with_capacity(suffixes.len());
    for (token, suffix) in level_tokens.iter().zip(suffixes) {
        let number = token.trim().strip_suffix(suffix).ok_or_else(|| {
            ScoreError::format(
                score_type,
                text,
                format!("part '{}' must end with '{}'", token, suffix),
            )
        })?;
        levels.push(parse_level_token(score_type, text, number, suffix)?);
    }
    Ok((init_score, levels))
}

fn parse_section<N: ScoreNumber>(
    score_type: &'static str,
    text: &str,
    section: &str,
    label: &str,
) -> ScoreResult<LevelBuf<N>> {
    let inner = section
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| {
            ScoreError::format(
                score_type,
                text,
                format!("{} part '{}' must be wrapped in brackets", label, section),
            )
        })?;
    if inner.trim().is_empty() {
        return Ok(LevelBuf::new());
    }
    inner
        .split(SEPARATOR)
        .map(|token| parse_level_token(score_type, text, token, label))
        .collect()
}

/// Parses `[{init}init/][h0/h1/...]hard/[s0/s1/...]soft`.
///
/// Level counts are taken from the text; the caller checks them against its arity.
pub(crate) fn parse_bendable<N: ScoreNumber>(
    score_type: &'static str,
    text: &str,
) -> ScoreResult<(i64, LevelBuf<N>, LevelBuf<N>)> {
    let trimmed = text.trim();

    let (init_score, sections) = if trimmed.starts_with('[') {
        (0, trimmed)
    } else {
        let (init_token, rest) = trimmed.split_once(SEPARATOR).ok_or_else(|| {
            ScoreError::format(
                score_type,
                text,
                "expected '[...]hard/[...]soft', optionally preceded by an init part",
            )
        })?;
        (parse_init_token(score_type, text, init_token)?, rest)
    };

    let hard_suffix = format!("{}{}", HARD_LABEL, SEPARATOR);
    let (hard_part, soft_part) = sections.split_once(hard_suffix.as_str()).ok_or_else(|| {
        ScoreError::format(score_type, text, "expected '[...]hard/[...]soft'")
    })?;
    let soft_part = soft_part.trim().strip_suffix(SOFT_LABEL).ok_or_else(|| {
        ScoreError::format(
            score_type,
            text,
            format!("soft part '{}' must end with '{}'", soft_part, SOFT_LABEL),
        )
    })?;

    let hard = parse_section(score_type, text, hard_part, HARD_LABEL)?;
    let soft = parse_section(score_type, text, soft_part, SOFT_LABEL)?;
    Ok((init_score, hard, soft))
}
