//! Question matching: substring short-circuit, then token-overlap scoring.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::QaPair;
pub use parley_core::config::{
    MATCH_THRESHOLD, MatchOptions, PREFIX_BOOST, SUBSTRING_SHORT_CIRCUIT,
};

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Alphabetic}\p{N}]+").expect("regex"));

/// How a match was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// One normalized string contained the other.
    Substring,
    /// Token-overlap score above the threshold.
    Overlap,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOutcome<'a> {
    pub pair: &'a QaPair,
    /// `1.0` for substring hits.
    pub score: f64,
    pub kind: MatchKind,
}

/// Answer for the best-matching question, if any clears the threshold.
pub fn find_answer<'a>(
    pairs: &'a [QaPair],
    input: &str,
    options: &MatchOptions,
) -> Option<&'a str> {
    best_match(pairs, input, options).map(|outcome| outcome.pair.answer.as_str())
}

/// Best-matching pair for `input`.
///
/// The first pair whose question contains, or is contained in, the input
/// wins outright. Otherwise each question is scored by the share of its
/// tokens present in the input; ties keep the earlier pair.
pub fn best_match<'a>(
    pairs: &'a [QaPair],
    input: &str,
    options: &MatchOptions,
) -> Option<MatchOutcome<'a>> {
    let input = normalize(input);
    if input.is_empty() {
        return None;
    }

    if options.substring_short_circuit {
        let hit = pairs.iter().find(|pair| {
            let question = normalize(&pair.question);
            !question.is_empty() && (input.contains(&question) || question.contains(&input))
        });
        if let Some(pair) = hit {
            debug!("Substring match on question: {}", pair.question);
            return Some(MatchOutcome {
                pair,
                score: 1.0,
                kind: MatchKind::Substring,
            });
        }
    }

    let input_tokens = tokenize(&input);
    let mut best: Option<MatchOutcome<'a>> = None;
    for pair in pairs {
        let question = normalize(&pair.question);
        let mut score = overlap_score(&tokenize(&question), &input_tokens);
        if let Some(boost) = options.prefix_boost {
            if question.starts_with(&input) {
                score += boost;
            }
        }

        if best.is_none_or(|current| score > current.score) {
            best = Some(MatchOutcome {
                pair,
                score,
                kind: MatchKind::Overlap,
            });
        }
    }

    match best {
        Some(outcome) if accepts(outcome.score, options) => {
            debug!(
                "Overlap match {:.3} on question: {}",
                outcome.score, outcome.pair.question
            );
            Some(outcome)
        }
        Some(outcome) => {
            debug!(
                "Best overlap {:.3} below threshold {:.3}",
                outcome.score, options.threshold
            );
            None
        }
        None => None,
    }
}

/// Whether a score clears the threshold. The comparison is strict.
pub fn accepts(score: f64, options: &MatchOptions) -> bool {
    score > options.threshold
}

/// `|question ∩ input| / max(|question|, 1)`.
pub fn overlap_score(question: &HashSet<String>, input: &HashSet<String>) -> f64 {
    let common = question.intersection(input).count();
    common as f64 / question.len().max(1) as f64
}

/// Lowercase and trim.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Alphanumeric runs of the lowercased text; punctuation is discarded.
pub fn tokenize(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|token| token.as_str().to_string())
        .collect()
}
