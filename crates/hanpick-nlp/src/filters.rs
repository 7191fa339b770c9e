//! Candidate suppression heuristics.
//!
//! Embedding models happily surface actor names and tagger-merged compound
//! artifacts as high-similarity "keywords". These predicates are empirically
//! tuned policy, not ground truth: they are plain string functions so they
//! can be swapped or re-tuned without touching the pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

/// Capitalized Western given name ("Tom", "Anne").
static CAPITALIZED_LATIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+$").expect("valid pattern"));

/// Any all-Latin token.
static LATIN_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid pattern"));

/// Exactly two Hangul syllables — the usual length of a Korean given name
/// without surname. Known to also reject real two-syllable nouns.
static TWO_SYLLABLES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[가-힣]{2}$").expect("valid pattern"));

/// Three Hangul syllables opening with a common Korean surname.
static SURNAME_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[김이박최정강조윤장임한][가-힣]{2}$").expect("valid pattern"));

/// Two 3+-syllable Hangul runs fused without a separator.
static FUSED_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[가-힣]{3,}[가-힣]{3,}").expect("valid pattern"));

/// Heuristic: does this token look like a personal name?
///
/// Rejects on any of four patterns, in order: capitalized Western name,
/// all-Latin token, bare two-syllable Korean given name, and
/// surname-plus-given-name triples.
pub fn looks_like_person_name(token: &str) -> bool {
    CAPITALIZED_LATIN.is_match(token)
        || LATIN_ONLY.is_match(token)
        || TWO_SYLLABLES.is_match(token)
        || SURNAME_NAME.is_match(token)
}

/// Heuristic: does this token look like two noun phrases fused into one
/// "word" by a tagger error?
///
/// Fires only on long tokens (≥ 8 chars) containing back-to-back runs of
/// 3+ Hangul syllables each.
pub fn looks_like_fused_compound(token: &str) -> bool {
    token.chars().count() >= 8 && FUSED_RUNS.is_match(token)
}
