//! Review text normalization for embedding extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Everything that is not a word character, whitespace, `+`, or a Hangul
/// syllable (U+AC00–U+D7A3) gets replaced by a space.
static NON_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s+가-힣]").expect("valid normalizer pattern"));

/// Normalize raw review text before candidate extraction.
///
/// Lower-cases the input and blanks out punctuation, emoji, and other
/// symbols. Replacing with a space (rather than deleting) keeps adjacent
/// words from fusing into one token.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_TOKEN.replace_all(&lowered, " ").into_owned()
}
