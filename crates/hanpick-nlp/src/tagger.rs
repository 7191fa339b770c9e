//! Morphological tagger trait and implementations.
//!
//! The `TaggerBackend` trait abstracts over morphological analysis.
//! Implementations:
//! - `KiwiTagger`: libkiwi via dynamic loading (requires the `kiwi` feature)
//! - `NoopTagger`: returns empty decompositions (no tagging available)

use std::sync::Arc;

/// Part-of-speech category, reduced from the Kiwi tagset to what the
/// keyword pipeline distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosTag {
    /// Common noun (NNG).
    CommonNoun,
    /// Proper noun (NNP).
    ProperNoun,
    /// Bound noun, pronoun, numeral (NNB / NP / NR).
    OtherNoun,
    /// Verb family (VV / VX / VCP / VCN).
    Verb,
    /// Adjective (VA).
    Adjective,
    /// Particle (J*).
    Particle,
    /// Verbal / nominal ending (E*).
    Ending,
    /// Affix or root (X*).
    Affix,
    /// Anything else (symbols, foreign script, numbers, ...).
    Other(String),
}

impl PosTag {
    /// Map a raw Kiwi tag string (e.g. "NNG", "VV", "JKS") into a `PosTag`.
    pub fn from_kiwi(tag: &str) -> Self {
        match tag {
            "NNG" => PosTag::CommonNoun,
            "NNP" => PosTag::ProperNoun,
            "NNB" | "NP" | "NR" => PosTag::OtherNoun,
            "VV" | "VX" | "VCP" | "VCN" => PosTag::Verb,
            "VA" => PosTag::Adjective,
            t if t.starts_with('J') => PosTag::Particle,
            t if t.starts_with('E') => PosTag::Ending,
            t if t.starts_with('X') => PosTag::Affix,
            t => PosTag::Other(t.to_string()),
        }
    }

    /// Whether this tag counts as a content noun for keyword purposes.
    ///
    /// The original tagger collapsed all nouns into one tag; NNG + NNP is
    /// the closest equivalent for review text.
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::CommonNoun | PosTag::ProperNoun)
    }
}

/// One unit of a tag decomposition: surface form plus its category.
#[derive(Debug, Clone, PartialEq)]
pub struct Morpheme {
    pub form: String,
    pub tag: PosTag,
}

impl Morpheme {
    pub fn new(form: impl Into<String>, tag: PosTag) -> Self {
        Self {
            form: form.into(),
            tag,
        }
    }
}

/// Trait for morphological tagger backends.
pub trait TaggerBackend: Send + Sync {
    /// Decompose text into (form, tag) pairs, in appearance order.
    /// Returns an empty vec if the tagger is not available.
    fn tag(&self, text: &str) -> Vec<Morpheme>;

    /// Content-noun forms only, in appearance order. Duplicates permitted.
    fn nouns(&self, text: &str) -> Vec<String> {
        self.tag(text)
            .into_iter()
            .filter(|m| m.tag.is_noun())
            .map(|m| m.form)
            .collect()
    }

    /// Check if the tagger is available (model loaded).
    fn is_available(&self) -> bool;
}

/// Placeholder tagger that tags nothing.
pub struct NoopTagger;

impl TaggerBackend for NoopTagger {
    fn tag(&self, _text: &str) -> Vec<Morpheme> {
        Vec::new()
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Create the best available tagger.
///
/// Tries Kiwi first (if the feature is enabled and libkiwi can be loaded),
/// falls back to `NoopTagger`.
pub fn create_tagger() -> Arc<dyn TaggerBackend> {
    #[cfg(feature = "kiwi")]
    {
        match crate::kiwi_tagger::KiwiTagger::load_from_env() {
            Ok(tagger) => {
                tracing::info!("Using Kiwi tagger");
                return Arc::new(tagger);
            }
            Err(e) => {
                tracing::warn!("Kiwi tagger unavailable: {}. Tagging disabled.", e);
            }
        }
    }

    #[cfg(not(feature = "kiwi"))]
    {
        tracing::info!("Kiwi feature disabled. Tagging disabled.");
    }

    Arc::new(NoopTagger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kiwi_tag_mapping() {
        assert_eq!(PosTag::from_kiwi("NNG"), PosTag::CommonNoun);
        assert_eq!(PosTag::from_kiwi("NNP"), PosTag::ProperNoun);
        assert_eq!(PosTag::from_kiwi("NNB"), PosTag::OtherNoun);
        assert_eq!(PosTag::from_kiwi("VV"), PosTag::Verb);
        assert_eq!(PosTag::from_kiwi("VA"), PosTag::Adjective);
        assert_eq!(PosTag::from_kiwi("JKS"), PosTag::Particle);
        assert_eq!(PosTag::from_kiwi("EF"), PosTag::Ending);
        assert_eq!(PosTag::from_kiwi("XSN"), PosTag::Affix);
        assert_eq!(PosTag::from_kiwi("SF"), PosTag::Other("SF".to_string()));
    }

    #[test]
    fn test_is_noun() {
        assert!(PosTag::CommonNoun.is_noun());
        assert!(PosTag::ProperNoun.is_noun());
        assert!(!PosTag::OtherNoun.is_noun());
        assert!(!PosTag::Verb.is_noun());
        assert!(!PosTag::Particle.is_noun());
    }

    #[test]
    fn test_noop_tagger() {
        let tagger = NoopTagger;
        assert!(tagger.tag("영화가 재밌다").is_empty());
        assert!(tagger.nouns("영화가 재밌다").is_empty());
        assert!(!tagger.is_available());
    }

    struct FixedTagger;

    impl TaggerBackend for FixedTagger {
        fn tag(&self, _text: &str) -> Vec<Morpheme> {
            vec![
                Morpheme::new("영화", PosTag::CommonNoun),
                Morpheme::new("가", PosTag::Particle),
                Morpheme::new("재미", PosTag::CommonNoun),
            ]
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_default_nouns_filters_by_tag() {
        let tagger = FixedTagger;
        assert_eq!(tagger.nouns("무시됨"), vec!["영화", "재미"]);
    }
}
