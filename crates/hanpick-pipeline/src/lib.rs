//! Keyword selection pipeline.
//!
//! Ties the embedding candidate extractor and the morphological tagger
//! together: normalize → over-generate candidates → noun-only filter →
//! person-name and fused-compound suppression → vocabulary-priority merge →
//! dedupe and truncate.

use std::sync::Arc;

use tracing::debug;

use hanpick_infer::{CandidateExtractor, EmbedderBackend};
use hanpick_nlp::{filters, normalize, vocab, TaggerBackend};

/// Tuning knobs for keyword extraction.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Maximum number of keywords returned.
    pub top_n: usize,
    /// The candidate pool is `top_n * candidate_multiplier` before filtering.
    pub candidate_multiplier: usize,
    /// Candidates scoring below this similarity are dropped.
    pub min_score: f32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            candidate_multiplier: 3,
            min_score: 0.15,
        }
    }
}

impl ExtractorConfig {
    /// Default configuration with an explicit result cap.
    pub fn with_top_n(top_n: usize) -> Self {
        Self {
            top_n,
            ..Self::default()
        }
    }
}

/// Stateless-per-request keyword extractor over two once-loaded backends.
pub struct KeywordExtractor {
    candidates: CandidateExtractor,
    tagger: Arc<dyn TaggerBackend>,
    config: ExtractorConfig,
}

impl KeywordExtractor {
    pub fn new(
        embedder: Arc<dyn EmbedderBackend>,
        tagger: Arc<dyn TaggerBackend>,
        config: ExtractorConfig,
    ) -> Self {
        let candidates = CandidateExtractor::new(embedder, config.min_score);
        Self {
            candidates,
            tagger,
            config,
        }
    }

    /// Extract up to `top_n` keywords from a review.
    ///
    /// The result never exceeds `top_n` entries, never contains duplicates,
    /// and orders priority-vocabulary hits ahead of generic candidates.
    pub fn extract(&self, review: &str) -> Vec<String> {
        let review = review.trim();
        if review.is_empty() {
            return Vec::new();
        }

        let normalized = normalize(review);
        let pool_size = self.config.top_n * self.config.candidate_multiplier;
        let pool = self.candidates.extract(&normalized, pool_size);
        debug!(candidates = pool.len(), "embedding candidates");

        // Survivors keep their score-descending order.
        let survivors = pool
            .into_iter()
            .map(|c| c.text)
            .filter(|t| self.is_pure_noun(t))
            .filter(|t| !filters::looks_like_person_name(t))
            .filter(|t| !filters::looks_like_fused_compound(t));

        // Priority keywords come from the original (non-normalized) text so
        // the tagger sees the review as written.
        let priority = self
            .tagger
            .nouns(review)
            .into_iter()
            .filter(|n| n.chars().count() > 1)
            .filter(|n| vocab::is_priority_term(n));

        let mut keywords: Vec<String> = Vec::with_capacity(self.config.top_n);
        for keyword in priority.chain(survivors) {
            if keywords.len() >= self.config.top_n {
                break;
            }
            if !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        }
        keywords
    }

    /// Every morpheme of the candidate's decomposition must be a content
    /// noun. Verb/particle/adjective components disqualify the whole
    /// candidate even when it scored highly.
    fn is_pure_noun(&self, token: &str) -> bool {
        let morphemes = self.tagger.tag(token);
        !morphemes.is_empty() && morphemes.iter().all(|m| m.tag.is_noun())
    }
}
