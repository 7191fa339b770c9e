//! Embedding-based candidate extraction.
//!
//! KeyBERT-style ranking: embed the whole (normalized) text, embed each
//! unique word, and score words by cosine similarity to the text embedding.
//! No stop-word filtering — downstream morphological filters decide what
//! survives.

use std::collections::HashSet;
use std::sync::Arc;

use ndarray::Array1;

use crate::embedder::EmbedderBackend;

/// A candidate keyword with its similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub text: String,
    pub score: f32,
}

/// Ranks candidate words from normalized text by embedding similarity.
pub struct CandidateExtractor {
    embedder: Arc<dyn EmbedderBackend>,
    /// Candidates scoring below this are dropped.
    min_score: f32,
}

impl CandidateExtractor {
    pub fn new(embedder: Arc<dyn EmbedderBackend>, min_score: f32) -> Self {
        Self {
            embedder,
            min_score,
        }
    }

    /// Return up to `k` candidates sorted descending by cosine similarity to
    /// the full-text embedding. Empty input, no tokens, or an unavailable
    /// embedder yield an empty list.
    pub fn extract(&self, text: &str, k: usize) -> Vec<Candidate> {
        if k == 0 || text.trim().is_empty() {
            return Vec::new();
        }

        let words = unique_words(text);
        if words.is_empty() {
            return Vec::new();
        }

        let document = match self.embedder.embed(text) {
            Some(embedding) => embedding,
            None => return Vec::new(),
        };

        let mut scored: Vec<Candidate> = words
            .into_iter()
            .filter_map(|word| {
                let embedding = self.embedder.embed(&word)?;
                let score = cosine_similarity(&document, &embedding)?;
                Some(Candidate { text: word, score })
            })
            .filter(|c| c.score >= self.min_score)
            .collect();

        // Stable sort keeps appearance order among equal scores, so results
        // stay deterministic.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        scored
    }
}

/// Unique whitespace-delimited words in first-appearance order.
fn unique_words(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .filter(|w| seen.insert(w.to_string()))
        .map(|w| w.to_string())
        .collect()
}

/// Cosine similarity of two vectors, None when either has zero norm or the
/// dimensions disagree.
fn cosine_similarity(a: &Array1<f32>, b: &Array1<f32>) -> Option<f32> {
    if a.len() != b.len() {
        return None;
    }
    let norm_a = a.dot(a).sqrt();
    let norm_b = b.dot(b).sqrt();
    if norm_a <= f32::EPSILON || norm_b <= f32::EPSILON {
        return None;
    }
    Some(a.dot(b) / (norm_a * norm_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedder::NoopEmbedder;
    use ndarray::array;

    /// Deterministic embedder: the document maps to a fixed axis and each
    /// known word to a vector at a chosen angle from it.
    struct FixedEmbedder;

    impl EmbedderBackend for FixedEmbedder {
        fn embed(&self, text: &str) -> Option<Array1<f32>> {
            Some(match text {
                "반전" => array![1.0_f32, 0.1, 0.0],
                "영화" => array![1.0_f32, 0.5, 0.0],
                "그냥" => array![0.0_f32, 1.0, 0.0],
                "없음" => array![0.0_f32, 0.0, 0.0],
                // Whole documents and unknown words land on the first axis.
                _ => array![1.0_f32, 0.0, 0.0],
            })
        }

        fn dimension(&self) -> usize {
            3
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    fn extractor(min_score: f32) -> CandidateExtractor {
        CandidateExtractor::new(Arc::new(FixedEmbedder), min_score)
    }

    #[test]
    fn test_ranked_descending() {
        let candidates = extractor(0.0).extract("그냥 영화 반전", 10);
        let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["반전", "영화", "그냥"]);
        assert!(candidates[0].score > candidates[1].score);
        assert!(candidates[1].score > candidates[2].score);
    }

    #[test]
    fn test_truncated_to_k() {
        let candidates = extractor(0.0).extract("그냥 영화 반전", 2);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].text, "반전");
    }

    #[test]
    fn test_score_floor_applied() {
        // "그냥" is orthogonal to the document axis (score 0.0).
        let candidates = extractor(0.15).extract("그냥 영화 반전", 10);
        assert!(candidates.iter().all(|c| c.text != "그냥"));
    }

    #[test]
    fn test_zero_norm_word_skipped() {
        let candidates = extractor(0.0).extract("없음 반전", 10);
        assert!(candidates.iter().all(|c| c.text != "없음"));
    }

    #[test]
    fn test_duplicates_collapsed() {
        let candidates = extractor(0.0).extract("반전 반전 반전", 10);
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(extractor(0.0).extract("", 5).is_empty());
        assert!(extractor(0.0).extract("   ", 5).is_empty());
    }

    #[test]
    fn test_noop_embedder_yields_nothing() {
        let extractor = CandidateExtractor::new(Arc::new(NoopEmbedder::new(512)), 0.0);
        assert!(extractor.extract("반전 영화", 5).is_empty());
    }

    #[test]
    fn test_cosine_similarity() {
        let a = array![1.0_f32, 0.0];
        let b = array![0.0_f32, 1.0];
        assert_eq!(cosine_similarity(&a, &a), Some(1.0));
        assert_eq!(cosine_similarity(&a, &b), Some(0.0));
        assert!(cosine_similarity(&a, &array![0.0_f32, 0.0]).is_none());
        assert!(cosine_similarity(&a, &array![1.0_f32, 0.0, 0.0]).is_none());
    }
}
