//! Embedding engine trait and implementations.
//!
//! The `EmbedderBackend` trait abstracts over sentence embedding generation.
//! Implementations:
//! - `OnnxEmbedder`: ONNX Runtime with distiluse-base-multilingual-cased-v1
//!   (requires the `onnx` feature)
//! - `NoopEmbedder`: returns None to signal no embeddings available

use ndarray::Array1;

/// Trait for embedding backends.
pub trait EmbedderBackend: Send + Sync {
    /// Generate an embedding for a text string.
    /// Returns None if the embedder is not available or inference failed.
    fn embed(&self, text: &str) -> Option<Array1<f32>>;

    /// Get the embedding dimension.
    fn dimension(&self) -> usize;

    /// Check if the embedder is available (model loaded).
    fn is_available(&self) -> bool;
}

/// Placeholder embedder that always returns None.
pub struct NoopEmbedder {
    dim: usize,
}

impl NoopEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl EmbedderBackend for NoopEmbedder {
    fn embed(&self, _text: &str) -> Option<Array1<f32>> {
        None
    }

    fn dimension(&self) -> usize {
        self.dim
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_embedder() {
        let embedder = NoopEmbedder::new(512);
        assert!(embedder.embed("반전이 있는 영화").is_none());
        assert_eq!(embedder.dimension(), 512);
        assert!(!embedder.is_available());
    }
}
