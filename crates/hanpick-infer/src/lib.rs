//! hanpick infer — embedding engine and embedding-based candidate extraction.
//!
//! Provides the `EmbedderBackend` trait for generating sentence embeddings.
//! When the `onnx` feature is enabled and model files are present,
//! `OnnxEmbedder` loads distiluse-base-multilingual-cased-v1 for 512-dim
//! embeddings. Without it, `NoopEmbedder` is used and candidate extraction
//! returns nothing.

pub mod cache;
pub mod candidates;
pub mod embedder;
pub mod onnx_embedder;

pub use cache::EmbeddingCache;
pub use candidates::{Candidate, CandidateExtractor};
pub use embedder::{EmbedderBackend, NoopEmbedder};

#[cfg(feature = "onnx")]
pub use onnx_embedder::OnnxEmbedder;

use std::path::Path;
use std::sync::Arc;

/// Create the best available embedder for the given model directory.
///
/// Tries ONNX first (if feature enabled and model files present),
/// falls back to `NoopEmbedder`.
pub fn create_embedder(model_dir: &Path) -> Arc<dyn EmbedderBackend> {
    #[cfg(feature = "onnx")]
    {
        match OnnxEmbedder::load(model_dir) {
            Ok(embedder) => {
                tracing::info!("Using ONNX embedder (dim={})", embedder.dimension());
                return Arc::new(embedder);
            }
            Err(e) => {
                tracing::warn!(
                    "ONNX embedder unavailable: {}. Candidate extraction disabled.",
                    e
                );
            }
        }
    }

    #[cfg(not(feature = "onnx"))]
    {
        let _ = model_dir;
        tracing::info!("ONNX feature disabled. Candidate extraction disabled.");
    }

    Arc::new(NoopEmbedder::new(512))
}
