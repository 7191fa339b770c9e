//! Configuration loaded once at process start.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level hanpick configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HanpickConfig {
    /// HTTP server port.
    pub port: u16,
    /// Maximum number of keywords returned per request.
    pub top_n: usize,
    /// Directory holding the embedding model files (`model.onnx`,
    /// `tokenizer.json`).
    pub model_dir: PathBuf,
}

impl HanpickConfig {
    /// Create configuration from environment and defaults.
    ///
    /// - `PORT` — server port (default 5050)
    /// - `HANPICK_TOP_N` — result cap (default 5)
    /// - `HANPICK_MODEL_DIR` — embedding model directory (default `models`)
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5050);

        let top_n = std::env::var("HANPICK_TOP_N")
            .ok()
            .and_then(|n| n.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(5);

        let model_dir = std::env::var("HANPICK_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("models"));

        Self {
            port,
            top_n,
            model_dir,
        }
    }

    /// Build a configuration with defaults but an explicit model directory.
    pub fn with_model_dir(model_dir: impl AsRef<Path>) -> Self {
        Self {
            port: 5050,
            top_n: 5,
            model_dir: model_dir.as_ref().to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HanpickConfig::with_model_dir("models");
        assert_eq!(config.port, 5050);
        assert_eq!(config.top_n, 5);
        assert_eq!(config.model_dir, PathBuf::from("models"));
    }
}
