//! Shared application state.

use hanpick_core::HanpickConfig;
use hanpick_pipeline::KeywordExtractor;

/// Shared application state accessible from all route handlers.
///
/// Both pretrained backends are loaded once at startup and live inside the
/// extractor behind read-only handles; there is no per-request mutable state.
pub struct AppState {
    pub config: HanpickConfig,
    pub extractor: KeywordExtractor,
}

impl AppState {
    pub fn new(config: HanpickConfig, extractor: KeywordExtractor) -> Self {
        Self { config, extractor }
    }
}
