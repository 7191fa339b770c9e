//! hanpick NLP — text normalization, the morphological tagger seam, and the
//! keyword heuristics (person-name and fused-compound suppression, priority
//! vocabularies).
//!
//! The `TaggerBackend` trait abstracts over morphological analysis. When the
//! `kiwi` feature is enabled and libkiwi is present, `KiwiTagger` provides
//! real tagging. Without it, `NoopTagger` is used and the pipeline degrades
//! to returning no keywords.

pub mod filters;
pub mod kiwi_tagger;
pub mod normalize;
pub mod tagger;
pub mod vocab;

pub use normalize::normalize;
pub use tagger::{create_tagger, Morpheme, NoopTagger, PosTag, TaggerBackend};

#[cfg(feature = "kiwi")]
pub use kiwi_tagger::KiwiTagger;
