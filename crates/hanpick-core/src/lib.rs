//! hanpick core — error types and configuration shared across the workspace.

pub mod config;
pub mod error;

pub use config::HanpickConfig;
pub use error::{Error, Result};
