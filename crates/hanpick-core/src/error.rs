//! Error types for hanpick.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Tagger error: {0}")]
    Tagger(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::Inference("model not found".to_string());
        assert_eq!(err.to_string(), "Inference error: model not found");

        let err = Error::Tagger("KIWI_MODEL_PATH is not set".to_string());
        assert_eq!(err.to_string(), "Tagger error: KIWI_MODEL_PATH is not set");
    }
}
