use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TranslatorError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            TranslatorError::IoError(e) => format!("Could not write output: {}", e),
            TranslatorError::SerializationError(e) => {
                format!("Could not encode the translation: {}", e)
            }
            TranslatorError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TranslatorError::IoError(_) => "Check that standard output is still open",
            TranslatorError::SerializationError(_) => "Re-run with RUST_LOG=chai_translator=debug",
            TranslatorError::InvalidConfigValueError { .. } => {
                "Please enter a word to translate"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslatorError>;
