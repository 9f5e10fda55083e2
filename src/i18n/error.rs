//! Error type for localizer lookups.

use thiserror::Error;

/// Errors raised while resolving a localizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalizerError {
    /// The requested language has no entry in the registry.
    #[error("Unsupported language: '{language}' (supported: {supported})")]
    UnsupportedLanguage {
        /// The name that was looked up.
        language: String,
        /// Comma-separated list of registered language names.
        supported: String,
    },
}

impl LocalizerError {
    pub(crate) fn unsupported(language: &str, supported: &[&str]) -> Self {
        Self::UnsupportedLanguage {
            language: language.to_string(),
            supported: supported.join(", "),
        }
    }
}
