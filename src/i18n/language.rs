//! Language type: validated language key.
//!
//! A `Language` can only be built from a name present in the
//! `LocalizerRegistry`, or from the built-in constants.

use crate::i18n::{LocalizerConfig, LocalizerError, LocalizerRegistry};
use std::fmt;

/// A validated language name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Registry key (e.g., "English", "Chinese")
    name: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { name: "English" };

    pub const CHINESE: Language = Language { name: "Chinese" };

    /// Create a Language from its registry name.
    ///
    /// # Returns
    /// * `Ok(Language)` if the name is registered
    /// * `Err(LocalizerError::UnsupportedLanguage)` otherwise
    pub fn from_name(name: &str) -> Result<Language, LocalizerError> {
        let registry = LocalizerRegistry::get();

        match registry.get_by_name(name) {
            Some(config) => Ok(Language { name: config.name }),
            None => Err(LocalizerError::unsupported(name, &registry.names())),
        }
    }

    /// Get the registry name (e.g., "English").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the registry entry for this language.
    ///
    /// # Panics
    /// Panics if the name is not registered. This cannot happen for values
    /// built through `from_name` or the constants.
    pub fn config(&self) -> &'static LocalizerConfig {
        LocalizerRegistry::get()
            .get_by_name(self.name)
            .expect("Language name should always be registered")
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::ENGLISH
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
