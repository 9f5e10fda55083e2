//! Localizer registry: Single source of truth for all supported languages.
//!
//! Maps each language name to the constructor of its localizer. The registry
//! is built once on first access through `OnceLock` and never mutated, so it
//! can be read from any thread without locking.

use crate::i18n::localizer::{ChineseLocalizer, EnglishLocalizer, Localizer};
use std::fmt;
use std::sync::OnceLock;

/// Constructor for a boxed localizer.
pub type LocalizerConstructor = fn() -> Box<dyn Localizer>;

/// Registry entry for a supported language.
#[derive(Clone)]
pub struct LocalizerConfig {
    /// Language name used as the lookup key (e.g., "English", "Chinese")
    pub name: &'static str,

    /// Builds a fresh localizer for this language
    pub constructor: LocalizerConstructor,
}

impl LocalizerConfig {
    /// Construct a new localizer instance for this entry.
    pub fn build(&self) -> Box<dyn Localizer> {
        (self.constructor)()
    }
}

impl fmt::Debug for LocalizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizerConfig")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Global localizer registry singleton.
pub struct LocalizerRegistry {
    localizers: Vec<LocalizerConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocalizerRegistry> = OnceLock::new();

impl LocalizerRegistry {
    /// Get the global localizer registry instance.
    pub fn get() -> &'static LocalizerRegistry {
        REGISTRY.get_or_init(|| LocalizerRegistry {
            localizers: default_localizers(),
        })
    }

    /// Get a registry entry by its exact language name.
    ///
    /// Matching is case-sensitive: "english" is not a registered name.
    pub fn get_by_name(&self, name: &str) -> Option<&LocalizerConfig> {
        self.localizers.iter().find(|entry| entry.name == name)
    }

    /// All registered language names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.localizers.iter().map(|entry| entry.name).collect()
    }
}

fn english() -> Box<dyn Localizer> {
    Box::new(EnglishLocalizer)
}

fn chinese() -> Box<dyn Localizer> {
    Box::new(ChineseLocalizer)
}

/// The fixed set of supported localizers: English and Chinese.
fn default_localizers() -> Vec<LocalizerConfig> {
    vec![
        LocalizerConfig {
            name: "English",
            constructor: english,
        },
        LocalizerConfig {
            name: "Chinese",
            constructor: chinese,
        },
    ]
}
