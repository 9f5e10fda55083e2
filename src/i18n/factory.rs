//! Factory functions that construct localizers by language name.

use crate::i18n::{Language, Localizer, LocalizerError, LocalizerRegistry};
use tracing::{debug, warn};

/// Construct a fresh localizer for `language`.
///
/// The name must match a registry key exactly ("English" or "Chinese").
/// Unknown names fail with `LocalizerError::UnsupportedLanguage`; there is no
/// fallback to a default language.
pub fn get_localizer(language: &str) -> Result<Box<dyn Localizer>, LocalizerError> {
    match Language::from_name(language) {
        Ok(validated) => {
            debug!(language = validated.name(), "Constructing localizer");
            Ok(localizer_for(validated))
        }
        Err(err) => {
            warn!(language, "Requested localizer for unsupported language");
            Err(err)
        }
    }
}

/// Construct a fresh localizer for the default language (English).
pub fn get_default_localizer() -> Box<dyn Localizer> {
    localizer_for(Language::default())
}

/// Construct a fresh localizer for an already validated language.
pub fn localizer_for(language: Language) -> Box<dyn Localizer> {
    language.config().build()
}

/// Names accepted by `get_localizer`, in registration order.
pub fn supported_languages() -> Vec<&'static str> {
    LocalizerRegistry::get().names()
}
