//! Internationalization (i18n) module: localizers and the factory that
//! builds them.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth mapping language names to constructors
//! - `language`: Validated language key
//! - `localizer`: The `Localizer` capability and its English/Chinese variants
//! - `factory`: Lookup-and-construct entry points
//! - `error`: `LocalizerError`
//!
//! # Example
//!
//! ```rust
//! use localizer_factory::i18n::{get_localizer, Localizer};
//!
//! let localizer = get_localizer("Chinese")?;
//! assert!(localizer.render("hi").contains("chinese"));
//! # Ok::<(), localizer_factory::i18n::LocalizerError>(())
//! ```

mod error;
mod factory;
mod language;
mod localizer;
mod registry;

pub use error::LocalizerError;
pub use factory::{get_default_localizer, get_localizer, localizer_for, supported_languages};
pub use language::Language;
pub use localizer::{ChineseLocalizer, EnglishLocalizer, Localizer};
pub use registry::{LocalizerConfig, LocalizerConstructor, LocalizerRegistry};
