//! Localizer capability and its two variants.
//!
//! A localizer labels a message with a fixed notice naming its target
//! language. No translation happens; the message text is emitted as given.

use crate::i18n::Language;
use std::fmt;
use std::io::{self, Write};

/// A component that labels messages for one target language.
///
/// Implementors only supply their language and notice line; the rendering
/// and output operations are shared.
pub trait Localizer: fmt::Debug + Send + Sync {
    /// The language this localizer targets.
    fn language(&self) -> Language;

    /// Fixed line identifying the target language.
    fn notice(&self) -> &'static str;

    /// Text that `localize` emits for `message`, without the trailing newline.
    fn render(&self, message: &str) -> String {
        format!("{}\n{}", self.notice(), message)
    }

    /// Write the localized message to `writer` in a single write.
    fn localize_to(&self, writer: &mut dyn Write, message: &str) -> io::Result<()> {
        let mut output = self.render(message);
        output.push('\n');
        writer.write_all(output.as_bytes())
    }

    /// Write the localized message to standard output.
    fn localize(&self, message: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.localize_to(&mut handle, message)?;
        handle.flush()
    }
}

/// A simple English localizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn language(&self) -> Language {
        Language::ENGLISH
    }

    fn notice(&self) -> &'static str {
        "The message is translated to english."
    }
}

/// A simple Chinese localizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChineseLocalizer;

impl Localizer for ChineseLocalizer {
    fn language(&self) -> Language {
        Language::CHINESE
    }

    fn notice(&self) -> &'static str {
        "The message is translated to chinese."
    }
}
