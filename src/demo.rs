//! Driver that exercises the factory for every supported language.

use crate::i18n::get_localizer;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

/// Language names and the prompt each localizer is asked to localize.
pub const PROMPTS: [(&str, &str); 2] = [
    ("English", "Please localize to English."),
    ("Chinese", "Please localize to Chinese."),
];

/// Build both localizers, then localize each prompt into `writer`.
pub fn run(writer: &mut dyn Write) -> Result<()> {
    let localizers = PROMPTS
        .iter()
        .map(|(language, _)| get_localizer(language))
        .collect::<Result<Vec<_>, _>>()?;

    for (localizer, (_, prompt)) in localizers.iter().zip(PROMPTS.iter()) {
        info!(language = %localizer.language(), "Localizing prompt");
        localizer
            .localize_to(writer, prompt)
            .with_context(|| format!("Failed to write {} localization", localizer.language()))?;
    }

    writer.flush().context("Failed to flush output")?;
    Ok(())
}
