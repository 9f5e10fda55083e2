use anyhow::Result;
use localizer_factory::{config::Config, demo};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Initialize logging on stderr so stdout carries only localized text
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(config.env_filter())
        .init();

    info!("Starting localizer demo");

    let stdout = std::io::stdout();
    demo::run(&mut stdout.lock())?;

    info!("Localizer demo finished");
    Ok(())
}
