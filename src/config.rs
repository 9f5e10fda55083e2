use anyhow::{Context, Result};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Default tracing directive when `LOCALIZER_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "localizer_factory=warn";

#[derive(Debug, Clone)]
pub struct Config {
    // Logging
    pub log_directive: Directive,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var("LOCALIZER_LOG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());

        let log_directive = raw
            .parse::<Directive>()
            .with_context(|| format!("LOCALIZER_LOG is not a valid directive: {}", raw))?;

        Ok(Self { log_directive })
    }

    /// Filter for the tracing subscriber.
    ///
    /// `RUST_LOG` wins when set; otherwise only `log_directive` applies.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(self.log_directive.clone()))
    }
}
