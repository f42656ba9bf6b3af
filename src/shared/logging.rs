//! Tracing subscriber setup.

use clap::ValueEnum;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::config::ConfigError;
use super::env_var::EnvVars;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info,initiative_relay=debug,tower_http=info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event, for log collectors.
    Json,
}

impl LogFormat {
    /// Pick the flag value, else `RELAY_LOG_FORMAT`, else text.
    pub fn resolve(flag: Option<Self>, env: &EnvVars) -> Result<Self, ConfigError> {
        if let Some(format) = flag {
            return Ok(format);
        }
        match env.log_format.as_deref() {
            None => Ok(Self::default()),
            Some(value) => {
                Self::from_str(value, true).map_err(|_| ConfigError::InvalidLogFormat {
                    var: EnvVars::log_format_name(),
                    value: value.to_string(),
                })
            }
        }
    }
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn env_with(log_format: Option<&str>) -> EnvVars {
        EnvVars {
            log_format: log_format.map(str::to_string),
            ..EnvVars::default()
        }
    }

    #[rstest]
    #[case::flag_wins(Some(LogFormat::Json), Some("text"), LogFormat::Json)]
    #[case::env_used(None, Some("json"), LogFormat::Json)]
    #[case::env_case_insensitive(None, Some("JSON"), LogFormat::Json)]
    #[case::default_text(None, None, LogFormat::Text)]
    fn test_resolve(
        #[case] flag: Option<LogFormat>,
        #[case] env: Option<&str>,
        #[case] expected: LogFormat,
    ) {
        assert_eq!(LogFormat::resolve(flag, &env_with(env)).unwrap(), expected);
    }

    #[rstest]
    fn test_resolve_rejects_unknown_format() {
        let err = LogFormat::resolve(None, &env_with(Some("yaml"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Invalid RELAY_LOG_FORMAT value "yaml": expected "text" or "json""#
        );
    }
}
