//! Tracing subscriber setup.

use certsync_config::schema::LoggingConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Build the filter: an explicit `--log-level` wins, then `RUST_LOG`, then
/// the configured level. Other crates stay at `warn`.
pub fn build_filter(cli_level: Option<&str>, config: &LoggingConfig) -> EnvFilter {
    if cli_level.is_none() {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }

    let directive = cli_level
        .and_then(certsync_directive)
        .or_else(|| certsync_directive(config.level.as_str()));

    let filter = EnvFilter::new("warn");
    match directive {
        Some(directive) => filter.add_directive(directive),
        None => filter,
    }
}

fn certsync_directive(level: &str) -> Option<Directive> {
    format!("certsync={level}").parse().ok()
}

pub fn init(cli_level: Option<&str>, config: &LoggingConfig) {
    let filter = build_filter(cli_level, config);
    if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certsync_config::schema::LogLevel;

    #[test]
    fn cli_level_wins_over_config() {
        let config = LoggingConfig {
            level: LogLevel::Error,
            json: false,
        };
        let filter = build_filter(Some("debug"), &config).to_string();
        assert!(filter.contains("certsync=debug"));
    }

    #[test]
    fn invalid_cli_level_falls_back_to_config() {
        let config = LoggingConfig {
            level: LogLevel::Warn,
            json: false,
        };
        let filter = build_filter(Some("loud"), &config).to_string();
        assert!(filter.contains("certsync=warn"));
    }
}
