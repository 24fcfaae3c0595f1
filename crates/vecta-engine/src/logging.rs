//! Logger setup for hosts that bring no logger of their own.
//!
//! Every crate in the workspace logs through the `log` facade only; nothing
//! is printed unless a logger is installed, either by the host or by
//! [`init_logging`].

use std::sync::Once;

use env_logger::{Builder, Env, WriteStyle};

/// Settings for [`init_logging`].
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` directives such as `"vecta_skia=debug,warn"`. When unset,
    /// `RUST_LOG` is read, falling back to `info`.
    pub filter: Option<String>,
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: None, write_style: WriteStyle::Auto }
    }
}

static INSTALL: Once = Once::new();

/// Installs an `env_logger` backend, at most once per process.
///
/// A logger the host installed first is kept.
pub fn init_logging(config: LoggingConfig) {
    INSTALL.call_once(|| {
        let mut builder = match &config.filter {
            Some(filter) => {
                let mut builder = Builder::new();
                builder.parse_filters(filter);
                builder
            }
            None => Builder::from_env(Env::default().default_filter_or("info")),
        };
        builder.write_style(config.write_style).format_timestamp_millis();

        if builder.try_init().is_ok() {
            log::debug!("vecta logging installed");
        } else {
            log::debug!("host logger already installed; keeping it");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        init_logging(LoggingConfig { filter: Some("warn".into()), ..LoggingConfig::default() });
        init_logging(LoggingConfig::default());
        assert!(INSTALL.is_completed());
    }
}
