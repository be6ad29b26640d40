//! Diagnostic logging setup.
//!
//! Logs always go to stderr so stdout carries nothing but the JSON report.

use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

/// How much to log, from repeated `-v` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<u8> for Verbosity {
    fn from(v: u8) -> Self {
        match v {
            0 => Verbosity::Warn,
            1 => Verbosity::Info,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

impl From<Verbosity> for LevelFilter {
    fn from(v: Verbosity) -> Self {
        match v {
            Verbosity::Warn => LevelFilter::WARN,
            Verbosity::Info => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
            Verbosity::Trace => LevelFilter::TRACE,
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoggingMode {
    Full,
    Json,
    #[default]
    Compact,
}

/// Install the global subscriber.
///
/// `RUST_LOG` directives, when set, refine the level picked by `verbosity`.
pub fn init(
    verbosity: Verbosity,
    mode: LoggingMode,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level: LevelFilter = verbosity.into();
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let builder = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter);

    match mode {
        LoggingMode::Compact => builder.with_target(false).compact().try_init(),
        LoggingMode::Full => builder
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init(),
        LoggingMode::Json => builder.json().flatten_event(true).try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flag_count() {
        assert_eq!(Verbosity::from(0), Verbosity::Warn);
        assert_eq!(Verbosity::from(1), Verbosity::Info);
        assert_eq!(Verbosity::from(2), Verbosity::Debug);
        assert_eq!(Verbosity::from(3), Verbosity::Trace);
        assert_eq!(Verbosity::from(200), Verbosity::Trace);
    }

    #[test]
    fn verbosity_maps_to_level_filter() {
        assert_eq!(LevelFilter::from(Verbosity::Warn), LevelFilter::WARN);
        assert_eq!(LevelFilter::from(Verbosity::Trace), LevelFilter::TRACE);
    }

    #[test]
    fn compact_is_default_mode() {
        assert_eq!(LoggingMode::default(), LoggingMode::Compact);
    }
}
