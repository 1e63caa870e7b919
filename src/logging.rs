use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Start logging to stderr. `RUST_LOG` takes precedence over `level`.
///
/// Keep the returned handle alive for the lifetime of the program.
pub fn setup_logging(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(flexi_logger::colored_default_format)
        .start()
}
