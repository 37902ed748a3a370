//! Error types for the pagedots demo application.
//!
//! The indicator core never fails: invalid page assignments are ignored and
//! empty pools turn operations into no-ops. Errors only exist in the impure
//! shell around it (configuration files, the log file, the terminal).
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`ConfigError`] - Config file could not be read or parsed
//!   - [`LoggingError`] - Log file or tracing subscriber setup failed
//!   - [`TuiError`] - Terminal setup, drawing or event polling failed

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All variants are fatal: they happen before or instead of the event loop,
/// so the only recovery is reporting them on stderr and exiting.
///
/// # Examples
///
/// ```no_run
/// use pagedots::config::ConfigError;
/// use pagedots::model::AppError;
///
/// fn run_app() -> Result<(), AppError> {
///     // ConfigError converts to AppError via From
///     load()?;
///     Ok(())
/// }
/// # fn load() -> Result<(), ConfigError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or rendering failure.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn app_error_from_config_error() {
        let config_err = ConfigError::ParseError {
            path: PathBuf::from("/tmp/config.toml"),
            reason: "expected `=`".to_string(),
        };
        let app_err: AppError = config_err.into();

        assert!(matches!(app_err, AppError::Config(_)));
        let msg = app_err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("/tmp/config.toml"));
    }

    #[test]
    fn app_error_from_logging_error() {
        let app_err: AppError = LoggingError::SubscriberAlreadySet.into();
        assert!(matches!(app_err, AppError::Logging(_)));
        assert!(app_err.to_string().contains("already initialized"));
    }

    #[test]
    fn app_error_from_tui_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let app_err: AppError = TuiError::from(io_err).into();

        assert!(matches!(app_err, AppError::Tui(_)));
        assert!(app_err.to_string().contains("pipe closed"));
    }
}
