//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

use crate::types::ScreenId;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Geometry Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid device frame geometry: {reason}")]
    InvalidFrameGeometry { reason: String },

    // ─────────────────────────────────────────────────────────────
    // Screen Registry Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No screen component registered for '{screen}'")]
    MissingScreen { screen: ScreenId },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Replay Script Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("Unknown ticket id: {id}")]
    UnknownItem { id: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidFrameGeometry {
            reason: reason.into(),
        }
    }

    pub fn missing_screen(screen: ScreenId) -> Self {
        Self::MissingScreen { screen }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn script(line: usize, message: impl Into<String>) -> Self {
        Self::Script {
            line,
            message: message.into(),
        }
    }

    pub fn unknown_item(id: impl Into<String>) -> Self {
        Self::UnknownItem { id: id.into() }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::MissingScreen { .. } | Error::Script { .. } | Error::UnknownItem { .. }
        )
    }

    /// Check if this error should abort the host
    ///
    /// Geometry errors come from compile-time constants or configuration, so
    /// they are never tolerated at runtime.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidFrameGeometry { .. } | Error::ConfigNotFound { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::invalid_geometry("inset exceeds frame width");
        assert_eq!(
            err.to_string(),
            "Invalid device frame geometry: inset exceeds frame width"
        );

        let err = Error::missing_screen(ScreenId::Planning);
        assert_eq!(
            err.to_string(),
            "No screen component registered for 'planning'"
        );

        let err = Error::script(3, "unknown command 'jump'");
        assert_eq!(
            err.to_string(),
            "Script error on line 3: unknown command 'jump'"
        );
    }

    #[test]
    fn test_geometry_errors_are_fatal() {
        let err = Error::invalid_geometry("negative width");
        assert!(err.is_fatal());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_missing_screen_is_recoverable() {
        let err = Error::missing_screen(ScreenId::Settings);
        assert!(err.is_recoverable());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_config_errors() {
        let err = Error::ConfigNotFound {
            path: PathBuf::from("site/.folio/config.toml"),
        };
        assert_eq!(
            err.to_string(),
            "Configuration file not found: site/.folio/config.toml"
        );
        assert!(err.is_fatal());

        let toml_err = toml::from_str::<toml::Value>("a = ").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::TomlParse(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_result_ext_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("reading script").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
