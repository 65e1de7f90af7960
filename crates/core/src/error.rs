//! Error types for razer-battery-core.

use thiserror::Error;

/// Core library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HID device communication failure (write, read, or closed handle).
    #[error("HID error: {0}")]
    Hid(String),

    /// The interface path could not be opened.
    #[error("open failed on {path}: {reason}")]
    Open { path: String, reason: String },

    /// Request carries more argument bytes than the report can hold.
    #[error("argument list too long: {len} bytes (max {max})")]
    TooManyArguments { len: usize, max: usize },

    /// Request argument is not representable on the wire.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HID subsystem could not enumerate devices.
    #[error("enumeration failed: {0}")]
    Enumeration(String),

    /// Settings could not be parsed or applied.
    #[error("settings error: {0}")]
    Settings(String),

    /// Filesystem failure while persisting settings.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error means the interface never opened.
    ///
    /// Backends that cannot produce [`Error::Open`] directly still get
    /// classified when their message carries the "open failed" marker.
    pub fn is_open_failure(&self) -> bool {
        match self {
            Error::Open { .. } => true,
            Error::Hid(msg) => msg.to_lowercase().contains("open failed"),
            _ => false,
        }
    }

    /// Whether this error comes from malformed request parameters.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Error::TooManyArguments { .. } | Error::InvalidArgument(_)
        )
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, Error>;
