//! Unified error types and result handling.
//!
//! Two kinds of failure reach the user: transport problems (network or
//! serialization, shown as a generic toast) and application errors (the
//! server said `{success: false}`, its message shown verbatim). Everything
//! else is local: form validation, configuration, and I/O.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or serialization failure while talking to the API server.
    /// Never retried; the user re-triggers the action manually.
    #[error("Transport error: {message}")]
    Transport {
        /// Underlying transport failure description
        message: String,
    },

    /// The server answered `{success: false, error: "..."}`.
    /// The message is surfaced to the user unchanged.
    #[error("{message}")]
    Application {
        /// Server-provided error string, echoed verbatim
        message: String,
    },

    /// A required form field was left empty. Rejected locally, before any
    /// network call is made.
    #[error("{message}")]
    Validation {
        /// Localized, user-facing validation message
        message: String,
    },

    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// A lookup by machine identifier came back empty.
    #[error("Machine not found: {id}")]
    MachineNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// I/O failure (reading an import file, writing an exported PDF).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Transport {
            message: value.to_string(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
