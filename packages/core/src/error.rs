//! Error types shared by the environment layers.

use thiserror::Error;

/// Errors that can occur while resolving or crossing environments.
#[derive(Debug, Error)]
pub enum Error {
    /// The registry could not produce an environment for a descriptor.
    #[error("cannot resolve environment '{descriptor}': {message}")]
    Resolution {
        /// Descriptor string that failed to resolve.
        descriptor: String,
        /// What went wrong.
        message: String,
    },

    /// An environment hook (enter, leave, or call wrapping) failed.
    #[error("{operation} failed in environment '{descriptor}': {message}")]
    Hook {
        /// Which hook failed.
        operation: &'static str,
        /// Descriptor of the environment whose hook failed.
        descriptor: String,
        /// What went wrong.
        message: String,
    },

    /// A call-wrapping hook reported success without running its
    /// continuation, so the wrapped call never produced a value.
    #[error("environment '{descriptor}' dropped a wrapped call without running it")]
    CalleeSkipped {
        /// Descriptor of the target environment of the wrapped call.
        descriptor: String,
    },

    /// Generic error with a message.
    #[error("{0}")]
    Other(String),
}

/// Result type alias for environment operations.
pub type Result<T> = std::result::Result<T, Error>;
