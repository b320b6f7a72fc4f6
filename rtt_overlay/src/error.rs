//! Error types for the RTT overlay
//!
//! This module defines the error types used throughout the crate,
//! including device failures, resource creation and state misuse.

use std::fmt;

use crate::overlay::{OverlayResource, OverlayState};

/// Result type for overlay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Overlay and device errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (device rejected a call, injected failure, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource descriptor or argument
    InvalidResource(String),

    /// Initialization failed (renderer capabilities, subsystems)
    InitializationFailed(String),

    /// A GPU resource owned by the overlay could not be created.
    ///
    /// Fatal for `Overlay::load`: nothing is retried.
    ResourceCreationFailed {
        /// Which overlay resource failed
        resource: OverlayResource,
        /// Backend reason
        reason: String,
    },

    /// An entry point was called in a state that does not allow it
    InvalidState {
        /// Operation that was attempted
        operation: &'static str,
        /// State the overlay was in
        state: OverlayState,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::ResourceCreationFailed { resource, reason } => {
                write!(f, "Failed to create {}: {}", resource, reason)
            }
            Error::InvalidState { operation, state } => {
                write!(f, "Invalid state: cannot call {} while overlay is {:?}", operation, state)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Wrap a device error as the creation failure of `resource`
    pub fn creation_failed(resource: OverlayResource, source: Error) -> Self {
        match source {
            // Already attributed, keep the innermost resource
            Error::ResourceCreationFailed { .. } => source,
            other => Error::ResourceCreationFailed {
                resource,
                reason: other.to_string(),
            },
        }
    }
}

// ===== ERROR MACROS =====

/// Log an error with file:line and build an `Error::BackendError`
///
/// # Example
///
/// ```no_run
/// # use rtt_overlay::rtt_err;
/// let err = rtt_err!("rtt::recording", "texture {}x{} is too large", 99999, 1);
/// ```
#[macro_export]
macro_rules! rtt_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::rtt_error!($source, "{}", message);
        $crate::rtt::Error::BackendError(message)
    }};
}

/// Log an error with file:line and return `Err(Error::BackendError)` early
///
/// # Example
///
/// ```no_run
/// # use rtt_overlay::rtt_bail;
/// fn check(width: u32) -> rtt_overlay::rtt::Result<()> {
///     if width == 0 {
///         rtt_bail!("rtt::recording", "zero width");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! rtt_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::rtt_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
