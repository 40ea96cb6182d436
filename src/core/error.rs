//! Error handling for chrome resolution.
//!
//! The error model follows a strict split:
//!
//! - **Precondition failures** ([`ChromeError::MissingPlaceholderKey`]) abort
//!   the current request immediately. They always occur before any cache
//!   write, so they can never corrupt shared state.
//! - **Collaborator failures** ([`ChromeError::Service`]) wrap whatever the
//!   layout service, the allowed-renderings step, or the button source
//!   reported. Implementations surface their own failures as [`anyhow::Error`]
//!   and the core carries them upward unchanged.
//! - **Configuration failures** cover button-library and settings files.
//!
//! What is deliberately *not* an error: a settings lookup finding nothing
//! (that is a fallback branch), a cache validity rejection (that is a forced
//! miss), and a malformed in-progress layout document (treated as "no document
//! submitted" with a warning trace).

use thiserror::Error;

/// Result type alias for chrome resolution operations.
pub type ChromeResult<T> = Result<T, ChromeError>;

/// All errors the chrome resolution core can produce.
#[derive(Error, Debug)]
pub enum ChromeError {
    /// The request carried no usable placeholder key (absent or blank).
    ///
    /// This is an argument contract violation on the caller's side; it is
    /// reported immediately and never retried.
    #[error("placeholder key argument is missing or blank")]
    MissingPlaceholderKey,

    /// A configuration file exists but its content is not acceptable.
    #[error("invalid configuration at {path}: {reason}")]
    ConfigInvalid {
        /// Display form of the file that failed validation or parsing.
        path: String,
        /// Parser or validation detail.
        reason: String,
    },

    /// A configuration file could not be read at all.
    #[error("failed to read configuration {path}")]
    ConfigIo {
        /// Display form of the file that could not be read.
        path: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A collaborator call (layout service, allowed-renderings step, button
    /// source) failed.
    #[error("collaborator call failed: {0}")]
    Service(#[from] anyhow::Error),
}
