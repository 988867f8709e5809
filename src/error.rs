//! Unified error types for the shell.
//!
//! Command handlers return `ShellResult<T>`, an alias for `anyhow::Result<T>`,
//! so they can `bail!` with either a plain message or one of the
//! [`ShellError`] kinds below. The dispatcher is the only place that turns an
//! error into output; nothing escapes a single dispatch call.
//!
//! ## Usage Examples
//!
//! ```ignore
//! anyhow::bail!(ShellError::Busy);
//! anyhow::bail!(ShellError::InvalidArgument("Invalid burst command!"));
//! ```

use alloc::string::String;

/// Result type alias using anyhow::Error.
pub type ShellResult<T> = anyhow::Result<T>;

/// Error kinds reported by the shell.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("No {0}!")]
    MissingCollaborator(&'static str),
    #[error("BUSY")]
    Busy,
    #[error("{0}")]
    InvalidArgument(&'static str),
    #[error("Invalid command name: '{0}'")]
    InvalidName(String),
    #[error("Command already registered: {0}")]
    DuplicateName(String),
}

impl ShellError {
    /// Recover the shell error kind carried by an `anyhow::Error`, if any.
    pub fn kind_of(err: &anyhow::Error) -> Option<&ShellError> {
        err.downcast_ref::<ShellError>()
    }
}
