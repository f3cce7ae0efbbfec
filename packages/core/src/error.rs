//! Error types for the core layer.

use latewire_callable::BindError;
use thiserror::Error;

/// Resolution failures, owned by the naming collaborator.
///
/// Every [`crate::SearchRoot`] implementation reports failures in this
/// vocabulary so callers see the same errors regardless of which tree is
/// behind the seam.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The name does not reach any component under the search root.
    #[error("no component named '{name}' under '{root}'")]
    NotFound {
        /// The target name as requested.
        name: String,
        /// Diagnostic tag of the search root.
        root: String,
    },

    /// The name is not a well-formed tag path.
    #[error("malformed target name '{name}': {message}")]
    InvalidName { name: String, message: String },

    /// The name reaches a component that carries nothing to bind to.
    #[error("component '{name}' under '{root}' carries no bindable object")]
    Unbindable { name: String, root: String },
}

/// Errors at the core layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The naming collaborator could not produce a target.
    #[error("resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    /// The callable refused the resolved target.
    #[error("bind failed: {0}")]
    Bind(#[from] BindError),

    /// Resolution was requested but no target name was ever given.
    #[error("callable has no target name to resolve")]
    NoTargetName,
}
