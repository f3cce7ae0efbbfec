//! Error types for the callable layer.
//!
//! Errors at this level are contract errors on the callable itself. Name
//! resolution failures belong to higher layers.

use thiserror::Error;

/// Errors raised when attaching a target to a callable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    /// `late_bind` was called on a callable that already has its target.
    ///
    /// Binding is single-shot; a second attachment is refused rather than
    /// silently re-targeting the callable.
    #[error("callable is already bound to a target")]
    AlreadyBound,

    /// `late_bind` was called on a callable that never takes a target.
    ///
    /// Empty callables and receiverless functions have no target slot.
    #[error("callable has no target slot")]
    NoTargetSlot,

    /// The supplied target is not of the type the function expects.
    ///
    /// The callable stays unbound; binding with a correctly typed target
    /// afterwards is allowed.
    #[error("target object has the wrong type: expected {expected}")]
    WrongTargetType {
        /// Type name of the receiver the stored function expects.
        expected: &'static str,
    },
}
