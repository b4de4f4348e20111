//! Error types for command interpretation.

use thiserror::Error;

/// Failures raised while interpreting a command string.
///
/// Only one command can fail: a branch close with no matching open. Every
/// other character either dispatches cleanly or is ignored.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterpreterError {
    /// A `]` was scanned while the branch stack was empty.
    ///
    /// `index` is the 0-based position of the offending character in the
    /// command string. The scan halts immediately; the surface keeps
    /// whatever was drawn before the failure.
    #[error("unmatched branch close `]` at command index {index}")]
    EmptyStack {
        /// Character position of the failing `]`.
        index: usize,
    },
}
