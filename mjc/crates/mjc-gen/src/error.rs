//! Error types for code generation.
//!
//! These are internal failures: after a clean semantic pass none of them
//! can occur, so any occurrence indicates a bug in the pipeline rather
//! than in the compiled program.

use thiserror::Error;

/// Error type for code generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeGenError {
    /// An identifier survived semantic analysis without a table entry
    #[error("variable '{0}' missing from the symbol table")]
    UnknownVariable(String),

    /// A jump was emitted against a label that was never bound
    #[error("jump label {0} was never bound to an instruction")]
    UnboundLabel(u32),

    /// A fixup patch points at an instruction that is not a jump
    #[error("instruction {0} was patched but is not a jump")]
    NotAJump(usize),
}

/// Result type alias for code generation operations.
pub type Result<T> = std::result::Result<T, CodeGenError>;
