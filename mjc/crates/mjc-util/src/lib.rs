//! mjc-util - Foundation types shared by every compiler phase.
//!
//! This crate provides the two pieces of infrastructure the rest of the
//! toolchain leans on: source location tracking ([`Span`]) and the
//! diagnostic stack ([`diagnostic::Handler`], [`diagnostic::DiagnosticBuilder`],
//! [`diagnostic::DiagnosticCode`]).
//!
//! Every compile-time error in the pipeline flows through a [`diagnostic::Handler`]:
//! the lexer, parser, and semantic analyzer all borrow one handler, emit
//! diagnostics into it, and the driver decides between stages whether to
//! continue. Runtime faults in the VM use their own error types and do not
//! pass through here.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
