//! mjc-gen - Code generation for Mini-Java.
//!
//! Lowers the AST to a linear object program for the stack machine. The
//! emitted program always has the shape `INPP; ALME n; ...; PARA` where n
//! is the symbol table size. Expressions lower post-order to reverse-Polish
//! stack code; `if`/`while` lower to conditional and unconditional jumps.
//!
//! Jumps are emitted with symbolic labels and resolved by a single fixup
//! pass once every label is bound; no placeholder survives into the
//! returned program.
//!
//! # Examples
//!
//! ```
//! use mjc_lex::tokenize;
//! use mjc_par::parse;
//! use mjc_sem::analyze;
//! use mjc_util::Handler;
//!
//! let source = "public class P { public static void main(String[] args) {
//!     double a; a = 2 + 3 * 4; System.out.println(a);
//! } }";
//! let handler = Handler::new();
//! let program = parse(tokenize(source, &handler), &handler).unwrap();
//! let table = analyze(&program, &handler);
//! assert!(!handler.has_errors());
//!
//! let object = mjc_gen::generate(&program, &table).unwrap();
//! assert!(object.check_jumps().is_ok());
//! ```

mod error;
mod lower;

pub use error::{CodeGenError, Result};
pub use lower::{generate, CodeGen};
