//! mjc-obj - The object program: instruction set and file format.
//!
//! This crate defines the stack machine's instruction set ([`Instr`]), the
//! in-memory object program ([`Program`]), and the line-oriented textual
//! object-file format the code generator writes and the VM loader reads.
//! Keeping the format in its own crate lets the generator and the VM agree
//! on it without depending on each other.
//!
//! In memory, jump operands are 0-based instruction indices. In the text
//! format, every line starts with a 1-based label equal to its line
//! number, and jump operands refer to those labels; the conversion happens
//! only in [`write_listing`] and [`parse_listing`].
//!
//! # Examples
//!
//! ```
//! use mjc_obj::{parse_listing, write_listing, Instr, Program};
//!
//! let program = Program::new(vec![
//!     Instr::Inpp,
//!     Instr::Alme(1),
//!     Instr::Crct(14.0),
//!     Instr::Armz(0),
//!     Instr::Para,
//! ]);
//!
//! let listing = write_listing(&program);
//! let reloaded = parse_listing(&listing).unwrap();
//! assert_eq!(program, reloaded);
//! ```

mod instr;
mod text;

pub use instr::{BadJump, Instr, Program};
pub use text::{format_real, parse_listing, write_listing, ObjError};
