//! Input helpers for cairn puzzle solvers.
//!
//! Everything here allocates from a caller-supplied [`Arena`]: the file
//! contents, the token lists produced by splitting, and the tokens
//! themselves. Results borrow the arena and live as long as it does.
//!
//! [`Arena`]: cairn_arena::Arena

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod file;
pub mod parse;
pub mod split;

pub use error::InputError;
pub use file::read_input;
pub use parse::parse_int;
pub use split::split_str;
