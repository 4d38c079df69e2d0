//! Views of text as sequences of characters, words, or lines.
//!
//! Each view borrows nothing but its owner: a `&str`, a `String`, or anything else
//! that is [`AsRef<str>`]. The views are re-iterable and carry no capability, so
//! positional queries walk the text.

mod chars;
mod lines;
mod words;

pub use chars::*;
pub use lines::*;
pub use words::*;
