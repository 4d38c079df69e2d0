//! The pull protocol every sequence is enumerated through.

mod enumerator;
mod iter;
mod iterator;
mod random_access;
mod slot;

pub use enumerator::*;
pub use iter::*;
pub use iterator::*;
pub use random_access::*;
pub(crate) use slot::*;
