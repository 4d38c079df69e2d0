//! The re-iterable [`Sequence`] handle and the seams adapters plug into.

mod enumerable;
mod into_sequence;
#[allow(clippy::module_inception)]
mod sequence;
mod shape;

pub use enumerable::*;
pub use into_sequence::*;
pub use sequence::*;
pub use shape::*;
