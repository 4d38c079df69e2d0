//! Source adapters: one per source shape, each exposing its source as a [`Sequence`].
//!
//! Adapters over arrays and random-access lists are *indexed*; everything else is
//! *sequential*. The choice is made once, when the source is adapted.
//!
//! [`Sequence`]: crate::Sequence

mod array;
mod collection;
mod dispatch;
mod enumerator;
mod iterable;
mod linked_list;
mod list;
mod scalar;
mod singleton;

pub use array::*;
pub use collection::*;
pub use dispatch::*;
pub use enumerator::*;
pub use iterable::*;
pub use linked_list::*;
pub use list::*;
pub use scalar::*;
pub use singleton::*;
