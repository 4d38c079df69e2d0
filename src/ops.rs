//! Operators over a [`Sequence`](crate::Sequence): grouping, positional access, and set
//! materialization.
//!
//! Terminal operators read the capability recorded when the source was adapted and pick
//! their algorithm from it: an indexed source is read by position, anything else is walked.

mod count;
mod element_at;
mod group_by;
mod grouping;
mod last;
mod linked_set;
mod ordered_index;

pub use group_by::*;
pub use grouping::*;
pub use linked_set::*;
pub(crate) use ordered_index::*;
