//! Lazily-evaluated, re-iterable sequences over heterogeneous sources.
//!
//! A [`Sequence`] is a view over *some* source: a slice, a [`VecDeque`], a
//! [`LinkedList`], a set, a map, a closure producing iterators, a one-shot iterator, a
//! piece of text... It never copies the source. Every enumeration mints a fresh
//! [`Enumerator`], a cursor that pulls one element at a time and is closed as soon as
//! it is abandoned.
//!
//! # Motivation
//!
//! Suppose we are given scores keyed by player, and we are asked for each player's total,
//! in the order the players first show up.
//!
//! - Approach 1: a [`HashMap`]
//!
//! ```
//! use std::collections::HashMap;
//!
//! let scores = [("Tim", 55), ("Chris", 49), ("Robert", -100), ("Chris", 24), ("Tim", 25)];
//!
//! let mut totals = HashMap::new();
//! for (name, score) in scores {
//!     *totals.entry(name).or_insert(0) += score;
//! }
//!
//! assert_eq!(totals["Tim"], 80);
//! ```
//!
//! **Cons:** the first-seen order is gone. Keeping it means a second container on the side,
//! and keys that should merge without being equal (different case, anagrams...) mean a
//! wrapper type with hand-written [`Eq`] and [`Hash`].
//!
//! - Approach 2: this crate
//!
//! ```
//! use enumerable::Sequence;
//!
//! let scores = [("Tim", 55), ("Chris", 49), ("Robert", -100), ("Chris", 24), ("Tim", 25)];
//!
//! let totals: Vec<_> = Sequence::of(&scores)
//!     .group_by(|&(name, _)| name)
//!     .element(|(_, score)| score)
//!     .result(|name, group| (*name, group.iter().sum::<i32>()))
//!     .iter()
//!     .collect();
//!
//! assert_eq!(totals, [("Tim", 80), ("Chris", 73), ("Robert", -100)]);
//! ```
//!
//! Groups come out in first-seen order, and how keys compare is a pluggable [`Equality`].
//!
//! # Capabilities
//!
//! When a source is adapted, the sequence records whether it is *indexed* (it knows its
//! length and reads any position in constant time) or only *sequential*. Terminal
//! operators choose their algorithm from that once:
//!
//! ```
//! use std::collections::LinkedList;
//! use enumerable::{ErrorKind, Sequence};
//!
//! let array = [1, 2, 3];
//! let list: LinkedList<_> = array.into();
//!
//! // Read directly.
//! assert_eq!(Sequence::of(&array).last(), Ok(3));
//! // Walked to the end.
//! assert_eq!(Sequence::of(&list).last(), Ok(3));
//!
//! // The paths agree on elements, and differ on how a miss is reported.
//! assert_eq!(Sequence::of(&array).element_at(7).unwrap_err().kind(), ErrorKind::Bounds);
//! assert_eq!(Sequence::of(&list).element_at(7).unwrap_err().kind(), ErrorKind::Absence);
//! ```
//!
//! # Sources
//!
//! - At compile time, anything implementing [`IntoSequence`] goes through [`Sequence::of`].
//! - At run time, a type-erased `&dyn Any` goes through
//!   [`adapter::adapt`] or [`adapter::try_adapt`].
//! - Text is viewed through [`Sequence::chars`], [`Sequence::words`] and
//!   [`Sequence::lines`].
//! - Anything else implements [`Enumerable`] or [`IndexedEnumerable`].
//!
//! Callers whose arguments may be absent use the [`checked`] entry points.
//!
//! [`VecDeque`]: std::collections::VecDeque
//! [`LinkedList`]: std::collections::LinkedList
//! [`HashMap`]: std::collections::HashMap

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod adapter;
pub mod checked;
mod enumerator;
pub mod equality;
mod error;
mod ops;
pub mod prelude;
mod sequence;
pub mod text;

#[cfg(test)]
mod test_utils;

pub use enumerator::*;
pub use equality::{Equality, Natural, OrNatural};
pub use error::{Argument, Error, ErrorKind, Result};
pub use ops::*;
pub use sequence::*;

#[cfg(test)]
mod tests {
    use crate::{IntoSequence, Sequence, equality::Nullable};

    #[test]
    fn text_to_groups() {
        let text = "the cat and the hat\nand the bat";

        let counts: Vec<_> = Sequence::words(text)
            .group_by(|word| word.len())
            .into_sequence()
            .iter()
            .map(|group| (*group.key(), group.len()))
            .collect();

        assert_eq!(counts, [(3, 8)]);
        assert_eq!(Sequence::lines(text).count(), 2);
    }

    #[test]
    fn nullable_custom_keys() {
        let names = [Some("Ann"), None, Some("ANN"), None];

        let groups: Vec<_> = Sequence::of(&names)
            .group_by(|name| name.map(str::to_lowercase))
            .equality(Nullable(crate::Natural::new()))
            .into_sequence()
            .iter()
            .map(|group| group.len())
            .collect();

        assert_eq!(groups, [2, 2]);
    }
}
