use std::fmt;

use crate::adapter::ScalarKind;

/// What kind of source a [`Sequence`](crate::Sequence) was adapted from.
///
/// Chosen once, when the source is adapted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Shape {
    /// A slice of a primitive scalar kind.
    ScalarArray(ScalarKind),
    /// A slice of arbitrary elements.
    Array,
    /// A list with constant-time positional reads, like a [`VecDeque`](std::collections::VecDeque).
    RandomAccessList,
    /// A list walked link by link.
    LinkedList,
    /// A set-like collection without positional reads.
    Collection,
    /// The entries of a key-value map.
    Map,
    /// A factory producing a fresh iterator per enumeration.
    Iterable,
    /// A one-shot iterator.
    Iterator,
    /// A one-shot enumerator.
    Enumerator,
    /// A view of text.
    Text(TextUnit),
    /// The elements of one [`Grouping`](crate::Grouping).
    Grouping,
    /// The groups produced by [`group_by`](crate::Sequence::group_by).
    Grouped,
    /// An insertion-ordered set.
    LinkedSet,
    /// No elements at all.
    Empty,
    /// Exactly one element.
    Singleton,
    /// A user-provided [`Enumerable`](crate::Enumerable).
    Custom,
}

/// The unit a text view yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextUnit {
    /// Each Unicode scalar value.
    Chars,
    /// Each maximal run of letters and digits.
    Words,
    /// Each line, without its terminator.
    Lines,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::ScalarArray(kind) => write!(f, "[{kind}]"),
            Shape::Array => f.write_str("array"),
            Shape::RandomAccessList => f.write_str("random-access list"),
            Shape::LinkedList => f.write_str("linked list"),
            Shape::Collection => f.write_str("collection"),
            Shape::Map => f.write_str("map"),
            Shape::Iterable => f.write_str("iterable"),
            Shape::Iterator => f.write_str("iterator"),
            Shape::Enumerator => f.write_str("enumerator"),
            Shape::Text(TextUnit::Chars) => f.write_str("chars"),
            Shape::Text(TextUnit::Words) => f.write_str("words"),
            Shape::Text(TextUnit::Lines) => f.write_str("lines"),
            Shape::Grouping => f.write_str("grouping"),
            Shape::Grouped => f.write_str("grouped"),
            Shape::LinkedSet => f.write_str("linked set"),
            Shape::Empty => f.write_str("empty"),
            Shape::Singleton => f.write_str("singleton"),
            Shape::Custom => f.write_str("custom"),
        }
    }
}
