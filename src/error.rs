use std::fmt;

use thiserror::Error;

/// A specialized [`Result`](std::result::Result) for sequence operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while adapting, enumerating, or querying a [`Sequence`](crate::Sequence).
///
/// No error is retried internally. Operators either succeed or fail before any
/// observable partial result, except that each pull from a lazy sequence may fail
/// independently of the elements already pulled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A required argument was absent.
    #[error("value cannot be null (parameter `{0}`)")]
    ArgumentNull(Argument),

    /// An indexed read fell outside `[0, len)` of the backing container.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the container.
        len: usize,
    },

    /// An indexed read asked for a position before the first element.
    #[error("index {index} is negative, length is {len}")]
    NegativeIndex {
        /// The requested index.
        index: isize,
        /// The length of the container.
        len: usize,
    },

    /// The requested position does not exist in the sequence.
    #[error("specified argument was out of the range of valid values (parameter `{0}`)")]
    ArgumentOutOfRange(Argument),

    /// The sequence has no elements.
    #[error("sequence contains no elements")]
    NoElements,

    /// No element of the sequence satisfied the predicate.
    #[error("sequence contains no matching element")]
    NoMatch,

    /// No adapter is registered for the source.
    #[error("no adapter for a source of `{0}` elements")]
    UnsupportedShape(&'static str),

    /// [`current`](crate::Enumerator::current) was called before the first
    /// successful advance or after the enumerator was exhausted.
    #[error("enumeration has either not started or has already finished")]
    NotPositioned,
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::{ErrorKind, Sequence};
    ///
    /// let array = Sequence::of(&[1, 2]);
    /// let list = Sequence::of_iterable(|| [1, 2]);
    ///
    /// assert_eq!(array.element_at(5).unwrap_err().kind(), ErrorKind::Bounds);
    /// assert_eq!(list.element_at(5).unwrap_err().kind(), ErrorKind::Absence);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ArgumentNull(_) => ErrorKind::ArgumentNull,
            Error::IndexOutOfBounds { .. } | Error::NegativeIndex { .. } => ErrorKind::Bounds,
            Error::ArgumentOutOfRange(_) | Error::NoElements | Error::NoMatch => {
                ErrorKind::Absence
            }
            Error::UnsupportedShape(_) => ErrorKind::UnsupportedShape,
            Error::NotPositioned => ErrorKind::InvalidState,
        }
    }
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required source, selector, or comparator was absent.
    ArgumentNull,
    /// Direct indexing outside the container's bounds.
    Bounds,
    /// A logical element (by position, last, or last matching) does not exist.
    Absence,
    /// The source has no registered adapter.
    UnsupportedShape,
    /// The enumerator was used outside its valid window.
    InvalidState,
}

/// Names the parameter an [`Error`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    /// The sequence being queried.
    Source,
    /// The closure computing each element's key.
    KeySelector,
    /// The closure projecting each element into its group.
    ElementSelector,
    /// The closure mapping each group to a result.
    ResultSelector,
    /// The condition an element must meet.
    Predicate,
    /// A zero-based position.
    Index,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Argument::Source => "source",
            Argument::KeySelector => "key_selector",
            Argument::ElementSelector => "element_selector",
            Argument::ResultSelector => "result_selector",
            Argument::Predicate => "predicate",
            Argument::Index => "index",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Argument, Error, ErrorKind};

    #[test]
    fn messages_name_the_argument() {
        assert_eq!(
            Error::ArgumentNull(Argument::KeySelector).to_string(),
            "value cannot be null (parameter `key_selector`)"
        );
        assert_eq!(
            Error::IndexOutOfBounds { index: 4, len: 4 }.to_string(),
            "index 4 out of bounds for length 4"
        );
    }

    #[test]
    fn bounds_and_absence_are_distinct() {
        assert_eq!(
            Error::IndexOutOfBounds { index: 0, len: 0 }.kind(),
            ErrorKind::Bounds
        );
        assert_eq!(
            Error::ArgumentOutOfRange(Argument::Index).kind(),
            ErrorKind::Absence
        );
        assert_eq!(
            Error::NegativeIndex { index: -1, len: 2 }.kind(),
            ErrorKind::Bounds
        );
        assert_eq!(Error::NoElements.kind(), ErrorKind::Absence);
        assert_eq!(Error::NoMatch.kind(), ErrorKind::Absence);
        assert_eq!(Error::NotPositioned.kind(), ErrorKind::InvalidState);
    }
}
