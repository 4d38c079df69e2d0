use std::{fmt, rc::Rc};

use super::{Enumerable, IndexedEnumerable, IntoSequence, Shape};
use crate::{Enumerator, Iter};

/// A lazily-evaluated, re-iterable view over a source.
///
/// A `Sequence` never copies its source. It mints a fresh [`Enumerator`] every time it is
/// enumerated, so iterating twice, or holding two cursors at once, is fine.
/// Cloning a `Sequence` is cheap: clones share the same adapted source.
///
/// When the source is adapted, the `Sequence` records whether the source is *indexed*
/// (known length plus constant-time positional reads) or merely *sequential*.
/// Terminal operators such as [`element_at`](Sequence::element_at) and
/// [`last`](Sequence::last) pick their algorithm from that, once, at the boundary.
///
/// # Examples
///
/// ```
/// use std::collections::LinkedList;
/// use enumerable::{Sequence, Shape};
///
/// let array = Sequence::of(&["jimi", "mitch"]);
/// assert_eq!(array.shape(), Shape::Array);
/// assert!(array.is_indexed());
///
/// let list: LinkedList<_> = ["jimi", "noel", "mitch"].into();
/// let linked = Sequence::of(&list);
/// assert_eq!(linked.shape(), Shape::LinkedList);
/// assert!(!linked.is_indexed());
///
/// assert_eq!(array.last(), Ok("mitch"));
/// assert_eq!(linked.last(), Ok("mitch"));
/// ```
pub struct Sequence<'a, T> {
    repr: Repr<'a, T>,
}

enum Repr<'a, T> {
    Indexed(Rc<dyn IndexedEnumerable<T> + 'a>),
    Sequential(Rc<dyn Enumerable<T> + 'a>),
}

/// How a [`Sequence`] can be read, resolved at adaptation time.
pub(crate) enum Access<'s, T> {
    Indexed(&'s dyn IndexedEnumerable<T>),
    Sequential(&'s dyn Enumerable<T>),
}

impl<'a, T> Sequence<'a, T> {
    /// Adapts any source with a registered adapter.
    ///
    /// This is the compile-time dispatch entry point; see [`IntoSequence`] for the list of
    /// supported sources. Adapting a `Sequence` returns it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::{BTreeSet, VecDeque};
    /// use enumerable::{Sequence, Shape};
    ///
    /// let deque: VecDeque<_> = [1, 2, 3].into();
    /// assert_eq!(Sequence::of(&deque).shape(), Shape::RandomAccessList);
    ///
    /// let set: BTreeSet<_> = [3, 1, 2].into();
    /// assert_eq!(Sequence::of(&set).iter().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn of<S>(source: S) -> Self
    where
        S: IntoSequence<'a, Item = T>,
    {
        source.into_sequence()
    }

    /// Wraps a sequential source.
    #[inline]
    pub fn from_enumerable<E>(source: E) -> Self
    where
        E: Enumerable<T> + 'a,
    {
        Sequence {
            repr: Repr::Sequential(Rc::new(source)),
        }
    }

    /// Wraps an indexed source.
    #[inline]
    pub fn from_indexed<E>(source: E) -> Self
    where
        E: IndexedEnumerable<T> + 'a,
    {
        Sequence {
            repr: Repr::Indexed(Rc::new(source)),
        }
    }

    /// Creates a new cursor positioned before the first element.
    ///
    /// Prefer [`iter`](Sequence::iter), which closes the cursor automatically.
    #[inline]
    pub fn enumerator(&self) -> Box<dyn Enumerator<Item = T> + '_> {
        match &self.repr {
            Repr::Indexed(source) => source.enumerator(),
            Repr::Sequential(source) => source.enumerator(),
        }
    }

    /// Returns what kind of source this sequence was adapted from.
    #[inline]
    pub fn shape(&self) -> Shape {
        match &self.repr {
            Repr::Indexed(source) => source.shape(),
            Repr::Sequential(source) => source.shape(),
        }
    }

    /// Returns `true` if the source has a known length and constant-time positional reads.
    #[inline]
    pub fn is_indexed(&self) -> bool {
        matches!(self.repr, Repr::Indexed(_))
    }

    /// Returns `true` if both handles share the same adapted source.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Indexed(a), Repr::Indexed(b)) => Rc::ptr_eq(a, b),
            (Repr::Sequential(a), Repr::Sequential(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    #[inline]
    pub(crate) fn access(&self) -> Access<'_, T> {
        match &self.repr {
            Repr::Indexed(source) => Access::Indexed(&**source),
            Repr::Sequential(source) => Access::Sequential(&**source),
        }
    }
}

impl<T: Clone> Sequence<'_, T> {
    /// Returns an iterator over the elements.
    ///
    /// Each call starts a new enumeration. The underlying cursor is closed when the
    /// iterator is dropped.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.enumerator())
    }
}

impl<T> Clone for Sequence<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        let repr = match &self.repr {
            Repr::Indexed(source) => Repr::Indexed(Rc::clone(source)),
            Repr::Sequential(source) => Repr::Sequential(Rc::clone(source)),
        };

        Sequence { repr }
    }
}

impl<'s, T: Clone> IntoIterator for &'s Sequence<'_, T> {
    type Item = T;

    type IntoIter = Iter<'s, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("shape", &self.shape())
            .field("indexed", &self.is_indexed())
            .finish()
    }
}
