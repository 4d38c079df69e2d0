use std::collections::VecDeque;

use super::Enumerator;
use crate::{Error, Result};

/// A container with a known length and constant-time positional reads.
///
/// Sources implementing this trait are adapted as *indexed* sequences, which lets
/// [`element_at`](crate::Sequence::element_at) and [`last`](crate::Sequence::last)
/// read a slot directly instead of walking the sequence.
///
/// # Examples
///
/// ```
/// use enumerable::{RandomAccess, Sequence};
///
/// /// A fixed lookup table.
/// struct Table(Vec<u32>);
///
/// impl RandomAccess for Table {
///     type Item = u32;
///
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///
///     fn get(&self, index: usize) -> Option<&u32> {
///         self.0.get(index)
///     }
/// }
///
/// let table = Table(vec![3, 6, 9]);
/// let seq = Sequence::of_list(&table);
///
/// assert!(seq.is_indexed());
/// assert_eq!(seq.last(), Ok(9));
/// ```
pub trait RandomAccess {
    /// The type of the elements.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` if it is out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns `true` if there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> RandomAccess for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> RandomAccess for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<R: RandomAccess + ?Sized> RandomAccess for &R {
    type Item = R::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Item> {
        (**self).get(index)
    }
}

/// Reads `index` from `source`, reporting a miss as [`Error::IndexOutOfBounds`].
pub(crate) fn get_in_bounds<R>(source: &R, index: usize) -> Result<&R::Item>
where
    R: RandomAccess + ?Sized,
{
    source.get(index).ok_or(Error::IndexOutOfBounds {
        index,
        len: source.len(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Before,
    At(usize),
    Closed,
}

/// An [`Enumerator`] stepping through a [`RandomAccess`] container by index.
#[derive(Debug)]
pub struct RandomAccessEnumerator<'s, R: ?Sized> {
    source: &'s R,
    position: Position,
}

impl<'s, R: RandomAccess + ?Sized> RandomAccessEnumerator<'s, R> {
    /// Creates an enumerator positioned before the first element of `source`.
    #[inline]
    pub fn new(source: &'s R) -> Self {
        RandomAccessEnumerator {
            source,
            position: Position::Before,
        }
    }
}

impl<R: RandomAccess + ?Sized> Enumerator for RandomAccessEnumerator<'_, R> {
    type Item = R::Item;

    fn move_next(&mut self) -> bool {
        let next = match self.position {
            Position::Before => 0,
            Position::At(index) => index + 1,
            Position::Closed => return false,
        };

        // The length is read on every step, so a container that shrank in between is
        // never read past its end.
        if next < self.source.len() {
            self.position = Position::At(next);
            true
        } else {
            self.close();
            false
        }
    }

    fn current(&self) -> Result<&Self::Item> {
        match self.position {
            Position::At(index) => self.source.get(index).ok_or(Error::NotPositioned),
            Position::Before | Position::Closed => Err(Error::NotPositioned),
        }
    }

    #[inline]
    fn close(&mut self) {
        self.position = Position::Closed;
    }
}
