use std::fmt;

use super::{Enumerator, Slot};
use crate::Result;

/// An [`Enumerator`] that forwards to an [`Iterator`].
///
/// The iterator is dropped as soon as it is exhausted or the enumerator is closed,
/// so any resource it owns is released deterministically.
pub struct IteratorEnumerator<I: Iterator> {
    iter: Option<I>,
    slot: Slot<I::Item>,
}

impl<I: Iterator> IteratorEnumerator<I> {
    /// Creates an enumerator pulling from `iter`.
    #[inline]
    pub fn new(iter: I) -> Self {
        IteratorEnumerator {
            iter: Some(iter),
            slot: Slot::new(),
        }
    }
}

impl<I: Iterator> Enumerator for IteratorEnumerator<I> {
    type Item = I::Item;

    fn move_next(&mut self) -> bool {
        if self.slot.is_closed() {
            return false;
        }

        match self.iter.as_mut().and_then(Iterator::next) {
            Some(item) => {
                self.slot.set(item);
                true
            }
            None => {
                self.close();
                false
            }
        }
    }

    #[inline]
    fn current(&self) -> Result<&Self::Item> {
        self.slot.get()
    }

    #[inline]
    fn close(&mut self) {
        self.iter = None;
        self.slot.close();
    }
}

impl<I: Iterator> fmt::Debug for IteratorEnumerator<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IteratorEnumerator")
            .field("closed", &self.slot.is_closed())
            .finish_non_exhaustive()
    }
}

/// An [`Enumerator`] over nothing.
#[derive(Debug)]
pub struct EmptyEnumerator<T> {
    slot: Slot<T>,
}

impl<T> EmptyEnumerator<T> {
    /// Creates an instance of this enumerator.
    #[inline]
    pub const fn new() -> Self {
        EmptyEnumerator { slot: Slot::new() }
    }
}

impl<T> Default for EmptyEnumerator<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Enumerator for EmptyEnumerator<T> {
    type Item = T;

    #[inline]
    fn move_next(&mut self) -> bool {
        self.slot.close();
        false
    }

    #[inline]
    fn current(&self) -> Result<&T> {
        self.slot.get()
    }

    #[inline]
    fn close(&mut self) {
        self.slot.close();
    }
}

#[cfg(test)]
mod tests {
    use super::{EmptyEnumerator, IteratorEnumerator};
    use crate::{Enumerator, Error};

    #[test]
    fn current_is_only_valid_between_advances() {
        let mut e = IteratorEnumerator::new([1, 2].into_iter());

        assert_eq!(e.current(), Err(Error::NotPositioned));
        assert!(e.move_next());
        assert_eq!(e.current(), Ok(&1));
        assert!(e.move_next());
        assert_eq!(e.current(), Ok(&2));
        assert!(!e.move_next());
        assert_eq!(e.current(), Err(Error::NotPositioned));
    }

    #[test]
    fn stays_closed_even_if_the_iterator_resumes() {
        // An iterator that yields `None` once, then resumes.
        let mut calls = 0;
        let flaky = std::iter::from_fn(move || {
            calls += 1;
            (calls != 2).then_some(calls)
        });

        let mut e = IteratorEnumerator::new(flaky);
        assert!(e.move_next());
        assert!(!e.move_next());
        assert!(!e.move_next());
        assert!(!e.move_next());
    }

    #[test]
    fn close_is_idempotent() {
        let mut e = IteratorEnumerator::new(0..10);
        assert!(e.move_next());
        e.close();
        e.close();
        assert!(!e.move_next());
        assert_eq!(e.current(), Err(Error::NotPositioned));
    }

    #[test]
    fn empty() {
        let mut e = EmptyEnumerator::<i32>::new();
        assert!(!e.move_next());
        assert_eq!(e.current(), Err(Error::NotPositioned));
        e.close();
    }
}
