use std::{cell::RefCell, fmt, marker::PhantomData};

use crate::{EmptyEnumerator, Enumerable, Enumerator, IteratorEnumerator, Sequence, Shape};

/// Adapts a re-iterable source: a factory called once per enumeration.
///
/// Sequential, whatever the factory returns.
///
/// This struct is created by [`Sequence::of_iterable()`]. See its documentation for more.
#[derive(Clone)]
pub struct IterableEnumerable<'a, F> {
    factory: F,
    // The iterators minted by `factory` may borrow for `'a`.
    _marker: PhantomData<&'a ()>,
}

impl<F> IterableEnumerable<'_, F> {
    /// Creates an adapter calling `factory` for each enumeration.
    #[inline]
    pub const fn new(factory: F) -> Self {
        IterableEnumerable {
            factory,
            _marker: PhantomData,
        }
    }
}

impl<'a, F, I> Enumerable<I::Item> for IterableEnumerable<'a, F>
where
    F: Fn() -> I,
    I: IntoIterator,
    I::IntoIter: 'a,
{
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = I::Item> + '_> {
        Box::new(IteratorEnumerator::new((self.factory)().into_iter()))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Iterable
    }
}

impl<F> fmt::Debug for IterableEnumerable<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterableEnumerable").finish_non_exhaustive()
    }
}

/// Adapts a single-pass iterator.
///
/// The first enumeration takes the iterator; every later one is empty.
/// Sequential.
///
/// This struct is created by [`Sequence::of_iter()`]. See its documentation for more.
pub struct IteratorEnumerable<I> {
    iter: RefCell<Option<I>>,
}

impl<I> IteratorEnumerable<I> {
    /// Creates an adapter that hands `iter` to the first enumeration.
    #[inline]
    pub const fn new(iter: I) -> Self {
        IteratorEnumerable {
            iter: RefCell::new(Some(iter)),
        }
    }

    /// Returns `true` if the iterator has already been handed out.
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.iter.borrow().is_none()
    }
}

impl<I: Iterator> Enumerable<I::Item> for IteratorEnumerable<I> {
    fn enumerator(&self) -> Box<dyn Enumerator<Item = I::Item> + '_> {
        match self.iter.take() {
            Some(iter) => Box::new(IteratorEnumerator::new(iter)),
            None => Box::new(EmptyEnumerator::new()),
        }
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Iterator
    }
}

impl<I> fmt::Debug for IteratorEnumerable<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IteratorEnumerable")
            .field("spent", &self.is_spent())
            .finish()
    }
}

impl<'a, T> Sequence<'a, T> {
    /// Adapts a re-iterable source given as a factory of iterators.
    ///
    /// The factory is called once per enumeration, so the sequence can be walked any number
    /// of times. The result is always sequential, even if the factory yields something
    /// indexable.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::{Sequence, Shape};
    ///
    /// let seq = Sequence::of_iterable(|| -4..10);
    ///
    /// assert_eq!(seq.shape(), Shape::Iterable);
    /// assert!(!seq.is_indexed());
    /// assert_eq!(seq.element_at(3), Ok(-1));
    /// assert_eq!(seq.element_at(3), Ok(-1));
    /// ```
    #[inline]
    pub fn of_iterable<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'a,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Sequence::from_enumerable(IterableEnumerable::new(factory))
    }

    /// Adapts a single-pass iterator.
    ///
    /// Only the first enumeration sees the elements; later ones are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::Sequence;
    ///
    /// let seq = Sequence::of_iter("abc".chars());
    ///
    /// assert_eq!(seq.last(), Ok('c'));
    /// assert_eq!(seq.iter().count(), 0);
    /// ```
    #[inline]
    pub fn of_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Sequence::from_enumerable(IteratorEnumerable::new(iter.into_iter()))
    }
}
