use std::{fmt, iter, marker::PhantomData};

use crate::{EmptyEnumerator, Enumerable, Enumerator, IteratorEnumerator, Sequence, Shape};

/// A source with no elements.
///
/// Sequential.
///
/// This struct is created by [`Sequence::empty()`].
pub struct EmptyEnumerable<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> EmptyEnumerable<T> {
    /// Creates an instance of this source.
    #[inline]
    pub const fn new() -> Self {
        EmptyEnumerable {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for EmptyEnumerable<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Enumerable<T> for EmptyEnumerable<T> {
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = T> + '_> {
        Box::new(EmptyEnumerator::new())
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Empty
    }
}

impl<T> fmt::Debug for EmptyEnumerable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EmptyEnumerable")
    }
}

/// A source with exactly one element.
///
/// Sequential.
///
/// This struct is created by [`Sequence::singleton()`].
#[derive(Debug, Clone)]
pub struct SingletonEnumerable<T> {
    value: T,
}

impl<T> SingletonEnumerable<T> {
    /// Creates a source holding only `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        SingletonEnumerable { value }
    }
}

impl<T: Clone> Enumerable<T> for SingletonEnumerable<T> {
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = T> + '_> {
        Box::new(IteratorEnumerator::new(iter::once_with(|| self.value.clone())))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Singleton
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Creates a sequence with no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::{Error, Sequence};
    ///
    /// let seq = Sequence::<i32>::empty();
    ///
    /// assert_eq!(seq.last(), Err(Error::NoElements));
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Sequence::from_enumerable(EmptyEnumerable::new())
    }

    /// Creates a sequence holding only `value`.
    #[inline]
    pub fn singleton(value: T) -> Self
    where
        T: Clone,
    {
        Sequence::from_enumerable(SingletonEnumerable::new(value))
    }

    /// Creates a sequence holding `value` if present, and nothing otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::Sequence;
    ///
    /// assert_eq!(Sequence::of_nullable(Some(3)).count(), 1);
    /// assert_eq!(Sequence::of_nullable(None::<i32>).count(), 0);
    /// ```
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self
    where
        T: Clone,
    {
        match value {
            Some(value) => Sequence::singleton(value),
            None => Sequence::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Argument, Error, Sequence, Shape};

    #[test]
    fn not_indexed() {
        let empty = Sequence::<u8>::empty();
        let one = Sequence::singleton("solo");

        assert_eq!(empty.shape(), Shape::Empty);
        assert_eq!(one.shape(), Shape::Singleton);
        assert!(!empty.is_indexed());
        assert!(!one.is_indexed());
    }

    #[test]
    fn positional_reads() {
        let one = Sequence::singleton("solo");

        assert_eq!(one.element_at(0), Ok("solo"));
        assert_eq!(one.last(), Ok("solo"));
        assert_eq!(
            one.element_at(1),
            Err(Error::ArgumentOutOfRange(Argument::Index))
        );
        assert_eq!(
            Sequence::<u8>::empty().element_at(0),
            Err(Error::ArgumentOutOfRange(Argument::Index))
        );
    }
}
