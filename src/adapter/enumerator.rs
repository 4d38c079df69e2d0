use std::{cell::RefCell, fmt};

use crate::{EmptyEnumerator, Enumerable, Enumerator, Sequence, Shape};

/// Adapts a live [`Enumerator`].
///
/// A cursor cannot be rewound, so the first enumeration takes it over and every later one
/// is empty. Sequential.
///
/// This struct is created by [`Sequence::of_enumerator()`].
pub struct EnumeratorEnumerable<'a, T> {
    enumerator: RefCell<Option<Box<dyn Enumerator<Item = T> + 'a>>>,
}

impl<'a, T> EnumeratorEnumerable<'a, T> {
    /// Creates an adapter that hands `enumerator` to the first enumeration.
    #[inline]
    pub fn new<E>(enumerator: E) -> Self
    where
        E: Enumerator<Item = T> + 'a,
    {
        EnumeratorEnumerable {
            enumerator: RefCell::new(Some(Box::new(enumerator))),
        }
    }
}

impl<T> Enumerable<T> for EnumeratorEnumerable<'_, T> {
    fn enumerator(&self) -> Box<dyn Enumerator<Item = T> + '_> {
        match self.enumerator.take() {
            Some(enumerator) => enumerator,
            None => Box::new(EmptyEnumerator::new()),
        }
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Enumerator
    }
}

impl<T> fmt::Debug for EnumeratorEnumerable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumeratorEnumerable")
            .field("spent", &self.enumerator.borrow().is_none())
            .finish()
    }
}

impl<'a, T> Sequence<'a, T> {
    /// Adapts a live enumerator.
    ///
    /// Only the first enumeration sees the remaining elements; later ones are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::{Enumerator, IteratorEnumerator, Sequence};
    ///
    /// let mut cursor = IteratorEnumerator::new(1..=4);
    /// cursor.move_next();
    ///
    /// let rest = Sequence::of_enumerator(cursor);
    /// assert_eq!(rest.iter().collect::<Vec<_>>(), [2, 3, 4]);
    /// ```
    #[inline]
    pub fn of_enumerator<E>(enumerator: E) -> Self
    where
        E: Enumerator<Item = T> + 'a,
        T: 'a,
    {
        Sequence::from_enumerable(EnumeratorEnumerable::new(enumerator))
    }
}
