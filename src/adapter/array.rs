use crate::{
    Enumerable, Enumerator, IndexedEnumerable, IntoSequence, RandomAccessEnumerator, Result,
    Sequence, Shape, enumerator::get_in_bounds,
};

/// Adapts a slice of arbitrary elements, cloning each element as it is read.
///
/// Indexed: out-of-range reads fail with [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds).
///
/// This struct is created by `Sequence::of()` on `&[T]`, `&[T; N]`, `&Vec<T>` or `&Box<[T]>`.
#[derive(Debug, Clone, Copy)]
pub struct ArrayEnumerable<'a, T> {
    array: &'a [T],
}

impl<'a, T> ArrayEnumerable<'a, T> {
    /// Creates an adapter over `array`.
    #[inline]
    pub const fn new(array: &'a [T]) -> Self {
        ArrayEnumerable { array }
    }
}

impl<T> Enumerable<T> for ArrayEnumerable<'_, T> {
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = T> + '_> {
        Box::new(RandomAccessEnumerator::new(self.array))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Array
    }
}

impl<T: Clone> IndexedEnumerable<T> for ArrayEnumerable<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.array.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<T> {
        get_in_bounds(self.array, index).cloned()
    }
}

impl<'a, T: Clone + 'a> IntoSequence<'a> for &'a [T] {
    type Item = T;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::from_indexed(ArrayEnumerable::new(self))
    }
}

impl<'a, T: Clone + 'a, const N: usize> IntoSequence<'a> for &'a [T; N] {
    type Item = T;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::from_indexed(ArrayEnumerable::new(self))
    }
}

impl<'a, T: Clone + 'a> IntoSequence<'a> for &'a Vec<T> {
    type Item = T;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::from_indexed(ArrayEnumerable::new(self))
    }
}

impl<'a, T: Clone + 'a> IntoSequence<'a> for &'a Box<[T]> {
    type Item = T;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::from_indexed(ArrayEnumerable::new(self))
    }
}
