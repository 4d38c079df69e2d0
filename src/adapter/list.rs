use std::collections::VecDeque;

use crate::{
    Enumerable, Enumerator, IndexedEnumerable, IntoSequence, RandomAccess, RandomAccessEnumerator,
    Result, Sequence, Shape, enumerator::get_in_bounds,
};

/// Adapts a list with constant-time positional reads.
///
/// Indexed: out-of-range reads fail with [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds).
///
/// This struct is created by `Sequence::of()` on a `&VecDeque<T>`, or by
/// [`Sequence::of_list()`] on any [`RandomAccess`] container.
#[derive(Debug)]
pub struct ListEnumerable<'a, L: ?Sized> {
    list: &'a L,
}

impl<'a, L: RandomAccess + ?Sized> ListEnumerable<'a, L> {
    /// Creates an adapter over `list`.
    #[inline]
    pub const fn new(list: &'a L) -> Self {
        ListEnumerable { list }
    }
}

impl<L: ?Sized> Clone for ListEnumerable<'_, L> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ?Sized> Copy for ListEnumerable<'_, L> {}

impl<L> Enumerable<L::Item> for ListEnumerable<'_, L>
where
    L: RandomAccess + ?Sized,
{
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = L::Item> + '_> {
        Box::new(RandomAccessEnumerator::new(self.list))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::RandomAccessList
    }
}

impl<L> IndexedEnumerable<L::Item> for ListEnumerable<'_, L>
where
    L: RandomAccess + ?Sized,
    L::Item: Clone,
{
    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<L::Item> {
        get_in_bounds(self.list, index).cloned()
    }
}

impl<'a, T: Clone + 'a> IntoSequence<'a> for &'a VecDeque<T> {
    type Item = T;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::of_list(self)
    }
}

impl<'a, T: Clone + 'a> Sequence<'a, T> {
    /// Adapts a [`RandomAccess`] container as an indexed sequence.
    #[inline]
    pub fn of_list<L>(list: &'a L) -> Self
    where
        L: RandomAccess<Item = T> + ?Sized,
    {
        Sequence::from_indexed(ListEnumerable::new(list))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::{Error, Sequence, Shape};

    #[test]
    fn deque_is_indexed() {
        let mut deque = VecDeque::from([2, 3]);
        deque.push_front(1);
        let seq = Sequence::of(&deque);

        assert_eq!(seq.shape(), Shape::RandomAccessList);
        assert!(seq.is_indexed());
        assert_eq!(seq.iter().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(seq.element_at(0), Ok(1));
        assert_eq!(
            seq.element_at(3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
    }
}
