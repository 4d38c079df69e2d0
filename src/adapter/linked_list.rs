use std::collections::LinkedList;

use crate::{Enumerable, Enumerator, IntoSequence, IteratorEnumerator, Sequence, Shape};

/// Adapts a [`LinkedList`], walking it link by link.
///
/// Sequential: positional queries walk from the front.
///
/// This struct is created by `Sequence::of()` on a `&LinkedList<T>`.
#[derive(Debug)]
pub struct LinkedListEnumerable<'a, T> {
    list: &'a LinkedList<T>,
}

impl<'a, T> LinkedListEnumerable<'a, T> {
    /// Creates an adapter over `list`.
    #[inline]
    pub const fn new(list: &'a LinkedList<T>) -> Self {
        LinkedListEnumerable { list }
    }
}

impl<T: Clone> Enumerable<T> for LinkedListEnumerable<'_, T> {
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = T> + '_> {
        Box::new(IteratorEnumerator::new(self.list.iter().cloned()))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::LinkedList
    }
}

impl<'a, T: Clone + 'a> IntoSequence<'a> for &'a LinkedList<T> {
    type Item = T;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::from_enumerable(LinkedListEnumerable::new(self))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::LinkedList;

    use crate::{Argument, Error, Sequence, Shape};

    #[test]
    fn walks_link_by_link() {
        let list: LinkedList<_> = ["jimi", "mitch"].into();
        let seq = Sequence::of(&list);

        assert_eq!(seq.shape(), Shape::LinkedList);
        assert!(!seq.is_indexed());
        assert_eq!(seq.element_at(1), Ok("mitch"));
        assert_eq!(
            seq.element_at(2),
            Err(Error::ArgumentOutOfRange(Argument::Index))
        );
    }
}
