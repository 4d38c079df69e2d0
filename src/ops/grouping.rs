use std::{fmt, rc::Rc, slice};

use crate::{
    Argument, Enumerable, Enumerator, Error, IndexedEnumerable, IntoSequence,
    RandomAccessEnumerator, Result, Sequence, Shape,
};

/// The elements sharing one key, in the order they were encountered, plus the key.
///
/// Produced by [`group_by`](crate::Sequence::group_by). Cloning a `Grouping` is cheap:
/// clones share the key and the elements.
///
/// # Examples
///
/// ```
/// use enumerable::{Argument, Error, IntoSequence, Sequence};
///
/// let groups: Vec<_> = Sequence::of(&[1, 2, 3, 4])
///     .group_by(|n| n % 2 == 0)
///     .into_sequence()
///     .iter()
///     .collect();
///
/// let odds = &groups[0];
/// assert_eq!(odds.key(), &false);
/// assert_eq!(odds.as_slice(), [1, 3]);
/// assert_eq!(odds.get(1), Ok(3));
/// assert_eq!(odds.get(23), Err(Error::ArgumentOutOfRange(Argument::Index)));
/// assert!(odds.contains(&3));
/// assert!(!odds.contains(&2));
/// ```
pub struct Grouping<K, E> {
    inner: Rc<Inner<K, E>>,
}

struct Inner<K, E> {
    key: K,
    elements: Box<[E]>,
}

impl<K, E> Grouping<K, E> {
    #[inline]
    pub(crate) fn new(key: K, elements: Vec<E>) -> Self {
        Grouping {
            inner: Rc::new(Inner {
                key,
                elements: elements.into_boxed_slice(),
            }),
        }
    }

    /// Returns the key shared by the elements.
    #[inline]
    pub fn key(&self) -> &K {
        &self.inner.key
    }

    /// Returns the number of elements. A grouping is never empty.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.elements.len()
    }

    /// Always `false`, since a group exists only once an element has a key in it.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.elements.is_empty()
    }

    /// Returns the elements in encounter order.
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.inner.elements
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.inner.elements.iter()
    }

    /// Returns `true` if `element` is one of the elements.
    #[inline]
    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.inner.elements.contains(element)
    }

    /// Returns a clone of the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::ArgumentOutOfRange`] if `index` is not below [`len`](Grouping::len).
    #[inline]
    pub fn get(&self, index: usize) -> Result<E>
    where
        E: Clone,
    {
        self.inner
            .elements
            .get(index)
            .cloned()
            .ok_or(Error::ArgumentOutOfRange(Argument::Index))
    }

    /// Returns the elements as an indexed [`Sequence`] sharing this grouping.
    #[inline]
    pub fn as_sequence<'a>(&self) -> Sequence<'a, E>
    where
        K: 'a,
        E: Clone + 'a,
    {
        self.clone().into_sequence()
    }
}

impl<K, E: Clone> Enumerable<E> for Grouping<K, E> {
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = E> + '_> {
        Box::new(RandomAccessEnumerator::new(&*self.inner.elements))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Grouping
    }
}

impl<K, E: Clone> IndexedEnumerable<E> for Grouping<K, E> {
    #[inline]
    fn len(&self) -> usize {
        Grouping::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<E> {
        Grouping::get(self, index)
    }
}

impl<'a, K: 'a, E: Clone + 'a> IntoSequence<'a> for Grouping<K, E> {
    type Item = E;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, E> {
        Sequence::from_indexed(self)
    }
}

impl<'a, K: 'a, E: Clone + 'a> IntoSequence<'a> for &Grouping<K, E> {
    type Item = E;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, E> {
        Sequence::from_indexed(self.clone())
    }
}

impl<'g, K, E> IntoIterator for &'g Grouping<K, E> {
    type Item = &'g E;

    type IntoIter = slice::Iter<'g, E>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, E> Clone for Grouping<K, E> {
    #[inline]
    fn clone(&self) -> Self {
        Grouping {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K: PartialEq, E: PartialEq> PartialEq for Grouping<K, E> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.key == other.inner.key && self.inner.elements == other.inner.elements)
    }
}

impl<K: Eq, E: Eq> Eq for Grouping<K, E> {}

impl<K: fmt::Debug, E: fmt::Debug> fmt::Debug for Grouping<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grouping")
            .field("key", &self.inner.key)
            .field("elements", &self.inner.elements)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Grouping;
    use crate::{Argument, Error, Sequence, Shape};

    fn odds() -> Grouping<bool, i32> {
        Grouping::new(false, vec![1, 3])
    }

    #[test]
    fn reads_by_position() {
        let odds = odds();

        assert_eq!(odds.len(), 2);
        assert!(!odds.is_empty());
        assert_eq!(odds.get(0), Ok(1));
        assert_eq!(odds.get(2), Err(Error::ArgumentOutOfRange(Argument::Index)));
        assert_eq!(odds.iter().copied().collect::<Vec<_>>(), [1, 3]);
    }

    #[test]
    fn indexed_sequence() {
        let seq = Sequence::of(&odds());

        assert_eq!(seq.shape(), Shape::Grouping);
        assert!(seq.is_indexed());
        assert_eq!(seq.last(), Ok(3));
        assert_eq!(
            seq.element_at(5),
            Err(Error::ArgumentOutOfRange(Argument::Index))
        );
    }

    #[test]
    fn clones_share_elements() {
        let a = odds();
        let b = a.clone();

        assert_eq!(a, b);
        assert_eq!(a, odds());
        assert_ne!(a, Grouping::new(true, vec![1, 3]));
        assert_eq!(
            format!("{a:?}"),
            "Grouping { key: false, elements: [1, 3] }"
        );
    }
}
