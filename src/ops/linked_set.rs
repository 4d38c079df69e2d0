use std::{fmt, hash::Hash, iter::FusedIterator, slice};

use crate::{
    Enumerable, Enumerator, Equality, IndexedEnumerable, IntoSequence, Natural,
    RandomAccessEnumerator, Result, Sequence, Shape, enumerator::get_in_bounds,
    ops::OrderedIndex,
};

/// A set that remembers the order its elements were first inserted in.
///
/// Inserting an element equal to one already present keeps the first one. Elements are
/// compared with an [`Equality`] strategy, natural equality by default, so `None` is an
/// element like any other.
///
/// # Examples
///
/// ```
/// use enumerable::{LinkedSet, Sequence};
///
/// let set = Sequence::of(&[Some(3), None, Some(1), Some(3), None]).to_linked_set();
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [Some(3), None, Some(1)]);
/// assert!(set.contains(&None));
/// ```
pub struct LinkedSet<T, Q = Natural> {
    index: OrderedIndex<T, ()>,
    equality: Q,
}

impl<T> LinkedSet<T> {
    /// Creates an empty set using natural equality.
    #[inline]
    pub fn new() -> Self {
        Self::with_equality(Natural::new())
    }
}

impl<T> Default for LinkedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Q> LinkedSet<T, Q> {
    /// Creates an empty set comparing elements with `equality`.
    #[inline]
    pub const fn with_equality(equality: Q) -> Self {
        LinkedSet {
            index: OrderedIndex::new(),
            equality,
        }
    }

    /// Returns the number of distinct elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if nothing was inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> LinkedSetIter<'_, T> {
        LinkedSetIter {
            entries: self.index.entries().iter(),
        }
    }
}

impl<T, Q: Equality<T>> LinkedSet<T, Q> {
    /// Adds `value` to the end of the set, unless an equal element is already present.
    ///
    /// Returns whether `value` was added.
    #[inline]
    pub fn insert(&mut self, value: T) -> bool {
        let (_, inserted) = self
            .index
            .find_or_insert_with(value, &self.equality, || ());
        inserted
    }

    /// Returns `true` if an element equal to `value` under the set's equality is present.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index.find(value, &self.equality).is_some()
    }

    /// Returns the position `value` was inserted at.
    #[inline]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.index.find(value, &self.equality)
    }
}

impl<T: Clone, Q> Enumerable<T> for LinkedSet<T, Q> {
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = T> + '_> {
        Box::new(RandomAccessEnumerator::new(&self.index))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::LinkedSet
    }
}

impl<T: Clone, Q> IndexedEnumerable<T> for LinkedSet<T, Q> {
    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<T> {
        get_in_bounds(&self.index, index).cloned()
    }
}

impl<'a, T: Clone + 'a, Q: 'a> IntoSequence<'a> for LinkedSet<T, Q> {
    type Item = T;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::from_indexed(self)
    }
}

impl<T: Eq + Hash> FromIterator<T> for LinkedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = LinkedSet::new();
        set.extend(iter);
        set
    }
}

impl<T, Q: Equality<T>> Extend<T> for LinkedSet<T, Q> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'s, T, Q> IntoIterator for &'s LinkedSet<T, Q> {
    type Item = &'s T;

    type IntoIter = LinkedSetIter<'s, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, Q> fmt::Debug for LinkedSet<T, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// An iterator over the elements of a [`LinkedSet`], in insertion order.
///
/// This struct is created by [`LinkedSet::iter()`].
#[derive(Debug, Clone)]
pub struct LinkedSetIter<'s, T> {
    entries: slice::Iter<'s, (T, ())>,
}

impl<'s, T> Iterator for LinkedSetIter<'s, T> {
    type Item = &'s T;

    #[inline]
    fn next(&mut self) -> Option<&'s T> {
        self.entries.next().map(|(value, ())| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> DoubleEndedIterator for LinkedSetIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back().map(|(value, ())| value)
    }
}

impl<T> ExactSizeIterator for LinkedSetIter<'_, T> {}

impl<T> FusedIterator for LinkedSetIter<'_, T> {}

impl<T: Clone> Sequence<'_, T> {
    /// Collects the distinct elements into a [`LinkedSet`], in first-seen order.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::Sequence;
    ///
    /// let set = Sequence::words("to be or not to be").to_linked_set();
    ///
    /// assert_eq!(set.iter().collect::<Vec<_>>(), ["to", "be", "or", "not"]);
    /// ```
    #[inline]
    pub fn to_linked_set(&self) -> LinkedSet<T>
    where
        T: Eq + Hash,
    {
        self.iter().collect()
    }

    /// Collects the distinct elements into a [`LinkedSet`], comparing them with `equality`.
    pub fn to_linked_set_by<Q: Equality<T>>(&self, equality: Q) -> LinkedSet<T, Q> {
        let mut set = LinkedSet::with_equality(equality);
        set.extend(self.iter());
        set
    }
}

#[cfg(test)]
mod tests {
    use super::LinkedSet;
    use crate::{Error, IntoSequence, Sequence, Shape, equality::ByKey};

    #[test]
    fn drops_duplicates_keeping_the_first() {
        let set = Sequence::of(&["b", "a", "b", "c", "a"]).to_linked_set();

        assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(set.position(&"c"), Some(2));
        assert_eq!(set.position(&"z"), None);
    }

    #[test]
    fn custom_equality() {
        let set = Sequence::of(&["Tim", "tim", "Bob", "TIM"])
            .to_linked_set_by(ByKey::new(|s: &&str| s.to_lowercase()));

        assert_eq!(set.len(), 2);
        assert!(set.contains(&"tIm"));
        assert_eq!(format!("{set:?}"), r#"{"Tim", "Bob"}"#);
    }

    #[test]
    fn indexed_sequence() {
        let set: LinkedSet<_> = [3, 1, 3, 2].into_iter().collect();
        let seq = set.into_sequence();

        assert_eq!(seq.shape(), Shape::LinkedSet);
        assert!(seq.is_indexed());
        assert_eq!(seq.element_at(2), Ok(2));
        assert_eq!(
            seq.element_at(3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(seq.iter().collect::<Vec<_>>(), [3, 1, 2]);
    }

    #[test]
    fn insert_reports_novelty() {
        let mut set = LinkedSet::new();

        assert!(set.insert(None));
        assert!(set.insert(Some(0)));
        assert!(!set.insert(None));
        assert!(set.iter().rev().eq([&Some(0), &None]));
        assert!(LinkedSet::<u8>::default().is_empty());
    }
}
