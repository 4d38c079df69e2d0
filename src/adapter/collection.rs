use std::{
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet},
    fmt,
    hash::BuildHasher,
};

use crate::{Enumerable, Enumerator, IntoSequence, IteratorEnumerator, Sequence, Shape};

/// Adapts a set-like collection, cloning each element as it is read.
///
/// Sequential: the collection is enumerated in its own iteration order.
///
/// This struct is created by `Sequence::of()` on a `&HashSet<T, S>`, `&BTreeSet<T>` or
/// `&BinaryHeap<T>`.
pub struct CollectionEnumerable<'a, C: ?Sized> {
    collection: &'a C,
}

impl<'a, C: ?Sized> CollectionEnumerable<'a, C> {
    /// Creates an adapter over `collection`.
    #[inline]
    pub const fn new(collection: &'a C) -> Self {
        CollectionEnumerable { collection }
    }
}

impl<'a, C, T> Enumerable<T> for CollectionEnumerable<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a T>,
    T: Clone + 'a,
{
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = T> + '_> {
        Box::new(IteratorEnumerator::new(
            self.collection.into_iter().cloned(),
        ))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Collection
    }
}

impl<C: ?Sized> fmt::Debug for CollectionEnumerable<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionEnumerable").finish_non_exhaustive()
    }
}

/// Adapts a key-value map as a sequence of its `(key, value)` entries, cloned as they are read.
///
/// Sequential: the map is enumerated in its own iteration order.
///
/// This struct is created by `Sequence::of()` on a `&HashMap<K, V, S>` or `&BTreeMap<K, V>`.
pub struct EntryEnumerable<'a, M: ?Sized> {
    map: &'a M,
}

impl<'a, M: ?Sized> EntryEnumerable<'a, M> {
    /// Creates an adapter over the entries of `map`.
    #[inline]
    pub const fn new(map: &'a M) -> Self {
        EntryEnumerable { map }
    }
}

impl<'a, M, K, V> Enumerable<(K, V)> for EntryEnumerable<'a, M>
where
    M: ?Sized,
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
{
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = (K, V)> + '_> {
        Box::new(IteratorEnumerator::new(
            self.map
                .into_iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        ))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Map
    }
}

impl<M: ?Sized> fmt::Debug for EntryEnumerable<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryEnumerable").finish_non_exhaustive()
    }
}

impl<'a, T: Clone + 'a, S: BuildHasher + 'a> IntoSequence<'a> for &'a HashSet<T, S> {
    type Item = T;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::from_enumerable(CollectionEnumerable::new(self))
    }
}

impl<'a, T: Clone + 'a> IntoSequence<'a> for &'a BTreeSet<T> {
    type Item = T;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::from_enumerable(CollectionEnumerable::new(self))
    }
}

impl<'a, T: Clone + 'a> IntoSequence<'a> for &'a BinaryHeap<T> {
    type Item = T;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::from_enumerable(CollectionEnumerable::new(self))
    }
}

impl<'a, K: Clone + 'a, V: Clone + 'a, S: 'a> IntoSequence<'a> for &'a HashMap<K, V, S> {
    type Item = (K, V);

    #[inline]
    fn into_sequence(self) -> Sequence<'a, (K, V)> {
        Sequence::from_enumerable(EntryEnumerable::new(self))
    }
}

impl<'a, K: Clone + 'a, V: Clone + 'a> IntoSequence<'a> for &'a BTreeMap<K, V> {
    type Item = (K, V);

    #[inline]
    fn into_sequence(self) -> Sequence<'a, (K, V)> {
        Sequence::from_enumerable(EntryEnumerable::new(self))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet};

    use crate::{Sequence, Shape};

    #[test]
    fn sets_are_sequential() {
        let set: HashSet<_> = [1, 2, 3].into();
        let seq = Sequence::of(&set);

        assert_eq!(seq.shape(), Shape::Collection);
        assert!(!seq.is_indexed());

        let mut items: Vec<_> = seq.iter().collect();
        items.sort();
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn heap() {
        let heap: BinaryHeap<_> = [5, 1, 9].into();
        let mut items: Vec<_> = Sequence::of(&heap).iter().collect();
        items.sort();

        assert_eq!(items, [1, 5, 9]);
    }

    #[test]
    fn maps_yield_entries() {
        let map: BTreeMap<_, _> = [("b", 2), ("a", 1)].into();
        let seq = Sequence::of(&map);

        assert_eq!(seq.shape(), Shape::Map);
        assert_eq!(seq.iter().collect::<Vec<_>>(), [("a", 1), ("b", 2)]);

        let map: HashMap<_, _> = [(1, "one")].into();
        assert_eq!(Sequence::of(&map).last(), Ok((1, "one")));
    }
}
