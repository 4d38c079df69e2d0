use std::{convert, fmt};

use tracing::trace;

use crate::{
    Enumerable, Enumerator, Equality, Error, Grouping, IntoSequence, IteratorEnumerator, Natural,
    OrNatural, Result, Sequence, Shape, ops::OrderedIndex,
};

/// A grouping of a sequence's elements by key, not evaluated yet.
///
/// Configure it with [`element`](GroupBy::element), [`equality`](GroupBy::equality) and
/// [`result`](GroupBy::result), then turn it into a sequence of [`Grouping`]s with
/// [`IntoSequence`], or into a sequence of results with [`result`](GroupBy::result).
///
/// Nothing is read from the source until the resulting sequence is first advanced.
/// Each enumeration then makes one full pass over the source, because a later element may
/// still extend an earlier group. Groups come out in the order their keys were first seen,
/// and the elements of each group in the order they were encountered.
///
/// This struct is created by [`Sequence::group_by()`]. See its documentation for more.
#[must_use = "a grouping does nothing until it is enumerated"]
pub struct GroupBy<'a, T, FK, FE = fn(T) -> T, Q = Natural> {
    source: Sequence<'a, T>,
    key_selector: FK,
    element_selector: FE,
    equality: Q,
}

impl<'a, T> Sequence<'a, T> {
    /// Groups the elements by the key `key_selector` computes for each.
    ///
    /// Keys are compared with their natural [`Eq`] and [`Hash`] unless another
    /// [`Equality`] is given. An absent key is simply `None`: it gets its own group like
    /// any other key.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::{IntoSequence, Sequence};
    ///
    /// let scores = [("Tim", 55), ("Chris", 49), ("Robert", -100), ("Chris", 24), ("Tim", 25)];
    ///
    /// let groups: Vec<_> = Sequence::of(&scores)
    ///     .group_by(|&(name, _)| name)
    ///     .element(|(_, score)| score)
    ///     .into_sequence()
    ///     .iter()
    ///     .map(|group| (*group.key(), group.as_slice().to_vec()))
    ///     .collect();
    ///
    /// assert_eq!(
    ///     groups,
    ///     [("Tim", vec![55, 25]), ("Chris", vec![49, 24]), ("Robert", vec![-100])]
    /// );
    /// ```
    #[inline]
    pub fn group_by<K, FK>(&self, key_selector: FK) -> GroupBy<'a, T, FK>
    where
        FK: Fn(&T) -> K,
    {
        GroupBy {
            source: self.clone(),
            key_selector,
            element_selector: convert::identity,
            equality: Natural::new(),
        }
    }
}

impl<'a, T, FK, FE, Q> GroupBy<'a, T, FK, FE, Q> {
    /// Puts `element_selector(element)` into the groups instead of each element itself.
    #[inline]
    pub fn element<E, G>(self, element_selector: G) -> GroupBy<'a, T, FK, G, Q>
    where
        G: Fn(T) -> E,
    {
        GroupBy {
            source: self.source,
            key_selector: self.key_selector,
            element_selector,
            equality: self.equality,
        }
    }

    /// Compares keys with `equality` instead of their natural equality.
    #[inline]
    pub fn equality<R>(self, equality: R) -> GroupBy<'a, T, FK, FE, R> {
        GroupBy {
            source: self.source,
            key_selector: self.key_selector,
            element_selector: self.element_selector,
            equality,
        }
    }

    /// Compares keys with `equality` if given, and with their natural equality otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::{IntoSequence, Natural, Sequence};
    ///
    /// let seq = Sequence::of(&["a", "b", "a"]);
    /// let count = |equality: Option<Natural>| {
    ///     seq.group_by(|s| *s).equality_or_natural(equality).into_sequence().count()
    /// };
    ///
    /// assert_eq!(count(None), 2);
    /// assert_eq!(count(Some(Natural::new())), 2);
    /// ```
    #[inline]
    pub fn equality_or_natural<R>(
        self,
        equality: Option<R>,
    ) -> GroupBy<'a, T, FK, FE, OrNatural<R>> {
        self.equality(equality.into())
    }

    /// Maps each group through `result_selector`, which receives the key and the group's
    /// elements as an indexed sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::Sequence;
    ///
    /// let totals: Vec<_> = Sequence::of(&[("a", 1), ("b", 2), ("a", 3)])
    ///     .group_by(|&(key, _)| key)
    ///     .element(|(_, n)| n)
    ///     .result(|key, group| format!("{key}={}", group.iter().sum::<i32>()))
    ///     .iter()
    ///     .collect();
    ///
    /// assert_eq!(totals, ["a=4", "b=2"]);
    /// ```
    pub fn result<K, E, R, FR>(self, result_selector: FR) -> Sequence<'a, R>
    where
        T: Clone + 'a,
        K: 'a,
        E: Clone + 'a,
        R: 'a,
        FK: Fn(&T) -> K + 'a,
        FE: Fn(T) -> E + 'a,
        Q: Equality<K> + 'a,
        FR: Fn(&K, Sequence<'a, E>) -> R + 'a,
    {
        Sequence::from_enumerable(GroupedResults {
            grouped: self.into_grouped(),
            result_selector,
        })
    }

    #[inline]
    fn into_grouped(self) -> Grouped<'a, T, FK, FE, Q> {
        Grouped {
            source: self.source,
            key_selector: self.key_selector,
            element_selector: self.element_selector,
            equality: self.equality,
        }
    }
}

impl<'a, T, K, E, FK, FE, Q> IntoSequence<'a> for GroupBy<'a, T, FK, FE, Q>
where
    T: Clone + 'a,
    K: 'a,
    E: 'a,
    FK: Fn(&T) -> K + 'a,
    FE: Fn(T) -> E + 'a,
    Q: Equality<K> + 'a,
{
    type Item = Grouping<K, E>;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, Grouping<K, E>> {
        Sequence::from_enumerable(self.into_grouped())
    }
}

impl<T, FK, FE, Q: fmt::Debug> fmt::Debug for GroupBy<'_, T, FK, FE, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupBy")
            .field("source", &self.source)
            .field("equality", &self.equality)
            .finish_non_exhaustive()
    }
}

struct Grouped<'a, T, FK, FE, Q> {
    source: Sequence<'a, T>,
    key_selector: FK,
    element_selector: FE,
    equality: Q,
}

impl<T, FK, FE, Q> Grouped<'_, T, FK, FE, Q> {
    /// The single forward pass.
    fn run<K, E>(&self) -> Vec<Grouping<K, E>>
    where
        T: Clone,
        FK: Fn(&T) -> K,
        FE: Fn(T) -> E,
        Q: Equality<K>,
    {
        let mut index = OrderedIndex::new();

        for item in &self.source {
            let key = (self.key_selector)(&item);
            let element = (self.element_selector)(item);
            index
                .get_or_insert_with(key, &self.equality, Vec::new)
                .push(element);
        }

        trace!(
            source = %self.source.shape(),
            groups = index.len(),
            "grouping pass done"
        );

        index
            .into_entries()
            .into_iter()
            .map(|(key, elements)| Grouping::new(key, elements))
            .collect()
    }
}

impl<'a, T, K, E, FK, FE, Q> Enumerable<Grouping<K, E>> for Grouped<'a, T, FK, FE, Q>
where
    T: Clone,
    K: 'a,
    E: 'a,
    FK: Fn(&T) -> K,
    FE: Fn(T) -> E,
    Q: Equality<K>,
{
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = Grouping<K, E>> + '_> {
        Box::new(DeferredEnumerator::new(|| self.run().into_iter()))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Grouped
    }
}

struct GroupedResults<'a, T, FK, FE, Q, FR> {
    grouped: Grouped<'a, T, FK, FE, Q>,
    result_selector: FR,
}

impl<'a, T, K, E, R, FK, FE, Q, FR> Enumerable<R> for GroupedResults<'a, T, FK, FE, Q, FR>
where
    T: Clone,
    K: 'a,
    E: Clone + 'a,
    R: 'a,
    FK: Fn(&T) -> K,
    FE: Fn(T) -> E,
    Q: Equality<K>,
    FR: Fn(&K, Sequence<'a, E>) -> R,
{
    fn enumerator(&self) -> Box<dyn Enumerator<Item = R> + '_> {
        Box::new(DeferredEnumerator::new(|| {
            self.grouped
                .run()
                .into_iter()
                .map(|group| (self.result_selector)(group.key(), group.as_sequence()))
        }))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Grouped
    }
}

/// An [`Enumerator`] that builds its iterator on the first advance.
struct DeferredEnumerator<F, I: Iterator> {
    start: Option<F>,
    running: Option<IteratorEnumerator<I>>,
}

impl<F, I> DeferredEnumerator<F, I>
where
    F: FnOnce() -> I,
    I: Iterator,
{
    #[inline]
    fn new(start: F) -> Self {
        DeferredEnumerator {
            start: Some(start),
            running: None,
        }
    }
}

impl<F, I> Enumerator for DeferredEnumerator<F, I>
where
    F: FnOnce() -> I,
    I: Iterator,
{
    type Item = I::Item;

    fn move_next(&mut self) -> bool {
        if let Some(start) = self.start.take() {
            self.running = Some(IteratorEnumerator::new(start()));
        }

        self.running.as_mut().is_some_and(Enumerator::move_next)
    }

    #[inline]
    fn current(&self) -> Result<&Self::Item> {
        self.running
            .as_ref()
            .map_or(Err(Error::NotPositioned), Enumerator::current)
    }

    #[inline]
    fn close(&mut self) {
        self.start = None;
        if let Some(running) = &mut self.running {
            running.close();
        }
    }
}


#[cfg(test)]
mod proptests {
    use proptest::{collection::vec as propvec, prelude::*};

    use crate::{IntoSequence, test_utils};

    // A linear-scan model of grouping.
    fn model(items: &[(u8, i32)]) -> Vec<(u8, Vec<i32>)> {
        let mut groups: Vec<(u8, Vec<i32>)> = vec![];

        for &(key, value) in items {
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, values)) => values.push(value),
                None => groups.push((key, vec![value])),
            }
        }

        groups
    }

    proptest! {
        #[test]
        fn matches_model(items in propvec((0_u8..8, any::<i32>()), ..64)) {
            let expected = model(&items);

            for seq in test_utils::every_capability(&items) {
                let actual: Vec<_> = seq
                    .group_by(|&(key, _)| key)
                    .element(|(_, value)| value)
                    .into_sequence()
                    .iter()
                    .map(|group| (*group.key(), group.as_slice().to_vec()))
                    .collect();

                prop_assert_eq!(&actual, &expected);
            }
        }
    }
}
