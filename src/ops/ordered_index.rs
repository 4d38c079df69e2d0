use hashbrown::{HashTable, hash_table::Entry};

use crate::{Equality, RandomAccess};

/// Entries in first-insertion order, looked up through an [`Equality`] strategy.
///
/// The entries live in an append-only vector; the hash table only stores positions into it,
/// so the insertion order is the vector's order.
pub(crate) struct OrderedIndex<K, V> {
    entries: Vec<(K, V)>,
    table: HashTable<usize>,
}

impl<K, V> OrderedIndex<K, V> {
    #[inline]
    pub(crate) const fn new() -> Self {
        OrderedIndex {
            entries: Vec::new(),
            table: HashTable::new(),
        }
    }

    /// Finds the entry whose key equals `key`, or appends one made by `default`.
    ///
    /// An existing entry keeps its first key; `key` is then dropped.
    /// Returns the position of the entry and whether it was just appended.
    pub(crate) fn find_or_insert_with<Q>(
        &mut self,
        key: K,
        equality: &Q,
        default: impl FnOnce() -> V,
    ) -> (usize, bool)
    where
        Q: Equality<K> + ?Sized,
    {
        let Self { entries, table } = self;
        let hash = equality.hash(&key);

        match table.entry(
            hash,
            |&index| equality.equals(&entries[index].0, &key),
            |&index| equality.hash(&entries[index].0),
        ) {
            Entry::Occupied(entry) => (*entry.get(), false),
            Entry::Vacant(entry) => {
                let index = entries.len();
                entries.push((key, default()));
                entry.insert(index);
                (index, true)
            }
        }
    }

    /// Returns the value of the entry whose key equals `key`, appending one made by
    /// `default` if there is none.
    #[inline]
    pub(crate) fn get_or_insert_with<Q>(
        &mut self,
        key: K,
        equality: &Q,
        default: impl FnOnce() -> V,
    ) -> &mut V
    where
        Q: Equality<K> + ?Sized,
    {
        let (index, _) = self.find_or_insert_with(key, equality, default);
        &mut self.entries[index].1
    }

    /// Returns the position of the entry whose key equals `key`.
    pub(crate) fn find<Q>(&self, key: &K, equality: &Q) -> Option<usize>
    where
        Q: Equality<K> + ?Sized,
    {
        self.table
            .find(equality.hash(key), |&index| {
                equality.equals(&self.entries[index].0, key)
            })
            .copied()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn entries(&self) -> &[(K, V)] {
        &self.entries
    }

    /// Returns the entries in first-insertion order.
    #[inline]
    pub(crate) fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

// Reads the keys by position.
impl<K, V> RandomAccess for OrderedIndex<K, V> {
    type Item = K;

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&K> {
        self.entries.get(index).map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedIndex;
    use crate::{Natural, equality};

    #[test]
    fn keeps_first_insertion_order() {
        let eq = Natural::new();
        let mut index = OrderedIndex::new();

        for (key, value) in [("b", 1), ("a", 2), ("b", 3), ("c", 4), ("a", 5)] {
            index.get_or_insert_with(key, &eq, Vec::new).push(value);
        }

        assert_eq!(index.len(), 3);
        assert_eq!(
            index.into_entries(),
            [("b", vec![1, 3]), ("a", vec![2, 5]), ("c", vec![4])]
        );
    }

    #[test]
    fn first_key_wins() {
        let eq = equality::from_fns(
            |a: &String, b: &String| a.eq_ignore_ascii_case(b),
            |key: &String| key.len() as u64,
        );
        let mut index = OrderedIndex::new();

        assert_eq!(index.find_or_insert_with("Tim".to_owned(), &eq, || ()), (0, true));
        assert_eq!(index.find_or_insert_with("TIM".to_owned(), &eq, || ()), (0, false));
        assert_eq!(index.find_or_insert_with("Tom".to_owned(), &eq, || ()), (1, true));
        assert_eq!(
            index.into_entries(),
            [("Tim".to_owned(), ()), ("Tom".to_owned(), ())]
        );
    }

    #[test]
    fn survives_growth() {
        let eq = Natural::new();
        let mut index = OrderedIndex::new();

        for n in 0..1000 {
            *index.get_or_insert_with(n % 100, &eq, || 0) += 1;
        }

        let entries = index.into_entries();
        assert_eq!(entries.len(), 100);
        assert!(entries.iter().enumerate().all(|(i, &(k, v))| k == i && v == 10));
    }
}
