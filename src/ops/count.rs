use crate::{Iter, Sequence, sequence::Access};

impl<T> Sequence<'_, T> {
    /// Returns the number of elements.
    ///
    /// Free for an indexed source; any other source is walked, without cloning its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::Sequence;
    ///
    /// assert_eq!(Sequence::of(&[1, 2, 3]).count(), 3);
    /// assert_eq!(Sequence::lines("a\nb\n").count(), 2);
    /// ```
    pub fn count(&self) -> usize {
        match self.access() {
            Access::Indexed(source) => source.len(),
            Access::Sequential(source) => {
                let mut guard = Iter::new(source.enumerator());
                let cursor = guard.cursor();
                let mut count = 0;

                while cursor.move_next() {
                    count += 1;
                }

                count
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Sequence, test_utils};

    #[test]
    fn both_paths() {
        for seq in test_utils::every_capability(&["a", "b"]) {
            assert_eq!(seq.count(), 2);
        }

        assert_eq!(Sequence::<()>::empty().count(), 0);
        assert_eq!(Sequence::singleton(()).count(), 1);
    }

    #[test]
    fn sequential_count_releases_the_cursor() {
        let (seq, pulls) = test_utils::counting(&[(), ()]);

        assert_eq!(seq.count(), 2);
        assert_eq!(pulls.get(), 3);
        assert_eq!(test_utils::open_cursors(), 0);
    }
}
