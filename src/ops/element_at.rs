use tracing::trace;

use crate::{Argument, Enumerable, Error, Iter, Result, Sequence, sequence::Access};

impl<T: Clone> Sequence<'_, T> {
    /// Returns the element at the zero-based `index`.
    ///
    /// An indexed source is read directly, and its adapter checks the bounds. Any other
    /// source is walked exactly `index + 1` steps and then released.
    ///
    /// # Errors
    ///
    /// The two paths fail differently when `index` is past the end:
    ///
    /// - indexed arrays and lists: [`Error::IndexOutOfBounds`];
    /// - [groupings](crate::Grouping) and every sequential source:
    ///   [`Error::ArgumentOutOfRange`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::{Argument, Error, Sequence};
    ///
    /// let array = Sequence::of(&[9, 8, 0, -5, 10]);
    /// assert_eq!(array.element_at(4), Ok(10));
    /// assert_eq!(array.element_at(5), Err(Error::IndexOutOfBounds { index: 5, len: 5 }));
    ///
    /// let range = Sequence::of_iterable(|| -4..10);
    /// assert_eq!(range.element_at(3), Ok(-1));
    /// assert_eq!(range.element_at(14), Err(Error::ArgumentOutOfRange(Argument::Index)));
    /// ```
    pub fn element_at(&self, index: usize) -> Result<T> {
        match self.access() {
            Access::Indexed(source) => {
                trace!(shape = %source.shape(), index, "element_at: indexed read");
                source.get(index)
            }
            Access::Sequential(source) => {
                trace!(shape = %source.shape(), index, "element_at: sequential walk");
                walk_to(source, index)
            }
        }
    }

    /// [`element_at`](Sequence::element_at) for hosts whose indices are signed.
    ///
    /// A negative position is never read or walked to. It fails the way the capability
    /// path fails past the end: a bounds error when indexed, an absence error otherwise.
    pub(crate) fn element_at_signed(&self, index: isize) -> Result<T> {
        let Ok(position) = usize::try_from(index) else {
            return Err(match self.access() {
                Access::Indexed(source) => Error::NegativeIndex {
                    index,
                    len: source.len(),
                },
                Access::Sequential(_) => Error::ArgumentOutOfRange(Argument::Index),
            });
        };

        self.element_at(position)
    }
}

fn walk_to<T: Clone>(source: &dyn Enumerable<T>, index: usize) -> Result<T> {
    let mut guard = Iter::new(source.enumerator());
    let cursor = guard.cursor();

    for _ in 0..=index {
        if !cursor.move_next() {
            return Err(Error::ArgumentOutOfRange(Argument::Index));
        }
    }

    cursor.current().cloned()
}

#[cfg(test)]
mod tests {
    use std::collections::{LinkedList, VecDeque};

    use test_case::test_case;

    use crate::{Argument, Error, ErrorKind, Sequence, test_utils};

    #[test_case(&[9, 8, 0, -5, 10], 4, 10 ; "last slot")]
    #[test_case(&[-4], 0, -4 ; "single element")]
    #[test_case(&[3, 1, 2], 1, 1 ; "middle")]
    fn same_element_on_every_path(items: &[i32], index: usize, expected: i32) {
        for seq in test_utils::every_capability(items) {
            assert_eq!(seq.element_at(index), Ok(expected), "{seq:?}");
        }
    }

    #[test]
    fn non_collection_range() {
        let range = Sequence::of_iterable(|| -4..10);

        assert!(!range.is_indexed());
        assert_eq!(range.element_at(3), Ok(-1));
    }

    #[test]
    fn error_kind_follows_the_path() {
        let deque: VecDeque<_> = [1, 2].into();
        let list: LinkedList<_> = [1, 2].into();

        assert_eq!(
            Sequence::of(&deque).element_at(2),
            Err(Error::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(
            Sequence::of(&list).element_at(2),
            Err(Error::ArgumentOutOfRange(Argument::Index))
        );
        assert_eq!(
            Sequence::of(&deque).element_at(usize::MAX).map_err(|e| e.kind()),
            Err(ErrorKind::Bounds)
        );
        assert_eq!(
            Sequence::of(&list).element_at(usize::MAX).map_err(|e| e.kind()),
            Err(ErrorKind::Absence)
        );
    }

    #[test]
    fn walks_exactly_index_plus_one_steps() {
        let (seq, pulls) = test_utils::counting(&[10, 20, 30, 40]);

        assert_eq!(seq.element_at(1), Ok(20));
        assert_eq!(pulls.get(), 2);
        assert_eq!(test_utils::open_cursors(), 0);
    }

    #[test]
    fn releases_the_cursor_when_exhausted() {
        let (seq, pulls) = test_utils::counting(&[1]);

        assert!(seq.element_at(3).is_err());
        assert_eq!(pulls.get(), 2);
        assert_eq!(test_utils::open_cursors(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::{collection::vec as propvec, prelude::*};

    use crate::{ErrorKind, test_utils};

    proptest! {
        #[test]
        fn paths_agree(items in propvec(any::<i16>(), ..16), index in 0_usize..20) {
            let expected = items.get(index).copied();

            for seq in test_utils::every_capability(&items) {
                let actual = seq.element_at(index);
                prop_assert_eq!(actual.clone().ok(), expected);

                if let Err(e) = actual {
                    let kind = if seq.is_indexed() { ErrorKind::Bounds } else { ErrorKind::Absence };
                    prop_assert_eq!(e.kind(), kind);
                }

                // Reading leaves nothing behind.
                prop_assert_eq!(seq.element_at(index).ok(), expected);
            }
        }
    }
}
