use tracing::trace;

use crate::{Enumerator, Error, Iter, Result, Sequence, sequence::Access};

impl<T: Clone> Sequence<'_, T> {
    /// Returns the last element.
    ///
    /// An indexed source reads its final slot directly; any other source is walked to
    /// the end.
    ///
    /// # Errors
    ///
    /// [`Error::NoElements`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::{Error, Sequence};
    ///
    /// assert_eq!(Sequence::of(&[-10, 2, 4, 3, 0, 2]).last(), Ok(2));
    /// assert_eq!(Sequence::of_iterable(|| 0..5).last(), Ok(4));
    /// assert_eq!(Sequence::of(&Vec::<i32>::new()).last(), Err(Error::NoElements));
    /// ```
    pub fn last(&self) -> Result<T> {
        match self.access() {
            Access::Indexed(source) => {
                trace!(shape = %source.shape(), "last: indexed read");
                match source.len() {
                    0 => Err(Error::NoElements),
                    len => source.get(len - 1),
                }
            }
            Access::Sequential(source) => {
                trace!(shape = %source.shape(), "last: sequential walk");
                Iter::new(source.enumerator())
                    .last()
                    .ok_or(Error::NoElements)
            }
        }
    }

    /// Returns the last element satisfying `predicate`.
    ///
    /// The whole sequence is walked, whatever its capabilities, and only matching elements
    /// are cloned. `predicate` is never called on an empty sequence.
    ///
    /// # Errors
    ///
    /// [`Error::NoMatch`] if no element satisfies `predicate`, including when the sequence is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::{Error, Sequence};
    ///
    /// let seq = Sequence::of(&[-10, 2, 4, 3, 0, 2]);
    ///
    /// assert_eq!(seq.last_where(|&n| n % 2 == 1), Ok(3));
    /// assert_eq!(seq.last_where(|&n| n > 100), Err(Error::NoMatch));
    /// ```
    pub fn last_where<P>(&self, predicate: P) -> Result<T>
    where
        P: FnMut(&T) -> bool,
    {
        trace!(shape = %self.shape(), "last_where: walk");
        last_match(self.enumerator(), predicate)
    }
}

fn last_match<T, P>(
    enumerator: Box<dyn Enumerator<Item = T> + '_>,
    mut predicate: P,
) -> Result<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut guard = Iter::new(enumerator);
    let cursor = guard.cursor();
    let mut found = None;

    while cursor.move_next() {
        let item = cursor.current()?;
        if predicate(item) {
            found = Some(item.clone());
        }
    }

    found.ok_or(Error::NoMatch)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use test_case::test_case;

    use crate::{Error, Sequence, test_utils};

    #[test_case(&[], Err(Error::NoElements) ; "empty")]
    #[test_case(&[5], Ok(5) ; "single")]
    #[test_case(&[-10, 2, 4, 3, 0, 2], Ok(2) ; "many")]
    fn last_on_every_path(items: &[i32], expected: Result<i32, Error>) {
        for seq in test_utils::every_capability(items) {
            assert_eq!(seq.last(), expected, "{seq:?}");
            assert_eq!(seq.last(), expected, "repeat on {seq:?}");
        }
    }

    #[test_case(&[], Err(Error::NoMatch) ; "empty")]
    #[test_case(&[2, 4], Err(Error::NoMatch) ; "no match")]
    #[test_case(&[1, 2, 3, 4], Ok(3) ; "last of several matches")]
    #[test_case(&[7], Ok(7) ; "single match")]
    fn last_odd_on_every_path(items: &[i32], expected: Result<i32, Error>) {
        for seq in test_utils::every_capability(items) {
            assert_eq!(seq.last_where(|n| n % 2 != 0), expected, "{seq:?}");
        }
    }

    #[test]
    fn predicate_never_runs_on_empty_source() {
        let calls = Cell::new(0);
        let result = Sequence::<i32>::empty().last_where(|_| {
            calls.set(calls.get() + 1);
            true
        });

        assert_eq!(result, Err(Error::NoMatch));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn indexed_last_reads_one_slot() {
        let seq = Sequence::of(&[1, 2, 3]);

        assert!(seq.is_indexed());
        assert_eq!(seq.last(), Ok(3));
    }

    #[test]
    fn sequential_walk_releases_the_cursor() {
        let (seq, pulls) = test_utils::counting(&[1, 2, 3]);

        assert_eq!(seq.last(), Ok(3));
        assert_eq!(seq.last_where(|&n| n < 3), Ok(2));
        assert_eq!(pulls.get(), 8);
        assert_eq!(test_utils::open_cursors(), 0);
    }
}
