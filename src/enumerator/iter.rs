use std::fmt;

use tracing::warn;

use super::Enumerator;

/// An [`Iterator`] driving an [`Enumerator`], closing it when dropped.
///
/// This struct is created by [`Sequence::iter()`](crate::Sequence::iter) and
/// [`Iter::new()`]. Dropping it releases the enumerator on every exit path, so abandoning a
/// loop early with `break`, `return` or `?` never leaks the cursor.
///
/// # Examples
///
/// ```
/// use enumerable::Sequence;
///
/// let words = Sequence::words("the noble and the singer");
///
/// // Only two words are pulled, then the enumerator is closed.
/// let first_two: Vec<_> = words.iter().take(2).collect();
/// assert_eq!(first_two, ["the", "noble"]);
/// ```
pub struct Iter<'s, T> {
    enumerator: Box<dyn Enumerator<Item = T> + 's>,
}

impl<'s, T> Iter<'s, T> {
    /// Wraps an enumerator, taking over the duty to close it.
    #[inline]
    pub fn new(enumerator: Box<dyn Enumerator<Item = T> + 's>) -> Self {
        Iter { enumerator }
    }

    /// Borrows the enumerator itself, for walks that must not clone every element.
    /// It is still closed when `self` is dropped.
    #[inline]
    pub(crate) fn cursor(&mut self) -> &mut (dyn Enumerator<Item = T> + 's) {
        &mut *self.enumerator
    }
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if !self.enumerator.move_next() {
            return None;
        }

        match self.enumerator.current() {
            Ok(item) => Some(item.clone()),
            // The enumerator broke its protocol. Iteration ends here.
            Err(error) => {
                warn!(%error, "enumerator advanced without an element");
                None
            }
        }
    }
}

impl<T> Drop for Iter<'_, T> {
    #[inline]
    fn drop(&mut self) {
        self.enumerator.close();
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::Iter;
    use crate::{Enumerator, Error, Result, test_utils};

    /// Counts how often it was closed.
    struct Tracked {
        remaining: u32,
        current: Option<u32>,
        closes: Rc<Cell<u32>>,
    }

    impl Enumerator for Tracked {
        type Item = u32;

        fn move_next(&mut self) -> bool {
            if self.remaining == 0 {
                self.current = None;
                return false;
            }
            self.current = Some(self.remaining);
            self.remaining -= 1;
            true
        }

        fn current(&self) -> Result<&u32> {
            self.current.as_ref().ok_or(Error::NotPositioned)
        }

        fn close(&mut self) {
            self.remaining = 0;
            self.current = None;
            self.closes.set(self.closes.get() + 1);
        }
    }

    fn tracked(remaining: u32, closes: &Rc<Cell<u32>>) -> Iter<'static, u32> {
        Iter::new(Box::new(Tracked {
            remaining,
            current: None,
            closes: Rc::clone(closes),
        }))
    }

    #[test]
    fn closes_after_full_drain() {
        let closes = Rc::new(Cell::new(0));
        let items: Vec<_> = tracked(3, &closes).collect();

        assert_eq!(items, [3, 2, 1]);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn closes_on_early_exit() {
        let closes = Rc::new(Cell::new(0));

        let found = (|| {
            for item in tracked(10, &closes) {
                if item == 8 {
                    return Some(item);
                }
            }
            None
        })();

        assert_eq!(found, Some(8));
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn closes_when_never_advanced() {
        let closes = Rc::new(Cell::new(0));
        drop(tracked(10, &closes));

        assert_eq!(closes.get(), 1);
    }

    /// Claims to advance but never has an element.
    struct Hollow {
        advances: Rc<Cell<u32>>,
    }

    impl Enumerator for Hollow {
        type Item = u32;

        fn move_next(&mut self) -> bool {
            self.advances.set(self.advances.get() + 1);
            true
        }

        fn current(&self) -> Result<&u32> {
            Err(Error::NotPositioned)
        }

        fn close(&mut self) {}
    }

    #[test]
    fn broken_enumerator_ends_iteration() {
        test_utils::init_test_logging();

        let advances = Rc::new(Cell::new(0));
        let items: Vec<_> = Iter::new(Box::new(Hollow {
            advances: Rc::clone(&advances),
        }))
        .collect();

        assert!(items.is_empty());
        assert_eq!(advances.get(), 1);
    }
}
