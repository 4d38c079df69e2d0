use crate::Result;

/// A cursor over a sequence.
///
/// This trait requires three methods:
///
/// - [`move_next`](Enumerator::move_next): attempts to advance to the next element and returns
///   whether there is one.
/// - [`current`](Enumerator::current): returns the element the cursor is positioned on.
/// - [`close`](Enumerator::close): releases whatever the cursor holds.
///
/// The lifecycle is a small state machine. A fresh enumerator is positioned *before* the first
/// element, so [`current`](Enumerator::current) fails until [`move_next`](Enumerator::move_next)
/// returns `true`. Once [`move_next`](Enumerator::move_next) returns `false`, the enumerator is
/// closed for good: every later call returns `false` too, and [`current`](Enumerator::current)
/// fails again. To enumerate a second time, ask the [`Sequence`](crate::Sequence) for a new
/// enumerator instead.
///
/// The protocol is synchronous and single-threaded. Cancellation is cooperative: stop calling
/// [`move_next`](Enumerator::move_next) and call [`close`](Enumerator::close).
/// Most callers never drive an enumerator by hand; [`Iter`](crate::Iter) does it and closes
/// the enumerator when dropped, including on early exit.
///
/// # Implementing
///
/// Keep the position in the struct, scan forward from it in
/// [`move_next`](Enumerator::move_next), and remember the element found.
///
/// ```
/// use enumerable::{Enumerator, Error, Result};
///
/// /// Counts down to one.
/// struct Countdown {
///     next: u32,
///     current: Option<u32>,
/// }
///
/// impl Enumerator for Countdown {
///     type Item = u32;
///
///     fn move_next(&mut self) -> bool {
///         if self.next == 0 {
///             self.close();
///             return false;
///         }
///
///         self.current = Some(self.next);
///         self.next -= 1;
///         true
///     }
///
///     fn current(&self) -> Result<&u32> {
///         self.current.as_ref().ok_or(Error::NotPositioned)
///     }
///
///     fn close(&mut self) {
///         self.next = 0;
///         self.current = None;
///     }
/// }
///
/// let mut countdown = Countdown { next: 2, current: None };
///
/// assert!(countdown.current().is_err());
/// assert!(countdown.move_next());
/// assert_eq!(countdown.current(), Ok(&2));
/// assert!(countdown.move_next());
/// assert_eq!(countdown.current(), Ok(&1));
/// assert!(!countdown.move_next());
/// assert!(!countdown.move_next());
/// assert!(countdown.current().is_err());
/// ```
pub trait Enumerator {
    /// The type of the elements.
    type Item;

    /// Advances to the next element.
    ///
    /// Returns `true` if the cursor now rests on an element, or `false` if the sequence is
    /// exhausted. A `false` is permanent.
    fn move_next(&mut self) -> bool;

    /// Returns the element the cursor rests on.
    ///
    /// # Errors
    ///
    /// [`Error::NotPositioned`](crate::Error::NotPositioned) before the first successful
    /// [`move_next`](Enumerator::move_next), or after it returned `false`.
    fn current(&self) -> Result<&Self::Item>;

    /// Releases any resource held by the cursor and closes it.
    ///
    /// Idempotent. Calling it on a drained enumerator, or never calling it at all, is fine.
    fn close(&mut self);
}

impl<E: Enumerator + ?Sized> Enumerator for Box<E> {
    type Item = E::Item;

    #[inline]
    fn move_next(&mut self) -> bool {
        (**self).move_next()
    }

    #[inline]
    fn current(&self) -> Result<&Self::Item> {
        (**self).current()
    }

    #[inline]
    fn close(&mut self) {
        (**self).close()
    }
}

impl<E: Enumerator + ?Sized> Enumerator for &mut E {
    type Item = E::Item;

    #[inline]
    fn move_next(&mut self) -> bool {
        (**self).move_next()
    }

    #[inline]
    fn current(&self) -> Result<&Self::Item> {
        (**self).current()
    }

    #[inline]
    fn close(&mut self) {
        (**self).close()
    }
}
