use super::Shape;
use crate::{Enumerator, Result};

/// A source able to mint fresh [`Enumerator`]s on demand.
///
/// Every call to [`enumerator`](Enumerable::enumerator) must return an independent cursor;
/// two live cursors over the same source must not interfere with each other.
/// Wrap an implementation with [`Sequence::from_enumerable()`](crate::Sequence::from_enumerable)
/// to get the full set of operators.
///
/// # Examples
///
/// ```
/// use enumerable::{Enumerable, Enumerator, IteratorEnumerator, Sequence};
///
/// /// The first `n` square numbers.
/// struct Squares(u64);
///
/// impl Enumerable<u64> for Squares {
///     fn enumerator(&self) -> Box<dyn Enumerator<Item = u64> + '_> {
///         Box::new(IteratorEnumerator::new((1..=self.0).map(|n| n * n)))
///     }
/// }
///
/// let squares = Sequence::from_enumerable(Squares(4));
///
/// assert!(!squares.is_indexed());
/// assert_eq!(squares.iter().collect::<Vec<_>>(), [1, 4, 9, 16]);
/// assert_eq!(squares.element_at(2), Ok(9));
/// ```
pub trait Enumerable<T> {
    /// Creates a new cursor positioned before the first element.
    fn enumerator(&self) -> Box<dyn Enumerator<Item = T> + '_>;

    /// Describes what kind of source this is.
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Custom
    }
}

/// An [`Enumerable`] that also knows its length and can read any position directly.
///
/// Wrap an implementation with [`Sequence::from_indexed()`](crate::Sequence::from_indexed)
/// so that terminal operators take the constant-time path.
pub trait IndexedEnumerable<T>: Enumerable<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Reads the element at `index`.
    ///
    /// # Errors
    ///
    /// An error of kind [`Bounds`](crate::ErrorKind::Bounds) (or whatever the container
    /// reports for an out-of-range read) if `index >= len()`.
    fn get(&self, index: usize) -> Result<T>;

    /// Returns `true` if there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
