use crate::{Enumerable, Enumerator, IteratorEnumerator, Sequence, Shape, TextUnit};

/// The characters of a text.
///
/// This struct is created by [`Sequence::chars()`].
#[derive(Debug, Clone)]
pub struct CharsEnumerable<S> {
    text: S,
}

impl<S: AsRef<str>> CharsEnumerable<S> {
    /// Creates a view of the characters of `text`.
    #[inline]
    pub const fn new(text: S) -> Self {
        CharsEnumerable { text }
    }
}

impl<S: AsRef<str>> Enumerable<char> for CharsEnumerable<S> {
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = char> + '_> {
        Box::new(IteratorEnumerator::new(self.text.as_ref().chars()))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Text(TextUnit::Chars)
    }
}

impl<'a> Sequence<'a, char> {
    /// Views `text` as its Unicode scalar values.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::Sequence;
    ///
    /// let chars = Sequence::chars("héllo");
    ///
    /// assert_eq!(chars.element_at(1), Ok('é'));
    /// assert_eq!(chars.last(), Ok('o'));
    /// ```
    #[inline]
    pub fn chars<S>(text: S) -> Self
    where
        S: AsRef<str> + 'a,
    {
        Sequence::from_enumerable(CharsEnumerable::new(text))
    }
}
