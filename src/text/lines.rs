use crate::{
    Enumerable, Enumerator, Result, Sequence, Shape, TextUnit, enumerator::Slot,
};

/// An [`Enumerator`] over the lines of a text.
///
/// Lines end at `\n`, `\r\n`, or a lone `\r`, and never include their terminator.
/// A terminator at the very end does not start another, empty, line.
#[derive(Debug, Clone)]
pub struct LineEnumerator<'s> {
    text: &'s str,
    position: usize,
    slot: Slot<String>,
}

impl<'s> LineEnumerator<'s> {
    /// Creates an enumerator positioned before the first line of `text`.
    #[inline]
    pub const fn new(text: &'s str) -> Self {
        LineEnumerator {
            text,
            position: 0,
            slot: Slot::new(),
        }
    }
}

impl Enumerator for LineEnumerator<'_> {
    type Item = String;

    fn move_next(&mut self) -> bool {
        if self.slot.is_closed() || self.position >= self.text.len() {
            self.close();
            return false;
        }

        let rest = &self.text[self.position..];
        let (line, consumed) = match rest.find(['\n', '\r']) {
            Some(end) if rest[end..].starts_with("\r\n") => (&rest[..end], end + 2),
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };

        self.slot.set(line.to_owned());
        self.position += consumed;
        true
    }

    #[inline]
    fn current(&self) -> Result<&String> {
        self.slot.get()
    }

    #[inline]
    fn close(&mut self) {
        self.position = self.text.len();
        self.slot.close();
    }
}

/// The lines of a text.
///
/// This struct is created by [`Sequence::lines()`].
#[derive(Debug, Clone)]
pub struct LinesEnumerable<S> {
    text: S,
}

impl<S: AsRef<str>> LinesEnumerable<S> {
    /// Creates a view of the lines of `text`.
    #[inline]
    pub const fn new(text: S) -> Self {
        LinesEnumerable { text }
    }
}

impl<S: AsRef<str>> Enumerable<String> for LinesEnumerable<S> {
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = String> + '_> {
        Box::new(LineEnumerator::new(self.text.as_ref()))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Text(TextUnit::Lines)
    }
}

impl<'a> Sequence<'a, String> {
    /// Views `text` as its lines.
    ///
    /// See [`LineEnumerator`] for where lines end.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::Sequence;
    ///
    /// let lines = Sequence::lines("first\r\nsecond\n\nlast\n");
    ///
    /// assert_eq!(lines.iter().collect::<Vec<_>>(), ["first", "second", "", "last"]);
    /// ```
    #[inline]
    pub fn lines<S>(text: S) -> Self
    where
        S: AsRef<str> + 'a,
    {
        Sequence::from_enumerable(LinesEnumerable::new(text))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::{Sequence, Shape, TextUnit};

    #[test_case("", &[] ; "empty")]
    #[test_case("one", &["one"] ; "no terminator")]
    #[test_case("one\n", &["one"] ; "trailing newline")]
    #[test_case("\n", &[""] ; "lone newline")]
    #[test_case("a\rb\r\nc\nd", &["a", "b", "c", "d"] ; "mixed terminators")]
    #[test_case("a\n\n", &["a", ""] ; "blank line before the end")]
    #[test_case("\r\n\r\n", &["", ""] ; "crlf only")]
    fn splits(text: &str, expected: &[&str]) {
        let lines: Vec<String> = Sequence::lines(text).iter().collect();

        assert_eq!(lines, expected);
    }

    #[test]
    fn matches_std_lines_without_lone_carriage_returns() {
        let text = "alpha\nbeta\r\n\ngamma\n";
        let lines = Sequence::lines(text);

        assert_eq!(lines.shape(), Shape::Text(TextUnit::Lines));
        assert!(lines.iter().eq(text.lines().map(String::from)));
    }
}
