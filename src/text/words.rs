use unicode_general_category::{GeneralCategory, get_general_category};

use crate::{Enumerable, Enumerator, Result, Sequence, Shape, TextUnit, enumerator::Slot};

/// Letters of any case or kind, and decimal digits.
///
/// Narrower than [`char::is_alphanumeric`]: superscripts, fractions, roman numerals and
/// combining marks are not part of a word.
fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// An [`Enumerator`] over the words of a text.
///
/// A word is a maximal run of letters (general category `L*`) and decimal digits (`Nd`).
/// Everything else separates words and is skipped, including other numbers like `²` or `Ⅻ`.
///
/// # Examples
///
/// ```
/// use enumerable::{Enumerator, text::WordEnumerator};
///
/// let mut words = WordEnumerator::new("a1 b2!!c3");
/// let mut seen = vec![];
///
/// while words.move_next() {
///     seen.push(words.current().unwrap().clone());
/// }
///
/// assert_eq!(seen, ["a1", "b2", "c3"]);
/// ```
#[derive(Debug, Clone)]
pub struct WordEnumerator<'s> {
    text: &'s str,
    position: usize,
    slot: Slot<String>,
}

impl<'s> WordEnumerator<'s> {
    /// Creates an enumerator positioned before the first word of `text`.
    #[inline]
    pub const fn new(text: &'s str) -> Self {
        WordEnumerator {
            text,
            position: 0,
            slot: Slot::new(),
        }
    }
}

impl Enumerator for WordEnumerator<'_> {
    type Item = String;

    fn move_next(&mut self) -> bool {
        if self.slot.is_closed() {
            return false;
        }

        let rest = &self.text[self.position..];
        let Some(start) = rest.find(is_letter_or_digit) else {
            self.close();
            return false;
        };

        let run = &rest[start..];
        let len = run
            .find(|c: char| !is_letter_or_digit(c))
            .unwrap_or(run.len());

        self.slot.set(run[..len].to_owned());
        self.position += start + len;
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

/// The words of a text.
///
/// This struct is created by [`Sequence::words()`].
#[derive(Debug, Clone)]
pub struct WordsEnumerable<S> {
    text: S,
}

impl<S: AsRef<str>> WordsEnumerable<S> {
    /// Creates a view of the words of `text`.
    #[inline]
    pub const fn new(text: S) -> Self {
        WordsEnumerable { text }
    }
}

impl<S: AsRef<str>> Enumerable<String> for WordsEnumerable<S> {
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = String> + '_> {
        Box::new(WordEnumerator::new(self.text.as_ref()))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Text(TextUnit::Words)
    }
}

impl<'a> Sequence<'a, String> {
    /// Views `text` as its words.
    ///
    /// See [`WordEnumerator`] for what counts as a word.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::Sequence;
    ///
    /// let words = Sequence::words(String::from("the quick, brown fox"));
    ///
    /// assert_eq!(words.count(), 4);
    /// assert_eq!(words.last(), Ok(String::from("fox")));
    /// ```
    #[inline]
    pub fn words<S>(text: S) -> Self
    where
        S: AsRef<str> + 'a,
    {
        Sequence::from_enumerable(WordsEnumerable::new(text))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::WordEnumerator;
    use crate::{Enumerator, Sequence, Shape, TextUnit};

    fn words(text: &str) -> Vec<String> {
        Sequence::words(text).iter().collect()
    }

    #[test_case("", &[] ; "empty")]
    #[test_case("!!", &[] ; "no alphanumeric run")]
    #[test_case("a1 b2!!c3", &["a1", "b2", "c3"] ; "mixed separators")]
    #[test_case("  padded  ", &["padded"] ; "padding")]
    #[test_case("tail", &["tail"] ; "run at end of input")]
    #[test_case("naïve café", &["naïve", "café"] ; "non ascii letters")]
    #[test_case("x_y", &["x", "y"] ; "underscore separates")]
    #[test_case("x²y", &["x", "y"] ; "superscript separates")]
    #[test_case("½", &[] ; "fraction is not a digit")]
    #[test_case("Ⅻ", &[] ; "letter number is not a letter")]
    #[test_case("ǅemal ٣4", &["ǅemal", "٣4"] ; "titlecase letter and arabic indic digit")]
    fn tokenizes(text: &str, expected: &[&str]) {
        assert_eq!(words(text), expected);
    }

    #[test]
    fn stays_closed() {
        let mut e = WordEnumerator::new("one");

        assert!(e.move_next());
        assert_eq!(e.current().map(String::as_str), Ok("one"));
        assert!(!e.move_next());
        assert!(!e.move_next());
        assert!(e.current().is_err());
    }

    #[test]
    fn sequential_view() {
        let words = Sequence::words("a b");

        assert_eq!(words.shape(), Shape::Text(TextUnit::Words));
        assert!(!words.is_indexed());
    }
}

#[cfg(test)]
mod proptests {
    use proptest::{collection::vec as propvec, prelude::*, sample::select};

    use crate::Sequence;

    const WORD_CHARS: &[char] = &['a', 'Z', 'é', 'ж', 'ǅ', '中', '7', '٣'];
    const SEPARATORS: &[char] = &[' ', '!', '_', '\n', '²', '½', 'Ⅻ', '\u{301}'];

    fn run(chars: &'static [char], max: usize) -> impl Strategy<Value = String> {
        propvec(select(chars), 1..max).prop_map(String::from_iter)
    }

    proptest! {
        #[test]
        fn words_are_the_runs_between_separators(
            words in propvec(run(WORD_CHARS, 6), 0..8),
            gaps in propvec(run(SEPARATORS, 4), 9),
        ) {
            let mut text = gaps[0].clone();
            for (word, gap) in words.iter().zip(&gaps[1..]) {
                text.push_str(word);
                text.push_str(gap);
            }

            let actual: Vec<String> = Sequence::words(text.as_str()).iter().collect();
            prop_assert_eq!(actual, words);
        }
    }
}
