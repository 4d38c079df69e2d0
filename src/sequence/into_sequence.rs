use super::Sequence;

/// Conversion into a [`Sequence`].
///
/// This is the adapter registry resolved at compile time: each source shape implements it
/// by wrapping itself in the adapter meant for it.
///
/// | Source | Adapter | Indexed |
/// |---|---|---|
/// | `&[T]`, `&[T; N]`, `&Vec<T>`, `&Box<[T]>` | [`ArrayEnumerable`](crate::adapter::ArrayEnumerable) | yes |
/// | `&VecDeque<T>` | [`ListEnumerable`](crate::adapter::ListEnumerable) | yes |
/// | `&LinkedList<T>` | [`LinkedListEnumerable`](crate::adapter::LinkedListEnumerable) | no |
/// | `&HashSet<T, S>`, `&BTreeSet<T>`, `&BinaryHeap<T>` | [`CollectionEnumerable`](crate::adapter::CollectionEnumerable) | no |
/// | `&HashMap<K, V, S>`, `&BTreeMap<K, V>` | [`EntryEnumerable`](crate::adapter::EntryEnumerable) | no |
/// | [`Grouping<K, E>`](crate::Grouping) | its own element slice | yes |
/// | [`GroupBy`](crate::GroupBy) | the grouping engine | no |
/// | [`LinkedSet<T>`](crate::LinkedSet) | its insertion-ordered elements | yes |
/// | [`Sequence<T>`], `&Sequence<T>` | itself | unchanged |
///
/// Slices of primitive scalars take the array adapter here too. Their dedicated
/// [`ScalarArrayEnumerable`](crate::adapter::ScalarArrayEnumerable) is picked by
/// [`Sequence::of_scalars`], or by [`adapter::adapt`](crate::adapter::adapt) when the source
/// is only known as `&dyn Any`. So the same `Vec<i32>` reports [`Shape::Array`](crate::Shape)
/// through this trait and [`Shape::ScalarArray`](crate::Shape) through `adapt`, with the same
/// elements either way.
///
/// Sources without a blanket-compatible shape have dedicated constructors:
/// [`Sequence::of_scalars`], [`Sequence::of_list`], [`Sequence::of_iterable`],
/// [`Sequence::of_iter`], [`Sequence::of_enumerator`], and the text views
/// [`Sequence::chars`], [`Sequence::words`] and [`Sequence::lines`].
///
/// # Usage in trait bounds
///
/// Using `IntoSequence` in trait bounds allows a function to accept any adaptable source
/// without making the caller adapt it first.
///
/// ```
/// use enumerable::IntoSequence;
///
/// fn last_word<'a, S: IntoSequence<'a, Item = &'a str>>(source: S) -> Option<&'a str> {
///     source.into_sequence().last().ok()
/// }
///
/// assert_eq!(last_word(&["a", "b"]), Some("b"));
/// assert_eq!(last_word(&Vec::<&str>::new()), None);
/// ```
pub trait IntoSequence<'a> {
    /// The type of the elements.
    type Item;

    /// Adapts the value.
    fn into_sequence(self) -> Sequence<'a, Self::Item>;
}

impl<'a, T> IntoSequence<'a> for Sequence<'a, T> {
    type Item = T;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, T> {
        self
    }
}

impl<'a, T> IntoSequence<'a> for &Sequence<'a, T> {
    type Item = T;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, T> {
        self.clone()
    }
}
