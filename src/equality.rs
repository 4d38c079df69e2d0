//! Pluggable key equality for [`group_by`](crate::Sequence::group_by) and
//! [`to_linked_set`](crate::Sequence::to_linked_set).
//!
//! A strategy is an `equals` and `hash` pair that must agree: keys that are equal must
//! hash the same. [`Natural`] uses the key's own [`Eq`] and [`Hash`]; the other
//! strategies let keys the natural rules keep apart land in the same bucket.

use std::hash::{BuildHasher, Hash};

use hashbrown::DefaultHashBuilder;

/// Decides which keys are the same.
///
/// # Examples
///
/// Case-insensitive ASCII keys:
///
/// ```
/// use enumerable::{Equality, Sequence};
///
/// struct IgnoreCase;
///
/// impl Equality<&str> for IgnoreCase {
///     fn equals(&self, a: &&str, b: &&str) -> bool {
///         a.eq_ignore_ascii_case(b)
///     }
///
///     fn hash(&self, key: &&str) -> u64 {
///         key.bytes().fold(0, |h, b| h.rotate_left(5) ^ u64::from(b.to_ascii_lowercase()))
///     }
/// }
///
/// let names = ["Ann", "BOB", "ann", "bob", "Cy"];
/// let keys: Vec<_> = Sequence::of(&names)
///     .group_by(|name| *name)
///     .equality(&IgnoreCase)
///     .result(|key, group| (*key, group.count()))
///     .iter()
///     .collect();
///
/// assert_eq!(keys, [("Ann", 2), ("BOB", 2), ("Cy", 1)]);
/// ```
pub trait Equality<K: ?Sized> {
    /// Returns `true` if `a` and `b` are the same key.
    fn equals(&self, a: &K, b: &K) -> bool;

    /// Hashes `key`, consistently with [`equals`](Equality::equals).
    fn hash(&self, key: &K) -> u64;
}

impl<K, Q> Equality<K> for &Q
where
    K: ?Sized,
    Q: Equality<K> + ?Sized,
{
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        (**self).equals(a, b)
    }

    #[inline]
    fn hash(&self, key: &K) -> u64 {
        (**self).hash(key)
    }
}

/// The key's own [`Eq`] and [`Hash`].
///
/// An absent key is just `None`, which natural equality already treats as one key
/// distinct from every `Some`.
#[derive(Debug, Clone, Default)]
pub struct Natural<S = DefaultHashBuilder> {
    build_hasher: S,
}

impl Natural {
    /// Creates natural equality with the default hasher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> Natural<S> {
    /// Creates natural equality hashing with `build_hasher`.
    #[inline]
    pub const fn with_hasher(build_hasher: S) -> Self {
        Natural { build_hasher }
    }
}

impl<K, S> Equality<K> for Natural<S>
where
    K: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }

    #[inline]
    fn hash(&self, key: &K) -> u64 {
        self.build_hasher.hash_one(key)
    }
}

/// Lifts a strategy over `K` to possibly absent keys.
///
/// All `None` keys share one bucket, apart from every present key, and the inner strategy
/// is never asked about them.
///
/// # Examples
///
/// ```
/// use enumerable::{Equality, Natural, equality::Nullable};
///
/// let eq = Nullable(Natural::new());
///
/// assert!(eq.equals(&None::<i32>, &None));
/// assert!(!eq.equals(&None, &Some(0)));
/// assert_eq!(eq.hash(&None::<i32>), eq.hash(&None::<i32>));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullable<Q>(pub Q);

// The bucket of every `None` key.
const NONE_HASH: u64 = 0;

impl<K, Q: Equality<K>> Equality<Option<K>> for Nullable<Q> {
    #[inline]
    fn equals(&self, a: &Option<K>, b: &Option<K>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.0.equals(a, b),
            _ => false,
        }
    }

    #[inline]
    fn hash(&self, key: &Option<K>) -> u64 {
        key.as_ref().map_or(NONE_HASH, |key| self.0.hash(key))
    }
}

/// Keys are the same when a projection of them is naturally equal.
///
/// # Examples
///
/// Anagrams:
///
/// ```
/// use enumerable::{Equality, equality::ByKey};
///
/// let anagrams = ByKey::new(|word: &str| {
///     let mut letters: Vec<char> = word.to_lowercase().chars().collect();
///     letters.sort_unstable();
///     letters
/// });
///
/// assert!(anagrams.equals("Tim", "miT"));
/// assert!(!anagrams.equals("Tim", "Tom"));
/// ```
#[derive(Clone)]
pub struct ByKey<F, S = DefaultHashBuilder> {
    project: F,
    build_hasher: S,
}

impl<F> ByKey<F> {
    /// Creates a strategy comparing keys through `project`.
    #[inline]
    pub fn new(project: F) -> Self {
        ByKey {
            project,
            build_hasher: DefaultHashBuilder::default(),
        }
    }
}

impl<K, F, P, S> Equality<K> for ByKey<F, S>
where
    K: ?Sized,
    F: Fn(&K) -> P,
    P: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        (self.project)(a) == (self.project)(b)
    }

    #[inline]
    fn hash(&self, key: &K) -> u64 {
        self.build_hasher.hash_one((self.project)(key))
    }
}

impl<F, S> std::fmt::Debug for ByKey<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

/// A strategy made of two closures.
///
/// This struct is created by [`from_fns()`]. See its documentation for more.
#[derive(Clone)]
pub struct FnEquality<E, H> {
    equals: E,
    hash: H,
}

/// Creates a strategy from an `equals` closure and a consistent `hash` closure.
///
/// # Examples
///
/// A strategy that considers every key the same:
///
/// ```
/// use enumerable::{Equality, equality};
///
/// let all_same = equality::from_fns(|_: &i32, _: &i32| true, |_: &i32| 0);
///
/// assert!(all_same.equals(&1, &2));
/// ```
#[inline]
pub fn from_fns<E, H>(equals: E, hash: H) -> FnEquality<E, H> {
    FnEquality { equals, hash }
}

impl<K, E, H> Equality<K> for FnEquality<E, H>
where
    K: ?Sized,
    E: Fn(&K, &K) -> bool,
    H: Fn(&K) -> u64,
{
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        (self.equals)(a, b)
    }

    #[inline]
    fn hash(&self, key: &K) -> u64 {
        (self.hash)(key)
    }
}

impl<E, H> std::fmt::Debug for FnEquality<E, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnEquality").finish_non_exhaustive()
    }
}

/// A caller's strategy if one was given, natural equality otherwise.
///
/// This is what an absent strategy resolves to: `None` means [`Natural`], never
/// "no equality at all".
#[derive(Debug, Clone)]
pub enum OrNatural<Q> {
    /// The caller's strategy.
    Given(Q),
    /// No strategy was given.
    Natural(Natural),
}

impl<Q> From<Option<Q>> for OrNatural<Q> {
    #[inline]
    fn from(equality: Option<Q>) -> Self {
        match equality {
            Some(equality) => OrNatural::Given(equality),
            None => OrNatural::Natural(Natural::new()),
        }
    }
}

impl<K, Q> Equality<K> for OrNatural<Q>
where
    K: Eq + Hash + ?Sized,
    Q: Equality<K>,
{
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        match self {
            OrNatural::Given(equality) => equality.equals(a, b),
            OrNatural::Natural(natural) => natural.equals(a, b),
        }
    }

    #[inline]
    fn hash(&self, key: &K) -> u64 {
        match self {
            OrNatural::Given(equality) => equality.hash(key),
            OrNatural::Natural(natural) => natural.hash(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ByKey, Equality, Natural, Nullable, OrNatural, from_fns};

    #[test]
    fn natural() {
        let eq = Natural::new();

        assert!(eq.equals("a", "a"));
        assert!(!eq.equals("a", "b"));
        assert_eq!(eq.hash("key"), eq.hash(&String::from("key")[..]));
        assert!(eq.equals(&None::<&str>, &None));
    }

    #[test]
    fn nullable_never_asks_the_inner_strategy_about_none() {
        let inner = from_fns(
            |_: &String, _: &String| -> bool { panic!("compared") },
            |_: &String| -> u64 { panic!("hashed") },
        );
        let eq = Nullable(inner);

        assert!(eq.equals(&None::<String>, &None));
        assert!(!eq.equals(&None, &Some(String::new())));
        assert_eq!(eq.hash(&None::<String>), eq.hash(&None));
    }

    #[test]
    fn by_key_hashes_the_projection() {
        let eq = ByKey::new(|n: &i32| n.rem_euclid(10));

        assert!(eq.equals(&3, &13));
        assert_eq!(eq.hash(&3), eq.hash(&-7));
    }

    #[test]
    fn absent_strategy_is_natural() {
        let eq: OrNatural<Natural> = None.into();

        assert!(matches!(eq, OrNatural::Natural(_)));
        assert!(eq.equals(&1, &1));
        assert!(!eq.equals(&1, &2));
    }
}
