//! Entry points taking every argument as an [`Option`].
//!
//! These mirror the operators on [`Sequence`] for callers whose arguments may be absent,
//! such as bindings to a host where any reference can be null. A missing source or
//! selector fails with [`Error::ArgumentNull`] naming it, before a single element is read,
//! so the failure does not depend on what the source holds. A missing equality strategy
//! is not an error: it means natural equality. Keys without natural equality, like
//! `f64`, go through the `_using` variants, which take the strategy itself.
//!
//! # Examples
//!
//! ```
//! use enumerable::{Argument, Error, Natural, Sequence, checked};
//!
//! let empty = Sequence::<i32>::empty();
//!
//! assert_eq!(
//!     checked::group_by(Some(&empty), None::<fn(&i32) -> i32>, None::<Natural>).unwrap_err(),
//!     Error::ArgumentNull(Argument::KeySelector)
//! );
//! assert_eq!(checked::last(None::<&Sequence<i32>>), Err(Error::ArgumentNull(Argument::Source)));
//! ```

use std::hash::Hash;

use tracing::debug;

use crate::{Argument, Equality, Error, Grouping, IntoSequence, LinkedSet, Result, Sequence};

fn required<A>(argument: Option<A>, name: Argument) -> Result<A> {
    argument.ok_or_else(|| {
        debug!(argument = %name, "required argument is absent");
        Error::ArgumentNull(name)
    })
}

/// [`Sequence::element_at`] with a possibly absent source and a signed index.
///
/// # Errors
///
/// - [`Error::ArgumentNull`] if `source` is absent.
/// - A negative `index` fails like an index past the end: [`Error::NegativeIndex`] on an
///   indexed source, [`Error::ArgumentOutOfRange`] on any other.
///
/// # Examples
///
/// ```
/// use enumerable::{Argument, Error, Sequence, checked};
///
/// let array = Sequence::of(&[9, 8]);
/// let range = Sequence::of_iterable(|| -4..5);
///
/// assert_eq!(checked::element_at(Some(&array), 1), Ok(8));
/// assert_eq!(
///     checked::element_at(Some(&array), -1),
///     Err(Error::NegativeIndex { index: -1, len: 2 })
/// );
/// assert_eq!(
///     checked::element_at(Some(&range), -1),
///     Err(Error::ArgumentOutOfRange(Argument::Index))
/// );
/// ```
pub fn element_at<T: Clone>(source: Option<&Sequence<'_, T>>, index: isize) -> Result<T> {
    required(source, Argument::Source)?.element_at_signed(index)
}

/// [`Sequence::last`] with a possibly absent source.
pub fn last<T: Clone>(source: Option<&Sequence<'_, T>>) -> Result<T> {
    required(source, Argument::Source)?.last()
}

/// [`Sequence::last_where`] with a possibly absent source and predicate.
pub fn last_where<T, P>(source: Option<&Sequence<'_, T>>, predicate: Option<P>) -> Result<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let source = required(source, Argument::Source)?;
    let predicate = required(predicate, Argument::Predicate)?;
    source.last_where(predicate)
}

/// [`Sequence::group_by`] with possibly absent arguments.
///
/// # Errors
///
/// [`Error::ArgumentNull`] if `source` or `key_selector` is absent.
pub fn group_by<'a, T, K, FK, Q>(
    source: Option<&Sequence<'a, T>>,
    key_selector: Option<FK>,
    equality: Option<Q>,
) -> Result<Sequence<'a, Grouping<K, T>>>
where
    T: Clone + 'a,
    K: Eq + Hash + 'a,
    FK: Fn(&T) -> K + 'a,
    Q: Equality<K> + 'a,
{
    let source = required(source, Argument::Source)?;
    let key_selector = required(key_selector, Argument::KeySelector)?;

    Ok(source
        .group_by(key_selector)
        .equality_or_natural(equality)
        .into_sequence())
}

/// [`Sequence::group_by`] followed by [`element`](crate::GroupBy::element), with possibly
/// absent arguments.
///
/// # Errors
///
/// [`Error::ArgumentNull`] if `source`, `key_selector` or `element_selector` is absent.
pub fn group_by_element<'a, T, K, E, FK, FE, Q>(
    source: Option<&Sequence<'a, T>>,
    key_selector: Option<FK>,
    element_selector: Option<FE>,
    equality: Option<Q>,
) -> Result<Sequence<'a, Grouping<K, E>>>
where
    T: Clone + 'a,
    K: Eq + Hash + 'a,
    E: 'a,
    FK: Fn(&T) -> K + 'a,
    FE: Fn(T) -> E + 'a,
    Q: Equality<K> + 'a,
{
    let source = required(source, Argument::Source)?;
    let key_selector = required(key_selector, Argument::KeySelector)?;
    let element_selector = required(element_selector, Argument::ElementSelector)?;

    Ok(source
        .group_by(key_selector)
        .element(element_selector)
        .equality_or_natural(equality)
        .into_sequence())
}

/// [`Sequence::group_by`] followed by [`result`](crate::GroupBy::result), with possibly
/// absent arguments.
///
/// # Errors
///
/// [`Error::ArgumentNull`] if `source`, `key_selector` or `result_selector` is absent.
pub fn group_by_result<'a, T, K, R, FK, FR, Q>(
    source: Option<&Sequence<'a, T>>,
    key_selector: Option<FK>,
    result_selector: Option<FR>,
    equality: Option<Q>,
) -> Result<Sequence<'a, R>>
where
    T: Clone + 'a,
    K: Eq + Hash + 'a,
    R: 'a,
    FK: Fn(&T) -> K + 'a,
    FR: Fn(&K, Sequence<'a, T>) -> R + 'a,
    Q: Equality<K> + 'a,
{
    let source = required(source, Argument::Source)?;
    let key_selector = required(key_selector, Argument::KeySelector)?;
    let result_selector = required(result_selector, Argument::ResultSelector)?;

    Ok(source
        .group_by(key_selector)
        .equality_or_natural(equality)
        .result(result_selector))
}

/// [`Sequence::group_by`] with every option, and every argument possibly absent.
///
/// # Errors
///
/// [`Error::ArgumentNull`] if `source`, `key_selector`, `element_selector` or
/// `result_selector` is absent, checked in that order.
pub fn group_by_element_result<'a, T, K, E, R, FK, FE, FR, Q>(
    source: Option<&Sequence<'a, T>>,
    key_selector: Option<FK>,
    element_selector: Option<FE>,
    result_selector: Option<FR>,
    equality: Option<Q>,
) -> Result<Sequence<'a, R>>
where
    T: Clone + 'a,
    K: Eq + Hash + 'a,
    E: Clone + 'a,
    R: 'a,
    FK: Fn(&T) -> K + 'a,
    FE: Fn(T) -> E + 'a,
    FR: Fn(&K, Sequence<'a, E>) -> R + 'a,
    Q: Equality<K> + 'a,
{
    let source = required(source, Argument::Source)?;
    let key_selector = required(key_selector, Argument::KeySelector)?;
    let element_selector = required(element_selector, Argument::ElementSelector)?;
    let result_selector = required(result_selector, Argument::ResultSelector)?;

    Ok(source
        .group_by(key_selector)
        .element(element_selector)
        .equality_or_natural(equality)
        .result(result_selector))
}

/// [`group_by`] comparing keys with a given `equality` only.
///
/// Unlike [`group_by`], the keys need no [`Eq`] or [`Hash`] of their own.
///
/// # Errors
///
/// [`Error::ArgumentNull`] if `source` or `key_selector` is absent.
pub fn group_by_using<'a, T, K, FK, Q>(
    source: Option<&Sequence<'a, T>>,
    key_selector: Option<FK>,
    equality: Q,
) -> Result<Sequence<'a, Grouping<K, T>>>
where
    T: Clone + 'a,
    K: 'a,
    FK: Fn(&T) -> K + 'a,
    Q: Equality<K> + 'a,
{
    let source = required(source, Argument::Source)?;
    let key_selector = required(key_selector, Argument::KeySelector)?;

    Ok(source.group_by(key_selector).equality(equality).into_sequence())
}

/// [`group_by_element_result`] comparing keys with a given `equality` only.
///
/// # Errors
///
/// [`Error::ArgumentNull`] if `source`, `key_selector`, `element_selector` or
/// `result_selector` is absent, checked in that order.
pub fn group_by_element_result_using<'a, T, K, E, R, FK, FE, FR, Q>(
    source: Option<&Sequence<'a, T>>,
    key_selector: Option<FK>,
    element_selector: Option<FE>,
    result_selector: Option<FR>,
    equality: Q,
) -> Result<Sequence<'a, R>>
where
    T: Clone + 'a,
    K: 'a,
    E: Clone + 'a,
    R: 'a,
    FK: Fn(&T) -> K + 'a,
    FE: Fn(T) -> E + 'a,
    FR: Fn(&K, Sequence<'a, E>) -> R + 'a,
    Q: Equality<K> + 'a,
{
    let source = required(source, Argument::Source)?;
    let key_selector = required(key_selector, Argument::KeySelector)?;
    let element_selector = required(element_selector, Argument::ElementSelector)?;
    let result_selector = required(result_selector, Argument::ResultSelector)?;

    Ok(source
        .group_by(key_selector)
        .element(element_selector)
        .equality(equality)
        .result(result_selector))
}

/// [`Sequence::to_linked_set`] with a possibly absent source.
pub fn to_linked_set<T>(source: Option<&Sequence<'_, T>>) -> Result<LinkedSet<T>>
where
    T: Clone + Eq + Hash,
{
    Ok(required(source, Argument::Source)?.to_linked_set())
}
