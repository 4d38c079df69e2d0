use std::{
    any::{Any, type_name},
    collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque},
};

use tracing::{debug, trace};

use super::{ArrayEnumerable, ScalarArrayEnumerable};
use crate::{Argument, Error, IntoSequence, Result, Sequence};

/// Adapts a type-erased source, failing if its shape has no adapter.
///
/// This is the strict entry point of runtime dispatch. `None` stands for an absent source.
/// The source's concrete type is probed in a fixed order, first match wins:
///
/// 1. a [`Sequence<T>`] is returned as is;
/// 2. a `Vec<T>` or `Box<[T]>` of a primitive scalar gets the
///    [scalar adapter](ScalarArrayEnumerable);
/// 3. any other `Vec<T>` or `Box<[T]>` gets the [array adapter](ArrayEnumerable);
/// 4. `VecDeque<T>`, `LinkedList<T>`, `HashSet<T>`, `BTreeSet<T>` and `BinaryHeap<T>` get
///    their own adapters, as with [`Sequence::of`].
///
/// Only a `Sequence<'static, T>` can be recognized, since a borrowed one is not [`Any`].
///
/// Step 2 is where this differs from [`Sequence::of`]: the typed path has no `'static`
/// bound to test the element type with, so it gives every slice the array adapter.
/// The two shapes yield the same elements.
///
/// # Errors
///
/// - [`Error::ArgumentNull`] if `source` is `None`.
/// - [`Error::UnsupportedShape`] if no adapter matches.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use enumerable::{Error, Shape, adapter::{ScalarKind, adapt}};
///
/// let nums: Vec<i64> = vec![1, 2, 3];
/// let seq = adapt::<i64>(Some(&nums as &dyn Any)).unwrap();
/// assert_eq!(seq.shape(), Shape::ScalarArray(ScalarKind::I64));
///
/// let text = String::from("not a container");
/// assert!(matches!(
///     adapt::<i64>(Some(&text as &dyn Any)),
///     Err(Error::UnsupportedShape(_))
/// ));
/// ```
pub fn adapt<'a, T>(source: Option<&'a dyn Any>) -> Result<Sequence<'a, T>>
where
    T: Clone + 'static,
{
    try_adapt(source)?.ok_or(Error::UnsupportedShape(type_name::<T>()))
}

/// Adapts a type-erased source, returning `Ok(None)` if its shape has no adapter.
///
/// This is the best-effort entry point of runtime dispatch. It probes in the same order as
/// [`adapt`].
///
/// # Errors
///
/// [`Error::ArgumentNull`] if `source` is `None`. An absent source is a caller error even
/// here, unlike an unsupported one.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use enumerable::adapter::try_adapt;
///
/// let words = vec!["a", "b"];
/// assert!(try_adapt::<&str>(Some(&words as &dyn Any)).unwrap().is_some());
/// assert!(try_adapt::<&str>(Some(&42 as &dyn Any)).unwrap().is_none());
/// ```
pub fn try_adapt<'a, T>(source: Option<&'a dyn Any>) -> Result<Option<Sequence<'a, T>>>
where
    T: Clone + 'static,
{
    let source = source.ok_or(Error::ArgumentNull(Argument::Source))?;
    let adapted = probe(source);

    match &adapted {
        Some(seq) => trace!(shape = %seq.shape(), indexed = seq.is_indexed(), "adapted source"),
        None => debug!(element = type_name::<T>(), "no adapter for source"),
    }

    Ok(adapted)
}

fn probe<'a, T>(source: &'a dyn Any) -> Option<Sequence<'a, T>>
where
    T: Clone + 'static,
{
    if let Some(seq) = source.downcast_ref::<Sequence<'static, T>>() {
        return Some(seq.clone());
    }

    if let Some(array) = source
        .downcast_ref::<Vec<T>>()
        .map(Vec::as_slice)
        .or_else(|| source.downcast_ref::<Box<[T]>>().map(|b| &**b))
    {
        return Some(match ScalarArrayEnumerable::probe(array) {
            Some(scalars) => Sequence::from_indexed(scalars),
            None => Sequence::from_indexed(ArrayEnumerable::new(array)),
        });
    }

    if let Some(deque) = source.downcast_ref::<VecDeque<T>>() {
        return Some(deque.into_sequence());
    }

    if let Some(list) = source.downcast_ref::<LinkedList<T>>() {
        return Some(list.into_sequence());
    }

    if let Some(set) = source.downcast_ref::<HashSet<T>>() {
        return Some(set.into_sequence());
    }

    if let Some(set) = source.downcast_ref::<BTreeSet<T>>() {
        return Some(set.into_sequence());
    }

    source
        .downcast_ref::<BinaryHeap<T>>()
        .map(IntoSequence::into_sequence)
}
