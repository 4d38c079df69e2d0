use std::{any::TypeId, fmt};

use crate::{
    Enumerable, Enumerator, IndexedEnumerable, RandomAccessEnumerator, Result, Sequence, Shape,
    enumerator::get_in_bounds,
};

mod sealed {
    pub trait Sealed {}
}

/// A primitive scalar type that gets a dedicated array adapter.
///
/// This trait is sealed.
pub trait Scalar: Copy + sealed::Sealed + 'static {
    /// The kind tag reported in [`Shape::ScalarArray`].
    const KIND: ScalarKind;
}

macro_rules! scalars {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        /// The primitive kind of a [`Scalar`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ScalarKind {
            $(
                #[doc = concat!("`", stringify!($ty), "`")]
                $kind,
            )*
        }

        impl ScalarKind {
            /// Returns the kind of `T`, or `None` if `T` is not a primitive scalar.
            ///
            /// # Examples
            ///
            /// ```
            /// use enumerable::adapter::ScalarKind;
            ///
            /// assert_eq!(ScalarKind::of::<i32>(), Some(ScalarKind::I32));
            /// assert_eq!(ScalarKind::of::<String>(), None);
            /// ```
            pub fn of<T: 'static>() -> Option<ScalarKind> {
                let id = TypeId::of::<T>();
                $(
                    if id == TypeId::of::<$ty>() {
                        return Some(ScalarKind::$kind);
                    }
                )*
                None
            }
        }

        impl fmt::Display for ScalarKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    $(ScalarKind::$kind => stringify!($ty),)*
                })
            }
        }

        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;
            }
        )*
    };
}

scalars! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

/// Adapts a slice of primitive scalars, copying each element out as it is read.
///
/// Indexed: out-of-range reads fail with [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds).
///
/// This struct is created by [`Sequence::of_scalars()`], or by [`adapt()`](super::adapt) when
/// the requested element type is a primitive scalar.
#[derive(Debug, Clone, Copy)]
pub struct ScalarArrayEnumerable<'a, T> {
    array: &'a [T],
    kind: ScalarKind,
}

impl<'a, S: Scalar> ScalarArrayEnumerable<'a, S> {
    /// Creates an adapter over `array`.
    #[inline]
    pub const fn new(array: &'a [S]) -> Self {
        ScalarArrayEnumerable {
            array,
            kind: S::KIND,
        }
    }
}

impl<'a, T: 'static> ScalarArrayEnumerable<'a, T> {
    /// Creates an adapter over `array` if `T` turns out to be a primitive scalar at runtime.
    pub(crate) fn probe(array: &'a [T]) -> Option<Self> {
        ScalarKind::of::<T>().map(|kind| ScalarArrayEnumerable { array, kind })
    }
}

impl<T> ScalarArrayEnumerable<'_, T> {
    /// Returns the primitive kind of the elements.
    #[inline]
    pub fn kind(&self) -> ScalarKind {
        self.kind
    }
}

impl<T> Enumerable<T> for ScalarArrayEnumerable<'_, T> {
    #[inline]
    fn enumerator(&self) -> Box<dyn Enumerator<Item = T> + '_> {
        Box::new(RandomAccessEnumerator::new(self.array))
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::ScalarArray(self.kind)
    }
}

// Every scalar is `Copy`, so `Clone` here is a plain copy.
impl<T: Clone> IndexedEnumerable<T> for ScalarArrayEnumerable<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.array.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<T> {
        get_in_bounds(self.array, index).cloned()
    }
}

impl<'a, S: Scalar> Sequence<'a, S> {
    /// Adapts a slice of primitive scalars with the dedicated scalar adapter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerable::{Sequence, Shape, adapter::ScalarKind};
    ///
    /// let seq = Sequence::of_scalars(&[9, 8, 0, -5, 10]);
    ///
    /// assert_eq!(seq.shape(), Shape::ScalarArray(ScalarKind::I32));
    /// assert_eq!(seq.element_at(4), Ok(10));
    /// ```
    #[inline]
    pub fn of_scalars(array: &'a [S]) -> Self {
        Sequence::from_indexed(ScalarArrayEnumerable::new(array))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{ScalarArrayEnumerable, ScalarKind};
    use crate::{Error, Sequence, Shape};

    #[test_case(ScalarKind::of::<bool>(), Some(ScalarKind::Bool) ; "bool")]
    #[test_case(ScalarKind::of::<char>(), Some(ScalarKind::Char) ; "char")]
    #[test_case(ScalarKind::of::<u8>(), Some(ScalarKind::U8) ; "byte")]
    #[test_case(ScalarKind::of::<f64>(), Some(ScalarKind::F64) ; "double")]
    #[test_case(ScalarKind::of::<&str>(), None ; "string slice")]
    #[test_case(ScalarKind::of::<Option<i32>>(), None ; "boxed int")]
    fn probes_kind(actual: Option<ScalarKind>, expected: Option<ScalarKind>) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn every_kind_has_its_own_shape() {
        assert_eq!(
            Sequence::of_scalars(&[true, false]).shape(),
            Shape::ScalarArray(ScalarKind::Bool)
        );
        assert_eq!(
            Sequence::of_scalars(&['a', 'b']).shape(),
            Shape::ScalarArray(ScalarKind::Char)
        );
        assert_eq!(
            Sequence::of_scalars(&[1.5_f32]).shape(),
            Shape::ScalarArray(ScalarKind::F32)
        );
    }

    #[test]
    fn probe_refuses_non_scalars() {
        assert!(ScalarArrayEnumerable::probe(&["x"][..]).is_none());
        assert_eq!(
            ScalarArrayEnumerable::probe(&[1_i64][..]).map(|a| a.kind()),
            Some(ScalarKind::I64)
        );
    }

    #[test]
    fn empty_array() {
        let seq = Sequence::of_scalars(&[] as &[i32]);

        assert_eq!(seq.iter().count(), 0);
        assert_eq!(
            seq.element_at(0),
            Err(Error::IndexOutOfBounds { index: 0, len: 0 })
        );
        assert_eq!(ScalarKind::I128.to_string(), "i128");
    }
}
