use crate::{Error, Result};

/// The element an enumerator rests on, plus whether the enumerator is closed.
///
/// Shared by enumerators that materialize their current element.
#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    current: Option<T>,
    closed: bool,
}

impl<T> Slot<T> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Slot {
            current: None,
            closed: false,
        }
    }

    #[inline]
    pub(crate) fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub(crate) fn set(&mut self, item: T) {
        debug_assert!(!self.closed, "a closed enumerator must not resume");
        self.current = Some(item);
    }

    #[inline]
    pub(crate) fn get(&self) -> Result<&T> {
        self.current.as_ref().ok_or(Error::NotPositioned)
    }

    #[inline]
    pub(crate) fn close(&mut self) {
        self.current = None;
        self.closed = true;
    }
}

impl<T> Default for Slot<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
