use std::{cell::Cell, iter::Cloned, rc::Rc, slice};

use crate::{Enumerable, Enumerator, IteratorEnumerator, Result, Sequence};

thread_local! {
    static OPEN_CURSORS: Cell<usize> = const { Cell::new(0) };
}

/// Initialize tracing subscriber for tests.
///
/// Set `RUST_LOG` to pick the level; it defaults to `debug`.
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    // Another test may have installed it already.
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// The same items behind every capability: an array, a random-access list,
/// and a re-iterable sequential source.
pub fn every_capability<'a, T: Clone + 'a>(items: &'a [T]) -> Vec<Sequence<'a, T>> {
    vec![
        Sequence::of(items),
        Sequence::of_list(items),
        Sequence::of_iterable(move || items.iter().cloned()),
    ]
}

/// A sequential source that panics when enumerated a second time.
pub fn run_once<'a, T: Clone + 'a>(items: &'a [T]) -> Sequence<'a, T> {
    Sequence::from_enumerable(RunOnce {
        items,
        started: Cell::new(false),
    })
}

/// A sequential source that counts every `move_next` of every cursor it mints.
///
/// Cursors it mints are counted by [`open_cursors`] until closed.
pub fn counting<'a, T: Clone + 'a>(items: &'a [T]) -> (Sequence<'a, T>, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    let seq = Sequence::from_enumerable(Counting {
        items,
        pulls: Rc::clone(&pulls),
    });

    (seq, pulls)
}

/// Number of cursors minted by [`counting`] sources on this thread that were never closed.
pub fn open_cursors() -> usize {
    OPEN_CURSORS.with(Cell::get)
}

struct RunOnce<'a, T> {
    items: &'a [T],
    started: Cell<bool>,
}

impl<T: Clone> Enumerable<T> for RunOnce<'_, T> {
    fn enumerator(&self) -> Box<dyn Enumerator<Item = T> + '_> {
        assert!(!self.started.replace(true), "source enumerated twice");
        Box::new(IteratorEnumerator::new(self.items.iter().cloned()))
    }
}

struct Counting<'a, T> {
    items: &'a [T],
    pulls: Rc<Cell<usize>>,
}

impl<T: Clone> Enumerable<T> for Counting<'_, T> {
    fn enumerator(&self) -> Box<dyn Enumerator<Item = T> + '_> {
        OPEN_CURSORS.with(|open| open.set(open.get() + 1));

        Box::new(CountingEnumerator {
            inner: IteratorEnumerator::new(self.items.iter().cloned()),
            pulls: Rc::clone(&self.pulls),
            open: true,
        })
    }
}

struct CountingEnumerator<'a, T: Clone> {
    inner: IteratorEnumerator<Cloned<slice::Iter<'a, T>>>,
    pulls: Rc<Cell<usize>>,
    open: bool,
}

impl<T: Clone> Enumerator for CountingEnumerator<'_, T> {
    type Item = T;

    fn move_next(&mut self) -> bool {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.move_next()
    }

    fn current(&self) -> Result<&T> {
        self.inner.current()
    }

    fn close(&mut self) {
        if std::mem::take(&mut self.open) {
            OPEN_CURSORS.with(|open| open.set(open.get() - 1));
        }
        self.inner.close();
    }
}
