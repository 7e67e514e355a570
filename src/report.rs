/// Error Reporting
///
/// The store reports every error it encounters through a [`Reporter`] and then
/// carries on from its last valid state. Whether anything gets printed is up
/// to the reporter the caller injects.

use crate::error::{ErrorKind, TableError};
use std::cell::RefCell;

/// Sink for errors the store recovers from.
pub trait Reporter {
    fn report(&self, error: &TableError);
}

/// Forwards errors to the `log` facade.
///
/// Configuration and validation problems log at `error`, usage mistakes
/// (sorting a column that cannot be sorted) at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, error: &TableError) {
        match error.kind() {
            ErrorKind::Configuration | ErrorKind::Validation => {
                log::error!(target: "tablestore", "{}", error)
            }
            ErrorKind::Usage => log::warn!(target: "tablestore", "{}", error),
        }
    }
}

/// Keeps reported errors in memory, e.g. to show them in a status bar.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    errors: RefCell<Vec<String>>,
    kinds: RefCell<Vec<ErrorKind>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of every error reported so far
    pub fn messages(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.kinds.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.errors.borrow_mut().clear();
        self.kinds.borrow_mut().clear();
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, error: &TableError) {
        self.errors.borrow_mut().push(error.to_string());
        self.kinds.borrow_mut().push(error.kind());
    }
}

impl<R: Reporter + ?Sized> Reporter for std::rc::Rc<R> {
    fn report(&self, error: &TableError) {
        (**self).report(error)
    }
}
