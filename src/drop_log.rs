use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

type SharedLog<T> = Rc<RefCell<Option<Vec<T>>>>;

/// Records the values dropped while armed, in drop order.
///
/// Each [`LoggedDrop`] holds a shared handle to the log, so the log may be
/// moved freely and handles may outlive the `DropLog` value itself.
pub struct DropLog<T> {
    dropped: SharedLog<T>,
}

impl<T: Clone> DropLog<T> {
    pub fn new() -> Self {
        DropLog {
            dropped: Rc::new(RefCell::new(None)),
        }
    }

    pub fn item(&mut self, value: T) -> LoggedDrop<T> {
        LoggedDrop {
            value,
            log: Rc::clone(&self.dropped),
        }
    }

    pub fn items(&mut self, values: impl IntoIterator<Item = T>) -> Vec<LoggedDrop<T>> {
        values.into_iter().map(|value| self.item(value)).collect()
    }

    /// Runs `f` with logging armed and returns what was dropped during it.
    pub fn record<R>(&mut self, f: impl FnOnce() -> R) -> (Vec<T>, R) {
        *self.dropped.borrow_mut() = Some(Vec::new());
        let result = f();
        let dropped = self.dropped.borrow_mut().take().unwrap();
        (dropped, result)
    }
}

pub struct LoggedDrop<T: Clone> {
    value: T,
    log: SharedLog<T>,
}

impl<T: Clone> Clone for LoggedDrop<T> {
    fn clone(&self) -> Self {
        LoggedDrop {
            value: self.value.clone(),
            log: Rc::clone(&self.log),
        }
    }
}

impl<T: Clone + PartialEq> PartialEq for LoggedDrop<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for LoggedDrop<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: Clone> Deref for LoggedDrop<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Drop for LoggedDrop<T> {
    fn drop(&mut self) {
        if let Some(dropped) = self.log.borrow_mut().as_mut() {
            dropped.push(self.value.clone());
        }
    }
}
