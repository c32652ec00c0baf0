//! Reactive state cell.
//!
//! A typed value plus an ordered list of watchers. Every [`StateCell::update`]
//! notifies every watcher synchronously, once, in subscription order. There is
//! no batching and no equality check: N updates are N notification passes even
//! when the value does not change.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use finch_ui::state::StateCell;
//!
//! let count = StateCell::new(0);
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let log = seen.clone();
//! count.watch(move |value| log.borrow_mut().push(*value));
//!
//! count.update(|v| v + 1);
//! count.update(|v| v + 1);
//!
//! assert_eq!(*seen.borrow(), vec![0, 1, 2]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Watcher<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    watchers: RefCell<Vec<Watcher<T>>>,
}

/// Shared handle to a reactive value. Clones observe the same value.
pub struct StateCell<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default + Clone + 'static> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &*self.inner.value.borrow())
            .field("watchers", &self.inner.watchers.borrow().len())
            .finish()
    }
}

impl<T: Clone + 'static> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                watchers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Current value.
    pub fn value(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Borrow the current value without cloning it.
    ///
    /// Calling `update` on this cell from inside `read` panics.
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.inner.value.borrow())
    }

    /// Replace the value with `transform(old)` and notify every watcher.
    pub fn update(&self, transform: impl FnOnce(T) -> T) {
        let next = {
            let current = self.inner.value.borrow().clone();
            transform(current)
        };
        *self.inner.value.borrow_mut() = next.clone();
        self.notify(&next);
    }

    /// Replace the value and notify every watcher.
    pub fn set(&self, value: T) {
        self.update(move |_| value);
    }

    /// Subscribe. `callback` runs once right away with the current value.
    pub fn watch(&self, callback: impl Fn(&T) + 'static) {
        let watcher: Watcher<T> = Rc::new(callback);
        self.inner.watchers.borrow_mut().push(Rc::clone(&watcher));

        let current = self.value();
        watcher(&current);
    }

    pub fn watcher_count(&self) -> usize {
        self.inner.watchers.borrow().len()
    }

    // Watchers are snapshotted so they may watch or update this cell while
    // being notified.
    fn notify(&self, value: &T) {
        let watchers: Vec<Watcher<T>> = self.inner.watchers.borrow().clone();
        for watcher in watchers {
            watcher(value);
        }
    }
}
