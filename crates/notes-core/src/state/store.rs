//! Single-threaded observable value cell.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Observer<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    observers: Vec<(u64, Observer<T>)>,
    next_id: u64,
    pending: VecDeque<T>,
    notifying: bool,
}

/// A shared, observable value.
///
/// Cloning a `Store` yields another handle to the same cell. Observers are
/// called synchronously, in registration order, on every `set`/`update`,
/// including when the new value equals the old one. A `set` issued by an
/// observer is queued and delivered after the current round completes, so
/// every observer sees values in the order they were set.
pub struct Store<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default + Clone + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("value", &inner.value)
            .field("observers", &inner.observers.len())
            .finish()
    }
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                observers: Vec::new(),
                next_id: 0,
                pending: VecDeque::new(),
                notifying: false,
            })),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replaces the value and notifies every current observer.
    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        self.notify();
    }

    /// Mutates the value in place and notifies every current observer.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut().value);
        self.notify();
    }

    /// Registers `observer`, calling it immediately with the current value.
    ///
    /// The observer stays attached until the returned [`Subscription`] is
    /// dropped or [`Subscription::unsubscribe`] is called.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        let observer: Observer<T> = Rc::new(observer);
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, Rc::clone(&observer)));
            id
        };

        let current = self.get();
        observer(&current);

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            remove: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .borrow_mut()
                        .observers
                        .retain(|(observer_id, _)| *observer_id != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    // Only the outermost call drains the queue; nested calls just enqueue.
    fn notify(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            let value = inner.value.clone();
            inner.pending.push_back(value);
            if inner.notifying {
                return;
            }
            inner.notifying = true;
        }

        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let next = inner.pending.pop_front().map(|value| {
                    let observers: Vec<Observer<T>> = inner
                        .observers
                        .iter()
                        .map(|(_, observer)| Rc::clone(observer))
                        .collect();
                    (value, observers)
                });
                if next.is_none() {
                    inner.notifying = false;
                }
                next
            };
            let Some((value, observers)) = next else {
                break;
            };
            for observer in observers {
                observer(&value);
            }
        }
    }
}

/// Handle returned by [`Store::subscribe`].
#[must_use = "dropping the Subscription unsubscribes immediately"]
pub struct Subscription {
    remove: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Detaches the observer from its store.
    pub fn unsubscribe(mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }

    /// Keeps the observer attached for the lifetime of the store.
    pub fn detach(mut self) {
        self.remove = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.remove.is_some())
            .finish()
    }
}
