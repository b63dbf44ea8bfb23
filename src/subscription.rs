//! Scoped change subscriptions.
//!
//! Everything in the theme core and the form controllers runs on a single
//! event loop, so listener sets are `Rc<RefCell<..>>` rather than channels.
//! A [`Subscription`] removes its registration when dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Handle for a registered callback. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a subscription that runs `dispose` exactly once on teardown.
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self {
            dispose: Some(Box::new(dispose)),
        }
    }

    /// A subscription with nothing to tear down (capability not present).
    pub fn empty() -> Self {
        Self { dispose: None }
    }

    /// Explicitly unsubscribe. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.dispose.is_some())
            .finish()
    }
}

type Callback<T> = Rc<dyn Fn(&T)>;

struct ListenerSet<T: ?Sized> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

/// Registry of callbacks invoked with a borrowed value on every `emit`.
pub(crate) struct Listeners<T: ?Sized> {
    set: Rc<RefCell<ListenerSet<T>>>,
}

impl<T: ?Sized> Clone for Listeners<T> {
    fn clone(&self) -> Self {
        Self {
            set: self.set.clone(),
        }
    }
}

impl<T: ?Sized + 'static> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> Listeners<T> {
    pub(crate) fn new() -> Self {
        Self {
            set: Rc::new(RefCell::new(ListenerSet {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    pub(crate) fn add(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut set = self.set.borrow_mut();
            let id = set.next_id;
            set.next_id += 1;
            set.entries.push((id, Rc::new(callback)));
            id
        };

        let weak: Weak<RefCell<ListenerSet<T>>> = Rc::downgrade(&self.set);
        Subscription::new(move || {
            if let Some(set) = weak.upgrade() {
                set.borrow_mut().entries.retain(|(entry, _)| *entry != id);
            }
        })
    }

    /// Invoke every listener. Callbacks may subscribe, unsubscribe or emit again.
    pub(crate) fn emit(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = self
            .set
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();

        for callback in callbacks {
            callback(value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.set.borrow().entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_all_listeners() {
        let listeners = Listeners::<u32>::new();
        let total = Rc::new(Cell::new(0));

        let a = {
            let total = total.clone();
            listeners.add(move |v| total.set(total.get() + *v))
        };
        let b = {
            let total = total.clone();
            listeners.add(move |v| total.set(total.get() + *v * 10))
        };

        listeners.emit(&2);
        assert_eq!(total.get(), 22);
        assert_eq!(listeners.len(), 2);

        drop(a);
        drop(b);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let listeners = Listeners::<u32>::new();
        let hits = Rc::new(Cell::new(0));

        let sub = {
            let hits = hits.clone();
            listeners.add(move |_| hits.set(hits.get() + 1))
        };
        listeners.emit(&1);
        sub.unsubscribe();
        listeners.emit(&1);

        assert_eq!(hits.get(), 1);
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn test_subscription_outliving_registry_is_harmless() {
        let listeners = Listeners::<u32>::new();
        let sub = listeners.add(|_| {});
        drop(listeners);
        drop(sub);
    }

    #[test]
    fn test_listener_may_unsubscribe_during_emit() {
        let listeners = Listeners::<u32>::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let sub = {
            let slot = slot.clone();
            listeners.add(move |_| {
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(sub);

        listeners.emit(&0);
        assert_eq!(listeners.len(), 0);
    }
}
