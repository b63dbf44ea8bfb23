//! Operating environment light/dark signal (`prefers-color-scheme`).

use std::cell::Cell;
use std::rc::Rc;

use crate::subscription::{Listeners, Subscription};

/// Observer for the environment's "prefers dark" signal.
pub trait SystemPreference {
    /// Current signal, `None` when the environment has no such capability.
    fn signal(&self) -> Option<bool>;

    /// Current preference; dark when the capability is missing.
    fn currently_prefers_dark(&self) -> bool {
        self.signal().unwrap_or(true)
    }

    /// Register `handler` for change events. Dropping the handle removes it.
    fn subscribe(&self, handler: Box<dyn Fn(bool)>) -> Subscription;
}

/// Stub environment for headless rendering and tests.
///
/// Clones share state, so a test can keep one handle and flip the signal
/// with [`set_prefers_dark`](Self::set_prefers_dark) after giving another to
/// a theme context.
#[derive(Clone)]
pub struct HeadlessSystemPreference {
    prefers_dark: Rc<Cell<Option<bool>>>,
    listeners: Listeners<bool>,
}

impl HeadlessSystemPreference {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Rc::new(Cell::new(Some(prefers_dark))),
            listeners: Listeners::new(),
        }
    }

    /// No media query support at all.
    pub fn unsupported() -> Self {
        Self {
            prefers_dark: Rc::new(Cell::new(None)),
            listeners: Listeners::new(),
        }
    }

    /// Change the signal and notify subscribers.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.prefers_dark.set(Some(prefers_dark));
        self.listeners.emit(&prefers_dark);
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl SystemPreference for HeadlessSystemPreference {
    fn signal(&self) -> Option<bool> {
        self.prefers_dark.get()
    }

    fn subscribe(&self, handler: Box<dyn Fn(bool)>) -> Subscription {
        if self.prefers_dark.get().is_none() {
            return Subscription::empty();
        }
        self.listeners.add(move |prefers_dark: &bool| handler(*prefers_dark))
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::MediaQueryObserver;

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use super::SystemPreference;
    use crate::subscription::Subscription;

    const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

    /// `window.matchMedia("(prefers-color-scheme: dark)")`
    pub struct MediaQueryObserver {
        query: Option<web_sys::MediaQueryList>,
    }

    impl MediaQueryObserver {
        pub fn detect() -> Self {
            let query = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten());
            Self { query }
        }
    }

    impl SystemPreference for MediaQueryObserver {
        fn signal(&self) -> Option<bool> {
            self.query.as_ref().map(|q| q.matches())
        }

        fn subscribe(&self, handler: Box<dyn Fn(bool)>) -> Subscription {
            let Some(query) = self.query.clone() else {
                return Subscription::empty();
            };

            let closure = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |event: web_sys::MediaQueryListEvent| handler(event.matches()),
            );

            if let Err(e) =
                query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            {
                tracing::warn!("Unable to observe color scheme changes: {:?}", e);
                return Subscription::empty();
            }

            // The closure lives until the listener is removed.
            Subscription::new(move || {
                let _ = query
                    .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_unsupported_defaults_to_dark() {
        let system = HeadlessSystemPreference::unsupported();
        assert_eq!(system.signal(), None);
        assert!(system.currently_prefers_dark());
    }

    #[test]
    fn test_signal_reflects_changes() {
        let system = HeadlessSystemPreference::new(false);
        assert!(!system.currently_prefers_dark());
        system.set_prefers_dark(true);
        assert_eq!(system.signal(), Some(true));
    }

    #[test]
    fn test_subscribe_and_dispose() {
        let system = HeadlessSystemPreference::new(true);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sub = {
            let seen = seen.clone();
            system.subscribe(Box::new(move |dark| seen.borrow_mut().push(dark)))
        };
        assert_eq!(system.subscriber_count(), 1);

        system.set_prefers_dark(false);
        system.set_prefers_dark(true);
        drop(sub);
        system.set_prefers_dark(false);

        assert_eq!(*seen.borrow(), vec![false, true]);
        assert_eq!(system.subscriber_count(), 0);
    }

    #[test]
    fn test_unsupported_subscribe_is_inert() {
        let system = HeadlessSystemPreference::unsupported();
        let _sub = system.subscribe(Box::new(|_| {}));
        assert_eq!(system.subscriber_count(), 0);
    }
}
