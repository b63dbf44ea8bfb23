//! Theme broadcast context.
//!
//! One [`ThemeContext`] is built at app start and handed to the render tree.
//! It owns the resolved theme, the preference store and the system-signal
//! subscription; every mutation goes compute -> persist -> publish -> apply.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::appearance::{DetachedRoot, RootAppearance};
use super::store::PreferenceStore;
use super::system::{HeadlessSystemPreference, SystemPreference};
use super::{resolve_initial, Theme};
use crate::subscription::{Listeners, Subscription};

/// Capabilities the context is built from.
pub struct ThemeEnvironment {
    pub store: PreferenceStore,
    pub system: Box<dyn SystemPreference>,
    pub root: Box<dyn RootAppearance>,
}

impl ThemeEnvironment {
    /// No storage, no media queries, no document.
    pub fn headless() -> Self {
        Self {
            store: PreferenceStore::unavailable(),
            system: Box::new(HeadlessSystemPreference::unsupported()),
            root: Box::new(DetachedRoot),
        }
    }

    /// localStorage, `matchMedia` and the `<html>` class list.
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        use super::appearance::DocumentRoot;
        use super::store::BrowserStorage;
        use super::system::MediaQueryObserver;

        let store = match BrowserStorage::detect() {
            Some(storage) => PreferenceStore::new(storage),
            None => PreferenceStore::unavailable(),
        };
        Self {
            store,
            system: Box::new(MediaQueryObserver::detect()),
            root: Box::new(DocumentRoot),
        }
    }

    /// The real environment for the current target.
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::browser()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::headless()
        }
    }
}

struct Inner {
    theme: Theme,
    store: PreferenceStore,
    root: Box<dyn RootAppearance>,
    // Dropped with the context, which removes the system listener.
    system_subscription: Option<Subscription>,
}

/// Shared theme state: `{ theme, set_theme, toggle_theme }`.
#[derive(Clone)]
pub struct ThemeContext {
    inner: Rc<RefCell<Inner>>,
    listeners: Listeners<Theme>,
}

impl ThemeContext {
    /// Resolve the initial theme, apply it and start following the system signal.
    pub fn new(env: ThemeEnvironment, fallback: Theme) -> Self {
        let ThemeEnvironment {
            store,
            system,
            root,
        } = env;

        let theme = resolve_initial(&store, system.as_ref(), fallback);
        root.apply(theme);
        debug!("Initial theme resolved to {}", theme);

        let context = Self {
            inner: Rc::new(RefCell::new(Inner {
                theme,
                store,
                root,
                system_subscription: None,
            })),
            listeners: Listeners::new(),
        };

        let weak = Rc::downgrade(&context.inner);
        let listeners = context.listeners.clone();
        let subscription = system.subscribe(Box::new(move |prefers_dark| {
            if let Some(inner) = weak.upgrade() {
                let context = ThemeContext {
                    inner,
                    listeners: listeners.clone(),
                };
                context.follow_system(prefers_dark);
            }
        }));
        context.inner.borrow_mut().system_subscription = Some(subscription);

        context
    }

    /// Build against [`ThemeEnvironment::detect`].
    pub fn detect(fallback: Theme) -> Self {
        Self::new(ThemeEnvironment::detect(), fallback)
    }

    pub fn theme(&self) -> Theme {
        self.inner.borrow().theme
    }

    pub fn set_theme(&self, theme: Theme) {
        self.update_theme(|_| theme);
    }

    /// Set the theme from the previous value.
    ///
    /// `update` runs with no borrow held, so it may read the context.
    pub fn update_theme(&self, update: impl FnOnce(Theme) -> Theme) {
        let previous = self.theme();
        let next = update(previous);
        {
            let mut inner = self.inner.borrow_mut();
            inner.theme = next;
            inner.store.write(next);
        }
        self.publish(next);
    }

    pub fn toggle_theme(&self) {
        self.update_theme(Theme::toggled);
    }

    /// Called with every published theme. Dropping the handle unsubscribes.
    pub fn subscribe(&self, listener: impl Fn(Theme) + 'static) -> Subscription {
        self.listeners.add(move |theme: &Theme| listener(*theme))
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn follow_system(&self, prefers_dark: bool) {
        let next = {
            let mut inner = self.inner.borrow_mut();
            if inner.store.read().is_some() {
                debug!("System color scheme changed; stored preference keeps the theme");
                return;
            }
            let next = Theme::from_prefers_dark(prefers_dark);
            if inner.theme == next {
                return;
            }
            inner.theme = next;
            next
        };
        debug!("Following system color scheme: {}", next);
        self.publish(next);
    }

    fn publish(&self, theme: Theme) {
        self.listeners.emit(&theme);

        // A listener may have changed the theme again; apply whatever is current.
        let inner = self.inner.borrow();
        inner.root.apply(inner.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::store::{KeyValueStorage, MemoryStorage, StorageError};
    use crate::theme::STORAGE_KEY;

    type Journal = Rc<RefCell<Vec<String>>>;

    struct JournalRoot(Journal);

    impl RootAppearance for JournalRoot {
        fn apply(&self, theme: Theme) {
            self.0.borrow_mut().push(format!("apply {}", theme));
        }
    }

    struct JournalStorage {
        journal: Journal,
        backing: MemoryStorage,
    }

    impl KeyValueStorage for JournalStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.backing.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.journal.borrow_mut().push(format!("persist {}", value));
            self.backing.set_item(key, value)
        }
    }

    fn env(storage: &MemoryStorage, system: &HeadlessSystemPreference) -> ThemeEnvironment {
        ThemeEnvironment {
            store: PreferenceStore::new(storage.clone()),
            system: Box::new(system.clone()),
            root: Box::new(DetachedRoot),
        }
    }

    #[test]
    fn test_initial_theme_follows_system_without_preference() {
        for prefers_dark in [true, false] {
            let storage = MemoryStorage::new();
            let system = HeadlessSystemPreference::new(prefers_dark);
            let ctx = ThemeContext::new(env(&storage, &system), Theme::Light);
            assert_eq!(ctx.theme(), Theme::from_prefers_dark(prefers_dark));
        }
    }

    #[test]
    fn test_headless_uses_fallback() {
        let ctx = ThemeContext::new(ThemeEnvironment::headless(), Theme::Light);
        assert_eq!(ctx.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_and_publishes() {
        let storage = MemoryStorage::new();
        let system = HeadlessSystemPreference::new(true);
        let ctx = ThemeContext::new(env(&storage, &system), Theme::Light);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            ctx.subscribe(move |t| seen.borrow_mut().push(t))
        };

        ctx.toggle_theme();
        assert_eq!(ctx.theme(), Theme::Light);
        assert_eq!(storage.get(STORAGE_KEY).as_deref(), Some("light"));

        ctx.toggle_theme();
        assert_eq!(ctx.theme(), Theme::Dark);
        assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Dark]);
    }

    #[test]
    fn test_update_theme_sees_previous_value() {
        let storage = MemoryStorage::new();
        let system = HeadlessSystemPreference::new(false);
        let ctx = ThemeContext::new(env(&storage, &system), Theme::Light);

        let mut previous = None;
        ctx.update_theme(|prev| {
            previous = Some(prev);
            Theme::Dark
        });
        assert_eq!(previous, Some(Theme::Light));
        assert_eq!(ctx.theme(), Theme::Dark);
    }

    #[test]
    fn test_updater_may_read_context() {
        let storage = MemoryStorage::new();
        let system = HeadlessSystemPreference::new(true);
        let ctx = ThemeContext::new(env(&storage, &system), Theme::Light);

        let shared = ctx.clone();
        ctx.update_theme(move |_| shared.theme().toggled());

        assert_eq!(ctx.theme(), Theme::Light);
        assert_eq!(storage.get(STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_system_change_followed_without_preference() {
        let storage = MemoryStorage::new();
        let system = HeadlessSystemPreference::new(true);
        let ctx = ThemeContext::new(env(&storage, &system), Theme::Light);

        system.set_prefers_dark(false);
        assert_eq!(ctx.theme(), Theme::Light);
        system.set_prefers_dark(true);
        assert_eq!(ctx.theme(), Theme::Dark);

        // Following the system never writes a preference.
        assert_eq!(storage.get(STORAGE_KEY), None);
    }

    #[test]
    fn test_explicit_choice_pins_against_system_changes() {
        for prefers_dark in [true, false] {
            let storage = MemoryStorage::new();
            let system = HeadlessSystemPreference::new(prefers_dark);
            let ctx = ThemeContext::new(env(&storage, &system), Theme::Light);

            ctx.toggle_theme();
            let chosen = ctx.theme();

            // Fire the opposite of the user's explicit choice.
            system.set_prefers_dark(!chosen.is_dark());
            assert_eq!(ctx.theme(), chosen);
            system.set_prefers_dark(chosen.is_dark());
            system.set_prefers_dark(!chosen.is_dark());
            assert_eq!(ctx.theme(), chosen);
        }
    }

    #[test]
    fn test_preference_round_trips_into_fresh_context() {
        for theme in [Theme::Light, Theme::Dark] {
            let storage = MemoryStorage::new();
            let system = HeadlessSystemPreference::new(!theme.is_dark());

            ThemeContext::new(env(&storage, &system), Theme::Light).set_theme(theme);

            let fresh = ThemeContext::new(env(&storage, &system), Theme::Light);
            assert_eq!(fresh.theme(), theme);
        }
    }

    #[test]
    fn test_mutation_order() {
        let journal: Journal = Rc::new(RefCell::new(Vec::new()));
        let system = HeadlessSystemPreference::new(true);
        let ctx = ThemeContext::new(
            ThemeEnvironment {
                store: PreferenceStore::new(JournalStorage {
                    journal: journal.clone(),
                    backing: MemoryStorage::new(),
                }),
                system: Box::new(system),
                root: Box::new(JournalRoot(journal.clone())),
            },
            Theme::Light,
        );
        assert_eq!(*journal.borrow(), vec!["apply dark"]);
        journal.borrow_mut().clear();

        let _sub = {
            let journal = journal.clone();
            ctx.subscribe(move |t| journal.borrow_mut().push(format!("publish {}", t)))
        };
        ctx.set_theme(Theme::Light);

        assert_eq!(
            *journal.borrow(),
            vec!["persist light", "publish light", "apply light"]
        );
    }

    #[test]
    fn test_persist_failure_still_publishes() {
        let storage = MemoryStorage::new();
        storage.set_failing(true);
        let system = HeadlessSystemPreference::new(true);
        let ctx = ThemeContext::new(env(&storage, &system), Theme::Light);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            ctx.subscribe(move |t| seen.borrow_mut().push(t))
        };

        ctx.set_theme(Theme::Light);
        assert_eq!(ctx.theme(), Theme::Light);
        assert_eq!(*seen.borrow(), vec![Theme::Light]);
    }

    #[test]
    fn test_single_system_subscription_released_on_drop() {
        let storage = MemoryStorage::new();
        let system = HeadlessSystemPreference::new(true);

        let ctx = ThemeContext::new(env(&storage, &system), Theme::Light);
        let clone = ctx.clone();
        assert_eq!(system.subscriber_count(), 1);

        drop(ctx);
        assert_eq!(system.subscriber_count(), 1);
        drop(clone);
        assert_eq!(system.subscriber_count(), 0);
    }

    #[test]
    fn test_listener_unsubscribe() {
        let storage = MemoryStorage::new();
        let system = HeadlessSystemPreference::new(true);
        let ctx = ThemeContext::new(env(&storage, &system), Theme::Light);

        let sub = ctx.subscribe(|_| {});
        assert_eq!(ctx.subscriber_count(), 1);
        drop(sub);
        assert_eq!(ctx.subscriber_count(), 0);
    }
}
