//! Theme context hooks and the header toggle.
//!
//! The [`ThemeContext`] lives for the whole app; a signal mirrors its current
//! theme so components re-render on changes from the toggle or the OS.

use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;

use crate::theme::{Theme, ThemeContext};

/// Copyable handle to the app-wide theme state.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    context: CopyValue<ThemeContext>,
    current: Signal<Theme>,
}

impl ThemeHandle {
    /// Current theme (subscribes the calling component).
    pub fn theme(&self) -> Theme {
        (self.current)()
    }

    pub fn toggle(&self) {
        self.context.read().toggle_theme();
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider() -> ThemeHandle {
    let context = use_hook(|| CopyValue::new(ThemeContext::detect(Theme::Light)));
    let mut current = use_signal(|| context.read().theme());

    // Changes can arrive from a media-query callback outside the render
    // loop, so they are forwarded through a channel instead of written directly.
    use_hook(|| {
        let (tx, mut rx) = futures::channel::mpsc::unbounded();
        let subscription = context.read().subscribe(move |theme| {
            let _ = tx.unbounded_send(theme);
        });
        spawn(async move {
            while let Some(theme) = rx.next().await {
                current.set(theme);
            }
        });
        Rc::new(subscription)
    });

    use_context_provider(|| ThemeHandle { context, current })
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}

/// Light/dark toggle button for the header.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let is_dark = theme.theme().is_dark();
    let label = if is_dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            title: label,
            "aria-label": label,
            onclick: move |_| theme.toggle(),
            if is_dark {
                // Moon icon
                svg { class: "icon", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                    path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" }
                }
            } else {
                // Sun icon
                svg { class: "icon", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                    circle { cx: "12", cy: "12", r: "4" }
                    path { "stroke-linecap": "round", d: "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41" }
                }
            }
        }
    }
}
