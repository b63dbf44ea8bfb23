//! Layout component wrapping all pages with the site chrome.

use dioxus::prelude::*;

use super::nav::Nav;
use super::transition::{PageTransition, TRANSITION_STYLES};
use crate::theme::THEME_SCRIPT;

/// CSS styles for the application.
const CUSTOM_STYLES: &str = r#"
:root.light { --bg: #fafaf9; --fg: #1c1917; --muted: #78716c; --card: #ffffff; --border: #e7e5e4; --accent: #4f46e5; }
:root.dark { --bg: #0c0a09; --fg: #f5f5f4; --muted: #a8a29e; --card: #1c1917; --border: #292524; --accent: #818cf8; }
body { margin: 0; background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; transition: background 0.2s, color 0.2s; }
.container { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
.site-nav { display: flex; align-items: center; justify-content: space-between; height: 4rem; }
.brand { font-weight: 700; font-size: 1.25rem; color: var(--fg); text-decoration: none; }
.nav-links { display: flex; gap: 1rem; }
.nav-link { color: var(--muted); text-decoration: none; padding: 0.5rem 0.75rem; border-radius: 0.375rem; }
.nav-link.active, .nav-link:hover { color: var(--fg); background: var(--border); }
.nav-actions { display: flex; gap: 0.5rem; align-items: center; }
.theme-toggle, .menu-button { background: none; border: 1px solid var(--border); color: var(--fg); border-radius: 9999px; padding: 0.4rem; cursor: pointer; }
.menu-button { display: none; }
.mobile-menu { display: none; }
.icon { width: 1.25rem; height: 1.25rem; display: block; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0,0,0,0); }
@media (max-width: 768px) {
    .nav-links { display: none; }
    .menu-button { display: block; }
    .mobile-menu.open { display: flex; flex-direction: column; padding: 0.5rem 1.5rem; }
}
.card { background: var(--card); border: 1px solid var(--border); border-radius: 1rem; padding: 1.5rem; }
.lead-form { display: grid; gap: 1rem; }
.field label { display: block; font-weight: 600; margin-bottom: 0.25rem; }
.field input, .field select, .field textarea { width: 100%; box-sizing: border-box; padding: 0.6rem; border: 1px solid var(--border); border-radius: 0.5rem; background: var(--bg); color: var(--fg); }
.field-error { color: #dc2626; font-size: 0.875rem; }
.submit { background: var(--accent); color: #fff; border: none; border-radius: 0.5rem; padding: 0.75rem 1.25rem; font-weight: 600; cursor: pointer; }
.submit:disabled { opacity: 0.6; cursor: wait; }
.notice { border-radius: 0.5rem; padding: 0.75rem 1rem; display: flex; justify-content: space-between; gap: 1rem; }
.notice-pending { background: var(--border); }
.notice-success { background: #dcfce7; color: #14532d; }
.notice-error { background: #fee2e2; color: #7f1d1d; }
.notice button { background: none; border: none; color: inherit; cursor: pointer; }
small { color: var(--muted); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let full_title = format!("{} - Intovah", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Style { {CUSTOM_STYLES} }
        document::Style { {TRANSITION_STYLES} }
        // Theme init runs immediately (no DOM needed) to prevent flash
        document::Script { {THEME_SCRIPT} }

        header { class: "container",
            Nav { active: props.nav_active.clone() }
        }
        main { class: "container",
            PageTransition {
                {props.children}
            }
        }
        footer { class: "container",
            small { "© Intovah. All rights reserved." }
        }
    }
}
