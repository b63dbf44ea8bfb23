//! Site header navigation.

use dioxus::prelude::*;

use super::theme::ThemeToggle;
use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "contact")
    pub active: String,
}

/// Brand, page links, theme toggle and a mobile menu.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let mut menu_open = use_signal(|| false);

    let links = [
        ("home", "Home", Route::Home {}),
        ("about", "About", Route::About {}),
        ("faqs", "FAQs", Route::Faqs {}),
        ("support", "Support", Route::Support {}),
        ("contact", "Contact", Route::Contact {}),
    ];

    let link_class = |page: &str| {
        if props.active == page {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let mobile_menu_class = if menu_open() {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };

    rsx! {
        nav { class: "site-nav",
            Link { class: "brand", to: Route::Home {}, "Intovah" }

            // Desktop navigation
            div { class: "nav-links",
                for (id, label, to) in links.iter().cloned() {
                    Link { key: "{id}", class: link_class(id), to, "{label}" }
                }
            }

            div { class: "nav-actions",
                ThemeToggle {}
                button {
                    class: "menu-button",
                    r#type: "button",
                    "aria-expanded": "{menu_open()}",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "sr-only", "Toggle menu" }
                    if menu_open() {
                        // X icon
                        svg { class: "icon", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                            path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M6 18L18 6M6 6l12 12" }
                        }
                    } else {
                        // Hamburger icon
                        svg { class: "icon", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                            path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M4 6h16M4 12h16M4 18h16" }
                        }
                    }
                }
            }
        }

        // Mobile menu
        div { class: "{mobile_menu_class}", id: "mobile-menu",
            for (id, label, to) in links.iter().cloned() {
                Link {
                    key: "{id}",
                    class: link_class(id),
                    to,
                    onclick: move |_| menu_open.set(false),
                    "{label}"
                }
            }
        }
    }
}
