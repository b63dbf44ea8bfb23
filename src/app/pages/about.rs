//! About page.

use dioxus::prelude::*;

use crate::app::components::Layout;

#[component]
pub fn About() -> Element {
    rsx! {
        Layout {
            title: "About".to_string(),
            nav_active: "about".to_string(),

            article { class: "card",
                h1 { "About" }
                p { strong { "intovah: On the Verge of Innovation" } }
                p {
                    "At Intovah, we don’t just follow trends; we create them. "
                    "Let’s redefine what your business can achieve together."
                }
            }
        }
    }
}
