//! Landing page.

use dioxus::prelude::*;

use crate::app::components::{Layout, LeadForm};
use crate::app::Route;
use crate::forms::NEWSLETTER_FORM;

#[component]
pub fn Home() -> Element {
    rsx! {
        Layout {
            title: "Home".to_string(),
            nav_active: "home".to_string(),

            section { class: "hero",
                h1 { "intovah: On the Verge of Innovation" }
                p {
                    "At Intovah, we don’t just follow trends; we create them. "
                    "Let’s redefine what your business can achieve together."
                }
                div { class: "nav-actions",
                    Link { class: "submit", to: Route::Contact {}, "Start a project" }
                    Link { class: "nav-link", to: Route::Faqs {}, "Read the FAQs" }
                }
                LeadForm { spec: &NEWSLETTER_FORM }
            }
        }
    }
}
