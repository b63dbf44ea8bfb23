//! Support desk page.

use dioxus::prelude::*;

use crate::app::components::{Layout, LeadForm};
use crate::forms::SUPPORT_FORM;

#[component]
pub fn Support() -> Element {
    rsx! {
        Layout {
            title: "Support".to_string(),
            nav_active: "support".to_string(),

            section {
                small { "Support desk" }
                h1 { "We’re on call globally so your roadmap never stalls" }
                p {
                    "Our follow-the-sun model gives you access to engineers, designers, and product leads who "
                    "already know your context."
                }
                p {
                    "If you're already using our products, you can contact us here and we'll respond as soon as possible."
                }
            }

            section {
                h2 { "Open a request" }
                LeadForm { spec: &SUPPORT_FORM }
            }
        }
    }
}
