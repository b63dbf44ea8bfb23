//! Project enquiry page.

use dioxus::prelude::*;

use crate::app::components::{Layout, LeadForm};
use crate::forms::CONTACT_FORM;

#[component]
pub fn Contact() -> Element {
    rsx! {
        Layout {
            title: "Contact".to_string(),
            nav_active: "contact".to_string(),

            section {
                small { "Let’s build together" }
                h1 { "Tell us what you're building, we'll assemble the squad to ship it" }
                p {
                    "Whether you need a cross-functional pod to deliver a product increment, platform experts "
                    "to modernise critical systems, or strategic guidance on AI initiatives, we’ll meet you "
                    "where you are and move fast together."
                }
            }

            section {
                h2 { "Project enquiry" }
                LeadForm { spec: &CONTACT_FORM }
                small { "We reply within one business day." }
            }
        }
    }
}
