//! Frequently asked questions.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;

struct FaqGroup {
    category: &'static str,
    items: &'static [(&'static str, &'static str)],
}

const FAQ_GROUPS: &[FaqGroup] = &[
    FaqGroup {
        category: "Working with Intovah",
        items: &[
            (
                "What kinds of engagements do you support?",
                "We lead end-to-end product builds, modernise legacy estates, augment existing squads, and run capability accelerators for AI, data, and SRE.",
            ),
            (
                "How do engagements typically begin?",
                "Every partnership starts with discovery labs and architectural framing. Within ten business days you receive a roadmap, pod composition, and clear success metrics.",
            ),
            (
                "Can you embed with our internal teams?",
                "Yes. Our pods plug into your rituals and tooling. We co-own a single backlog, align on governance, and make sure knowledge transfer is built into every sprint.",
            ),
        ],
    },
    FaqGroup {
        category: "Delivery & operations",
        items: &[
            (
                "What is your release cadence?",
                "We ship continuously. Most clients see production releases inside the first sprint with automated tests, observability, and rollback strategies in place.",
            ),
            (
                "How do you manage security and compliance?",
                "Security is embedded in our SDLC. We handle threat modelling, IaC guardrails, and compliance mappings for SOC 2, ISO 27001, HIPAA, GDPR, and region-specific regulators.",
            ),
            (
                "What happens after launch?",
                "Choose from shared success pods, SRE retainers, or enablement programmes. We stay close until your teams are fully confident running the platform.",
            ),
        ],
    },
];

#[component]
pub fn Faqs() -> Element {
    rsx! {
        Layout {
            title: "FAQs".to_string(),
            nav_active: "faqs".to_string(),

            h1 { "Frequently asked questions" }

            for group in FAQ_GROUPS.iter() {
                section { key: "{group.category}", class: "card",
                    h2 { "{group.category}" }
                    for (question, answer) in group.items.iter() {
                        details { key: "{question}",
                            summary { "{question}" }
                            p { "{answer}" }
                        }
                    }
                }
            }

            p {
                "Still have questions? "
                Link { to: Route::Contact {}, "Talk to our team" }
                "."
            }
        }
    }
}
