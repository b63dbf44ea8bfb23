//! Dioxus application entry point.
//!
//! This module provides the root App component: it wires the theme context
//! and the notification services, then hands off to the router.

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

pub mod components;
pub mod pages;

use crate::config::{EmailJsConfig, NewsletterConfig};
use crate::forms::detach::{Detach, DioxusDetach};
use crate::forms::timer::{DioxusTimer, Timer};
use crate::forms::{Channel, FormServices, FormSpec};
use crate::notify::{EmailJsClient, NewsletterClient, Notifier};
use components::use_theme_provider;
use pages::{About, Contact, Faqs, Home, Support};

/// Shared services handed to lead forms via context.
#[derive(Clone)]
pub struct SiteServices {
    pub emailjs: Arc<dyn Notifier>,
    pub newsletter: Arc<dyn Notifier>,
    pub detach: Rc<dyn Detach>,
    pub timer: Rc<dyn Timer>,
}

impl SiteServices {
    /// Clients configured from identifiers baked in at build time.
    pub fn from_build_env() -> Self {
        let config = EmailJsConfig::from_build_env();
        let missing = config.missing();
        if !missing.is_empty() {
            tracing::warn!("Email delivery not configured, missing: {}", missing.join(", "));
        }
        let newsletter = NewsletterConfig::from_build_env();
        if newsletter.api_base_url.is_none() {
            tracing::warn!(
                "Newsletter sign-up not configured, missing: {}",
                crate::config::ENV_NEWSLETTER_API_BASE_URL
            );
        }

        Self {
            emailjs: Arc::new(EmailJsClient::new(config)),
            newsletter: Arc::new(NewsletterClient::new(newsletter)),
            detach: Rc::new(DioxusDetach),
            timer: Rc::new(DioxusTimer),
        }
    }

    /// Services for a form, routed to the notifier its channel names.
    pub fn for_form(&self, spec: &FormSpec) -> FormServices {
        let notifier = match spec.channel {
            Channel::EmailJs => self.emailjs.clone(),
            Channel::Newsletter => self.newsletter.clone(),
        };
        FormServices {
            notifier,
            detach: self.detach.clone(),
            timer: self.timer.clone(),
        }
    }
}

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Theme context at app root (one preference store and media-query listener)
    use_theme_provider();
    use_context_provider(SiteServices::from_build_env);

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/faqs")]
    Faqs {},
    #[route("/support")]
    Support {},
}
