//! Outbound notification client.
//!
//! Lead forms hand a flat parameter bag to an email backend (EmailJS or the
//! site's sign-up endpoint).
//! One round trip per send, no retries; the caller decides whether a send is
//! required or best-effort.

pub mod emailjs;
pub mod newsletter;

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

pub use emailjs::EmailJsClient;
pub use newsletter::NewsletterClient;

/// Which provider template a send targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Template {
    /// Confirmation delivered to the person who filled in the form.
    UserConfirmation,
    /// Copy for the site owners.
    AdminNotification,
}

impl Template {
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::UserConfirmation => "user_confirmation",
            Template::AdminNotification => "admin_notification",
        }
    }
}

/// Flat string-keyed template parameters, passed through verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateParams(BTreeMap<String, String>);

impl TemplateParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Successful provider response. The body is not interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delivery {
    pub status: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// A required identifier is missing; nothing was sent.
    #[error("email delivery is not configured (missing {missing})")]
    NotConfigured { missing: &'static str },

    /// The request never produced a response.
    #[error("email request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("email provider returned {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl NotifyError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, NotifyError::NotConfigured { .. })
    }

    /// Network or non-2xx failure.
    pub fn is_transport(&self) -> bool {
        !self.is_configuration()
    }
}

/// Shared HTTP client with a request timeout where the platform supports one.
pub(crate) fn http_client() -> Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to build HTTP client with custom config: {}. Using default.",
                    e
                );
                Client::default()
            })
    }
    #[cfg(target_arch = "wasm32")]
    {
        Client::new()
    }
}

/// `Send + Sync` on native targets, nothing on wasm32 where futures are `!Send`.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync + ?Sized> MaybeSend for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}
#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSend for T {}

/// Transactional email dispatch.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Notifier: MaybeSend {
    /// Fail with [`NotifyError::NotConfigured`] if `template` cannot be sent.
    /// Never touches the network.
    fn check(&self, template: Template) -> Result<(), NotifyError>;

    fn is_configured(&self, template: Template) -> bool {
        self.check(template).is_ok()
    }

    /// Single round trip. Must run [`check`](Self::check) before any I/O.
    async fn send(
        &self,
        template: Template,
        params: &TemplateParams,
    ) -> Result<Delivery, NotifyError>;
}
