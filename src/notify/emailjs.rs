//! EmailJS REST client.
//!
//! `POST {api_url}/api/v1.0/email/send` with the service id, template id,
//! public key and template parameters as JSON. Any 2xx is a delivery.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::{http_client, Delivery, Notifier, NotifyError, Template, TemplateParams};
use crate::config::EmailJsConfig;

const SEND_PATH: &str = "/api/v1.0/email/send";

/// Request body for the send endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    /// EmailJS calls the public key `user_id`.
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Identifiers that passed [`Notifier::check`].
struct Target<'a> {
    service_id: &'a str,
    template_id: &'a str,
    public_key: &'a str,
}

pub struct EmailJsClient {
    client: Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            client: http_client(),
            config: config.normalized(),
        }
    }

    fn target(&self, template: Template) -> Result<Target<'_>, NotifyError> {
        let service_id = self
            .config
            .service_id
            .as_deref()
            .ok_or(NotifyError::NotConfigured {
                missing: "service id",
            })?;
        let public_key = self
            .config
            .public_key
            .as_deref()
            .ok_or(NotifyError::NotConfigured {
                missing: "public key",
            })?;
        let template_id = match template {
            Template::UserConfirmation => self.config.user_template_id.as_deref().ok_or(
                NotifyError::NotConfigured {
                    missing: "user template id",
                },
            )?,
            Template::AdminNotification => self.config.admin_template_id.as_deref().ok_or(
                NotifyError::NotConfigured {
                    missing: "admin template id",
                },
            )?,
        };

        Ok(Target {
            service_id,
            template_id,
            public_key,
        })
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Notifier for EmailJsClient {
    fn check(&self, template: Template) -> Result<(), NotifyError> {
        self.target(template).map(|_| ())
    }

    async fn send(
        &self,
        template: Template,
        params: &TemplateParams,
    ) -> Result<Delivery, NotifyError> {
        let target = self.target(template)?;
        let url = format!("{}{}", self.config.api_url, SEND_PATH);

        let request = SendRequest {
            service_id: target.service_id,
            template_id: target.template_id,
            user_id: target.public_key,
            template_params: params,
        };

        debug!("Sending {} via EmailJS", template.as_str());
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(Delivery {
                status: status.as_u16(),
            });
        }

        Err(NotifyError::Rejected {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}
