//! Client for the site's own sign-up endpoint.
//!
//! `POST {api_base_url}/api/send-email` with the template parameters as the
//! JSON body (`{"email": ...}`). There is no administrator copy.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{http_client, Delivery, Notifier, NotifyError, Template, TemplateParams};
use crate::config::NewsletterConfig;

const SEND_PATH: &str = "/api/send-email";

pub struct NewsletterClient {
    client: Client,
    config: NewsletterConfig,
}

impl NewsletterClient {
    pub fn new(config: NewsletterConfig) -> Self {
        Self {
            client: http_client(),
            config: config.normalized(),
        }
    }

    fn base_url(&self, template: Template) -> Result<&str, NotifyError> {
        if template == Template::AdminNotification {
            return Err(NotifyError::NotConfigured {
                missing: "newsletter admin template",
            });
        }
        self.config
            .api_base_url
            .as_deref()
            .ok_or(NotifyError::NotConfigured {
                missing: "newsletter api base url",
            })
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Notifier for NewsletterClient {
    fn check(&self, template: Template) -> Result<(), NotifyError> {
        self.base_url(template).map(|_| ())
    }

    async fn send(
        &self,
        template: Template,
        params: &TemplateParams,
    ) -> Result<Delivery, NotifyError> {
        let url = format!("{}{}", self.base_url(template)?, SEND_PATH);

        debug!("Sending newsletter sign-up");
        let response = self.client.post(&url).json(params).send().await?;

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

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> NewsletterClient {
        NewsletterClient::new(NewsletterConfig {
            api_base_url: Some(format!("{}/", server.uri())),
        })
    }

    fn params() -> TemplateParams {
        TemplateParams::new().with("email", "jane@example.com")
    }

    #[tokio::test]
    async fn test_send_posts_email_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(SEND_PATH))
            .and(body_json(serde_json::json!({ "email": "jane@example.com" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let delivery = client(&server)
            .send(Template::UserConfirmation, &params())
            .await
            .unwrap();
        assert_eq!(delivery.status, 200);
    }

    #[tokio::test]
    async fn test_server_error_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(SEND_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("mailer down"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server)
            .send(Template::UserConfirmation, &params())
            .await
            .unwrap_err();
        match err {
            NotifyError::Rejected { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "mailer down");
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_or_admin_sends_nothing() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client(&server);
        assert!(!client.is_configured(Template::AdminNotification));
        let err = client
            .send(Template::AdminNotification, &params())
            .await
            .unwrap_err();
        assert!(err.is_configuration());

        let unconfigured = NewsletterClient::new(NewsletterConfig {
            api_base_url: Some("  ".to_string()),
        });
        let err = unconfigured
            .send(Template::UserConfirmation, &params())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NotifyError::NotConfigured {
                missing: "newsletter api base url"
            }
        ));
    }
}
