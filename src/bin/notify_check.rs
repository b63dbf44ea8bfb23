//! Verify an EmailJS setup by sending one user confirmation.
//!
//! Reads the same configuration as the site (`intovah.toml` or `INTOVAH_*`
//! variables) and sends sample parameters to the user template. Pass a
//! recipient email as the first argument.

use anyhow::{bail, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use intovah_site::config::load_config;
use intovah_site::notify::{EmailJsClient, Notifier, Template, TemplateParams};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "intovah_site=debug,notify_check=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;
    let missing = config.emailjs.missing();
    if !missing.is_empty() {
        bail!("missing configuration: {}", missing.join(", "));
    }

    let recipient = std::env::args().nth(1).unwrap_or_default();
    let client = EmailJsClient::new(config.emailjs);
    if !client.is_configured(Template::AdminNotification) {
        tracing::info!("Admin template not configured; only the user template is checked");
    }

    let params = TemplateParams::new()
        .with("user_name", "Notify Check")
        .with("user_email", recipient)
        .with("user_phone", "+1-555-0100")
        .with("user_project", "Consult on something else")
        .with("user_interest", "Configuration check from notify-check");

    let delivery = client.send(Template::UserConfirmation, &params).await?;
    tracing::info!("EmailJS accepted the message (HTTP {})", delivery.status);

    Ok(())
}
