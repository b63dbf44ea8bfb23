//! Intovah site entry point.
//!
//! The site is a browser app: build it with `dx serve --no-default-features --features web`.
//! A native build reports the email configuration and exits.

#[cfg(feature = "web")]
fn main() {
    dioxus::launch(intovah_site::app::App);
}

#[cfg(all(feature = "native", not(feature = "web")))]
fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "intovah_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = intovah_site::config::load_config()?;
    let missing = config.emailjs.missing();
    if missing.is_empty() {
        tracing::info!("Email delivery configured ({})", config.emailjs.api_url);
    } else {
        tracing::warn!("Email delivery not configured, missing: {}", missing.join(", "));
    }
    match config.newsletter.api_base_url.as_deref() {
        Some(url) => tracing::info!("Newsletter sign-up configured ({})", url),
        None => tracing::warn!(
            "Newsletter sign-up not configured, missing: {}",
            intovah_site::config::ENV_NEWSLETTER_API_BASE_URL
        ),
    }
    tracing::info!("Serve the site with `dx serve --no-default-features --features web`");

    Ok(())
}

#[cfg(not(any(feature = "web", feature = "native")))]
fn main() {}
