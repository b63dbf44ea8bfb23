//! Configuration management

use serde::Deserialize;

/// Compile-time env names for the browser build.
pub const ENV_SERVICE_ID: &str = "INTOVAH_EMAILJS__SERVICE_ID";
pub const ENV_PUBLIC_KEY: &str = "INTOVAH_EMAILJS__PUBLIC_KEY";
pub const ENV_USER_TEMPLATE_ID: &str = "INTOVAH_EMAILJS__USER_TEMPLATE_ID";
pub const ENV_ADMIN_TEMPLATE_ID: &str = "INTOVAH_EMAILJS__ADMIN_TEMPLATE_ID";
pub const ENV_NEWSLETTER_API_BASE_URL: &str = "INTOVAH_NEWSLETTER__API_BASE_URL";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub newsletter: NewsletterConfig,
}

/// Backend for the hero sign-up form.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct NewsletterConfig {
    /// Origin serving `/api/send-email`. Blank counts as missing.
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl NewsletterConfig {
    pub fn from_build_env() -> Self {
        Self {
            api_base_url: present(option_env!("INTOVAH_NEWSLETTER__API_BASE_URL")),
        }
        .normalized()
    }

    pub fn normalized(self) -> Self {
        Self {
            api_base_url: present(self.api_base_url.as_deref())
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        }
    }
}

/// EmailJS identifiers. Every field may be missing; blank counts as missing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EmailJsConfig {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub user_template_id: Option<String>,
    #[serde(default)]
    pub admin_template_id: Option<String>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "https://api.emailjs.com".to_string()
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            public_key: None,
            user_template_id: None,
            admin_template_id: None,
            api_url: default_api_url(),
        }
    }
}

fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl EmailJsConfig {
    /// Identifiers baked in at compile time (the wasm bundle has no runtime env).
    pub fn from_build_env() -> Self {
        Self {
            service_id: present(option_env!("INTOVAH_EMAILJS__SERVICE_ID")),
            public_key: present(option_env!("INTOVAH_EMAILJS__PUBLIC_KEY")),
            user_template_id: present(option_env!("INTOVAH_EMAILJS__USER_TEMPLATE_ID")),
            admin_template_id: present(option_env!("INTOVAH_EMAILJS__ADMIN_TEMPLATE_ID")),
            api_url: default_api_url(),
        }
    }

    /// Drop blank identifiers and trailing slashes on the endpoint.
    pub fn normalized(self) -> Self {
        Self {
            service_id: present(self.service_id.as_deref()),
            public_key: present(self.public_key.as_deref()),
            user_template_id: present(self.user_template_id.as_deref()),
            admin_template_id: present(self.admin_template_id.as_deref()),
            api_url: self.api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Names of the identifiers a user confirmation send still needs.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.service_id.is_none() {
            missing.push(ENV_SERVICE_ID);
        }
        if self.public_key.is_none() {
            missing.push(ENV_PUBLIC_KEY);
        }
        if self.user_template_id.is_none() {
            missing.push(ENV_USER_TEMPLATE_ID);
        }
        missing
    }
}

/// Load configuration from `intovah.{toml,yaml,json}` (or `$INTOVAH_CONFIG`)
/// and `INTOVAH_*` environment variables.
#[cfg(feature = "native")]
pub fn load_config() -> anyhow::Result<SiteConfig> {
    let file = std::env::var("INTOVAH_CONFIG").unwrap_or_else(|_| "intovah".to_string());

    let config = ::config::Config::builder()
        // Load from config file if it exists
        .add_source(::config::File::with_name(&file).required(false))
        // Override with environment variables (INTOVAH_EMAILJS__SERVICE_ID, etc.)
        .add_source(
            ::config::Environment::with_prefix("INTOVAH")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut site: SiteConfig = config.try_deserialize()?;
    site.emailjs = site.emailjs.normalized();
    site.newsletter = site.newsletter.normalized();
    Ok(site)
}
