//! Lead-capture forms: field definitions, drafts and local validation.
//!
//! The contact and support pages and the home hero each own one
//! [`SubmissionController`] built from a static [`FormSpec`].

pub mod controller;
pub mod detach;
pub mod timer;

use std::collections::BTreeMap;

use crate::notify::TemplateParams;

pub use controller::{
    FormServices, FormSnapshot, Notice, NoticeTone, SubmissionController, SubmissionStatus,
    SubmitOutcome,
};
pub use detach::{Detach, DetachedTask};
pub use timer::Timer;

pub const NOT_CONFIGURED_MESSAGE: &str =
    "Email delivery is not configured yet. Please try again soon.";
pub const SEND_FAILED_MESSAGE: &str = "We could not send your message. Please try again shortly.";
pub const NEWSLETTER_FAILED_MESSAGE: &str = "Failed to send email. Please try again.";

pub const PROJECT_OPTIONS: &[&str] = &[
    "IntoStock",
    "IntoShop",
    "IntoPing",
    "IntoPocket",
    "IntoHost",
    "Consult on something else",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select(&'static [&'static str]),
    TextArea { rows: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Draft key and DOM id suffix
    pub name: &'static str,
    pub label: &'static str,
    /// Template parameter name sent to the provider
    pub param: &'static str,
    pub required: bool,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
    pub autocomplete: Option<&'static str>,
}

/// Which delivery backend a form submits through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    EmailJs,
    Newsletter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormSpec {
    pub id: &'static str,
    pub channel: Channel,
    pub fields: &'static [FieldSpec],
    pub submit_label: &'static str,
    pub pending_message: &'static str,
    /// `{name}` is replaced with the submitted name.
    pub success_message: &'static str,
    /// Shown when a configured send fails.
    pub failure_message: &'static str,
    /// Send values with surrounding whitespace removed.
    pub trim_values: bool,
}

impl FormSpec {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn success_text(&self, draft: &Draft) -> String {
        let name = draft.get("name").trim();
        let name = if name.is_empty() { "there" } else { name };
        self.success_message.replace("{name}", name)
    }
}

pub static CONTACT_FORM: FormSpec = FormSpec {
    id: "contact",
    channel: Channel::EmailJs,
    fields: &[
        FieldSpec {
            name: "name",
            label: "Name",
            param: "user_name",
            required: true,
            kind: FieldKind::Text,
            placeholder: None,
            autocomplete: Some("name"),
        },
        FieldSpec {
            name: "phone",
            label: "Phone number",
            param: "user_phone",
            required: true,
            kind: FieldKind::Tel,
            placeholder: Some("Include country/area code"),
            autocomplete: Some("tel"),
        },
        FieldSpec {
            name: "company",
            label: "Company (optional)",
            param: "user_company",
            required: false,
            kind: FieldKind::Text,
            placeholder: None,
            autocomplete: Some("organization"),
        },
        FieldSpec {
            name: "email",
            label: "Work email (optional)",
            param: "user_email",
            required: false,
            kind: FieldKind::Email,
            placeholder: Some("you@company.com"),
            autocomplete: Some("email"),
        },
        FieldSpec {
            name: "project",
            label: "Project of interest",
            param: "user_project",
            required: true,
            kind: FieldKind::Select(PROJECT_OPTIONS),
            placeholder: Some("Select a project"),
            autocomplete: None,
        },
        FieldSpec {
            name: "interest",
            label: "Interest details (optional)",
            param: "user_interest",
            required: false,
            kind: FieldKind::TextArea { rows: 5 },
            placeholder: Some("Any context, timelines, or success metrics we should know about."),
            autocomplete: None,
        },
    ],
    submit_label: "Send message",
    pending_message: "Preparing your briefing...",
    success_message: "Thanks! Our delivery lead will reach out within one business day.",
    failure_message: SEND_FAILED_MESSAGE,
    trim_values: false,
};

pub static SUPPORT_FORM: FormSpec = FormSpec {
    id: "support",
    channel: Channel::EmailJs,
    fields: &[
        FieldSpec {
            name: "name",
            label: "Name",
            param: "user_name",
            required: true,
            kind: FieldKind::Text,
            placeholder: Some("Jane Doe"),
            autocomplete: Some("name"),
        },
        FieldSpec {
            name: "phone",
            label: "Phone number",
            param: "user_phone",
            required: true,
            kind: FieldKind::Tel,
            placeholder: Some("Include country/area code"),
            autocomplete: Some("tel"),
        },
        FieldSpec {
            name: "email",
            label: "Work email (optional)",
            param: "user_email",
            required: false,
            kind: FieldKind::Email,
            placeholder: Some("you@example.com"),
            autocomplete: Some("email"),
        },
        FieldSpec {
            name: "subject",
            label: "Subject",
            param: "user_subject",
            required: false,
            kind: FieldKind::Text,
            placeholder: Some("Brief summary"),
            autocomplete: None,
        },
        FieldSpec {
            name: "project",
            label: "Product or service",
            param: "user_project",
            required: true,
            kind: FieldKind::Select(PROJECT_OPTIONS),
            placeholder: Some("Select an option"),
            autocomplete: None,
        },
        FieldSpec {
            name: "details",
            label: "Describe your request",
            param: "user_details",
            required: true,
            kind: FieldKind::TextArea { rows: 5 },
            placeholder: Some("Share details, logs, or links so we can respond with context."),
            autocomplete: None,
        },
    ],
    submit_label: "Submit request",
    pending_message: "Routing your request...",
    success_message: "Thanks, {name}! Our support team will follow up shortly.",
    failure_message: SEND_FAILED_MESSAGE,
    trim_values: false,
};

/// Hero sign-up: one email address posted to the site's mail endpoint.
pub static NEWSLETTER_FORM: FormSpec = FormSpec {
    id: "newsletter",
    channel: Channel::Newsletter,
    fields: &[FieldSpec {
        name: "email",
        label: "Email",
        param: "email",
        required: true,
        kind: FieldKind::Email,
        placeholder: Some("Your best email…"),
        autocomplete: Some("email"),
    }],
    submit_label: "Submit",
    pending_message: "Sending email...",
    success_message: "Email sent successfully!",
    failure_message: NEWSLETTER_FAILED_MESSAGE,
    trim_values: true,
};

/// Field values of one form instance. Every field of the form has an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    values: BTreeMap<&'static str, String>,
}

impl Draft {
    pub fn empty(spec: &FormSpec) -> Self {
        Self {
            values: spec.fields.iter().map(|f| (f.name, String::new())).collect(),
        }
    }

    /// Value of `field`; empty for unknown fields.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Returns `false` (and changes nothing) for fields the form doesn't have.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    /// Map field values to their template parameter names. Values are
    /// verbatim unless the form trims them.
    pub fn to_params(&self, spec: &FormSpec) -> TemplateParams {
        let mut params = TemplateParams::new();
        for field in spec.fields {
            let value = self.get(field.name);
            let value = if spec.trim_values { value.trim() } else { value };
            params.insert(field.param, value);
        }
        params
    }
}

/// Inline validation message for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Required fields must contain something other than whitespace.
pub fn validate(spec: &FormSpec, draft: &Draft) -> Vec<FieldError> {
    spec.fields
        .iter()
        .filter(|f| f.required && draft.get(f.name).trim().is_empty())
        .map(|f| FieldError {
            field: f.name,
            message: format!("{} is required", f.label),
        })
        .collect()
}
