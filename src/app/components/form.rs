//! Lead form rendering bound to a [`SubmissionController`].

use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;

use crate::app::SiteServices;
use crate::forms::{
    FieldKind, FieldSpec, FormSnapshot, FormSpec, Notice, NoticeTone, SubmissionController,
};

/// Copyable handle to one mounted form.
#[derive(Clone, Copy)]
pub struct FormHandle {
    controller: CopyValue<SubmissionController>,
    snapshot: Signal<FormSnapshot>,
}

impl FormHandle {
    pub fn snapshot(&self) -> FormSnapshot {
        (self.snapshot)()
    }

    pub fn edit(&self, field: &str, value: String) {
        self.controller.read().edit(field, value);
    }

    pub fn dismiss(&self, id: u64) {
        self.controller.read().dismiss_notice(id);
    }

    /// Runs outside the component scope so leaving the page does not abort
    /// the send; the controller drops the result once closed.
    pub fn submit(&self) {
        let controller = self.controller.read().clone();
        let _ = dioxus::core::spawn_forever(async move {
            controller.submit().await;
        });
    }
}

/// Build the controller for `spec` and keep a signal in sync with it.
pub fn use_submission(spec: &'static FormSpec) -> FormHandle {
    let services = use_context::<SiteServices>();
    let controller = use_hook(|| {
        CopyValue::new(SubmissionController::new(spec, services.for_form(spec)))
    });
    let mut snapshot = use_signal(|| controller.read().snapshot());

    use_hook(|| {
        let (tx, mut rx) = futures::channel::mpsc::unbounded();
        let subscription = controller.read().subscribe(move |next: &FormSnapshot| {
            let _ = tx.unbounded_send(next.clone());
        });
        spawn(async move {
            while let Some(next) = rx.next().await {
                snapshot.set(next);
            }
        });
        Rc::new(subscription)
    });

    use_drop({
        let controller = controller.read().clone();
        move || controller.close()
    });

    FormHandle {
        controller,
        snapshot,
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LeadFormProps {
    pub spec: &'static FormSpec,
}

/// A complete lead form: fields, inline errors, notice and submit button.
#[component]
pub fn LeadForm(props: LeadFormProps) -> Element {
    let spec = props.spec;
    let form = use_submission(spec);
    let state = form.snapshot();
    let submitting = state.is_submitting();

    rsx! {
        form {
            class: "lead-form card",
            id: "{spec.id}-form",
            novalidate: true,
            onsubmit: move |e| {
                e.prevent_default();
                form.submit();
            },

            for field in spec.fields.iter() {
                FieldInput {
                    key: "{field.name}",
                    form_id: spec.id,
                    field: *field,
                    value: state.draft.get(field.name).to_string(),
                    error: state.error_for(field.name).map(str::to_string),
                    disabled: submitting,
                    on_input: move |value: String| form.edit(field.name, value),
                }
            }

            if let Some(notice) = state.notice.clone() {
                NoticeBanner {
                    notice,
                    on_dismiss: move |id| form.dismiss(id),
                }
            }

            button {
                class: "submit",
                r#type: "submit",
                disabled: submitting,
                if submitting {
                    "Sending..."
                } else {
                    "{spec.submit_label}"
                }
            }
        }
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Tel => "tel",
        _ => "text",
    }
}

#[component]
fn FieldInput(
    form_id: &'static str,
    field: FieldSpec,
    value: String,
    error: Option<String>,
    disabled: bool,
    on_input: EventHandler<String>,
) -> Element {
    let id = format!("{}-{}", form_id, field.name);
    let placeholder = field.placeholder.unwrap_or_default();

    rsx! {
        div { class: "field",
            label { r#for: "{id}", "{field.label}" }
            {match field.kind {
                FieldKind::Select(options) => rsx! {
                    select {
                        id: "{id}",
                        name: field.name,
                        required: field.required,
                        disabled: disabled,
                        value: "{value}",
                        onchange: move |e| on_input.call(e.value()),
                        option { value: "", disabled: true, selected: value.is_empty(), "{placeholder}" }
                        for opt in options.iter() {
                            option { key: "{opt}", value: *opt, selected: value == *opt, "{opt}" }
                        }
                    }
                },
                FieldKind::TextArea { rows } => rsx! {
                    textarea {
                        id: "{id}",
                        name: field.name,
                        rows: "{rows}",
                        placeholder: placeholder,
                        required: field.required,
                        disabled: disabled,
                        value: "{value}",
                        oninput: move |e| on_input.call(e.value()),
                    }
                },
                kind => rsx! {
                    input {
                        id: "{id}",
                        name: field.name,
                        r#type: input_type(kind),
                        autocomplete: field.autocomplete.unwrap_or("off"),
                        placeholder: placeholder,
                        required: field.required,
                        disabled: disabled,
                        value: "{value}",
                        oninput: move |e| on_input.call(e.value()),
                    }
                },
            }}
            if let Some(error) = error.as_ref() {
                p { class: "field-error", role: "alert", "{error}" }
            }
        }
    }
}

#[component]
fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<u64>) -> Element {
    let class = match notice.tone {
        NoticeTone::Pending => "notice notice-pending",
        NoticeTone::Success => "notice notice-success",
        NoticeTone::Error => "notice notice-error",
    };
    let id = notice.id;

    rsx! {
        div { class: class, role: "status", "aria-live": "polite",
            span { "{notice.message}" }
            if notice.tone != NoticeTone::Pending {
                button {
                    r#type: "button",
                    "aria-label": "Dismiss",
                    onclick: move |_| on_dismiss.call(id),
                    "×"
                }
            }
        }
    }
}
