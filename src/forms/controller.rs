//! Submission workflow for one form instance.
//!
//! Status moves `Idle -> Submitting -> (Success | Error)` and back to `Idle`
//! on the next edit. The user confirmation send is required; the admin
//! notification is detached and only logged. Success and error notices are
//! dismissed by a [`Timer`] after [`NOTICE_AUTO_DISMISS`].

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::detach::{self, Detach};
use super::timer::Timer;
use super::{validate, Draft, FieldError, FormSpec, NOT_CONFIGURED_MESSAGE};
use crate::notify::{Notifier, NotifyError, Template, TemplateParams};
use crate::subscription::{Listeners, Subscription};

/// How long success and error notices stay up.
pub const NOTICE_AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Pending,
    Success,
    Error,
}

/// User-facing status line. Never carries raw error detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Increases with every notice so stale dismiss timers can be told apart.
    pub id: u64,
    pub tone: NoticeTone,
    pub message: String,
    pub auto_dismiss: Option<Duration>,
}

/// Everything a form needs to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSnapshot {
    pub draft: Draft,
    pub status: SubmissionStatus,
    pub notice: Option<Notice>,
    pub errors: Vec<FieldError>,
}

impl FormSnapshot {
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// A submission is in flight, or the last one succeeded and nothing was edited since.
    Ignored,
    /// Local validation failed; nothing was sent.
    Invalid(Vec<FieldError>),
    Delivered,
    Failed(NotifyError),
    /// The form was closed while the send was in flight.
    Discarded,
}

struct State {
    snapshot: FormSnapshot,
    next_notice: u64,
    closed: bool,
}

impl State {
    fn notice(&mut self, tone: NoticeTone, message: String, auto_dismiss: Option<Duration>) -> Notice {
        self.next_notice += 1;
        Notice {
            id: self.next_notice,
            tone,
            message,
            auto_dismiss,
        }
    }
}

/// Runtime hooks a controller needs besides its form definition.
#[derive(Clone)]
pub struct FormServices {
    pub notifier: Arc<dyn Notifier>,
    pub detach: Rc<dyn Detach>,
    pub timer: Rc<dyn Timer>,
}

/// Drives one form: draft edits, validation, the two sends and the notice.
#[derive(Clone)]
pub struct SubmissionController {
    spec: &'static FormSpec,
    notifier: Arc<dyn Notifier>,
    detach: Rc<dyn Detach>,
    timer: Rc<dyn Timer>,
    state: Rc<RefCell<State>>,
    listeners: Listeners<FormSnapshot>,
}

impl SubmissionController {
    pub fn new(spec: &'static FormSpec, services: FormServices) -> Self {
        Self {
            spec,
            notifier: services.notifier,
            detach: services.detach,
            timer: services.timer,
            state: Rc::new(RefCell::new(State {
                snapshot: FormSnapshot {
                    draft: Draft::empty(spec),
                    status: SubmissionStatus::Idle,
                    notice: None,
                    errors: Vec::new(),
                },
                next_notice: 0,
                closed: false,
            })),
            listeners: Listeners::new(),
        }
    }

    pub fn spec(&self) -> &'static FormSpec {
        self.spec
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.state.borrow().snapshot.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.borrow().snapshot.status
    }

    pub fn draft(&self) -> Draft {
        self.state.borrow().snapshot.draft.clone()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.state.borrow().snapshot.notice.clone()
    }

    /// Called with a fresh snapshot after every state change.
    pub fn subscribe(&self, listener: impl Fn(&FormSnapshot) + 'static) -> Subscription {
        self.listeners.add(listener)
    }

    /// Update one field. Leaving `Success`/`Error` resets to `Idle`.
    pub fn edit(&self, field: &str, value: impl Into<String>) {
        {
            let mut state = self.state.borrow_mut();
            if state.closed {
                return;
            }
            if !state.snapshot.draft.set(field, value) {
                warn!("{} form has no field {:?}", self.spec.id, field);
                return;
            }
            state.snapshot.errors.retain(|e| e.field != field);
            if matches!(
                state.snapshot.status,
                SubmissionStatus::Success | SubmissionStatus::Error
            ) {
                state.snapshot.status = SubmissionStatus::Idle;
                state.snapshot.notice = None;
            }
        }
        self.publish();
    }

    /// Clear the notice if it is still the one with `id`.
    pub fn dismiss_notice(&self, id: u64) {
        {
            let mut state = self.state.borrow_mut();
            if state.closed || state.snapshot.notice.as_ref().map(|n| n.id) != Some(id) {
                return;
            }
            state.snapshot.notice = None;
        }
        self.publish();
    }

    /// The owning form is gone: results of in-flight sends are dropped.
    pub fn close(&self) {
        self.state.borrow_mut().closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.state.borrow().closed
    }

    /// Validate and send the current draft.
    pub async fn submit(&self) -> SubmitOutcome {
        let draft = {
            let mut state = self.state.borrow_mut();
            if state.closed {
                return SubmitOutcome::Ignored;
            }
            match state.snapshot.status {
                SubmissionStatus::Submitting => {
                    debug!("{} form: submission already in flight", self.spec.id);
                    return SubmitOutcome::Ignored;
                }
                SubmissionStatus::Success => {
                    debug!("{} form: already submitted, waiting for an edit", self.spec.id);
                    return SubmitOutcome::Ignored;
                }
                SubmissionStatus::Idle | SubmissionStatus::Error => {}
            }

            let errors = validate(self.spec, &state.snapshot.draft);
            if !errors.is_empty() {
                state.snapshot.errors = errors.clone();
                drop(state);
                self.publish();
                return SubmitOutcome::Invalid(errors);
            }

            let pending = state.notice(
                NoticeTone::Pending,
                self.spec.pending_message.to_string(),
                None,
            );
            state.snapshot.errors.clear();
            state.snapshot.status = SubmissionStatus::Submitting;
            state.snapshot.notice = Some(pending);
            state.snapshot.draft.clone()
        };
        self.publish();

        let params = draft.to_params(self.spec);
        match self
            .notifier
            .send(Template::UserConfirmation, &params)
            .await
        {
            Ok(_) => {
                self.notify_admin(params);
                if self.is_closed() {
                    debug!("{} form closed; discarding delivery result", self.spec.id);
                    return SubmitOutcome::Discarded;
                }
                info!("{} form submitted", self.spec.id);
                let notice = {
                    let mut state = self.state.borrow_mut();
                    let notice = state.notice(
                        NoticeTone::Success,
                        self.spec.success_text(&draft),
                        Some(NOTICE_AUTO_DISMISS),
                    );
                    state.snapshot.status = SubmissionStatus::Success;
                    state.snapshot.draft = Draft::empty(self.spec);
                    state.snapshot.notice = Some(notice.clone());
                    notice
                };
                self.publish();
                self.schedule_dismiss(&notice);
                SubmitOutcome::Delivered
            }
            Err(e) => {
                if e.is_configuration() {
                    warn!("{} form: {}", self.spec.id, e);
                } else {
                    error!("{} form: delivery failed: {}", self.spec.id, e);
                }
                if self.is_closed() {
                    debug!("{} form closed; discarding delivery error", self.spec.id);
                    return SubmitOutcome::Discarded;
                }
                let message = if e.is_configuration() {
                    NOT_CONFIGURED_MESSAGE
                } else {
                    self.spec.failure_message
                };
                let notice = {
                    let mut state = self.state.borrow_mut();
                    let notice = state.notice(
                        NoticeTone::Error,
                        message.to_string(),
                        Some(NOTICE_AUTO_DISMISS),
                    );
                    state.snapshot.status = SubmissionStatus::Error;
                    state.snapshot.notice = Some(notice.clone());
                    notice
                };
                self.publish();
                self.schedule_dismiss(&notice);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Fire-and-forget admin copy. Failures are logged, never surfaced.
    fn notify_admin(&self, params: TemplateParams) {
        if !self.notifier.is_configured(Template::AdminNotification) {
            debug!("{} form: admin template not configured, skipping", self.spec.id);
            return;
        }

        let notifier = self.notifier.clone();
        let form = self.spec.id;
        self.detach.detach(detach::boxed(async move {
            match notifier.send(Template::AdminNotification, &params).await {
                Ok(_) => debug!("{} form: administrators notified", form),
                Err(e) => warn!("{} form: failed to notify administrators: {}", form, e),
            }
        }));
    }

    /// Clears `notice` when its delay runs out, unless a newer one replaced it.
    fn schedule_dismiss(&self, notice: &Notice) {
        let Some(delay) = notice.auto_dismiss else {
            return;
        };
        let controller = self.clone();
        let id = notice.id;
        self.timer
            .schedule(delay, Box::new(move || controller.dismiss_notice(id)));
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        self.listeners.emit(&snapshot);
    }
}
