use api::HttpStatusError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

// contact form
//
// the form is a small state machine:
//
//   idle -> submitting -> {success, error} -> idle
//
// the webapp calls begin_submit() from the submit handler, awaits the Submitter with the
// returned message, hands the outcome to finish(), and schedules expire() once the status
// message has been on screen for long enough.  nothing here knows about timers
pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! I'll get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    // the only validation is the presence check the browser does for `required`
    fn missing(&self) -> Option<Field> {
        [Field::Name, Field::Email, Field::Message]
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }

    // the banner text, if any is showing
    pub fn banner(&self) -> Option<&str> {
        match self {
            FormStatus::Success(msg) | FormStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

// the payload handed to the relay
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission failed: {0}")]
    SubmissionFailed(String),
    #[error("relay rejected the message with status {status}")]
    Rejected { status: u16 },
}

impl SubmitError {
    // what the visitor sees in the error banner
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::SubmissionFailed(_) => String::from(
                "Something went wrong while sending your message. Please try again later.",
            ),
            SubmitError::Rejected { .. } => String::from(
                "Your message could not be delivered. Please reach out by email instead.",
            ),
        }
    }
}

// relay transport errors: a non-2xx answer is a rejection, anything else (network,
// decoding) is a plain failure
impl From<anyhow::Error> for SubmitError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<HttpStatusError>() {
            Some(HttpStatusError(status)) => SubmitError::Rejected { status: *status },
            None => SubmitError::SubmissionFailed(err.to_string()),
        }
    }
}

// the outbound collaborator
//
// wasm futures are not Send, so neither is this trait
#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: FormFields,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
    }

    // returns the message to send, or None if a submission is already in flight or a
    // required field is blank
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.status.is_submitting() {
            debug!("ignoring submit while a submission is in flight");
            return None;
        }

        if let Some(field) = self.fields.missing() {
            debug!(?field, "ignoring submit with a blank required field");
            return None;
        }

        self.status = FormStatus::Submitting;

        Some(ContactMessage {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            message: self.fields.message.clone(),
        })
    }

    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        if !self.status.is_submitting() {
            return;
        }

        self.status = match outcome {
            Ok(()) => {
                self.fields = FormFields::default();
                FormStatus::Success(String::from(SUCCESS_MESSAGE))
            }
            Err(err) => {
                debug!(%err, "contact submission failed");
                FormStatus::Error(err.user_message())
            }
        };
    }

    // clears the banner; fields are left alone and an in-flight submission is unaffected
    pub fn expire(&mut self) {
        if matches!(self.status, FormStatus::Success(_) | FormStatus::Error(_)) {
            self.status = FormStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct RecordingRelay {
        outcome: Result<(), SubmitError>,
        seen: RefCell<Vec<ContactMessage>>,
    }

    #[async_trait(?Send)]
    impl Submitter for RecordingRelay {
        async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
            self.seen.borrow_mut().push(message.clone());
            self.outcome.clone()
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Message, "Can you review our perimeter?");
        form
    }

    async fn drive(form: &mut ContactForm, relay: &impl Submitter) {
        let message = form.begin_submit().unwrap();
        assert!(form.status().is_submitting());
        let outcome = relay.submit(&message).await;
        form.finish(outcome);
    }

    #[tokio::test]
    async fn success_clears_fields_then_expires_to_idle() {
        let relay = RecordingRelay {
            outcome: Ok(()),
            seen: RefCell::new(Vec::new()),
        };
        let mut form = filled();

        drive(&mut form, &relay).await;

        assert_eq!(form.fields(), &FormFields::default());
        assert_eq!(
            form.status(),
            &FormStatus::Success(String::from(SUCCESS_MESSAGE))
        );
        assert_eq!(relay.seen.borrow()[0].email, "ada@example.com");

        form.set_field(Field::Name, "typed meanwhile");
        form.expire();
        assert_eq!(form.status(), &FormStatus::Idle);
        assert_eq!(form.fields().name, "typed meanwhile");
    }

    #[tokio::test]
    async fn failure_keeps_fields_and_shows_error() {
        let relay = RecordingRelay {
            outcome: Err(SubmitError::SubmissionFailed(String::from("timeout"))),
            seen: RefCell::new(Vec::new()),
        };
        let mut form = filled();

        drive(&mut form, &relay).await;

        assert_eq!(form.fields().name, "Ada");
        assert!(matches!(form.status(), FormStatus::Error(_)));
        assert!(form.status().banner().is_some());

        form.expire();
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn blank_required_field_blocks_submission() {
        let mut form = filled();
        form.set_field(Field::Email, "   ");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn expire_does_not_interrupt_submission() {
        let mut form = filled();
        form.begin_submit();
        form.expire();
        assert!(form.status().is_submitting());
    }

    #[test]
    fn relay_status_errors_become_rejections() {
        let err = anyhow::Error::new(HttpStatusError(503));
        assert_eq!(SubmitError::from(err), SubmitError::Rejected { status: 503 });
    }

    #[test]
    fn other_relay_errors_are_submission_failures() {
        let err = anyhow::anyhow!("network unreachable");
        assert_eq!(
            SubmitError::from(err),
            SubmitError::SubmissionFailed(String::from("network unreachable"))
        );
    }

    #[test]
    fn stray_finish_is_ignored() {
        let mut form = filled();
        form.finish(Ok(()));
        assert_eq!(form.status(), &FormStatus::Idle);
        assert_eq!(form.fields().name, "Ada");
    }
}
