//! Contact-form submission: field validation, the in-flight guard, outcome
//! mapping, and the EmailJS delivery client. The flow logic is plain state so
//! it can be exercised against stub mailers; only [`EmailJsMailer`] talks to
//! the network.

use serde::Serialize;
use thiserror::Error;

use crate::config::EmailConfig;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const ERROR_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("the {0} field is required")]
    MissingField(&'static str),
    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("email request could not be sent: {0}")]
    Transport(String),
    #[error("email service responded with status {0}")]
    Status(u16),
}

/// The three user-entered fields, bound to the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// All three fields are required; whitespace-only input counts as blank.
    pub fn validate(&self) -> Result<OutboundMessage, FormError> {
        let field = |name: &'static str, value: &str| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(FormError::MissingField(name))
            } else {
                Ok(trimmed.to_string())
            }
        };
        Ok(OutboundMessage {
            from_name: field("name", &self.name)?,
            from_email: field("email", &self.email)?,
            message: field("message", &self.message)?,
        })
    }
}

/// A validated message ready to hand to the delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// User-visible outcome of the last submission attempt. A single instance is
/// replaced on each attempt, never accumulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: &'static str,
}

/// Maps the collaborator outcome to user-visible feedback. Failures produce a
/// generic message; the underlying error never reaches the page.
pub fn feedback_for(result: &Result<(), MailError>) -> Feedback {
    match result {
        Ok(()) => Feedback {
            kind: FeedbackKind::Success,
            text: SUCCESS_MESSAGE,
        },
        Err(_) => Feedback {
            kind: FeedbackKind::Error,
            text: ERROR_MESSAGE,
        },
    }
}

/// Guards the submission lifecycle: `begin` validates and raises the
/// in-flight flag, `finish` lowers it again once the outcome has been
/// reported. While a submission is outstanding, further `begin` calls are
/// rejected without touching the delivery collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitFlow {
    in_flight: bool,
}

impl SubmitFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn begin(&mut self, form: &ContactForm) -> Result<OutboundMessage, FormError> {
        if self.in_flight {
            return Err(FormError::InFlight);
        }
        let message = form.validate()?;
        self.in_flight = true;
        Ok(message)
    }

    /// Called after feedback has been emitted; the in-flight flag clears last.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

/// Seam between the form flow and the delivery service, so tests can count
/// and script deliveries.
pub trait Mailer {
    fn send(&self, message: &OutboundMessage)
        -> impl std::future::Future<Output = Result<(), MailError>>;
}

/// Wire body for the EmailJS `email/send` endpoint.
#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub message: &'a str,
}

impl<'a> EmailJsRequest<'a> {
    pub fn new(config: &'a EmailConfig, message: &'a OutboundMessage) -> Self {
        Self {
            service_id: config.service_id,
            template_id: config.template_id,
            user_id: config.public_key,
            template_params: TemplateParams {
                from_name: &message.from_name,
                from_email: &message.from_email,
                message: &message.message,
            },
        }
    }
}

/// Production mailer posting to EmailJS from the hydrated client.
#[cfg(feature = "hydrate")]
pub struct EmailJsMailer {
    config: &'static EmailConfig,
}

#[cfg(feature = "hydrate")]
impl EmailJsMailer {
    pub fn new(config: &'static EmailConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "hydrate")]
impl Mailer for EmailJsMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let body = EmailJsRequest::new(self.config, message);
        let response = gloo_net::http::Request::post(EMAILJS_ENDPOINT)
            .json(&body)
            .map_err(|err| MailError::Transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| MailError::Transport(err.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(MailError::Status(response.status()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    struct StubMailer {
        fail: bool,
        calls: Cell<usize>,
        last: RefCell<Option<OutboundMessage>>,
    }

    impl StubMailer {
        fn succeeding() -> Self {
            Self {
                fail: false,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::succeeding()
            }
        }
    }

    impl Mailer for StubMailer {
        async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(message.clone());
            if self.fail {
                Err(MailError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    // Drives one full submission the way the contact component does: begin,
    // deliver, reset on success, emit feedback, then clear the in-flight flag.
    async fn submit_once(
        flow: &mut SubmitFlow,
        form: &mut ContactForm,
        mailer: &StubMailer,
    ) -> Option<Feedback> {
        let message = match flow.begin(form) {
            Ok(message) => message,
            Err(_) => return None,
        };
        let result = mailer.send(&message).await;
        if result.is_ok() {
            *form = ContactForm::default();
        }
        let feedback = feedback_for(&result);
        flow.finish();
        Some(feedback)
    }

    #[test]
    fn validation_rejects_each_blank_field() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingField("name")));

        let mut form = filled_form();
        form.email = String::new();
        assert_eq!(form.validate(), Err(FormError::MissingField("email")));

        let mut form = filled_form();
        form.message = "\n".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingField("message")));
    }

    #[test]
    fn validation_trims_the_outbound_fields() {
        let form = ContactForm {
            name: " Ada ".to_string(),
            email: " ada@example.com ".to_string(),
            message: " Hello ".to_string(),
        };
        let message = form.validate().expect("form is complete");
        assert_eq!(message.from_name, "Ada");
        assert_eq!(message.from_email, "ada@example.com");
        assert_eq!(message.message, "Hello");
    }

    #[test]
    fn begin_raises_the_in_flight_flag_and_blocks_reentry() {
        let mut flow = SubmitFlow::new();
        let form = filled_form();
        assert!(flow.begin(&form).is_ok());
        assert!(flow.is_in_flight());
        assert_eq!(flow.begin(&form), Err(FormError::InFlight));
        flow.finish();
        assert!(!flow.is_in_flight());
        assert!(flow.begin(&form).is_ok());
    }

    #[test]
    fn invalid_form_does_not_raise_the_flag() {
        let mut flow = SubmitFlow::new();
        let form = ContactForm::default();
        assert!(flow.begin(&form).is_err());
        assert!(!flow.is_in_flight());
    }

    #[tokio::test]
    async fn successful_submission_resets_fields_and_reports_success() {
        let mailer = StubMailer::succeeding();
        let mut flow = SubmitFlow::new();
        let mut form = filled_form();

        let feedback = submit_once(&mut flow, &mut form, &mailer)
            .await
            .expect("valid form submits");
        assert_eq!(feedback.kind, FeedbackKind::Success);
        assert_eq!(feedback.text, SUCCESS_MESSAGE);
        assert_eq!(form, ContactForm::default());
        assert_eq!(mailer.calls.get(), 1);
        assert!(!flow.is_in_flight());
        assert_eq!(
            mailer.last.borrow().as_ref().map(|m| m.from_name.clone()),
            Some("Ada".to_string())
        );
    }

    #[tokio::test]
    async fn failed_submission_keeps_fields_and_reports_generic_error() {
        let mailer = StubMailer::failing();
        let mut flow = SubmitFlow::new();
        let mut form = filled_form();

        let feedback = submit_once(&mut flow, &mut form, &mailer)
            .await
            .expect("valid form submits");
        assert_eq!(feedback.kind, FeedbackKind::Error);
        assert_eq!(feedback.text, ERROR_MESSAGE);
        assert_eq!(form, filled_form());
        assert_eq!(mailer.calls.get(), 1);
        assert!(!flow.is_in_flight());
    }

    #[tokio::test]
    async fn empty_field_never_reaches_the_mailer() {
        let mailer = StubMailer::succeeding();
        let mut flow = SubmitFlow::new();
        let mut form = filled_form();
        form.email = String::new();

        assert!(submit_once(&mut flow, &mut form, &mailer).await.is_none());
        assert_eq!(mailer.calls.get(), 0);
        assert!(!flow.is_in_flight());
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_does_not_send_again() {
        let mailer = StubMailer::succeeding();
        let mut flow = SubmitFlow::new();
        let form = filled_form();

        let message = flow.begin(&form).expect("first begin succeeds");
        // User clicks submit again before the first delivery completes.
        assert_eq!(flow.begin(&form), Err(FormError::InFlight));

        let result = mailer.send(&message).await;
        assert!(result.is_ok());
        flow.finish();
        assert_eq!(mailer.calls.get(), 1);
    }

    #[test]
    fn emailjs_body_matches_the_wire_shape() {
        let config = EmailConfig {
            service_id: "service_x",
            template_id: "template_y",
            public_key: "key_z",
        };
        let message = OutboundMessage {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let body = serde_json::to_value(EmailJsRequest::new(&config, &message))
            .expect("body serializes");
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "key_z",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hello",
                }
            })
        );
    }
}
