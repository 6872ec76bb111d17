//! Contact form validation, relay payload, and submission feedback state.
//!
//! DESIGN
//! ======
//! `ContactForm` is the single owner of the form's transient state. The
//! component drives it in three steps (`begin_submit`, relay call, `finish`)
//! and schedules the timers it hands back; each timer carries a token so a
//! newer banner or submission invalidates older dismissals.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::OnceLock;

use serde::Serialize;

use crate::net::relay::{RelayError, RelayResponse};

/// Substituted for every optional field left blank.
pub const NOT_SPECIFIED: &str = "Not specified";

pub const LABEL_IDLE: &str = "Send Message";
pub const LABEL_SENDING: &str = "Sending...";
pub const LABEL_SENT: &str = "Message Sent! ✓";

/// Raw field values as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub budget: String,
    pub project_type: String,
    pub message: String,
}

/// Form control a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Budget,
    ProjectType,
    Message,
}

impl Field {
    /// Control `name`/`id` in the rendered form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Budget => "budget",
            Self::ProjectType => "project_type",
            Self::Message => "message",
        }
    }
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Budget => &self.budget,
            Field::ProjectType => &self.project_type,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Budget => &mut self.budget,
            Field::ProjectType => &mut self.project_type,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

fn email_pattern() -> Option<&'static regex_lite::Regex> {
    static EMAIL: OnceLock<Option<regex_lite::Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// Single `@`, no whitespace, and a dot with text on both sides after the `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(email))
}

/// Check required fields, then the email shape. First failure wins.
///
/// # Errors
///
/// Returns the user-facing reason the form cannot be sent.
pub fn validate(fields: &ContactFields) -> Result<(), FormError> {
    let required = [&fields.name, &fields.email, &fields.message];
    if required.iter().any(|v| v.trim().is_empty()) {
        return Err(FormError::MissingRequired);
    }
    if !is_valid_email(fields.email.trim()) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// Named variables the relay template interpolates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub company: String,
    pub budget: String,
    pub project_type: String,
    pub message: String,
    pub to_email: String,
}

fn or_not_specified(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() { NOT_SPECIFIED.to_owned() } else { raw.to_owned() }
}

#[must_use]
pub fn template_params(fields: &ContactFields, to_email: &str) -> TemplateParams {
    TemplateParams {
        from_name: fields.name.trim().to_owned(),
        from_email: fields.email.trim().to_owned(),
        company: or_not_specified(&fields.company),
        budget: or_not_specified(&fields.budget),
        project_type: or_not_specified(&fields.project_type),
        message: fields.message.trim().to_owned(),
        to_email: to_email.to_owned(),
    }
}

#[must_use]
pub fn failure_message(fallback_email: &str) -> String {
    format!("Failed to send message. Please try again or email me directly at {fallback_email}")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Success,
    Error(String),
}

/// Submit button presentation for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub disabled: bool,
    pub dimmed: bool,
    pub success: bool,
}

impl SubmitState {
    /// A failed send re-enables the button but leaves the sending label in
    /// place; only the success path schedules a label revert.
    #[must_use]
    pub fn button(&self) -> ButtonView {
        match self {
            Self::Idle => ButtonView { label: LABEL_IDLE, disabled: false, dimmed: false, success: false },
            Self::Sending => ButtonView { label: LABEL_SENDING, disabled: true, dimmed: true, success: false },
            Self::Success => ButtonView { label: LABEL_SENT, disabled: false, dimmed: true, success: true },
            Self::Error(_) => ButtonView { label: LABEL_SENDING, disabled: false, dimmed: true, success: false },
        }
    }
}

/// At most one banner; each `show` issues a new dismissal token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    message: Option<String>,
    generation: u64,
}

impl ErrorBanner {
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn show(&mut self, message: String) -> u64 {
        self.generation += 1;
        self.message = Some(message);
        self.generation
    }

    /// Remove the banner if `token` is the latest and it is still showing.
    pub fn dismiss(&mut self, token: u64) -> bool {
        if token != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }
}

/// First half of a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation failed; schedule banner dismissal for `banner_token`.
    Rejected { banner_token: u64 },
    /// A send is already in flight.
    Busy,
    /// Call the relay with these params.
    Send(TemplateParams),
}

/// Second half of a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitFinish {
    /// Schedule the label revert for `revert_token`.
    Sent { revert_token: u64 },
    /// Schedule banner dismissal for `banner_token`.
    Failed { banner_token: u64 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub submit: SubmitState,
    pub banner: ErrorBanner,
    revert_generation: u64,
}

impl ContactForm {
    /// Validate and, if valid, enter `Sending`.
    pub fn begin_submit(&mut self, to_email: &str) -> SubmitStart {
        if self.submit == SubmitState::Sending {
            return SubmitStart::Busy;
        }
        if let Err(err) = validate(&self.fields) {
            let banner_token = self.banner.show(err.to_string());
            return SubmitStart::Rejected { banner_token };
        }
        self.submit = SubmitState::Sending;
        // A pending success revert must not clobber this send.
        self.revert_generation += 1;
        SubmitStart::Send(template_params(&self.fields, to_email))
    }

    /// Record the relay outcome.
    pub fn finish(&mut self, outcome: Result<RelayResponse, RelayError>, fallback_email: &str) -> SubmitFinish {
        match outcome {
            Ok(_) => {
                self.submit = SubmitState::Success;
                self.fields = ContactFields::default();
                self.revert_generation += 1;
                SubmitFinish::Sent { revert_token: self.revert_generation }
            }
            Err(_) => {
                let message = failure_message(fallback_email);
                self.submit = SubmitState::Error(message.clone());
                SubmitFinish::Failed { banner_token: self.banner.show(message) }
            }
        }
    }

    /// Return the button to idle after the success display interval.
    pub fn revert_success(&mut self, token: u64) -> bool {
        if token != self.revert_generation || self.submit != SubmitState::Success {
            return false;
        }
        self.submit = SubmitState::Idle;
        true
    }
}
