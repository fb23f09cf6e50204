// Contact form flow: validation, relay payloads and the mailto fallback.
//
// The flow is a small state machine that never touches the DOM. The web side
// feeds it form values and relay outcomes and applies the returned
// [`Effects`].

use crate::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.email.trim(), self.message.trim())
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("relay returned HTTP {0}")]
    Status(u16),
    #[error("malformed relay response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("relay did not accept the message")]
    Rejected,
}

/// Same acceptance as `^[^\s@]+@[^\s@]+\.[^\s@]+$`: one `@`, a non-empty
/// local part, and a domain with a dot that is neither first nor last.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Trim and check the form; returns the trimmed fields on success.
pub fn validate(raw: &ContactFields) -> Result<ContactFields, ValidationError> {
    let fields = raw.trimmed();
    if fields.name.is_empty() || fields.email.is_empty() || fields.message.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(fields)
}

/// JSON body posted to the email relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelayRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

impl RelayRequest {
    pub fn new(fields: &ContactFields) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
            subject: format!("{} {}", SUBJECT_PREFIX, fields.name),
        }
    }
}

// Some relays answer `"success": "true"` rather than a boolean.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SuccessFlag {
    Bool(bool),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RelayResponse {
    #[serde(default)]
    success: Option<SuccessFlag>,
}

impl RelayResponse {
    fn accepted(&self) -> bool {
        match &self.success {
            Some(SuccessFlag::Bool(b)) => *b,
            Some(SuccessFlag::Text(s)) => s.eq_ignore_ascii_case("true"),
            None => false,
        }
    }
}

/// Classify a completed HTTP exchange with the relay.
pub fn interpret_response(status: u16, body: &str) -> Result<(), RelayError> {
    if !(200..300).contains(&status) {
        return Err(RelayError::Status(status));
    }
    let resp: RelayResponse = serde_json::from_str(body)?;
    if resp.accepted() {
        Ok(())
    } else {
        Err(RelayError::Rejected)
    }
}

/// `mailto:` URI carrying the same fields, with subject and body percent-encoded.
pub fn mailto_uri(recipient: &str, fields: &ContactFields) -> String {
    let subject = format!("Message from {}", fields.name);
    let body = format!(
        "{}\n\n---\nFrom: {}\nEmail: {}",
        fields.message, fields.name, fields.email
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Info,
}

impl MessageKind {
    /// Modifier class placed next to `form-message`.
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
            MessageKind::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// What the page should do after a step of the flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Effects {
    pub message: Option<FormMessage>,
    pub clear_form: bool,
    pub navigate_to: Option<String>,
    pub submit_enabled: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

#[derive(Debug)]
pub enum SubmitStep {
    /// Validation failed; show the message and stay idle.
    Invalid(Effects),
    /// Disable the submit control and post this payload.
    Send(RelayRequest),
    /// A submission is already in flight.
    Busy,
}

pub const SUCCESS_TEXT: &str = "Thank you! Your message has been sent.";
pub const BACKUP_TEXT: &str = "Opening your email client as a backup...";

#[derive(Debug, Default)]
pub struct ContactFlow {
    phase: Phase,
    pending: Option<ContactFields>,
}

impl ContactFlow {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn submit(&mut self, raw: &ContactFields) -> SubmitStep {
        if self.phase == Phase::Submitting {
            return SubmitStep::Busy;
        }
        self.phase = Phase::Validating;
        match validate(raw) {
            Err(e) => {
                self.phase = Phase::Idle;
                SubmitStep::Invalid(Effects {
                    message: Some(FormMessage::new(MessageKind::Error, e.to_string())),
                    clear_form: false,
                    navigate_to: None,
                    submit_enabled: true,
                })
            }
            Ok(fields) => {
                let req = RelayRequest::new(&fields);
                self.pending = Some(fields);
                self.phase = Phase::Submitting;
                SubmitStep::Send(req)
            }
        }
    }

    /// Finish the in-flight submission. Any failure falls back to mailto.
    pub fn complete(&mut self, outcome: Result<(), RelayError>) -> Effects {
        self.phase = Phase::Idle;
        let fields = self.pending.take();
        match outcome {
            Ok(()) => Effects {
                message: Some(FormMessage::new(MessageKind::Success, SUCCESS_TEXT)),
                clear_form: true,
                navigate_to: None,
                submit_enabled: true,
            },
            Err(_) => Effects {
                message: Some(FormMessage::new(MessageKind::Info, BACKUP_TEXT)),
                clear_form: false,
                navigate_to: fields.map(|f| mailto_uri(FALLBACK_RECIPIENT, &f)),
                submit_enabled: true,
            },
        }
    }
}
