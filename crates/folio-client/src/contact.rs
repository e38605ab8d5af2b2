//! Contact-form submission
//!
//! Messages are validated locally before anything is sent. At most one
//! submission is in flight per client; the `is_sending` signal mirrors that.

use crate::error::ClientError;
use crate::http;
use folio_store::{ReadSignal, Signal};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Minimum trimmed name length (exclusive)
const MIN_NAME_LEN: usize = 2;

/// Minimum trimmed message length (exclusive)
const MIN_MESSAGE_LEN: usize = 10;

/// Field of a contact message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl Display for ContactField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        })
    }
}

/// Contact submission errors
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// A field failed validation
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: ContactField,
        reason: &'static str,
    },

    /// Another submission is still in flight
    #[error("a submission is already in progress")]
    Busy,

    /// Endpoint answered with a non-success status
    #[error("contact endpoint returned HTTP {0}")]
    Status(u16),

    /// Network failure
    #[error("contact transport error: {0}")]
    Transport(String),
}

impl ContactError {
    /// Check if the user should be told to fix their input
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

/// Payload posted to the contact endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Create a message
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check every field, reporting the first failure
    ///
    /// # Errors
    /// `ContactError::Invalid` naming the offending field.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().chars().count() <= MIN_NAME_LEN {
            return Err(ContactError::Invalid {
                field: ContactField::Name,
                reason: "must be longer than 2 characters",
            });
        }
        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(ContactError::Invalid {
                field: ContactField::Email,
                reason: "is not a valid address",
            });
        }
        if self.message.trim().chars().count() <= MIN_MESSAGE_LEN {
            return Err(ContactError::Invalid {
                field: ContactField::Message,
                reason: "must be longer than 10 characters",
            });
        }
        Ok(())
    }

    /// Whether every field passes validation
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Posts contact messages to a remote endpoint
#[derive(Debug)]
pub struct ContactClient {
    client: Client,
    endpoint: Url,
    sending: Signal<bool>,
}

impl ContactClient {
    /// Client posting to `endpoint`
    ///
    /// # Errors
    /// `ClientError` if the endpoint is invalid or the client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            client: http::client(timeout)?,
            endpoint: http::parse_url(endpoint)?,
            sending: Signal::new(false),
        })
    }

    /// Validate and submit `message`
    ///
    /// # Errors
    /// - `ContactError::Invalid` before any request is made
    /// - `ContactError::Busy` if a submission is already in flight
    /// - `ContactError::Status` / `ContactError::Transport` on delivery failure
    pub async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        message.validate()?;

        if !self.sending.set_if_changed(true) {
            return Err(ContactError::Busy);
        }
        let _sending = SendingGuard(&self.sending);

        let result = self
            .client
            .post(self.endpoint.clone())
            .json(message)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::info!("Contact message delivered");
                Ok(())
            }
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::error!(status, "Contact endpoint rejected message");
                Err(ContactError::Status(status))
            }
            Err(e) => {
                tracing::error!(error = %e, "Contact submission failed");
                Err(ContactError::Transport(e.to_string()))
            }
        }
    }

    /// Whether a submission is in flight
    #[inline]
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending.get()
    }

    /// Observe the in-flight flag
    #[inline]
    #[must_use]
    pub fn subscribe_sending(&self) -> ReadSignal<bool> {
        self.sending.read_only()
    }
}

/// Clears the in-flight flag when the submission ends or is cancelled
struct SendingGuard<'a>(&'a Signal<bool>);

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactMessage {
        ContactMessage::new("Ada", "ada@example.com", "Let's talk about a role.")
    }

    #[test]
    fn valid_message_passes() {
        assert!(valid().is_valid());
    }

    #[test]
    fn short_name_is_rejected() {
        let msg = ContactMessage { name: " Al ".to_string(), ..valid() };
        assert!(matches!(
            msg.validate(),
            Err(ContactError::Invalid { field: ContactField::Name, .. })
        ));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["", "ada", "ada@example", "ada @example.com", "@example.com"] {
            let msg = ContactMessage { email: email.to_string(), ..valid() };
            assert!(
                matches!(msg.validate(), Err(ContactError::Invalid { field: ContactField::Email, .. })),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn short_message_is_rejected() {
        let msg = ContactMessage { message: "  hi there  ".to_string(), ..valid() };
        let err = msg.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("message"));
    }

    #[tokio::test]
    async fn invalid_message_never_marks_sending() {
        let client = ContactClient::new("http://127.0.0.1:9/contact", Duration::from_secs(1)).unwrap();
        let msg = ContactMessage { name: String::new(), ..valid() };
        assert!(client.send(&msg).await.is_err());
        assert!(!client.is_sending());
    }
}
