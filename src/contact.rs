//! Contact form buffer, submission lifecycle and the delivery seam.
//!
//! The page only talks to [`ContactDelivery`]. The shipped implementation,
//! [`SimulatedDelivery`], waits a fixed delay and always succeeds; a real mail
//! or API transport slots in behind the same trait.

use std::{sync::LazyLock, time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timer::sleep;

pub const SIMULATED_DELAY: Duration = Duration::from_millis(1500);

// Same shape `type="email"` inputs accept: `local@domain`, no dot required.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Ingresa tu nombre")]
    MissingName,
    #[error("Ingresa tu email")]
    MissingEmail,
    #[error("El email no parece válido")]
    InvalidEmail,
    #[error("Escribe un mensaje")]
    MissingMessage,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Ya se está enviando un mensaje")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("El mensaje fue rechazado: {0}")]
    Rejected(String),
    #[error("No se pudo enviar el mensaje: {0}")]
    Transport(String),
}

/// A validated message, trimmed and ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub delivered_at: DateTime<Utc>,
}

/// The three-field buffer bound to the form inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Accepts whatever the form's `required` and `type="email"` inputs let
    /// through, then trims the values for delivery.
    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        let name = self.name.trim();
        let message = self.message.trim();
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// Form buffer plus the submitting flag that disables the submit control.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    form: ContactForm,
    submitting: bool,
}

impl ContactSubmission {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Locks the form and hands back the message to deliver.
    pub fn begin(&mut self) -> Result<ContactMessage, SubmitError> {
        if self.submitting {
            return Err(SubmitError::Busy);
        }
        let message = self.form.validate()?;
        self.submitting = true;
        Ok(message)
    }

    /// Unlocks the form. The buffer is cleared only when delivery succeeded so
    /// a failed attempt can be retried as-is.
    pub fn complete(&mut self, outcome: &Result<Receipt, DeliveryError>) {
        if outcome.is_ok() {
            self.form.clear();
        }
        self.submitting = false;
    }
}

#[async_trait(?Send)]
pub trait ContactDelivery: Send + Sync {
    async fn deliver(&self, message: ContactMessage) -> Result<Receipt, DeliveryError>;
}

/// Stand-in transport: waits, then reports success without sending anything.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedDelivery {
    delay: Duration,
}

impl SimulatedDelivery {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self::new(SIMULATED_DELAY)
    }
}

#[async_trait(?Send)]
impl ContactDelivery for SimulatedDelivery {
    async fn deliver(&self, message: ContactMessage) -> Result<Receipt, DeliveryError> {
        log::debug!(
            "simulating delivery of {} byte message from {}",
            message.message.len(),
            message.email
        );
        sleep(self.delay).await;
        Ok(Receipt {
            delivered_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn filled() -> ContactSubmission {
        let mut submission = ContactSubmission::default();
        submission.set(Field::Name, "Ada");
        submission.set(Field::Email, "ada@example.com");
        submission.set(Field::Message, "Hola, tengo un proyecto.");
        submission
    }

    struct FailingDelivery;

    #[async_trait(?Send)]
    impl ContactDelivery for FailingDelivery {
        async fn deliver(&self, _message: ContactMessage) -> Result<Receipt, DeliveryError> {
            Err(DeliveryError::Transport("offline".to_string()))
        }
    }

    #[test]
    fn test_field_access() {
        let mut form = ContactForm::default();
        assert!(form.is_empty());
        form.set(Field::Email, "a@b.co");
        assert_eq!(form.get(Field::Email), "a@b.co");
        assert_eq!(form.get(Field::Name), "");
        assert!(!form.is_empty());
        form.clear();
        assert!(form.is_empty());
    }

    #[test]
    fn test_validation() {
        let mut form = ContactForm::default();
        assert_eq!(form.validate(), Err(ValidationError::MissingName));
        form.set(Field::Name, "  Ada ");
        assert_eq!(form.validate(), Err(ValidationError::MissingEmail));
        form.set(Field::Email, "not-an-email");
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
        form.set(Field::Email, "ada @example.com");
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
        form.set(Field::Email, "ada@example.com");
        assert_eq!(form.validate(), Err(ValidationError::MissingMessage));
        form.set(Field::Message, "Hola");

        let message = form.validate().unwrap();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.message, "Hola");
    }

    #[test]
    fn test_begin_disables_resubmission() {
        let mut submission = filled();
        assert!(!submission.is_submitting());
        let message = submission.begin().unwrap();
        assert_eq!(message.name, "Ada");
        assert!(submission.is_submitting());
        assert_eq!(submission.begin(), Err(SubmitError::Busy));
    }

    #[test]
    fn test_browser_accepted_input_starts_submission() {
        let mut submission = ContactSubmission::default();
        submission.set(Field::Name, "Ada");
        submission.set(Field::Email, "ada@localhost");
        submission.set(Field::Message, "Hola");
        let message = submission.begin().unwrap();
        assert_eq!(message.email, "ada@localhost");
        assert!(submission.is_submitting());

        let mut submission = ContactSubmission::default();
        submission.set(Field::Name, "   ");
        submission.set(Field::Email, "ada@example.com");
        submission.set(Field::Message, "Hola");
        assert!(submission.begin().is_ok());
        assert!(submission.is_submitting());

        let mut submission = ContactSubmission::default();
        submission.set(Field::Name, "  Ada  ");
        submission.set(Field::Email, " ada@example.com ");
        submission.set(Field::Message, " Hola ");
        let message = submission.begin().unwrap();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.message, "Hola");
    }

    #[test]
    fn test_invalid_form_stays_enabled() {
        let mut submission = ContactSubmission::default();
        submission.set(Field::Name, "Ada");
        assert_eq!(
            submission.begin(),
            Err(SubmitError::Invalid(ValidationError::MissingEmail))
        );
        assert!(!submission.is_submitting());
        assert_eq!(submission.form().name, "Ada");
    }

    #[test]
    fn test_failed_delivery_keeps_buffer() {
        let mut submission = filled();
        submission.begin().unwrap();
        submission.complete(&Err(DeliveryError::Rejected("spam".to_string())));
        assert!(!submission.is_submitting());
        assert_eq!(submission.form().email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_simulated_submission_resets_form() {
        let delivery = SimulatedDelivery::new(Duration::from_millis(20));
        let mut submission = filled();

        let message = submission.begin().unwrap();
        assert!(submission.is_submitting());

        let started = Instant::now();
        let outcome = delivery.deliver(message).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert!(outcome.is_ok());

        submission.complete(&outcome);
        assert!(!submission.is_submitting());
        assert!(submission.form().is_empty());
    }

    #[tokio::test]
    async fn test_delivery_is_substitutable() {
        let transports: Vec<Box<dyn ContactDelivery>> = vec![
            Box::new(SimulatedDelivery::new(Duration::ZERO)),
            Box::new(FailingDelivery),
        ];
        let mut results = Vec::new();
        for transport in &transports {
            let message = filled().begin().unwrap();
            results.push(transport.deliver(message).await.is_ok());
        }
        assert_eq!(results, [true, false]);
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedDelivery::default().delay(), Duration::from_millis(1500));
    }
}
