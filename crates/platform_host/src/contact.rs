//! Contact side-channel contracts: payload validation, delivery outcomes, mail-client fallback.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Object-safe boxed future used by [`ContactChannel`].
pub type ContactFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Message submitted through the contact panel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactPayload {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// Reasons a [`ContactPayload`] is rejected or could not be delivered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Name is blank.
    #[error("name is required")]
    MissingName,
    /// Email does not look like `local@domain`.
    #[error("email address is invalid")]
    InvalidEmail,
    /// Message body is blank.
    #[error("message is required")]
    MissingMessage,
    /// The channel failed to deliver a valid payload.
    #[error("contact delivery failed: {0}")]
    Delivery(String),
}

impl ContactPayload {
    /// Checks that every field is filled and the email has a local part and a domain.
    ///
    /// # Errors
    ///
    /// Returns the first failing field as a [`ContactError`].
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(ContactError::InvalidEmail),
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

/// Outcome of a contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ContactDelivery {
    /// The form endpoint accepted the message.
    Delivered,
    /// The message must be sent from the user's mail client.
    MailClient {
        /// Prefilled `mailto:` link.
        url: String,
    },
}

/// Host service delivering contact messages.
pub trait ContactChannel {
    /// Submits a validated payload.
    ///
    /// `name_label` is the localized label for the sender name, used when the message is handed to
    /// the mail client.
    fn submit<'a>(
        &'a self,
        payload: &'a ContactPayload,
        name_label: &'a str,
    ) -> ContactFuture<'a, Result<ContactDelivery, String>>;
}

/// Builds the prefilled mail-client link used when the form endpoint is unavailable.
pub fn mailto_url(recipient: &str, payload: &ContactPayload, name_label: &str) -> String {
    let subject = format!("[Portfolio] {}", payload.name);
    let body = format!(
        "{name_label}: {}\nEmail: {}\n\n{}",
        payload.name, payload.email, payload.message
    );
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[derive(Debug, Clone, Default)]
/// Channel that records submissions and reports them delivered.
pub struct MemoryContactChannel {
    sent: Rc<RefCell<Vec<ContactPayload>>>,
}

impl MemoryContactChannel {
    /// Payloads received so far.
    pub fn sent(&self) -> Vec<ContactPayload> {
        self.sent.borrow().clone()
    }
}

impl ContactChannel for MemoryContactChannel {
    fn submit<'a>(
        &'a self,
        payload: &'a ContactPayload,
        _name_label: &'a str,
    ) -> ContactFuture<'a, Result<ContactDelivery, String>> {
        Box::pin(async move {
            self.sent.borrow_mut().push(payload.clone());
            Ok(ContactDelivery::Delivered)
        })
    }
}
