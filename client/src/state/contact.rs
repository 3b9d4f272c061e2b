//! Contact form state and the submission collaborator.
//!
//! DESIGN
//! ======
//! `ContactForm` is the single source of truth for the three inputs: the
//! component mirrors each input from it and writes every input event back
//! verbatim. Submission goes through a `ContactHandler` provided via
//! context, so the page never hardcodes where a message ends up.
//!
//! TRADE-OFFS
//! ==========
//! `check` repeats the browser's native `required` / `type=email` rules.
//! The browser blocks invalid submissions first; the repeat keeps the
//! "state unchanged on invalid submit" guarantee when the form is driven
//! outside a browser (tests, `novalidate` forms).

use std::sync::Arc;

use serde::Serialize;

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

/// Message shown to the visitor once a submission has been accepted.
pub const ACKNOWLEDGEMENT: &str = "Merci pour votre message ! Nous vous recontacterons bientôt.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Value of the input's `id` and `name` attributes.
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Nom complet",
            ContactField::Email => "Adresse E-mail",
            ContactField::Message => "Votre Message",
        }
    }

    pub fn from_id(id: &str) -> Option<ContactField> {
        ContactField::ALL.into_iter().find(|field| field.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// A required field is empty.
    #[error("{} is required", .0.label())]
    Missing(ContactField),

    /// The email field does not hold a valid address.
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),

    /// The submission collaborator refused the message.
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Contact form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Replace one field with the raw input value.
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.into_iter().all(|field| self.value(field).is_empty())
    }

    /// Apply the browser's constraint validation rules.
    ///
    /// # Errors
    ///
    /// Returns the first failing field in form order.
    pub fn check(&self) -> Result<(), ContactError> {
        for field in ContactField::ALL {
            if self.value(field).is_empty() {
                return Err(ContactError::Missing(field));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Validate, report to `handler`, then reset.
    ///
    /// Returns the submitted fields. On any error the form is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Missing`] or [`ContactError::InvalidEmail`]
    /// when validation fails, or the handler's error.
    pub fn submit(&mut self, handler: &dyn ContactHandler) -> Result<ContactForm, ContactError> {
        self.check()?;
        handler.handle(self)?;
        Ok(std::mem::take(self))
    }
}

/// WHATWG "valid e-mail address" production, as enforced by `type=email`.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));
    local_ok && domain.split('.').all(is_valid_domain_label)
}

fn is_valid_domain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    bytes.len() <= 63
        && first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

// =============================================================================
// SUBMISSION COLLABORATOR
// =============================================================================

/// Receives accepted contact submissions.
pub trait ContactHandler: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ContactError::Rejected`] when the message could not be
    /// delivered; the form keeps its contents so the visitor can retry.
    fn handle(&self, submission: &ContactForm) -> Result<(), ContactError>;
}

/// Default handler: logs the submission to the browser console and shows
/// the acknowledgement dialog. Does nothing outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleContactHandler;

impl ContactHandler for ConsoleContactHandler {
    fn handle(&self, submission: &ContactForm) -> Result<(), ContactError> {
        #[cfg(feature = "hydrate")]
        {
            let payload =
                serde_json::to_string(submission).map_err(|e| ContactError::Rejected(e.to_string()))?;
            log::info!("contact form submitted: {payload}");
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(ACKNOWLEDGEMENT);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
        }
        Ok(())
    }
}

/// Context handle for the active [`ContactHandler`].
#[derive(Clone)]
pub struct ContactSink(Arc<dyn ContactHandler>);

impl ContactSink {
    pub fn new(handler: impl ContactHandler + 'static) -> Self {
        Self(Arc::new(handler))
    }

    pub fn handler(&self) -> &dyn ContactHandler {
        self.0.as_ref()
    }
}

impl Default for ContactSink {
    fn default() -> Self {
        Self::new(ConsoleContactHandler)
    }
}

impl std::fmt::Debug for ContactSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactSink").finish_non_exhaustive()
    }
}
