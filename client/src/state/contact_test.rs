use std::sync::Mutex;

use super::*;

#[derive(Default)]
struct RecordingHandler {
    received: Mutex<Vec<ContactForm>>,
}

impl RecordingHandler {
    fn received(&self) -> Vec<ContactForm> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl ContactHandler for RecordingHandler {
    fn handle(&self, submission: &ContactForm) -> Result<(), ContactError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(submission.clone());
        }
        Ok(())
    }
}

struct RejectingHandler;

impl ContactHandler for RejectingHandler {
    fn handle(&self, _submission: &ContactForm) -> Result<(), ContactError> {
        Err(ContactError::Rejected("mailbox full".to_owned()))
    }
}

fn filled(name: &str, email: &str, message: &str) -> ContactForm {
    ContactForm { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() }
}

// =============================================================
// ContactField
// =============================================================

#[test]
fn field_ids_round_trip() {
    for field in ContactField::ALL {
        assert_eq!(ContactField::from_id(field.id()), Some(field));
    }
    assert_eq!(ContactField::from_id("phone"), None);
}

#[test]
fn field_labels_match_form_copy() {
    assert_eq!(ContactField::Name.label(), "Nom complet");
    assert_eq!(ContactField::Email.label(), "Adresse E-mail");
    assert_eq!(ContactField::Message.label(), "Votre Message");
}

// =============================================================
// Controlled input
// =============================================================

#[test]
fn default_form_is_empty() {
    let form = ContactForm::default();
    assert!(form.is_empty());
    for field in ContactField::ALL {
        assert_eq!(form.value(field), "");
    }
}

#[test]
fn typing_sequence_yields_concatenation() {
    let mut form = ContactForm::default();
    let mut typed = String::new();
    for ch in "Ana María".chars() {
        typed.push(ch);
        form.set(ContactField::Name, typed.clone());
        assert_eq!(form.value(ContactField::Name), typed);
    }
    assert_eq!(form.name, "Ana María");
    assert_eq!(form.email, "");
    assert_eq!(form.message, "");
}

#[test]
fn set_keeps_raw_value_without_trimming() {
    let mut form = ContactForm::default();
    form.set(ContactField::Message, "  bonjour \n".to_owned());
    assert_eq!(form.message, "  bonjour \n");
}

#[test]
fn set_only_touches_target_field() {
    let mut form = filled("Ana", "a@b.com", "Hi");
    form.set(ContactField::Email, "ana@example.org".to_owned());
    assert_eq!(form, filled("Ana", "ana@example.org", "Hi"));
}

// =============================================================
// Constraint validation
// =============================================================

#[test]
fn check_reports_first_missing_field_in_form_order() {
    assert_eq!(ContactForm::default().check(), Err(ContactError::Missing(ContactField::Name)));
    assert_eq!(filled("Ana", "", "").check(), Err(ContactError::Missing(ContactField::Email)));
    assert_eq!(filled("Ana", "a@b.com", "").check(), Err(ContactError::Missing(ContactField::Message)));
}

#[test]
fn check_accepts_whitespace_as_present() {
    assert_eq!(filled(" ", "a@b.com", " ").check(), Ok(()));
}

#[test]
fn check_rejects_email_without_at_sign() {
    assert_eq!(
        filled("Ana", "ab.com", "Hi").check(),
        Err(ContactError::InvalidEmail("ab.com".to_owned()))
    );
}

#[test]
fn valid_email_examples() {
    for email in ["a@b.com", "a@b", "first.last+tag@sub.example.org", "x_y-z@host-1.io"] {
        assert!(is_valid_email(email), "{email} should be valid");
    }
}

#[test]
fn invalid_email_examples() {
    for email in ["", "@b.com", "a@", "a@@b.com", "a b@c.com", "a@-b.com", "a@b-.com", "a@b..com", "a@b.com."] {
        assert!(!is_valid_email(email), "{email} should be invalid");
    }
}

#[test]
fn domain_label_length_limit() {
    let ok = format!("a@{}.com", "x".repeat(63));
    let too_long = format!("a@{}.com", "x".repeat(64));
    assert!(is_valid_email(&ok));
    assert!(!is_valid_email(&too_long));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(ContactError::Missing(ContactField::Email).to_string(), "Adresse E-mail is required");
    assert_eq!(ContactError::InvalidEmail("ab".to_owned()).to_string(), "`ab` is not a valid email address");
    assert_eq!(ContactError::Rejected("down".to_owned()).to_string(), "submission rejected: down");
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_reports_exact_fields_then_resets() {
    let handler = RecordingHandler::default();
    let mut form = filled("Ana", "a@b.com", "Hi");

    let submitted = form.submit(&handler);

    assert_eq!(submitted, Ok(filled("Ana", "a@b.com", "Hi")));
    assert_eq!(handler.received(), vec![filled("Ana", "a@b.com", "Hi")]);
    assert_eq!(form, ContactForm::default());
}

#[test]
fn submit_with_invalid_email_leaves_state_and_skips_handler() {
    let handler = RecordingHandler::default();
    let mut form = filled("Ana", "not-an-email", "Hi");

    let result = form.submit(&handler);

    assert_eq!(result, Err(ContactError::InvalidEmail("not-an-email".to_owned())));
    assert_eq!(form, filled("Ana", "not-an-email", "Hi"));
    assert!(handler.received().is_empty());
}

#[test]
fn submit_with_missing_field_leaves_state() {
    let handler = RecordingHandler::default();
    let mut form = filled("", "a@b.com", "Hi");
    assert_eq!(form.submit(&handler), Err(ContactError::Missing(ContactField::Name)));
    assert_eq!(form, filled("", "a@b.com", "Hi"));
    assert!(handler.received().is_empty());
}

#[test]
fn submit_keeps_fields_when_handler_rejects() {
    let mut form = filled("Ana", "a@b.com", "Hi");
    let result = form.submit(&RejectingHandler);
    assert_eq!(result, Err(ContactError::Rejected("mailbox full".to_owned())));
    assert_eq!(form, filled("Ana", "a@b.com", "Hi"));
}

#[test]
fn consecutive_submissions_are_reported_separately() {
    let handler = RecordingHandler::default();
    let mut form = filled("Ana", "a@b.com", "Hi");
    assert!(form.submit(&handler).is_ok());
    form.set(ContactField::Name, "Bo".to_owned());
    form.set(ContactField::Email, "bo@c.fr".to_owned());
    form.set(ContactField::Message, "Salut".to_owned());
    assert!(form.submit(&handler).is_ok());
    assert_eq!(handler.received(), vec![filled("Ana", "a@b.com", "Hi"), filled("Bo", "bo@c.fr", "Salut")]);
}

#[test]
fn console_handler_accepts_outside_browser() {
    let mut form = filled("Ana", "a@b.com", "Hi");
    assert!(form.submit(&ConsoleContactHandler).is_ok());
    assert!(form.is_empty());
}

#[test]
fn default_sink_uses_console_handler() {
    let sink = ContactSink::default();
    assert_eq!(sink.handler().handle(&filled("Ana", "a@b.com", "Hi")), Ok(()));
}

#[test]
fn submission_serializes_as_flat_record() {
    let json = serde_json::to_value(filled("Ana", "a@b.com", "Hi")).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Ana", "email": "a@b.com", "message": "Hi" }));
}
