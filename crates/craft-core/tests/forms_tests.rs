// Contact form validation: field checks in display order plus the email
// pattern.

use craft_core::forms::{is_valid_email, ContactForm, FieldError};

fn filled() -> ContactForm {
    ContactForm {
        name: "Nimali Perera".into(),
        email: "nimali@example.com".into(),
        message: "Do you ship clay pots to Kandy?".into(),
    }
}

#[test]
fn valid_submission_passes() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn all_empty_fields_report_in_display_order() {
    let errors = ContactForm::default().validate().unwrap_err();
    assert_eq!(
        errors,
        vec![
            FieldError::MissingName,
            FieldError::MissingEmail,
            FieldError::MissingMessage,
        ]
    );
}

#[test]
fn whitespace_only_counts_as_empty() {
    let mut form = filled();
    form.name = "   ".into();
    assert_eq!(form.validate(), Err(vec![FieldError::MissingName]));
}

#[test]
fn bad_email_reports_invalid_not_missing() {
    let mut form = filled();
    form.email = "not-an-email".into();
    assert_eq!(form.validate(), Err(vec![FieldError::InvalidEmail]));
}

#[test]
fn error_messages_match_the_alert_copy() {
    assert_eq!(FieldError::MissingName.to_string(), "Please enter your name.");
    assert_eq!(
        FieldError::InvalidEmail.to_string(),
        "Please enter a valid email address."
    );
}

#[test]
fn accepts_common_address_shapes() {
    for email in [
        "user@example.com",
        "first.last@sub.domain.org",
        "UPPER.CASE@EXAMPLE.COM",
        "a-b@my-host.io",
    ] {
        assert!(is_valid_email(email), "{email} should be accepted");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in [
        "plain",
        "missing-at.example.com",
        "user@",
        "@example.com",
        "user@host",
        "user@host.c",
        "user name@example.com",
        "user@exam ple.com",
        "user..dots@example.com",
    ] {
        assert!(!is_valid_email(email), "{email} should be rejected");
    }
}
