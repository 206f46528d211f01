use enquiry_core_contact_contracts::{ContactFormService, ContactInputError};
use enquiry_models::{
    contact::{ContactField, ContactRequest},
    notification::Severity,
};
use enquiry_utils::assert_matches;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn defaults() {
    // Arrange
    let sut = make_sut(
        MockFormSinkApiService::new(),
        MockNotificationService::new(),
        ContactFormProps {
            query: "service".into(),
            ..Default::default()
        },
    );

    // Act
    let form = sut.form();

    // Assert
    assert_eq!(form, ContactRequest::new("service"));
    assert!(!sut.is_submitting());
    assert_eq!(sut.variant(), FormVariant::FullPage);
    assert_eq!(sut.page_title(), "Get in Touch");
}

#[test]
fn ok() {
    // Arrange
    let sut = make_sut(
        MockFormSinkApiService::new(),
        MockNotificationService::new(),
        ContactFormProps::default(),
    );
    sut.set_field(ContactField::Email, "max@example.com".into())
        .unwrap();

    // Act
    let result = sut.set_field(ContactField::Name, "Max".into());

    // Assert
    result.unwrap();
    assert_eq!(
        sut.form(),
        ContactRequest {
            name: "Max".into(),
            email: "max@example.com".into(),
            query: "enquiry".into(),
            ..Default::default()
        }
    );
}

#[test]
fn contact_number_digits() {
    // Arrange
    let sut = make_sut(
        MockFormSinkApiService::new(),
        MockNotificationService::new(),
        ContactFormProps::default(),
    );

    for candidate in ["0", "01", "012", "01", ""] {
        // Act
        let result = sut.set_field(ContactField::ContactNumber, candidate.into());

        // Assert
        result.unwrap();
        assert_eq!(sut.form().contact_number, candidate);
    }
}

#[test]
fn contact_number_non_numeric() {
    // Arrange
    let notify = MockNotificationService::new()
        .with_notify("Please enter numeric value only!", Severity::Error);
    let sut = make_sut(
        MockFormSinkApiService::new(),
        notify,
        ContactFormProps::default(),
    );
    sut.set_field(ContactField::ContactNumber, "012".into())
        .unwrap();

    // Act
    let result = sut.set_field(ContactField::ContactNumber, "012a".into());

    // Assert
    assert_matches!(result, Err(ContactInputError::NonNumeric));
    assert_eq!(sut.form().contact_number, "012");
}

#[test]
fn query_is_read_only() {
    // Arrange
    let sut = make_sut(
        MockFormSinkApiService::new(),
        MockNotificationService::new(),
        ContactFormProps::default(),
    );

    // Act
    let result = sut.set_field(ContactField::Query, "sales".into());

    // Assert
    assert_matches!(result, Err(ContactInputError::ReadOnly(ContactField::Query)));
    assert_eq!(sut.form().query, "enquiry");
}
