use std::future::Future;

use enquiry_extern_contracts::form_sink::FormSinkTransportError;
use enquiry_models::contact::{ContactField, ContactRequest, FormVariant};
use thiserror::Error;

/// A single contact form instance.
///
/// Holds exactly one [`ContactRequest`] that is edited field by field and
/// eventually submitted. Outcomes are reported to the visitor through
/// notifications; the returned errors tell the host what happened.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    fn variant(&self) -> FormVariant;

    /// Heading shown above the form.
    fn page_title(&self) -> String;

    /// Return a snapshot of the current field values.
    fn form(&self) -> ContactRequest;

    /// Whether a submission is currently in flight.
    fn is_submitting(&self) -> bool;

    /// Replace the value of one field.
    ///
    /// Values for [`ContactField::ContactNumber`] must consist of digits only;
    /// other input is rejected, leaves the field unchanged and shows a warning.
    /// [`ContactField::Query`] cannot be edited.
    fn set_field(&self, field: ContactField, value: String) -> Result<(), ContactInputError>;

    /// Validate and send the current request.
    ///
    /// On success the form is reset and, if the host registered a close
    /// callback, it is invoked after the close delay. On failure the entered
    /// values are kept.
    fn submit(&self) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactInputError {
    #[error("Please enter numeric value only!")]
    NonNumeric,
    #[error("The field {0} cannot be edited.")]
    ReadOnly(ContactField),
}

/// Rules checked before submitting, in the order they are checked.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    #[error("Please enter your name!")]
    NameMissing,
    #[error("Please enter your email!")]
    EmailMissing,
    #[error("Please enter a valid email address!")]
    EmailInvalid,
    #[error("Please enter your contact number!")]
    ContactNumberMissing,
    #[error("Contact number must be 10 digits!")]
    ContactNumberInvalid,
    #[error("Please enter your address!")]
    AddressMissing,
    #[error("Please enter your message!")]
    MessageMissing,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error(transparent)]
    Validation(#[from] ContactValidationError),
    #[error("A submission is already in progress.")]
    InProgress,
    #[error(transparent)]
    Transport(#[from] FormSinkTransportError),
}
