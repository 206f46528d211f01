use enquiry_core_contact_contracts::ContactValidationError;
use enquiry_models::contact::{
    is_blank, ContactEmail, ContactField, ContactName, ContactNumber, ContactRequest,
    RequiredFields, ValidContactRequest,
};

/// Checks the request before it is sent.
///
/// Rules are checked in the order of [`ContactValidationError`]'s variants and
/// only the first violation is reported. Address and message are only checked
/// if they are part of `required`.
pub fn validate(
    request: &ContactRequest,
    required: &RequiredFields,
) -> Result<ValidContactRequest, ContactValidationError> {
    use ContactValidationError::*;

    let name = ContactName::try_new(request.name.clone()).map_err(|_| NameMissing)?;

    if is_blank(&request.email) {
        return Err(EmailMissing);
    }
    let email = ContactEmail::try_new(request.email.clone()).map_err(|_| EmailInvalid)?;

    if is_blank(&request.contact_number) {
        return Err(ContactNumberMissing);
    }
    let contact_number = ContactNumber::try_new(request.contact_number.clone())
        .map_err(|_| ContactNumberInvalid)?;

    if required.contains(ContactField::Address) && is_blank(&request.address) {
        return Err(AddressMissing);
    }
    if required.contains(ContactField::Message) && is_blank(&request.message) {
        return Err(MessageMissing);
    }

    Ok(ValidContactRequest {
        name,
        email,
        contact_number,
        address: request.address.clone(),
        query: request.query.clone(),
        message: request.message.clone(),
    })
}
