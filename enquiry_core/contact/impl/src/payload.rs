use enquiry_extern_contracts::form_sink::FormPayload;
use enquiry_models::contact::{ContactField, ContactFieldMapping, ValidContactRequest};

/// Maps each of the six fields onto its external field identifier.
pub fn to_payload(request: &ValidContactRequest, mapping: &ContactFieldMapping) -> FormPayload {
    [
        (ContactField::Name, request.name.as_str()),
        (ContactField::Email, request.email.as_str()),
        (ContactField::ContactNumber, request.contact_number.as_str()),
        (ContactField::Address, request.address.as_str()),
        (ContactField::Query, request.query.as_str()),
        (ContactField::Message, request.message.as_str()),
    ]
    .into_iter()
    .map(|(field, value)| (mapping.key(field), value))
    .collect()
}
