use std::{collections::BTreeSet, fmt, sync::LazyLock};

use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Accepted while typing: the empty string or digits only.
pub static CONTACT_NUMBER_INPUT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]*$").unwrap());

pub static CONTACT_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{10}$").unwrap());

/// `\S` restricted to the whitespace set of [`is_form_whitespace`].
const NON_SPACE: &str = r"[[^\s\x{FEFF}]\x{85}]";

pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{NON_SPACE}+@{NON_SPACE}+\\.{NON_SPACE}+$")).unwrap()
});

/// Whitespace as browsers trim it: Unicode `White_Space` without U+0085,
/// plus the byte order mark U+FEFF.
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Whether `value` is empty after trimming [form whitespace](is_form_whitespace).
pub fn is_blank(value: &str) -> bool {
    value.trim_matches(is_form_whitespace).is_empty()
}

pub const DEFAULT_QUERY: &str = "enquiry";
pub const DEFAULT_PAGE_TITLE: &str = "Get in Touch";

/// The inquiry currently being edited in a contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    pub query: String,
    pub message: String,
}

impl ContactRequest {
    /// Returns an empty request with the `query` category pre-filled.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::ContactNumber => &self.contact_number,
            ContactField::Address => &self.address,
            ContactField::Query => &self.query,
            ContactField::Message => &self.message,
        }
    }

    /// Replaces the value of a single field, leaving all others untouched.
    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::ContactNumber => &mut self.contact_number,
            ContactField::Address => &mut self.address,
            ContactField::Query => &mut self.query,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    ContactNumber,
    Address,
    Query,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::ContactNumber,
        Self::Address,
        Self::Query,
        Self::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::ContactNumber => "contactNumber",
            Self::Address => "address",
            Self::Query => "query",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::ContactNumber => "Contact Number",
            Self::Address => "Address",
            Self::Query => "Query",
            Self::Message => "Message",
        }
    }

    /// Whether a visitor may edit this field directly.
    pub fn is_editable(self) -> bool {
        self != Self::Query
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation variant of the form. Fixed for the lifetime of a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormVariant {
    /// Compact modal: only name, email and contact number are asked for.
    Popup,
    /// Full page section: additionally asks for address and message.
    #[default]
    FullPage,
}

impl FormVariant {
    pub fn is_popup(self) -> bool {
        self == Self::Popup
    }

    pub fn required_fields(self) -> RequiredFields {
        let mut fields = BTreeSet::from([
            ContactField::Name,
            ContactField::Email,
            ContactField::ContactNumber,
        ]);
        if self == Self::FullPage {
            fields.extend([ContactField::Address, ContactField::Message]);
        }
        RequiredFields(fields)
    }
}

/// The set of fields that must be filled in before a form can be submitted.
///
/// Every required field is also a visible input; the remaining fields are
/// either hidden (`query`) or absent from the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFields(BTreeSet<ContactField>);

impl RequiredFields {
    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains(&field)
    }

    /// Iterates the required fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.iter().copied()
    }
}

#[nutype(
    validate(predicate = |name| !is_blank(name)),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref)
)]
pub struct ContactName(String);

#[nutype(
    validate(regex = CONTACT_EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref)
)]
pub struct ContactEmail(String);

#[nutype(
    validate(regex = CONTACT_NUMBER_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref)
)]
pub struct ContactNumber(String);

/// A [`ContactRequest`] that passed validation and may be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContactRequest {
    pub name: ContactName,
    pub email: ContactEmail,
    pub contact_number: ContactNumber,
    pub address: String,
    pub query: String,
    pub message: String,
}

/// External field identifiers of the hosted form, one per [`ContactField`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFieldMapping {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    pub query: String,
    pub message: String,
}

impl ContactFieldMapping {
    pub fn key(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::ContactNumber => &self.contact_number,
            ContactField::Address => &self.address,
            ContactField::Query => &self.query,
            ContactField::Message => &self.message,
        }
    }
}

impl Default for ContactFieldMapping {
    fn default() -> Self {
        Self {
            name: "entry.98504594".into(),
            email: "entry.690186531".into(),
            contact_number: "entry.1369128842".into(),
            address: "entry.864243374".into(),
            query: "entry.545556729".into(),
            message: "entry.2011894093".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_single_field() {
        let mut request = ContactRequest::new("service");
        request.set(ContactField::Name, "Max".into());
        request.set(ContactField::Email, "max@example.com".into());
        request.set(ContactField::Name, "Erika".into());

        assert_eq!(
            request,
            ContactRequest {
                name: "Erika".into(),
                email: "max@example.com".into(),
                query: "service".into(),
                ..Default::default()
            }
        );
        assert_eq!(request.get(ContactField::Query), "service");
    }

    #[test]
    fn required_fields_per_variant() {
        let popup = FormVariant::Popup.required_fields();
        assert_eq!(
            popup.iter().collect::<Vec<_>>(),
            [
                ContactField::Name,
                ContactField::Email,
                ContactField::ContactNumber
            ]
        );

        let full = FormVariant::FullPage.required_fields();
        assert_eq!(
            full.iter().collect::<Vec<_>>(),
            [
                ContactField::Name,
                ContactField::Email,
                ContactField::ContactNumber,
                ContactField::Address,
                ContactField::Message,
            ]
        );
        assert!(!full.contains(ContactField::Query));
    }

    #[test]
    fn contact_number_input() {
        for (input, ok) in [
            ("", true),
            ("0", true),
            ("0123456789", true),
            ("12a", false),
            ("12 3", false),
            ("+49", false),
            ("١٢٣", false),
        ] {
            assert_eq!(CONTACT_NUMBER_INPUT_REGEX.is_match(input), ok, "{input:?}");
        }
    }

    #[test]
    fn contact_number() {
        assert!(ContactNumber::try_new("0123456789").is_ok());
        assert!(ContactNumber::try_new("12345").is_err());
        assert!(ContactNumber::try_new("01234567890").is_err());
    }

    #[test]
    fn contact_email() {
        for (input, ok) in [
            ("max@example.com", true),
            ("a@b.c", true),
            ("not-an-email", false),
            ("max@example", false),
            ("max @example.com", false),
            (" max@example.com", false),
            ("max@exa\u{FEFF}mple.com", false),
            ("max\u{85}@example.com", true),
        ] {
            assert_eq!(ContactEmail::try_new(input).is_ok(), ok, "{input:?}");
        }
    }

    #[test]
    fn contact_name() {
        assert!(ContactName::try_new("Max").is_ok());
        assert!(ContactName::try_new("  \t").is_err());
        assert!(ContactName::try_new("\u{FEFF}").is_err());
        assert!(ContactName::try_new("\u{85}").is_ok());
    }

    #[test]
    fn blank() {
        for (input, blank) in [
            ("", true),
            (" \t\r\n", true),
            ("\u{A0}\u{2028}\u{3000}", true),
            ("\u{FEFF}", true),
            ("\u{85}", false),
            (" x ", false),
        ] {
            assert_eq!(is_blank(input), blank, "{input:?}");
        }
    }

    #[test]
    fn field_mapping_defaults() {
        let mapping: ContactFieldMapping =
            serde_json::from_value(serde_json::json!({ "name": "entry.1" })).unwrap();
        assert_eq!(mapping.key(ContactField::Name), "entry.1");
        assert_eq!(mapping.key(ContactField::Message), "entry.2011894093");
    }

    #[test]
    fn variant_serde() {
        let variant: FormVariant = serde_json::from_value("popup".into()).unwrap();
        assert!(variant.is_popup());
        let variant: FormVariant = serde_json::from_value("full-page".into()).unwrap();
        assert_eq!(variant, FormVariant::FullPage);
    }
}
