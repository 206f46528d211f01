use enquiry_core_contact_contracts::ContactInputError;
use enquiry_models::contact::CONTACT_NUMBER_INPUT_REGEX;

/// Checks a candidate value for the contact number field while it is being
/// typed. Only the length is left to submit time.
pub fn check_contact_number(candidate: &str) -> Result<(), ContactInputError> {
    CONTACT_NUMBER_INPUT_REGEX
        .is_match(candidate)
        .then_some(())
        .ok_or(ContactInputError::NonNumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only() {
        for candidate in ["", "0", "017", "0123456789", "01234567890123"] {
            assert_eq!(check_contact_number(candidate), Ok(()), "{candidate:?}");
        }
    }

    #[test]
    fn rejects_non_digits() {
        for candidate in ["a", "012a", "012 345", "+49", "-1", "1.5"] {
            assert_eq!(
                check_contact_number(candidate),
                Err(ContactInputError::NonNumeric),
                "{candidate:?}"
            );
        }
    }
}
