use crate::models::error::DispatchError;

/// Validates an E.164-style WhatsApp recipient: leading `+`, a non-zero
/// first digit, 7 to 15 digits total.
pub fn validate_whatsapp_number(to: &str) -> Result<(), DispatchError> {
    let digits = match to.strip_prefix('+') {
        Some(rest) => rest,
        None => {
            return Err(DispatchError::Validation(
                "Phone number must start with '+'".to_string(),
            ));
        }
    };

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(DispatchError::Validation(
            "Phone number must contain only digits after '+'".to_string(),
        ));
    }

    if digits.starts_with('0') {
        return Err(DispatchError::Validation(
            "Phone number country code cannot start with 0".to_string(),
        ));
    }

    if digits.len() < 7 {
        return Err(DispatchError::Validation(
            "Phone number too short (minimum 7 digits)".to_string(),
        ));
    }

    if digits.len() > 15 {
        return Err(DispatchError::Validation(
            "Phone number too long (maximum 15 digits)".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_international_numbers() {
        for number in ["+2348012345678", "+14155552671", "+4915123456789", "+1234567"] {
            assert!(
                validate_whatsapp_number(number).is_ok(),
                "expected {} to validate",
                number
            );
        }
    }

    #[test]
    fn rejects_malformed_numbers() {
        for number in [
            "",
            "2348012345678",
            "+0123456789",
            "+123456",
            "+1234567890123456",
            "+234-801-234",
            "+23480abc678",
            "+",
        ] {
            assert!(
                validate_whatsapp_number(number).is_err(),
                "expected {} to be rejected",
                number
            );
        }
    }

    #[test]
    fn boundary_lengths() {
        assert!(validate_whatsapp_number("+1234567").is_ok());
        assert!(validate_whatsapp_number("+123456789012345").is_ok());
        assert!(validate_whatsapp_number("+123456").is_err());
        assert!(validate_whatsapp_number("+1234567890123456").is_err());
    }
}
