//! Input validation utilities

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Invalid email format");
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format");
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate a WhatsApp number: optional leading +, then 7-15 digits
pub fn validate_whatsapp_number(number: &str) -> Result<(), &'static str> {
    let digits = number.strip_prefix('+').unwrap_or(number);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("WhatsApp number can only contain digits and an optional leading +");
    }
    if !(7..=15).contains(&digits.len()) {
        return Err("WhatsApp number must be between 7 and 15 digits");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
    }

    #[test]
    fn test_validate_whatsapp_number() {
        assert!(validate_whatsapp_number("+14155552671").is_ok());
        assert!(validate_whatsapp_number("14155552671").is_ok());
        assert!(validate_whatsapp_number("+1-415").is_err());
        assert!(validate_whatsapp_number("12345").is_err());
        assert!(validate_whatsapp_number("").is_err());
    }
}
