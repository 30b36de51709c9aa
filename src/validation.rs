//! Form field validators
//!
//! Messages surface verbatim under the offending field, so they are part of
//! the UI contract.

pub fn validate_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("Name is required");
    }
    if name.trim().len() < 2 {
        return Some("Name must be at least 2 characters");
    }
    if name.len() > 100 {
        return Some("Name must be less than 100 characters");
    }
    None
}

pub fn validate_phone(phone: &str) -> Option<&'static str> {
    if phone.trim().is_empty() {
        return Some("Phone number is required");
    }
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '+'))
        .collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Some("Phone number must contain only digits, spaces, dashes, or +");
    }
    if digits.len() < 10 {
        return Some("Phone number must be at least 10 digits");
    }
    if phone.len() > 15 {
        return Some("Phone number must be less than 15 characters");
    }
    None
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        return Some("Email is required");
    }
    let mut parts = email.split('@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    let well_formed = parts.next().is_none()
        && !local.is_empty()
        && !local.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains(char::is_whitespace);
    if !well_formed {
        return Some("Please enter a valid email address");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert_eq!(validate_name(""), Some("Name is required"));
        assert_eq!(validate_name("A"), Some("Name must be at least 2 characters"));
        assert_eq!(
            validate_name(&"A".repeat(101)),
            Some("Name must be less than 100 characters")
        );
        assert_eq!(validate_name("John Doe"), None);
    }

    #[test]
    fn phone_rules() {
        assert_eq!(
            validate_phone("123"),
            Some("Phone number must be at least 10 digits")
        );
        assert_eq!(validate_phone("+91 9876543210"), None);
        assert_eq!(
            validate_phone("abc1234567"),
            Some("Phone number must contain only digits, spaces, dashes, or +")
        );
        assert_eq!(
            validate_phone("123-456-789-012-3"),
            Some("Phone number must be less than 15 characters")
        );
        assert_eq!(validate_phone(""), Some("Phone number is required"));
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate_email(""), Some("Email is required"));
        assert_eq!(
            validate_email("not-an-email"),
            Some("Please enter a valid email address")
        );
        assert_eq!(validate_email("a@b"), Some("Please enter a valid email address"));
        assert_eq!(validate_email("user@example.com"), None);
    }
}
