use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating phone numbers (requester phone / cellphone)
    /// Digits only, optionally prefixed with `+`, 8 to 15 digits
    /// - Valid: "61988554474", "+5561988554474", "33334444"
    /// - Invalid: "1234", "61 9885-5447", "phone", "++5561988554474"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]{8,15}$").unwrap();
}

/// Phone check for optional numbers where an empty string means "none given"
pub fn validate_optional_phone(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || PHONE_REGEX.is_match(value) {
        return Ok(());
    }

    let mut error = ValidationError::new("phone");
    error.message = Some("Invalid phone number".into());
    Err(error)
}
