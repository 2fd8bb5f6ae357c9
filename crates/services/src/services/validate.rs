//! Field validation shared by the admin gateway, booking and contact flows.
//! All checks run before any database or network call.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

pub fn required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(())
    }
}

pub fn min_len(field: &str, value: &str, min: usize) -> Result<(), String> {
    if value.trim().chars().count() < min {
        Err(format!("{field} must be at least {min} characters"))
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> Result<(), String> {
    if EMAIL_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err("email address is not valid".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_whitespace_only() {
        assert!(required("title", "   ").is_err());
        assert!(required("title", "").is_err());
        assert!(required("title", " Home ").is_ok());
    }

    #[test]
    fn min_len_counts_chars_after_trim() {
        assert!(min_len("message", "Hi", 10).is_err());
        assert!(min_len("message", "Hello there!", 10).is_ok());
        assert!(min_len("name", " A ", 2).is_err());
    }

    #[test]
    fn email_basic_shape() {
        assert!(email("info@solarshine.example").is_ok());
        assert!(email("not-an-email").is_err());
        assert!(email("a b@c.d").is_err());
    }
}
