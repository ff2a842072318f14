//! Field checks shared by the portal's forms.

use chrono::NaiveDate;

use crate::error::{FieldError, FieldErrors};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fails `field` when `value` is blank.
pub fn required(field: &'static str, label: &str, value: &str, errors: &mut FieldErrors) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", label)));
        return false;
    }
    true
}

/// Like [`required`], with the whole message supplied.
pub fn present(field: &'static str, message: &str, value: &str, errors: &mut FieldErrors) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
        return false;
    }
    true
}

/// Parses a required non-negative whole number, ignoring `,` separators.
pub fn whole_number(
    field: &'static str,
    label: &str,
    value: &str,
    errors: &mut FieldErrors,
) -> Option<u32> {
    if !required(field, label, value, errors) {
        return None;
    }
    let digits: String = value.trim().chars().filter(|c| *c != ',').collect();
    match digits.parse::<u32>() {
        Ok(number) => Some(number),
        Err(_) => {
            errors.push(FieldError::new(
                field,
                format!("{} must be a whole number", label),
            ));
            None
        }
    }
}

/// Parses a required `YYYY-MM-DD` date.
pub fn date(
    field: &'static str,
    label: &str,
    value: &str,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    if !required(field, label, value, errors) {
        return None;
    }
    match NaiveDate::parse_from_str(value.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(
                field,
                format!("{} must be a date like 2025-03-31", label),
            ));
            None
        }
    }
}

/// Requires a value shaped like `something@something` with no whitespace.
pub fn email(field: &'static str, value: &str, errors: &mut FieldErrors) -> bool {
    if !required(field, "Email", value, errors) {
        return false;
    }
    if !is_email(value.trim()) {
        errors.push(FieldError::new(field, "Invalid email address"));
        return false;
    }
    true
}

pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    value
        .char_indices()
        .any(|(i, c)| c == '@' && i > 0 && i + 1 < value.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_email("jobseeker@demo.com"));
        assert!(is_email("a@b"));
        assert!(!is_email("@demo.com"));
        assert!(!is_email("jobseeker@"));
        assert!(!is_email("job seeker@demo.com"));
        assert!(!is_email("plainaddress"));
    }

    #[test]
    fn required_rejects_whitespace() {
        let mut errors = FieldErrors::new();
        assert!(!required("phone", "Phone number", "   ", &mut errors));
        assert_eq!(errors.get("phone"), Some("Phone number is required"));
    }

    #[test]
    fn email_reports_one_error_per_field() {
        let mut errors = FieldErrors::new();
        email("email", "", &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn whole_numbers_allow_separators() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            whole_number("salary_min", "Minimum salary", "8,00,000", &mut errors),
            Some(800_000)
        );
        assert_eq!(whole_number("salary_max", "Maximum salary", "lots", &mut errors), None);
        assert_eq!(
            errors.get("salary_max"),
            Some("Maximum salary must be a whole number")
        );
    }

    #[test]
    fn dates_use_iso_format() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            date("deadline", "Application deadline", "2025-03-31", &mut errors),
            NaiveDate::from_ymd_opt(2025, 3, 31)
        );
        assert_eq!(date("deadline", "Application deadline", "31/03/2025", &mut errors), None);
        assert_eq!(errors.len(), 1);

        let mut errors = FieldErrors::new();
        date("deadline", "Application deadline", " ", &mut errors);
        assert_eq!(errors.get("deadline"), Some("Application deadline is required"));
    }
}
