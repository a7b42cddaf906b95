//! Form input handling: raw field values in, typed values out.

use thiserror::Error;

use crate::models::{PassengerInfo, SearchCriteria};

/// Client-side validation failures. The `Display` text is the notice shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingSearchFields,

    #[error("Please select a flight first.")]
    NoFlightSelected,
}

/// Raw values of the `searchForm` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub origin: String,
    pub destination: String,
    pub date: String,
}

impl SearchForm {
    /// Trims every field and requires all three to be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingSearchFields`] if any field is blank.
    pub fn validate(&self) -> Result<SearchCriteria, ValidationError> {
        let origin = self.origin.trim();
        let destination = self.destination.trim();
        let date = self.date.trim();
        if origin.is_empty() || destination.is_empty() || date.is_empty() {
            return Err(ValidationError::MissingSearchFields);
        }
        Ok(SearchCriteria {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            date: date.to_owned(),
        })
    }
}

/// Raw values of the `bookingForm` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub age: String,
}

impl BookingForm {
    /// Builds the passenger payload. Only trimming and integer coercion are
    /// applied; the backend owns real validation.
    #[must_use]
    pub fn passenger(&self) -> PassengerInfo {
        PassengerInfo {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            age: parse_age(&self.age),
        }
    }
}

/// Parses the leading integer of `raw`, ignoring leading whitespace and any
/// trailing garbage (`" 42 years"` → `Some(42)`). Returns `None` when there is
/// no leading integer or it does not fit in an `i64`.
#[must_use]
pub fn parse_age(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    s[..sign_len + digits_len].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(origin: &str, destination: &str, date: &str) -> SearchForm {
        SearchForm {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            date: date.to_owned(),
        }
    }

    #[test]
    fn search_form_trims_fields() {
        let criteria = form("  Delhi ", "Mumbai\t", " 2025-11-01 ")
            .validate()
            .expect("should validate");
        assert_eq!(criteria.origin, "Delhi");
        assert_eq!(criteria.destination, "Mumbai");
        assert_eq!(criteria.date, "2025-11-01");
    }

    #[test]
    fn search_form_rejects_blank_fields() {
        for f in [
            form("", "Mumbai", "2025-11-01"),
            form("Delhi", "   ", "2025-11-01"),
            form("Delhi", "Mumbai", ""),
        ] {
            assert_eq!(f.validate(), Err(ValidationError::MissingSearchFields));
        }
    }

    #[test]
    fn parse_age_leading_integer() {
        assert_eq!(parse_age("42"), Some(42));
        assert_eq!(parse_age("  42 years"), Some(42));
        assert_eq!(parse_age("-3"), Some(-3));
        assert_eq!(parse_age("+7"), Some(7));
        assert_eq!(parse_age("12.9"), Some(12));
    }

    #[test]
    fn parse_age_without_digits_is_none() {
        assert_eq!(parse_age(""), None);
        assert_eq!(parse_age("abc"), None);
        assert_eq!(parse_age("-"), None);
        assert_eq!(parse_age("99999999999999999999"), None);
    }

    #[test]
    fn booking_form_builds_passenger() {
        let passenger = BookingForm {
            name: " Asha Rao ".to_owned(),
            email: "asha@example.com ".to_owned(),
            age: "31".to_owned(),
        }
        .passenger();
        assert_eq!(passenger.name, "Asha Rao");
        assert_eq!(passenger.email, "asha@example.com");
        assert_eq!(passenger.age, Some(31));
    }
}
