//! Book model and request payload types.
//!
//! The payload types carry the declarative validation rules enforced before
//! any request reaches the service layer: title and author are bounded
//! non-empty strings, the publication year must fall between 1800 and the
//! current calendar year, and the ISBN must be digits with optional hyphens
//! amounting to exactly 10 or 13 digits.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// ISBN character set: digits and hyphens only
static ISBN_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9-]+$").unwrap());

/// A catalog book. The `id` is server-assigned at creation and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Unique identifier (UUID), assigned by the server
    pub id: String,
    pub title: String,
    pub author: String,
    /// Publication year
    pub year: i32,
    pub isbn: String,
}

/// Create book request; all fields required
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "Author must be between 1 and 100 characters"))]
    pub author: String,
    #[validate(custom(function = "validate_year"))]
    pub year: i32,
    #[validate(custom(function = "validate_isbn"))]
    pub isbn: String,
}

/// Update book request; partial semantics, only provided fields are
/// validated and merged over the existing record
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Author must be between 1 and 100 characters"))]
    pub author: Option<String>,
    #[validate(custom(function = "validate_year"))]
    pub year: Option<i32>,
    #[validate(custom(function = "validate_isbn"))]
    pub isbn: Option<String>,
}

fn validate_year(year: i32) -> Result<(), ValidationError> {
    if year < 1800 {
        let mut err = ValidationError::new("year");
        err.message = Some("Year must be after 1800".into());
        return Err(err);
    }
    if year > Utc::now().year() {
        let mut err = ValidationError::new("year");
        err.message = Some("Year cannot be in the future".into());
        return Err(err);
    }
    Ok(())
}

fn validate_isbn(isbn: &str) -> Result<(), ValidationError> {
    let digits = isbn.chars().filter(|c| c.is_ascii_digit()).count();
    if ISBN_FORMAT.is_match(isbn) && (digits == 10 || digits == 13) {
        return Ok(());
    }
    let mut err = ValidationError::new("isbn");
    err.message = Some("Invalid ISBN format".into());
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_payload() -> CreateBook {
        CreateBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            year: 1965,
            isbn: "9780441013593".to_string(),
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(create_payload().validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut payload = create_payload();
        payload.title = String::new();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_long_author_rejected() {
        let mut payload = create_payload();
        payload.author = "a".repeat(101);
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("author"));
    }

    #[test]
    fn test_year_boundaries() {
        let current_year = Utc::now().year();

        let mut payload = create_payload();
        payload.year = 1799;
        assert!(payload.validate().is_err());

        payload.year = 1800;
        assert!(payload.validate().is_ok());

        payload.year = current_year;
        assert!(payload.validate().is_ok());

        payload.year = current_year + 1;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_isbn_ten_and_thirteen_digits() {
        let mut payload = create_payload();
        payload.isbn = "0441013593".to_string();
        assert!(payload.validate().is_ok());

        payload.isbn = "978-0-441-01359-3".to_string();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_isbn_wrong_digit_count_rejected() {
        let mut payload = create_payload();
        payload.isbn = "12345678901".to_string();
        assert!(payload.validate().is_err());

        payload.isbn = "123".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_isbn_bad_characters_rejected() {
        let mut payload = create_payload();
        payload.isbn = "97804410135X3".to_string();
        assert!(payload.validate().is_err());

        payload.isbn = "978 0441013593".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_empty_update_is_valid() {
        assert!(UpdateBook::default().validate().is_ok());
    }

    #[test]
    fn test_update_validates_provided_fields() {
        let patch = UpdateBook {
            year: Some(1700),
            ..Default::default()
        };
        let errors = patch.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
    }
}
