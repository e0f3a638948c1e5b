//! Shared request validation.
//!
//! The gateway maps an absent path id to `Uuid::nil()`; everything here
//! rejects such ids before any store call, so the "fails before lookup"
//! contract holds for every service entry point.

use uuid::Uuid;

use crate::config::{
    MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH, MSG_EMPTY, MSG_NULL, MSG_USERNAME_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Reject the nil UUID with "<name> id can't be null".
pub(crate) fn require_id(id: Uuid, name: &str) -> AppResult<()> {
    if id.is_nil() {
        return Err(AppError::validation(format!("{} id {}", name, MSG_NULL)));
    }
    Ok(())
}

/// Require a present, non-empty text field, keeping the null-vs-empty
/// distinction in the error detail.
pub(crate) fn required_text<'a>(value: Option<&'a str>, field: &str) -> AppResult<&'a str> {
    match value {
        None => Err(AppError::validation(format!("{} {}", field, MSG_NULL))),
        Some("") => Err(AppError::validation(format!("{} {}", field, MSG_EMPTY))),
        Some(text) => Ok(text),
    }
}

/// Enforce a title length bound.
pub(crate) fn check_title_length(title: &str, max: usize) -> AppResult<()> {
    if title.chars().count() > max {
        return Err(AppError::validation(format!(
            "Title is too long, maximum length is {}",
            max
        )));
    }
    Ok(())
}

/// Enforce the username length rule.
pub(crate) fn check_username_length(username: &str) -> AppResult<()> {
    let length = username.chars().count();
    if length < MIN_USERNAME_LENGTH || length > MAX_USERNAME_LENGTH {
        return Err(AppError::validation(MSG_USERNAME_LENGTH));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_id_is_rejected() {
        let err = require_id(Uuid::nil(), "Board").unwrap_err();
        assert_eq!(err.to_string(), "Board id can't be null");

        assert!(require_id(Uuid::new_v4(), "Board").is_ok());
    }

    #[test]
    fn test_required_text_distinguishes_null_and_empty() {
        let null_err = required_text(None, "Title").unwrap_err();
        assert_eq!(null_err.to_string(), "Title can't be null");

        let empty_err = required_text(Some(""), "Title").unwrap_err();
        assert_eq!(empty_err.to_string(), "Title can't be empty");

        assert_eq!(required_text(Some("Groceries"), "Title").unwrap(), "Groceries");
    }

    #[test]
    fn test_username_length_bounds() {
        assert!(check_username_length("ab").is_err());
        assert!(check_username_length("abc").is_ok());
        assert!(check_username_length(&"a".repeat(32)).is_ok());
        assert!(check_username_length(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_title_length_bound() {
        assert!(check_title_length("ok", 255).is_ok());
        assert!(check_title_length(&"a".repeat(256), 255).is_err());
    }
}
