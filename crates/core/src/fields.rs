//! Field-level validation shared by the catalog entities.
//!
//! Every entity carries a short display field (`name`, or `text` for
//! Simple) capped at [`MAX_NAME_LEN`] characters; Simple additionally
//! carries a URL that defaults to [`DEFAULT_SIMPLE_URL`] when omitted.

use validator::ValidateUrl;

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Validation limits / defaults
   -------------------------------------------------------------------------- */

/// Maximum length (in characters) for any entity name or text field.
pub const MAX_NAME_LEN: usize = 100;

/// URL stored for a Simple when none is provided.
///
/// The default is applied verbatim and never validated; only explicitly
/// provided URLs go through [`validate_url`].
pub const DEFAULT_SIMPLE_URL: &str = "www.abc.com";

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a required display field: non-empty and within length limit.
///
/// `field` names the field in error messages (e.g. `"Language name"`).
pub fn validate_name(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{field} too long: {len} chars (max {MAX_NAME_LEN})"
        )));
    }
    Ok(())
}

/// Validate that `value` is a well-formed absolute URL.
pub fn validate_url(value: &str) -> Result<(), CoreError> {
    if value.validate_url() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Malformed URL: '{value}'")))
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
