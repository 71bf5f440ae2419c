use std::borrow::Cow;

use validator::ValidationError;

/// Rejects values that are empty once surrounding whitespace is dropped.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("Must not be blank"));
        return Err(err);
    }
    Ok(())
}
