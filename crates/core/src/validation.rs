//! Bridge between `validator` derive rules and [`CoreError`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the derived validation rules of `input`.
///
/// On failure the first offending field (in name order, so the result is
/// deterministic) is reported as [`CoreError::InvalidField`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(|errors| first_field_error(&errors))
}

fn first_field_error(errors: &ValidationErrors) -> CoreError {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect();
    fields.sort();

    match fields.into_iter().next() {
        Some((field, message)) => CoreError::invalid_field(field, message),
        None => CoreError::Validation(errors.to_string()),
    }
}
