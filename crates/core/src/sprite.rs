//! Sprite field rules and the messages reported when a field breaks them.
//!
//! The storage schema (`name VARCHAR(20)`, `INTEGER` positions) mirrors these
//! limits, so a value that passes here is always accepted by the database.

/// Entity name used in not-found errors and log fields.
pub const SPRITE_ENTITY: &str = "Sprite";

/// Maximum length of a sprite name, counted in characters.
pub const NAME_MAX_CHARS: u64 = 20;

/// Name stored when a create or replace request omits it.
pub const DEFAULT_NAME: &str = "";

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_NOT_NULL: &str = "This field may not be null.";
pub const MSG_NOT_STRING: &str = "Not a valid string.";
pub const MSG_NOT_INTEGER: &str = "A valid integer is required.";
pub const MSG_NAME_TOO_LONG: &str = "Ensure this field has no more than 20 characters.";

/// Message for a position outside the 32-bit column range.
pub fn out_of_range_message() -> String {
    format!(
        "Ensure this value is between {} and {}.",
        i32::MIN,
        i32::MAX
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_limit_matches_message() {
        assert!(MSG_NAME_TOO_LONG.contains(&NAME_MAX_CHARS.to_string()));
    }

    #[test]
    fn range_message_names_both_bounds() {
        let msg = out_of_range_message();
        assert!(msg.contains("-2147483648"));
        assert!(msg.contains("2147483647"));
    }
}
