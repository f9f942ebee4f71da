//! Mapping between stored sprites and their JSON wire shape.
//!
//! Output always uses camelCase position fields:
//!
//! ```text
//! { "id": 7, "name": "Hero", "xPos": 3, "yPos": 4 }
//! ```
//!
//! Input accepts `xPos`/`yPos` and, for older clients, `x_pos`/`y_pos`.
//! When both spellings are present the camelCase one is used. Keys that do
//! not name a writable field (including `id`) are ignored.

use serde::Serialize;
use serde_json::{Map, Value};
use tabletop_core::error::CoreError;
use tabletop_core::sprite::{
    out_of_range_message, DEFAULT_NAME, MSG_NOT_INTEGER, MSG_NOT_NULL, MSG_NOT_STRING,
    MSG_REQUIRED,
};
use tabletop_core::types::DbId;
use tabletop_core::validation::validate_input;
use tabletop_db::models::sprite::{CreateSprite, Sprite, UpdateSprite};

/// Wire representation of a sprite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpriteResource {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "xPos")]
    pub x_pos: i32,
    #[serde(rename = "yPos")]
    pub y_pos: i32,
}

/// Encode a stored sprite for the wire.
pub fn encode(sprite: Sprite) -> SpriteResource {
    SpriteResource {
        id: sprite.id,
        name: sprite.name,
        x_pos: sprite.x_pos,
        y_pos: sprite.y_pos,
    }
}

/// Decode a create or replace body. Positions are required, `name` defaults
/// to the empty string.
pub fn decode_full(body: &Value) -> Result<CreateSprite, CoreError> {
    let object = as_object(body)?;

    let input = CreateSprite {
        name: read_name(object)?.unwrap_or_else(|| DEFAULT_NAME.to_string()),
        x_pos: read_position(object, "xPos", "x_pos")?
            .ok_or_else(|| CoreError::invalid_field("xPos", MSG_REQUIRED))?,
        y_pos: read_position(object, "yPos", "y_pos")?
            .ok_or_else(|| CoreError::invalid_field("yPos", MSG_REQUIRED))?,
    };
    validate_input(&input)?;
    Ok(input)
}

/// Decode a partial-update body. Every field is optional.
pub fn decode_partial(body: &Value) -> Result<UpdateSprite, CoreError> {
    let object = as_object(body)?;

    let input = UpdateSprite {
        name: read_name(object)?,
        x_pos: read_position(object, "xPos", "x_pos")?,
        y_pos: read_position(object, "yPos", "y_pos")?,
    };
    validate_input(&input)?;
    Ok(input)
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, CoreError> {
    body.as_object().ok_or_else(|| {
        CoreError::Validation("Invalid data. Expected a JSON object.".to_string())
    })
}

fn read_name(object: &Map<String, Value>) -> Result<Option<String>, CoreError> {
    match object.get("name") {
        None => Ok(None),
        Some(Value::String(name)) => Ok(Some(name.clone())),
        Some(Value::Null) => Err(CoreError::invalid_field("name", MSG_NOT_NULL)),
        Some(_) => Err(CoreError::invalid_field("name", MSG_NOT_STRING)),
    }
}

/// Read a position under its camelCase key or its snake_case alias.
///
/// Errors name the key the client actually sent.
fn read_position(
    object: &Map<String, Value>,
    key: &'static str,
    alias: &'static str,
) -> Result<Option<i32>, CoreError> {
    let (field, value) = match (object.get(key), object.get(alias)) {
        (Some(value), _) => (key, value),
        (None, Some(value)) => (alias, value),
        (None, None) => return Ok(None),
    };

    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                i32::try_from(int)
                    .map(Some)
                    .map_err(|_| CoreError::invalid_field(field, out_of_range_message()))
            } else if number.is_u64() {
                Err(CoreError::invalid_field(field, out_of_range_message()))
            } else {
                Err(CoreError::invalid_field(field, MSG_NOT_INTEGER))
            }
        }
        Value::Null => Err(CoreError::invalid_field(field, MSG_NOT_NULL)),
        _ => Err(CoreError::invalid_field(field, MSG_NOT_INTEGER)),
    }
}
