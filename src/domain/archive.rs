//! Key/value encoding of a [`Meal`].
//!
//! A meal is archived as an ordered JSON object with the keys
//! [`NAME_KEY`] and [`CREATION_TIME_KEY`]. Decoding fails fast when the name is
//! missing or not text; the creation time is read leniently.

use serde_json::{Map, Value};
use thiserror::Error;

use super::meal::{Meal, MealError};

pub const NAME_KEY: &str = "name";
pub const CREATION_TIME_KEY: &str = "creation time";

/// Reasons an archived entry could not be turned back into a [`Meal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("archived meal is a {found}, expected an object")]
    NotAnObject { found: &'static str },
    #[error("archived meal has no `name`")]
    MissingName,
    #[error("archived meal `name` is a {found}, expected a string")]
    NameNotText { found: &'static str },
    #[error("archived meal is invalid: {0}")]
    InvalidMeal(#[from] MealError),
}

/// Encodes a meal as `{"name": .., "creation time": ..}`, in that order.
pub fn encode(meal: &Meal) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(NAME_KEY.to_string(), Value::String(meal.name().to_string()));
    map.insert(
        CREATION_TIME_KEY.to_string(),
        Value::String(meal.creation_time().to_string()),
    );
    map
}

/// Decodes an archived meal.
///
/// A missing or non-string creation time decodes as empty text.
pub fn decode(map: &Map<String, Value>) -> Result<Meal, DecodeError> {
    let name = match map.get(NAME_KEY) {
        None => {
            tracing::debug!("Unable to decode the name for a meal entry.");
            return Err(DecodeError::MissingName);
        }
        Some(Value::String(name)) => name.clone(),
        Some(other) => {
            tracing::debug!(found = type_name(other), "Meal name is not text.");
            return Err(DecodeError::NameNotText {
                found: type_name(other),
            });
        }
    };

    let creation_time = match map.get(CREATION_TIME_KEY) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => {
            tracing::debug!(
                meal = %name,
                found = type_name(other),
                "Creation time is not text; using empty text."
            );
            String::new()
        }
        None => {
            tracing::debug!(meal = %name, "Creation time missing; using empty text.");
            String::new()
        }
    };

    Ok(Meal::new(name, creation_time)?)
}

/// Decodes an arbitrary JSON value, rejecting anything that is not an object.
pub fn decode_value(value: &Value) -> Result<Meal, DecodeError> {
    match value {
        Value::Object(map) => decode(map),
        other => Err(DecodeError::NotAnObject {
            found: type_name(other),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
