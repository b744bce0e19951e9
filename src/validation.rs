use serde_json::{Map, Value};

use crate::error::{FieldError, ValidationError};
use crate::request::MatchData;

pub const REQUIRED_FIELDS: [&str; 2] = ["gameId", "gameState"];

/// Decodes a raw request body into `MatchData`, collecting every shape violation.
pub fn parse_match_data(body: &[u8]) -> Result<MatchData, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError {
            errors: vec![FieldError::new(&["body"], "Field required", "missing")],
        });
    }
    let value: Value = serde_json::from_slice(body).map_err(|err| ValidationError {
        errors: vec![FieldError::new(&["body"], format!("JSON decode error: {}", err), "json_invalid")],
    })?;
    let object = match value {
        Value::Object(object) => object,
        _ => {
            return Err(ValidationError {
                errors: vec![FieldError::new(&["body"], "Input should be a valid dictionary", "dict_type")],
            })
        }
    };
    let errors = validate_match_fields(&object);
    if !errors.is_empty() {
        return Err(ValidationError { errors });
    }
    // unreachable once the field checks pass; kept so a new field on MatchData fails as a 422
    serde_json::from_value(Value::Object(object)).map_err(|err| ValidationError {
        errors: vec![FieldError::new(&["body"], err.to_string(), "value_error")],
    })
}

pub fn validate_match_fields(object: &Map<String, Value>) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for field in REQUIRED_FIELDS {
        match object.get(field) {
            None => errors.push(FieldError::new(&["body", field], "Field required", "missing")),
            Some(value) => {
                if let Some(err) = validate_field_type(field, value) {
                    errors.push(err);
                }
            }
        }
    }
    errors
}

fn validate_field_type(field: &str, value: &Value) -> Option<FieldError> {
    match field {
        "gameId" if !value.is_string() => {
            Some(FieldError::new(&["body", field], "Input should be a valid string", "string_type"))
        }
        "gameState" if !value.is_object() => {
            Some(FieldError::new(&["body", field], "Input should be a valid dictionary", "dict_type"))
        }
        _ => None,
    }
}
