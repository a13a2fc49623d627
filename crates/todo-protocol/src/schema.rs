//! JSON Schema helpers for MCP tool input.

use serde_json::Value;
use thiserror::Error;

use todo_types::ToolArgument;

/// Schema validation errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The input does not match the expected schema.
    #[error("schema validation failed: {message}")]
    ValidationFailed { message: String },
    /// The schema itself is malformed.
    #[error("invalid schema: {message}")]
    InvalidSchema { message: String },
}

/// Builds a JSON Schema `inputSchema` from tool arguments.
pub fn build_input_schema(arguments: &[ToolArgument]) -> Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for arg in arguments {
        let mut prop = serde_json::Map::new();
        prop.insert("type".to_string(), Value::String(arg.arg_type.clone()));
        prop.insert(
            "description".to_string(),
            Value::String(arg.description.clone()),
        );
        properties.insert(arg.name.clone(), Value::Object(prop));
        if arg.required {
            required.push(Value::String(arg.name.clone()));
        }
    }

    let mut schema = serde_json::Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }

    Value::Object(schema)
}

/// Checks that a JSON value contains the required properties of a schema.
///
/// Only presence is checked; types are left to deserialization.
pub fn validate_required_fields(schema: &Value, input: &Value) -> Result<(), SchemaError> {
    let required = match schema.get("required") {
        Some(Value::Array(arr)) => arr,
        _ => return Ok(()),
    };

    let input_obj = input
        .as_object()
        .ok_or_else(|| SchemaError::ValidationFailed {
            message: "input must be an object".to_string(),
        })?;

    for field in required {
        let field_name = field.as_str().ok_or_else(|| SchemaError::InvalidSchema {
            message: "required field names must be strings".to_string(),
        })?;
        if !input_obj.contains_key(field_name) {
            return Err(SchemaError::ValidationFailed {
                message: format!("missing required field: {field_name}"),
            });
        }
    }

    Ok(())
}
