//! Parameter decoding and schema-driven coercion for space invocation.
//!
//! Callers send `parameters` as a JSON object *string*. Before forwarding it
//! to a space, values are nudged toward the types the space's first tool
//! declares: numeric and boolean strings are converted, declared defaults fill
//! absent optional properties, and unknown keys pass through with a warning.

use serde_json::{Map, Number, Value};

use crate::SpaceError;

pub type JsonObject = Map<String, Value>;

/// Arguments ready for a remote tool call.
#[derive(Debug, Clone, PartialEq)]
pub struct CoercedParameters {
    pub arguments: JsonObject,
    pub warnings: Vec<String>,
}

/// Decode the raw `parameters` string into a JSON object.
pub fn parse_parameters(raw: &str) -> Result<JsonObject, SpaceError> {
    let value: Value = serde_json::from_str(raw.trim())?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(SpaceError::InvalidParameters(format!(
            "parameters must be a JSON object string, got {}",
            json_kind(&other)
        ))),
    }
}

/// Coerce `arguments` against a JSON Schema object (`properties` / `required`).
pub fn coerce_parameters(
    mut arguments: JsonObject,
    schema: &JsonObject,
) -> Result<CoercedParameters, SpaceError> {
    let empty = JsonObject::new();
    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let required = required_properties(schema);

    let mut warnings = Vec::new();

    for (key, value) in arguments.iter_mut() {
        match properties.get(key) {
            Some(property) => {
                let types = property_types(property);
                if let Some(coerced) = coerce_value(value, &types) {
                    *value = coerced;
                }
            }
            None => warnings.push(format!("Unknown parameter \"{}\" passed through", key)),
        }
    }

    for (key, property) in properties {
        if arguments.contains_key(key) || required.contains(&key.as_str()) {
            continue;
        }
        if let Some(default) = property.get("default") {
            arguments.insert(key.clone(), default.clone());
        }
    }

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|key| !arguments.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(SpaceError::InvalidParameters(format!(
            "missing required parameter(s): {}",
            missing.join(", ")
        )));
    }

    Ok(CoercedParameters {
        arguments,
        warnings,
    })
}

/// Names listed in the schema's `required` array.
pub fn required_properties(schema: &JsonObject) -> Vec<&str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Declared types of a property, looking through `type` arrays and `anyOf`.
/// `null` is dropped since it never drives coercion.
pub fn property_types(property: &Value) -> Vec<&str> {
    let mut types = Vec::new();
    match property.get("type") {
        Some(Value::String(t)) => types.push(t.as_str()),
        Some(Value::Array(items)) => types.extend(items.iter().filter_map(Value::as_str)),
        _ => {}
    }
    if let Some(Value::Array(variants)) = property.get("anyOf") {
        for variant in variants {
            types.extend(property_types(variant));
        }
    }
    types.retain(|t| *t != "null");
    types
}

fn coerce_value(value: &Value, types: &[&str]) -> Option<Value> {
    if types.is_empty() || types.iter().any(|t| matches_type(value, t)) {
        return None;
    }

    for target in types {
        let converted = match (*target, value) {
            ("integer", Value::String(s)) => s.trim().parse::<i64>().ok().map(Value::from),
            ("integer", Value::Number(n)) => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| Value::from(f as i64)),
            ("number", Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number),
            ("boolean", Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            ("string", Value::Number(n)) => Some(Value::String(n.to_string())),
            ("string", Value::Bool(b)) => Some(Value::String(b.to_string())),
            ("array", Value::String(s)) => match serde_json::from_str::<Value>(s) {
                Ok(parsed @ Value::Array(_)) => Some(parsed),
                _ => None,
            },
            ("object", Value::String(s)) => match serde_json::from_str::<Value>(s) {
                Ok(parsed @ Value::Object(_)) => Some(parsed),
                _ => None,
            },
            _ => None,
        };
        if converted.is_some() {
            return converted;
        }
    }
    None
}

fn matches_type(value: &Value, declared: &str) -> bool {
    match declared {
        "string" => value.is_string(),
        "integer" => value.is_i64() || value.is_u64(),
        "number" => value.is_number(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "null" => value.is_null(),
        _ => true,
    }
}

/// Short description of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
