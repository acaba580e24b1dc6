use serde_json::{Map, Value};
use std::fmt;

use crate::vocabulary::RelationKind;

/// A single field that did not match the declared shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// JSON path of the offending value, e.g. `triplets[0].relation.name`.
    /// Empty for the document root.
    pub path: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "<root>: {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Structural check of a raw JSON value against a declared type.
///
/// Implementations record every violation rather than stopping at the first.
pub trait Validate {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>);

    /// Called when the field holding this type is absent from its object.
    fn validate_missing(path: &str, violations: &mut Vec<FieldViolation>) {
        violations.push(FieldViolation::new(path, "field required"));
    }
}

impl Validate for String {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
        if !value.is_string() {
            violations.push(FieldViolation::new(
                path,
                format!("expected a string, found {}", kind_of(value)),
            ));
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
        match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    T::validate(item, &format!("{path}[{i}]"), violations);
                }
            }
            None => violations.push(FieldViolation::new(
                path,
                format!("expected an array, found {}", kind_of(value)),
            )),
        }
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
        if !value.is_null() {
            T::validate(value, path, violations);
        }
    }

    fn validate_missing(_path: &str, _violations: &mut Vec<FieldViolation>) {}
}

impl Validate for RelationKind {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
        match value.as_str() {
            Some(label) if label.parse::<RelationKind>().is_ok() => {}
            Some(label) => violations.push(FieldViolation::new(
                path,
                format!(
                    "`{label}` is not a permitted relation; expected one of: {}",
                    RelationKind::labels()
                ),
            )),
            None => violations.push(FieldViolation::new(
                path,
                format!("expected a relation label string, found {}", kind_of(value)),
            )),
        }
    }
}

/// Returns the object at `path`, or records a violation if `value` is not one.
pub(crate) fn object<'a>(
    value: &'a Value,
    path: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a Map<String, Value>> {
    let object = value.as_object();
    if object.is_none() {
        violations.push(FieldViolation::new(
            path,
            format!("expected an object, found {}", kind_of(value)),
        ));
    }
    object
}

/// Validates `object[name]` as a `T`. Unknown keys are ignored.
pub(crate) fn field<T: Validate>(
    object: &Map<String, Value>,
    name: &str,
    path: &str,
    violations: &mut Vec<FieldViolation>,
) {
    let field_path = if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    };

    match object.get(name) {
        Some(value) => T::validate(value, &field_path, violations),
        None => T::validate_missing(&field_path, violations),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
