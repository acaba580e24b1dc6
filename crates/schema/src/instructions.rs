use schemars::JsonSchema;
use serde_json::Value;

const PREAMBLE: &str = r#"The output should be formatted as a JSON instance that conforms to the JSON schema below.

For example, given the schema {"properties": {"names": {"description": "a list of names", "type": "array", "items": {"type": "string"}}}, "required": ["names"]}
the object {"names": ["John Doe", "Jane Doe"]} is a well-formatted instance of the schema, while the object {"properties": {"names": ["John Doe", "Jane Doe"]}} is not.

Here is the output schema:"#;

/// JSON Schema for `S`, without the `$schema` and `title` keys that only
/// add noise to a prompt.
pub fn schema_value<S: JsonSchema>() -> Value {
    let root = schemars::schema_for!(S);
    let mut value = serde_json::to_value(root).unwrap_or_default();

    if let Value::Object(map) = &mut value {
        map.remove("$schema");
        map.remove("title");
    }

    value
}

/// Human-readable instructions embedding `schema`, ready for a
/// `{format_instructions}` placeholder.
pub fn format_instructions(schema: &Value) -> String {
    format!("{PREAMBLE}\n```\n{schema}\n```")
}

/// Strips a surrounding markdown code fence (```json ... ```) if present.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Skip the info string on the opening line, e.g. "json".
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };

    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("  {\"a\": 1}  "), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```\n{\"a\": 1}\n```\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_format_instructions_embed_schema() {
        let schema = serde_json::json!({"type": "object"});
        let text = format_instructions(&schema);
        assert!(text.starts_with("The output should be formatted as a JSON instance"));
        assert!(text.ends_with("```\n{\"type\":\"object\"}\n```"));
    }
}
