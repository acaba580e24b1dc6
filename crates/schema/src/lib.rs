pub mod decomposition;
pub mod error;
pub mod instructions;
pub mod open;
pub mod strict;
pub mod validate;
pub mod variant;
pub mod vocabulary;

pub use decomposition::Decomposition;
pub use error::ValidationError;
pub use open::OpenTriplets;
pub use strict::StrictTriplets;
pub use validate::{FieldViolation, Validate};
pub use variant::{Extraction, SchemaVariant};
pub use vocabulary::{EntityKind, RelationKind};

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A response shape the model is asked to produce.
///
/// The JSON Schema, the format instructions embedded in prompts and the
/// validation performed on responses all derive from the same type.
pub trait OutputSchema: JsonSchema + Serialize + DeserializeOwned + Validate {
    /// Short identifier used in errors and logs.
    const NAME: &'static str;

    fn output_schema() -> Value {
        instructions::schema_value::<Self>()
    }

    fn format_instructions() -> String {
        instructions::format_instructions(&Self::output_schema())
    }

    /// Parse raw model output, tolerating a surrounding markdown code fence.
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(instructions::strip_code_fence(raw))?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();
        Self::validate(&value, "", &mut violations);
        if !violations.is_empty() {
            return Err(ValidationError::Invalid {
                schema: Self::NAME,
                violations,
            });
        }

        serde_json::from_value(value).map_err(|e| ValidationError::Invalid {
            schema: Self::NAME,
            violations: vec![FieldViolation::new("", e.to_string())],
        })
    }
}
