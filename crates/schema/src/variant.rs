use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Decomposition, OpenTriplets, OutputSchema, StrictTriplets, ValidationError};

/// Which response shape to request and parse, chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVariant {
    OpenTriplets,
    Decomposition,
    #[default]
    StrictTriplets,
}

impl SchemaVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaVariant::OpenTriplets => OpenTriplets::NAME,
            SchemaVariant::Decomposition => Decomposition::NAME,
            SchemaVariant::StrictTriplets => StrictTriplets::NAME,
        }
    }

    pub fn format_instructions(self) -> String {
        match self {
            SchemaVariant::OpenTriplets => OpenTriplets::format_instructions(),
            SchemaVariant::Decomposition => Decomposition::format_instructions(),
            SchemaVariant::StrictTriplets => StrictTriplets::format_instructions(),
        }
    }

    pub fn parse(self, raw: &str) -> Result<Extraction, ValidationError> {
        Ok(match self {
            SchemaVariant::OpenTriplets => Extraction::OpenTriplets(OpenTriplets::parse(raw)?),
            SchemaVariant::Decomposition => Extraction::Decomposition(Decomposition::parse(raw)?),
            SchemaVariant::StrictTriplets => {
                Extraction::StrictTriplets(StrictTriplets::parse(raw)?)
            }
        })
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed response of any variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Extraction {
    OpenTriplets(OpenTriplets),
    Decomposition(Decomposition),
    StrictTriplets(StrictTriplets),
}

impl Extraction {
    pub fn variant(&self) -> SchemaVariant {
        match self {
            Extraction::OpenTriplets(_) => SchemaVariant::OpenTriplets,
            Extraction::Decomposition(_) => SchemaVariant::Decomposition,
            Extraction::StrictTriplets(_) => SchemaVariant::StrictTriplets,
        }
    }

    /// Number of independent records: triplets, or entities + relations + patterns.
    pub fn record_count(&self) -> usize {
        match self {
            Extraction::OpenTriplets(schema) => schema.triplets.len(),
            Extraction::Decomposition(schema) => {
                schema.entities.len() + schema.relations.len() + schema.patterns.len()
            }
            Extraction::StrictTriplets(schema) => schema.triplets.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOLE_FROM: &str = r#"{"triplets": [{"entity1": {"name": "John Doe"}, "relation": {"name": "stole_from"}, "entity2": {"name": "Jane Doe"}}]}"#;

    #[test]
    fn test_variant_decides_strictness() {
        let open = SchemaVariant::OpenTriplets.parse(STOLE_FROM).unwrap();
        assert_eq!(open.variant(), SchemaVariant::OpenTriplets);
        assert_eq!(open.record_count(), 1);

        assert!(SchemaVariant::StrictTriplets.parse(STOLE_FROM).is_err());
    }

    #[test]
    fn test_triplets_do_not_satisfy_decomposition() {
        let err = SchemaVariant::Decomposition.parse(STOLE_FROM).unwrap_err();
        assert_eq!(err.violations().len(), 3);
    }

    #[test]
    fn test_variant_serde_names() {
        let variant: SchemaVariant = serde_json::from_str("\"decomposition\"").unwrap();
        assert_eq!(variant, SchemaVariant::Decomposition);
        assert_eq!(SchemaVariant::default(), SchemaVariant::StrictTriplets);
        assert_eq!(SchemaVariant::OpenTriplets.to_string(), "open_triplets");
    }

    #[test]
    fn test_instructions_differ_per_variant() {
        let strict = SchemaVariant::StrictTriplets.format_instructions();
        let decomposition = SchemaVariant::Decomposition.format_instructions();
        assert!(strict.contains("\"enum\""));
        assert!(decomposition.contains("\"patterns\""));
        assert!(!strict.contains("\"patterns\""));
    }
}
