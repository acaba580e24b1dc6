//! Flat triplet list with free-text relation names.
//!
//! The relation vocabulary is only given to the model as guidance; any string
//! is accepted at parse time.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::{self, FieldViolation, Validate};
use crate::OutputSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Entity {
    #[schemars(
        description = "The name of the entity, representing various aspects or participants in the cultural heritage and art crime domain.",
        example = "crate::vocabulary::entity_guidance"
    )]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Relation {
    #[schemars(
        description = "The specific name of the ONLY relationship that can exist between entities in the domain. THESE ARE THE ONLY RELATIONSHIPS THAT MAY BE RETURNED:",
        example = "crate::vocabulary::relation_guidance"
    )]
    pub name: String,
}

/// Entity-relation-entity structure in natural subject-verb-object order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Triplet {
    #[schemars(description = "The first entity in the triplet.")]
    pub entity1: Entity,
    #[schemars(
        description = "Defines the type of relationship that connects the head entity to the tail entity. This field identifies the interaction or connection between entities, such as works_with, has_immediate_family_member, is_the_owner_of, has_possession_of, comes_from, sells, purchases, buys_from, legal_status_change, has_role"
    )]
    pub relation: Relation,
    #[schemars(description = "The second entity in the triplet.")]
    pub entity2: Entity,
}

/// Cultural heritage triplets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct OpenTriplets {
    #[schemars(
        description = "A list of triplets, where each triplet consists of two entities and the relation between them. Triplets capture the structured relationships within the cultural heritage domain."
    )]
    pub triplets: Vec<Triplet>,
}

impl Validate for Entity {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
        if let Some(fields) = validate::object(value, path, violations) {
            validate::field::<String>(fields, "name", path, violations);
        }
    }
}

impl Validate for Relation {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
        if let Some(fields) = validate::object(value, path, violations) {
            validate::field::<String>(fields, "name", path, violations);
        }
    }
}

impl Validate for Triplet {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
        if let Some(fields) = validate::object(value, path, violations) {
            validate::field::<Entity>(fields, "entity1", path, violations);
            validate::field::<Relation>(fields, "relation", path, violations);
            validate::field::<Entity>(fields, "entity2", path, violations);
        }
    }
}

impl Validate for OpenTriplets {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
        if let Some(fields) = validate::object(value, path, violations) {
            validate::field::<Vec<Triplet>>(fields, "triplets", path, violations);
        }
    }
}

impl OutputSchema for OpenTriplets {
    const NAME: &'static str = "open_triplets";
}

impl Triplet {
    pub fn new(entity1: &str, relation: &str, entity2: &str) -> Self {
        Self {
            entity1: Entity { name: entity1.to_string() },
            relation: Relation { name: relation.to_string() },
            entity2: Entity { name: entity2.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    #[test]
    fn test_any_relation_name_accepted() {
        let raw = r#"{"triplets": [
            {"entity1": {"name": "John Doe"}, "relation": {"name": "stole_from"}, "entity2": {"name": "Jane Doe"}},
            {"entity1": {"name": "John Doe"}, "relation": {"name": "buys_from"}, "entity2": {"name": "Jane Doe"}}
        ]}"#;

        let parsed = OpenTriplets::parse(raw).unwrap();
        assert_eq!(parsed.triplets.len(), 2);
        assert_eq!(parsed.triplets[0], Triplet::new("John Doe", "stole_from", "Jane Doe"));
    }

    #[test]
    fn test_missing_entity_reported_with_path() {
        let raw = r#"{"triplets": [{"entity1": {"name": "John Doe"}, "relation": {"name": "sells"}}]}"#;

        let err = OpenTriplets::parse(raw).unwrap_err();
        assert!(matches!(err, ValidationError::Invalid { schema: "open_triplets", .. }));
        assert_eq!(
            err.violations(),
            &[FieldViolation::new("triplets[0].entity2", "field required")]
        );
    }

    #[test]
    fn test_non_string_name_rejected() {
        let raw = r#"{"triplets": [{"entity1": {"name": 7}, "relation": {"name": "sells"}, "entity2": {"name": "Elgin Vase"}}]}"#;

        let err = OpenTriplets::parse(raw).unwrap_err();
        assert_eq!(err.violations()[0].path, "triplets[0].entity1.name");
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let schema = OpenTriplets {
            triplets: vec![Triplet::new("Jane Doe", "sells", "Elgin Vase")],
        };

        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["triplets"][0]["entity1"]["name"], "Jane Doe");
        assert_eq!(json["triplets"][0]["relation"]["name"], "sells");
        assert_eq!(json["triplets"][0]["entity2"]["name"], "Elgin Vase");
        assert_eq!(OpenTriplets::from_value(json).unwrap(), schema);
    }

    #[test]
    fn test_format_instructions_carry_guidance() {
        let instructions = OpenTriplets::format_instructions();
        assert!(instructions.contains("\"triplets\""));
        assert!(instructions.contains("'is_the_owner_of'"));
        assert!(instructions.contains("Forename Surname"));
    }
}
