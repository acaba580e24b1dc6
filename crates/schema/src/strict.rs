//! Flat triplet list whose relation names are restricted to [`RelationKind`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::{self, FieldViolation, Validate};
use crate::vocabulary::RelationKind;
use crate::OutputSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Entity {
    #[schemars(
        description = "The name of the entity, representing various aspects or participants in the cultural heritage and art crime domain. Use the full formal name of organizations and the Forename Surname of persons.",
        example = "crate::vocabulary::entity_guidance"
    )]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Relation {
    pub name: RelationKind,
}

/// Entity-relation-entity structure in natural subject-verb-object order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Triplet {
    #[schemars(description = "The first entity in the triplet.")]
    pub entity1: Entity,
    #[schemars(
        description = "Defines the type of relationship that connects the head entity to the tail entity."
    )]
    pub relation: Relation,
    #[schemars(description = "The second entity in the triplet.")]
    pub entity2: Entity,
}

/// Cultural heritage triplets using only the permitted relation vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct StrictTriplets {
    #[schemars(
        description = "A list of triplets, where each triplet consists of two entities and the relation between them. Triplets capture the structured relationships within the cultural heritage domain."
    )]
    pub triplets: Vec<Triplet>,
}

impl Triplet {
    pub fn new(entity1: &str, relation: RelationKind, entity2: &str) -> Self {
        Self {
            entity1: Entity { name: entity1.to_string() },
            relation: Relation { name: relation },
            entity2: Entity { name: entity2.to_string() },
        }
    }
}

impl StrictTriplets {
    /// Triplets carrying the given relation.
    pub fn with_relation(&self, kind: RelationKind) -> impl Iterator<Item = &Triplet> {
        self.triplets
            .iter()
            .filter(move |triplet| triplet.relation.name == kind)
    }
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
            validate::field::<RelationKind>(fields, "name", path, violations);
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

impl Validate for StrictTriplets {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
        if let Some(fields) = validate::object(value, path, violations) {
            validate::field::<Vec<Triplet>>(fields, "triplets", path, violations);
        }
    }
}

impl OutputSchema for StrictTriplets {
    const NAME: &'static str = "strict_triplets";
}
