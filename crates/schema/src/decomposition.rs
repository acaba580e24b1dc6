//! Entities, relations and patterns as separate lists.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::{self, FieldViolation, Validate};
use crate::vocabulary::EntityKind;
use crate::OutputSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Entity {
    #[schemars(
        description = "The canonical name of the entity: full formal names for organizations, museums and agencies, Forename Surname for persons."
    )]
    pub name: String,
    #[serde(rename = "type")]
    #[schemars(
        description = "The classification of the entity.",
        example = "crate::vocabulary::entity_guidance"
    )]
    pub entity_type: String,
    #[schemars(description = "A short description of the entity as it appears in the text.")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Relation {
    #[schemars(
        description = "The name of a relationship that exists between entities in the domain, preferably one of the documented relations.",
        example = "crate::vocabulary::relation_guidance"
    )]
    pub name: String,
    #[schemars(description = "What this relationship means in the context of the text.")]
    pub description: String,
}

/// A recurring structural configuration rather than a single fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Pattern {
    #[schemars(description = "The entity type at the head of the pattern, e.g. dealer.")]
    pub head: String,
    #[schemars(description = "The relation connecting head to tail, e.g. sells.")]
    pub relation: String,
    #[schemars(description = "The entity type at the tail of the pattern, e.g. museum.")]
    pub tail: String,
    #[schemars(description = "Why this configuration recurs and what it reveals.")]
    pub description: String,
}

/// Cultural heritage entities, relations and patterns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Decomposition {
    #[schemars(description = "Every entity mentioned in the text.")]
    pub entities: Vec<Entity>,
    #[schemars(description = "Every kind of relationship observed between the entities.")]
    pub relations: Vec<Relation>,
    #[schemars(
        description = "Generalized (head type, relation, tail type) patterns describing recurring configurations."
    )]
    pub patterns: Vec<Pattern>,
}

impl Entity {
    /// The documented classification, if `entity_type` names one.
    pub fn kind(&self) -> Option<EntityKind> {
        EntityKind::parse(&self.entity_type)
    }
}

impl Decomposition {
    /// Entities whose type falls outside the documented vocabulary.
    pub fn unclassified_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|entity| entity.kind().is_none())
    }
}

impl Validate for Entity {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
        if let Some(fields) = validate::object(value, path, violations) {
            validate::field::<String>(fields, "name", path, violations);
            validate::field::<String>(fields, "type", path, violations);
            validate::field::<String>(fields, "description", path, violations);
        }
    }
}

impl Validate for Relation {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
        if let Some(fields) = validate::object(value, path, violations) {
            validate::field::<String>(fields, "name", path, violations);
            validate::field::<String>(fields, "description", path, violations);
        }
    }
}

impl Validate for Pattern {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
        if let Some(fields) = validate::object(value, path, violations) {
            validate::field::<String>(fields, "head", path, violations);
            validate::field::<String>(fields, "relation", path, violations);
            validate::field::<String>(fields, "tail", path, violations);
            validate::field::<String>(fields, "description", path, violations);
        }
    }
}

impl Validate for Decomposition {
    fn validate(value: &Value, path: &str, violations: &mut Vec<FieldViolation>) {
        if let Some(fields) = validate::object(value, path, violations) {
            validate::field::<Vec<Entity>>(fields, "entities", path, violations);
            validate::field::<Vec<Relation>>(fields, "relations", path, violations);
            validate::field::<Vec<Pattern>>(fields, "patterns", path, violations);
        }
    }
}

impl OutputSchema for Decomposition {
    const NAME: &'static str = "decomposition";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> &'static str {
        r#"{
            "entities": [
                {"name": "John Doe", "type": "dealer", "description": "A London antiquities dealer."},
                {"name": "The Metropolitan Museum of Art", "type": "Museum", "description": "Bought the vase."},
                {"name": "Elgin Vase", "type": "vessel", "description": "A black-figure amphora."}
            ],
            "relations": [
                {"name": "trafficked_through", "description": "Passed through a freeport."}
            ],
            "patterns": [
                {"head": "dealer", "relation": "sells", "tail": "museum", "description": "Dealers place looted pieces with museums."}
            ]
        }"#
    }

    #[test]
    fn test_open_relation_names_accepted() {
        let parsed = Decomposition::parse(sample()).unwrap();
        assert_eq!(parsed.entities.len(), 3);
        assert_eq!(parsed.relations[0].name, "trafficked_through");
        assert_eq!(parsed.patterns[0].tail, "museum");
    }

    #[test]
    fn test_relation_description_required() {
        let raw = r#"{"entities": [], "relations": [{"name": "sells"}], "patterns": []}"#;

        let err = Decomposition::parse(raw).unwrap_err();
        assert_eq!(
            err.violations(),
            &[FieldViolation::new("relations[0].description", "field required")]
        );
    }

    #[test]
    fn test_missing_lists_reported_together() {
        let err = Decomposition::parse(r#"{"entities": {}}"#).unwrap_err();
        let paths: Vec<_> = err.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["entities", "relations", "patterns"]);
    }

    #[test]
    fn test_entity_kind_lookup() {
        let parsed = Decomposition::parse(sample()).unwrap();
        assert_eq!(parsed.entities[0].kind(), Some(EntityKind::Dealer));
        assert_eq!(parsed.entities[1].kind(), Some(EntityKind::Museum));

        let unclassified: Vec<_> = parsed
            .unclassified_entities()
            .map(|entity| entity.name.as_str())
            .collect();
        assert_eq!(unclassified, vec!["Elgin Vase"]);
    }

    #[test]
    fn test_type_field_renamed_on_the_wire() {
        let entity = Entity {
            name: "Jane Doe".to_string(),
            entity_type: "collector".to_string(),
            description: "A private collector.".to_string(),
        };
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["type"], "collector");
        assert!(json.get("entity_type").is_none());
    }
}
