use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use schemars::schema::{InstanceType, Metadata, Schema, SchemaObject};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Closed set of relation labels accepted by the strict schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    IsTheOwnerOf,
    WorksWith,
    WorksFor,
    HasPossessionOf,
    Purchases,
    BuysFrom,
    Sells,
    DonatesTo,
    ObtainsFrom,
    ComesFrom,
    HasImmediateFamilyMember,
    LegalStatusChange,
    HasRole,
}

impl RelationKind {
    pub const ALL: [RelationKind; 13] = [
        RelationKind::IsTheOwnerOf,
        RelationKind::WorksWith,
        RelationKind::WorksFor,
        RelationKind::HasPossessionOf,
        RelationKind::Purchases,
        RelationKind::BuysFrom,
        RelationKind::Sells,
        RelationKind::DonatesTo,
        RelationKind::ObtainsFrom,
        RelationKind::ComesFrom,
        RelationKind::HasImmediateFamilyMember,
        RelationKind::LegalStatusChange,
        RelationKind::HasRole,
    ];

    /// Wire label, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::IsTheOwnerOf => "is_the_owner_of",
            RelationKind::WorksWith => "works_with",
            RelationKind::WorksFor => "works_for",
            RelationKind::HasPossessionOf => "has_possession_of",
            RelationKind::Purchases => "purchases",
            RelationKind::BuysFrom => "buys_from",
            RelationKind::Sells => "sells",
            RelationKind::DonatesTo => "donates_to",
            RelationKind::ObtainsFrom => "obtains_from",
            RelationKind::ComesFrom => "comes_from",
            RelationKind::HasImmediateFamilyMember => "has_immediate_family_member",
            RelationKind::LegalStatusChange => "legal_status_change",
            RelationKind::HasRole => "has_role",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RelationKind::IsTheOwnerOf => {
                "Denotes a business relationship where an ACTOR controls, or is the legal owner of, a business, gallery, auction house, or other for-profit organization."
            }
            RelationKind::WorksWith => {
                "Denotes a business relationship between ACTORS who are dealers, organizations, looters, or collectors."
            }
            RelationKind::WorksFor => {
                "Describes an employment or contractual relationship between ACTORS who are dealers, organizations, businesses, museums, government agencies, looters, or collectors."
            }
            RelationKind::HasPossessionOf => {
                "Describes a situation where a dealer, organization, collector, or auction house controls an artefact whether through ownership or other means."
            }
            RelationKind::Purchases => {
                "Describes a situation where a dealer, organization, collector, or auction house buys AN ARTEFACT, e.g. John Smith purchases the Elgin Vase."
            }
            RelationKind::BuysFrom => {
                "Describes a situation where a dealer, organization, collector, or auction house buys an artefact from a NAMED ACTOR, e.g. John Smith bought from Jane Doe the Elgin Vase."
            }
            RelationKind::Sells => {
                "Describes a situation where a dealer, organization, collector, or auction house sells AN ARTEFACT, e.g. Jane Doe sells the Elgin Vase."
            }
            RelationKind::DonatesTo => {
                "Describes a situation where a dealer, organization, collector, or auction house donates an artefact to another entity."
            }
            RelationKind::ObtainsFrom => {
                "Describes a situation where a dealer, organization, collector, or auction house obtains an artefact from another entity UNDER UNCLEAR CIRCUMSTANCES."
            }
            RelationKind::ComesFrom => {
                "Describes a situation where the provenance of an artefact is attributed, e.g. a 5th century black-figure vase comes from classical Greece."
            }
            RelationKind::HasImmediateFamilyMember => {
                "Describes a direct familial relationship between two individuals, by blood (parent, child, sibling) or by legal commitment such as marriage (spouse). Excludes more distant blood relationships and informal relationships like common-law partnerships UNLESS that relationship is explicitly mentioned."
            }
            RelationKind::LegalStatusChange => {
                "Describes when an organization, business, or person has come to the attention of law enforcement, e.g. a person is charged with theft, an organization is sanctioned, an arrest warrant is issued."
            }
            RelationKind::HasRole => {
                "Describes the role or roles an actor or organization can have, such as SCHOLAR, DEALER, COLLECTOR, LOOTER, or OFFICER."
            }
        }
    }

    /// Comma separated list of every label, used in validation messages.
    pub fn labels() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Enum values and their explanations both come from `ALL` / `description()`.
impl JsonSchema for RelationKind {
    fn schema_name() -> String {
        "RelationKind".to_string()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        let labels = Self::ALL
            .iter()
            .map(|kind| Value::String(kind.as_str().to_string()))
            .collect();

        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            enum_values: Some(labels),
            metadata: Some(Box::new(Metadata {
                description: Some(format!(
                    "THESE ARE THE ONLY RELATIONSHIPS THAT MAY BE RETURNED:\n{}",
                    relation_guidance()
                )),
                ..Default::default()
            })),
            ..Default::default()
        }
        .into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown relation `{0}`")]
pub struct UnknownRelation(pub String);

impl FromStr for RelationKind {
    type Err = UnknownRelation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownRelation(s.to_string()))
    }
}

/// Documented entity classifications. Entity types are never enforced;
/// this vocabulary only feeds the guidance text shown to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Actor,
    Collection,
    Policy,
    Place,
    Artefact,
    Organization,
    Museum,
    GovernmentAgency,
    Business,
    AuctionHouse,
    CultureGroup,
    Scholar,
    Dealer,
    Collector,
    Looter,
    Officer,
}

impl EntityKind {
    pub const ALL: [EntityKind; 16] = [
        EntityKind::Actor,
        EntityKind::Collection,
        EntityKind::Policy,
        EntityKind::Place,
        EntityKind::Artefact,
        EntityKind::Organization,
        EntityKind::Museum,
        EntityKind::GovernmentAgency,
        EntityKind::Business,
        EntityKind::AuctionHouse,
        EntityKind::CultureGroup,
        EntityKind::Scholar,
        EntityKind::Dealer,
        EntityKind::Collector,
        EntityKind::Looter,
        EntityKind::Officer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Actor => "actor",
            EntityKind::Collection => "collection",
            EntityKind::Policy => "policy",
            EntityKind::Place => "place",
            EntityKind::Artefact => "artefact",
            EntityKind::Organization => "organization",
            EntityKind::Museum => "museum",
            EntityKind::GovernmentAgency => "government_agency",
            EntityKind::Business => "business",
            EntityKind::AuctionHouse => "auction_house",
            EntityKind::CultureGroup => "culture_group",
            EntityKind::Scholar => "scholar",
            EntityKind::Dealer => "dealer",
            EntityKind::Collector => "collector",
            EntityKind::Looter => "looter",
            EntityKind::Officer => "officer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EntityKind::Actor => {
                "A PERSON who plays a role in the cultural heritage or art crime domain. Actors ARE ALWAYS referred to by their Forename Surname, e.g. 'Doe' becomes 'John Doe'. ALL PERSONS ARE ACTORS FIRST AND FOREMOST."
            }
            EntityKind::Collection => {
                "A named collection of antiquities. Collections ARE ALWAYS referred to by their formal name."
            }
            EntityKind::Policy => {
                "A government or organizational scheme to set a framework around aspects of the art or cultural heritage domain."
            }
            EntityKind::Place => {
                "A geographic locale where an event occurs, an object comes from, or an organization is located."
            }
            EntityKind::Artefact => {
                "Objects and artworks that come from a particular culture and are bought, sold, donated, stolen, looted, or traded by dealers, museums, agencies, and other organizations."
            }
            EntityKind::Organization => {
                "Non-profits and other associations. Organizations ARE ALWAYS referred to with their full formal name, e.g. 'RCMP' becomes 'Royal Canadian Mounted Police'."
            }
            EntityKind::Museum => {
                "Institutions for the preservation, curation, and display of objects. Museums ARE ALWAYS referred to with their full formal name, e.g. 'the MET' becomes 'The Metropolitan Museum of Art'."
            }
            EntityKind::GovernmentAgency => {
                "Government agencies ARE ALWAYS referred to with their full formal name, e.g. 'IRS' becomes 'Internal Revenue Service'."
            }
            EntityKind::Business => {
                "Enterprises for making money that are not auction houses or galleries. Businesses ARE ALWAYS referred to with their full formal name."
            }
            EntityKind::AuctionHouse => {
                "An organization or gallery that facilitates the sale of artefacts between dealers, between collectors, and between dealers, collectors, and museums. Referred to with their full formal name."
            }
            EntityKind::CultureGroup => {
                "The people or cultural group to whom an artefact may be attributed, e.g. a 5th century kantharos comes from CLASSICAL GREECE."
            }
            EntityKind::Scholar => {
                "A role subordinate to ACTOR, describing a PERSON who conducts academic or field research related to cultural heritage."
            }
            EntityKind::Dealer => {
                "A role subordinate to ACTOR or ORGANIZATION, describing a PERSON or ENTITY involved in the buying and selling of artefacts."
            }
            EntityKind::Collector => {
                "A role subordinate to ACTOR or ORGANIZATION, describing a PERSON or ENTITY that acquires artefacts for personal or institutional collections."
            }
            EntityKind::Looter => {
                "A role subordinate to ACTOR, describing a PERSON who illegally excavates or steals cultural heritage artefacts."
            }
            EntityKind::Officer => {
                "A role subordinate to ACTOR, describing a PERSON who enforces laws or regulations related to cultural heritage, such as police officers or customs agents, or holds a managerial role in a museum."
            }
        }
    }

    /// Lenient lookup: case-insensitive, spaces and hyphens treated as underscores.
    pub fn parse(label: &str) -> Option<EntityKind> {
        let normalized = label.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `'label' description` line per entity kind.
pub fn entity_guidance() -> String {
    EntityKind::ALL
        .iter()
        .map(|kind| format!("'{}' {}", kind.as_str(), kind.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `'label' description` line per relation kind.
pub fn relation_guidance() -> String {
    RelationKind::ALL
        .iter()
        .map(|kind| format!("'{}' {}", kind.as_str(), kind.description()))
        .collect::<Vec<_>>()
        .join("\n")
}
