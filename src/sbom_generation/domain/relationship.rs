/// SPDX relationship predicate
///
/// DESCRIBES and DEPENDS_ON are the predicates this tool emits itself;
/// Other carries predicates read verbatim from imported manifests
/// (CONTAINS, GENERATED_FROM, ...) without interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationshipType {
    Describes,
    DependsOn,
    Other(String),
}

impl RelationshipType {
    pub fn as_str(&self) -> &str {
        match self {
            RelationshipType::Describes => "DESCRIBES",
            RelationshipType::DependsOn => "DEPENDS_ON",
            RelationshipType::Other(s) => s,
        }
    }

    /// Maps the SPDX spelling back to a predicate
    pub fn from_spdx(s: &str) -> Self {
        match s {
            "DESCRIBES" => RelationshipType::Describes,
            "DEPENDS_ON" => RelationshipType::DependsOn,
            other => RelationshipType::Other(other.to_string()),
        }
    }
}

/// Relationship entity - a (subject, predicate, object) triple between
/// SPDX element identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub spdx_element_id: String,
    pub relationship_type: RelationshipType,
    pub related_spdx_element: String,
}

impl Relationship {
    pub fn new(
        spdx_element_id: impl Into<String>,
        relationship_type: RelationshipType,
        related_spdx_element: impl Into<String>,
    ) -> Self {
        Self {
            spdx_element_id: spdx_element_id.into(),
            relationship_type,
            related_spdx_element: related_spdx_element.into(),
        }
    }

    pub fn describes(subject: impl Into<String>, object: impl Into<String>) -> Self {
        Self::new(subject, RelationshipType::Describes, object)
    }

    pub fn depends_on(subject: impl Into<String>, object: impl Into<String>) -> Self {
        Self::new(subject, RelationshipType::DependsOn, object)
    }
}
