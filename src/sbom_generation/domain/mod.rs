//! Domain layer - pure value objects with no infrastructure dependencies

pub mod dependency_record;
pub mod document;
pub mod imported;
pub mod package;
pub mod relationship;
pub mod sbom_metadata;

pub use dependency_record::DependencyRecord;
pub use document::{SbomDocument, DOCUMENT_SPDX_ID};
pub use imported::ImportedSbom;
pub use package::{PackageKey, PackageType, SpdxPackage, NO_ASSERTION};
pub use relationship::{Relationship, RelationshipType};
pub use sbom_metadata::SbomMetadata;
