use std::collections::BTreeMap;

use super::package::{PackageKey, SpdxPackage};
use super::relationship::Relationship;
use super::sbom_metadata::SbomMetadata;

/// SPDX identifier of the document root element
pub const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";

/// SbomDocument aggregate - the complete bill of materials
///
/// Owns the full package set keyed by (name, version) and the relationship
/// list. Invariant: every relationship endpoint resolves either to a package
/// identifier present in the package set or to the document root identifier;
/// the assembler enforces this when folding in imported relationships.
#[derive(Debug, Clone)]
pub struct SbomDocument {
    name: String,
    packages: BTreeMap<PackageKey, SpdxPackage>,
    relationships: Vec<Relationship>,
    metadata: SbomMetadata,
}

impl SbomDocument {
    pub fn new(name: impl Into<String>, metadata: SbomMetadata) -> Self {
        Self {
            name: name.into(),
            packages: BTreeMap::new(),
            relationships: Vec::new(),
            metadata,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metadata(&self) -> &SbomMetadata {
        &self.metadata
    }

    pub fn packages(&self) -> impl Iterator<Item = &SpdxPackage> {
        self.packages.values()
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Inserts a package, replacing any existing entry with the same
    /// (name, version) key.
    pub fn insert_package(&mut self, package: SpdxPackage) {
        self.packages.insert(package.key(), package);
    }

    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    /// True when the identifier resolves within this document - either the
    /// document root or one of the owned packages.
    pub fn resolves(&self, spdx_id: &str) -> bool {
        spdx_id == DOCUMENT_SPDX_ID || self.resolves_package(spdx_id)
    }

    /// True when the identifier resolves to one of the owned packages.
    /// The document root does not count: an imported manifest's
    /// SPDXRef-DOCUMENT names that manifest's root, not this document's.
    pub fn resolves_package(&self, spdx_id: &str) -> bool {
        self.packages.values().any(|p| p.spdx_id == spdx_id)
    }
}
