use std::collections::BTreeMap;

use super::package::{PackageKey, SpdxPackage};
use super::relationship::Relationship;

/// ImportedSbom aggregate - packages and relationships accumulated from
/// externally produced manifests
///
/// Multiple manifest files union into one of these. Packages merge
/// first-occurrence-wins on the (name, version) key; relationships simply
/// accumulate (dangling edges are resolved later, during assembly).
#[derive(Debug, Clone, Default)]
pub struct ImportedSbom {
    packages: BTreeMap<PackageKey, SpdxPackage>,
    relationships: Vec<Relationship>,
}

impl ImportedSbom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn packages(&self) -> impl Iterator<Item = &SpdxPackage> {
        self.packages.values()
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn contains_spdx_id(&self, spdx_id: &str) -> bool {
        self.packages.values().any(|p| p.spdx_id == spdx_id)
    }

    /// Adds a package unless an identically-keyed one already exists.
    /// Returns true when the package was inserted.
    pub fn add_package_if_absent(&mut self, package: SpdxPackage) -> bool {
        use std::collections::btree_map::Entry;
        match self.packages.entry(package.key()) {
            Entry::Vacant(slot) => {
                slot.insert(package);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn extend_relationships(&mut self, relationships: impl IntoIterator<Item = Relationship>) {
        self.relationships.extend(relationships);
    }
}
