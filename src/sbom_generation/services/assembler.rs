use std::collections::BTreeMap;

use crate::sbom_generation::domain::{
    ImportedSbom, PackageKey, PackageType, Relationship, SbomDocument, SbomMetadata, SpdxPackage,
    DOCUMENT_SPDX_ID,
};

/// SPDX identifier of the self package describing the project itself
pub const SELF_SPDX_ID: &str = "SPDXRef-Package-Zrythm";

/// Imported Qt packages the self package explicitly depends on. Other
/// imported packages ship in the document for provenance but receive no
/// dependency edge from self.
const QT_DEPENDENCY_IDS: [&str; 2] = ["SPDXRef-Package-qtbase", "SPDXRef-Package-qtdeclarative"];

/// DocumentAssembler service - combines the self package, lock-derived
/// packages and imported packages into one consistent document
pub struct DocumentAssembler;

impl DocumentAssembler {
    /// Synthesizes the package describing the project itself.
    ///
    /// Metadata is fixed application identity; only the purl varies, via
    /// the caller-supplied commit or tag reference.
    pub fn self_package(commit: &str) -> SpdxPackage {
        SpdxPackage {
            name: "Zrythm".to_string(),
            package_type: PackageType::Application,
            version: Some("2.0.0-DEV".to_string()),
            download_location: Some("https://github.com/zrythm/zrythm".to_string()),
            supplier: Some("Zrythm".to_string()),
            purl: Some(format!("pkg:github/zrythm/zrythm@{}", commit)),
            license_concluded: "AGPL-3.0-only".to_string(),
            license_declared: "AGPL-3.0-only".to_string(),
            copyright_text: "© 2025 Alexandros Theodotou <alex@zrythm.org>".to_string(),
            spdx_id: SELF_SPDX_ID.to_string(),
        }
    }

    /// Assembles the full document.
    ///
    /// Relationship order: the DESCRIBES edge, one DEPENDS_ON edge from
    /// self to each lock-derived package, DEPENDS_ON edges to the named Qt
    /// packages when present in the imported set, then imported
    /// relationships. Imported relationships whose endpoints do not resolve
    /// within the final package set are dropped, keeping the document's
    /// resolution invariant intact after filtering.
    pub fn assemble(
        project_name: &str,
        metadata: SbomMetadata,
        lock_packages: Vec<SpdxPackage>,
        imported: &ImportedSbom,
        commit: &str,
    ) -> SbomDocument {
        let mut document = SbomDocument::new(project_name, metadata);

        // De-duplicate lock packages on (name, version); last parsed wins.
        let mut deduped: BTreeMap<PackageKey, SpdxPackage> = BTreeMap::new();
        for package in lock_packages {
            deduped.insert(package.key(), package);
        }

        document.insert_package(Self::self_package(commit));
        for package in deduped.values() {
            document.insert_package(package.clone());
        }
        for package in imported.packages() {
            document.insert_package(package.clone());
        }

        document.add_relationship(Relationship::describes(DOCUMENT_SPDX_ID, SELF_SPDX_ID));

        for package in deduped.values() {
            // Guard against a lock entry colliding with the self identifier
            if package.spdx_id != SELF_SPDX_ID {
                document
                    .add_relationship(Relationship::depends_on(SELF_SPDX_ID, package.spdx_id.clone()));
            }
        }

        for qt_id in QT_DEPENDENCY_IDS {
            if imported.contains_spdx_id(qt_id) {
                document.add_relationship(Relationship::depends_on(SELF_SPDX_ID, qt_id));
            }
        }

        // Imported edges must resolve package-to-package. Edges anchored on
        // the imported manifest's own document root are dropped too, so the
        // assembled document carries exactly one DESCRIBES edge.
        for relationship in imported.relationships() {
            if document.resolves_package(&relationship.spdx_element_id)
                && document.resolves_package(&relationship.related_spdx_element)
            {
                document.add_relationship(relationship.clone());
            }
        }

        document
    }
}
