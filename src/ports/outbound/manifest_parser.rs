use crate::sbom_generation::domain::{Relationship, SpdxPackage};
use crate::shared::Result;

/// Parse result for one external manifest file: packages in document
/// order plus the full relationship list, both unfiltered.
#[derive(Debug, Default)]
pub struct ParsedManifest {
    pub packages: Vec<SpdxPackage>,
    pub relationships: Vec<Relationship>,
}

/// ManifestParser port for parsing external SBOM serializations
///
/// Abstracts the wire format of externally supplied bill-of-materials
/// documents (SPDX tag-value today) so the import workflow does not
/// depend on a concrete parser.
pub trait ManifestParser {
    /// Parses manifest content into packages and relationships
    ///
    /// # Errors
    /// Returns an error when the content is not a recognizable manifest;
    /// the caller logs the file path and cause and skips the file.
    fn parse(&self, content: &str) -> Result<ParsedManifest>;
}
