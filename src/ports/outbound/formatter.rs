use crate::sbom_generation::domain::SbomDocument;
use crate::shared::Result;

/// SbomFormatter port for serializing the assembled document
///
/// This port abstracts the target serialization (SPDX JSON today) from
/// document assembly.
pub trait SbomFormatter {
    /// Serializes the document to its wire representation
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, document: &SbomDocument) -> Result<String>;
}
