use crate::sbom_generation::domain::SbomDocument;

/// SbomResponse - Result of the SBOM generation use case
///
/// Carries no document when the lock file yielded zero dependencies;
/// the caller then prints a diagnostic and writes no output file.
#[derive(Debug)]
pub struct SbomResponse {
    pub document: Option<SbomDocument>,
}

impl SbomResponse {
    /// Response for the "no dependencies found" case
    pub fn empty() -> Self {
        Self { document: None }
    }

    pub fn with_document(document: SbomDocument) -> Self {
        Self {
            document: Some(document),
        }
    }
}
