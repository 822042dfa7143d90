use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::sbom_generation::domain::SbomMetadata;

/// Tool identity embedded in generated documents
const TOOL_NAME: &str = "zrythm-sbom-generator";
const TOOL_VERSION: &str = "0.1";

/// SbomGenerator service for generating SPDX document metadata
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates metadata with the current timestamp and a unique document
    /// namespace for the given document name.
    pub fn generate_metadata(document_name: &str) -> SbomMetadata {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let document_namespace = format!(
            "https://spdx.org/spdxdocs/{}-{}",
            document_name,
            Uuid::new_v4()
        );

        SbomMetadata::new(
            timestamp,
            TOOL_NAME.to_string(),
            TOOL_VERSION.to_string(),
            document_namespace,
        )
    }
}
