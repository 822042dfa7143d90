/// SbomMetadata value object representing SPDX document creation metadata
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    document_namespace: String,
}

impl SbomMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        document_namespace: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            document_namespace,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn document_namespace(&self) -> &str {
        &self.document_namespace
    }

    /// SPDX creator string, e.g. "Tool: zrythm-sbom-generator-0.1"
    pub fn creator(&self) -> String {
        format!("Tool: {}-{}", self.tool_name, self.tool_version)
    }
}
