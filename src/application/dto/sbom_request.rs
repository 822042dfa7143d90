use std::path::PathBuf;

/// SbomRequest - Internal request DTO for the SBOM generation use case
///
/// This DTO represents the internal request structure used within
/// the application layer. It may differ from the CLI argument surface.
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Path to the package-lock.cmake file
    pub lock_path: PathBuf,
    /// Project display name used as the SPDX document name
    pub project_name: String,
    /// Paths to externally produced SPDX tag-value manifests
    pub manifest_paths: Vec<PathBuf>,
    /// Commit hash or tag embedded in the self package's purl
    pub commit: String,
}

impl SbomRequest {
    pub fn new(
        lock_path: PathBuf,
        project_name: String,
        manifest_paths: Vec<PathBuf>,
        commit: String,
    ) -> Self {
        Self {
            lock_path,
            project_name,
            manifest_paths,
            commit,
        }
    }
}
