use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading external SBOM manifest files
pub trait ManifestReader {
    /// Reads one externally produced manifest file
    ///
    /// # Errors
    /// Returns an error when the file is missing or unreadable. The caller
    /// logs a per-file warning and continues with the remaining paths.
    fn read_manifest(&self, manifest_path: &Path) -> Result<String>;
}
