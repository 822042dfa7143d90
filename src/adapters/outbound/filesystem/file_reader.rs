use crate::ports::outbound::{LockfileReader, ManifestReader};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading input files from the file system
///
/// Implements both the LockfileReader and ManifestReader ports.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, lock_path: &Path) -> Result<String> {
        if !lock_path.exists() {
            return Err(SbomError::LockfileNotFound {
                path: lock_path.to_path_buf(),
                suggestion: "Run from the project root, or point --lock at the package-lock.cmake file.".to_string(),
            }
            .into());
        }

        fs::read_to_string(lock_path).map_err(|e| {
            SbomError::LockfileReadError {
                path: lock_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<String> {
        if !manifest_path.exists() {
            return Err(SbomError::ManifestReadError {
                path: manifest_path.to_path_buf(),
                details: "file not found".to_string(),
            }
            .into());
        }

        fs::read_to_string(manifest_path).map_err(|e| {
            SbomError::ManifestReadError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_read_lockfile_success() {
        let temp_dir = TempDir::new().unwrap();
        let lock_path = temp_dir.path().join("package-lock.cmake");
        fs::write(&lock_path, "CPMDeclarePackage(NAME foo)").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_lockfile(&lock_path).unwrap();
        assert!(content.contains("NAME foo"));
    }

    #[test]
    fn test_read_lockfile_not_found() {
        let reader = FileSystemReader::new();
        let result = reader.read_lockfile(&PathBuf::from("/nonexistent/package-lock.cmake"));

        assert!(result.is_err());
        let err = result.unwrap_err();
        let sbom_err = err.downcast_ref::<SbomError>().unwrap();
        assert!(matches!(sbom_err, SbomError::LockfileNotFound { .. }));
    }

    #[test]
    fn test_read_manifest_success() {
        let temp_dir = TempDir::new().unwrap();
        let manifest_path = temp_dir.path().join("qt.spdx");
        fs::write(&manifest_path, "SPDXVersion: SPDX-2.3").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_manifest(&manifest_path).unwrap();
        assert!(content.contains("SPDX-2.3"));
    }

    #[test]
    fn test_read_manifest_not_found() {
        let reader = FileSystemReader::new();
        let result = reader.read_manifest(&PathBuf::from("/nonexistent/qt.spdx"));

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("file not found"));
    }
}
