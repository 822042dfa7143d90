use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for reading lock-file contents
///
/// Abstracts the file system operations needed to read the
/// package-lock.cmake file.
pub trait LockfileReader {
    /// Reads the lock file at the given path
    ///
    /// # Errors
    /// Returns `SbomError::LockfileNotFound` when the path does not exist;
    /// the caller treats that case as "zero dependencies" rather than a
    /// fatal failure.
    fn read_lockfile(&self, lock_path: &Path) -> Result<String>;
}
