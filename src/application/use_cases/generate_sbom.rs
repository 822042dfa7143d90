use std::path::Path;

use crate::application::dto::{SbomRequest, SbomResponse};
use crate::ports::outbound::{LockfileReader, ManifestParser, ManifestReader, ProgressReporter};
use crate::sbom_generation::domain::{DependencyRecord, ImportedSbom};
use crate::sbom_generation::services::{
    CpmLockParser, DocumentAssembler, ImportFilter, PackageNormalizer, SbomGenerator,
};
use crate::shared::Result;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Orchestrates the four stages of a run: lock-file extraction, package
/// normalization, external-manifest import, and document assembly. All
/// infrastructure access goes through injected ports.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `MR` - ManifestReader implementation
/// * `MP` - ManifestParser implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<LR, MR, MP, PR> {
    lockfile_reader: LR,
    manifest_reader: MR,
    manifest_parser: MP,
    progress_reporter: PR,
    import_filter: ImportFilter,
}

impl<LR, MR, MP, PR> GenerateSbomUseCase<LR, MR, MP, PR>
where
    LR: LockfileReader,
    MR: ManifestReader,
    MP: ManifestParser,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies and
    /// the default import filter rules.
    pub fn new(
        lockfile_reader: LR,
        manifest_reader: MR,
        manifest_parser: MP,
        progress_reporter: PR,
    ) -> Self {
        Self::with_filter(
            lockfile_reader,
            manifest_reader,
            manifest_parser,
            progress_reporter,
            ImportFilter::default(),
        )
    }

    pub fn with_filter(
        lockfile_reader: LR,
        manifest_reader: MR,
        manifest_parser: MP,
        progress_reporter: PR,
        import_filter: ImportFilter,
    ) -> Self {
        Self {
            lockfile_reader,
            manifest_reader,
            manifest_parser,
            progress_reporter,
            import_filter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Returns
    /// SbomResponse carrying the assembled document, or an empty response
    /// when the lock file yielded zero dependencies.
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        // Step 1: Extract dependency records from the lock file
        let records = self.extract_lock_records(&request.lock_path)?;

        if records.is_empty() {
            self.progress_reporter.report(&format!(
                "No CPM dependencies found in {}",
                request.lock_path.display()
            ));
            return Ok(SbomResponse::empty());
        }

        self.progress_reporter
            .report(&format!("✅ Found {} CPM dependencies", records.len()));

        // Step 2: Normalize records into SPDX package entities
        let lock_packages = records
            .iter()
            .map(PackageNormalizer::normalize)
            .collect::<Vec<_>>();

        // Step 3: Import and filter external manifests
        let imported = self.import_manifests(&request.manifest_paths);

        // Step 4: Assemble the document
        let metadata = SbomGenerator::generate_metadata(&request.project_name);
        let document = DocumentAssembler::assemble(
            &request.project_name,
            metadata,
            lock_packages,
            &imported,
            &request.commit,
        );

        Ok(SbomResponse::with_document(document))
    }

    /// Reads and parses the lock file, reporting skipped packages.
    ///
    /// A missing or unreadable lock file degrades to zero records with a
    /// warning; the run itself continues.
    fn extract_lock_records(&self, lock_path: &Path) -> Result<Vec<DependencyRecord>> {
        self.progress_reporter.report(&format!(
            "📖 Loading package-lock.cmake from: {}",
            lock_path.display()
        ));

        let content = match self.lockfile_reader.read_lockfile(lock_path) {
            Ok(content) => content,
            Err(error) => {
                self.progress_reporter.report_warning(&error.to_string());
                return Ok(Vec::new());
            }
        };

        let parser = CpmLockParser::new()?;
        let result = parser.parse(&content);

        for name in &result.skipped {
            self.progress_reporter
                .report(&format!("Skipping package {} due to SBOM_SKIP YES", name));
        }

        Ok(result.records)
    }

    /// Imports zero or more external manifests, filtering out entries
    /// irrelevant to the shipped product and unioning survivors
    /// first-occurrence-wins.
    ///
    /// Per-file failures (missing path, unreadable file, parse error) are
    /// reported as warnings; remaining files still contribute.
    fn import_manifests(&self, manifest_paths: &[std::path::PathBuf]) -> ImportedSbom {
        let mut imported = ImportedSbom::new();
        if manifest_paths.is_empty() {
            return imported;
        }

        let mut total_retained = 0;

        for path in manifest_paths {
            let content = match self.manifest_reader.read_manifest(path) {
                Ok(content) => content,
                Err(error) => {
                    self.progress_reporter.report_warning(&error.to_string());
                    continue;
                }
            };

            let manifest = match self.manifest_parser.parse(&content) {
                Ok(manifest) => manifest,
                Err(error) => {
                    self.progress_reporter.report_warning(&format!(
                        "Error parsing SBOM file {}: {}",
                        path.display(),
                        error
                    ));
                    continue;
                }
            };

            let survivors = self.import_filter.retain(manifest.packages);
            let mut retained = 0;
            for package in survivors {
                imported.add_package_if_absent(package);
                retained += 1;
            }
            imported.extend_relationships(manifest.relationships);
            total_retained += retained;

            self.progress_reporter.report(&format!(
                "Parsed {} packages from {}",
                retained,
                path.display()
            ));
        }

        self.progress_reporter.report(&format!(
            "Total parsed {} packages from {} SBOM file(s)",
            total_retained,
            manifest_paths.len()
        ));

        imported
    }
}
