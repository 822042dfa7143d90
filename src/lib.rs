//! zrythm-sbom - SPDX SBOM generation tool for CPM-locked projects
//!
//! This library extracts dependency metadata from a CPM package-lock.cmake
//! file and optional externally generated SPDX tag-value SBOMs (Qt build
//! SBOMs), merges them, and emits one SPDX 2.3 JSON document. It follows
//! hexagonal architecture principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use zrythm_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     TagValueParser::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = SbomRequest::new(
//!     PathBuf::from("package-lock.cmake"),
//!     "Zrythm".to_string(),
//!     vec![],
//!     "master".to_string(),
//! );
//! let response = use_case.execute(request)?;
//!
//! if let Some(document) = response.document {
//!     let formatter = SpdxJsonFormatter::new();
//!     println!("{}", formatter.format(&document)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::SpdxJsonFormatter;
    pub use crate::adapters::outbound::spdx::TagValueParser;
    pub use crate::application::dto::{SbomRequest, SbomResponse};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        LockfileReader, ManifestParser, ManifestReader, OutputPresenter, ParsedManifest,
        ProgressReporter, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        DependencyRecord, ImportedSbom, PackageKey, PackageType, Relationship, RelationshipType,
        SbomDocument, SbomMetadata, SpdxPackage, DOCUMENT_SPDX_ID, NO_ASSERTION,
    };
    pub use crate::sbom_generation::services::{
        CpmLockParser, DocumentAssembler, FilterRule, ImportFilter, PackageNormalizer,
        SbomGenerator, SELF_SPDX_ID,
    };
    pub use crate::shared::Result;
}
