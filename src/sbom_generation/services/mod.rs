//! Domain services - pure business logic with no infrastructure access

pub mod assembler;
pub mod import_filter;
pub mod lock_parser;
pub mod normalizer;
pub mod sbom_generator;

pub use assembler::{DocumentAssembler, SELF_SPDX_ID};
pub use import_filter::{FilterRule, ImportFilter};
pub use lock_parser::{CpmLockParser, LockParseResult};
pub use normalizer::PackageNormalizer;
pub use sbom_generator::SbomGenerator;
