//! Application use cases

mod generate_sbom;

pub use generate_sbom::GenerateSbomUseCase;
