//! SBOM generation - domain models and pure services

pub mod domain;
pub mod services;
