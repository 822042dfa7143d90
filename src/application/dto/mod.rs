//! Data transfer objects for the application layer

mod sbom_request;
mod sbom_response;

pub use sbom_request::SbomRequest;
pub use sbom_response::SbomResponse;
