/// Sentinel meaning "the producer makes no assertion about this field",
/// distinct from a known-empty value.
pub const NO_ASSERTION: &str = "NOASSERTION";

/// De-duplication key for packages: (name, version-or-"unknown")
///
/// Lock-derived and imported packages are both keyed this way, so an
/// imported package identical to a lock-derived one collapses into a
/// single entity. Ordered so document maps iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageKey {
    name: String,
    version: String,
}

impl PackageKey {
    /// Literal used as the version component when no version is known
    pub const UNKNOWN_VERSION: &'static str = "unknown";

    pub fn new(name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            name: name.into(),
            version: version.unwrap_or(Self::UNKNOWN_VERSION).to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// SPDX package type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageType {
    Library,
    Application,
}

impl PackageType {
    /// SPDX primaryPackagePurpose spelling
    pub fn as_spdx_purpose(&self) -> &'static str {
        match self {
            PackageType::Library => "LIBRARY",
            PackageType::Application => "APPLICATION",
        }
    }
}

/// SpdxPackage entity - the canonical output unit of the SBOM
///
/// Covers both lock-derived dependencies and packages imported from
/// external manifests. Optional fields stay unset (rather than taking a
/// placeholder) when the source carried no value; license and copyright
/// fields instead use the NOASSERTION sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpdxPackage {
    pub name: String,
    pub package_type: PackageType,
    pub version: Option<String>,
    pub download_location: Option<String>,
    /// Supplier organization name (serialized as "Organization: <name>")
    pub supplier: Option<String>,
    /// Package URL external reference
    pub purl: Option<String>,
    pub license_concluded: String,
    pub license_declared: String,
    pub copyright_text: String,
    /// SPDX identifier, e.g. "SPDXRef-Package-fmt-11.0.2"
    pub spdx_id: String,
}

impl SpdxPackage {
    /// Creates a library package with all assertion fields defaulted
    /// to NOASSERTION and everything optional unset.
    pub fn library(name: impl Into<String>, spdx_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package_type: PackageType::Library,
            version: None,
            download_location: None,
            supplier: None,
            purl: None,
            license_concluded: NO_ASSERTION.to_string(),
            license_declared: NO_ASSERTION.to_string(),
            copyright_text: NO_ASSERTION.to_string(),
            spdx_id: spdx_id.into(),
        }
    }

    /// The de-duplication key for this package
    pub fn key(&self) -> PackageKey {
        PackageKey::new(self.name.clone(), self.version.as_deref())
    }
}
