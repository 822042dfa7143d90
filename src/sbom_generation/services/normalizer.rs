use crate::sbom_generation::domain::{DependencyRecord, SpdxPackage};

/// Host serving lock-file repositories; CPM declarations only carry
/// GITHUB_REPOSITORY references.
const REPOSITORY_HOST: &str = "github.com";

/// purl type for the repository host
const PURL_TYPE: &str = "github";

/// Fixed prefix for derived SPDX identifiers
pub const SPDX_ID_PREFIX: &str = "SPDXRef-Package-";

/// PackageNormalizer service - converts extracted dependency records into
/// canonical SPDX package entities
///
/// Total function: normalization always succeeds, absent fields stay unset
/// and license/copyright fields fall back to NOASSERTION.
pub struct PackageNormalizer;

impl PackageNormalizer {
    /// Normalizes one dependency record into a library package.
    pub fn normalize(record: &DependencyRecord) -> SpdxPackage {
        let spdx_id = Self::derive_spdx_id(&record.name, record.version.as_deref());
        let mut package = SpdxPackage::library(record.name.as_str(), spdx_id);

        package.version = record.version.clone();

        if let Some(repository) = &record.repository {
            package.download_location = Some(format!("https://{}/{}", REPOSITORY_HOST, repository));
            package.supplier = repository
                .split('/')
                .next()
                .map(|organization| organization.to_string());

            let mut purl = format!("pkg:{}/{}", PURL_TYPE, repository);
            if let Some(tag) = &record.git_tag {
                purl.push('@');
                purl.push_str(tag);
            }
            package.purl = Some(purl);
        }

        if let Some(license) = &record.license_concluded {
            package.license_concluded = license.clone();
            package.license_declared = license.clone();
        }

        package
    }

    /// Derives a deterministic SPDX identifier from name and version.
    ///
    /// The version is folded into the identifier when known, so two
    /// same-named dependencies pinned at different versions get distinct
    /// identifiers in relationship edges. Characters outside the SPDX
    /// idstring alphabet are replaced with '-'.
    pub fn derive_spdx_id(name: &str, version: Option<&str>) -> String {
        let mut id = format!("{}{}", SPDX_ID_PREFIX, name);
        if let Some(version) = version {
            id.push('-');
            id.push_str(version);
        }
        id.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }
}
