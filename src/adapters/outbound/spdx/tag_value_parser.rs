use crate::ports::outbound::{ManifestParser, ParsedManifest};
use crate::sbom_generation::domain::{
    PackageType, Relationship, RelationshipType, SpdxPackage, NO_ASSERTION,
};
use crate::shared::Result;

/// TagValueParser adapter - reads SPDX 2.x tag-value documents
///
/// Qt build SBOMs are emitted in this serialization. Only the package
/// fields this tool re-serializes are captured; unknown tags are skipped.
/// Multi-line values wrapped in <text>...</text> are supported for any
/// captured tag.
pub struct TagValueParser;

impl TagValueParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TagValueParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Package fields accumulated while scanning one block
#[derive(Debug, Default)]
struct PackageBuilder {
    name: String,
    spdx_id: Option<String>,
    version: Option<String>,
    supplier: Option<String>,
    download_location: Option<String>,
    license_concluded: Option<String>,
    license_declared: Option<String>,
    copyright_text: Option<String>,
    purl: Option<String>,
    purpose: Option<PackageType>,
}

impl PackageBuilder {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    fn build(self) -> SpdxPackage {
        let spdx_id = self
            .spdx_id
            .unwrap_or_else(|| format!("SPDXRef-Package-{}", self.name));
        let mut package = SpdxPackage::library(self.name, spdx_id);

        if let Some(purpose) = self.purpose {
            package.package_type = purpose;
        }
        package.version = self.version;
        package.supplier = self.supplier;
        package.download_location = self.download_location.filter(|l| l.as_str() != NO_ASSERTION);
        package.purl = self.purl;
        if let Some(license) = self.license_concluded {
            package.license_concluded = license;
        }
        if let Some(license) = self.license_declared {
            package.license_declared = license;
        }
        if let Some(copyright) = self.copyright_text {
            package.copyright_text = copyright;
        }

        package
    }
}

impl ManifestParser for TagValueParser {
    fn parse(&self, content: &str) -> Result<ParsedManifest> {
        let mut manifest = ParsedManifest::default();
        let mut current: Option<PackageBuilder> = None;

        let lines: Vec<&str> = content.lines().collect();
        let mut index = 0;

        while index < lines.len() {
            let line = lines[index].trim();
            index += 1;

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((tag, raw_value)) = line.split_once(':') else {
                continue;
            };
            let tag = tag.trim();

            // Multi-line values continue until the closing </text> marker
            let mut value = raw_value.trim().to_string();
            if value.starts_with("<text>") {
                value = value.trim_start_matches("<text>").to_string();
                while !value.contains("</text>") && index < lines.len() {
                    value.push('\n');
                    value.push_str(lines[index]);
                    index += 1;
                }
                value = value.replace("</text>", "").trim().to_string();
            }

            match tag {
                "PackageName" => {
                    if let Some(builder) = current.take() {
                        manifest.packages.push(builder.build());
                    }
                    current = Some(PackageBuilder::new(value));
                }
                "SPDXID" => {
                    if let Some(builder) = current.as_mut() {
                        builder.spdx_id = Some(value);
                    }
                    // The document's own SPDXID precedes any package block
                }
                "PackageVersion" => {
                    if let Some(builder) = current.as_mut() {
                        builder.version = Some(value);
                    }
                }
                "PackageSupplier" => {
                    if let Some(builder) = current.as_mut() {
                        let organization = value
                            .strip_prefix("Organization:")
                            .map(|v| v.trim().to_string())
                            .unwrap_or(value);
                        builder.supplier = Some(organization);
                    }
                }
                "PackageDownloadLocation" => {
                    if let Some(builder) = current.as_mut() {
                        builder.download_location = Some(value);
                    }
                }
                "PackageLicenseConcluded" => {
                    if let Some(builder) = current.as_mut() {
                        builder.license_concluded = Some(value);
                    }
                }
                "PackageLicenseDeclared" => {
                    if let Some(builder) = current.as_mut() {
                        builder.license_declared = Some(value);
                    }
                }
                "PackageCopyrightText" => {
                    if let Some(builder) = current.as_mut() {
                        builder.copyright_text = Some(value);
                    }
                }
                "PrimaryPackagePurpose" => {
                    if let Some(builder) = current.as_mut() {
                        builder.purpose = match value.as_str() {
                            "APPLICATION" => Some(PackageType::Application),
                            _ => Some(PackageType::Library),
                        };
                    }
                }
                "ExternalRef" => {
                    if let Some(builder) = current.as_mut() {
                        // "PACKAGE-MANAGER purl <locator>"
                        let mut parts = value.split_whitespace();
                        if let (Some("PACKAGE-MANAGER"), Some("purl"), Some(locator)) =
                            (parts.next(), parts.next(), parts.next())
                        {
                            builder.purl = Some(locator.to_string());
                        }
                    }
                }
                "Relationship" => {
                    // "<subject> <TYPE> <object>"
                    let mut parts = value.split_whitespace();
                    if let (Some(subject), Some(predicate), Some(object)) =
                        (parts.next(), parts.next(), parts.next())
                    {
                        manifest.relationships.push(Relationship::new(
                            subject,
                            RelationshipType::from_spdx(predicate),
                            object,
                        ));
                    }
                }
                _ => {}
            }
        }

        if let Some(builder) = current.take() {
            manifest.packages.push(builder.build());
        }

        if manifest.packages.is_empty() {
            anyhow::bail!("no package blocks found (not an SPDX tag-value document?)");
        }

        Ok(manifest)
    }
}
