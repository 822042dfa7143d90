use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{
    Relationship, SbomDocument, SpdxPackage, NO_ASSERTION, DOCUMENT_SPDX_ID,
};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SpdxJsonDocument {
    #[serde(rename = "spdxVersion")]
    spdx_version: String,
    #[serde(rename = "dataLicense")]
    data_license: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    #[serde(rename = "documentNamespace")]
    document_namespace: String,
    #[serde(rename = "creationInfo")]
    creation_info: CreationInfo,
    packages: Vec<JsonPackage>,
    relationships: Vec<JsonRelationship>,
}

#[derive(Debug, Serialize)]
struct CreationInfo {
    created: String,
    creators: Vec<String>,
}

#[derive(Debug, Serialize)]
struct JsonPackage {
    name: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    #[serde(rename = "versionInfo", skip_serializing_if = "Option::is_none")]
    version_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supplier: Option<String>,
    #[serde(rename = "downloadLocation")]
    download_location: String,
    #[serde(rename = "filesAnalyzed")]
    files_analyzed: bool,
    #[serde(rename = "licenseConcluded")]
    license_concluded: String,
    #[serde(rename = "licenseDeclared")]
    license_declared: String,
    #[serde(rename = "copyrightText")]
    copyright_text: String,
    #[serde(rename = "primaryPackagePurpose")]
    primary_package_purpose: String,
    #[serde(rename = "externalRefs", skip_serializing_if = "Option::is_none")]
    external_refs: Option<Vec<ExternalRef>>,
}

#[derive(Debug, Serialize)]
struct ExternalRef {
    #[serde(rename = "referenceCategory")]
    reference_category: String,
    #[serde(rename = "referenceType")]
    reference_type: String,
    #[serde(rename = "referenceLocator")]
    reference_locator: String,
}

#[derive(Debug, Serialize)]
struct JsonRelationship {
    #[serde(rename = "spdxElementId")]
    spdx_element_id: String,
    #[serde(rename = "relationshipType")]
    relationship_type: String,
    #[serde(rename = "relatedSpdxElement")]
    related_spdx_element: String,
}

/// SpdxJsonFormatter adapter for generating SPDX 2.3 JSON output
///
/// This adapter implements the SbomFormatter port for the SPDX JSON
/// serialization. License expressions are validated against the SPDX
/// expression alphabet; anything else serializes as NOASSERTION.
pub struct SpdxJsonFormatter;

impl SpdxJsonFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Light license-expression validation. SPDX expressions are built
    /// from idstrings (alphanumerics, '.', '-', '+'), the AND/OR/WITH
    /// operators, parentheses and the LicenseRef- prefix with ':'.
    fn validate_license(license: &str) -> String {
        let trimmed = license.trim();
        if trimmed.is_empty() {
            return NO_ASSERTION.to_string();
        }
        let valid = trimmed.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '.' | '-' | '+' | ':' | '(' | ')' | ' ')
        });
        if valid {
            trimmed.to_string()
        } else {
            NO_ASSERTION.to_string()
        }
    }

    fn build_package(&self, package: &SpdxPackage) -> JsonPackage {
        let external_refs = package.purl.as_ref().map(|purl| {
            vec![ExternalRef {
                reference_category: "PACKAGE-MANAGER".to_string(),
                reference_type: "purl".to_string(),
                reference_locator: purl.clone(),
            }]
        });

        JsonPackage {
            name: package.name.clone(),
            spdx_id: package.spdx_id.clone(),
            version_info: package.version.clone(),
            supplier: package
                .supplier
                .as_ref()
                .map(|organization| format!("Organization: {}", organization)),
            download_location: package
                .download_location
                .clone()
                .unwrap_or_else(|| NO_ASSERTION.to_string()),
            files_analyzed: false,
            license_concluded: Self::validate_license(&package.license_concluded),
            license_declared: Self::validate_license(&package.license_declared),
            copyright_text: package.copyright_text.clone(),
            primary_package_purpose: package.package_type.as_spdx_purpose().to_string(),
            external_refs,
        }
    }

    fn build_relationship(&self, relationship: &Relationship) -> JsonRelationship {
        JsonRelationship {
            spdx_element_id: relationship.spdx_element_id.clone(),
            relationship_type: relationship.relationship_type.as_str().to_string(),
            related_spdx_element: relationship.related_spdx_element.clone(),
        }
    }
}

impl Default for SpdxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxJsonFormatter {
    fn format(&self, document: &SbomDocument) -> Result<String> {
        let json_document = SpdxJsonDocument {
            spdx_version: "SPDX-2.3".to_string(),
            data_license: "CC0-1.0".to_string(),
            spdx_id: DOCUMENT_SPDX_ID.to_string(),
            name: document.name().to_string(),
            document_namespace: document.metadata().document_namespace().to_string(),
            creation_info: CreationInfo {
                created: document.metadata().timestamp().to_string(),
                creators: vec![document.metadata().creator()],
            },
            packages: document
                .packages()
                .map(|package| self.build_package(package))
                .collect(),
            relationships: document
                .relationships()
                .iter()
                .map(|relationship| self.build_relationship(relationship))
                .collect(),
        };

        serde_json::to_string_pretty(&json_document).map_err(Into::into)
    }
}
