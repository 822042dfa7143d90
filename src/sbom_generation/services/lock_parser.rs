use regex::Regex;

use crate::sbom_generation::domain::DependencyRecord;
use crate::shared::Result;

/// Result of scanning a lock file: the extracted records in declaration
/// order, plus the names of packages dropped by an SBOM_SKIP directive
/// (reported by the caller for operator visibility).
#[derive(Debug, Default)]
pub struct LockParseResult {
    pub records: Vec<DependencyRecord>,
    pub skipped: Vec<String>,
}

/// CpmLockParser service - extracts CPMDeclarePackage declarations from
/// a package-lock.cmake file
///
/// Declaration blocks do not nest, so a lazy match up to the first closing
/// parenthesis is correct for this format. Fields inside a block are
/// independent KEY VALUE pairs looked up with separate patterns.
pub struct CpmLockParser {
    block: Regex,
    name: Regex,
    repository: Regex,
    version: Regex,
    git_tag: Regex,
    license_concluded: Regex,
    sbom_skip: Regex,
}

impl CpmLockParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            block: Regex::new(r"CPMDeclarePackage\(([^)]+)\)")?,
            name: Regex::new(r"NAME\s+(\S+)")?,
            repository: Regex::new(r"GITHUB_REPOSITORY\s+(\S+)")?,
            version: Regex::new(r"VERSION\s+(\S+)")?,
            git_tag: Regex::new(r"GIT_TAG\s+(\S+)")?,
            license_concluded: Regex::new(r#"SBOM_LICENSE_CONCLUDED\s+"([^"]+)""#)?,
            sbom_skip: Regex::new(r"SBOM_SKIP\s+(\S+)")?,
        })
    }

    /// Extracts an ordered sequence of dependency records from lock-file
    /// content.
    ///
    /// Blocks without a NAME field yield no record. Blocks whose SBOM_SKIP
    /// field equals "yes" (any letter case) are dropped and their name is
    /// returned in the skipped list.
    pub fn parse(&self, content: &str) -> LockParseResult {
        let mut result = LockParseResult::default();

        for block in self.block.captures_iter(content) {
            let body = &block[1];

            let Some(name) = self.capture(&self.name, body) else {
                continue;
            };

            if let Some(skip) = self.capture(&self.sbom_skip, body) {
                if skip.eq_ignore_ascii_case("yes") {
                    result.skipped.push(name);
                    continue;
                }
            }

            let mut record = DependencyRecord::new(name);
            record.repository = self.capture(&self.repository, body);
            record.version = self.capture(&self.version, body);
            record.git_tag = self.capture(&self.git_tag, body);
            record.license_concluded = self.capture(&self.license_concluded, body);
            result.records.push(record);
        }

        result
    }

    fn capture(&self, pattern: &Regex, body: &str) -> Option<String> {
        pattern
            .captures(body)
            .map(|captures| captures[1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> CpmLockParser {
        CpmLockParser::new().unwrap()
    }

    #[test]
    fn test_parse_full_block() {
        let content = r#"
CPMDeclarePackage(
  NAME fmt
  GITHUB_REPOSITORY fmtlib/fmt
  VERSION 11.0.2
  GIT_TAG 11.0.2
  SBOM_LICENSE_CONCLUDED "MIT"
)
"#;
        let result = parser().parse(content);
        assert_eq!(result.records.len(), 1);
        let record = &result.records[0];
        assert_eq!(record.name, "fmt");
        assert_eq!(record.repository.as_deref(), Some("fmtlib/fmt"));
        assert_eq!(record.version.as_deref(), Some("11.0.2"));
        assert_eq!(record.git_tag.as_deref(), Some("11.0.2"));
        assert_eq!(record.license_concluded.as_deref(), Some("MIT"));
    }

    #[test]
    fn test_parse_minimal_block() {
        let content = "CPMDeclarePackage(NAME foo)";
        let result = parser().parse(content);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].name, "foo");
        assert!(result.records[0].repository.is_none());
    }

    #[test]
    fn test_block_without_name_yields_no_record() {
        let content = r#"
CPMDeclarePackage(
  GITHUB_REPOSITORY fmtlib/fmt
  VERSION 11.0.2
)
"#;
        let result = parser().parse(content);
        assert!(result.records.is_empty());
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_sbom_skip_yes_drops_record() {
        let content = r#"
CPMDeclarePackage(
  NAME internal-fixture
  SBOM_SKIP YES
)
CPMDeclarePackage(
  NAME fmt
  SBOM_SKIP no
)
"#;
        let result = parser().parse(content);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].name, "fmt");
        assert_eq!(result.skipped, vec!["internal-fixture".to_string()]);
    }

    #[test]
    fn test_sbom_skip_is_case_insensitive() {
        for flag in ["yes", "Yes", "YES", "yEs"] {
            let content = format!("CPMDeclarePackage(NAME foo SBOM_SKIP {})", flag);
            let result = parser().parse(&content);
            assert!(result.records.is_empty(), "flag {} should skip", flag);
            assert_eq!(result.skipped, vec!["foo".to_string()]);
        }
    }

    #[test]
    fn test_multiple_blocks_preserve_order() {
        let content = r#"
CPMDeclarePackage(NAME alpha)
CPMDeclarePackage(NAME beta)
CPMDeclarePackage(NAME gamma)
"#;
        let result = parser().parse(content);
        let names: Vec<&str> = result.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_quoted_license_with_spaces() {
        let content = r#"CPMDeclarePackage(NAME x SBOM_LICENSE_CONCLUDED "LGPL-3.0-or-later AND MIT")"#;
        let result = parser().parse(content);
        assert_eq!(
            result.records[0].license_concluded.as_deref(),
            Some("LGPL-3.0-or-later AND MIT")
        );
    }

    #[test]
    fn test_empty_content() {
        let result = parser().parse("");
        assert!(result.records.is_empty());
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_surrounding_cmake_is_ignored() {
        let content = r#"
# CPM Package Lock
# This file should be committed to version control

set(CPM_DOWNLOAD_VERSION 0.40.2)

CPMDeclarePackage(
  NAME juce
  GITHUB_REPOSITORY juce-framework/JUCE
  GIT_TAG 8.0.4
)

if(NOT DEFINED CPM_SOURCE_CACHE)
  message(STATUS "no cache")
endif()
"#;
        let result = parser().parse(content);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].name, "juce");
        assert_eq!(result.records[0].git_tag.as_deref(), Some("8.0.4"));
    }
}
