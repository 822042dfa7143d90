use crate::sbom_generation::domain::SpdxPackage;

/// A single exclusion predicate applied to a candidate package's SPDX
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRule {
    /// Exclude identifiers containing the substring
    IdContains(String),
    /// Exclude the exact identifier
    IdEquals(String),
}

impl FilterRule {
    fn excludes(&self, spdx_id: &str) -> bool {
        match self {
            FilterRule::IdContains(fragment) => spdx_id.contains(fragment),
            FilterRule::IdEquals(id) => spdx_id == id,
        }
    }
}

/// ImportFilter service - drops irrelevant entries from imported manifests
///
/// Qt build SBOMs include bundled-3rdparty sources, build tools, test
/// fixtures and a compiler marker that are not part of the shipped
/// product. The rules are data rather than hard-coded match arms so they
/// track upstream identifier-composition changes in one place.
#[derive(Debug, Clone)]
pub struct ImportFilter {
    rules: Vec<FilterRule>,
}

impl ImportFilter {
    pub fn new(rules: Vec<FilterRule>) -> Self {
        Self { rules }
    }

    /// True when the identifier matches any exclusion rule.
    pub fn excludes(&self, spdx_id: &str) -> bool {
        self.rules.iter().any(|rule| rule.excludes(spdx_id))
    }

    /// Retains only packages whose identifier matches no exclusion rule.
    pub fn retain(&self, packages: Vec<SpdxPackage>) -> Vec<SpdxPackage> {
        packages
            .into_iter()
            .filter(|package| !self.excludes(&package.spdx_id))
            .collect()
    }
}

impl Default for ImportFilter {
    /// The rule set matching the Qt SBOM identifier conventions: bundled
    /// third-party sources, test fixtures, Qt build tools and apps, and
    /// the compiler marker element.
    fn default() -> Self {
        Self::new(vec![
            FilterRule::IdContains("-system-3rdparty-".to_string()),
            FilterRule::IdContains("qt-3rdparty-sources-Test".to_string()),
            FilterRule::IdContains("-qt-tool-".to_string()),
            FilterRule::IdContains("-qt-app-".to_string()),
            FilterRule::IdEquals("SPDXRef-compiler".to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(spdx_id: &str) -> SpdxPackage {
        SpdxPackage::library(spdx_id.trim_start_matches("SPDXRef-Package-"), spdx_id)
    }

    #[test]
    fn test_default_rules_exclude_qt_noise() {
        let filter = ImportFilter::default();

        assert!(filter.excludes("SPDXRef-qtbase-system-3rdparty-zlib"));
        assert!(filter.excludes("SPDXRef-qt-3rdparty-sources-Test-fixture"));
        assert!(filter.excludes("SPDXRef-qtbase-qt-tool-moc"));
        assert!(filter.excludes("SPDXRef-qtdeclarative-qt-app-qml"));
        assert!(filter.excludes("SPDXRef-compiler"));
    }

    #[test]
    fn test_default_rules_keep_runtime_packages() {
        let filter = ImportFilter::default();

        assert!(!filter.excludes("SPDXRef-Package-qtbase"));
        assert!(!filter.excludes("SPDXRef-Package-qtdeclarative"));
    }

    #[test]
    fn test_exact_rule_does_not_match_prefix() {
        let filter = ImportFilter::default();
        assert!(!filter.excludes("SPDXRef-compiler-runtime"));
    }

    #[test]
    fn test_retain_filters_packages() {
        let filter = ImportFilter::default();
        let packages = vec![
            package("SPDXRef-Package-qtbase"),
            package("SPDXRef-qtbase-qt-tool-moc"),
            package("SPDXRef-compiler"),
        ];

        let kept = filter.retain(packages);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].spdx_id, "SPDXRef-Package-qtbase");
    }

    #[test]
    fn test_custom_rules() {
        let filter = ImportFilter::new(vec![FilterRule::IdContains("-doc-".to_string())]);
        assert!(filter.excludes("SPDXRef-qtbase-doc-snippets"));
        assert!(!filter.excludes("SPDXRef-qtbase-qt-tool-moc"));
    }

    #[test]
    fn test_empty_rules_keep_everything() {
        let filter = ImportFilter::new(vec![]);
        assert!(!filter.excludes("SPDXRef-compiler"));
    }
}
