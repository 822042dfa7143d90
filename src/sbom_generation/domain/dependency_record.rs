/// DependencyRecord value object - one extracted lock-file declaration
///
/// This is the transient output of the lock-file extractor. Records are
/// consumed by the normalizer and discarded; only `name` is mandatory
/// because a dependency without a name cannot be identified downstream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyRecord {
    /// Dependency name (the CPM NAME field)
    pub name: String,
    /// GitHub repository in "org/repo" form, when declared
    pub repository: Option<String>,
    /// Pinned version, when declared
    pub version: Option<String>,
    /// Git tag or commit pin, when declared
    pub git_tag: Option<String>,
    /// License override from the SBOM_LICENSE_CONCLUDED field
    pub license_concluded: Option<String>,
}

impl DependencyRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
