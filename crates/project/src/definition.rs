//! Project definition: which parts of the workspace are in the project

use crate::graph::Label;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Scope filter defining which targets belong to the project
///
/// Includes and excludes are workspace-relative package path prefixes,
/// matched on path-segment boundaries. Captured once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDefinition {
    /// Package path prefixes inside the project
    pub includes: BTreeSet<String>,
    /// Package path prefixes carved back out of the includes
    pub excludes: BTreeSet<String>,
}

impl ProjectDefinition {
    /// Create a definition from include and exclude prefixes
    #[must_use]
    pub fn new(includes: BTreeSet<String>, excludes: BTreeSet<String>) -> Self {
        Self { includes, excludes }
    }

    /// Whether the target is inside the project scope
    #[must_use]
    pub fn is_included(&self, label: &Label) -> bool {
        let package = label.package();
        if !Self::matches_any(&self.includes, package) {
            return false;
        }
        !Self::matches_any(&self.excludes, package)
    }

    fn matches_any(prefixes: &BTreeSet<String>, package: &str) -> bool {
        prefixes.iter().any(|prefix| {
            package == prefix
                || package
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(s: &str) -> Label {
        Label::new(s).unwrap()
    }

    fn definition(includes: &[&str], excludes: &[&str]) -> ProjectDefinition {
        ProjectDefinition::new(
            includes.iter().map(ToString::to_string).collect(),
            excludes.iter().map(ToString::to_string).collect(),
        )
    }

    #[test]
    fn include_matches_on_segment_boundaries() {
        let def = definition(&["java/com/example"], &[]);
        assert!(def.is_included(&label("//java/com/example:lib")));
        assert!(def.is_included(&label("//java/com/example/sub:lib")));
        assert!(!def.is_included(&label("//java/com/examples:lib")));
        assert!(!def.is_included(&label("//third_party/aar:lib")));
    }

    #[test]
    fn excludes_carve_out_of_includes() {
        let def = definition(&["java"], &["java/com/generated"]);
        assert!(def.is_included(&label("//java/com/example:lib")));
        assert!(!def.is_included(&label("//java/com/generated:gen")));
        assert!(!def.is_included(&label("//java/com/generated/deep:gen")));
    }

    #[test]
    fn empty_definition_includes_nothing() {
        let def = ProjectDefinition::default();
        assert!(!def.is_included(&label("//java:lib")));
    }
}
