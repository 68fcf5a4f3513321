//! Build graph data derived from build-system queries

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A workspace-absolute build target label, e.g. `//java/com/example:lib`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    /// Parse and validate a label
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not workspace-absolute or names
    /// no package.
    pub fn new(label: impl Into<String>) -> Result<Self> {
        let s = label.into();
        let Some(rest) = s.strip_prefix("//") else {
            return Err(Error::invalid_label(&s, "must start with //"));
        };
        let package = rest.split(':').next().unwrap_or_default();
        if package.is_empty() {
            return Err(Error::invalid_label(&s, "empty package path"));
        }
        Ok(Self(s))
    }

    /// The full label string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The package path portion, without the leading `//` or target name
    #[must_use]
    pub fn package(&self) -> &str {
        let rest = self.0.strip_prefix("//").unwrap_or(&self.0);
        rest.split(':').next().unwrap_or(rest)
    }

    /// The target name; defaults to the last package segment
    #[must_use]
    pub fn name(&self) -> &str {
        match self.0.split_once(':') {
            Some((_, name)) => name,
            None => self.package().rsplit('/').next().unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only dependency graph for the current build
///
/// Derived from build-system query results upstream of this crate; update
/// operations read it, never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildGraphData {
    /// All targets known to the current build graph
    pub targets: BTreeSet<Label>,
}

impl BuildGraphData {
    /// Create graph data over the given targets
    #[must_use]
    pub fn new(targets: BTreeSet<Label>) -> Self {
        Self { targets }
    }

    /// Whether the graph knows the given target
    #[must_use]
    pub fn contains(&self, label: &Label) -> bool {
        self.targets.contains(label)
    }
}
