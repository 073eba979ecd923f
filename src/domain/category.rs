// ============================================================
// Layer 3 — Category Set
// ============================================================
// The closed list of newsgroups the dataset is built from.
// Each name is used twice:
//   - as a subdirectory name under the data root
//   - as the classification label of every file inside it
//
// The list is configuration, not a constant: the walker is
// handed a CategorySet and never assumes which groups exist.
//
// Reference: Rust Book §8 (Vectors)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The four groups used by the classic 20 Newsgroups subset.
pub const DEFAULT_CATEGORIES: [&str; 4] = [
    "alt.atheism",
    "comp.graphics",
    "sci.med",
    "soc.religion.christian",
];

/// An ordered, duplicate-free list of category names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Build a CategorySet, rejecting empty lists, blank names,
    /// path separators, and duplicates.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();

        for name in names {
            let name = name.into().trim().to_string();

            if name.is_empty() {
                bail!("Category names must not be empty");
            }
            if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
                bail!("Category '{}' is not a plain directory name", name);
            }
            if out.contains(&name) {
                bail!("Category '{}' is listed twice", name);
            }
            out.push(name);
        }

        if out.is_empty() {
            bail!("At least one category is required");
        }

        Ok(Self { names: out })
    }

    /// True if `label` is one of the configured categories
    pub fn contains(&self, label: &str) -> bool {
        self.names.iter().any(|n| n == label)
    }

    /// Position of `label` in the configured order
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.names.iter().position(|n| n == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for CategorySet {
    type Error = anyhow::Error;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::new(names)
    }
}

impl From<CategorySet> for Vec<String> {
    fn from(set: CategorySet) -> Self {
        set.names
    }
}

/// Parse a comma-separated list, e.g. "sci.med,comp.graphics"
impl FromStr for CategorySet {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.split(',').filter(|part| !part.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_four_groups_in_order() {
        let set = CategorySet::default();
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, DEFAULT_CATEGORIES.to_vec());
    }

    #[test]
    fn test_parse_comma_list() {
        let set: CategorySet = "sci.med, comp.graphics".parse().unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("sci.med"));
        assert!(set.contains("comp.graphics"));
        assert!(!set.contains("alt.atheism"));
        assert_eq!(set.index_of("comp.graphics"), Some(1));
    }

    #[test]
    fn test_rejects_duplicates() {
        assert!(CategorySet::new(["sci.med", "sci.med"]).is_err());
    }

    #[test]
    fn test_rejects_empty_list() {
        assert!("".parse::<CategorySet>().is_err());
        assert!(CategorySet::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let json = serde_json::to_string(&CategorySet::new(["sci.med"]).unwrap()).unwrap();
        assert_eq!(json, r#"["sci.med"]"#);
        assert!(serde_json::from_str::<CategorySet>(r#"["a","a"]"#).is_err());
    }

    #[test]
    fn test_rejects_path_like_names() {
        assert!(CategorySet::new(["../etc"]).is_err());
        assert!(CategorySet::new([".."]).is_err());
    }
}
