// ============================================================
// Layer 3 — NewsExample Domain Type
// ============================================================
// The atomic unit of the dataset: one cleaned posting and the
// category it was filed under.
//
// Example:
//   text:  "hello , world ! ! it 's great ."
//   label: "sci.med"
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// A labelled text-classification example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsExample {
    /// Cleaned, space-tokenised text
    pub text: String,

    /// Category name, always a member of the dataset's CategorySet
    pub label: String,
}

impl NewsExample {
    /// Create a new NewsExample
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text:  text.into(),
            label: label.into(),
        }
    }

    /// Number of whitespace-separated tokens in the cleaned text
    pub fn token_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Sort key used by downstream batching: the document length in tokens.
///
/// Sorting by this key groups documents of similar length so that
/// padded batches waste less space.
pub fn sort_key(example: &NewsExample) -> usize {
    example.token_count()
}
