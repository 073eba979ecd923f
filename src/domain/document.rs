// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// A single posting loaded from disk, before cleaning.
// Documents only live while the corpus is being walked:
// each one is turned into a NewsExample and dropped.
//
// Reference: Rust Book §5 (Structs and Methods)

/// A raw newsgroup posting, already decoded to UTF-8.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path of the file the posting came from, for log messages
    pub source: String,

    /// Category directory the file was found in
    pub category: String,

    /// Decoded but uncleaned file content
    pub text: String,
}

impl Document {
    /// Create a new Document.
    ///
    /// Example:
    ///   let doc = Document::new("sci.med/58043", "sci.med", "From: ...");
    pub fn new(
        source:   impl Into<String>,
        category: impl Into<String>,
        text:     impl Into<String>,
    ) -> Self {
        Self {
            source:   source.into(),
            category: category.into(),
            text:     text.into(),
        }
    }
}
