// ============================================================
// Layer 4 — Corpus Walker
// ============================================================
// Reads the extracted corpus and builds one NewsExample per file.
//
// Expected layout:
//   <split_dir>/
//     alt.atheism/49960
//     alt.atheism/51060
//     comp.graphics/37261
//     ...
//
// For each configured category, in configuration order:
//   1. list <split_dir>/<category>
//   2. read every regular file as bytes
//   3. decode with the configured DecodePolicy
//   4. clean with the TextCleaner
//   5. emit NewsExample { text, label: category }
//
// Files inside a category are visited in file-name order so
// two runs over the same directory give the same sequence.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §13 (Iterators)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::{cleaner::TextCleaner, decode::DecodePolicy};
use crate::domain::{
    category::CategorySet,
    document::Document,
    example::NewsExample,
    traits::ExampleSource,
};

/// Walks `<split_dir>/<category>/*` and cleans every posting.
pub struct CorpusWalker {
    /// Directory holding one subdirectory per category
    split_dir:  PathBuf,
    categories: CategorySet,
    policy:     DecodePolicy,
    cleaner:    TextCleaner,
}

impl CorpusWalker {
    pub fn new(
        split_dir:  impl Into<PathBuf>,
        categories: CategorySet,
        policy:     DecodePolicy,
        cleaner:    TextCleaner,
    ) -> Self {
        Self {
            split_dir: split_dir.into(),
            categories,
            policy,
            cleaner,
        }
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Read and decode every file of one category, in file-name order.
    fn read_category(&self, category: &str) -> Result<Vec<Document>> {
        let dir = self.split_dir.join(category);

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(&dir)
            .with_context(|| format!("Cannot read category directory '{}'", dir.display()))?
        {
            let path = entry?.path();

            if path.is_file() {
                paths.push(path);
            } else {
                tracing::warn!("Skipping '{}': not a regular file", path.display());
            }
        }
        paths.sort();

        paths
            .iter()
            .map(|path| read_document(path, category, self.policy))
            .collect()
    }
}

impl ExampleSource for CorpusWalker {
    fn load_all(&self) -> Result<Vec<NewsExample>> {
        let mut examples = Vec::new();

        for category in self.categories.iter() {
            let docs = self.read_category(category)?;
            tracing::debug!("{}: {} files", category, docs.len());

            for doc in docs {
                tracing::trace!("{} ({} chars)", doc.source, doc.text.len());
                examples.push(NewsExample::new(self.cleaner.clean(&doc.text), doc.category));
            }
        }

        tracing::info!(
            "Loaded {} examples from '{}'",
            examples.len(),
            self.split_dir.display()
        );
        Ok(examples)
    }
}

/// Read one file and decode it according to `policy`.
fn read_document(path: &Path, category: &str, policy: DecodePolicy) -> Result<Document> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let text = policy
        .decode(&bytes)
        .with_context(|| format!("Cannot decode '{}'", path.display()))?;

    Ok(Document::new(path.display().to_string(), category, text))
}
