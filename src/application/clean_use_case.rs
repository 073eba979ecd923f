// ============================================================
// Layer 2 — CleanUseCase
// ============================================================
// Runs the TextCleaner over one string or one file, so the
// exact tokens a posting turns into can be inspected without
// preparing the whole corpus.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::data::{cleaner::TextCleaner, decode::DecodePolicy};

pub struct CleanUseCase {
    cleaner: TextCleaner,
    policy:  DecodePolicy,
}

impl CleanUseCase {
    pub fn new(policy: DecodePolicy) -> Self {
        Self {
            cleaner: TextCleaner::new(),
            policy,
        }
    }

    pub fn clean_text(&self, text: &str) -> String {
        self.cleaner.clean(text)
    }

    /// Read `path`, decode it with the configured policy, and clean it.
    pub fn clean_file(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;
        let text = self
            .policy
            .decode(&bytes)
            .with_context(|| format!("Cannot decode '{}'", path.display()))?;
        Ok(self.cleaner.clean(&text))
    }
}
