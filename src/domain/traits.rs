// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams of the pipeline:
//
//   ExampleSource  — anything that yields labelled examples
//                    (CorpusWalker reads them from disk)
//   ArchiveFetcher — anything that can put the archive file
//                    on disk (HttpFetcher downloads it; tests
//                    use a fake that counts calls)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::Path;

use crate::domain::example::NewsExample;

// ─── ExampleSource ────────────────────────────────────────────────────────────
/// Any component that can produce the full list of labelled examples.
pub trait ExampleSource {
    /// Load every example from this source, in a stable order.
    fn load_all(&self) -> Result<Vec<NewsExample>>;
}

// ─── ArchiveFetcher ───────────────────────────────────────────────────────────
/// Any component that can retrieve the archive at `url` into `dest`.
///
/// Implementations:
///   - HttpFetcher → one blocking HTTP GET
pub trait ArchiveFetcher {
    /// Fetch `url` and write its body to the file `dest`.
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}
