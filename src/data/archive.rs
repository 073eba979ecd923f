// ============================================================
// Layer 4 — Archive Acquisition
// ============================================================
// Makes sure the extracted corpus exists under a data root.
//
//   root/
//     20news-bydate.tar.gz     ← downloaded once, kept on disk
//     20news-bydate-train/     ← sentinel: present = nothing to do
//       alt.atheism/…
//     20news-bydate-test/
//
// Decision table:
//   sentinel dir exists            → return it, no I/O at all
//   archive file exists            → extract only
//   neither                        → fetch, then extract
//
// The archive is a gzip-compressed tarball, read with
// flate2::read::GzDecoder and unpacked with tar::Archive.
//
// Reference: flate2 and tar crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
};
use tar::Archive;

use crate::domain::traits::ArchiveFetcher;

/// Mirror of the "bydate" 20 Newsgroups release.
pub const NEWS20_URL: &str = "http://people.csail.mit.edu/jrennie/20Newsgroups/20news-bydate.tar.gz";

/// Where the archive lives and what it unpacks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveSpec {
    /// URL of the gzip tarball
    pub url: String,

    /// File name of the downloaded archive inside the data root
    pub filename: String,

    /// Directory inside the data root whose presence means
    /// the archive has already been extracted
    pub dirname: String,
}

impl Default for ArchiveSpec {
    fn default() -> Self {
        Self {
            url:      NEWS20_URL.to_string(),
            filename: "20news-bydate.tar.gz".to_string(),
            dirname:  "20news-bydate-train".to_string(),
        }
    }
}

/// Ensure `root/spec.dirname` exists, downloading and extracting the
/// archive if needed. Returns the data root the archive unpacks into.
pub fn ensure_extracted(
    root:    &Path,
    spec:    &ArchiveSpec,
    fetcher: &dyn ArchiveFetcher,
) -> Result<PathBuf> {
    let target = root.join(&spec.dirname);

    if target.is_dir() {
        tracing::debug!("'{}' already present, skipping download", target.display());
        return Ok(root.to_path_buf());
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Cannot create data root '{}'", root.display()))?;

    let archive_path = root.join(&spec.filename);

    if !archive_path.is_file() {
        tracing::info!("Downloading {} → '{}'", spec.url, archive_path.display());
        fetcher
            .fetch(&spec.url, &archive_path)
            .with_context(|| format!("Failed to download '{}'", spec.url))?;
    }

    tracing::info!("Extracting '{}' into '{}'", archive_path.display(), root.display());
    extract_tar_gz(&archive_path, root)?;

    if !target.is_dir() {
        bail!(
            "Archive '{}' did not contain '{}'",
            archive_path.display(),
            spec.dirname
        );
    }

    Ok(root.to_path_buf())
}

/// Unpack every entry of a .tar.gz file into `dest`.
pub fn extract_tar_gz(archive_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive_path)
        .with_context(|| format!("Cannot open archive '{}'", archive_path.display()))?;

    let gz_buffer   = GzDecoder::new(BufReader::new(file));
    let mut archive = Archive::new(gz_buffer);

    archive
        .unpack(dest)
        .with_context(|| format!("Cannot extract '{}'", archive_path.display()))?;

    Ok(())
}
