// Test-only helpers shared by the data and application tests:
// on-disk corpus builders, in-memory tarballs, and a fetcher
// that records calls instead of touching the network.

use anyhow::Result;
use flate2::{write::GzEncoder, Compression};
use std::{cell::RefCell, fs, path::Path};

use crate::domain::traits::ArchiveFetcher;

/// Write `files` as `root/<category>/<name>` with the given bytes.
pub fn write_corpus(root: &Path, files: &[(&str, &str, &[u8])]) {
    for (category, name, bytes) in files {
        let dir = root.join(category);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), bytes).unwrap();
    }
}

/// Build a gzip tarball in memory from `(path, contents)` pairs.
pub fn tar_gz(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let encoder     = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for (path, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, *path, *data).unwrap();
    }

    builder.into_inner().unwrap().finish().unwrap()
}

/// Writes a canned payload and remembers every URL it was asked for.
pub struct CountingFetcher {
    payload: Vec<u8>,
    urls:    RefCell<Vec<String>>,
}

impl CountingFetcher {
    pub fn new(payload: Vec<u8>) -> Self {
        Self { payload, urls: RefCell::new(Vec::new()) }
    }

    pub fn calls(&self) -> usize {
        self.urls.borrow().len()
    }

    pub fn last_url(&self) -> Option<String> {
        self.urls.borrow().last().cloned()
    }
}

impl ArchiveFetcher for CountingFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        self.urls.borrow_mut().push(url.to_string());
        fs::write(dest, &self.payload)?;
        Ok(())
    }
}
