// ============================================================
// Layer 6 — HTTP Downloader
// ============================================================
// Production ArchiveFetcher: a single blocking HTTP GET whose
// body is streamed to disk behind an indicatif progress bar.
//
// The body is written to "<dest>.part" first and renamed once
// the transfer finished, so an interrupted download never
// leaves a file that looks like a complete archive.
//
// Reference: reqwest blocking client documentation
//            indicatif crate documentation

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    fs::{self, File},
    io::{BufWriter, Read, Write},
    path::Path,
};

use crate::domain::traits::ArchiveFetcher;

/// Size of each read from the response body
const CHUNK_SIZE: usize = 64 * 1024;

/// Downloads archives over HTTP with reqwest's blocking client.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveFetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let mut response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("GET {url} failed"))?;

        if !response.status().is_success() {
            bail!("GET {} returned {}", url, response.status());
        }

        // Servers that omit Content-Length get a spinner instead of a bar
        let pb = match response.content_length() {
            Some(total) => {
                let pb = ProgressBar::new(total);
                pb.set_style(
                    ProgressStyle::with_template(
                        "{msg}\n    {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({eta})",
                    )?
                    .progress_chars("#>-"),
                );
                pb
            }
            None => ProgressBar::new_spinner(),
        };
        pb.set_message(format!("Downloading {url}"));

        let part_path = dest.with_extension("part");
        let file = File::create(&part_path)
            .with_context(|| format!("Cannot create '{}'", part_path.display()))?;
        let mut writer = BufWriter::new(file);

        let mut buffer = vec![0u8; CHUNK_SIZE];
        loop {
            let n = response
                .read(&mut buffer)
                .with_context(|| format!("Reading response body of {url} failed"))?;
            if n == 0 {
                break;
            }
            writer.write_all(&buffer[..n])?;
            pb.inc(n as u64);
        }
        writer.flush()?;
        pb.finish_and_clear();

        fs::rename(&part_path, dest)
            .with_context(|| format!("Cannot move download to '{}'", dest.display()))?;

        tracing::info!("Downloaded {} bytes to '{}'", pb.position(), dest.display());
        Ok(())
    }
}
