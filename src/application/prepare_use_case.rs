// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Runs the whole dataset preparation pipeline in order:
//
//   Step 1: Ensure the archive is extracted  (Layer 4 - archive)
//   Step 2: Walk + decode + clean train dir  (Layer 4 - corpus)
//   Step 3: Wrap in a NewsDataset            (Layer 4 - dataset)
//   Step 4: Cut train / dev                  (Layer 4 - splitter)
//   Step 5: Optionally load the test dir     (Layer 4 - corpus)
//   Step 6: Optionally export as JSON        (Layer 6 - export)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{
    archive::{ensure_extracted, ArchiveSpec},
    cleaner::TextCleaner,
    corpus::CorpusWalker,
    dataset::NewsDataset,
    decode::DecodePolicy,
    splitter::DEFAULT_DEV_RATIO,
};
use crate::domain::{category::CategorySet, traits::{ArchiveFetcher, ExampleSource}};
use crate::infra::{downloader::HttpFetcher, export::SplitExporter};

// ─── Preparation Configuration ───────────────────────────────────────────────
// Everything a run depends on. Serialisable so an export can
// record exactly how its splits were produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    /// Data root the archive is downloaded to and extracted in
    pub root:         String,
    pub archive:      ArchiveSpec,
    /// Directory under the root that is split into train/dev
    pub train_dir:    String,
    /// Directory under the root loaded as a held-out test set
    pub test_dir:     Option<String>,
    pub categories:   CategorySet,
    pub dev_ratio:    f64,
    pub decode:       DecodePolicy,
    /// Shuffle before the dev split; None keeps directory order
    pub shuffle_seed: Option<u64>,
    pub export_dir:   Option<String>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            root:         "data".to_string(),
            archive:      ArchiveSpec::default(),
            train_dir:    "20news-bydate-train".to_string(),
            test_dir:     None,
            categories:   CategorySet::default(),
            dev_ratio:    DEFAULT_DEV_RATIO,
            decode:       DecodePolicy::default(),
            shuffle_seed: None,
            export_dir:   None,
        }
    }
}

/// The datasets produced by one run.
#[derive(Debug, Clone)]
pub struct Splits {
    pub train: NewsDataset,
    pub dev:   NewsDataset,
    pub test:  Option<NewsDataset>,
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrepareConfig {
        &self.config
    }

    /// Run the pipeline, downloading over HTTP if needed.
    pub fn execute(&self) -> Result<Splits> {
        self.execute_with(&HttpFetcher::new())
    }

    /// Run the pipeline with an explicit archive fetcher.
    pub fn execute_with(&self, fetcher: &dyn ArchiveFetcher) -> Result<Splits> {
        let cfg = &self.config;

        // ── Step 1: Archive ───────────────────────────────────────────────────
        let data_root = ensure_extracted(Path::new(&cfg.root), &cfg.archive, fetcher)?;

        // ── Steps 2-3: Walk the train directory ───────────────────────────────
        let full = self.load_split(&data_root.join(&cfg.train_dir))?;
        tracing::info!("Train directory holds {} examples", full.len());

        // ── Step 4: Train / dev cut ───────────────────────────────────────────
        let (train, dev) = match cfg.shuffle_seed {
            Some(seed) => {
                tracing::info!("Shuffling with seed {} before the dev split", seed);
                full.shuffle_split_dev(cfg.dev_ratio, seed)?
            }
            None => full.split_dev(cfg.dev_ratio)?,
        };
        tracing::info!("Split: {} train / {} dev", train.len(), dev.len());

        // ── Step 5: Test directory ────────────────────────────────────────────
        let test = match &cfg.test_dir {
            Some(dir) => Some(self.load_split(&data_root.join(dir))?),
            None      => None,
        };

        let splits = Splits { train, dev, test };

        // ── Step 6: Export ────────────────────────────────────────────────────
        if let Some(dir) = &cfg.export_dir {
            SplitExporter::new(dir).export(&splits, cfg)?;
        }

        Ok(splits)
    }

    fn load_split(&self, split_dir: &Path) -> Result<NewsDataset> {
        let cfg    = &self.config;
        let walker = CorpusWalker::new(
            split_dir,
            cfg.categories.clone(),
            cfg.decode,
            TextCleaner::new(),
        );
        let examples = walker.load_all()?;
        NewsDataset::new(examples, walker.categories().clone())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{tar_gz, write_corpus, CountingFetcher};
    use std::fs;

    fn config(root: &Path) -> PrepareConfig {
        PrepareConfig {
            root: root.display().to_string(),
            ..PrepareConfig::default()
        }
    }

    /// 10 files per default category under root/20news-bydate-train
    fn seed_corpus(root: &Path) {
        let train = root.join("20news-bydate-train");
        for category in CategorySet::default().iter() {
            for i in 0..10 {
                let name = format!("{i:02}");
                let body = format!("Post {i} in {category}!");
                write_corpus(&train, &[(category, &name, body.as_bytes())]);
            }
        }
    }

    #[test]
    fn test_prepare_without_network_when_extracted() {
        let tmp = tempfile::tempdir().unwrap();
        seed_corpus(tmp.path());

        let fetcher = CountingFetcher::new(Vec::new());
        let splits  = PrepareUseCase::new(config(tmp.path()))
            .execute_with(&fetcher)
            .unwrap();

        assert_eq!(fetcher.calls(), 0);
        assert_eq!(splits.train.len(), 36);
        assert_eq!(splits.dev.len(), 4);
        assert!(splits.test.is_none());

        // no shuffle: the dev suffix is the tail of the last category
        assert!(splits
            .dev
            .examples()
            .iter()
            .all(|e| e.label == "soc.religion.christian"));
        assert_eq!(splits.dev.examples()[3].text, "post 9 in soc . religion . christian !");
    }

    #[test]
    fn test_prepare_downloads_archive_and_loads_test_dir() {
        let tmp   = tempfile::tempdir().unwrap();
        let bytes = tar_gz(&[
            ("20news-bydate-train/sci.med/1", b"Hello,  World!! It's great.".as_slice()),
            ("20news-bydate-test/sci.med/2", b"Doctor's note.".as_slice()),
        ]);

        let cfg = PrepareConfig {
            test_dir:   Some("20news-bydate-test".to_string()),
            categories: CategorySet::new(["sci.med"]).unwrap(),
            ..config(tmp.path())
        };

        let fetcher = CountingFetcher::new(bytes);
        let splits  = PrepareUseCase::new(cfg).execute_with(&fetcher).unwrap();

        assert_eq!(fetcher.calls(), 1);
        assert_eq!(splits.train.len(), 1);
        assert_eq!(splits.train.examples()[0].text, "hello , world ! ! it 's great .");
        assert!(splits.dev.is_empty());

        let test = splits.test.unwrap();
        assert_eq!(test.examples()[0].text, "doctor 's note .");
        assert_eq!(test.examples()[0].label, "sci.med");
    }

    #[test]
    fn test_prepare_with_seed_is_deterministic() {
        let tmp = tempfile::tempdir().unwrap();
        seed_corpus(tmp.path());

        let cfg = PrepareConfig {
            shuffle_seed: Some(7),
            ..config(tmp.path())
        };
        let fetcher = CountingFetcher::new(Vec::new());
        let a = PrepareUseCase::new(cfg.clone()).execute_with(&fetcher).unwrap();
        let b = PrepareUseCase::new(cfg).execute_with(&fetcher).unwrap();

        assert_eq!(a.dev.examples(), b.dev.examples());
        assert_eq!(a.dev.len(), 4);
    }

    #[test]
    fn test_prepare_exports_json() {
        let tmp = tempfile::tempdir().unwrap();
        seed_corpus(tmp.path());
        let out = tmp.path().join("out");

        let cfg = PrepareConfig {
            export_dir: Some(out.display().to_string()),
            ..config(tmp.path())
        };
        PrepareUseCase::new(cfg)
            .execute_with(&CountingFetcher::new(Vec::new()))
            .unwrap();

        assert!(out.join("train.json").is_file());
        assert!(out.join("dev.json").is_file());
        assert!(!out.join("test.json").exists());
        let saved = fs::read_to_string(out.join("prepare_config.json")).unwrap();
        assert!(saved.contains("\"dev_ratio\": 0.1"));
    }
}
