// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the archive URL and an in-memory dataset.
//
//   20news-bydate.tar.gz
//       │
//       ▼
//   archive        → download (via ArchiveFetcher) + extract
//       │
//       ▼
//   corpus         → walk category dirs, read files
//       │            decode bytes (decode::DecodePolicy)
//       │            clean text  (cleaner::TextCleaner)
//       ▼
//   dataset        → NewsDataset, implements Burn's Dataset trait
//       │
//       ▼
//   splitter       → train prefix / dev suffix
//
// Reference: Burn Book §4 (Datasets)
//            Rust Book §13 (Iterators and Closures)

/// Downloads and extracts the corpus archive
pub mod archive;

/// Regex-based text cleaning and tokenisation
pub mod cleaner;

/// UTF-8 decoding policy for malformed bytes
pub mod decode;

/// Walks category directories and builds labelled examples
pub mod corpus;

/// Implements Burn's Dataset trait for newsgroup examples
pub mod dataset;

/// Cuts datasets into train/dev
pub mod splitter;

#[cfg(test)]
pub mod fixtures;
