// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that touch the outside world:
//
//   downloader.rs — HttpFetcher, the network-backed
//                   ArchiveFetcher (reqwest + indicatif)
//
//   export.rs     — writes prepared splits, label counts
//                   and the run config to a directory
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Blocking HTTP download of the corpus archive
pub mod downloader;

/// JSON / CSV export of prepared splits
pub mod export;
