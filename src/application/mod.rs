// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data and infra layers to accomplish one
// goal per use case. No printing here (that's Layer 1) and
// no direct parsing or I/O logic (that's Layers 4 and 6).
//
// Reference: Rust Book §7 (Module System)

// Download, walk, clean, split and optionally export the corpus
pub mod prepare_use_case;

// Clean a single string or file
pub mod clean_use_case;
