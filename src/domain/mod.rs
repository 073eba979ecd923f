// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits describing the corpus:
// what a raw document is, what a labelled example is, which
// categories exist, and the seams other layers implement.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O or network calls
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A raw newsgroup posting read from disk
pub mod document;

// A cleaned (text, label) pair
pub mod example;

// The configured list of category labels
pub mod category;

// Core abstractions (traits) that other layers implement
pub mod traits;
