// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Pure Rust structs and traits that define what the system
// talks about: a loaded book file and the record extracted
// from it.
//
// Rules for this layer:
//   - NO file I/O
//   - NO text scanning logic (that lives in Layer 4)
//   - Only plain structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A book file loaded from disk, and the record extracted from it
pub mod book;

// Core abstractions (traits) that other layers implement
pub mod traits;
