// ============================================================
// Layer 6: Infrastructure Layer
// ============================================================
// Cross-cutting output concerns that don't belong in the data
// pipeline or the analysis:
//
//   record_writer.rs  Serialises records as a JSON array or as
//                     CSV, to stdout or to a file.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// JSON / CSV record output
pub mod record_writer;
