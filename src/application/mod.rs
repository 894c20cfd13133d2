// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal per command (extracting records, or reporting on them).
//
// Rules for this layer:
//   - No text scanning here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Directory → records → JSON/CSV
pub mod extract_use_case;

// Directory → records → CorpusReport
pub mod report_use_case;
