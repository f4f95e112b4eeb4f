//! Error types and error handling.
//!
//! The tokenizer itself never fails; these errors cover loading source
//! files and turning error tokens into user-facing diagnostics.
//!
//! - Error structures with source name and optional position
//! - Specific error variants for loading and scanning
//! - Helpful error messages and suggestions

pub mod errors;
