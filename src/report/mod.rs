//! Presentation of tokenizer output.
//!
//! Read-only consumers of a token slice: the results table and the
//! per-category summary printed by the `clex` binary.

pub mod report;

#[cfg(test)]
mod tests;
