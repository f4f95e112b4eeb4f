//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts C-like source text
//! into an ordered stream of classified tokens. It handles:
//!
//! - A static, priority-ordered table of regex patterns
//! - Keyword reclassification of identifier-shaped matches
//! - Line and column tracking (1-based, per line)
//! - Single-character error tokens for unrecognised input

pub mod lexer;
pub mod tokens;
