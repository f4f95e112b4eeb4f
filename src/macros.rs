//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an entry of the pattern table
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The matched text
/// * `$line` - 1-based line number
/// * `$column` - 1-based column of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, "42".to_string(), 1, 9);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr, $column:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            line: $line,
            column: $column,
        }
    };
}

/// Creates a pattern table entry.
///
/// The regex is anchored at the scan cursor by prefixing `^`. An optional
/// trailing `dot_all` turns on the dot-matches-newline mode, and an
/// optional handler replaces `default_handler`.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(r"/\*.*?\*/", TokenKind::Comment, dot_all)
/// MK_PATTERN!(r"[a-zA-Z_][a-zA-Z0-9_]*", TokenKind::Identifier, symbol_handler)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    (@build $pattern:literal, $kind:expr, $dot_all:expr, $handler:expr) => {
        $crate::lexer::lexer::RegexPattern {
            regex: ::regex::RegexBuilder::new(&format!("^(?:{})", $pattern))
                .dot_matches_new_line($dot_all)
                .build()
                .expect(concat!("invalid token pattern: ", $pattern)),
            kind: $kind,
            handler: $handler,
        }
    };
    ($pattern:literal, $kind:expr) => {
        $crate::MK_PATTERN!(@build $pattern, $kind, false, $crate::lexer::lexer::default_handler)
    };
    ($pattern:literal, $kind:expr, dot_all) => {
        $crate::MK_PATTERN!(@build $pattern, $kind, true, $crate::lexer::lexer::default_handler)
    };
    ($pattern:literal, $kind:expr, $handler:ident) => {
        $crate::MK_PATTERN!(@build $pattern, $kind, false, $handler)
    };
}
