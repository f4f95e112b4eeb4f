//! Unit tests for the report module.

use crate::lexer::{lexer::tokenize, tokens::TokenKind};

use super::report::{render_summary, render_table, summarize};

#[test]
fn test_summarize_in_first_seen_order() {
    let tokens = tokenize("int x = 5;\nint y = x @ 2;");

    assert_eq!(
        summarize(&tokens),
        vec![
            (TokenKind::Keyword, 2),
            (TokenKind::Identifier, 3),
            (TokenKind::ArithmeticOp, 2),
            (TokenKind::IntegerLiteral, 2),
            (TokenKind::Punctuator, 2),
            (TokenKind::Error, 1),
        ]
    );
}

#[test]
fn test_summarize_empty() {
    assert!(summarize(&[]).is_empty());
}

#[test]
fn test_render_table() {
    let table = render_table(&tokenize("x;"));
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "--- Tokenization Results ---");
    assert_eq!(lines[2], "Total Tokens: 2");
    assert_eq!(
        lines[4],
        "| Line | Column |           Type            |           Value          |"
    );
    assert_eq!(
        lines[6],
        "| 1    | 1      | IDENTIFIER                | x              |"
    );
    assert_eq!(
        lines[7],
        "| 1    | 2      | PUNCTUATOR                | ;              |"
    );
    assert_eq!(lines[8], lines[3]);
    assert_eq!(lines.len(), 9);
}

#[test]
fn test_render_summary() {
    let summary = render_summary(&tokenize("a b 1"));

    assert_eq!(
        summary,
        "\n--- Token Type Summary ---\n\
         IDENTIFIER               : 2\n\
         INTEGER_LITERAL          : 1\n"
    );
}
