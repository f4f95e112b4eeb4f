use crate::lexer::tokens::{Token, TokenKind};

const RULE: &str = "------------------------------------------------------------------------";

pub fn render_table(tokens: &[Token]) -> String {
    let mut out = String::from("\n--- Tokenization Results ---\n");

    out.push_str(&format!("Total Tokens: {}\n", tokens.len()));
    out.push_str(&format!("{}\n", RULE));
    out.push_str("| Line | Column |           Type            |           Value          |\n");
    out.push_str(&format!("{}\n", RULE));

    for token in tokens {
        out.push_str(&format!(
            "| {:<4} | {:<6} | {:<25} | {:<14} |\n",
            token.line, token.column, token.kind, token.value
        ));
    }

    out.push_str(&format!("{}\n", RULE));
    out
}

/// Token counts per kind, in the order each kind first appears.
pub fn summarize(tokens: &[Token]) -> Vec<(TokenKind, usize)> {
    let mut counts: Vec<(TokenKind, usize)> = vec![];

    for token in tokens {
        match counts.iter_mut().find(|(kind, _)| *kind == token.kind) {
            Some((_, count)) => *count += 1,
            None => counts.push((token.kind, 1)),
        }
    }

    counts
}

pub fn render_summary(tokens: &[Token]) -> String {
    let mut out = String::from("\n--- Token Type Summary ---\n");

    for (kind, count) in summarize(tokens) {
        out.push_str(&format!("{:<25}: {}\n", kind, count));
    }

    out
}
