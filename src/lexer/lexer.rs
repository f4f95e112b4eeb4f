use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{MK_PATTERN, MK_TOKEN};

use super::tokens::{Token, TokenKind, KEYWORDS};

/// Called with the kind of the winning pattern and the byte length of its match.
pub type RegexHandler = fn(&mut Lexer<'_>, TokenKind, usize);

#[derive(Clone)]
pub struct RegexPattern {
    pub regex: Regex,
    pub kind: TokenKind,
    pub handler: RegexHandler,
}

lazy_static! {
    // \s plus the ASCII separators U+001C..U+001F
    static ref WHITESPACE: Regex = Regex::new(r"^[\s\x1c-\x1f]+").expect("invalid whitespace pattern");

    /// Tried top to bottom at every cursor position; the first match wins.
    pub static ref PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!(r#"#[\s\x1c-\x1f]*include[\s\x1c-\x1f]*(<[^>]+>|"[^"]+")"#, TokenKind::Preprocessor),

        MK_PATTERN!(r"//.*", TokenKind::Comment),
        MK_PATTERN!(r"/\*.*?\*/", TokenKind::Comment, dot_all),

        MK_PATTERN!(r#""[^"]*""#, TokenKind::StringLiteral),

        // floats before integers so `3.14` stays whole
        MK_PATTERN!(r"\d+\.\d+([eE][+-]?\d+)?", TokenKind::FloatLiteral),
        MK_PATTERN!(r"0[xX][0-9a-fA-F]+|0[0-7]+|\d+", TokenKind::IntegerLiteral),

        MK_PATTERN!(r"[a-zA-Z_][a-zA-Z0-9_]*", TokenKind::Identifier, symbol_handler),

        // alternation is leftmost-first, so longer forms are listed first
        MK_PATTERN!(r"<<=|>>=|\+\+|--|\+=|-=|\*=|/=|%=|&=|\|=|\^=|\+|-|\*|/|%", TokenKind::ArithmeticOp),
        MK_PATTERN!(r"<<|>>", TokenKind::BitwiseOp),
        MK_PATTERN!(r"==|!=|<=|>=|<|>", TokenKind::RelationalOp),
        MK_PATTERN!(r"&&|\|\||!", TokenKind::LogicalOp),
        MK_PATTERN!(r"&|\||\^|~", TokenKind::BitwiseOp),

        MK_PATTERN!(r"[{}\[\]();,.]", TokenKind::Punctuator),

        MK_PATTERN!(r"=", TokenKind::ArithmeticOp),
    ];
}

/// Characters the scanner skips between tokens.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Scan state for a single physical line.
pub struct Lexer<'a> {
    line: &'a str,
    line_number: usize,
    pos: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str, line_number: usize) -> Lexer<'a> {
        Lexer {
            line,
            line_number,
            pos: 0,
            column: 0,
            tokens: vec![],
        }
    }

    /// Moves the cursor `n` bytes forward; `n` must end on a char boundary.
    pub fn advance_n(&mut self, n: usize) {
        self.column += self.line[self.pos..self.pos + n].chars().count();
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.line[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.line.len()
    }

    fn emit(&mut self, kind: TokenKind, len: usize) {
        let value = self.remainder()[..len].to_string();
        self.push(MK_TOKEN!(kind, value, self.line_number, self.column + 1));
        self.advance_n(len);
    }
}

pub fn default_handler(lexer: &mut Lexer<'_>, kind: TokenKind, len: usize) {
    lexer.emit(kind, len);
}

fn symbol_handler(lexer: &mut Lexer<'_>, kind: TokenKind, len: usize) {
    let kind = if KEYWORDS.contains(&lexer.remainder()[..len]) {
        TokenKind::Keyword
    } else {
        kind
    };

    lexer.emit(kind, len);
}

fn error_handler(lexer: &mut Lexer<'_>) {
    let Some(character) = lexer.at() else {
        return;
    };

    trace!(
        line = lexer.line_number,
        column = lexer.column + 1,
        "unrecognised character {:?}",
        character
    );
    lexer.emit(TokenKind::Error, character.len_utf8());
}

/// Scans one line; the returned tokens are in column order.
pub fn scan_line(line: &str, line_number: usize) -> Vec<Token> {
    let mut lex = Lexer::new(line, line_number);

    while !lex.at_eof() {
        if let Some(skipped) = WHITESPACE.find(lex.remainder()) {
            lex.advance_n(skipped.end());
            continue;
        }

        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(lex.remainder()) {
                (pattern.handler)(&mut lex, pattern.kind, found.end());
                matched = true;
                break;
            }
        }

        if !matched {
            error_handler(&mut lex);
        }
    }

    lex.tokens
}

/// Tokenizes `source` line by line. Never fails: characters no pattern
/// accepts come back as one-character `TokenKind::Error` tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = vec![];
    let mut lines = 0;

    for (index, line) in source.split('\n').enumerate() {
        tokens.extend(scan_line(line, index + 1));
        lines += 1;
    }

    debug!(lines, tokens = tokens.len(), "tokenized source");
    tokens
}
