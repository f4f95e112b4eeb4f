use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for keyword in [
            "int", "float", "double", "char", "void", "return", "if", "else",
            "while", "for", "do", "switch", "case", "break", "continue",
            "default", "struct", "enum", "static", "const", "printf",
            "auto", "extern", "goto",
        ] {
            set.insert(keyword);
        }
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,

    StringLiteral,
    IntegerLiteral,
    FloatLiteral,

    ArithmeticOp, // + - * / % ++ -- and every assignment form
    RelationalOp,
    LogicalOp,
    BitwiseOp,

    Punctuator,
    Preprocessor,
    Comment,

    Error,
}

impl TokenKind {
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::ArithmeticOp => "ARITHMETIC_OP",
            TokenKind::RelationalOp => "RELATIONAL_OP",
            TokenKind::LogicalOp => "LOGICAL_OP",
            TokenKind::BitwiseOp => "BITWISE_OP",
            TokenKind::Punctuator => "PUNCTUATOR",
            TokenKind::Preprocessor => "PREPROCESSOR",
            TokenKind::Comment => "COMMENT",
            TokenKind::Error => "ERROR",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token({}, '{}', Line: {}, Column: {})",
            self.kind, self.value, self.line, self.column
        )
    }
}

impl Token {
    /// Column just past the last character of this token.
    pub fn end_column(&self) -> usize {
        self.column + self.value.chars().count()
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}
