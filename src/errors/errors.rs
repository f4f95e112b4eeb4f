use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    file: Rc<String>,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, file: Rc<String>, position: Option<Position>) -> Self {
        Error {
            internal_error: error_impl,
            file,
            position,
        }
    }

    /// Diagnostic for a `TokenKind::Error` token.
    pub fn from_token(token: &Token, file: Rc<String>) -> Self {
        Error::new(
            ErrorImpl::UnrecognisedCharacter {
                character: token.value.clone(),
            },
            file,
            Some(Position {
                line: token.line,
                column: token.column,
            }),
        )
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SourceNotFound => "SourceNotFound",
            ErrorImpl::SourceUnreadable { .. } => "SourceUnreadable",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SourceNotFound => ErrorTip::None,
            ErrorImpl::SourceUnreadable { reason } => ErrorTip::Suggestion(reason.clone()),
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "Unrecognised character: `{}`",
                character
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.internal_error {
            ErrorImpl::SourceNotFound => write!(f, "{} file not found.", self.file),
            other => write!(f, "{}: {}", self.file, other),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("source file not found")]
    SourceNotFound,
    #[error("failed to read source file: {reason}")]
    SourceUnreadable { reason: String },
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
}
