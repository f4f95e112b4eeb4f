#![allow(clippy::module_inception)]

use std::{fs, io, path::Path, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::lexer::is_whitespace,
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

extern crate regex;

/// 1-based line and column inside a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

pub fn load_source(path: &Path) -> Result<String, Error> {
    let file = Rc::new(path.to_string_lossy().into_owned());

    fs::read_to_string(path).map_err(|error| {
        let error_impl = match error.kind() {
            io::ErrorKind::NotFound => ErrorImpl::SourceNotFound,
            _ => ErrorImpl::SourceUnreadable {
                reason: error.to_string(),
            },
        };
        Error::new(error_impl, file, None)
    })
}

pub fn get_line(source: &str, line_number: usize) -> Option<&str> {
    source
        .split('\n')
        .nth(line_number.checked_sub(1)?)
        .map(|line| line.trim_end_matches('\r'))
}

pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: UnrecognisedCharacter (Unrecognised character: `@`)
        -> input.c:3:7
          |
        3 | int a @ b;
          | ------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let Some(position) = error.get_position() else {
        out.push_str(&format!("-> {}\n", error.get_file()));
        return out;
    };

    out.push_str(&format!(
        "-> {}:{}:{}\n",
        error.get_file(),
        position.line,
        position.column
    ));

    let Some(line_text) = get_line(source, position.line) else {
        return out;
    };

    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end_matches(is_whitespace)));

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches(is_whitespace);
    let removed = string[..string.len() - trimmed.len()].chars().count();

    (trimmed, removed)
}
