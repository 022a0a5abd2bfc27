#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path, rc::Rc};

use crate::{
    ast::ast::ModuleAST,
    config::ParserConfig,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Lexer,
    parser::parser::parse,
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A point in a source file. Columns start at 1 for the first character of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: Rc<String>,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(file: Rc<String>, line: usize, column: usize) -> Self {
        Location { file, line, column }
    }

    pub fn null() -> Self {
        Location::new(Rc::new(String::from("<null>")), 0, 0)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.file, self.line, self.column)
    }
}

/// Parses in-memory source text into a module.
pub fn parse_source(
    source: String,
    file: Option<String>,
    config: ParserConfig,
) -> Result<ModuleAST, Error> {
    parse(Lexer::new(source, file), config)
}

/// Opens `path` and parses it into a module.
pub fn parse_file(path: &Path, config: ParserConfig) -> Result<ModuleAST, Error> {
    parse(Lexer::open(path)?, config)
}

/// Returns the 1-based line `line` of `source`, without its line terminator.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.trim_end_matches('\r'))
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedToken (expected `)`, found `{`)
        -> main.toy 1:8
          |
        1 | def f( { }
          |        ^
    */

    let location = error.get_location();
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
    out.push_str(&format!(
        "-> {} {}:{}\n",
        location.file, location.line, location.column
    ));

    let Some(line_text) = get_line(source, location.line) else {
        return out;
    };

    let line_string = location.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = location
        .column
        .saturating_sub(removed_whitespace)
        .max(1);

    out.push_str(&format!("{:>padding$} {:>arrows$}", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Location,
    };

    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }\n";
        assert_eq!(super::get_line(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line(source, 2), Some("second"));
        assert_eq!(super::get_line(source, 3), Some(""));
        assert_eq!(super::get_line(source, 4), Some("Testing { }"));
        assert_eq!(super::get_line(source, 0), None);
    }

    #[test]
    fn test_location_display() {
        let location = Location::new(Rc::new("main.toy".to_string()), 3, 14);
        assert_eq!(location.to_string(), "main.toy 3:14");
    }

    #[test]
    fn test_render_error_points_at_column() {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: "`)`".to_string(),
                found: "`{`".to_string(),
            },
            Location::new(Rc::new("main.toy".to_string()), 1, 8),
        );
        let rendered = super::render_error(&error, "def f( { }\n");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedToken (expected `)`, found `{`)");
        assert_eq!(lines[1], "-> main.toy 1:8");
        assert_eq!(lines[3], "1 | def f( { }");
        assert_eq!(lines[4], "  |        ^");
    }

    #[test]
    fn test_render_error_strips_indentation() {
        let error = Error::new(
            ErrorImpl::NumberParseError {
                token: "1.2.3".to_string(),
            },
            Location::new(Rc::new("main.toy".to_string()), 2, 11),
        );
        let rendered = super::render_error(&error, "def f() {\n  var a = 1.2.3;\n}\n");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "2 | var a = 1.2.3;");
        assert_eq!(lines[4], "  |         ^");
    }
}
