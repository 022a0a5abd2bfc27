use std::{fs, path::Path, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Location, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, PUNCTUATION_LOOKUP, RESERVED_LOOKUP};

/// Consumes the matched text and returns the token it forms, or `None` when
/// the text is skipped (whitespace, comments).
pub type RegexHandler = fn(&mut Lexer, String, Location) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9.]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^#[^\\n\\r]*").unwrap(), handler: skip_handler },
    ];
}

/// Pull-based tokenizer. Exactly one token is buffered at a time; the next
/// one is only scanned when `advance` is called.
pub struct Lexer {
    source: String,
    /// Byte offset of the next unread character
    pos: usize,
    line: usize,
    /// Characters consumed on the current line
    column: usize,
    file: Rc<String>,
    current: Token,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<stdin>"))
        };

        let mut lexer = Lexer {
            source,
            pos: 0,
            line: 1,
            column: 0,
            current: MK_TOKEN!(TokenKind::EOF, String::new(), Location::null()),
            file: file_name,
        };
        lexer.current = lexer.lex_token();
        lexer
    }

    /// Reads the whole of `path` into a new lexer.
    pub fn open(path: &Path) -> Result<Lexer, Error> {
        let file_name = path.display().to_string();

        match fs::read_to_string(path) {
            Ok(source) => Ok(Lexer::new(source, Some(file_name))),
            Err(err) => Err(Error::new(
                ErrorImpl::FileOpen {
                    path: file_name.clone(),
                    reason: err.to_string(),
                },
                Location::new(Rc::new(file_name), 0, 0),
            )),
        }
    }

    /// Returns the buffered token.
    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Discards the buffered token and scans the next one. Once the end of
    /// input is reached the EOF token stays buffered.
    pub fn advance(&mut self) {
        if self.current.kind != TokenKind::EOF {
            self.current = self.lex_token();
        }
    }

    /// Location at which the buffered token starts.
    pub fn location(&self) -> Location {
        self.current.location.clone()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn here(&self) -> Location {
        Location::new(Rc::clone(&self.file), self.line, self.column + 1)
    }

    fn consume(&mut self, text: &str) {
        for c in text.chars() {
            self.pos += c.len_utf8();
            self.column += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            }
        }
    }

    fn lex_token(&mut self) -> Token {
        'scan: loop {
            let location = self.here();
            let Some(c) = self.source[self.pos..].chars().next() else {
                return MK_TOKEN!(TokenKind::EOF, String::new(), location);
            };

            for pattern in PATTERNS.iter() {
                let matched = pattern
                    .regex
                    .find(&self.source[self.pos..])
                    .map(|m| m.as_str().to_string());

                if let Some(matched) = matched {
                    match (pattern.handler)(self, matched, location.clone()) {
                        Some(token) => {
                            trace!(token = %token.debug(), "lexed");
                            return token;
                        }
                        None => continue 'scan,
                    }
                }
            }

            let kind = PUNCTUATION_LOOKUP
                .get(&c)
                .copied()
                .unwrap_or(TokenKind::Other);
            let value = c.to_string();
            self.consume(&value);

            let token = MK_TOKEN!(kind, value, location);
            trace!(token = %token.debug(), "lexed");
            return token;
        }
    }
}

fn skip_handler(lexer: &mut Lexer, matched: String, _location: Location) -> Option<Token> {
    lexer.consume(&matched);
    None
}

fn number_handler(lexer: &mut Lexer, matched: String, location: Location) -> Option<Token> {
    lexer.consume(&matched);
    Some(MK_TOKEN!(TokenKind::Number, matched, location))
}

fn symbol_handler(lexer: &mut Lexer, matched: String, location: Location) -> Option<Token> {
    lexer.consume(&matched);

    if let Some(kind) = RESERVED_LOOKUP.get(matched.as_str()) {
        Some(MK_TOKEN!(*kind, matched, location))
    } else {
        Some(MK_TOKEN!(TokenKind::Identifier, matched, location))
    }
}

/// Drains a fresh lexer over `source`, EOF token included.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.current().clone();
        let at_end = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_end {
            return tokens;
        }
        lex.advance();
    }
}
