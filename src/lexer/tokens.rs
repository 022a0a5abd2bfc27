use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Location;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("var", TokenKind::Var);
        map.insert("return", TokenKind::Return);
        map
    };

    pub static ref PUNCTUATION_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map.insert('{', TokenKind::OpenCurly);
        map.insert('}', TokenKind::CloseCurly);
        map.insert('[', TokenKind::OpenBracket);
        map.insert(']', TokenKind::CloseBracket);
        map.insert('<', TokenKind::Less);
        map.insert('>', TokenKind::Greater);
        map.insert(';', TokenKind::Semicolon);
        map.insert(',', TokenKind::Comma);
        map.insert('=', TokenKind::Assignment);
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Dash);
        map.insert('*', TokenKind::Star);
        map.insert('/', TokenKind::Slash);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Less,    // <
    Greater, // >

    Semicolon,
    Comma,
    Assignment, // =

    Plus,
    Dash,
    Star,
    Slash,

    /// Any other single character, carried in the token's value
    Other,

    // Reserved
    Def,
    Var,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub location: Location,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "end of input"),
            TokenKind::Identifier => write!(f, "identifier `{}`", self.value),
            TokenKind::Number => write!(f, "number `{}`", self.value),
            _ => write!(f, "`{}`", self.value),
        }
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// Renders the token as `Kind (value) @location`, used by `toyc --tokens`.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Number, TokenKind::Other]) {
            format!("{} ({}) @{}", self.kind, self.value, self.location)
        } else {
            format!("{} () @{}", self.kind, self.location)
        }
    }
}
