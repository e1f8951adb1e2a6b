use pos::Pos;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Tok {
    OpenParen,
    CloseParen,
    Not,
    Variable(String),
    Number(String),
    Dot,
    Means,
    Ident(String),
    Comma,
    Plus,
    Minus,
    Times,
    Mod,
    Query
}

impl Tok {
    /// The source text this token was lexed from.
    pub fn text(&self) -> &str {
        match self {
            Tok::OpenParen => "(",
            Tok::CloseParen => ")",
            Tok::Not => "not",
            Tok::Variable(s) | Tok::Number(s) | Tok::Ident(s) => s.as_str(),
            Tok::Dot => ".",
            Tok::Means => ":-",
            Tok::Comma => ",",
            Tok::Plus => "+",
            Tok::Minus => "-",
            Tok::Times => "*",
            Tok::Mod => "%",
            Tok::Query => "?"
        }
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// A `Tok` together with where it started.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub tok: Tok,
    pub pos: Pos
}

impl Token {
    pub fn new(tok: Tok, pos: Pos) -> Self {
        Token { tok, pos }
    }

    pub fn line(&self) -> usize {
        self.pos.line
    }
}
