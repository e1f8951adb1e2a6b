use pos::Pos;
use tok::Token;

use serde_json;

use std::error;
use std::fmt;
use std::io;
use std::result;

/// Errors prolame can encounter.
#[derive(Debug)]
pub enum Error {
    /// An IO operation failed.
    Stream(io::Error),
    /// The lexer hit a character no token starts with.
    Lexer { chr: char, pos: Pos },
    /// The parser could not reduce the token stream. `None` means the input
    /// ended in the middle of a clause.
    Parser { token: Option<Token> },
    /// An argument expression chains more operators than the parser accepts.
    /// `token` is the first operator past the limit.
    ExprTooDeep { token: Token },
    /// Evaluating an arithmetic term failed.
    Arithmetic(String),
    /// A program store could not be converted to or from JSON.
    Json(serde_json::Error)
}

/// Custom result type for prolame.
pub type Result<T> = result::Result<T, Error>;

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Stream(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Lexer { .. } => None,
            Error::Parser { .. } => None,
            Error::ExprTooDeep { .. } => None,
            Error::Arithmetic(_) => None
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Stream(e) => write!(f, "stream read failed: {}", e),
            Error::Lexer { chr, pos } =>
                write!(f, "Illegal character '{}' at line {}", chr, pos.line),
            Error::Parser { token: Some(t) } =>
                write!(f, "Syntax error at token '{}' on line {}", t.tok, t.line()),
            Error::Parser { token: None } => write!(f, "Syntax error at EOF"),
            Error::ExprTooDeep { token } =>
                write!(f, "Expression too deep at token '{}' on line {}",
                       token.tok, token.line()),
            Error::Arithmetic(s) => write!(f, "arithmetic error: {}", s),
            Error::Json(e) => write!(f, "json error: {}", e)
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Stream(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
