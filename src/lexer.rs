/// Converting character streams into token streams.

use error::*;
use pos::Pos;
use tok::{Tok, Token};

use std::iter::Iterator;

#[derive(Debug)]
enum Buffer {
    Uninitialized,
    EOF,
    Lexing(char)
}

/// Adapts an `Iterator` over `char`s to an iterator over `Token`s.
///
/// The first illegal character ends the stream: it is reported once and
/// every later call to `next` returns `None`.
pub struct Lexer<I: Iterator<Item = char>> {
    current: Buffer,
    chars: I,
    pos: Pos,
    failed: bool
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn new(chars: I) -> Self {
        Lexer {
            chars: chars,
            current: Buffer::Uninitialized,
            pos: Pos::new(),
            failed: false
        }
    }

    fn peek(&mut self) -> Option<char> {
        match self.current {
            Buffer::Uninitialized => self.next_char(),
            Buffer::EOF => None,
            Buffer::Lexing(c) => Some(c)
        }
    }

    fn next_char(&mut self) -> Option<char> {
        self.chars.next().map(|c| {
            self.current = Buffer::Lexing(c);
            c
        }).or_else(|| {
            self.current = Buffer::EOF;
            None
        })
    }

    // Step past the current character, keeping `pos` in sync.
    fn bump(&mut self) -> Option<char> {
        if let Buffer::Lexing(c) = self.current {
            if c == '\n' {
                self.pos.next_line();
            } else {
                self.pos.next_char();
            }
        }
        self.next_char()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().map(|c| c == ' ' || c == '\t' || c == '\n')
                         .unwrap_or(false) {
            self.bump();
        }
    }

    fn lex_run<F: Fn(char) -> bool>(&mut self, accept: F) -> String {
        let mut result = String::new();

        while let Some(c) = self.peek().filter(|c| accept(*c)) {
            result.push(c);
            self.bump();
        }
        result
    }

    fn lex_ident(&mut self) -> Tok {
        let ident = self.lex_run(|c| c.is_ascii_alphanumeric() || c == '_');
        if ident == "not" {
            Tok::Not
        } else {
            Tok::Ident(ident)
        }
    }

    fn single(&mut self, tok: Tok) -> Tok {
        self.bump();
        tok
    }

    fn illegal(&mut self, chr: char, pos: Pos) -> Error {
        self.failed = true;
        Error::Lexer { chr, pos }
    }
}

impl<I: Iterator<Item = char>> Iterator for Lexer<I> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        if self.failed {
            return None;
        }
        self.skip_whitespace();
        let start = self.pos;
        let c = self.peek()?;
        let tok = match c {
            '(' => self.single(Tok::OpenParen),
            ')' => self.single(Tok::CloseParen),
            '.' => self.single(Tok::Dot),
            ',' => self.single(Tok::Comma),
            '?' => self.single(Tok::Query),
            '+' => self.single(Tok::Plus),
            '-' => self.single(Tok::Minus),
            '*' => self.single(Tok::Times),
            '%' => self.single(Tok::Mod),
            ':' => {
                match self.bump() {
                    Some('-') => self.single(Tok::Means),
                    _ => return Some(Err(self.illegal(':', start)))
                }
            },
            c if c.is_ascii_lowercase() => self.lex_ident(),
            c if c.is_ascii_uppercase() => Tok::Variable(
                self.lex_run(|c| c.is_ascii_alphanumeric() || c == '_')),
            c if c.is_ascii_digit() => Tok::Number(
                self.lex_run(|c| c.is_ascii_digit())),
            c => return Some(Err(self.illegal(c, start)))
        };
        Some(Ok(Token::new(tok, start)))
    }
}
