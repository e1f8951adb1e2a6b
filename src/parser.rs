/// Converting token streams into clauses.

use arith::ArithOp;
use ast::*;
use error::*;
use tok::{Tok, Token};

use std::iter::Iterator;
use std::str::FromStr;

/// The most operators one argument expression may chain. Terms are trees, so
/// this also bounds how deep dropping, printing or evaluating one recurses.
pub const MAX_EXPR_OPERATORS: usize = 512;

/// Adapts an `Iterator` over `Token`s to an iterator over `Clause`s.
///
/// Parsing stops at the first error, lexical or syntactic; after yielding it
/// the parser yields nothing more.
pub struct Parser<I: Iterator<Item = Result<Token>>> {
    tokens: I,
    peeked: Option<Token>,
    failed: bool
}

impl<I: Iterator<Item = Result<Token>>> Parser<I> {
    pub fn new(tokens: I) -> Self {
        Parser { tokens: tokens, peeked: None, failed: false }
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        match self.peeked.take() {
            Some(t) => Ok(Some(t)),
            None => self.tokens.next().map_or(Ok(None), |r| r.map(Some))
        }
    }

    fn peek_tok(&mut self) -> Result<Option<&Tok>> {
        if self.peeked.is_none() {
            self.peeked = self.next_token()?;
        }
        Ok(self.peeked.as_ref().map(|t| &t.tok))
    }

    // Like `next_token`, but running out of input is a syntax error.
    fn expect_token(&mut self) -> Result<Token> {
        self.next_token()?.ok_or(Error::Parser { token: None })
    }

    fn expect(&mut self, tok: Tok) -> Result<Token> {
        let token = self.expect_token()?;
        if token.tok == tok {
            Ok(token)
        } else {
            Err(unexpected(token))
        }
    }

    fn expect_ident(&mut self) -> Result<String> {
        let token = self.expect_token()?;
        match token.tok {
            Tok::Ident(name) => Ok(name),
            _ => Err(unexpected(token))
        }
    }

    // declaration | fact | rule | query, given its first token.
    fn parse_clause(&mut self, first: Token) -> Result<Clause> {
        match first.tok {
            Tok::Query => {
                let name = self.expect_ident()?;
                let args = self.parse_args()?;
                self.expect(Tok::Dot)?;
                Ok(Clause::Query(Query { name, args }))
            },
            Tok::Not => {
                let name = self.expect_ident()?;
                let literal = self.parse_literal(Sign::Negative, name)?;
                self.finish_fact_or_rule(literal)
            },
            Tok::Ident(name) => {
                if let Some(&Tok::Number(_)) = self.peek_tok()? {
                    let arity = parse_number(self.expect_token()?)?;
                    self.expect(Tok::Dot)?;
                    return Ok(Clause::Declaration(Declaration { name, arity }));
                }
                let literal = self.parse_literal(Sign::Positive, name)?;
                self.finish_fact_or_rule(literal)
            },
            _ => Err(unexpected(first))
        }
    }

    fn finish_fact_or_rule(&mut self, literal: Literal) -> Result<Clause> {
        let token = self.expect_token()?;
        match token.tok {
            Tok::Dot => Ok(Clause::Fact(literal)),
            Tok::Means => {
                let antecedents = self.parse_antecedents()?;
                self.expect(Tok::Dot)?;
                Ok(Clause::Rule(Rule { consequent: literal, antecedents }))
            },
            _ => Err(unexpected(token))
        }
    }

    // predicate (',' predicate)*, in source order.
    fn parse_antecedents(&mut self) -> Result<Vec<Literal>> {
        let mut antecedents = vec!(self.parse_predicate()?);
        while let Some(&Tok::Comma) = self.peek_tok()? {
            self.next_token()?;
            antecedents.push(self.parse_predicate()?);
        }
        Ok(antecedents)
    }

    // [NOT] IDENT '(' params ')'
    fn parse_predicate(&mut self) -> Result<Literal> {
        let token = self.expect_token()?;
        match token.tok {
            Tok::Not => {
                let name = self.expect_ident()?;
                self.parse_literal(Sign::Negative, name)
            },
            Tok::Ident(name) => self.parse_literal(Sign::Positive, name),
            _ => Err(unexpected(token))
        }
    }

    fn parse_literal(&mut self, sign: Sign, name: String) -> Result<Literal> {
        let args = self.parse_args()?;
        Ok(Literal { sign, name, args })
    }

    // '(' params ')'
    fn parse_args(&mut self) -> Result<Vec<Term>> {
        self.expect(Tok::OpenParen)?;
        let mut args = vec!(self.parse_expr()?);
        loop {
            let token = self.expect_token()?;
            match token.tok {
                Tok::Comma => args.push(self.parse_expr()?),
                Tok::CloseParen => return Ok(args),
                _ => return Err(unexpected(token))
            }
        }
    }

    // Every operator shares one precedence level and associates to the left.
    fn parse_expr(&mut self) -> Result<Term> {
        let mut left = self.parse_operand()?;
        let mut operators = 0;
        loop {
            let op = match self.peek_tok()? {
                Some(tok) => match ArithOp::from_tok(tok) {
                    Some(op) => op,
                    None => break
                },
                None => break
            };
            let token = self.expect_token()?;
            operators += 1;
            if operators > MAX_EXPR_OPERATORS {
                return Err(Error::ExprTooDeep { token });
            }
            let right = self.parse_operand()?;
            left = Term::binop(op, left, right);
        }
        Ok(left)
    }

    fn parse_operand(&mut self) -> Result<Term> {
        let token = self.expect_token()?;
        match token.tok {
            Tok::Variable(v) => Ok(Term::Var(v)),
            Tok::Number(_) => parse_number(token).map(Term::Int),
            _ => Err(unexpected(token))
        }
    }
}

fn unexpected(token: Token) -> Error {
    Error::Parser { token: Some(token) }
}

// A literal too large for the target type is a syntax error at that token.
fn parse_number<T: FromStr>(token: Token) -> Result<T> {
    let parsed = match token.tok {
        Tok::Number(ref digits) => digits.parse().ok(),
        _ => None
    };
    parsed.ok_or_else(|| unexpected(token))
}

impl<I: Iterator<Item = Result<Token>>> Iterator for Parser<I> {
    type Item = Result<Clause>;

    fn next(&mut self) -> Option<Result<Clause>> {
        if self.failed {
            return None;
        }
        let clause = match self.next_token() {
            Ok(None) => return None,
            Ok(Some(first)) => self.parse_clause(first),
            Err(e) => Err(e)
        };
        if clause.is_err() {
            self.failed = true;
        }
        Some(clause)
    }
}
