/// The fixed table of arithmetic operators and their integer semantics.

use ast::Term;
use error::*;
use tok::Tok;

use std::collections::HashMap;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Mod
}

pub static OPERATORS: [ArithOp; 4] =
    [ArithOp::Add, ArithOp::Sub, ArithOp::Mul, ArithOp::Mod];

/// Look an operator up by its symbol.
pub fn lookup(symbol: char) -> Option<ArithOp> {
    OPERATORS.iter().cloned().find(|op| op.symbol() == symbol)
}

impl ArithOp {
    pub fn symbol(self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Sub => '-',
            ArithOp::Mul => '*',
            ArithOp::Mod => '%'
        }
    }

    pub fn from_tok(tok: &Tok) -> Option<ArithOp> {
        match tok {
            Tok::Plus => Some(ArithOp::Add),
            Tok::Minus => Some(ArithOp::Sub),
            Tok::Times => Some(ArithOp::Mul),
            Tok::Mod => Some(ArithOp::Mod),
            _ => None
        }
    }

    /// Apply the operator. `%` is floored: a nonzero result has the sign of
    /// the divisor.
    pub fn apply(self, x: i64, y: i64) -> Result<i64> {
        let result = match self {
            ArithOp::Add => x.checked_add(y),
            ArithOp::Sub => x.checked_sub(y),
            ArithOp::Mul => x.checked_mul(y),
            ArithOp::Mod => {
                if y == 0 {
                    return Err(Error::Arithmetic(
                        format!("{} % 0: modulo by zero", x)));
                }
                x.checked_rem(y).map(|r| {
                    if r != 0 && (r < 0) != (y < 0) { r + y } else { r }
                })
            }
        };
        result.ok_or_else(|| Error::Arithmetic(
            format!("{} {} {} overflows", x, self.symbol(), y)))
    }
}

impl Term {
    /// Evaluate the term with the given values for its variables.
    pub fn eval(&self, bindings: &HashMap<String, i64>) -> Result<i64> {
        match self {
            Term::Int(n) => Ok(*n),
            Term::Var(v) => bindings.get(v).cloned().ok_or_else(||
                Error::Arithmetic(format!("unbound variable {}", v))),
            Term::BinOp(op, left, right) =>
                op.apply(left.eval(bindings)?, right.eval(bindings)?)
        }
    }
}
