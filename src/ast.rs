use arith::ArithOp;

use std::fmt;

/// An argument to a predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Term {
    Int(i64),
    Var(String),
    BinOp(ArithOp, Box<Term>, Box<Term>)
}

impl Term {
    pub fn var(name: &str) -> Self {
        Term::Var(name.to_string())
    }

    pub fn binop(op: ArithOp, left: Term, right: Term) -> Self {
        Term::BinOp(op, Box::new(left), Box::new(right))
    }
}

/// Whether a literal was written plainly or behind `not`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative
}

impl Sign {
    /// `1` for a plain literal, `-1` for a negated one.
    pub fn value(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1
        }
    }
}

/// A predicate applied to arguments, possibly negated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub sign: Sign,
    pub name: String,
    pub args: Vec<Term>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub arity: usize
}

/// `consequent` holds whenever every antecedent holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub consequent: Literal,
    pub antecedents: Vec<Literal>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub name: String,
    pub args: Vec<Term>
}

/// One top-level item of a program, as produced by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Clause {
    Declaration(Declaration),
    Fact(Literal),
    Rule(Rule),
    Query(Query)
}

fn write_args(f: &mut fmt::Formatter, name: &str, args: &[Term]) -> fmt::Result {
    write!(f, "{}(", name)?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    write!(f, ")")
}

// Operators all bind equally tight and associate to the left, so a term
// built by the parser prints back without parentheses.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Int(n) => write!(f, "{}", n),
            Term::Var(v) => write!(f, "{}", v),
            Term::BinOp(op, left, right) =>
                write!(f, "{} {} {}", left, op.symbol(), right)
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.sign == Sign::Negative {
            write!(f, "not ")?;
        }
        write_args(f, &self.name, &self.args)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}.", self.name, self.arity)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} :- ", self.consequent)?;
        for (i, antecedent) in self.antecedents.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", antecedent)?;
        }
        write!(f, ".")
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "?")?;
        write_args(f, &self.name, &self.args)?;
        write!(f, ".")
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Clause::Declaration(d) => write!(f, "{}", d),
            Clause::Fact(l) => write!(f, "{}.", l),
            Clause::Rule(r) => write!(f, "{}", r),
            Clause::Query(q) => write!(f, "{}", q)
        }
    }
}
