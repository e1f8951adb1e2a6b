/// The program store: everything a parse produced, in source order.

use ast::*;
use error::*;
use lexer::Lexer;
use parser::Parser;

use serde_json;

use std::collections::HashMap;
use std::io;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    predicates: HashMap<String, usize>,
    facts: Vec<Literal>,
    rules: Vec<Rule>,
    queries: Vec<Query>,
    next_variable: u32
}

/// Lex and parse `source` into a fresh `Program`.
///
/// Nothing is committed unless the whole source parses, so on error there is
/// no partial program to observe.
pub fn parse_program(source: &str) -> Result<Program> {
    let clauses = Parser::new(Lexer::new(source.chars()))
        .collect::<Result<Vec<Clause>>>()?;

    let mut program = Program::new();
    for clause in clauses {
        program.commit(clause);
    }
    Ok(program)
}

impl Program {
    pub fn new() -> Self {
        Program {
            predicates: HashMap::new(),
            facts: Vec::new(),
            rules: Vec::new(),
            queries: Vec::new(),
            next_variable: 1
        }
    }

    /// File a clause under its kind. A repeated declaration replaces the
    /// earlier arity.
    pub fn commit(&mut self, clause: Clause) {
        match clause {
            Clause::Declaration(d) => {
                self.predicates.insert(d.name, d.arity);
            },
            Clause::Fact(f) => self.facts.push(f),
            Clause::Rule(r) => self.rules.push(r),
            Clause::Query(q) => self.queries.push(q)
        }
    }

    pub fn predicates(&self) -> &HashMap<String, usize> {
        &self.predicates
    }

    pub fn arity(&self, name: &str) -> Option<usize> {
        self.predicates.get(name).cloned()
    }

    pub fn facts(&self) -> &[Literal] {
        &self.facts
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty() && self.facts.is_empty()
            && self.rules.is_empty() && self.queries.is_empty()
    }

    /// Allocate a fresh variable id. Ids start at 1 and are never reused.
    pub fn next_var(&mut self) -> u32 {
        let var = self.next_variable;
        self.next_variable += 1;
        var
    }

    pub fn write_json<W: io::Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    pub fn read_json<R: io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use ast::*;
    use error::Error;
    use program::*;

    fn strings(args: &[Term]) -> Vec<String> {
        args.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn empty_program() {
        let program = parse_program("").unwrap();
        assert!(program.is_empty());
        assert_eq!(program, Program::new());
    }

    #[test]
    fn likes() {
        let program = parse_program(
            "likes(Mary, Tom). likes(Tom, Ann). ?likes(Mary, X).").unwrap();

        assert_eq!(program.facts().len(), 2);
        assert_eq!(program.facts()[0].sign, Sign::Positive);
        assert_eq!(program.facts()[0].name, "likes");
        assert_eq!(strings(&program.facts()[0].args), vec!("Mary", "Tom"));
        assert_eq!(strings(&program.facts()[1].args), vec!("Tom", "Ann"));
        assert!(program.rules().is_empty());
        assert_eq!(program.queries(), &[Query {
            name: "likes".to_string(),
            args: vec!(Term::var("Mary"), Term::var("X"))
        }]);
        assert!(program.predicates().is_empty());
    }

    #[test]
    fn negation_sign() {
        let program = parse_program("not f(X). f(X).").unwrap();
        assert_eq!(program.facts()[0].sign.value(), -1);
        assert_eq!(program.facts()[0].name, "f");
        assert_eq!(program.facts()[1].sign.value(), 1);
    }

    #[test]
    fn keyword_prefix_is_an_ident() {
        let program = parse_program("nothing(X).").unwrap();
        assert_eq!(program.facts()[0].sign, Sign::Positive);
        assert_eq!(program.facts()[0].name, "nothing");
    }

    #[test]
    fn last_declaration_wins() {
        let program = parse_program("f 1. g 3. f 2.").unwrap();
        assert_eq!(program.arity("f"), Some(2));
        assert_eq!(program.arity("g"), Some(3));
        assert_eq!(program.arity("h"), None);
        assert_eq!(program.predicates().len(), 2);
    }

    #[test]
    fn arity_is_not_checked() {
        let program = parse_program("f(X, Y, Z). f 1. ?f(1, 2).").unwrap();
        assert_eq!(program.arity("f"), Some(1));
        assert_eq!(program.facts()[0].args.len(), 3);
        assert_eq!(program.queries()[0].args.len(), 2);
    }

    #[test]
    fn queries_stay_out_of_facts() {
        let program = parse_program("?f(X).").unwrap();
        assert!(program.facts().is_empty());
        assert!(program.rules().is_empty());
        assert_eq!(program.queries()[0].name, "f");
        assert_eq!(program.queries()[0].args, vec!(Term::var("X")));
    }

    #[test]
    fn source_order() {
        let program = parse_program("
            a(1).
            r(X) :- a(X), b(X).
            b(2).
            ?r(1).
            s(X) :- not a(X).
            ?r(2).
        ").unwrap();
        let facts: Vec<_> = program.facts().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(facts, vec!("a", "b"));
        let heads: Vec<_> = program.rules().iter()
            .map(|r| r.consequent.name.as_str()).collect();
        assert_eq!(heads, vec!("r", "s"));
        let antecedents: Vec<_> = program.rules()[0].antecedents.iter()
            .map(|l| l.name.as_str()).collect();
        assert_eq!(antecedents, vec!("a", "b"));
        assert_eq!(program.rules()[1].antecedents[0].sign, Sign::Negative);
        let queries: Vec<_> = program.queries().iter()
            .map(|q| q.args[0].clone()).collect();
        assert_eq!(queries, vec!(Term::Int(1), Term::Int(2)));
    }

    #[test]
    fn illegal_character() {
        match parse_program("f(X).\ng(Y).\nh(#).") {
            Err(e @ Error::Lexer { .. }) =>
                assert_eq!(e.to_string(), "Illegal character '#' at line 3"),
            other => panic!("expected lexer error, got {:?}", other)
        }
    }

    #[test]
    fn premature_eof() {
        match parse_program("f(X") {
            Err(e @ Error::Parser { token: None }) =>
                assert_eq!(e.to_string(), "Syntax error at EOF"),
            other => panic!("expected syntax error, got {:?}", other)
        }
    }

    #[test]
    fn parses_are_independent() {
        let first = parse_program("f(1). g 1.").unwrap();
        let second = parse_program("h(2).").unwrap();
        assert_eq!(first.facts().len(), 1);
        assert_eq!(second.facts().len(), 1);
        assert_eq!(second.facts()[0].name, "h");
        assert!(second.predicates().is_empty());
    }

    #[test]
    fn variable_ids() {
        let mut program = Program::new();
        assert_eq!(program.next_var(), 1);
        assert_eq!(program.next_var(), 2);
        assert_eq!(program.next_var(), 3);
    }

    #[test]
    fn json() {
        let mut program = parse_program(
            "p 1. not p(X + 1). q(X) :- p(X), not r(X % 2). ?q(3).").unwrap();
        program.next_var();

        let mut buf = Vec::new();
        program.write_json(&mut buf).unwrap();
        let read = Program::read_json(buf.as_slice()).unwrap();
        assert_eq!(read, program);

        match Program::read_json("{".as_bytes()) {
            Err(Error::Json(_)) => (),
            other => panic!("expected json error, got {:?}", other)
        }
    }
}
