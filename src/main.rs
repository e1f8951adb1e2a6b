extern crate colored;
extern crate prolame;

use prolame::ast::{Clause, Declaration};
use prolame::{parse_program, Program, Result};

use colored::Colorize;

use std::env;
use std::fmt::Display;
use std::fs;
use std::io;
use std::io::Read;
use std::io::Write;

static USAGE: &'static str = "usage: prolame [--json] [FILE]";

// Failures print as the bare one-line message.
fn abort<T: Display>(e: T) -> ! {
    println!("{}", e);
    std::process::exit(1)
}

fn unwrap_or_abort<T, E: Display>(res: std::result::Result<T, E>) -> T {
    res.unwrap_or_else(|e| abort(e))
}

struct Options {
    json: bool,
    path: Option<String>
}

impl Options {
    fn from_args<A: Iterator<Item = String>>(args: A) -> Options {
        let mut options = Options { json: false, path: None };
        for arg in args {
            if arg == "--json" {
                options.json = true;
            } else if arg == "-h" || arg == "--help" {
                println!("{}", USAGE);
                std::process::exit(0)
            } else if options.path.is_none() && !arg.starts_with('-') {
                options.path = Some(arg);
            } else {
                abort(USAGE)
            }
        }
        options
    }
}

fn read_source(path: &Option<String>) -> Result<String> {
    let mut source = String::new();
    match path {
        Some(p) => fs::File::open(p)?.read_to_string(&mut source)?,
        None => io::stdin().read_to_string(&mut source)?
    };
    Ok(source)
}

fn print_section<T: Display>(title: &str, items: Vec<T>) {
    println!("{} {}", title.bright_blue(), format!("({})", items.len()).bright_black());
    for item in items {
        println!("  {}", item);
    }
}

fn declarations(program: &Program) -> Vec<Declaration> {
    let mut declarations: Vec<_> = program.predicates().iter()
        .map(|(name, arity)| Declaration { name: name.clone(), arity: *arity })
        .collect();
    declarations.sort_by(|a, b| a.name.cmp(&b.name));
    declarations
}

fn print_program(program: &Program) {
    print_section("declarations", declarations(program));
    print_section("facts", program.facts().iter()
        .map(|f| Clause::Fact(f.clone())).collect());
    print_section("rules", program.rules().iter().collect());
    print_section("queries", program.queries().iter().collect());
}

fn main() {
    let options = Options::from_args(env::args().skip(1));
    let source = unwrap_or_abort(read_source(&options.path));
    let program = unwrap_or_abort(parse_program(&source));

    if options.json {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        unwrap_or_abort(program.write_json(&mut out));
        unwrap_or_abort(writeln!(out));
    } else {
        print_program(&program);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use prolame::Error;

    #[test]
    fn declarations_print_like_source() {
        let program = parse_program("g 3. f(X). f 2.").unwrap();
        let listed: Vec<String> = declarations(&program).iter()
            .map(|d| d.to_string())
            .collect();
        assert_eq!(listed, vec!("f 2.", "g 3."));
    }

    #[test]
    fn missing_file_is_a_stream_error() {
        let path = Some("/nonexistent/prolame/source.pl".to_string());
        match read_source(&path) {
            Err(Error::Stream(_)) => (),
            other => panic!("expected stream error, got {:?}", other)
        }
    }
}
