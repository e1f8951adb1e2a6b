//! Front end for the prolame logic language: a lexer, a parser, and the
//! program store they fill.

extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

pub mod arith;
pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod pos;
pub mod program;
pub mod tok;

pub use error::{Error, Result};
pub use program::{parse_program, Program};
