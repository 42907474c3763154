//! A tree-walking interpreter for a small, expression-oriented language
//! with Albanian surface keywords.
//!
//! Pipeline: [`lexer`] streams tokens, [`parser`] builds an AST with
//! Pratt-style operator-precedence parsing, [`evaluator`] walks the AST
//! against a chained [`environment::Environment`] to produce an [`object::Object`].

pub mod ast;
pub mod environment;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod token;

use environment::Environment;
use object::Object;
use parser::Parser;

/// Parses and evaluates `input` against a fresh environment.
///
/// Returns parser error messages (English, per the source grammar's own
/// diagnostics) if parsing failed; otherwise the evaluated `Object`.
pub fn interpret(input: &str) -> Result<Object, Vec<String>> {
    let env = Environment::new();
    interpret_with_env(input, &env)
}

/// Like [`interpret`], but reuses a caller-supplied environment so bindings
/// persist across calls (what the REPL does between lines).
pub fn interpret_with_env(input: &str, env: &Environment) -> Result<Object, Vec<String>> {
    let mut parser = Parser::from_source(input);
    let program = parser.parse_program();

    if !parser.errors.is_empty() {
        return Err(parser.errors.iter().map(ToString::to_string).collect());
    }

    Ok(evaluator::eval_program(&program, env))
}
