//! # mython
//!
//! mython is a tree-walking interpreter for Mython, a small dynamically
//! typed language with significant indentation, classes, inheritance, and
//! operator overloading through special `__`-named methods.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, Flow},
        lexer::Lexer,
        parser::core::Parser,
        runtime::Closure,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Ties class-literal nodes to the runtime class model.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or executing code. It standardizes error reporting and carries
/// detailed information about failures, including source lines where they
/// are known.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the runtime object model, and
/// evaluation to provide a complete interpreter for Mython source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, runtime, evaluator.
/// - Provides the building blocks behind [`run_program`].
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a Mython program, writing its output into `output`.
///
/// The source is tokenized and parsed in full, then executed statement by
/// statement against a fresh global scope. Output arrives in `output` in
/// exactly the order the program produced it.
///
/// # Errors
/// Returns the first lexer, parser, or runtime error encountered. A
/// `return` at the top level of the program is reported as a runtime error.
///
/// # Examples
/// ```
/// use mython::run_program;
///
/// let mut output = Vec::new();
/// run_program("print 57", &mut output).unwrap();
/// assert_eq!(output, b"57\n");
///
/// // An undefined name is a runtime error.
/// let mut sink = Vec::new();
/// assert!(run_program("print undefined", &mut sink).is_err());
/// ```
pub fn run_program(source: &str,
                   output: &mut dyn Write)
                   -> Result<(), Box<dyn std::error::Error>> {
    let lexer = Lexer::new(source)?;
    let program = Parser::new(lexer).parse_program()?;

    let mut closure = Closure::default();
    let mut context = Context::new(output);
    if let Flow::Return(_) = context.execute(&program, &mut closure)? {
        return Err(Box::new(RuntimeError::ReturnOutsideMethod));
    }
    Ok(())
}

/// Runs a Mython program and returns its output as a string.
///
/// Convenience wrapper around [`run_program`] with an in-memory sink.
///
/// # Errors
/// Returns whatever [`run_program`] would.
///
/// # Examples
/// ```
/// use mython::run_to_string;
///
/// let source = "x = \"hello\"\nprint x, 42, None";
/// assert_eq!(run_to_string(source).unwrap(), "hello 42 None\n");
/// ```
pub fn run_to_string(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    run_program(source, &mut output)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
