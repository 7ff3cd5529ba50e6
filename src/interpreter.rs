/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, mutates scopes, dispatches
/// methods, and produces program output. It is the core execution engine of
/// the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Threads the control-flow carrier that implements `return`.
/// - Reports runtime errors such as division by zero or undefined names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces the full
/// token stream, translating significant leading whitespace into synthetic
/// indentation tokens. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Emits `Indent`/`Dedent`/`Newline`/`Eof` according to line structure.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions, resolving class names as definitions are encountered.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with line info.
/// - Supports classes, methods, conditionals, assignments, and more.
pub mod parser;
/// The runtime module defines the dynamic object model.
///
/// This module declares the value types used during execution, the
/// shared-ownership holder that scopes store, classes with inheritance and
/// method resolution, and the comparison protocol between values.
///
/// # Responsibilities
/// - Defines the `Value` enum and the holder wrapping it.
/// - Implements classes, instances, and method invocation.
/// - Provides truthiness, printing, and cross-type comparison.
pub mod runtime;
