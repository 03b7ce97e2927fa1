//! # statica
//!
//! statica is an interpreter for a small, statically typed expression and
//! statement language. Source text is tokenized, reordered from infix into
//! prefix form, parsed, desugared, expanded against a set of named
//! constants, type checked, and finally executed by a tree-walking
//! evaluator that talks to the outside world through a pluggable runtime.

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

use crate::interpreter::{
    constants::{ConstantBindings, expand_expression, expand_program},
    evaluator::Interpreter,
    lexer::tokenize,
    parser::{parse_expression, parse_program, parse_script},
    runtime::Runtime,
    typecheck::{check_program, check_standalone},
    value::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the core `Expr` and `Statement` types that represent
/// the desugared syntactic structure of source code as a tree, plus the
/// `Type` lattice the checker works with. The AST is built by the parser and
/// traversed by the type checker and the evaluator.
///
/// # Responsibilities
/// - Defines expression, statement, and declaration types for all language
///   constructs that survive desugaring.
/// - Defines the type representation shared by declarations and checking.
/// - Renders every node back to parseable source via `Display`.
pub mod ast;
/// Provides unified error types for every phase.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, expanding constants, type checking, or evaluating code. It
/// standardizes error reporting and carries detailed information about
/// failures, including source lines where the phase still has them.
///
/// # Responsibilities
/// - Defines one error enum per phase (tokenizer, parser, checker,
///   evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together tokenization, reordering, parsing, constant
/// expansion, type checking, evaluation, and all supporting infrastructure
/// to provide a complete pipeline from source text to observable behavior.
///
/// # Responsibilities
/// - Coordinates all pipeline stages in their fixed order.
/// - Provides the scope-frame environment and value representations.
/// - Exposes the runtime seam through which programs perform input and
///   output.
pub mod interpreter;

/// Runs a program of function declarations from its `main` entry point.
///
/// The source runs through the whole pipeline: tokenization, parsing,
/// expansion of `constants`, type checking, and evaluation against
/// `runtime`.
///
/// # Errors
/// Returns the first error of whichever phase fails, boxed.
pub fn run_program(source: &str,
                   constants: &ConstantBindings,
                   runtime: &mut dyn Runtime)
                   -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;
    let program = expand_program(program, constants)?;
    check_program(&program)?;
    Interpreter::new(&program, runtime).run()?;
    Ok(())
}

/// Runs the flat statement dialect: statements with no enclosing `def`.
///
/// The statements are wrapped into an implicit void `main` and then treated
/// exactly like a program, so a bare `return;` ends the script.
///
/// # Errors
/// Returns the first error of whichever phase fails, boxed.
pub fn run_script(source: &str,
                  constants: &ConstantBindings,
                  runtime: &mut dyn Runtime)
                  -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let program = ast::Program::from_script(parse_script(&tokens)?);
    let program = expand_program(program, constants)?;
    check_program(&program)?;
    Interpreter::new(&program, runtime).run()?;
    Ok(())
}

/// Evaluates a single expression and returns its value.
///
/// The expression may use `input(...)`, which is served by `runtime`, and
/// named constants from `constants`; it cannot reference variables or
/// functions.
///
/// # Errors
/// Returns the first error of whichever phase fails, boxed.
pub fn eval_expression(source: &str,
                       constants: &ConstantBindings,
                       runtime: &mut dyn Runtime)
                       -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let expr = parse_expression(&tokens)?;
    let expr = expand_expression(expr, constants)?;
    check_standalone(&expr)?;

    let program = ast::Program::from_script(Vec::new());
    let value = Interpreter::new(&program, runtime).eval_standalone(&expr)?;
    Ok(value)
}
