//! The parsing stages of the pipeline.
//!
//! Expressions travel through three levels, each a strict subset of the one
//! before it:
//!
//! 1. [`raw`] — what the prefix parser produces verbatim, commas and the
//!    ternary halves included;
//! 2. [`sugared`] — after [`fixup`], with lists flattened and ternaries
//!    reassembled;
//! 3. [`crate::ast`] — after [`desugar`], the core language the type checker
//!    and evaluator work with.
//!
//! Statements are parsed separately by descent over the infix tokens, with
//! every embedded expression routed through the expression pipeline.

mod desugar;
mod expression;
mod fixup;
mod raw;
mod statement;
mod sugared;

use crate::{
    ast::{Expr, Program, Statement},
    error::ParseError,
    interpreter::{lexer::Token, reorder::reorder},
};

pub use self::expression::ParseResult;
use self::{
    desugar::desugar,
    expression::{Cursor, parse_prefix},
    fixup::fixup,
    statement::StatementParser,
};

/// Parses one infix expression from a token slice.
///
/// Runs the full expression pipeline: the tokens are reordered into prefix
/// form, parsed into a raw tree, fixed up, and desugared. A prefix sequence
/// that ends before the tree is complete, or continues past it, is rejected.
///
/// # Parameters
/// - `tokens`: the infix tokens of exactly one expression, with their lines.
///
/// # Returns
/// The desugared expression.
///
/// # Errors
/// Any [`ParseError`] raised by reordering, prefix parsing, or fixup.
pub fn parse_expression(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let prefix = reorder(tokens)?;
    let mut cursor = Cursor::new(&prefix);
    let raw = parse_prefix(&mut cursor)?;

    if let Some((token, line)) = cursor.remaining() {
        return Err(ParseError::TrailingTokens { token: token.to_string(),
                                                line:  *line, });
    }

    Ok(desugar(fixup(raw)?))
}

/// Parses a whole program of function declarations.
///
/// # Errors
/// Any [`ParseError`] from the statement parser or the expression pipeline,
/// including duplicate function or parameter names.
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    StatementParser::new(tokens).parse_program()
}

/// Parses the flat statement dialect into a statement list.
///
/// # Errors
/// Any [`ParseError`] from the statement parser or the expression pipeline.
pub fn parse_script(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    StatementParser::new(tokens).parse_script()
}
