//! The interpretation pipeline, stage by stage.
//!
//! A source text passes through, in order: [`lexer`] (tokens), [`reorder`]
//! (prefix form), [`parser`] (desugared AST), [`constants`] (constant
//! expansion), [`typecheck`] (static checking), and [`evaluator`]
//! (execution). The remaining modules are shared infrastructure:
//! [`environment`] holds the scope frames, [`value`] the runtime values,
//! and [`runtime`] the input/output seam.

/// Substitution of named constants before type checking.
pub mod constants;
/// The scope-frame stack shared by the checker and the evaluator.
pub mod environment;
/// The tree-walking evaluator.
pub mod evaluator;
/// Tokenization of source text.
pub mod lexer;
/// The prefix parser, fixup, desugaring, and the statement parser.
pub mod parser;
/// Infix-to-prefix reordering of expression tokens.
pub mod reorder;
/// The input/output seam between programs and the outside world.
pub mod runtime;
/// The static type checker.
pub mod typecheck;
/// Runtime values.
pub mod value;
