/// Tokenizing errors.
///
/// Defines the error raised when the tokenizer cannot match any lexical
/// pattern against the remaining input.
pub mod tokenize_error;

/// Parsing errors.
///
/// Defines all error types that can occur during reordering and parsing of
/// token sequences: unexpected or trailing tokens, unmatched parentheses and
/// brackets, mismatched ternary operators, and malformed declarations.
pub mod parse_error;

/// Static type errors.
///
/// Contains all error types that can be raised by constant expansion and the
/// type checker: mismatched operand or branch types, undefined names, wrong
/// argument counts and bad returns.
pub mod type_error;

/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// names at evaluation time, out-of-bounds indexing, operators applied to
/// incompatible runtime values, and input-contract violations.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use tokenize_error::TokenizeError;
pub use type_error::TypeError;
