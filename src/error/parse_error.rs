#[derive(Debug)]
/// Represents all errors that can occur during reordering or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of the token encountered and what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A parenthesis has no matching counterpart.
    UnmatchedParenthesis {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A bracket has no matching counterpart.
    UnmatchedBracket {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `?` operator is not paired with a `:` operator, or a `:` appears
    /// without a `?`.
    MismatchedTernary,
    /// A comma appears outside an array literal or call argument list.
    MisplacedComma,
    /// A name was used where a type was expected, but it does not denote a
    /// type.
    UnknownTypeName {
        /// The offending name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function with the same name was already declared.
    DuplicateFunction {
        /// The function name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Two parameters of one function share a name.
    DuplicateParameter {
        /// The parameter name.
        name:     String,
        /// The function being declared.
        function: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found extra tokens after an expression was fully parsed.
    TrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::UnmatchedParenthesis { line } => {
                write!(f, "Error on line {line}: Unmatched parenthesis.")
            },

            Self::UnmatchedBracket { line } => {
                write!(f, "Error on line {line}: Unmatched bracket.")
            },

            Self::MismatchedTernary => {
                write!(f, "Mismatched ternary operator: every '?' needs a matching ':'.")
            },

            Self::MisplacedComma => {
                write!(f,
                       "Misplaced comma: ',' is only valid inside array literals and argument lists.")
            },

            Self::UnknownTypeName { name, line } => {
                write!(f, "Error on line {line}: Unknown type name '{name}'.")
            },

            Self::DuplicateFunction { name, line } => {
                write!(f, "Error on line {line}: Function '{name}' is declared twice.")
            },

            Self::DuplicateParameter { name, function, line } => write!(f,
                                                                        "Error on line {line}: Parameter '{name}' of function '{function}' is declared twice."),

            Self::TrailingTokens { token, line } => write!(f,
                                                           "Error on line {line}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
