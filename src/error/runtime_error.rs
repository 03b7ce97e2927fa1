use crate::ast::Type;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation and execution.
///
/// The evaluator assumes the type checker ran successfully; these errors
/// cover only what the checker does not track statically (index bounds,
/// runtime-only name resolution, the input contract) plus the operator
/// mismatches that can arise when the evaluator is driven without checking.
pub enum RuntimeError {
    /// Tried to use an undefined variable at evaluation time.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that does not exist.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The callee name.
        function: String,
        /// The declared parameter count.
        expected: usize,
        /// The supplied argument count.
        found:    usize,
    },
    /// Tried to access an array element outside the valid range.
    IndexOutOfBounds {
        /// The length of the indexed array.
        length: usize,
        /// The index that was actually requested.
        index:  i64,
    },
    /// An index value is negative or fractional.
    InvalidIndex {
        /// The offending index value.
        index: f64,
    },
    /// A binary operator was applied to runtime values it does not accept.
    IncompatibleOperands {
        /// The operator symbol.
        operator: String,
        /// A description of the left operand's kind.
        left:     String,
        /// A description of the right operand's kind.
        right:    String,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The construct that required a boolean (`if`, `while`, `?:`, `&`).
        construct: &'static str,
    },
    /// An array value was expected, but not found.
    ExpectedArray {
        /// A description of the value's kind.
        found: String,
    },
    /// A `foreach` loop variable re-uses an already bound name.
    LoopVariableRebound {
        /// The loop variable name.
        name: String,
    },
    /// A call used as a value completed without returning one.
    MissingReturnValue {
        /// The callee name.
        function: String,
    },
    /// The runtime collaborator supplied an input of the wrong type.
    InputMismatch {
        /// The requested type.
        expected: Type,
        /// A description of the supplied value's kind.
        found:    String,
    },
    /// The runtime collaborator ran out of scripted inputs.
    InputExhausted,
    /// The runtime collaborator cannot produce values of the requested type.
    InputUnsupported {
        /// The requested type.
        requested: Type,
    },
    /// Reading interactive input failed.
    InputFailed {
        /// Details about the failure.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable '{name}'."),
            Self::UndefinedFunction { name } => write!(f, "Undefined function '{name}'."),
            Self::ArgumentCountMismatch { function,
                                          expected,
                                          found, } => write!(f,
                                                             "Function '{function}' takes {expected} argument(s), but {found} were supplied."),
            Self::IndexOutOfBounds { length, index } => write!(f,
                                                               "Index {index} is out of bounds for an array of length {length}."),
            Self::InvalidIndex { index } => {
                write!(f, "Index {index} is not a non-negative whole number.")
            },
            Self::IncompatibleOperands { operator, left, right } => write!(f,
                                                                           "Operator '{operator}' cannot be applied to {left} and {right}."),
            Self::ExpectedBoolean { construct } => {
                write!(f, "The {construct} requires a boolean value.")
            },
            Self::ExpectedArray { found } => write!(f, "Expected an array, but found {found}."),
            Self::LoopVariableRebound { name } => write!(f,
                                                         "Loop variable '{name}' is already bound and cannot be re-used."),
            Self::MissingReturnValue { function } => write!(f,
                                                            "Function '{function}' completed without returning a value."),
            Self::InputMismatch { expected, found } => write!(f,
                                                              "Input of type {expected} was requested, but {found} was supplied."),
            Self::InputExhausted => write!(f, "No more scripted input values are available."),
            Self::InputUnsupported { requested } => write!(f,
                                                           "This runtime cannot supply input values of type {requested}."),
            Self::InputFailed { details } => write!(f, "Reading input failed: {details}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
