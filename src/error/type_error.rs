use crate::ast::Type;

#[derive(Debug)]
/// Represents all errors that can be raised by constant expansion and the
/// static type checker.
pub enum TypeError {
    /// A variable was used before being declared.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// A call refers to a function that does not exist.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// An uppercase constant name has no binding in the supplied constant
    /// set.
    UndefinedConstant {
        /// The name of the constant.
        name: String,
    },
    /// A variable was declared twice in the same scope.
    AlreadyDeclared {
        /// The name of the variable.
        name: String,
    },
    /// A binary operator was applied to operand types it does not accept.
    OperandMismatch {
        /// The operator symbol.
        operator: String,
        /// The type of the left operand.
        left:     Type,
        /// The type of the right operand.
        right:    Type,
    },
    /// A condition expression is not boolean.
    ConditionNotBoolean {
        /// The construct whose condition is at fault (`if`, `while`, `?:`).
        construct: &'static str,
        /// The type the condition actually has.
        found:     Type,
    },
    /// The two branches of a ternary conditional have different types.
    BranchMismatch {
        /// The type of the true branch.
        then_branch: Type,
        /// The type of the false branch.
        else_branch: Type,
    },
    /// An array literal element does not match the declared element type.
    ElementMismatch {
        /// The declared element type.
        expected: Type,
        /// The offending element's type.
        found:    Type,
    },
    /// A non-array value was indexed or iterated.
    ExpectedArray {
        /// The type that was found instead.
        found: Type,
    },
    /// A call supplies the wrong number of arguments.
    ArgumentCountMismatch {
        /// The callee name.
        function: String,
        /// The declared parameter count.
        expected: usize,
        /// The supplied argument count.
        found:    usize,
    },
    /// A call argument does not match the declared parameter type.
    ArgumentMismatch {
        /// The callee name.
        function:  String,
        /// The parameter name.
        parameter: String,
        /// The declared parameter type.
        expected:  Type,
        /// The supplied argument's type.
        found:     Type,
    },
    /// A void function was called where a value is required.
    VoidInExpression {
        /// The callee name.
        function: String,
    },
    /// A declaration initializer does not match the declared type.
    DeclarationMismatch {
        /// The variable name.
        name:     String,
        /// The declared type.
        declared: Type,
        /// The initializer's type.
        found:    Type,
    },
    /// An assigned value does not match the variable's declared type.
    AssignmentMismatch {
        /// The variable name.
        name:     String,
        /// The type the variable was declared with.
        declared: Type,
        /// The assigned value's type.
        found:    Type,
    },
    /// A `return` value does not match the enclosing function's return type.
    ReturnMismatch {
        /// The declared return type.
        expected: Type,
        /// The returned value's type.
        found:    Type,
    },
    /// A void function returns a value.
    UnexpectedReturnValue {
        /// The enclosing function.
        function: String,
    },
    /// A non-void function returns without a value.
    MissingReturnValue {
        /// The enclosing function.
        function: String,
    },
    /// A `foreach` loop variable re-uses an already bound name.
    LoopVariableRebound {
        /// The loop variable name.
        name: String,
    },
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable '{name}'."),
            Self::UndefinedFunction { name } => write!(f, "Undefined function '{name}'."),
            Self::UndefinedConstant { name } => {
                write!(f, "No binding supplied for constant '{name}'.")
            },
            Self::AlreadyDeclared { name } => {
                write!(f, "Variable '{name}' is already declared in this scope.")
            },
            Self::OperandMismatch { operator, left, right } => write!(f,
                                                                      "Operator '{operator}' cannot be applied to operands of type {left} and {right}."),
            Self::ConditionNotBoolean { construct, found } => write!(f,
                                                                     "The {construct} condition must be boolean, but has type {found}."),
            Self::BranchMismatch { then_branch,
                                   else_branch, } => write!(f,
                                                            "Ternary branches must have equal types, but found {then_branch} and {else_branch}."),
            Self::ElementMismatch { expected, found } => write!(f,
                                                                "Array element has type {found}, but the literal declares element type {expected}."),
            Self::ExpectedArray { found } => {
                write!(f, "Expected an array, but found a value of type {found}.")
            },
            Self::ArgumentCountMismatch { function,
                                          expected,
                                          found, } => write!(f,
                                                             "Function '{function}' takes {expected} argument(s), but {found} were supplied."),
            Self::ArgumentMismatch { function,
                                     parameter,
                                     expected,
                                     found, } => write!(f,
                                                        "Argument '{parameter}' of function '{function}' must have type {expected}, but has type {found}."),
            Self::VoidInExpression { function } => write!(f,
                                                          "Function '{function}' does not return a value and cannot be used in an expression."),
            Self::DeclarationMismatch { name, declared, found } => write!(f,
                                                                          "Variable '{name}' is declared with type {declared}, but its initializer has type {found}."),
            Self::AssignmentMismatch { name, declared, found } => write!(f,
                                                                         "Cannot assign a value of type {found} to variable '{name}' of type {declared}."),
            Self::ReturnMismatch { expected, found } => write!(f,
                                                               "Return value has type {found}, but the function declares return type {expected}."),
            Self::UnexpectedReturnValue { function } => write!(f,
                                                               "Function '{function}' is void but returns a value."),
            Self::MissingReturnValue { function } => write!(f,
                                                            "Function '{function}' must return a value of its declared return type."),
            Self::LoopVariableRebound { name } => write!(f,
                                                         "Loop variable '{name}' is already bound and cannot be re-used."),
        }
    }
}

impl std::error::Error for TypeError {}
