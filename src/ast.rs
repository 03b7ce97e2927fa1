use std::collections::HashMap;

/// Represents a type in the language.
///
/// Types are either atomic (`number`, `boolean`, `string`) or an array type
/// wrapping an element type, recursively. Two types are equal if and only if
/// they are structurally equal; there is no nominal identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// The numeric type, written `number`.
    Number,
    /// The boolean type, written `boolean`.
    Boolean,
    /// The string type, written `string`.
    Str,
    /// An array type with the given element type, written `t[]`.
    Array(Box<Self>),
}

impl Type {
    /// Resolves an atomic type name to its type.
    ///
    /// Returns `None` for any name that is not `number`, `boolean` or
    /// `string`. Array types have no single-name spelling; they are built by
    /// the parsers from `[]` suffixes.
    #[must_use]
    pub fn atomic(name: &str) -> Option<Self> {
        match name {
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "string" => Some(Self::Str),
            _ => None,
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Str => write!(f, "string"),
            Self::Array(element) => write!(f, "{element}[]"),
        }
    }
}

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constant values that can appear directly in
/// source code. It is shared by every AST level, from the parser's raw tree
/// to the desugared tree consumed by the type checker and evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A numeric literal such as `42` or `3.14`.
    Number(f64),
    /// A boolean literal: `true` or `false`.
    Bool(bool),
    /// A string literal such as `"hello"`.
    Str(String),
}

impl LiteralValue {
    /// Returns the static type of this literal.
    #[must_use]
    pub const fn literal_type(&self) -> Type {
        match self {
            Self::Number(_) => Type::Number,
            Self::Bool(_) => Type::Boolean,
            Self::Str(_) => Type::Str,
        }
    }
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

/// Formats a number the way the language prints it.
///
/// Whole numbers print without a fractional part (`3`, not `3.0`).
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = n as i64;
        format!("{whole}")
    } else {
        format!("{n}")
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Negation (`-`): negates a number, inverts a boolean, reverses a
    /// string or an array.
    Negate,
    /// Stringification (`@`): renders any value as a string.
    Stringify,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Stringify => write!(f, "@"),
        }
    }
}

/// Represents a binary operator of the desugared language.
///
/// Greater-than does not appear here: the desugaring pass rewrites it in
/// terms of `<`, `=` and `&` before the checker or evaluator ever run, so
/// neither needs a `>` case.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`).
    Plus,
    /// Multiplication (`*`).
    Times,
    /// Boolean AND (`&`).
    And,
    /// Less-than comparison (`<`).
    Less,
    /// Equality comparison (`=`).
    Equal,
    /// Array indexing (`#`).
    Index,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Times => "*",
            Self::And => "&",
            Self::Less => "<",
            Self::Equal => "=",
            Self::Index => "#",
        };
        write!(f, "{operator}")
    }
}

/// An abstract syntax tree node of the desugared expression language.
///
/// This is the long-lived AST level: the parser's raw tree and the fixed-up
/// sugared tree are rewritten into `Expr`, which is then the input of
/// constant expansion, the type checker and the evaluator. Each subtree is
/// owned exclusively by its parent; transformations build new trees rather
/// than mutating existing ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal leaf.
    Literal(LiteralValue),
    /// A reference to a variable, or to a named constant before expansion.
    Name(String),
    /// An interactive input request declaring the expected type.
    Input(Type),
    /// An array literal with an explicit element type.
    Array {
        /// The declared element type.
        element:  Type,
        /// The ordered element expressions.
        elements: Vec<Self>,
    },
    /// A function call.
    Call {
        /// The callee name.
        name:      String,
        /// The ordered argument expressions.
        arguments: Vec<Self>,
    },
    /// A unary operation.
    Unary {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A ternary conditional.
    Ternary {
        /// The condition expression.
        condition:   Box<Self>,
        /// Expression chosen when the condition is true.
        then_branch: Box<Self>,
        /// Expression chosen when the condition is false.
        else_branch: Box<Self>,
    },
}

impl std::fmt::Display for Expr {
    /// Prints the expression as parseable infix source.
    ///
    /// Every composite node is parenthesized, so re-tokenizing, reordering
    /// and parsing the output reproduces a structurally equal tree. Grouping
    /// parentheses are dropped by the reordering pass, so the extra pairs do
    /// not change the parsed structure.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Name(name) => write!(f, "{name}"),
            Self::Input(requested) => write!(f, "input({requested})"),
            Self::Array { element, elements } => {
                write!(f, "{element}[")?;
                for (index, item) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
            Self::Call { name, arguments } => {
                write!(f, "{name}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::Unary { op, operand } => write!(f, "({op}{operand})"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Ternary { condition,
                            then_branch,
                            else_branch, } => {
                write!(f, "({condition} ? {then_branch} : {else_branch})")
            },
        }
    }
}

/// A statement of the desugared language.
///
/// Bodies are ordered statement lists; sub-expressions are already fully
/// fixed up and desugared when a statement is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Prints a value through the runtime collaborator: `output(expr);`.
    Output(Expr),
    /// Declares a typed variable: `var name: type = expr;`.
    VariableDeclaration {
        /// The variable name.
        name:        String,
        /// The declared type.
        declared:    Type,
        /// The initializer expression.
        initializer: Expr,
    },
    /// Assigns to a previously declared variable: `name = expr;`.
    Assignment {
        /// The variable name.
        name:  String,
        /// The value expression.
        value: Expr,
    },
    /// A braced statement list with its own scope.
    Block(Vec<Self>),
    /// A conditional with an optional else branch.
    If {
        /// The condition; must be boolean.
        condition:   Expr,
        /// Statements run when the condition is true.
        then_branch: Vec<Self>,
        /// Statements run when the condition is false, if present.
        else_branch: Option<Vec<Self>>,
    },
    /// A while loop.
    While {
        /// The condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
    },
    /// Iterates a loop variable over an array: `foreach (var x <-- expr)`.
    Foreach {
        /// The loop variable name.
        variable: String,
        /// The iterable; re-fetched after every iteration.
        iterable: Expr,
        /// The loop body.
        body:     Vec<Self>,
    },
    /// A function call used as a statement; its result is discarded.
    Call {
        /// The callee name.
        name:      String,
        /// The ordered argument expressions.
        arguments: Vec<Expr>,
    },
    /// Returns from the enclosing function, optionally with a value.
    Return(Option<Expr>),
}

/// A single parameter of a function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// The parameter name.
    pub name:     String,
    /// The declared parameter type.
    pub declared: Type,
}

/// A user-defined function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The function name.
    pub name:        String,
    /// The ordered parameter list. Names are pairwise distinct.
    pub parameters:  Vec<Parameter>,
    /// The declared return type, or `None` for a void function.
    pub return_type: Option<Type>,
    /// The function body.
    pub body:        Vec<Statement>,
    /// Line number of the declaration in the source code.
    pub line:        usize,
}

/// A parsed program: a mapping from function name to declaration.
///
/// Keys are unique; the map is built once by the statement parser and never
/// mutated afterwards. The distinguished parameterless `main` function is the
/// entry point for execution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// All declared functions by name.
    pub functions: HashMap<String, FunctionDecl>,
}

impl Program {
    /// The name of the entry-point function.
    pub const ENTRY_POINT: &'static str = "main";

    /// Wraps a flat statement list into a program whose only function is a
    /// parameterless, void `main`.
    ///
    /// This is how the simpler statement dialect (no function declarations)
    /// is executed.
    #[must_use]
    pub fn from_script(body: Vec<Statement>) -> Self {
        let main = FunctionDecl { name:        Self::ENTRY_POINT.to_string(),
                                  parameters:  Vec::new(),
                                  return_type: None,
                                  body,
                                  line:        1, };

        let mut functions = HashMap::new();
        functions.insert(main.name.clone(), main);
        Self { functions }
    }
}
