use crate::ast::{LiteralValue, Type, UnaryOperator};

/// A binary operator of the fixed-up AST level.
///
/// The comma and ternary pseudo-operators are gone, but greater-than is
/// still present; the desugaring pass removes it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SugaredOperator {
    /// Equality comparison (`=`).
    Equal,
    /// Less-than comparison (`<`).
    Less,
    /// Greater-than comparison (`>`).
    Greater,
    /// Boolean AND (`&`).
    And,
    /// Addition or concatenation (`+`).
    Plus,
    /// Multiplication (`*`).
    Times,
    /// Array indexing (`#`).
    Index,
}

/// An expression after fixup, before desugaring.
///
/// Comma chains have been unassociated into ordered element and argument
/// vectors, and `?`/`:` pairs have been reassembled into single ternary
/// nodes. The only remaining sugar is the greater-than operator, which the
/// desugaring pass rewrites in terms of `<`, `=` and `&`.
#[derive(Debug, Clone, PartialEq)]
pub enum SugaredExpr {
    /// A literal leaf.
    Literal(LiteralValue),
    /// A reference to a variable or named constant.
    Name(String),
    /// An input request declaring the expected type.
    Input(Type),
    /// An array literal with an ordered element list.
    Array {
        /// The declared element type.
        element:  Type,
        /// The ordered element expressions.
        elements: Vec<Self>,
    },
    /// A function call with an ordered argument list.
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
        op:    SugaredOperator,
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
