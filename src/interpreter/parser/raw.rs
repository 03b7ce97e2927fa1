use crate::ast::{LiteralValue, Type, UnaryOperator};

/// A binary operator of the raw AST level.
///
/// Besides the real operators, this level still contains the three
/// pseudo-operators that the fixup pass eliminates: the comma (list
/// chaining) and the two halves of the ternary conditional.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RawOperator {
    /// List chaining (`,`); unassociated into element lists by fixup.
    Comma,
    /// The first half of a ternary conditional (`?`).
    Question,
    /// The second half of a ternary conditional (`:`).
    Colon,
    /// Equality comparison (`=`).
    Equal,
    /// Less-than comparison (`<`).
    Less,
    /// Greater-than comparison (`>`); removed later by desugaring.
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

/// An expression as built by the prefix parser, before any fixup.
///
/// At this level ternary conditionals are still split into `?` and `:`
/// binary nodes, and array element and call argument lists are still
/// right-nested comma chains (`None` marks an empty list). The fixup pass
/// rewrites a `RawExpr` into a [`SugaredExpr`](super::sugared::SugaredExpr),
/// which has strictly fewer node kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum RawExpr {
    /// A literal leaf.
    Literal(LiteralValue),
    /// A reference to a variable or named constant.
    Name(String),
    /// An input request declaring the expected type.
    Input(Type),
    /// An array literal whose elements are one comma chain, if any.
    Array {
        /// The declared element type.
        element:  Type,
        /// The right-nested element chain, or `None` for `type[]`.
        elements: Option<Box<Self>>,
    },
    /// A function call whose arguments are one comma chain, if any.
    Call {
        /// The callee name.
        name:      String,
        /// The right-nested argument chain, or `None` for `name()`.
        arguments: Option<Box<Self>>,
    },
    /// A unary operation.
    Unary {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation, including the comma and ternary pseudo-operators.
    Binary {
        /// The operator.
        op:    RawOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}
