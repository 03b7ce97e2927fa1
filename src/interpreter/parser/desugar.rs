use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::parser::sugared::{SugaredExpr, SugaredOperator},
};

/// Rewrites a fixed-up expression into the desugared core language.
///
/// The single desugaring rule eliminates greater-than:
///
/// ```text
/// a > b   ==>   -(a < b) & -(a = b)
/// ```
///
/// Unary negation inverts booleans at runtime, so the rewrite is exactly
/// "not less and not equal", which coincides with greater-than under the
/// total order on numbers. All other node kinds pass through structurally.
/// The pass terminates because every step strictly decreases the number of
/// `>` nodes, and it cannot fail.
///
/// Note that the rewrite duplicates both operand subtrees; their side
/// effects (an `input` leaf, say) are observed once per duplicate because
/// `&` evaluates both of its operands.
pub fn desugar(expr: SugaredExpr) -> Expr {
    match expr {
        SugaredExpr::Literal(value) => Expr::Literal(value),
        SugaredExpr::Name(name) => Expr::Name(name),
        SugaredExpr::Input(requested) => Expr::Input(requested),

        SugaredExpr::Array { element, elements } => {
            Expr::Array { element,
                          elements: elements.into_iter().map(desugar).collect() }
        },

        SugaredExpr::Call { name, arguments } => {
            Expr::Call { name,
                         arguments: arguments.into_iter().map(desugar).collect() }
        },

        SugaredExpr::Unary { op, operand } => Expr::Unary { op,
                                                            operand:
                                                                Box::new(desugar(*operand)), },

        SugaredExpr::Binary { op, left, right } => {
            let left = desugar(*left);
            let right = desugar(*right);
            match op {
                SugaredOperator::Greater => desugar_greater(left, right),
                SugaredOperator::Equal => binary(BinaryOperator::Equal, left, right),
                SugaredOperator::Less => binary(BinaryOperator::Less, left, right),
                SugaredOperator::And => binary(BinaryOperator::And, left, right),
                SugaredOperator::Plus => binary(BinaryOperator::Plus, left, right),
                SugaredOperator::Times => binary(BinaryOperator::Times, left, right),
                SugaredOperator::Index => binary(BinaryOperator::Index, left, right),
            }
        },

        SugaredExpr::Ternary { condition,
                               then_branch,
                               else_branch, } => {
            Expr::Ternary { condition:   Box::new(desugar(*condition)),
                            then_branch: Box::new(desugar(*then_branch)),
                            else_branch: Box::new(desugar(*else_branch)), }
        },
    }
}

/// Builds `-(a < b) & -(a = b)` from the operands of `a > b`.
fn desugar_greater(left: Expr, right: Expr) -> Expr {
    let not_less = negate(binary(BinaryOperator::Less, left.clone(), right.clone()));
    let not_equal = negate(binary(BinaryOperator::Equal, left, right));
    binary(BinaryOperator::And, not_less, not_equal)
}

fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::Binary { op,
                   left: Box::new(left),
                   right: Box::new(right) }
}

fn negate(operand: Expr) -> Expr {
    Expr::Unary { op:      UnaryOperator::Negate,
                  operand: Box::new(operand), }
}
