use crate::{
    error::ParseError,
    interpreter::parser::{
        expression::ParseResult,
        raw::{RawExpr, RawOperator},
        sugared::{SugaredExpr, SugaredOperator},
    },
};

/// Rewrites a raw expression into its fixed-up form.
///
/// Two rewrites run together in one bottom-up pass:
///
/// - *List unassociation*: the right-nested comma chains inside array
///   literals and call argument lists are flattened into ordered vectors.
/// - *Ternary reconstruction*: a `?` node whose right child is exactly a
///   `:` node becomes one ternary conditional node.
///
/// The result has strictly fewer node kinds: no comma and no `?`/`:`
/// pseudo-operators survive. Any other placement of those operators is a
/// parse error.
///
/// # Errors
/// - [`ParseError::MismatchedTernary`] for a `?` without `:` or a stray `:`.
/// - [`ParseError::MisplacedComma`] for a comma outside a list context.
pub fn fixup(expr: RawExpr) -> ParseResult<SugaredExpr> {
    match expr {
        RawExpr::Literal(value) => Ok(SugaredExpr::Literal(value)),
        RawExpr::Name(name) => Ok(SugaredExpr::Name(name)),
        RawExpr::Input(requested) => Ok(SugaredExpr::Input(requested)),

        RawExpr::Array { element, elements } => {
            Ok(SugaredExpr::Array { element,
                                    elements: fixup_list(elements)? })
        },

        RawExpr::Call { name, arguments } => {
            Ok(SugaredExpr::Call { name,
                                   arguments: fixup_list(arguments)? })
        },

        RawExpr::Unary { op, operand } => Ok(SugaredExpr::Unary { op,
                                                                  operand:
                                                                      Box::new(fixup(*operand)?), }),

        RawExpr::Binary { op, left, right } => match op {
            RawOperator::Comma => Err(ParseError::MisplacedComma),
            RawOperator::Colon => Err(ParseError::MismatchedTernary),
            RawOperator::Question => fixup_ternary(*left, *right),
            RawOperator::Equal => fixup_binary(SugaredOperator::Equal, *left, *right),
            RawOperator::Less => fixup_binary(SugaredOperator::Less, *left, *right),
            RawOperator::Greater => fixup_binary(SugaredOperator::Greater, *left, *right),
            RawOperator::And => fixup_binary(SugaredOperator::And, *left, *right),
            RawOperator::Plus => fixup_binary(SugaredOperator::Plus, *left, *right),
            RawOperator::Times => fixup_binary(SugaredOperator::Times, *left, *right),
            RawOperator::Index => fixup_binary(SugaredOperator::Index, *left, *right),
        },
    }
}

/// Reassembles a `?` node and its `:` right child into one ternary node.
fn fixup_ternary(condition: RawExpr, right: RawExpr) -> ParseResult<SugaredExpr> {
    match right {
        RawExpr::Binary { op: RawOperator::Colon,
                          left: then_branch,
                          right: else_branch, } => {
            Ok(SugaredExpr::Ternary { condition:   Box::new(fixup(condition)?),
                                      then_branch: Box::new(fixup(*then_branch)?),
                                      else_branch: Box::new(fixup(*else_branch)?), })
        },
        _ => Err(ParseError::MismatchedTernary),
    }
}

/// Fixes up both operands of a real binary operator.
fn fixup_binary(op: SugaredOperator, left: RawExpr, right: RawExpr) -> ParseResult<SugaredExpr> {
    Ok(SugaredExpr::Binary { op,
                             left: Box::new(fixup(left)?),
                             right: Box::new(fixup(right)?) })
}

/// Unassociates an optional comma chain into an ordered, fixed-up list.
///
/// A right-nested chain `a , (b , c)` flattens to `[a, b, c]`; a missing
/// chain is the empty list; any non-comma expression is a singleton.
fn fixup_list(chain: Option<Box<RawExpr>>) -> ParseResult<Vec<SugaredExpr>> {
    let mut items = Vec::new();
    let Some(chain) = chain else {
        return Ok(items);
    };

    let mut current = *chain;
    loop {
        match current {
            RawExpr::Binary { op: RawOperator::Comma,
                              left,
                              right, } => {
                items.push(fixup(*left)?);
                current = *right;
            },
            last => {
                items.push(fixup(last)?);
                return Ok(items);
            },
        }
    }
}
