use std::collections::HashSet;

use crate::{
    error::ParseError,
    interpreter::lexer::{Sort, Token},
};

/// The associativity of a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Associativity {
    Left,
    Right,
}

/// Returns the binding strength and associativity of a binary operator
/// token, or `None` if the token is not a binary operator.
///
/// The table is fixed: comma binds weakest, then `=`, then `?` and `:` at
/// equal strength, then `&`, then `<` and `>`, then `+`, then `*`, and `#`
/// binds strongest. `#` is the only left-associative operator; everything
/// else associates to the right. This inversion is intentional: `a#b#c`
/// must index `(a#b)` with `c`, while `a+b+c` nests as `a+(b+c)`.
const fn binary_operator(token: &Token) -> Option<(u8, Associativity)> {
    match token {
        Token::Comma => Some((0, Associativity::Right)),
        Token::Equal => Some((1, Associativity::Right)),
        Token::Question | Token::Colon => Some((2, Associativity::Right)),
        Token::Ampersand => Some((3, Associativity::Right)),
        Token::Less | Token::Greater => Some((4, Associativity::Right)),
        Token::Plus => Some((5, Associativity::Right)),
        Token::Star => Some((6, Associativity::Right)),
        Token::Hash => Some((7, Associativity::Left)),
        _ => None,
    }
}

/// One entry of the reordering stack.
enum Entry {
    /// A binary operator waiting for its left context.
    Operator(Token, usize),
    /// A `)` marker; the matching `(` pops back to it.
    Paren {
        /// The source line of the `)`.
        line: usize,
    },
    /// A `]` marker; the matching `[` pops back to it.
    Bracket {
        /// The source line of the `]`.
        line: usize,
    },
}

/// Converts an infix token sequence into a fully prefix-ordered one.
///
/// This is a shunting-yard variant scanning the input right-to-left with an
/// operator stack, extended for array literals and call argument lists:
///
/// - operands and unary operators are emitted directly (a unary operator is
///   already prefix relative to its operand);
/// - binary operators pop stronger-binding operators off the stack first,
///   honoring the associativity table;
/// - grouping parentheses are matched and dropped;
/// - call parentheses (a pair whose `(` directly follows a name or the
///   `input` keyword) are retained in place, so the parser can recognize
///   argument lists without lookahead;
/// - brackets are always retained in place to mark array syntax.
///
/// The output is consumed by the recursive-descent prefix parser, which
/// never needs to look ahead or backtrack.
///
/// # Errors
/// Returns a [`ParseError`] on unmatched parentheses or brackets, and on
/// tokens that cannot appear inside an expression (keywords, braces).
pub fn reorder(tokens: &[(Token, usize)]) -> Result<Vec<(Token, usize)>, ParseError> {
    let call_parens = mark_call_parens(tokens)?;

    let mut output: Vec<(Token, usize)> = Vec::new();
    let mut stack: Vec<Entry> = Vec::new();

    for index in (0..tokens.len()).rev() {
        let (token, line) = &tokens[index];
        match token.sort() {
            Sort::Number | Sort::Str | Sort::Bool | Sort::Name | Sort::UnaryOp => {
                output.push((token.clone(), *line));
            },

            Sort::Keyword if matches!(token, Token::Input) => {
                output.push((token.clone(), *line));
            },

            Sort::Paren => match token {
                Token::RParen => {
                    stack.push(Entry::Paren { line: *line });
                    if call_parens.contains(&index) {
                        output.push((token.clone(), *line));
                    }
                },
                _ => {
                    pop_until_paren(&mut stack, &mut output, *line)?;
                    if call_parens.contains(&index) {
                        output.push((token.clone(), *line));
                    }
                },
            },

            Sort::Bracket => match token {
                Token::RBracket => {
                    stack.push(Entry::Bracket { line: *line });
                    output.push((token.clone(), *line));
                },
                _ => {
                    pop_until_bracket(&mut stack, &mut output, *line)?;
                    output.push((token.clone(), *line));
                },
            },

            Sort::BinaryOp => {
                // The table covers every BinaryOp-sorted token.
                let Some((precedence, associativity)) = binary_operator(token) else {
                    return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                             line:  *line, });
                };
                while let Some(Entry::Operator(top, _)) = stack.last() {
                    let Some((top_precedence, _)) = binary_operator(top) else {
                        break;
                    };
                    let pops = top_precedence > precedence
                               || (top_precedence == precedence
                                   && associativity == Associativity::Right);
                    if !pops {
                        break;
                    }
                    if let Some(Entry::Operator(top, top_line)) = stack.pop() {
                        output.push((top, top_line));
                    }
                }
                stack.push(Entry::Operator(token.clone(), *line));
            },

            Sort::Keyword | Sort::Brace => {
                return Err(ParseError::UnexpectedToken { token: format!("'{token}' cannot appear inside an expression"),
                                                         line:  *line, });
            },
        }
    }

    for entry in stack.into_iter().rev() {
        match entry {
            Entry::Operator(token, line) => output.push((token, line)),
            Entry::Paren { line } => return Err(ParseError::UnmatchedParenthesis { line }),
            Entry::Bracket { line } => return Err(ParseError::UnmatchedBracket { line }),
        }
    }

    output.reverse();
    Ok(output)
}

/// Pops operators until the matching `)` marker and removes it.
fn pop_until_paren(stack: &mut Vec<Entry>,
                   output: &mut Vec<(Token, usize)>,
                   line: usize)
                   -> Result<(), ParseError> {
    loop {
        match stack.pop() {
            Some(Entry::Operator(token, token_line)) => output.push((token, token_line)),
            Some(Entry::Paren { .. }) => return Ok(()),
            Some(Entry::Bracket { line }) => return Err(ParseError::UnmatchedBracket { line }),
            None => return Err(ParseError::UnmatchedParenthesis { line }),
        }
    }
}

/// Pops operators until the matching `]` marker and removes it.
fn pop_until_bracket(stack: &mut Vec<Entry>,
                     output: &mut Vec<(Token, usize)>,
                     line: usize)
                     -> Result<(), ParseError> {
    loop {
        match stack.pop() {
            Some(Entry::Operator(token, token_line)) => output.push((token, token_line)),
            Some(Entry::Bracket { .. }) => return Ok(()),
            Some(Entry::Paren { line }) => return Err(ParseError::UnmatchedParenthesis { line }),
            None => return Err(ParseError::UnmatchedBracket { line }),
        }
    }
}

/// Classifies every parenthesis pair of the input by its structural role.
///
/// Returns the set of token indices belonging to call parentheses: pairs
/// whose `(` directly follows a name or the `input` keyword. Those pairs are
/// retained in the prefix output, like brackets; all other pairs are purely
/// grouping and are dropped once matched.
///
/// # Errors
/// Returns a [`ParseError`] if parentheses do not balance.
fn mark_call_parens(tokens: &[(Token, usize)]) -> Result<HashSet<usize>, ParseError> {
    let mut call_parens = HashSet::new();
    let mut open: Vec<(usize, bool)> = Vec::new();

    for (index, (token, line)) in tokens.iter().enumerate() {
        match token {
            Token::LParen => {
                let is_call = index > 0
                              && matches!(tokens[index - 1].0, Token::Name(_) | Token::Input);
                open.push((index, is_call));
            },
            Token::RParen => {
                let Some((open_index, is_call)) = open.pop() else {
                    return Err(ParseError::UnmatchedParenthesis { line: *line });
                };
                if is_call {
                    call_parens.insert(open_index);
                    call_parens.insert(index);
                }
            },
            _ => {},
        }
    }

    if let Some((open_index, _)) = open.pop() {
        return Err(ParseError::UnmatchedParenthesis { line: tokens[open_index].1 });
    }

    Ok(call_parens)
}
