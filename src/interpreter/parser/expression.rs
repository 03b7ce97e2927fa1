use crate::{
    ast::{LiteralValue, Type, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::raw::{RawExpr, RawOperator},
    },
};

/// Result type used by the parsers.
pub type ParseResult<T> = Result<T, ParseError>;

/// An explicit cursor over a prefix-ordered token sequence.
///
/// The prefix form guarantees fixed arity for every operator, so the parser
/// only ever consumes the next token or peeks a bounded number of tokens
/// ahead to recognize bracket structure; it never backtracks.
pub(in crate::interpreter::parser) struct Cursor<'a> {
    tokens:   &'a [(Token, usize)],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(in crate::interpreter::parser) const fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self { tokens, position: 0 }
    }

    /// Consumes and returns the next token.
    fn next(&mut self) -> Option<&'a (Token, usize)> {
        let entry = self.tokens.get(self.position);
        if entry.is_some() {
            self.position += 1;
        }
        entry
    }

    /// Peeks at the token `offset` positions ahead without consuming.
    fn peek_at(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.position + offset).map(|(token, _)| token)
    }

    /// Peeks at the next token without consuming.
    fn peek(&self) -> Option<&'a Token> {
        self.peek_at(0)
    }

    /// Returns the current entry, if any; used for trailing-token checks.
    pub(in crate::interpreter::parser) fn remaining(&self) -> Option<&'a (Token, usize)> {
        self.tokens.get(self.position)
    }

    /// The line of the most recently consumed token, for error reporting.
    fn line(&self) -> usize {
        if self.position == 0 {
            self.tokens.first().map_or(0, |(_, line)| *line)
        } else {
            self.tokens[self.position - 1].1
        }
    }

    /// Consumes the next token and checks that it equals `expected`.
    fn expect(&mut self, expected: &Token) -> ParseResult<()> {
        match self.next() {
            Some((token, _)) if token == expected => Ok(()),
            Some((token, line)) => {
                Err(ParseError::UnexpectedToken { token: format!("Expected '{expected}', found '{token}'"),
                                                  line:  *line, })
            },
            None => Err(ParseError::UnexpectedEndOfInput { line: self.line() }),
        }
    }
}

/// Parses one expression from the prefix token sequence.
///
/// Dispatch per token sort:
/// - literals become leaves;
/// - a name that denotes a type and is followed by `[` becomes an array
///   literal with its bracketed, comma-chained element list;
/// - any other name followed by `(` becomes a function call with its
///   comma-chained argument list;
/// - `input(type)` becomes an input leaf;
/// - unary operators recurse once, binary operators exactly twice
///   (left operand first), since the prefix form fixes the arity.
///
/// Commas and the two ternary pseudo-operators parse as ordinary binary
/// nodes here and are fixed up afterwards.
pub(in crate::interpreter::parser) fn parse_prefix(cursor: &mut Cursor) -> ParseResult<RawExpr> {
    let Some((token, line)) = cursor.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: cursor.line() });
    };

    match token {
        Token::Number(n) => Ok(RawExpr::Literal(LiteralValue::Number(*n))),
        Token::Str(s) => Ok(RawExpr::Literal(LiteralValue::Str(s.clone()))),
        Token::Bool(b) => Ok(RawExpr::Literal(LiteralValue::Bool(*b))),

        Token::Name(name) => {
            if let Some(atomic) = Type::atomic(name)
               && matches!(cursor.peek(), Some(Token::LBracket))
            {
                parse_array_literal(cursor, atomic)
            } else if matches!(cursor.peek(), Some(Token::LParen)) {
                parse_call(cursor, name.clone())
            } else {
                Ok(RawExpr::Name(name.clone()))
            }
        },

        Token::Input => {
            cursor.expect(&Token::LParen)?;
            let requested = parse_type_prefix(cursor)?;
            cursor.expect(&Token::RParen)?;
            Ok(RawExpr::Input(requested))
        },

        Token::Minus => Ok(RawExpr::Unary { op:      UnaryOperator::Negate,
                                            operand: Box::new(parse_prefix(cursor)?), }),
        Token::At => Ok(RawExpr::Unary { op:      UnaryOperator::Stringify,
                                         operand: Box::new(parse_prefix(cursor)?), }),

        Token::Comma => parse_binary(cursor, RawOperator::Comma),
        Token::Question => parse_binary(cursor, RawOperator::Question),
        Token::Colon => parse_binary(cursor, RawOperator::Colon),
        Token::Equal => parse_binary(cursor, RawOperator::Equal),
        Token::Less => parse_binary(cursor, RawOperator::Less),
        Token::Greater => parse_binary(cursor, RawOperator::Greater),
        Token::Ampersand => parse_binary(cursor, RawOperator::And),
        Token::Plus => parse_binary(cursor, RawOperator::Plus),
        Token::Star => parse_binary(cursor, RawOperator::Times),
        Token::Hash => parse_binary(cursor, RawOperator::Index),

        _ => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                               line:  *line, }),
    }
}

/// Parses the two operands of a binary operator, left first.
fn parse_binary(cursor: &mut Cursor, op: RawOperator) -> ParseResult<RawExpr> {
    let left = parse_prefix(cursor)?;
    let right = parse_prefix(cursor)?;
    Ok(RawExpr::Binary { op,
                         left: Box::new(left),
                         right: Box::new(right) })
}

/// Parses an array literal after its leading type name.
///
/// The element type may carry `[]` suffixes: an empty bracket pair that is
/// immediately followed by another `[` deepens the element type, and the
/// final bracket group (possibly empty) is the element list. So `number[]`
/// is an empty array of numbers and `number[][number[1]]` is an array of
/// number arrays with one element.
fn parse_array_literal(cursor: &mut Cursor, atomic: Type) -> ParseResult<RawExpr> {
    let mut element = atomic;
    while matches!(cursor.peek(), Some(Token::LBracket))
          && matches!(cursor.peek_at(1), Some(Token::RBracket))
          && matches!(cursor.peek_at(2), Some(Token::LBracket))
    {
        cursor.next();
        cursor.next();
        element = Type::Array(Box::new(element));
    }

    cursor.expect(&Token::LBracket)?;

    let elements = if matches!(cursor.peek(), Some(Token::RBracket)) {
        None
    } else {
        Some(Box::new(parse_prefix(cursor)?))
    };

    cursor.expect(&Token::RBracket)?;
    Ok(RawExpr::Array { element, elements })
}

/// Parses a function call after its leading name.
///
/// Call parentheses were retained by the reordering pass, so the argument
/// chain is delimited exactly by `(` and `)`.
fn parse_call(cursor: &mut Cursor, name: String) -> ParseResult<RawExpr> {
    cursor.expect(&Token::LParen)?;

    let arguments = if matches!(cursor.peek(), Some(Token::RParen)) {
        None
    } else {
        Some(Box::new(parse_prefix(cursor)?))
    };

    cursor.expect(&Token::RParen)?;
    Ok(RawExpr::Call { name, arguments })
}

/// Parses a type written in an expression position (`input(number[])`).
///
/// A type is an atomic type name followed by any number of `[]` suffix
/// pairs. Brackets are retained by the reordering pass, so the suffixes
/// appear verbatim in the prefix sequence.
fn parse_type_prefix(cursor: &mut Cursor) -> ParseResult<Type> {
    let mut parsed = match cursor.next() {
        Some((Token::Name(name), line)) => {
            Type::atomic(name).ok_or_else(|| ParseError::UnknownTypeName { name: name.clone(),
                                                                           line: *line, })?
        },
        Some((token, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected a type name, found '{token}'"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: cursor.line() }),
    };

    while matches!(cursor.peek(), Some(Token::LBracket))
          && matches!(cursor.peek_at(1), Some(Token::RBracket))
    {
        cursor.next();
        cursor.next();
        parsed = Type::Array(Box::new(parsed));
    }

    Ok(parsed)
}
