use std::collections::HashSet;

use crate::{
    ast::{Expr, FunctionDecl, Parameter, Program, Statement, Type},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{expression::ParseResult, parse_expression},
    },
};

/// A cursor-based parser over the statement dialect's token sequence.
///
/// Statements are parsed by recursive descent directly over the infix
/// tokens. Every expression position is extracted as a balanced token slice
/// (up to `;` or the matching `)`) and handed to the expression pipeline
/// (reordering, prefix parsing, fixup, desugaring); this parser only deals
/// with statement structure.
pub(in crate::interpreter::parser) struct StatementParser<'a> {
    tokens:   &'a [(Token, usize)],
    position: usize,
}

impl<'a> StatementParser<'a> {
    pub(in crate::interpreter::parser) const fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self { tokens, position: 0 }
    }

    /// Parses a whole program: a sequence of `def` declarations.
    ///
    /// The result maps each function name to its declaration; duplicate
    /// names are rejected.
    pub(in crate::interpreter::parser) fn parse_program(&mut self) -> ParseResult<Program> {
        let mut program = Program::default();

        while self.peek().is_some() {
            let function = self.parse_function()?;
            if program.functions.contains_key(&function.name) {
                return Err(ParseError::DuplicateFunction { name: function.name,
                                                           line: function.line, });
            }
            program.functions.insert(function.name.clone(), function);
        }

        Ok(program)
    }

    /// Parses the flat statement dialect: statements until end of input.
    pub(in crate::interpreter::parser) fn parse_script(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        while self.peek().is_some() {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position).map(|(token, _)| token)
    }

    fn peek_at(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.position + offset).map(|(token, _)| token)
    }

    fn next(&mut self) -> Option<&'a (Token, usize)> {
        let entry = self.tokens.get(self.position);
        if entry.is_some() {
            self.position += 1;
        }
        entry
    }

    /// The line of the token at the cursor, or of the last token seen.
    fn line(&self) -> usize {
        self.tokens
            .get(self.position.min(self.tokens.len().saturating_sub(1)))
            .map_or(0, |(_, line)| *line)
    }

    fn expect(&mut self, expected: &Token) -> ParseResult<usize> {
        match self.next() {
            Some((token, line)) if token == expected => Ok(*line),
            Some((token, line)) => {
                Err(ParseError::UnexpectedToken { token: format!("Expected '{expected}', found '{token}'"),
                                                  line:  *line, })
            },
            None => Err(ParseError::UnexpectedEndOfInput { line: self.line() }),
        }
    }

    /// Consumes the next token, which must be a plain name.
    fn expect_name(&mut self) -> ParseResult<String> {
        match self.next() {
            Some((Token::Name(name), _)) => Ok(name.clone()),
            Some((token, line)) => {
                Err(ParseError::UnexpectedToken { token: format!("Expected a name, found '{token}'"),
                                                  line:  *line, })
            },
            None => Err(ParseError::UnexpectedEndOfInput { line: self.line() }),
        }
    }

    /// Parses a declared type: an atomic type name with `[]` suffixes.
    fn parse_type(&mut self) -> ParseResult<Type> {
        let line = self.line();
        let name = self.expect_name()?;
        let mut parsed =
            Type::atomic(&name).ok_or(ParseError::UnknownTypeName { name, line })?;

        while matches!(self.peek(), Some(Token::LBracket))
              && matches!(self.peek_at(1), Some(Token::RBracket))
        {
            self.next();
            self.next();
            parsed = Type::Array(Box::new(parsed));
        }

        Ok(parsed)
    }

    /// Extracts a balanced token slice up to `delimiter` and runs the
    /// expression pipeline on it. The delimiter itself is consumed.
    ///
    /// Nesting is tracked for all three bracket kinds, so the delimiter only
    /// matches at the nesting depth of the cursor: `output(f(1, 2));` finds
    /// the outer `)`, not the one closing the call.
    fn expression_until(&mut self, delimiter: &Token) -> ParseResult<Expr> {
        let start = self.position;
        let mut depth = 0usize;

        for index in self.position..self.tokens.len() {
            let (token, line) = &self.tokens[index];
            if depth == 0 && token == delimiter {
                let slice = &self.tokens[start..index];
                if slice.is_empty() {
                    return Err(ParseError::UnexpectedToken { token: format!("Expected an expression before '{delimiter}'"),
                                                             line:  *line, });
                }
                self.position = index + 1;
                return parse_expression(slice);
            }
            match token {
                Token::LParen | Token::LBracket | Token::LBrace => depth += 1,
                Token::RParen | Token::RBracket | Token::RBrace => {
                    depth = depth.checked_sub(1).ok_or(match token {
                                       Token::RParen => {
                                           ParseError::UnmatchedParenthesis { line: *line }
                                       },
                                       _ => ParseError::UnmatchedBracket { line: *line },
                                   })?;
                },
                _ => {},
            }
        }

        Err(ParseError::UnexpectedEndOfInput { line: self.line() })
    }

    /// Parses a braced statement list.
    fn parse_block(&mut self) -> ParseResult<Vec<Statement>> {
        self.expect(&Token::LBrace)?;

        let mut statements = Vec::new();
        loop {
            match self.peek() {
                Some(Token::RBrace) => {
                    self.next();
                    return Ok(statements);
                },
                Some(_) => statements.push(self.parse_statement()?),
                None => return Err(ParseError::UnexpectedEndOfInput { line: self.line() }),
            }
        }
    }

    /// Parses a single statement.
    ///
    /// A statement may be an output, a variable declaration, an assignment,
    /// a bare call, a block, an `if`/`else`, a `while`, a `foreach`, or a
    /// `return`. The leading token decides; for a leading name, one token of
    /// lookahead separates assignments from bare calls.
    fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.peek() {
            Some(Token::Output) => {
                self.next();
                self.expect(&Token::LParen)?;
                let expr = self.expression_until(&Token::RParen)?;
                self.expect(&Token::Semicolon)?;
                Ok(Statement::Output(expr))
            },

            Some(Token::Var) => {
                self.next();
                let name = self.expect_name()?;
                self.expect(&Token::Colon)?;
                let declared = self.parse_type()?;
                self.expect(&Token::Equal)?;
                let initializer = self.expression_until(&Token::Semicolon)?;
                Ok(Statement::VariableDeclaration { name,
                                                    declared,
                                                    initializer })
            },

            Some(Token::LBrace) => Ok(Statement::Block(self.parse_block()?)),

            Some(Token::If) => {
                self.next();
                self.expect(&Token::LParen)?;
                let condition = self.expression_until(&Token::RParen)?;
                let then_branch = self.parse_block()?;
                let else_branch = if matches!(self.peek(), Some(Token::Else)) {
                    self.next();
                    Some(self.parse_block()?)
                } else {
                    None
                };
                Ok(Statement::If { condition,
                                   then_branch,
                                   else_branch })
            },

            Some(Token::While) => {
                self.next();
                self.expect(&Token::LParen)?;
                let condition = self.expression_until(&Token::RParen)?;
                let body = self.parse_block()?;
                Ok(Statement::While { condition, body })
            },

            Some(Token::Foreach) => {
                self.next();
                self.expect(&Token::LParen)?;
                self.expect(&Token::Var)?;
                let variable = self.expect_name()?;
                self.expect(&Token::Arrow)?;
                let iterable = self.expression_until(&Token::RParen)?;
                let body = self.parse_block()?;
                Ok(Statement::Foreach { variable,
                                        iterable,
                                        body })
            },

            Some(Token::Return) => {
                self.next();
                if matches!(self.peek(), Some(Token::Semicolon)) {
                    self.next();
                    Ok(Statement::Return(None))
                } else {
                    Ok(Statement::Return(Some(self.expression_until(&Token::Semicolon)?)))
                }
            },

            Some(Token::Name(_)) => match self.peek_at(1) {
                Some(Token::Equal) => {
                    let name = self.expect_name()?;
                    self.next();
                    let value = self.expression_until(&Token::Semicolon)?;
                    Ok(Statement::Assignment { name, value })
                },
                Some(Token::LParen) => self.parse_bare_call(),
                _ => Err(ParseError::UnexpectedToken { token: format!("Expected '=' or '(' after '{}'",
                                                                     self.tokens[self.position].0),
                                                       line:  self.line(), }),
            },

            Some(token) => Err(ParseError::UnexpectedToken { token: format!("'{token}' cannot start a statement"),
                                                             line:  self.line(), }),

            None => Err(ParseError::UnexpectedEndOfInput { line: self.line() }),
        }
    }

    /// Parses a call statement: the whole `name(args)` span runs through the
    /// expression pipeline and must come back as a call node.
    fn parse_bare_call(&mut self) -> ParseResult<Statement> {
        let line = self.line();
        let expr = self.expression_until(&Token::Semicolon)?;
        match expr {
            Expr::Call { name, arguments } => Ok(Statement::Call { name, arguments }),
            other => Err(ParseError::UnexpectedToken { token: format!("Expected a call statement, found expression '{other}'"),
                                                       line, }),
        }
    }

    /// Parses one `def` declaration.
    ///
    /// Syntax: `def name(param: type, ...): returnType { statements }`, with
    /// the `: returnType` part absent for void functions. Parameter names
    /// must be pairwise distinct.
    fn parse_function(&mut self) -> ParseResult<FunctionDecl> {
        let line = self.expect(&Token::Def)?;
        let name = self.expect_name()?;
        self.expect(&Token::LParen)?;

        let mut parameters: Vec<Parameter> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        if matches!(self.peek(), Some(Token::RParen)) {
            self.next();
        } else {
            loop {
                let parameter_name = self.expect_name()?;
                self.expect(&Token::Colon)?;
                let declared = self.parse_type()?;

                if !seen.insert(parameter_name.clone()) {
                    return Err(ParseError::DuplicateParameter { name:     parameter_name,
                                                                function: name,
                                                                line, });
                }
                parameters.push(Parameter { name: parameter_name,
                                            declared });

                match self.next() {
                    Some((Token::Comma, _)) => {},
                    Some((Token::RParen, _)) => break,
                    Some((token, line)) => {
                        return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or ')', found '{token}'"),
                                                                 line:  *line, });
                    },
                    None => return Err(ParseError::UnexpectedEndOfInput { line: self.line() }),
                }
            }
        }

        let return_type = if matches!(self.peek(), Some(Token::Colon)) {
            self.next();
            Some(self.parse_type()?)
        } else {
            None
        };

        let body = self.parse_block()?;

        Ok(FunctionDecl { name,
                          parameters,
                          return_type,
                          body,
                          line })
    }
}
