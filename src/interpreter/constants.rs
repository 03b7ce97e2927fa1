use std::collections::HashMap;

use crate::{
    ast::{Expr, FunctionDecl, Program, Statement},
    error::TypeError,
};

/// Named constant bindings, substituted into the AST before type checking.
pub type ConstantBindings = HashMap<String, Expr>;

/// Whether `name` is written in the constant convention.
///
/// A constant name starts with an uppercase letter and contains only
/// uppercase letters, digits, and underscores; every other name is a
/// variable.
#[must_use]
pub fn is_constant_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase())
    && name.chars()
           .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Expands every constant name in `program` to its bound expression.
///
/// Bound expressions may themselves name other constants and are expanded
/// in turn; bindings are expected to be acyclic.
///
/// # Errors
/// [`TypeError::UndefinedConstant`] for a constant name with no binding.
pub fn expand_program(program: Program, bindings: &ConstantBindings) -> Result<Program, TypeError> {
    let functions = program.functions
                           .into_iter()
                           .map(|(name, function)| {
                               Ok((name, expand_function(function, bindings)?))
                           })
                           .collect::<Result<_, TypeError>>()?;
    Ok(Program { functions })
}

fn expand_function(function: FunctionDecl,
                   bindings: &ConstantBindings)
                   -> Result<FunctionDecl, TypeError> {
    let FunctionDecl { name,
                       parameters,
                       return_type,
                       body,
                       line, } = function;
    Ok(FunctionDecl { name,
                      parameters,
                      return_type,
                      body: expand_statements(body, bindings)?,
                      line })
}

fn expand_statements(statements: Vec<Statement>,
                     bindings: &ConstantBindings)
                     -> Result<Vec<Statement>, TypeError> {
    statements.into_iter()
              .map(|statement| expand_statement(statement, bindings))
              .collect()
}

/// Expands the constants in every expression position of one statement.
///
/// # Errors
/// [`TypeError::UndefinedConstant`] for a constant name with no binding.
pub fn expand_statement(statement: Statement,
                        bindings: &ConstantBindings)
                        -> Result<Statement, TypeError> {
    match statement {
        Statement::Output(expr) => Ok(Statement::Output(expand_expression(expr, bindings)?)),

        Statement::VariableDeclaration { name,
                                         declared,
                                         initializer, } => {
            Ok(Statement::VariableDeclaration { name,
                                                declared,
                                                initializer:
                                                    expand_expression(initializer, bindings)?, })
        },

        Statement::Assignment { name, value } => {
            Ok(Statement::Assignment { name,
                                       value: expand_expression(value, bindings)? })
        },

        Statement::Block(statements) => {
            Ok(Statement::Block(expand_statements(statements, bindings)?))
        },

        Statement::If { condition,
                        then_branch,
                        else_branch, } => {
            Ok(Statement::If { condition:   expand_expression(condition, bindings)?,
                               then_branch: expand_statements(then_branch, bindings)?,
                               else_branch: else_branch.map(|statements| {
                                                            expand_statements(statements,
                                                                              bindings)
                                                        })
                                                        .transpose()?, })
        },

        Statement::While { condition, body } => {
            Ok(Statement::While { condition: expand_expression(condition, bindings)?,
                                  body:      expand_statements(body, bindings)?, })
        },

        Statement::Foreach { variable,
                             iterable,
                             body, } => {
            Ok(Statement::Foreach { variable,
                                    iterable: expand_expression(iterable, bindings)?,
                                    body: expand_statements(body, bindings)? })
        },

        Statement::Call { name, arguments } => {
            Ok(Statement::Call { name,
                                 arguments: expand_expressions(arguments, bindings)? })
        },

        Statement::Return(expr) => {
            Ok(Statement::Return(expr.map(|expr| expand_expression(expr, bindings))
                                     .transpose()?))
        },
    }
}

fn expand_expressions(expressions: Vec<Expr>,
                      bindings: &ConstantBindings)
                      -> Result<Vec<Expr>, TypeError> {
    expressions.into_iter()
               .map(|expr| expand_expression(expr, bindings))
               .collect()
}

/// Replaces every constant name in `expr` with its bound expression.
///
/// # Errors
/// [`TypeError::UndefinedConstant`] for a constant name with no binding.
pub fn expand_expression(expr: Expr, bindings: &ConstantBindings) -> Result<Expr, TypeError> {
    match expr {
        Expr::Name(name) if is_constant_name(&name) => match bindings.get(&name) {
            Some(bound) => expand_expression(bound.clone(), bindings),
            None => Err(TypeError::UndefinedConstant { name }),
        },

        Expr::Literal(_) | Expr::Name(_) | Expr::Input(_) => Ok(expr),

        Expr::Array { element, elements } => {
            Ok(Expr::Array { element,
                             elements: expand_expressions(elements, bindings)? })
        },

        Expr::Call { name, arguments } => {
            Ok(Expr::Call { name,
                            arguments: expand_expressions(arguments, bindings)? })
        },

        Expr::Unary { op, operand } => {
            Ok(Expr::Unary { op,
                             operand: Box::new(expand_expression(*operand, bindings)?) })
        },

        Expr::Binary { op, left, right } => {
            Ok(Expr::Binary { op,
                              left: Box::new(expand_expression(*left, bindings)?),
                              right: Box::new(expand_expression(*right, bindings)?) })
        },

        Expr::Ternary { condition,
                        then_branch,
                        else_branch, } => {
            Ok(Expr::Ternary { condition:   Box::new(expand_expression(*condition, bindings)?),
                               then_branch: Box::new(expand_expression(*then_branch,
                                                                       bindings)?),
                               else_branch: Box::new(expand_expression(*else_branch,
                                                                       bindings)?), })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{ConstantBindings, expand_expression, is_constant_name};
    use crate::{
        ast::{BinaryOperator, Expr, LiteralValue},
        error::TypeError,
    };

    #[test]
    fn constant_convention() {
        assert!(is_constant_name("PI"));
        assert!(is_constant_name("MAX_2"));
        assert!(!is_constant_name("pi"));
        assert!(!is_constant_name("Pi"));
        assert!(!is_constant_name("_X"));
    }

    #[test]
    fn bound_constants_expand_through_chains() {
        let mut bindings = ConstantBindings::new();
        bindings.insert("TWO".to_string(),
                        Expr::Literal(LiteralValue::Number(2.0)));
        bindings.insert("DOUBLE".to_string(),
                        Expr::Binary { op:    BinaryOperator::Plus,
                                       left:  Box::new(Expr::Name("TWO".to_string())),
                                       right: Box::new(Expr::Name("TWO".to_string())), });

        let expanded = expand_expression(Expr::Name("DOUBLE".to_string()), &bindings).unwrap();
        assert_eq!(expanded,
                   Expr::Binary { op:    BinaryOperator::Plus,
                                  left:  Box::new(Expr::Literal(LiteralValue::Number(2.0))),
                                  right: Box::new(Expr::Literal(LiteralValue::Number(2.0))), });
    }

    #[test]
    fn unbound_constant_is_rejected() {
        let result = expand_expression(Expr::Name("MISSING".to_string()),
                                       &ConstantBindings::new());
        assert!(matches!(result, Err(TypeError::UndefinedConstant { .. })));
    }
}
