use crate::{
    ast::{BinaryOperator, Expr, FunctionDecl, Program, Statement, Type, UnaryOperator},
    error::TypeError,
    interpreter::environment::Environment,
};

/// Result type used by the type checker.
pub type TypeResult<T> = Result<T, TypeError>;

/// Checks every function of `program` against the typing rules.
///
/// Each function body is checked in its own environment, seeded with the
/// declared parameter types. Checking runs after constant expansion, so no
/// constant names remain in the tree.
///
/// # Errors
/// The first [`TypeError`] found, if any.
pub fn check_program(program: &Program) -> TypeResult<()> {
    for function in program.functions.values() {
        check_function(program, function)?;
    }
    Ok(())
}

/// Checks a standalone expression outside any program.
///
/// Used for the single-expression entry point; with no surrounding program
/// there are no variables or functions to refer to.
///
/// # Errors
/// The first [`TypeError`] found, if any.
pub fn check_standalone(expr: &Expr) -> TypeResult<Type> {
    let program = Program::default();
    let function = FunctionDecl { name:        Program::ENTRY_POINT.to_string(),
                                  parameters:  Vec::new(),
                                  return_type: None,
                                  body:        Vec::new(),
                                  line:        1, };
    let mut context = Context { program:  &program,
                                function: &function,
                                env:      Environment::new(), };
    context.check_expression(expr)
}

fn check_function(program: &Program, function: &FunctionDecl) -> TypeResult<()> {
    let mut context = Context { program,
                                function,
                                env: Environment::new() };
    for parameter in &function.parameters {
        context.env
               .declare(parameter.name.clone(), parameter.declared.clone());
    }
    for statement in &function.body {
        context.check_statement(statement)?;
    }
    Ok(())
}

/// The checking state for one function body.
struct Context<'a> {
    program:  &'a Program,
    function: &'a FunctionDecl,
    env:      Environment<Type>,
}

impl Context<'_> {
    fn check_statement(&mut self, statement: &Statement) -> TypeResult<()> {
        match statement {
            Statement::Output(expr) => {
                self.check_expression(expr)?;
                Ok(())
            },

            Statement::VariableDeclaration { name,
                                             declared,
                                             initializer, } => {
                if self.env.declared_in_current(name) {
                    return Err(TypeError::AlreadyDeclared { name: name.clone() });
                }
                let found = self.check_expression(initializer)?;
                if found != *declared {
                    return Err(TypeError::DeclarationMismatch { name: name.clone(),
                                                                declared: declared.clone(),
                                                                found });
                }
                self.env.declare(name.clone(), declared.clone());
                Ok(())
            },

            Statement::Assignment { name, value } => {
                let Some(declared) = self.env.get(name).cloned() else {
                    return Err(TypeError::UndefinedVariable { name: name.clone() });
                };
                let found = self.check_expression(value)?;
                if found != declared {
                    return Err(TypeError::AssignmentMismatch { name: name.clone(),
                                                               declared,
                                                               found });
                }
                Ok(())
            },

            Statement::Block(statements) => self.check_frame(statements),

            Statement::If { condition,
                            then_branch,
                            else_branch, } => {
                self.check_condition(condition, "if")?;
                self.check_frame(then_branch)?;
                if let Some(else_branch) = else_branch {
                    self.check_frame(else_branch)?;
                }
                Ok(())
            },

            Statement::While { condition, body } => {
                self.check_condition(condition, "while")?;
                self.check_frame(body)
            },

            Statement::Foreach { variable,
                                 iterable,
                                 body, } => {
                if self.env.contains(variable) {
                    return Err(TypeError::LoopVariableRebound { name: variable.clone() });
                }
                let element = match self.check_expression(iterable)? {
                    Type::Array(element) => *element,
                    found => return Err(TypeError::ExpectedArray { found }),
                };

                self.env.push_frame();
                self.env.declare(variable.clone(), element);
                let result = statements_in_frame(self, body);
                self.env.pop_frame();
                result
            },

            Statement::Call { name, arguments } => {
                self.check_call(name, arguments)?;
                Ok(())
            },

            Statement::Return(expr) => self.check_return(expr.as_ref()),
        }
    }

    /// Checks a statement list in a fresh scope frame.
    fn check_frame(&mut self, statements: &[Statement]) -> TypeResult<()> {
        self.env.push_frame();
        let result = statements_in_frame(self, statements);
        self.env.pop_frame();
        result
    }

    fn check_condition(&mut self, condition: &Expr, construct: &'static str) -> TypeResult<()> {
        match self.check_expression(condition)? {
            Type::Boolean => Ok(()),
            found => Err(TypeError::ConditionNotBoolean { construct, found }),
        }
    }

    fn check_return(&mut self, expr: Option<&Expr>) -> TypeResult<()> {
        match (self.function.return_type.clone(), expr) {
            (None, None) => Ok(()),
            (None, Some(_)) => {
                Err(TypeError::UnexpectedReturnValue { function: self.function.name.clone() })
            },
            (Some(_), None) => {
                Err(TypeError::MissingReturnValue { function: self.function.name.clone() })
            },
            (Some(expected), Some(expr)) => {
                let found = self.check_expression(expr)?;
                if found == expected {
                    Ok(())
                } else {
                    Err(TypeError::ReturnMismatch { expected, found })
                }
            },
        }
    }

    /// Derives the type of an expression, or fails.
    fn check_expression(&mut self, expr: &Expr) -> TypeResult<Type> {
        match expr {
            Expr::Literal(value) => Ok(value.literal_type()),

            Expr::Name(name) => {
                self.env
                    .get(name)
                    .cloned()
                    .ok_or_else(|| TypeError::UndefinedVariable { name: name.clone() })
            },

            Expr::Input(requested) => Ok(requested.clone()),

            Expr::Array { element, elements } => {
                for item in elements {
                    let found = self.check_expression(item)?;
                    if found != *element {
                        return Err(TypeError::ElementMismatch { expected: element.clone(),
                                                                found });
                    }
                }
                Ok(Type::Array(Box::new(element.clone())))
            },

            Expr::Call { name, arguments } => {
                match self.check_call(name, arguments)? {
                    Some(returned) => Ok(returned),
                    None => Err(TypeError::VoidInExpression { function: name.clone() }),
                }
            },

            Expr::Unary { op, operand } => {
                let found = self.check_expression(operand)?;
                match op {
                    // Negation is total and preserves its operand's type:
                    // it negates a number, inverts a boolean, and reverses
                    // a string or an array.
                    UnaryOperator::Negate => Ok(found),
                    UnaryOperator::Stringify => Ok(Type::Str),
                }
            },

            Expr::Binary { op, left, right } => {
                let left = self.check_expression(left)?;
                let right = self.check_expression(right)?;
                check_operator(*op, left, right)
            },

            Expr::Ternary { condition,
                            then_branch,
                            else_branch, } => {
                self.check_condition(condition, "?:")?;
                let then_branch = self.check_expression(then_branch)?;
                let else_branch = self.check_expression(else_branch)?;
                if then_branch == else_branch {
                    Ok(then_branch)
                } else {
                    Err(TypeError::BranchMismatch { then_branch,
                                                    else_branch })
                }
            },
        }
    }

    /// Checks a call's callee and arguments.
    ///
    /// # Returns
    /// The callee's declared return type, `None` for a void function.
    fn check_call(&mut self, name: &str, arguments: &[Expr]) -> TypeResult<Option<Type>> {
        let Some(function) = self.program.functions.get(name) else {
            return Err(TypeError::UndefinedFunction { name: name.to_string() });
        };

        if arguments.len() != function.parameters.len() {
            return Err(TypeError::ArgumentCountMismatch { function: name.to_string(),
                                                          expected: function.parameters.len(),
                                                          found:    arguments.len(), });
        }

        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            let found = self.check_expression(argument)?;
            if found != parameter.declared {
                return Err(TypeError::ArgumentMismatch { function:  name.to_string(),
                                                         parameter: parameter.name.clone(),
                                                         expected:  parameter.declared
                                                                             .clone(),
                                                         found, });
            }
        }

        Ok(function.return_type.clone())
    }
}

fn statements_in_frame(context: &mut Context, statements: &[Statement]) -> TypeResult<()> {
    for statement in statements {
        context.check_statement(statement)?;
    }
    Ok(())
}

/// Derives the result type of a binary operator application.
fn check_operator(op: BinaryOperator, left: Type, right: Type) -> TypeResult<Type> {
    match (op, &left, &right) {
        (BinaryOperator::Plus, Type::Number, Type::Number) => Ok(Type::Number),
        (BinaryOperator::Plus, Type::Str, Type::Str) => Ok(Type::Str),
        (BinaryOperator::Plus, Type::Array(a), Type::Array(b)) if a == b => Ok(left.clone()),
        (BinaryOperator::Times, Type::Number, Type::Number) => Ok(Type::Number),
        (BinaryOperator::And, Type::Boolean, Type::Boolean) => Ok(Type::Boolean),
        (BinaryOperator::Less, Type::Number, Type::Number) => Ok(Type::Boolean),

        // Equality is defined at every type, including deep array equality,
        // but only between operands of one and the same type.
        (BinaryOperator::Equal, _, _) if left == right => Ok(Type::Boolean),

        (BinaryOperator::Index, Type::Array(element), Type::Number) => {
            Ok(element.as_ref().clone())
        },
        (BinaryOperator::Index, Type::Array(_), _)
        | (BinaryOperator::Plus
           | BinaryOperator::Times
           | BinaryOperator::And
           | BinaryOperator::Less
           | BinaryOperator::Equal, ..) => {
            Err(TypeError::OperandMismatch { operator: op.to_string(),
                                             left,
                                             right })
        },
        (BinaryOperator::Index, ..) => Err(TypeError::ExpectedArray { found: left }),
    }
}
