use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{EvalResult, Flow, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Executes statements in order until one returns or the list ends.
    pub(super) fn execute_all(&mut self,
                              env: &mut Environment<Value>,
                              statements: &[Statement])
                              -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.execute(env, statement)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes one statement.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised by the statement or the expressions it
    /// contains.
    fn execute(&mut self,
               env: &mut Environment<Value>,
               statement: &Statement)
               -> EvalResult<Flow> {
        match statement {
            Statement::Output(expr) => {
                let value = self.eval(env, expr)?;
                self.runtime.output(&value);
                Ok(Flow::Normal)
            },

            Statement::VariableDeclaration { name, initializer, .. } => {
                let value = self.eval(env, initializer)?;
                env.declare(name.clone(), value);
                Ok(Flow::Normal)
            },

            Statement::Assignment { name, value } => {
                let value = self.eval(env, value)?;
                if env.assign(name, value) {
                    Ok(Flow::Normal)
                } else {
                    Err(RuntimeError::UndefinedVariable { name: name.clone() })
                }
            },

            Statement::Block(statements) => self.execute_frame(env, statements),

            Statement::If { condition,
                            then_branch,
                            else_branch, } => {
                if self.eval_condition(env, condition, "if condition")? {
                    self.execute_frame(env, then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute_frame(env, else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            },

            Statement::While { condition, body } => {
                while self.eval_condition(env, condition, "while condition")? {
                    if let Flow::Return(value) = self.execute_frame(env, body)? {
                        return Ok(Flow::Return(value));
                    }
                }
                Ok(Flow::Normal)
            },

            Statement::Foreach { variable,
                                 iterable,
                                 body, } => self.execute_foreach(env, variable, iterable, body),

            Statement::Call { name, arguments } => {
                let arguments = self.eval_all(env, arguments)?;
                // A returned value, if any, is discarded.
                self.call_function(name, arguments)?;
                Ok(Flow::Normal)
            },

            Statement::Return(expr) => {
                let value = match expr {
                    Some(expr) => Some(self.eval(env, expr)?),
                    None => None,
                };
                Ok(Flow::Return(value))
            },
        }
    }

    /// Executes a statement list in a fresh scope frame.
    fn execute_frame(&mut self,
                     env: &mut Environment<Value>,
                     statements: &[Statement])
                     -> EvalResult<Flow> {
        env.push_frame();
        let flow = self.execute_all(env, statements);
        env.pop_frame();
        flow
    }

    fn eval_condition(&mut self,
                      env: &mut Environment<Value>,
                      condition: &Expr,
                      construct: &'static str)
                      -> EvalResult<bool> {
        match self.eval(env, condition)? {
            Value::Bool(value) => Ok(value),
            _ => Err(RuntimeError::ExpectedBoolean { construct }),
        }
    }

    /// Runs a `foreach` loop.
    ///
    /// The iterable expression is re-evaluated before every iteration, so a
    /// body that assigns a longer or shorter array to the iterated variable
    /// changes the remaining trip count. Iteration `i` binds the loop
    /// variable to element `i` of whatever the expression currently yields;
    /// the loop ends once `i` reaches the current length.
    fn execute_foreach(&mut self,
                       env: &mut Environment<Value>,
                       variable: &str,
                       iterable: &Expr,
                       body: &[Statement])
                       -> EvalResult<Flow> {
        if env.contains(variable) {
            return Err(RuntimeError::LoopVariableRebound { name: variable.to_string() });
        }

        let mut position = 0;
        loop {
            let elements = match self.eval(env, iterable)? {
                Value::Array(elements) => elements,
                other => {
                    return Err(RuntimeError::ExpectedArray { found: other.kind()
                                                                         .to_string(), });
                },
            };
            let Some(element) = elements.into_iter().nth(position) else {
                return Ok(Flow::Normal);
            };

            env.push_frame();
            env.declare(variable.to_string(), element);
            let flow = self.execute_all(env, body);
            env.pop_frame();

            if let Flow::Return(value) = flow? {
                return Ok(Flow::Return(value));
            }
            position += 1;
        }
    }
}
