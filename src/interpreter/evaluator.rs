//! The tree-walking evaluator.
//!
//! [`Interpreter`] walks the desugared AST of a checked program. Expression
//! evaluation lives in [`expression`], statement execution in [`statement`];
//! both share the scope-frame [`Environment`] and reach the outside world
//! only through the [`Runtime`] collaborator.

mod expression;
mod statement;

use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{environment::Environment, runtime::Runtime, value::Value},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `return` unwinds through every enclosing block and loop of the current
/// function; the executors propagate this outcome instead of raising it.
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `return` was executed, with its value if one was given.
    Return(Option<Value>),
}

/// A tree-walking interpreter for one program.
pub struct Interpreter<'a> {
    program: &'a Program,
    runtime: &'a mut dyn Runtime,
}

impl<'a> Interpreter<'a> {
    /// Creates an interpreter for `program` that talks to `runtime`.
    pub fn new(program: &'a Program, runtime: &'a mut dyn Runtime) -> Self {
        Self { program, runtime }
    }

    /// Runs the program from its entry point.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised during execution, including the absence
    /// of the entry point itself.
    pub fn run(&mut self) -> EvalResult<()> {
        self.call_function(Program::ENTRY_POINT, Vec::new())?;
        Ok(())
    }

    /// Calls a function with already evaluated arguments.
    ///
    /// The body runs in a fresh environment seeded with the parameters;
    /// nothing from the caller's scopes is visible inside.
    ///
    /// # Returns
    /// The returned value, or `None` when the body completed without one.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised by the body.
    pub fn call_function(&mut self,
                         name: &str,
                         arguments: Vec<Value>)
                         -> EvalResult<Option<Value>> {
        let Some(function) = self.program.functions.get(name) else {
            return Err(RuntimeError::UndefinedFunction { name: name.to_string() });
        };

        if arguments.len() != function.parameters.len() {
            return Err(RuntimeError::ArgumentCountMismatch { function: name.to_string(),
                                                             expected: function.parameters
                                                                               .len(),
                                                             found:    arguments.len(), });
        }

        let mut env = Environment::new();
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            env.declare(parameter.name.clone(), argument);
        }

        match self.execute_all(&mut env, &function.body)? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(None),
        }
    }

    /// Evaluates a standalone expression in an empty environment.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised along the way.
    pub fn eval_standalone(&mut self, expr: &Expr) -> EvalResult<Value> {
        let mut env = Environment::new();
        self.eval(&mut env, expr)
    }
}
