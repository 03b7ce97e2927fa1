use std::{
    collections::VecDeque,
    io::{BufRead, Write},
};

use crate::{ast::Type, error::RuntimeError, interpreter::value::Value};

/// The evaluator's connection to the outside world.
///
/// Every `input(...)` expression and `output(...)` statement goes through
/// this trait, so the same program can run against the console or against
/// scripted inputs in tests.
pub trait Runtime {
    /// Produces one value of the requested type.
    ///
    /// # Errors
    /// [`RuntimeError`] when no suitable value can be produced.
    fn input(&mut self, requested: &Type) -> Result<Value, RuntimeError>;

    /// Consumes one output value.
    fn output(&mut self, value: &Value);
}

/// A runtime backed by standard input and output.
///
/// Each input request prints a prompt naming the requested type and reads
/// one line; a line that does not parse as that type is reported and the
/// prompt repeats. Array inputs cannot be entered on a single line and are
/// rejected.
#[derive(Debug, Default)]
pub struct ConsoleRuntime;

impl ConsoleRuntime {
    fn read_line() -> Result<String, RuntimeError> {
        let mut line = String::new();
        let count = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|error| RuntimeError::InputFailed { details: error.to_string() })?;
        if count == 0 {
            return Err(RuntimeError::InputExhausted);
        }
        Ok(line.trim().to_string())
    }

    fn parse(line: &str, requested: &Type) -> Option<Value> {
        match requested {
            Type::Number => line.parse().ok().map(Value::Number),
            Type::Boolean => line.parse().ok().map(Value::Bool),
            Type::Str => Some(Value::Str(line.to_string())),
            Type::Array(_) => None,
        }
    }
}

impl Runtime for ConsoleRuntime {
    fn input(&mut self, requested: &Type) -> Result<Value, RuntimeError> {
        if matches!(requested, Type::Array(_)) {
            return Err(RuntimeError::InputUnsupported { requested: requested.clone() });
        }

        loop {
            print!("input ({requested}): ");
            std::io::stdout()
                .flush()
                .map_err(|error| RuntimeError::InputFailed { details: error.to_string() })?;

            let line = Self::read_line()?;
            if let Some(value) = Self::parse(&line, requested) {
                return Ok(value);
            }
            println!("'{line}' is not a valid {requested}.");
        }
    }

    fn output(&mut self, value: &Value) {
        println!("{value}");
    }
}

/// A runtime with a fixed input queue and recorded outputs, for tests.
#[derive(Debug, Default)]
pub struct ScriptedRuntime {
    inputs:  VecDeque<Value>,
    outputs: Vec<String>,
}

impl ScriptedRuntime {
    /// Creates a runtime that will serve `inputs` in order.
    #[must_use]
    pub fn new(inputs: Vec<Value>) -> Self {
        Self { inputs:  inputs.into(),
               outputs: Vec::new(), }
    }

    /// The outputs recorded so far, in order, as printed.
    #[must_use]
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }
}

impl Runtime for ScriptedRuntime {
    fn input(&mut self, requested: &Type) -> Result<Value, RuntimeError> {
        let value = self.inputs.pop_front().ok_or(RuntimeError::InputExhausted)?;
        if value.inhabits(requested) {
            Ok(value)
        } else {
            Err(RuntimeError::InputMismatch { expected: requested.clone(),
                                              found:    value.kind().to_string(), })
        }
    }

    fn output(&mut self, value: &Value) {
        self.outputs.push(value.to_string());
    }
}
