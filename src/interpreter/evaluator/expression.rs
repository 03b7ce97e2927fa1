use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates an expression to a value.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised along the way, including input failures.
    pub(super) fn eval(&mut self, env: &mut Environment<Value>, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal(value) => Ok(Value::from(value.clone())),

            Expr::Name(name) => {
                env.get(name)
                   .cloned()
                   .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() })
            },

            Expr::Input(requested) => self.runtime.input(requested),

            Expr::Array { elements, .. } => {
                Ok(Value::Array(self.eval_all(env, elements)?))
            },

            Expr::Call { name, arguments } => {
                let arguments = self.eval_all(env, arguments)?;
                self.call_function(name, arguments)?
                    .ok_or_else(|| RuntimeError::MissingReturnValue { function: name.clone() })
            },

            Expr::Unary { op, operand } => {
                let operand = self.eval(env, operand)?;
                Ok(apply_unary(*op, operand))
            },

            Expr::Binary { op, left, right } => {
                let left = self.eval(env, left)?;
                let right = self.eval(env, right)?;
                apply_binary(*op, left, right)
            },

            // The untaken branch is never evaluated, so its side effects
            // (inputs, calls) do not happen.
            Expr::Ternary { condition,
                            then_branch,
                            else_branch, } => {
                match self.eval(env, condition)? {
                    Value::Bool(true) => self.eval(env, then_branch),
                    Value::Bool(false) => self.eval(env, else_branch),
                    _ => Err(RuntimeError::ExpectedBoolean { construct: "?: condition" }),
                }
            },
        }
    }

    /// Evaluates a list of expressions in order.
    pub(super) fn eval_all(&mut self,
                           env: &mut Environment<Value>,
                           expressions: &[Expr])
                           -> EvalResult<Vec<Value>> {
        expressions.iter()
                   .map(|expr| self.eval(env, expr))
                   .collect()
    }
}

/// Applies a unary operator. Negation is total: it negates a number,
/// inverts a boolean, and reverses a string or an array.
fn apply_unary(op: UnaryOperator, operand: Value) -> Value {
    match (op, operand) {
        (UnaryOperator::Negate, Value::Number(n)) => Value::Number(-n),
        (UnaryOperator::Negate, Value::Bool(b)) => Value::Bool(!b),
        (UnaryOperator::Negate, Value::Str(s)) => Value::Str(s.chars().rev().collect()),
        (UnaryOperator::Negate, Value::Array(mut elements)) => {
            elements.reverse();
            Value::Array(elements)
        },
        (UnaryOperator::Stringify, value) => Value::Str(value.to_string()),
    }
}

fn apply_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
    match (op, left, right) {
        (BinaryOperator::Plus, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (BinaryOperator::Plus, Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
        (BinaryOperator::Plus, Value::Array(mut a), Value::Array(b)) => {
            a.extend(b);
            Ok(Value::Array(a))
        },
        (BinaryOperator::Times, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
        (BinaryOperator::And, Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(a && b)),
        (BinaryOperator::Less, Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a < b)),

        (BinaryOperator::Equal, left, right) if left.kind() == right.kind() => {
            // Structural equality; arrays compare elementwise.
            Ok(Value::Bool(left == right))
        },

        (BinaryOperator::Index, Value::Array(elements), Value::Number(index)) => {
            index_array(&elements, index)
        },
        (BinaryOperator::Index, left, _) if !matches!(left, Value::Array(_)) => {
            Err(RuntimeError::ExpectedArray { found: left.kind().to_string() })
        },

        (_, left, right) => {
            Err(RuntimeError::IncompatibleOperands { operator: op.to_string(),
                                                     left:     left.kind().to_string(),
                                                     right:    right.kind().to_string(), })
        },
    }
}

/// Looks up a zero-based element, rejecting fractional and negative indices.
fn index_array(elements: &[Value], index: f64) -> EvalResult<Value> {
    if index < 0.0 || index.fract() != 0.0 {
        return Err(RuntimeError::InvalidIndex { index });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let position = index as usize;
    elements.get(position)
            .cloned()
            .ok_or(RuntimeError::IndexOutOfBounds { length: elements.len(),
                                                    index:  position as i64, })
}
