use std::fmt::{self, Display, Formatter};

use crate::ast::{LiteralValue, Type, format_number};

/// A value produced by evaluation.
///
/// Equality is structural: arrays compare elementwise, which is what the
/// `=` operator relies on.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A floating-point number.
    Number(f64),
    /// A boolean.
    Bool(bool),
    /// A string.
    Str(String),
    /// An array of values, homogeneous by construction.
    Array(Vec<Value>),
}

impl Value {
    /// A short description of the value's kind, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
        }
    }

    /// Whether the value inhabits `expected`.
    ///
    /// An empty array inhabits every array type, since it carries no
    /// element to witness the element type.
    #[must_use]
    pub fn inhabits(&self, expected: &Type) -> bool {
        match (self, expected) {
            (Self::Number(_), Type::Number)
            | (Self::Bool(_), Type::Boolean)
            | (Self::Str(_), Type::Str) => true,
            (Self::Array(elements), Type::Array(element)) => {
                elements.iter().all(|value| value.inhabits(element))
            },
            _ => false,
        }
    }
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(n),
            LiteralValue::Bool(b) => Self::Bool(b),
            LiteralValue::Str(s) => Self::Str(s),
        }
    }
}

impl Display for Value {
    /// Formats the value as the language prints it.
    ///
    /// Whole numbers print without a fractional part, booleans as `true` and
    /// `false`, strings without quotes, and arrays as bracketed
    /// comma-separated element lists.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use crate::ast::Type;

    #[test]
    fn whole_numbers_print_without_fraction() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn arrays_print_bracketed() {
        let value = Value::Array(vec![Value::Number(1.0), Value::Str("hi".to_string())]);
        assert_eq!(value.to_string(), "[1, hi]");
    }

    #[test]
    fn empty_array_inhabits_every_array_type() {
        let empty = Value::Array(Vec::new());
        assert!(empty.inhabits(&Type::Array(Box::new(Type::Number))));
        assert!(empty.inhabits(&Type::Array(Box::new(Type::Str))));
        assert!(!empty.inhabits(&Type::Number));
    }
}
