use bigdecimal::BigDecimal;

use crate::{
    ast::Literal,
    util::num::{format_decimal, is_zero},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value a variable can hold, an expression can
/// produce or a function can return.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// The null value. Also the result of reading an unset variable and of a
    /// function that finishes without `give back`.
    #[default]
    Null,
    /// The explicitly uninitialized value.
    Mysterious,
    /// A boolean value.
    Bool(bool),
    /// An arbitrary-precision decimal.
    Number(BigDecimal),
    /// A string.
    Str(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<BigDecimal> for Value {
    fn from(v: BigDecimal) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Null => Self::Null,
            Literal::Mysterious => Self::Mysterious,
            Literal::Bool(b) => Self::Bool(*b),
            Literal::Number(n) => Self::Number(n.clone()),
            Literal::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// Converts the value to a boolean for conditions and logical operators.
    ///
    /// `null` and `mysterious` are false, numbers are false only at zero and
    /// strings only when empty.
    ///
    /// # Example
    /// ```
    /// use rockstar::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Null.is_truthy());
    /// assert!(Value::from("0").is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null | Self::Mysterious => false,
            Self::Bool(b) => *b,
            Self::Number(n) => !is_zero(n),
            Self::Str(s) => !s.is_empty(),
        }
    }

    /// Name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Mysterious => "mysterious",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Mysterious => write!(f, "mysterious"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_decimal(n)),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
