use std::cmp::Ordering;

use bigdecimal::BigDecimal;

use crate::{
    error::RuntimeError,
    interpreter::value::core::Value,
    location::SourceLocation,
    util::num::{is_zero, parse_decimal},
};

impl Value {
    /// Converts the value to a number, if it has a numeric reading.
    ///
    /// Numbers convert to themselves, `null` to zero and strings when their
    /// whole text is a number literal.
    ///
    /// # Returns
    /// `None` for booleans, `mysterious` and non-numeric strings.
    #[must_use]
    pub fn to_number(&self) -> Option<BigDecimal> {
        match self {
            Self::Number(n) => Some(n.clone()),
            Self::Null => Some(BigDecimal::from(0)),
            Self::Str(s) => parse_decimal(s),
            Self::Bool(_) | Self::Mysterious => None,
        }
    }

    /// Equality with type coercion, as performed by `is` and `ain't`.
    ///
    /// - `mysterious` equals only `mysterious`.
    /// - `null` equals `null`, zero, the empty string and `false`.
    /// - A boolean compares with the truthiness of the other side.
    /// - A number and a string compare numerically when the string is a
    ///   number, and are unequal otherwise.
    ///
    /// # Example
    /// ```
    /// use rockstar::interpreter::value::core::Value;
    ///
    /// let five = Value::Number(5.into());
    ///
    /// assert!(five.loosely_equals(&Value::from("5.0")));
    /// assert!(Value::Null.loosely_equals(&Value::Bool(false)));
    /// assert!(!Value::Mysterious.loosely_equals(&Value::Null));
    /// ```
    #[must_use]
    pub fn loosely_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Mysterious, Self::Mysterious) | (Self::Null, Self::Null) => true,
            (Self::Mysterious, _) | (_, Self::Mysterious) => false,
            (Self::Null, Self::Number(n)) | (Self::Number(n), Self::Null) => is_zero(n),
            (Self::Null, Self::Str(s)) | (Self::Str(s), Self::Null) => s.is_empty(),
            (Self::Bool(b), other) | (other, Self::Bool(b)) => *b == other.is_truthy(),
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Number(n), Self::Str(s)) | (Self::Str(s), Self::Number(n)) => {
                parse_decimal(s).is_some_and(|parsed| parsed == *n)
            },
        }
    }

    /// Orders two values for the comparison phrases.
    ///
    /// Numbers order numerically and strings lexicographically. A number
    /// orders against a string that is a number, and `null` orders as zero
    /// against numbers and as the empty string against strings.
    ///
    /// # Parameters
    /// - `other`: The right-hand operand.
    /// - `location`: Span of the comparison, for errors.
    ///
    /// # Errors
    /// - `ComparisonError` when either side is `mysterious` or both are
    ///   booleans.
    /// - `TypeError` for any other pair without a common order.
    pub fn compare(&self, other: &Self, location: SourceLocation) -> Result<Ordering, RuntimeError> {
        let zero = BigDecimal::from(0);

        match (self, other) {
            (Self::Mysterious, _) | (_, Self::Mysterious) => {
                Err(RuntimeError::ComparisonError { details: "mysterious has no order".to_string(),
                                                    location })
            },
            (Self::Bool(_), Self::Bool(_)) => {
                Err(RuntimeError::ComparisonError { details: "booleans have no order".to_string(),
                                                    location })
            },
            (Self::Null, Self::Null) => Ok(Ordering::Equal),
            (Self::Number(a), Self::Number(b)) => Ok(a.cmp(b)),
            (Self::Str(a), Self::Str(b)) => Ok(a.cmp(b)),
            (Self::Null, Self::Number(n)) => Ok(zero.cmp(n)),
            (Self::Number(n), Self::Null) => Ok(n.cmp(&zero)),
            (Self::Null, Self::Str(s)) => Ok("".cmp(s.as_str())),
            (Self::Str(s), Self::Null) => Ok(s.as_str().cmp("")),
            (Self::Number(n), Self::Str(s)) => match parse_decimal(s) {
                Some(parsed) => Ok(n.cmp(&parsed)),
                None => Err(self.incomparable(other, location)),
            },
            (Self::Str(s), Self::Number(n)) => match parse_decimal(s) {
                Some(parsed) => Ok(parsed.cmp(n)),
                None => Err(self.incomparable(other, location)),
            },
            _ => Err(self.incomparable(other, location)),
        }
    }

    fn incomparable(&self, other: &Self, location: SourceLocation) -> RuntimeError {
        RuntimeError::TypeError { details: format!("cannot compare {} with {}",
                                                   self.type_name(),
                                                   other.type_name()),
                                  location }
    }
}
