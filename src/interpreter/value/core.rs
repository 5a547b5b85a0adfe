use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::LiteralValue,
    interpreter::value::function::Function,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types a program can produce: the nil unit,
/// booleans, 64-bit integers, double-precision floats, immutable strings,
/// mutable shared arrays, and callable functions.
///
/// Arrays are reference values: cloning a `Value::Array` clones the handle,
/// not the buffer, so element assignment through one binding is observable
/// through every other. Functions compare by handle identity.
///
/// The `Display` implementation is the language's `toString`:
/// ```
/// use parlance::interpreter::value::core::Value;
///
/// assert_eq!(Value::Nil.to_string(), "nil");
/// assert_eq!(Value::Bool(true).to_string(), "true");
/// assert_eq!(Value::Real(2.0).to_string(), "2");
/// assert_eq!(Value::from(vec![Value::Integer(1), Value::Integer(2)]).to_string(),
///            "[1, 2]");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value. Produced by declarations, by `if` without a
    /// taken branch, and by functions that do not return.
    Nil,
    /// A boolean value, produced by comparisons and logical operators.
    Bool(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double-precision float.
    Real(f64),
    /// An immutable character sequence.
    Str(String),
    /// An ordered, mutable sequence of values with 0-based indices.
    Array(Rc<RefCell<Vec<Self>>>),
    /// A callable handle, either a native built-in or a user function.
    Function(Rc<Function>),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(values)))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => (*n).into(),
            LiteralValue::Real(r) => (*r).into(),
            LiteralValue::Str(s) => s.clone().into(),
        }
    }
}

impl Value {
    /// Coerces the value to a boolean for control-flow predicates.
    ///
    /// Nil is false; booleans are themselves; numbers are true when nonzero;
    /// strings and arrays are true when non-empty; functions are always
    /// true.
    ///
    /// # Examples
    /// ```
    /// use parlance::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(Value::Real(0.5).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(Value::Str("x".into()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Array(a) => !a.borrow().is_empty(),
            Self::Function(_) => true,
        }
    }

    /// Returns `true` if the value is numeric (integer or float).
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// Returns the numeric value viewed as an `f64`, or `None` for
    /// non-numeric values. Mixed integer/float arithmetic promotes through
    /// this view.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// A short name for the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Real(_) => "float",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
            Self::Function(_) => "function",
        }
    }

    /// Structural equality with the language's coercion rules.
    ///
    /// Values of different types are unequal, except that integers and
    /// floats compare by floating value. Arrays compare elementwise;
    /// functions compare by handle identity.
    ///
    /// # Examples
    /// ```
    /// use parlance::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(1).equals(&Value::Real(1.0)));
    /// assert!(!Value::Integer(1).equals(&Value::Str("1".into())));
    /// assert!(Value::Nil.equals(&Value::Nil));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => {
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            },
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => match (self.as_real(), other.as_real()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Function(_) => write!(f, "<function>"),
        }
    }
}
