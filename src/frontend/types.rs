//! Type model and constant-value model for KPL.
//!
//! Types are owned values: every declaration that mentions a type holds its own copy, and [`Type::duplicate`]
//! produces an independent deep copy. Structural equality is [`compare_type`].

use std::fmt;

use kpl_core::lang::builtins::BasicTypeId;

/// A KPL type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Int,
    Char,
    Array { size: usize, element: Box<Type> },
}

impl Type {
    pub fn int() -> Self {
        Type::Int
    }

    pub fn char() -> Self {
        Type::Char
    }

    pub fn array(size: usize, element: Type) -> Self {
        Type::Array {
            size,
            element: Box::new(element),
        }
    }

    /// Independent deep copy.
    pub fn duplicate(&self) -> Self {
        match self {
            Type::Int => Type::Int,
            Type::Char => Type::Char,
            Type::Array { size, element } => Type::array(*size, element.duplicate()),
        }
    }

    /// Structural equality, see [`compare_type`].
    pub fn compare(&self, other: &Type) -> bool {
        compare_type(self, other)
    }

    pub fn is_basic(&self) -> bool {
        matches!(self, Type::Int | Type::Char)
    }
}

impl From<BasicTypeId> for Type {
    fn from(id: BasicTypeId) -> Self {
        match id {
            BasicTypeId::Integer => Type::Int,
            BasicTypeId::Char => Type::Char,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "Int"),
            Type::Char => write!(f, "Char"),
            Type::Array { size, element } => write!(f, "Arr({},{})", size, element),
        }
    }
}

/// Return `true` iff `a` and `b` are structurally equal.
///
/// Arrays are equal when their sizes match and their element types are equal. The element types are always
/// compared, whatever the sizes.
pub fn compare_type(a: &Type, b: &Type) -> bool {
    match (a, b) {
        (Type::Int, Type::Int) | (Type::Char, Type::Char) => true,
        (
            Type::Array {
                size: size_a,
                element: element_a,
            },
            Type::Array {
                size: size_b,
                element: element_b,
            },
        ) => {
            let elements_equal = compare_type(element_a, element_b);
            size_a == size_b && elements_equal
        }
        _ => false,
    }
}

/// The value of a declared constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantValue {
    Int(i64),
    Char(char),
}

impl ConstantValue {
    pub fn int(value: i64) -> Self {
        ConstantValue::Int(value)
    }

    pub fn char(value: char) -> Self {
        ConstantValue::Char(value)
    }

    pub fn duplicate(&self) -> Self {
        *self
    }

    pub fn ty(&self) -> Type {
        match self {
            ConstantValue::Int(_) => Type::Int,
            ConstantValue::Char(_) => Type::Char,
        }
    }

    /// Arithmetic negation. Character constants have no sign, so this returns `None` for them.
    pub fn negate(&self) -> Option<Self> {
        match self {
            ConstantValue::Int(value) => value.checked_neg().map(ConstantValue::Int),
            ConstantValue::Char(_) => None,
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Int(value) => write!(f, "{}", value),
            ConstantValue::Char(value) => write!(f, "'{}'", value),
        }
    }
}
