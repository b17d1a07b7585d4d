//! Runtime constant values and the declared-type tags carried alongside them.

use std::fmt;

/// A declared type, carried through compilation as an opaque tag so the
/// emitter never has to type-check or infer anything — the VM is the one
/// that allocates/typechecks a variable slot at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeTag {
    Int,
    Float,
    Str,
    Bool,
    Nil,
    List,
    Dict,
    Function,
    Any,
    /// A user/class-declared name, not one of the built-ins above.
    Named(String),
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Int => write!(f, "int"),
            TypeTag::Float => write!(f, "float"),
            TypeTag::Str => write!(f, "str"),
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::Nil => write!(f, "nil"),
            TypeTag::List => write!(f, "list"),
            TypeTag::Dict => write!(f, "dict"),
            TypeTag::Function => write!(f, "function"),
            TypeTag::Any => write!(f, "any"),
            TypeTag::Named(name) => write!(f, "{name}"),
        }
    }
}

impl TypeTag {
    /// Parses the handful of built-in type names the lexer/parser can
    /// produce; anything else is a user-defined (named) type.
    pub fn from_name(name: &str) -> TypeTag {
        match name {
            "int" => TypeTag::Int,
            "float" => TypeTag::Float,
            "str" | "string" => TypeTag::Str,
            "bool" => TypeTag::Bool,
            "nil" | "none" => TypeTag::Nil,
            "list" => TypeTag::List,
            "dict" => TypeTag::Dict,
            "function" => TypeTag::Function,
            "any" => TypeTag::Any,
            other => TypeTag::Named(other.to_string()),
        }
    }
}

/// A constant pool entry. Immutable once pushed; copying is by value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Nil,
    Type(TypeTag),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v:?}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Nil => write!(f, "nil"),
            Value::Type(t) => write!(f, "<type {t}>"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<TypeTag> for Value {
    fn from(v: TypeTag) -> Self {
        Value::Type(v)
    }
}
