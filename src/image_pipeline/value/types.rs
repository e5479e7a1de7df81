//! Dynamic value types

use std::fmt;

/// Runtime kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Void,
    Int,
    Float,
    String,
    Raw,
    List,
    Dynamic,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Void => "void",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Raw => "raw buffer",
            ValueKind::List => "list",
            ValueKind::Dynamic => "dynamic",
        };
        f.write_str(name)
    }
}

/// A value holding exactly one runtime-typed payload.
///
/// `Dynamic` wraps another value without changing its content; it shows up
/// when a service returns a value whose static type is itself "any value".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Void,
    Int(i64),
    Float(f64),
    String(String),
    Raw(Vec<u8>),
    List(Vec<Value>),
    Dynamic(Box<Value>),
}

impl Value {
    /// Wraps a value in a `Dynamic` layer.
    pub fn dynamic(inner: impl Into<Value>) -> Self {
        Value::Dynamic(Box::new(inner.into()))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Raw(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}
