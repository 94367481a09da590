//! Loosely typed variable values and the store that holds them.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// A script variable value. Comparisons in conditions go through the
/// string representation unless both sides parse as integers, so most
/// values stay in the form the script wrote them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Value {
    /// Numeric coercion. Booleans convert to 0/1, strings must parse.
    pub fn as_int(&self) -> Result<i64, TypeError> {
        match self {
            Value::Bool(b) => Ok(i64::from(*b)),
            Value::Int(n) => Ok(*n),
            Value::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| TypeError { repr: s.clone() }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// A stored value could not be coerced to an integer.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("value '{repr}' cannot be converted to an integer")]
pub struct TypeError {
    pub repr: String,
}

/// Name → value map shared between the compiler and the host.
///
/// The store tracks two flags. `dirty` is raised by every host [`set`],
/// whether or not the value changed, and tells the engine to recompile
/// before the next session. `seeded` is a latch raised by the first
/// compilation against this store: once set, `name=value` lines in any
/// later script are ignored for the lifetime of the store.
///
/// [`set`]: VariableStore::set
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    vars: HashMap<String, Value>,
    dirty: bool,
    seeded: bool,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host-facing write. Always marks the store dirty.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(name.into(), value.into());
        self.dirty = true;
    }

    /// Compiler-facing write for initial assignments. Does not touch
    /// the dirty flag.
    pub(crate) fn define(&mut self, name: String, value: Value) {
        self.vars.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn get_as_int(&self, name: &str) -> Result<i64, TypeError> {
        match self.vars.get(name) {
            Some(v) => v.as_int(),
            None => Err(TypeError {
                repr: format!("<undefined: {}>", name),
            }),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub(crate) fn mark_seeded(&mut self) {
        self.seeded = true;
    }
}
