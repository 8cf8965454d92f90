//! # Object
//!
//! The runtime value universe. Values are handed around as `Rc<Object>`;
//! the canonical `verdadeiro`, `falso` and `nulo` values are per-thread
//! singletons so that the generic equality path can compare handles.
//! `ReturnValue` and `Error` are ordinary variants that the evaluator
//! threads upwards without host-language unwinding.

mod environment;

pub use environment::*;

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};

/// Native implementation of a built-in function. Builtins do their own
/// arity and type checking and report failures as [`Object::Error`].
pub type BuiltinFn = fn(&[Rc<Object>]) -> Rc<Object>;

#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Str(String),
    Null,
    Array(Vec<Rc<Object>>),
    Hash(HashMap<HashKey, HashPair>),
    Function(Function),
    Builtin(BuiltinFn),
    /// Internal carrier for `retorne`; never observable outside a call.
    ReturnValue(Rc<Object>),
    /// First-class failure value; propagates exactly like a return.
    Error(String),
}

/// A user function value: the parameter list, the body and the
/// environment captured at the definition site.
#[derive(Debug, Clone)]
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Env,
}

impl Object {
    /// The type tag used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Float(_) => "FLOAT",
            Object::Boolean(_) => "BOOLEAN",
            Object::Str(_) => "STRING",
            Object::Null => "NULL",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// `falso` and `nulo` are falsy; everything else is truthy,
    /// including `0`, `""` and `[]`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Null | Object::Boolean(false))
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::Float(value) => write!(f, "{value}"),
            Object::Boolean(true) => f.write_str("verdadeiro"),
            Object::Boolean(false) => f.write_str("falso"),
            Object::Str(value) => f.write_str(value),
            Object::Null => f.write_str("nulo"),
            Object::Array(elements) => {
                let elements: Vec<String> = elements.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", elements.join(", "))
            }
            Object::Hash(pairs) => {
                let pairs: Vec<String> = pairs
                    .values()
                    .map(|pair| format!("{}: {}", pair.key, pair.value))
                    .collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            Object::Function(function) => {
                let parameters: Vec<String> =
                    function.parameters.iter().map(ToString::to_string).collect();
                write!(f, "função({})", parameters.join(", "))
            }
            Object::Builtin(_) => f.write_str("função nativa"),
            Object::ReturnValue(value) => value.fmt(f),
            Object::Error(message) => write!(f, "ERRO: {message}"),
        }
    }
}

/// The small `(tag, bits)` union hash keys live in. Only integers,
/// booleans and strings are hashable; string keys hash by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    Str(u64),
}

impl HashKey {
    /// The hash key for a value, or `None` for unhashable kinds.
    pub fn from_object(object: &Object) -> Option<HashKey> {
        match object {
            Object::Integer(value) => Some(HashKey::Integer(*value)),
            Object::Boolean(value) => Some(HashKey::Boolean(*value)),
            Object::Str(value) => {
                let mut hasher = DefaultHasher::new();
                value.hash(&mut hasher);
                Some(HashKey::Str(hasher.finish()))
            }
            _ => None,
        }
    }
}

/// A stored hash entry, keeping the original key value for display.
#[derive(Debug, Clone)]
pub struct HashPair {
    pub key: Rc<Object>,
    pub value: Rc<Object>,
}

thread_local! {
    static NULL: Rc<Object> = Rc::new(Object::Null);
    static TRUE: Rc<Object> = Rc::new(Object::Boolean(true));
    static FALSE: Rc<Object> = Rc::new(Object::Boolean(false));
}

/// The shared `nulo` singleton.
pub fn null_object() -> Rc<Object> {
    NULL.with(Rc::clone)
}

/// The shared boolean singleton for `value`.
pub fn bool_object(value: bool) -> Rc<Object> {
    if value {
        TRUE.with(Rc::clone)
    } else {
        FALSE.with(Rc::clone)
    }
}

/// A fresh error value from a preformatted message.
pub fn error_object(message: impl Into<String>) -> Rc<Object> {
    Rc::new(Object::Error(message.into()))
}
