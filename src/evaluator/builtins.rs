//! The always-available built-in functions. Each builtin validates its
//! own argument count and types and reports failures as error values.

use std::collections::HashMap;
use std::rc::Rc;

use once_cell::sync::Lazy;

use crate::object::{error_object, null_object, BuiltinFn, Object};

static BUILTINS: Lazy<HashMap<&'static str, BuiltinFn>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, BuiltinFn> = HashMap::new();
    m.insert("imprimir", builtin_imprimir);
    m.insert("tamanho", builtin_tamanho);
    m.insert("primeiro", builtin_primeiro);
    m.insert("ultimo", builtin_ultimo);
    m.insert("resto", builtin_resto);
    m.insert("adicionar", builtin_adicionar);
    m
});

pub fn lookup(name: &str) -> Option<BuiltinFn> {
    BUILTINS.get(name).copied()
}

fn wrong_arguments(expected: usize, received: usize) -> Rc<Object> {
    error_object(format!(
        "número errado de argumentos. esperado={expected}, recebido={received}"
    ))
}

/// Print each argument on its own line.
fn builtin_imprimir(arguments: &[Rc<Object>]) -> Rc<Object> {
    for argument in arguments {
        println!("{argument}");
    }
    null_object()
}

fn builtin_tamanho(arguments: &[Rc<Object>]) -> Rc<Object> {
    if arguments.len() != 1 {
        return wrong_arguments(1, arguments.len());
    }

    match arguments[0].as_ref() {
        Object::Array(elements) => Rc::new(Object::Integer(elements.len() as i64)),
        Object::Str(value) => Rc::new(Object::Integer(value.len() as i64)),
        other => error_object(format!(
            "argumento para `tamanho` não suportado, recebido {}",
            other.type_name()
        )),
    }
}

fn builtin_primeiro(arguments: &[Rc<Object>]) -> Rc<Object> {
    if arguments.len() != 1 {
        return wrong_arguments(1, arguments.len());
    }

    match arguments[0].as_ref() {
        Object::Array(elements) => elements.first().map(Rc::clone).unwrap_or_else(null_object),
        other => error_object(format!(
            "argumento para `primeiro` deve ser ARRAY, recebido {}",
            other.type_name()
        )),
    }
}

fn builtin_ultimo(arguments: &[Rc<Object>]) -> Rc<Object> {
    if arguments.len() != 1 {
        return wrong_arguments(1, arguments.len());
    }

    match arguments[0].as_ref() {
        Object::Array(elements) => elements.last().map(Rc::clone).unwrap_or_else(null_object),
        other => error_object(format!(
            "argumento para `ultimo` deve ser ARRAY, recebido {}",
            other.type_name()
        )),
    }
}

/// A new array without the first element, or `nulo` for an empty one.
fn builtin_resto(arguments: &[Rc<Object>]) -> Rc<Object> {
    if arguments.len() != 1 {
        return wrong_arguments(1, arguments.len());
    }

    match arguments[0].as_ref() {
        Object::Array(elements) => {
            if elements.is_empty() {
                null_object()
            } else {
                Rc::new(Object::Array(elements[1..].to_vec()))
            }
        }
        other => error_object(format!(
            "argumento para `resto` deve ser ARRAY, recebido {}",
            other.type_name()
        )),
    }
}

/// A new array with the value appended; the original stays unchanged.
fn builtin_adicionar(arguments: &[Rc<Object>]) -> Rc<Object> {
    if arguments.len() != 2 {
        return wrong_arguments(2, arguments.len());
    }

    match arguments[0].as_ref() {
        Object::Array(elements) => {
            let mut extended = elements.clone();
            extended.push(Rc::clone(&arguments[1]));
            Rc::new(Object::Array(extended))
        }
        other => error_object(format!(
            "argumento para `adicionar` deve ser ARRAY, recebido {}",
            other.type_name()
        )),
    }
}
