//! The `smath` library: the advanced-math builtins unlocked by
//! `sovy smath include`. All functions accept integers or floats and
//! coerce as needed; `abs` is the one that preserves integerness.

use std::collections::HashMap;
use std::rc::Rc;

use crate::object::{error_object, BuiltinFn, Object};

use super::LibraryDescriptor;

/// The descriptor written to `smath.slib` on installation.
pub fn descriptor() -> LibraryDescriptor {
    LibraryDescriptor {
        name: "smath".to_string(),
        version: "1.0.0".to_string(),
        description: "Biblioteca de matemática avançada para Solara".to_string(),
        functions: [
            ("potencia", "Calcula potência (base, expoente)"),
            ("raiz", "Calcula raiz quadrada"),
            ("sin", "Calcula seno"),
            ("cos", "Calcula cosseno"),
            ("abs", "Valor absoluto"),
            ("max", "Valor máximo entre dois números"),
            ("min", "Valor mínimo entre dois números"),
            ("pi", "Constante PI (3.14159...)"),
        ]
        .into_iter()
        .map(|(name, description)| (name.to_string(), description.to_string()))
        .collect(),
    }
}

/// The native bindings injected into the environment on include.
pub fn bindings() -> HashMap<String, BuiltinFn> {
    let mut m: HashMap<String, BuiltinFn> = HashMap::new();
    m.insert("potencia".to_string(), smath_potencia);
    m.insert("raiz".to_string(), smath_raiz);
    m.insert("sin".to_string(), smath_sin);
    m.insert("cos".to_string(), smath_cos);
    m.insert("abs".to_string(), smath_abs);
    m.insert("max".to_string(), smath_max);
    m.insert("min".to_string(), smath_min);
    m.insert("pi".to_string(), smath_pi);
    m
}

fn as_number(object: &Object) -> Option<f64> {
    match object {
        Object::Integer(value) => Some(*value as f64),
        Object::Float(value) => Some(*value),
        _ => None,
    }
}

fn smath_potencia(arguments: &[Rc<Object>]) -> Rc<Object> {
    if arguments.len() != 2 {
        return error_object("potencia() requer 2 argumentos (base, expoente)");
    }

    let Some(base) = as_number(&arguments[0]) else {
        return error_object("primeiro argumento deve ser um número");
    };
    let Some(exponent) = as_number(&arguments[1]) else {
        return error_object("segundo argumento deve ser um número");
    };

    Rc::new(Object::Float(base.powf(exponent)))
}

fn smath_raiz(arguments: &[Rc<Object>]) -> Rc<Object> {
    if arguments.len() != 1 {
        return error_object("raiz() requer 1 argumento");
    }

    let Some(value) = as_number(&arguments[0]) else {
        return error_object("argumento deve ser um número");
    };

    if value < 0.0 {
        return error_object("não é possível calcular raiz de número negativo");
    }

    Rc::new(Object::Float(value.sqrt()))
}

fn smath_sin(arguments: &[Rc<Object>]) -> Rc<Object> {
    if arguments.len() != 1 {
        return error_object("sin() requer 1 argumento");
    }

    let Some(value) = as_number(&arguments[0]) else {
        return error_object("argumento deve ser um número");
    };

    Rc::new(Object::Float(value.sin()))
}

fn smath_cos(arguments: &[Rc<Object>]) -> Rc<Object> {
    if arguments.len() != 1 {
        return error_object("cos() requer 1 argumento");
    }

    let Some(value) = as_number(&arguments[0]) else {
        return error_object("argumento deve ser um número");
    };

    Rc::new(Object::Float(value.cos()))
}

fn smath_abs(arguments: &[Rc<Object>]) -> Rc<Object> {
    if arguments.len() != 1 {
        return error_object("abs() requer 1 argumento");
    }

    match arguments[0].as_ref() {
        Object::Integer(value) => Rc::new(Object::Integer(value.abs())),
        Object::Float(value) => Rc::new(Object::Float(value.abs())),
        _ => error_object("argumento deve ser um número"),
    }
}

fn smath_max(arguments: &[Rc<Object>]) -> Rc<Object> {
    if arguments.len() != 2 {
        return error_object("max() requer 2 argumentos");
    }

    let Some(a) = as_number(&arguments[0]) else {
        return error_object("primeiro argumento deve ser um número");
    };
    let Some(b) = as_number(&arguments[1]) else {
        return error_object("segundo argumento deve ser um número");
    };

    Rc::new(Object::Float(a.max(b)))
}

fn smath_min(arguments: &[Rc<Object>]) -> Rc<Object> {
    if arguments.len() != 2 {
        return error_object("min() requer 2 argumentos");
    }

    let Some(a) = as_number(&arguments[0]) else {
        return error_object("primeiro argumento deve ser um número");
    };
    let Some(b) = as_number(&arguments[1]) else {
        return error_object("segundo argumento deve ser um número");
    };

    Rc::new(Object::Float(a.min(b)))
}

fn smath_pi(arguments: &[Rc<Object>]) -> Rc<Object> {
    if !arguments.is_empty() {
        return error_object("pi() não aceita argumentos");
    }

    Rc::new(Object::Float(std::f64::consts::PI))
}
