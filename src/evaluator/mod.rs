//! # Evaluator
//!
//! A single-threaded, strictly eager tree walk over the parsed program.
//! All failure travels as [`Object::Error`] values that short-circuit
//! exactly like `retorne` does: blocks forward them unchanged and the
//! program boundary surfaces them as the final result.
//!
//! The advanced arithmetic operators (`/`, `%`) are gated behind the
//! `smath` library; the gate is checked before the operands are even
//! evaluated.

mod builtins;

use std::rc::Rc;

use crate::ast::{
    BlockStatement, Expression, ForStatement, HashLiteral, Identifier, IncludeStatement, Program,
    Statement,
};
use crate::library::{FsLibraryRegistry, LibraryRegistry};
use crate::object::{
    bool_object, error_object, null_object, Env, Environment, Function, HashKey, HashPair, Object,
};

pub struct Evaluator {
    registry: Box<dyn LibraryRegistry>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// An evaluator backed by the on-disk library registry.
    pub fn new() -> Self {
        Self::with_registry(Box::new(FsLibraryRegistry::new()))
    }

    pub fn with_registry(registry: Box<dyn LibraryRegistry>) -> Self {
        Self { registry }
    }

    /// Evaluate a program in a fresh top-level environment.
    pub fn eval(&mut self, program: &Program) -> Rc<Object> {
        let env = Environment::new();
        self.eval_with_env(program, &env)
    }

    /// Evaluate a program in the given environment. A top-level
    /// `retorne` is unwrapped; the first error terminates evaluation and
    /// becomes the result.
    pub fn eval_with_env(&mut self, program: &Program, env: &Env) -> Rc<Object> {
        let mut result = null_object();

        for statement in &program.statements {
            result = self.eval_statement(statement, env);

            match result.as_ref() {
                Object::ReturnValue(value) => return Rc::clone(value),
                Object::Error(_) => return result,
                _ => {}
            }
        }

        result
    }

    fn eval_statement(&mut self, statement: &Statement, env: &Env) -> Rc<Object> {
        match statement {
            Statement::Var(var) => {
                let value = self.eval_expression(&var.value, env);
                if value.is_error() {
                    return value;
                }
                env.borrow_mut()
                    .set(var.name.value.clone(), Rc::clone(&value));
                value
            }
            Statement::Return(statement) => {
                let value = self.eval_expression(&statement.value, env);
                if value.is_error() {
                    return value;
                }
                Rc::new(Object::ReturnValue(value))
            }
            Statement::For(statement) => self.eval_for_statement(statement, env),
            Statement::Include(statement) => self.eval_include_statement(statement, env),
            Statement::Expression(statement) => self.eval_expression(&statement.expression, env),
        }
    }

    /// Forward returns and errors unchanged so they cross nested blocks
    /// without being unwrapped early.
    fn eval_block(&mut self, block: &BlockStatement, env: &Env) -> Rc<Object> {
        let mut result = null_object();

        for statement in &block.statements {
            result = self.eval_statement(statement, env);

            if matches!(result.as_ref(), Object::ReturnValue(_) | Object::Error(_)) {
                return result;
            }
        }

        result
    }

    fn eval_for_statement(&mut self, statement: &ForStatement, env: &Env) -> Rc<Object> {
        let start = self.eval_expression(&statement.start, env);
        if start.is_error() {
            return start;
        }

        let end = self.eval_expression(&statement.end, env);
        if end.is_error() {
            return end;
        }

        let start = match start.as_ref() {
            Object::Integer(value) => *value,
            other => {
                return error_object(format!(
                    "valor inicial do loop deve ser inteiro, recebido={}",
                    other.type_name()
                ))
            }
        };

        let end = match end.as_ref() {
            Object::Integer(value) => *value,
            other => {
                return error_object(format!(
                    "valor final do loop deve ser inteiro, recebido={}",
                    other.type_name()
                ))
            }
        };

        let mut result = null_object();

        // The loop variable lives in the current environment, not a
        // fresh per-iteration scope.
        for i in start..=end {
            env.borrow_mut()
                .set(statement.variable.value.clone(), Rc::new(Object::Integer(i)));

            result = self.eval_block(&statement.body, env);

            if matches!(result.as_ref(), Object::ReturnValue(_) | Object::Error(_)) {
                return result;
            }
        }

        result
    }

    /// `sovy <name> include`: load the library and bind its functions in
    /// the current environment.
    fn eval_include_statement(&mut self, statement: &IncludeStatement, env: &Env) -> Rc<Object> {
        let name = &statement.library.value;

        if let Err(error) = self.registry.load(name) {
            return error_object(error.to_string());
        }

        if let Some(bindings) = self.registry.bindings_for(name) {
            for (name, builtin) in bindings {
                env.borrow_mut().set(name, Rc::new(Object::Builtin(builtin)));
            }
        }

        null_object()
    }

    fn eval_expression(&mut self, expression: &Expression, env: &Env) -> Rc<Object> {
        match expression {
            Expression::IntegerLiteral(literal) => Rc::new(Object::Integer(literal.value)),
            Expression::FloatLiteral(literal) => Rc::new(Object::Float(literal.value)),
            Expression::StringLiteral(literal) => Rc::new(Object::Str(literal.value.clone())),
            Expression::BooleanLiteral(literal) => bool_object(literal.value),
            Expression::Identifier(identifier) => eval_identifier(identifier, env),
            Expression::Prefix(prefix) => {
                let right = self.eval_expression(&prefix.right, env);
                if right.is_error() {
                    return right;
                }
                eval_prefix_expression(&prefix.operator, &right)
            }
            Expression::Infix(infix) => {
                if needs_math_library(&infix.operator) && !self.registry.is_loaded("smath") {
                    return error_object(
                        "operações matemáticas avançadas requerem a biblioteca 'smath'. \
                         Execute: sovy install smath",
                    );
                }

                let left = self.eval_expression(&infix.left, env);
                if left.is_error() {
                    return left;
                }

                let right = self.eval_expression(&infix.right, env);
                if right.is_error() {
                    return right;
                }

                eval_infix_expression(&infix.operator, left, right)
            }
            Expression::If(expression) => {
                let condition = self.eval_expression(&expression.condition, env);
                if condition.is_error() {
                    return condition;
                }

                if condition.is_truthy() {
                    self.eval_block(&expression.consequence, env)
                } else if let Some(alternative) = &expression.alternative {
                    self.eval_block(alternative, env)
                } else {
                    null_object()
                }
            }
            Expression::Function(literal) => {
                let function = Rc::new(Object::Function(Function {
                    parameters: literal.parameters.clone(),
                    body: literal.body.clone(),
                    env: Rc::clone(env),
                }));

                if let Some(name) = &literal.name {
                    env.borrow_mut().set(name.value.clone(), Rc::clone(&function));
                }

                function
            }
            Expression::Call(call) => {
                let function = self.eval_expression(&call.function, env);
                if function.is_error() {
                    return function;
                }

                let arguments = match self.eval_expressions(&call.arguments, env) {
                    Ok(arguments) => arguments,
                    Err(error) => return error,
                };

                self.apply_function(&function, &arguments)
            }
            Expression::Array(literal) => {
                let elements = match self.eval_expressions(&literal.elements, env) {
                    Ok(elements) => elements,
                    Err(error) => return error,
                };
                Rc::new(Object::Array(elements))
            }
            Expression::Hash(literal) => self.eval_hash_literal(literal, env),
            Expression::Index(expression) => {
                let left = self.eval_expression(&expression.left, env);
                if left.is_error() {
                    return left;
                }

                let index = self.eval_expression(&expression.index, env);
                if index.is_error() {
                    return index;
                }

                eval_index_expression(&left, &index)
            }
        }
    }

    /// Evaluate left to right, stopping at the first error.
    fn eval_expressions(
        &mut self,
        expressions: &[Expression],
        env: &Env,
    ) -> Result<Vec<Rc<Object>>, Rc<Object>> {
        let mut result = Vec::with_capacity(expressions.len());

        for expression in expressions {
            let evaluated = self.eval_expression(expression, env);
            if evaluated.is_error() {
                return Err(evaluated);
            }
            result.push(evaluated);
        }

        Ok(result)
    }

    fn apply_function(&mut self, function: &Rc<Object>, arguments: &[Rc<Object>]) -> Rc<Object> {
        match function.as_ref() {
            Object::Function(function) => {
                // Lexical scoping: the call frame extends the captured
                // environment, not the caller's. Missing arguments leave
                // their parameters unbound; extra arguments are ignored.
                let env = Environment::new_enclosed(Rc::clone(&function.env));

                for (parameter, argument) in function.parameters.iter().zip(arguments) {
                    env.borrow_mut()
                        .set(parameter.value.clone(), Rc::clone(argument));
                }

                let evaluated = self.eval_block(&function.body, &env);
                match evaluated.as_ref() {
                    Object::ReturnValue(value) => Rc::clone(value),
                    _ => evaluated,
                }
            }
            Object::Builtin(builtin) => builtin(arguments),
            _ => error_object(format!("não é uma função: {}", function.type_name())),
        }
    }

    fn eval_hash_literal(&mut self, literal: &HashLiteral, env: &Env) -> Rc<Object> {
        let mut pairs = std::collections::HashMap::new();

        for (key_expression, value_expression) in &literal.pairs {
            let key = self.eval_expression(key_expression, env);
            if key.is_error() {
                return key;
            }

            let Some(hash_key) = HashKey::from_object(&key) else {
                return error_object(format!("chave de hash inválida: {}", key.type_name()));
            };

            let value = self.eval_expression(value_expression, env);
            if value.is_error() {
                return value;
            }

            pairs.insert(hash_key, HashPair { key, value });
        }

        Rc::new(Object::Hash(pairs))
    }
}

/// The operators gated behind `smath`. Deliberately only `/` and `%`.
fn needs_math_library(operator: &str) -> bool {
    matches!(operator, "/" | "%")
}

fn eval_identifier(identifier: &Identifier, env: &Env) -> Rc<Object> {
    if let Some(value) = env.borrow().get(&identifier.value) {
        return value;
    }

    if let Some(builtin) = builtins::lookup(&identifier.value) {
        return Rc::new(Object::Builtin(builtin));
    }

    error_object(format!("identificador não encontrado: {}", identifier.value))
}

fn eval_prefix_expression(operator: &str, right: &Rc<Object>) -> Rc<Object> {
    match operator {
        "!" | "não" | "nao" => bool_object(!right.is_truthy()),
        "-" => match right.as_ref() {
            Object::Integer(value) => Rc::new(Object::Integer(-value)),
            Object::Float(value) => Rc::new(Object::Float(-value)),
            _ => error_object(format!("operador desconhecido: -{}", right.type_name())),
        },
        _ => error_object(format!(
            "operador desconhecido: {operator}{}",
            right.type_name()
        )),
    }
}

fn eval_infix_expression(operator: &str, left: Rc<Object>, right: Rc<Object>) -> Rc<Object> {
    match (left.as_ref(), right.as_ref()) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Object::Float(l), Object::Float(r)) => eval_float_infix(operator, *l, *r),
        // Mixed int/float promotes for arithmetic and ordering, but
        // equality across kinds stays a handle comparison.
        (Object::Integer(l), Object::Float(r)) if promotes_mixed(operator) => {
            eval_float_infix(operator, *l as f64, *r)
        }
        (Object::Float(l), Object::Integer(r)) if promotes_mixed(operator) => {
            eval_float_infix(operator, *l, *r as f64)
        }
        (Object::Str(l), Object::Str(r)) => eval_string_infix(operator, l, r),
        _ => match operator {
            "==" => bool_object(Rc::ptr_eq(&left, &right)),
            "!=" => bool_object(!Rc::ptr_eq(&left, &right)),
            "e" => bool_object(left.is_truthy() && right.is_truthy()),
            "ou" => bool_object(left.is_truthy() || right.is_truthy()),
            _ => error_object(format!(
                "operador desconhecido: {} {operator} {}",
                left.type_name(),
                right.type_name()
            )),
        },
    }
}

fn promotes_mixed(operator: &str) -> bool {
    !matches!(operator, "==" | "!=")
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Rc<Object> {
    match operator {
        "+" => Rc::new(Object::Integer(left + right)),
        "-" => Rc::new(Object::Integer(left - right)),
        "*" => Rc::new(Object::Integer(left * right)),
        "/" => {
            if right == 0 {
                error_object("divisão por zero")
            } else {
                // integer division always yields a float
                Rc::new(Object::Float(left as f64 / right as f64))
            }
        }
        "%" => {
            if right == 0 {
                error_object("divisão por zero")
            } else {
                Rc::new(Object::Integer(left % right))
            }
        }
        "<" => bool_object(left < right),
        ">" => bool_object(left > right),
        "<=" => bool_object(left <= right),
        ">=" => bool_object(left >= right),
        "==" => bool_object(left == right),
        "!=" => bool_object(left != right),
        _ => error_object(format!("operador desconhecido: {operator}")),
    }
}

#[allow(clippy::float_cmp)]
fn eval_float_infix(operator: &str, left: f64, right: f64) -> Rc<Object> {
    match operator {
        "+" => Rc::new(Object::Float(left + right)),
        "-" => Rc::new(Object::Float(left - right)),
        "*" => Rc::new(Object::Float(left * right)),
        "/" => {
            if right == 0.0 {
                error_object("divisão por zero")
            } else {
                Rc::new(Object::Float(left / right))
            }
        }
        "<" => bool_object(left < right),
        ">" => bool_object(left > right),
        "<=" => bool_object(left <= right),
        ">=" => bool_object(left >= right),
        "==" => bool_object(left == right),
        "!=" => bool_object(left != right),
        _ => error_object(format!("operador desconhecido: {operator}")),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Rc<Object> {
    match operator {
        "+" => Rc::new(Object::Str(format!("{left}{right}"))),
        "==" => bool_object(left == right),
        "!=" => bool_object(left != right),
        _ => error_object(format!("operador desconhecido: {operator}")),
    }
}

fn eval_index_expression(left: &Rc<Object>, index: &Rc<Object>) -> Rc<Object> {
    match (left.as_ref(), index.as_ref()) {
        (Object::Array(elements), Object::Integer(i)) => {
            if *i < 0 || *i >= elements.len() as i64 {
                null_object()
            } else {
                Rc::clone(&elements[*i as usize])
            }
        }
        (Object::Hash(pairs), _) => match HashKey::from_object(index) {
            Some(key) => pairs
                .get(&key)
                .map(|pair| Rc::clone(&pair.value))
                .unwrap_or_else(null_object),
            None => error_object(format!("chave de hash inválida: {}", index.type_name())),
        },
        _ => error_object(format!(
            "operador de índice não suportado: {}",
            left.type_name()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::{HashMap, HashSet};

    use crate::lexer::Lexer;
    use crate::library::{smath, LibraryError};
    use crate::object::BuiltinFn;
    use crate::parser::Parser;

    /// In-memory stand-in for the on-disk registry: `smath` is the only
    /// installed library.
    #[derive(Default)]
    struct TestRegistry {
        loaded: HashSet<String>,
    }

    impl LibraryRegistry for TestRegistry {
        fn is_installed(&self, name: &str) -> bool {
            name == "smath"
        }

        fn is_loaded(&self, name: &str) -> bool {
            self.loaded.contains(name)
        }

        fn load(&mut self, name: &str) -> Result<(), LibraryError> {
            if !self.is_installed(name) {
                return Err(LibraryError::not_installed(name));
            }
            self.loaded.insert(name.to_string());
            Ok(())
        }

        fn bindings_for(&self, name: &str) -> Option<HashMap<String, BuiltinFn>> {
            (name == "smath").then(smath::bindings)
        }
    }

    fn run(input: &str) -> Rc<Object> {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "parse errors for {input:?}: {:?}",
            parser.errors()
        );

        let mut evaluator = Evaluator::with_registry(Box::new(TestRegistry::default()));
        evaluator.eval(&program)
    }

    fn expect_integer(input: &str, expected: i64) {
        let result = run(input);
        match result.as_ref() {
            Object::Integer(value) => assert_eq!(*value, expected, "{input}"),
            other => panic!("expected integer {expected} for {input:?}, got {other:?}"),
        }
    }

    fn expect_float(input: &str, expected: f64) {
        let result = run(input);
        match result.as_ref() {
            Object::Float(value) => assert!((value - expected).abs() < 1e-9, "{input}"),
            other => panic!("expected float {expected} for {input:?}, got {other:?}"),
        }
    }

    fn expect_bool(input: &str, expected: bool) {
        let result = run(input);
        match result.as_ref() {
            Object::Boolean(value) => assert_eq!(*value, expected, "{input}"),
            other => panic!("expected boolean {expected} for {input:?}, got {other:?}"),
        }
    }

    fn expect_null(input: &str) {
        let result = run(input);
        assert!(
            matches!(result.as_ref(), Object::Null),
            "expected nulo for {input:?}, got {result:?}"
        );
    }

    fn expect_error(input: &str, fragment: &str) {
        let result = run(input);
        match result.as_ref() {
            Object::Error(message) => assert!(
                message.contains(fragment),
                "error {message:?} does not mention {fragment:?}"
            ),
            other => panic!("expected error for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_integer_arithmetic() {
        expect_integer("5", 5);
        expect_integer("2 * 3 + 1", 7);
        expect_integer("2 + 3 * 4", 14);
        expect_integer("(2 + 3) * 4", 20);
        expect_integer("-5 + 10", 5);
        expect_integer("2 - 7", -5);
    }

    #[test]
    fn test_numeric_promotion() {
        expect_float("1 + 2.5", 3.5);
        expect_float("2.5 + 1", 3.5);
        expect_float("2.0 * 3", 6.0);
        expect_float("1.5 - 0.5", 1.0);
        expect_bool("1 < 1.5", true);
        expect_bool("2.5 >= 3", false);
    }

    #[test]
    fn test_division_requires_smath() {
        expect_error("10 / 4", "smath");
        expect_error("10 % 3", "smath");
    }

    #[test]
    fn test_gate_precedes_operand_evaluation() {
        // the gate fires before the unknown identifier would
        expect_error("desconhecido / 2", "smath");
    }

    #[test]
    fn test_division_with_smath() {
        expect_float("sovy smath include\n10 / 4", 2.5);
        expect_float("sovy smath include\n10 / 5", 2.0);
        expect_integer("sovy smath include\n10 % 3", 1);
        expect_float("sovy smath include\n7.5 / 2.5", 3.0);
    }

    #[test]
    fn test_division_by_zero() {
        expect_error("sovy smath include\n10 / 0", "divisão por zero");
        expect_error("sovy smath include\n10.0 / 0.0", "divisão por zero");
        expect_error("sovy smath include\n10 % 0", "divisão por zero");
    }

    #[test]
    fn test_float_modulo_unsupported() {
        expect_error("sovy smath include\n7.5 % 2.0", "operador desconhecido");
    }

    #[test]
    fn test_string_operations() {
        let result = run("\"olá, \" + \"mundo\"");
        match result.as_ref() {
            Object::Str(value) => assert_eq!(value, "olá, mundo"),
            other => panic!("expected string, got {other:?}"),
        }
        expect_bool("\"a\" == \"a\"", true);
        expect_bool("\"a\" != \"b\"", true);
        expect_error("\"a\" - \"b\"", "operador desconhecido");
    }

    #[test]
    fn test_comparisons_and_logic() {
        expect_bool("1 < 2", true);
        expect_bool("2 <= 2", true);
        expect_bool("3 > 4", false);
        expect_bool("1 == 1", true);
        expect_bool("1 != 1", false);
        expect_bool("verdadeiro e falso", false);
        expect_bool("verdadeiro ou falso", true);
        expect_bool("verdadeiro == verdadeiro", true);
        expect_bool("verdadeiro != falso", true);
    }

    #[test]
    fn test_cross_kind_equality_is_identity() {
        expect_bool("1 == 1.0", false);
        expect_bool("1 != 1.0", true);
        expect_bool("1 == verdadeiro", false);
        expect_bool("\"1\" == 1", false);
    }

    #[test]
    fn test_prefix_operators() {
        expect_bool("!verdadeiro", false);
        expect_bool("!falso", true);
        expect_bool("não verdadeiro", false);
        expect_bool("nao falso", true);
        expect_bool("!5", false);
        expect_integer("-7", -7);
        expect_float("-2.5", -2.5);
        expect_error("-verdadeiro", "operador desconhecido: -BOOLEAN");
    }

    #[test]
    fn test_truthiness_in_conditionals() {
        expect_integer("se verdadeiro\n1\nsenão\n2\nfim", 1);
        expect_integer("se falso\n1\nsenão\n2\nfim", 2);
        expect_integer("se 0\n1\nsenão\n2\nfim", 1);
        expect_integer("se \"\"\n1\nsenão\n2\nfim", 1);
        expect_null("se falso\n1\nfim");
    }

    #[test]
    fn test_var_statements() {
        expect_integer("numero x = 2 * 3 + 1\nx", 7);
        expect_integer("numero a = 1\nnumero b = a + 1\nb", 2);
        expect_integer("numero a = 1\nnumero a = a + 10\na", 11);
    }

    #[test]
    fn test_function_call() {
        expect_integer("função soma(a, b)\nretorne a + b\nfim\nsoma(2, 3)", 5);
        expect_integer("função dobro(x)\nretorne x * 2\nfim\ndobro(dobro(3))", 12);
        expect_integer("numero f = função(x)\nretorne x + 1\nfim\nf(1)", 2);
    }

    #[test]
    fn test_return_stops_execution() {
        expect_integer("função f()\nretorne 1\n2\nfim\nf()", 1);
        expect_integer("função f()\nse verdadeiro\nretorne 1\nfim\nretorne 2\nfim\nf()", 1);
        expect_integer("retorne 10\n5", 10);
    }

    #[test]
    fn test_recursion() {
        expect_integer(
            "função fatorial(n)\nse n < 2\nretorne 1\nsenão\nretorne n * fatorial(n - 1)\nfim\nfim\nfatorial(5)",
            120,
        );
    }

    #[test]
    fn test_closures_observe_call_time_bindings() {
        expect_integer("numero x = 1\nfunção f()\nretorne x\nfim\nnumero x = 2\nf()", 2);
        expect_integer(
            "função soma_com(a)\nretorne função(b)\nretorne a + b\nfim\nfim\nsoma_com(10)(5)",
            15,
        );
    }

    #[test]
    fn test_call_scoping_is_lexical() {
        // the callee must not see the caller's locals
        expect_error(
            "função f()\nretorne escondido\nfim\nfunção g()\nnumero escondido = 1\nretorne f()\nfim\ng()",
            "identificador não encontrado: escondido",
        );
    }

    #[test]
    fn test_missing_arguments_leave_parameters_unbound() {
        expect_integer("função f(a, b)\nretorne a\nfim\nf(1)", 1);
        expect_error(
            "função f(a, b)\nretorne b\nfim\nf(1)",
            "identificador não encontrado: b",
        );
    }

    #[test]
    fn test_excess_arguments_are_ignored() {
        expect_integer("função f(a)\nretorne a\nfim\nf(1, 2, 3)", 1);
    }

    #[test]
    fn test_calling_a_non_function() {
        expect_error("numero x = 1\nx(2)", "não é uma função: INTEGER");
    }

    #[test]
    fn test_for_loop() {
        expect_integer(
            "numero total = 0\npara numero i = 1 até 4\nnumero total = total + i\nfim\ntotal",
            10,
        );
        // inclusive bounds, loop variable persists afterwards
        expect_integer("para numero i = 1 até 3\ni\nfim\ni", 3);
        // empty range never runs
        expect_null("para numero i = 2 até 1\nimprimir i\nfim");
    }

    #[test]
    fn test_for_loop_bounds_must_be_integers() {
        expect_error("para numero i = 1.0 até 3\ni\nfim", "valor inicial do loop");
        expect_error("para numero i = 1 até \"3\"\ni\nfim", "valor final do loop");
    }

    #[test]
    fn test_return_aborts_loop() {
        expect_integer(
            "função f()\npara numero i = 1 até 10\nse i == 3\nretorne i\nfim\nfim\nretorne 0\nfim\nf()",
            3,
        );
    }

    #[test]
    fn test_arrays() {
        expect_integer("[1, 2, 3][0]", 1);
        expect_integer("[1, 2, 3][2]", 3);
        expect_null("[1, 2, 3][3]");
        expect_null("[1, 2, 3][-1]");
        expect_integer("lista a = [1, 2 + 3]\na[1]", 5);
    }

    #[test]
    fn test_array_builtins() {
        expect_integer("tamanho([1, 2, 3])", 3);
        expect_integer("tamanho(\"abc\")", 3);
        expect_integer("primeiro([7, 8])", 7);
        expect_integer("ultimo([7, 8])", 8);
        expect_null("primeiro([])");
        expect_null("ultimo([])");
        expect_null("resto([])");
        expect_integer("resto([1, 2, 3])[0]", 2);
        expect_integer("tamanho(resto([1, 2, 3]))", 2);
        expect_integer("primeiro(adicionar(resto([1, 2, 3]), 9))", 2);
    }

    #[test]
    fn test_adicionar_returns_a_new_array() {
        expect_integer("lista a = [1, 2]\nlista b = adicionar(a, 3)\ntamanho(a)", 2);
        expect_integer("lista a = [1, 2]\nlista b = adicionar(a, 3)\ntamanho(b)", 3);
        expect_integer("lista a = [1, 2]\nultimo(adicionar(a, 3))", 3);
    }

    #[test]
    fn test_builtin_argument_errors() {
        expect_error("tamanho(1)", "argumento para `tamanho` não suportado");
        expect_error("tamanho()", "número errado de argumentos");
        expect_error("primeiro(1)", "deve ser ARRAY");
        expect_error("adicionar([1])", "número errado de argumentos");
        expect_error("adicionar(1, 2)", "deve ser ARRAY");
    }

    #[test]
    fn test_hashes() {
        expect_integer("{\"a\": 1, \"b\": 2}[\"b\"]", 2);
        expect_integer("{1: 10, 2: 20}[2]", 20);
        expect_integer("{verdadeiro: 1}[verdadeiro]", 1);
        expect_null("{\"a\": 1}[\"x\"]");
        expect_null("{}[\"x\"]");
        expect_integer("mapa notas = {\"ana\": 9}\nnotas[\"ana\"]", 9);
    }

    #[test]
    fn test_invalid_hash_keys() {
        expect_error("{[1]: 2}", "chave de hash inválida: ARRAY");
        expect_error("{1.5: 2}", "chave de hash inválida: FLOAT");
        expect_error("{\"a\": 1}[[1]]", "chave de hash inválida: ARRAY");
    }

    #[test]
    fn test_index_on_non_indexable() {
        expect_error("5[0]", "operador de índice não suportado: INTEGER");
        expect_error("\"abc\"[0]", "operador de índice não suportado: STRING");
    }

    #[test]
    fn test_unknown_identifier() {
        expect_error("fantasma", "identificador não encontrado: fantasma");
    }

    #[test]
    fn test_operator_type_mismatch() {
        expect_error("5 + verdadeiro", "operador desconhecido: INTEGER + BOOLEAN");
        expect_error("\"a\" + 1", "operador desconhecido: STRING + INTEGER");
    }

    #[test]
    fn test_errors_short_circuit() {
        expect_error("numero x = fantasma\nx", "identificador não encontrado");
        expect_error("[1, fantasma, 3]", "identificador não encontrado");
        expect_error("tamanho(fantasma)", "identificador não encontrado");
        expect_error(
            "função f()\nretorne fantasma\nfim\nf()\n42",
            "identificador não encontrado",
        );
    }

    #[test]
    fn test_imprimir_returns_null() {
        expect_null("imprimir 1");
        expect_null("imprimir(1, 2)");
    }

    #[test]
    fn test_include_unknown_library() {
        expect_error("sovy desconhecida include", "não está instalada");
    }

    #[test]
    fn test_smath_not_loaded_means_unknown_identifiers() {
        expect_error("raiz(16)", "identificador não encontrado: raiz");
    }

    #[test]
    fn test_smath_bindings() {
        expect_float("sovy smath include\nraiz(16)", 4.0);
        expect_float("sovy smath include\npotencia(2, 10)", 1024.0);
        expect_integer("sovy smath include\nabs(-3)", 3);
        expect_float("sovy smath include\nabs(-3.5)", 3.5);
        expect_float("sovy smath include\nmax(1, 2.5)", 2.5);
        expect_float("sovy smath include\nmin(4, 2)", 2.0);
        expect_float("sovy smath include\npi()", std::f64::consts::PI);
        expect_float("sovy smath include\nsin(0)", 0.0);
        expect_float("sovy smath include\ncos(0)", 1.0);
    }

    #[test]
    fn test_smath_errors() {
        expect_error("sovy smath include\nraiz(-1)", "negativo");
        expect_error("sovy smath include\nraiz()", "requer 1 argumento");
        expect_error("sovy smath include\npotencia(1)", "requer 2 argumentos");
        expect_error("sovy smath include\npi(1)", "não aceita argumentos");
        expect_error("sovy smath include\nraiz(\"x\")", "deve ser um número");
    }

    #[test]
    fn test_smath_binding_can_be_shadowed() {
        expect_integer("sovy smath include\nnumero raiz = 1\nraiz", 1);
    }

    #[test]
    fn test_user_binding_shadows_builtin() {
        expect_integer("numero tamanho = 5\ntamanho", 5);
    }
}
