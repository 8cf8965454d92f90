use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Object;

/// Shared handle to an environment frame. Closures keep their defining
/// frame alive through this handle.
pub type Env = Rc<RefCell<Environment>>;

/// A lexically-scoped name table: one frame of bindings plus an optional
/// enclosing frame. `get` walks outward, `set` always writes to this
/// frame, and there is no deletion.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Rc<Object>>,
    outer: Option<Env>,
}

impl Environment {
    pub fn new() -> Env {
        Rc::new(RefCell::new(Environment::default()))
    }

    /// A child frame for a function call, retaining `outer`.
    pub fn new_enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    pub fn get(&self, name: &str) -> Option<Rc<Object>> {
        match self.store.get(name) {
            Some(value) => Some(Rc::clone(value)),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: Rc<Object>) {
        self.store.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let env = Environment::new();
        env.borrow_mut()
            .set("idade", Rc::new(Object::Integer(30)));

        let value = env.borrow().get("idade").expect("binding must exist");
        assert!(matches!(*value, Object::Integer(30)));
    }

    #[test]
    fn test_get_walks_outward() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Rc::new(Object::Integer(1)));

        let inner = Environment::new_enclosed(Rc::clone(&outer));
        let value = inner.borrow().get("x").expect("outer binding visible");
        assert!(matches!(*value, Object::Integer(1)));
    }

    #[test]
    fn test_set_is_frame_local() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Rc::new(Object::Integer(1)));

        let inner = Environment::new_enclosed(Rc::clone(&outer));
        inner.borrow_mut().set("x", Rc::new(Object::Integer(2)));

        let shadowed = inner.borrow().get("x").expect("inner binding");
        assert!(matches!(*shadowed, Object::Integer(2)));

        let untouched = outer.borrow().get("x").expect("outer binding");
        assert!(matches!(*untouched, Object::Integer(1)));
    }

    #[test]
    fn test_outer_mutation_visible_through_child() {
        let outer = Environment::new();
        let inner = Environment::new_enclosed(Rc::clone(&outer));

        outer.borrow_mut().set("x", Rc::new(Object::Integer(42)));

        let value = inner.borrow().get("x").expect("late outer binding");
        assert!(matches!(*value, Object::Integer(42)));
    }

    #[test]
    fn test_missing_name() {
        let env = Environment::new();
        assert!(env.borrow().get("fantasma").is_none());
    }
}
