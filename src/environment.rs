//! Lexical environment: a name → value map chained to an optional outer
//! scope, shared via `Rc<RefCell<_>>` so a closure's captured environment
//! outlives the call that created it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::Object;

#[derive(Debug, Clone)]
pub struct Environment(Rc<RefCell<EnvironmentInner>>);

#[derive(Debug)]
struct EnvironmentInner {
    store: HashMap<String, Object>,
    outer: Option<Environment>,
}

impl Environment {
    pub fn new() -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentInner {
            store: HashMap::new(),
            outer: None,
        })))
    }

    /// A child environment whose lookups fall back to `outer` on miss.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentInner {
            store: HashMap::new(),
            outer: Some(outer.clone()),
        })))
    }

    /// Searches the local map, then recurses to the outer environment.
    pub fn get(&self, name: &str) -> Option<Object> {
        let inner = self.0.borrow();
        match inner.store.get(name) {
            Some(value) => Some(value.clone()),
            None => inner.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Writes into the local map only, overwriting any existing binding of
    /// the same name in this scope.
    pub fn set(&self, name: &str, value: Object) -> Object {
        self.0
            .borrow_mut()
            .store
            .insert(name.to_string(), value.clone());
        value
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
