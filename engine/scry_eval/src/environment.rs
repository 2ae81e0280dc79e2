//! Variable environment for the interpreter.
//!
//! The synthesized routine is one flat body — the grammar has no blocks,
//! closures, or lexical nesting — so a single binding map is the whole
//! scoping story. A fresh environment is built per evaluation cycle and
//! dropped afterwards; isolation between cycles falls out of that.

use crate::Value;
use rustc_hash::FxHashMap;

/// A single flat scope of variable bindings.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
        }
    }

    /// Bind `name` to `value`, overwriting any previous binding.
    ///
    /// Rebinding is how later lines shadow earlier ones (and how user
    /// bindings shadow builtin constants).
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a binding.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Number of bindings currently defined.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
