//! Function registry for expression trees.
//!
//! A registry is an ordered table of named operations with a fixed arity.
//! Random tree generation picks from it uniformly, and function nodes hold a
//! shared handle to the descriptor they were built from.

use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Numeric value produced by evaluating a tree.
pub type Value = i64;

/// Signature of a function's implementation.
///
/// The slice always holds exactly `arity` evaluated children, in order.
pub type Apply = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A named operation usable as a function node.
pub struct Function {
    name: String,
    arity: usize,
    apply: Box<Apply>,
}

impl Function {
    /// Create a function descriptor.
    pub fn new<F>(name: impl Into<String>, arity: usize, apply: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity,
            apply: Box::new(apply),
        }
    }

    /// Name shown in tree dumps.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of children a node of this function owns.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Apply the function to already evaluated arguments.
    #[must_use]
    pub fn apply(&self, args: &[Value]) -> Value {
        (self.apply)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Descriptors compare by name and arity; implementations are opaque.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arity == other.arity
    }
}

impl Eq for Function {}

/// Names accepted by [`Registry::from_names`].
pub const CATALOG: [&str; 5] = ["add", "multiply", "if", "isgreater", "subtract"];

/// Look up a built-in function by name.
#[must_use]
pub fn builtin(name: &str) -> Option<Function> {
    let function = match name {
        "add" => Function::new("add", 2, |a| a[0].wrapping_add(a[1])),
        "subtract" => Function::new("subtract", 2, |a| a[0].wrapping_sub(a[1])),
        "multiply" => Function::new("multiply", 2, |a| a[0].wrapping_mul(a[1])),
        "if" => Function::new("if", 3, |a| if a[0] > 0 { a[1] } else { a[2] }),
        "isgreater" => Function::new("isgreater", 2, |a| Value::from(a[0] > a[1])),
        _ => return None,
    };
    Some(function)
}

/// Ordered set of functions available to trees.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    functions: Vec<Arc<Function>>,
}

impl Registry {
    /// Create an empty registry. Trees generated from it are single leaves.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full built-in catalog, in catalog order.
    #[must_use]
    pub fn arithmetic() -> Self {
        let mut registry = Self::new();
        for function in CATALOG.iter().filter_map(|name| builtin(name)) {
            registry.push(function);
        }
        registry
    }

    /// Build a registry from built-in names.
    ///
    /// # Errors
    ///
    /// Returns the first name that is not in [`CATALOG`].
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, String> {
        let mut registry = Self::new();
        for name in names {
            let name = name.as_ref();
            let function = builtin(name).ok_or_else(|| name.to_string())?;
            registry.push(function);
        }
        Ok(registry)
    }

    /// Add a custom function.
    pub fn register<F>(&mut self, name: impl Into<String>, arity: usize, apply: F) -> &mut Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        self.push(Function::new(name, arity, apply));
        self
    }

    /// Add an already built descriptor.
    pub fn push(&mut self, function: Function) {
        self.functions.push(Arc::new(function));
    }

    /// Find a function by name (first match wins).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Function>> {
        self.functions.iter().find(|f| f.name() == name)
    }

    /// Pick a function uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Arc<Function>> {
        if self.functions.is_empty() {
            None
        } else {
            Some(&self.functions[rng.gen_range(0..self.functions.len())])
        }
    }

    /// Iterate over the functions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Function>> {
        self.functions.iter()
    }

    /// Number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether no function is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
