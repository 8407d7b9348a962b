use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, binding variable names to values.
///
/// Variable names are matched exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt<T> {
    /// The variables in the context.
    vars: HashMap<String, T>,
}

impl<T> Default for Ctxt<T> {
    fn default() -> Self {
        Self { vars: HashMap::new() }
    }
}

impl<T> Ctxt<T> {
    /// Creates a new context with no variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the context, replacing any previous value with the same name.
    pub fn add_var(&mut self, name: &str, value: T) {
        self.vars.insert(name.to_string(), value);
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, T> {
        &self.vars
    }
}

impl<T: Clone> Ctxt<T> {
    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<T> {
        self.vars.get(name).cloned()
    }
}

impl<T> From<HashMap<String, T>> for Ctxt<T> {
    fn from(vars: HashMap<String, T>) -> Self {
        Self { vars }
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Ctxt<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}
