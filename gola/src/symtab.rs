use std::collections::HashMap;
use std::fmt;

use crate::ast::Term;
use crate::error::GolaError;

/// Variable bindings of one interpreter session.
///
/// Plain owned data: a session mutates it through `&mut` and the evaluator
/// only ever sees `&SymbolTable`, so it must not be shared across threads
/// while statements are executing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    variables: HashMap<String, i64>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            variables: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    pub fn lookup(&self, name: &str) -> Result<i64, GolaError> {
        self.get(name)
            .ok_or_else(|| GolaError::UndefinedVariable(name.to_string()))
    }

    /// The single place a term becomes a value.
    pub fn resolve(&self, term: &Term) -> Result<i64, GolaError> {
        match term {
            Term::Literal(value) => Ok(*value),
            Term::Reference(name) => self.lookup(name),
        }
    }

    /// Binds `name`, replacing any previous value.
    pub fn assign(&mut self, name: &str, value: i64) {
        match self.variables.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.variables.insert(name.to_string(), value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Bindings sorted by name.
    pub fn sorted(&self) -> Vec<(&str, i64)> {
        let mut vars: Vec<_> = self
            .variables
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        vars.sort_by_key(|(name, _)| *name);
        vars
    }

    pub fn to_map(&self) -> HashMap<String, i64> {
        self.variables.clone()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        f.write_str("}")
    }
}
