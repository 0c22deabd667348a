//! Mutation surface over the host's function-definition mapping.
//!
//! The injector never reaches into ambient host state; it is handed a value
//! implementing [`FunctionStore`] and can only insert definitions and visit
//! the existing ones.

use indexmap::IndexMap;

use crate::service::model::FunctionDefinition;

/// Declaration-ordered function-definition mapping.
pub type FunctionMap = IndexMap<String, FunctionDefinition>;

/// Narrow insert/iterate interface the injector operates on.
pub trait FunctionStore {
    /// Registers a definition under the given function key, replacing any
    /// previous definition with that key.
    fn insert(&mut self, key: String, definition: FunctionDefinition);

    /// Visits every definition in declaration order, mutably.
    fn visit_mut(&mut self, visitor: &mut dyn FnMut(&str, &mut FunctionDefinition));
}

impl FunctionStore for FunctionMap {
    fn insert(&mut self, key: String, definition: FunctionDefinition) {
        IndexMap::insert(self, key, definition);
    }

    fn visit_mut(&mut self, visitor: &mut dyn FnMut(&str, &mut FunctionDefinition)) {
        for (key, definition) in self.iter_mut() {
            visitor(key, definition);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_order_follows_insertion() {
        let mut functions = FunctionMap::new();
        for key in ["first", "second", "third"] {
            FunctionStore::insert(&mut functions, key.into(), FunctionDefinition::default());
        }

        let mut seen = Vec::new();
        functions.visit_mut(&mut |key, _| seen.push(key.to_owned()));
        assert_eq!(seen, ["first", "second", "third"]);
    }
}
