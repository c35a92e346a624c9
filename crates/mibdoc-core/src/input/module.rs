//! A parsed module, ready for resolution.

use super::declaration::Declaration;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;

/// A parsed SMI module: name, imports, and declarations in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedModule {
    /// Module name, e.g. `IF-MIB`.
    pub name: String,
    /// Imported symbols, keyed by source module name.
    pub imports: BTreeMap<String, BTreeSet<String>>,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl ParsedModule {
    /// Create an empty module.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            imports: BTreeMap::new(),
            declarations: Vec::new(),
        }
    }

    /// Record an imported symbol.
    pub fn import(&mut self, from_module: &str, symbol: &str) {
        self.imports
            .entry(String::from(from_module))
            .or_default()
            .insert(String::from(symbol));
    }
}
