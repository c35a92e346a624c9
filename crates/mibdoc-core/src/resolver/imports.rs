//! Import table construction and name resolution.

use crate::diag_event;
use crate::model::QualifiedName;
use crate::resolver::diag::{DiagLevel, Diagnostic, DiagnosticSink};
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;

/// Legacy-alias rename table, keyed by source module name.
///
/// Maps old symbol names to their current `(module, name)` owner; applied
/// while building the import table so that modules importing from very old
/// base modules still resolve against the current dialect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RenameTable {
    tables: BTreeMap<String, BTreeMap<String, QualifiedName>>,
}

impl RenameTable {
    /// Create an empty rename table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rename: `module::old_name` now lives at `target`.
    pub fn insert(&mut self, module: &str, old_name: &str, target: QualifiedName) {
        self.tables
            .entry(String::from(module))
            .or_default()
            .insert(String::from(old_name), target);
    }

    /// Look up the renamed owner of `module::name`, if any.
    #[must_use]
    pub fn lookup(&self, module: &str, name: &str) -> Option<&QualifiedName> {
        self.tables.get(module)?.get(name)
    }
}

/// Per-module mapping from locally visible name to its owning
/// `(module, symbol)` pair.
///
/// Seeded with a fixed set of well-known cross-dialect aliases before the
/// declared imports are applied, so resolution works even for modules
/// importing from pre-SMIv2 base modules.
#[derive(Clone, Debug)]
pub struct ImportTable {
    entries: BTreeMap<String, QualifiedName>,
}

impl ImportTable {
    /// Build the table from a module's IMPORTS clause.
    ///
    /// Each imported name is first checked against the rename table for its
    /// source module; a hit redirects the import to the renamed owner.
    #[must_use]
    pub fn build(
        module: &str,
        imports: &BTreeMap<String, BTreeSet<String>>,
        renames: &RenameTable,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        let mut entries = default_entries();

        for (from_module, names) in imports {
            for name in names {
                let owner = match renames.lookup(from_module, name) {
                    Some(target) => {
                        diag_event!(
                            sink,
                            DiagLevel::Debug,
                            Diagnostic::ImportRenamed {
                                module,
                                from_module,
                                symbol: name,
                                to_module: &target.module,
                                to_symbol: &target.name,
                            }
                        );
                        target.clone()
                    }
                    None => QualifiedName::new(from_module, name),
                };
                entries.insert(name.clone(), owner);
            }
        }

        Self { entries }
    }

    /// Look up an imported name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&QualifiedName> {
        self.entries.get(name)
    }

    /// Resolve a locally-used name to its owner, falling back to the
    /// current module for names that were not imported.
    #[must_use]
    pub fn resolve_name(&self, current_module: &str, name: &str) -> QualifiedName {
        match self.entries.get(name) {
            Some(owner) => owner.clone(),
            None => QualifiedName::new(current_module, name),
        }
    }
}

/// The static cross-dialect aliases every module starts from.
fn default_entries() -> BTreeMap<String, QualifiedName> {
    let mut entries = BTreeMap::new();
    entries.insert(
        String::from("iso"),
        QualifiedName::new("SNMPv2-SMI", "iso"),
    );
    entries.insert(
        String::from("Counter"),
        QualifiedName::new("SNMPv2-SMI", "Counter32"),
    );
    entries.insert(
        String::from("Gauge"),
        QualifiedName::new("SNMPv2-SMI", "Gauge32"),
    );
    entries
}
