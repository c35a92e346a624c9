//! Per-module resolution state.
//!
//! One context is built per `resolve_module` invocation and discarded with
//! it; nothing here outlives the module being resolved. The OID and symbol
//! caches are seeded from fixed process-wide constants and are never
//! invalidated mid-module.

use crate::input::{OidRef, SequenceField, SymbolRecord, SymbolTable};
use crate::model::{ModuleDocument, ObjectRecord, Oid, QualifiedName, ResolvedSyntax, TableRecord};
use crate::resolver::error::ResolveError;
use crate::resolver::imports::ImportTable;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Working state for resolving one module.
pub struct ResolverContext<'a> {
    /// The module being resolved.
    pub module: &'a str,
    symbols: &'a SymbolTable,
    /// The module's import table.
    pub imports: ImportTable,
    symbol_cache: BTreeMap<(String, String), &'a SymbolRecord>,
    oid_cache: BTreeMap<(String, String), Oid>,
    /// Registered textual-convention style aliases: name → resolved syntax.
    pub object_types: BTreeMap<String, ResolvedSyntax>,
    /// Registered row types: name → ordered column list, kept verbatim.
    pub entry_types: BTreeMap<String, &'a [SequenceField]>,
    /// Row type name → index into `tables`.
    entry_table: BTreeMap<String, usize>,
    /// The module's declared root OID, once MODULE-IDENTITY resolves.
    pub module_oid: Option<Oid>,
    /// Resolved scalar objects, in declaration order.
    pub objects: Vec<ObjectRecord>,
    /// Resolved tables, in declaration order.
    pub tables: Vec<TableRecord>,
}

impl<'a> ResolverContext<'a> {
    /// Create a context for one module.
    #[must_use]
    pub fn new(module: &'a str, symbols: &'a SymbolTable, imports: ImportTable) -> Self {
        let mut oid_cache = BTreeMap::new();
        // The conventional root terminates all recursion
        oid_cache.insert(
            (String::from("SNMPv2-SMI"), String::from("iso")),
            Oid::from_slice(&[1]),
        );

        Self {
            module,
            symbols,
            imports,
            symbol_cache: BTreeMap::new(),
            oid_cache,
            object_types: BTreeMap::new(),
            entry_types: BTreeMap::new(),
            entry_table: BTreeMap::new(),
            module_oid: None,
            objects: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Resolve a locally-used name to its qualified owner.
    #[must_use]
    pub fn qualify(&self, name: &str) -> QualifiedName {
        self.imports.resolve_name(self.module, name)
    }

    /// Look up a symbol record, going through the import table when the
    /// lookup targets the current module. Memoized.
    pub fn lookup_symbol(
        &mut self,
        module: &str,
        name: &str,
    ) -> Result<&'a SymbolRecord, ResolveError> {
        let (module, name) = if module == self.module {
            match self.imports.get(name) {
                Some(owner) => (owner.module.clone(), owner.name.clone()),
                None => (module.to_string(), name.to_string()),
            }
        } else {
            (module.to_string(), name.to_string())
        };

        let key = (module, name);
        if let Some(&record) = self.symbol_cache.get(&key) {
            return Ok(record);
        }

        let record = self.symbols.lookup(&key.0, &key.1).ok_or_else(|| {
            if self.symbols.contains_module(&key.0) {
                ResolveError::UnknownSymbol {
                    module: key.0.clone(),
                    name: key.1.clone(),
                }
            } else {
                ResolveError::UnknownModule {
                    module: key.0.clone(),
                }
            }
        })?;
        self.symbol_cache.insert(key, record);
        Ok(record)
    }

    /// Resolve `(module, name)` to its absolute OID, appending
    /// `extra` sub-identifiers to the result.
    ///
    /// The memo cache is keyed by `(module, name)` only; the appended
    /// segments are never part of the cached value.
    pub fn resolve_oid(
        &mut self,
        module: &str,
        name: &str,
        extra: &[u32],
    ) -> Result<Oid, ResolveError> {
        let mut visited = BTreeSet::new();
        let oid = self.resolve_oid_inner(module, name, &mut visited)?;
        if extra.is_empty() {
            Ok(oid)
        } else {
            Ok(oid.extend(extra))
        }
    }

    /// Resolve an OID assignment from the current module.
    pub fn resolve_oid_ref(&mut self, oid_ref: &OidRef) -> Result<Oid, ResolveError> {
        let module = self.module;
        self.resolve_oid(module, &oid_ref.parent, &oid_ref.subids)
    }

    fn resolve_oid_inner(
        &mut self,
        module: &str,
        name: &str,
        visited: &mut BTreeSet<(String, String)>,
    ) -> Result<Oid, ResolveError> {
        // Current-module names go through the import table first
        let owner = if module == self.module {
            self.imports.resolve_name(self.module, name)
        } else {
            QualifiedName::new(module, name)
        };

        let key = (owner.module, owner.name);
        if let Some(oid) = self.oid_cache.get(&key) {
            return Ok(oid.clone());
        }
        if !visited.insert(key.clone()) {
            return Err(ResolveError::CircularReference {
                module: key.0,
                name: key.1,
            });
        }

        let record = self.lookup_symbol(&key.0, &key.1)?;
        let chain = record.chain.clone();
        let parent = self.resolve_oid_inner(&chain.parent_module, &chain.parent_name, visited)?;
        let oid = parent.extend(&chain.subids);
        self.oid_cache.insert(key, oid.clone());
        Ok(oid)
    }

    /// Register a freshly resolved table under its row type name.
    pub fn register_table(&mut self, row: &str, table: TableRecord) {
        self.tables.push(table);
        self.entry_table
            .insert(String::from(row), self.tables.len() - 1);
    }

    /// The table registered for a row type name, if its declaration was
    /// already processed.
    #[must_use]
    pub fn table_for_row(&self, row: &str) -> Option<usize> {
        self.entry_table.get(row).copied()
    }

    /// Mutable access to a table by index.
    pub fn table_mut(&mut self, index: usize) -> &mut TableRecord {
        &mut self.tables[index]
    }

    /// Consume the context into the final document.
    #[must_use]
    pub fn into_document(self) -> ModuleDocument {
        ModuleDocument {
            name: String::from(self.module),
            oid: self.module_oid,
            objects: self.objects,
            tables: self.tables,
        }
    }
}
