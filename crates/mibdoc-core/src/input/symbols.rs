//! Cross-module symbol table.
//!
//! Built by the external compiler while resolving a module's dependency
//! closure, then shared read-only across every module resolved in the same
//! run. The table must already cover the module being resolved and every
//! module it (transitively) imports from.

use super::syntax::RawEnumItem;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Read-only registry of every previously compiled module's symbols.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    modules: BTreeMap<String, BTreeMap<String, SymbolRecord>>,
}

impl SymbolTable {
    /// Create an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a symbol. Keys are stored dash-normalized.
    pub fn insert(&mut self, module: &str, symbol: &str, record: SymbolRecord) {
        self.modules
            .entry(String::from(module))
            .or_default()
            .insert(normalize_key(symbol), record);
    }

    /// Check whether the table knows a module at all.
    #[must_use]
    pub fn contains_module(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    /// Look up a symbol record.
    ///
    /// The upstream symbol-table builder stores keys with `_` in place of
    /// `-`, so lookups normalize the symbol name the same way.
    #[must_use]
    pub fn lookup(&self, module: &str, symbol: &str) -> Option<&SymbolRecord> {
        self.modules.get(module)?.get(&normalize_key(symbol))
    }
}

fn normalize_key(symbol: &str) -> String {
    symbol.replace('-', "_")
}

/// One symbol's entry in the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolRecord {
    /// What the symbol declares.
    pub kind: SymbolKind,
    /// Position in the identifier tree, relative to a parent symbol.
    pub chain: OidChain,
    /// Raw syntax, present for type declarations.
    pub syntax: Option<SymbolSyntax>,
}

impl SymbolRecord {
    /// A plain node record with no syntax.
    #[must_use]
    pub fn node(kind: SymbolKind, chain: OidChain) -> Self {
        Self {
            kind,
            chain,
            syntax: None,
        }
    }

    /// A type-declaration record.
    #[must_use]
    pub fn type_declaration(chain: OidChain, syntax: SymbolSyntax) -> Self {
        Self {
            kind: SymbolKind::TypeDeclaration,
            chain,
            syntax: Some(syntax),
        }
    }
}

/// The kind of entity a symbol declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    /// A type declaration (textual convention or sequence type).
    TypeDeclaration,
    /// An OBJECT-TYPE.
    ObjectType,
    /// An OBJECT-IDENTITY node.
    ObjectIdentity,
    /// A MODULE-IDENTITY node.
    ModuleIdentity,
    /// A NOTIFICATION-TYPE.
    NotificationType,
    /// A bare value assignment (OID-valued identifier).
    MibIdentifier,
}

impl core::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TypeDeclaration => write!(f, "TypeDeclaration"),
            Self::ObjectType => write!(f, "ObjectType"),
            Self::ObjectIdentity => write!(f, "ObjectIdentity"),
            Self::ModuleIdentity => write!(f, "ModuleIdentity"),
            Self::NotificationType => write!(f, "NotificationType"),
            Self::MibIdentifier => write!(f, "MibIdentifier"),
        }
    }
}

/// A symbol's identifier-parent chain: parent reference plus the
/// sub-identifiers appended below it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OidChain {
    /// Module owning the parent symbol.
    pub parent_module: String,
    /// Parent symbol name.
    pub parent_name: String,
    /// Sub-identifiers appended below the parent.
    pub subids: Vec<u32>,
}

impl OidChain {
    /// Create a chain entry.
    #[must_use]
    pub fn new(parent_module: &str, parent_name: &str, subids: &[u32]) -> Self {
        Self {
            parent_module: String::from(parent_module),
            parent_name: String::from(parent_name),
            subids: subids.to_vec(),
        }
    }
}

/// The raw syntax recorded for a type-declaration symbol.
///
/// The upstream symbol-table builder flattens syntax to a (name, module)
/// pair plus an optional enumeration spec; the legacy kind tags it emits
/// (`OctetString`, `ObjectIdentifier`, `Integer32` with an enum spec) are
/// remapped by the syntax normalizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolSyntax {
    /// Base syntax name as recorded by the symbol-table builder.
    pub name: String,
    /// Module the base syntax belongs to.
    pub module: String,
    /// Enumeration spec, if the type enumerates values.
    pub enum_spec: Option<Vec<RawEnumItem>>,
}

impl SymbolSyntax {
    /// A base syntax with no enumeration.
    #[must_use]
    pub fn plain(name: &str, module: &str) -> Self {
        Self {
            name: String::from(name),
            module: String::from(module),
            enum_spec: None,
        }
    }

    /// A base syntax carrying an enumeration spec.
    #[must_use]
    pub fn with_enum(name: &str, module: &str, spec: Vec<RawEnumItem>) -> Self {
        Self {
            name: String::from(name),
            module: String::from(module),
            enum_spec: Some(spec),
        }
    }
}
