//! Resolution failures.
//!
//! These are the fatal errors: any of them aborts the enclosing module's
//! compilation (but not the run). Recoverable conditions such as
//! unsupported syntax shapes or rows missing both INDEX and AUGMENTS
//! never surface here; they are skipped with a diagnostic instead.

use crate::input::DeclarationKind;
use alloc::boxed::Box;
use alloc::string::String;

/// A fatal resolution error for the enclosing module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The symbol table has no entry for a referenced module.
    UnknownModule {
        /// The missing module.
        module: String,
    },

    /// The symbol table has no record for a referenced symbol.
    UnknownSymbol {
        /// Module the lookup targeted.
        module: String,
        /// Symbol name.
        name: String,
    },

    /// An identifier-parent chain loops back on itself.
    CircularReference {
        /// Module of the symbol where the cycle was detected.
        module: String,
        /// Symbol name.
        name: String,
    },

    /// A subtype constraint list had an arity other than 1 or 2.
    BadConstraint {
        /// Number of values in the constraint list.
        len: usize,
    },

    /// A row declaration references a row type no table in this module
    /// was declared with.
    MissingEntryTable {
        /// The row type name.
        row: String,
    },

    /// A lower-level failure wrapped with declaration context.
    Declaration {
        /// Module being resolved.
        module: String,
        /// Declaration kind.
        kind: DeclarationKind,
        /// Declared symbol name.
        name: String,
        /// Underlying failure.
        source: Box<ResolveError>,
    },
}

impl ResolveError {
    /// Wrap an error with the declaration it occurred in.
    #[must_use]
    pub fn in_declaration(
        self,
        module: &str,
        kind: DeclarationKind,
        name: &str,
    ) -> Self {
        Self::Declaration {
            module: String::from(module),
            kind,
            name: String::from(name),
            source: Box::new(self),
        }
    }
}

impl core::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownModule { module } => {
                write!(f, "unknown module: {module}")
            }
            Self::UnknownSymbol { module, name } => {
                write!(f, "unknown symbol: {module}::{name}")
            }
            Self::CircularReference { module, name } => {
                write!(f, "circular identifier chain at {module}::{name}")
            }
            Self::BadConstraint { len } => {
                write!(f, "invalid subtype constraint: {len} values (expected 1 or 2)")
            }
            Self::MissingEntryTable { row } => {
                write!(f, "no table declared for row type {row}")
            }
            Self::Declaration {
                module,
                kind,
                name,
                source,
            } => {
                write!(f, "failed to load {kind} {module}::{name}: {source}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Declaration { source, .. } => Some(source),
            _ => None,
        }
    }
}
