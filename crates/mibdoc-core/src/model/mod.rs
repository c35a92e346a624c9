//! Resolved module documents.
//!
//! The document is the final output of resolution: one per module, listing
//! resolved objects and tables with absolute OIDs and canonical syntax
//! descriptors. All types serialize to the stable JSON schema consumed by
//! downstream tooling (field names `Name`, `OID`, `Syntax`, ...).

mod document;
mod name;
mod oid;
mod syntax;

pub use document::{ModuleDocument, ObjectRecord, TableRecord};
pub use name::QualifiedName;
pub use oid::Oid;
pub use syntax::{BitOption, EnumOption, ResolvedSyntax, SyntaxKind, SyntaxOptions};
