//! The per-module output document.

use super::name::QualifiedName;
use super::oid::Oid;
use super::syntax::{SyntaxKind, SyntaxOptions};
use alloc::string::String;
use alloc::vec::Vec;

/// A resolved scalar object.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectRecord {
    /// Object name.
    #[cfg_attr(feature = "serde", serde(rename = "Name"))]
    pub name: String,

    /// Absolute OID.
    #[cfg_attr(feature = "serde", serde(rename = "OID"))]
    pub oid: Oid,

    /// Canonical syntax tag.
    #[cfg_attr(feature = "serde", serde(rename = "Syntax"))]
    pub syntax: SyntaxKind,

    /// Syntax options, omitted when absent.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "SyntaxOptions",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub syntax_options: Option<SyntaxOptions>,

    /// Set for `not-accessible` objects. They stay in the document: their
    /// OIDs are part of the tree and may be referenced by INDEX clauses.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "NotAccessible", default, skip_serializing_if = "is_false")
    )]
    pub not_accessible: bool,
}

/// A resolved conceptual table.
///
/// Created when the table declaration resolves; entry linkage fields are
/// filled in once the corresponding row declaration resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRecord {
    /// Table name.
    #[cfg_attr(feature = "serde", serde(rename = "Name"))]
    pub name: String,

    /// Absolute OID.
    #[cfg_attr(feature = "serde", serde(rename = "OID"))]
    pub oid: Oid,

    /// Row object name, set once the entry declaration resolves.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "EntryName", default, skip_serializing_if = "Option::is_none")
    )]
    pub entry_name: Option<String>,

    /// Ordered INDEX references; unset for AUGMENTS rows.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "IndexObjects",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub index_objects: Option<Vec<QualifiedName>>,

    /// The augmented entry reference; unset for INDEX rows.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "AugmentsEntry",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub augments_entry: Option<QualifiedName>,

    /// Ordered column references from the row's sequence type.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "EntryObjects", default, skip_serializing_if = "Vec::is_empty")
    )]
    pub entry_objects: Vec<QualifiedName>,
}

impl TableRecord {
    /// Create a table record with entry linkage still unresolved.
    #[must_use]
    pub fn new(name: &str, oid: Oid) -> Self {
        Self {
            name: String::from(name),
            oid,
            entry_name: None,
            index_objects: None,
            augments_entry: None,
            entry_objects: Vec::new(),
        }
    }
}

/// The final document for one resolved module.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleDocument {
    /// Module name.
    #[cfg_attr(feature = "serde", serde(rename = "Name"))]
    pub name: String,

    /// The module's declared root OID, present iff the module carries a
    /// MODULE-IDENTITY declaration.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "OID", default, skip_serializing_if = "Option::is_none")
    )]
    pub oid: Option<Oid>,

    /// Resolved scalar objects.
    #[cfg_attr(feature = "serde", serde(rename = "Objects"))]
    pub objects: Vec<ObjectRecord>,

    /// Resolved tables.
    #[cfg_attr(feature = "serde", serde(rename = "Tables"))]
    pub tables: Vec<TableRecord>,
}

#[cfg(feature = "serde")]
#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}
