//! Module declarations consumed by the resolver.

use super::syntax::RawSyntax;
use alloc::string::String;
use alloc::vec::Vec;

/// A declaration from a parsed module, in source order.
///
/// The resolver consumes exactly three declaration kinds; the upstream
/// parser filters out everything else (compliance statements, notification
/// groups, and the like) before handing over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Declaration {
    /// MODULE-IDENTITY: declares the module's own root OID.
    ModuleIdentity(ModuleIdentityDecl),
    /// A type declaration: textual convention or row (SEQUENCE) type.
    TypeDef(TypeDefDecl),
    /// OBJECT-TYPE: a scalar object, conceptual table, or table row.
    ObjectType(ObjectTypeDecl),
}

impl Declaration {
    /// The declaration kind, for error context.
    #[must_use]
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Self::ModuleIdentity(_) => DeclarationKind::ModuleIdentity,
            Self::TypeDef(_) => DeclarationKind::TypeDef,
            Self::ObjectType(_) => DeclarationKind::ObjectType,
        }
    }

    /// The declared symbol name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ModuleIdentity(d) => &d.name,
            Self::TypeDef(d) => &d.name,
            Self::ObjectType(d) => &d.name,
        }
    }
}

/// Declaration kind tag, used in diagnostics and error context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclarationKind {
    /// MODULE-IDENTITY clause.
    ModuleIdentity,
    /// Type declaration.
    TypeDef,
    /// OBJECT-TYPE clause.
    ObjectType,
}

impl core::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ModuleIdentity => write!(f, "module identity"),
            Self::TypeDef => write!(f, "type declaration"),
            Self::ObjectType => write!(f, "object type"),
        }
    }
}

/// MODULE-IDENTITY declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleIdentityDecl {
    /// Identity symbol name.
    pub name: String,
    /// The module's root OID reference.
    pub oid: OidRef,
}

/// A type declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDefDecl {
    /// Type name.
    pub name: String,
    /// Right-hand side.
    pub rhs: TypeRhs,
}

/// The right-hand side of a type declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeRhs {
    /// TEXTUAL-CONVENTION with the given base syntax.
    TextualConvention(RawSyntax),
    /// SEQUENCE row type: the ordered column list.
    Sequence(Vec<SequenceField>),
    /// A plain syntax assignment without the TEXTUAL-CONVENTION wrapper.
    /// Seen in a handful of legacy modules; resolved best-effort.
    Plain(RawSyntax),
}

/// One field of a SEQUENCE row type, in declared order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceField {
    /// Column object name.
    pub name: String,
    /// Raw field syntax, kept verbatim for later resolution.
    pub syntax: RawSyntax,
}

impl SequenceField {
    /// Create a sequence field.
    #[must_use]
    pub fn new(name: &str, syntax: RawSyntax) -> Self {
        Self {
            name: String::from(name),
            syntax,
        }
    }
}

/// OBJECT-TYPE declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectTypeDecl {
    /// Object name.
    pub name: String,
    /// SYNTAX clause.
    pub syntax: RawSyntax,
    /// MAX-ACCESS clause, if present.
    pub max_access: Option<MaxAccess>,
    /// AUGMENTS target row name, if present.
    pub augments: Option<String>,
    /// INDEX clause fields, if present.
    pub index: Option<Vec<IndexField>>,
    /// OID assignment.
    pub oid: OidRef,
}

/// MAX-ACCESS levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaxAccess {
    /// not-accessible
    NotAccessible,
    /// accessible-for-notify
    AccessibleForNotify,
    /// read-only
    ReadOnly,
    /// read-write
    ReadWrite,
    /// read-create
    ReadCreate,
}

/// One field of an INDEX clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexField {
    /// Index object name.
    pub name: String,
    /// IMPLIED marker. Affects wire encoding only; resolution ignores it.
    pub implied: bool,
}

impl IndexField {
    /// Create an index field.
    #[must_use]
    pub fn new(name: &str, implied: bool) -> Self {
        Self {
            name: String::from(name),
            implied,
        }
    }
}

/// An OID assignment: a parent symbol plus trailing sub-identifiers.
///
/// `{ fooMIB 1 }` decodes to parent `fooMIB` and sub-identifiers `[1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OidRef {
    /// Parent symbol name, resolved through the import table.
    pub parent: String,
    /// Sub-identifiers appended below the parent.
    pub subids: Vec<u32>,
}

impl OidRef {
    /// Create an OID reference.
    #[must_use]
    pub fn new(parent: &str, subids: &[u32]) -> Self {
        Self {
            parent: String::from(parent),
            subids: subids.to_vec(),
        }
    }
}
