//! Decoded parser output.
//!
//! The upstream SMI parser hands over a dynamically-shaped declaration tree;
//! these types are its decoded, closed-variant form. Decoding happens once at
//! the compiler boundary so that everything downstream matches exhaustively.

mod declaration;
mod module;
mod symbols;
mod syntax;

pub use declaration::{
    Declaration, DeclarationKind, IndexField, MaxAccess, ModuleIdentityDecl, ObjectTypeDecl,
    OidRef, SequenceField, TypeDefDecl, TypeRhs,
};
pub use module::ParsedModule;
pub use symbols::{OidChain, SymbolKind, SymbolRecord, SymbolSyntax, SymbolTable};
pub use syntax::{RawBit, RawConstraint, RawEnumItem, RawSyntax};
