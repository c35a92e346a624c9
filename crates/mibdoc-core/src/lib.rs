//! mibdoc-core: SMI module resolution engine
//!
//! This crate normalizes parsed SMI (MIB) module definitions into compact,
//! fully resolved documents: every management object and table reduced to an
//! absolute numeric OID, a canonical syntax descriptor, and explicit
//! index/row linkage, independent of which module declared the supporting
//! types. It is `no_std` compatible and IO-free.
//!
//! # Pipeline
//!
//! ```text
//! ParsedModule + SymbolTable → Resolver → ModuleDocument
//! ```
//!
//! Parsing MIB source text, discovering module files, and persisting the
//! output are external concerns; this crate consumes the already-decoded
//! declaration tree (see [`input`]) together with the cross-module symbol
//! table built while compiling the module's dependencies, and produces one
//! JSON-serializable [`model::ModuleDocument`] per module.
//!
//! # Usage
//!
//! ```ignore
//! use mibdoc_core::resolver::{resolve_module, NoopSink, RenameTable};
//!
//! let doc = resolve_module(&parsed, &symbols, &RenameTable::default(), &mut NoopSink)?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod input;
pub mod model;
pub mod resolver;

pub use resolver::resolve_module;
