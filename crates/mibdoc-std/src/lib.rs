//! mibdoc-std: filesystem and tracing glue for mibdoc-core
//!
//! The core crate is `no_std` and IO-free; this crate adds the native-side
//! conveniences: writing resolved documents as JSON files, loading rename
//! tables from disk, and forwarding resolution diagnostics to `tracing`.

pub mod trace;
pub mod writer;

pub use mibdoc_core;
pub use trace::TracingSink;
pub use writer::{load_document, load_rename_table, DocumentWriter, WriterError};
