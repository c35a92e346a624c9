//! Structured resolution diagnostics.
//!
//! Skipped declarations and progress events are surfaced here, never in the
//! output document. Implement [`DiagnosticSink`] to capture them; the sink
//! filters by level so event construction can be skipped entirely when the
//! level is too low.

use crate::input::{DeclarationKind, RawSyntax};
use crate::model::Oid;
use crate::resolver::error::ResolveError;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagLevel {
    /// Fatal failures, reported before the error propagates.
    Error,
    /// Recoverable skips (dropped objects, types, entries).
    Warn,
    /// Progress (loaded objects, tables, module identity).
    Info,
    /// Detailed decisions (type registrations, import renames).
    Debug,
}

/// Structured events emitted during module resolution.
#[derive(Clone, Debug)]
pub enum Diagnostic<'a> {
    /// MODULE-IDENTITY resolved; the document root is set.
    ModuleIdentity {
        /// Module being resolved.
        module: &'a str,
        /// Identity symbol name.
        name: &'a str,
        /// Resolved root OID.
        oid: &'a Oid,
    },

    /// A textual-convention style type was registered.
    TypeRegistered {
        /// Module being resolved.
        module: &'a str,
        /// Type name.
        name: &'a str,
    },

    /// A row (sequence) type was registered.
    EntryTypeRegistered {
        /// Module being resolved.
        module: &'a str,
        /// Type name.
        name: &'a str,
        /// Number of columns.
        fields: usize,
    },

    /// A type declaration was dropped: its syntax shape is unsupported.
    TypeSkipped {
        /// Module being resolved.
        module: &'a str,
        /// Type name.
        name: &'a str,
        /// The offending raw shape.
        syntax: &'a RawSyntax,
    },

    /// A scalar object was resolved.
    ObjectLoaded {
        /// Module being resolved.
        module: &'a str,
        /// Object name.
        name: &'a str,
        /// Resolved OID.
        oid: &'a Oid,
    },

    /// An object was dropped: its syntax shape is unsupported.
    ObjectSkipped {
        /// Module being resolved.
        module: &'a str,
        /// Object name.
        name: &'a str,
        /// The offending raw shape.
        syntax: &'a RawSyntax,
    },

    /// A conceptual table was resolved.
    TableLoaded {
        /// Module being resolved.
        module: &'a str,
        /// Table name.
        name: &'a str,
        /// Resolved OID.
        oid: &'a Oid,
        /// Row type name the table was declared with.
        row: &'a str,
    },

    /// A row declaration was linked to its table.
    EntryLinked {
        /// Module being resolved.
        module: &'a str,
        /// Row object name.
        name: &'a str,
        /// Owning table name.
        table: &'a str,
    },

    /// A row declaration was dropped: neither AUGMENTS nor INDEX present.
    EntrySkipped {
        /// Module being resolved.
        module: &'a str,
        /// Row object name.
        name: &'a str,
    },

    /// An import was redirected through the rename table.
    ImportRenamed {
        /// Module being resolved.
        module: &'a str,
        /// Source module as written in the IMPORTS clause.
        from_module: &'a str,
        /// Symbol as written in the IMPORTS clause.
        symbol: &'a str,
        /// Renamed owner module.
        to_module: &'a str,
        /// Renamed symbol.
        to_symbol: &'a str,
    },

    /// A declaration failed; the error aborts the module after this event.
    DeclarationFailed {
        /// Module being resolved.
        module: &'a str,
        /// Declaration kind.
        kind: DeclarationKind,
        /// Declared symbol name.
        name: &'a str,
        /// The failure.
        error: &'a ResolveError,
    },
}

impl core::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ModuleIdentity { module, name, oid } => {
                write!(f, "load mib {module}::{name}@{oid}")
            }
            Self::TypeRegistered { module, name } => {
                write!(f, "register object type {module}::{name}")
            }
            Self::EntryTypeRegistered {
                module,
                name,
                fields,
            } => {
                write!(f, "register entry type {module}::{name} ({fields} columns)")
            }
            Self::TypeSkipped {
                module,
                name,
                syntax,
            } => {
                write!(f, "type {module}::{name} has unsupported syntax: {syntax:?}")
            }
            Self::ObjectLoaded { module, name, oid } => {
                write!(f, "load object {module}::{name}@{oid}")
            }
            Self::ObjectSkipped {
                module,
                name,
                syntax,
            } => {
                write!(
                    f,
                    "object {module}::{name} has unsupported syntax: {syntax:?}"
                )
            }
            Self::TableLoaded {
                module,
                name,
                oid,
                row,
            } => {
                write!(f, "load table {module}::{name}@{oid} with entry type {row}")
            }
            Self::EntryLinked {
                module,
                name,
                table,
            } => {
                write!(f, "load entry {module}::{name} for table {table}")
            }
            Self::EntrySkipped { module, name } => {
                write!(f, "entry {module}::{name} has neither AUGMENTS nor INDEX")
            }
            Self::ImportRenamed {
                module,
                from_module,
                symbol,
                to_module,
                to_symbol,
            } => {
                write!(
                    f,
                    "{module}: convert import {from_module}::{symbol} => \
                     {to_module}::{to_symbol}"
                )
            }
            Self::DeclarationFailed {
                module,
                kind,
                name,
                error,
            } => {
                write!(f, "failed to load {kind} {module}::{name}: {error}")
            }
        }
    }
}

/// Trait for receiving diagnostics during resolution.
pub trait DiagnosticSink {
    /// The minimum level to emit. Events below it are not constructed.
    fn level(&self) -> DiagLevel {
        DiagLevel::Info
    }

    /// Called for each diagnostic at or above the configured level.
    fn report(&mut self, level: DiagLevel, diagnostic: Diagnostic<'_>);
}

/// A sink that discards everything.
#[derive(Default, Clone, Copy, Debug)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn level(&self) -> DiagLevel {
        DiagLevel::Error
    }

    fn report(&mut self, _level: DiagLevel, _diagnostic: Diagnostic<'_>) {
        // Intentionally empty
    }
}

/// Emit a diagnostic if the sink level permits.
///
/// The level check happens before the event expression is evaluated, so
/// disabled diagnostics cost nothing to construct.
#[macro_export]
macro_rules! diag_event {
    ($sink:expr, $level:expr, $event:expr) => {
        if $level <= $sink.level() {
            $sink.report($level, $event);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    struct TestSink {
        events: Vec<(DiagLevel, String)>,
        min_level: DiagLevel,
    }

    impl TestSink {
        fn new(level: DiagLevel) -> Self {
            Self {
                events: Vec::new(),
                min_level: level,
            }
        }
    }

    impl DiagnosticSink for TestSink {
        fn level(&self) -> DiagLevel {
            self.min_level
        }

        fn report(&mut self, level: DiagLevel, diagnostic: Diagnostic<'_>) {
            self.events.push((level, format!("{diagnostic}")));
        }
    }

    #[test]
    fn test_level_ordering() {
        assert!(DiagLevel::Error < DiagLevel::Warn);
        assert!(DiagLevel::Warn < DiagLevel::Info);
        assert!(DiagLevel::Info < DiagLevel::Debug);
    }

    #[test]
    fn test_diag_event_filters_by_level() {
        let mut sink = TestSink::new(DiagLevel::Info);
        let oid = Oid::from_slice(&[1, 3]);

        diag_event!(
            sink,
            DiagLevel::Info,
            Diagnostic::ObjectLoaded {
                module: "FOO-MIB",
                name: "fooValue",
                oid: &oid,
            }
        );
        assert_eq!(sink.events.len(), 1);

        // Below the sink level, not captured
        diag_event!(
            sink,
            DiagLevel::Debug,
            Diagnostic::TypeRegistered {
                module: "FOO-MIB",
                name: "FooType",
            }
        );
        assert_eq!(sink.events.len(), 1);
    }

    #[test]
    fn test_display() {
        let oid = Oid::from_slice(&[1, 3, 6, 1]);
        let event = Diagnostic::TableLoaded {
            module: "FOO-MIB",
            name: "fooTable",
            oid: &oid,
            row: "FooEntry",
        };
        assert_eq!(
            format!("{event}"),
            "load table FOO-MIB::fooTable@.1.3.6.1 with entry type FooEntry"
        );
    }
}
