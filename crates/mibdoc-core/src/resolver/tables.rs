//! OBJECT-TYPE classification and loading.
//!
//! Each OBJECT-TYPE declaration is classified by its syntax shape: a
//! `SEQUENCE OF` marker makes a conceptual table, a registered row type
//! name makes a table entry, anything else is a scalar object. Entries
//! declared before their table are deferred and retried once the full
//! declaration list has been walked.

use crate::diag_event;
use crate::input::{MaxAccess, ObjectTypeDecl, RawSyntax};
use crate::model::{ObjectRecord, QualifiedName, TableRecord};
use crate::resolver::context::ResolverContext;
use crate::resolver::diag::{DiagLevel, Diagnostic, DiagnosticSink};
use crate::resolver::error::ResolveError;
use crate::resolver::syntax::normalize_object_syntax;
use alloc::string::String;
use alloc::vec::Vec;

/// What became of one OBJECT-TYPE declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ObjectOutcome {
    /// Resolved into the document.
    Loaded,
    /// Dropped with a diagnostic.
    Skipped,
    /// An entry whose table has not been seen yet; retry after the
    /// remaining declarations.
    Deferred,
}

/// Classify and load one OBJECT-TYPE declaration.
pub(crate) fn load_object_type(
    ctx: &mut ResolverContext<'_>,
    decl: &ObjectTypeDecl,
    allow_defer: bool,
    sink: &mut dyn DiagnosticSink,
) -> Result<ObjectOutcome, ResolveError> {
    match &decl.syntax {
        RawSyntax::Table { row } => {
            load_table(ctx, decl, row, sink)?;
            Ok(ObjectOutcome::Loaded)
        }
        RawSyntax::Row(row) if ctx.entry_types.contains_key(row.as_str()) => {
            load_entry(ctx, decl, row, allow_defer, sink)
        }
        _ => load_scalar(ctx, decl, sink),
    }
}

fn load_table(
    ctx: &mut ResolverContext<'_>,
    decl: &ObjectTypeDecl,
    row: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ResolveError> {
    let oid = ctx.resolve_oid_ref(&decl.oid)?;
    diag_event!(
        sink,
        DiagLevel::Info,
        Diagnostic::TableLoaded {
            module: ctx.module,
            name: &decl.name,
            oid: &oid,
            row,
        }
    );
    ctx.register_table(row, TableRecord::new(&decl.name, oid));
    Ok(())
}

fn load_entry(
    ctx: &mut ResolverContext<'_>,
    decl: &ObjectTypeDecl,
    row: &str,
    allow_defer: bool,
    sink: &mut dyn DiagnosticSink,
) -> Result<ObjectOutcome, ResolveError> {
    let Some(index) = ctx.table_for_row(row) else {
        if allow_defer {
            return Ok(ObjectOutcome::Deferred);
        }
        return Err(ResolveError::MissingEntryTable {
            row: String::from(row),
        });
    };

    // Validates the OID assignment; the row OID itself is not emitted
    ctx.resolve_oid_ref(&decl.oid)?;

    enum Linkage {
        Augments(QualifiedName),
        Index(Vec<QualifiedName>),
    }

    let linkage = if let Some(augments) = &decl.augments {
        Linkage::Augments(ctx.qualify(augments))
    } else if let Some(fields) = &decl.index {
        Linkage::Index(fields.iter().map(|f| ctx.qualify(&f.name)).collect())
    } else {
        diag_event!(
            sink,
            DiagLevel::Warn,
            Diagnostic::EntrySkipped {
                module: ctx.module,
                name: &decl.name,
            }
        );
        return Ok(ObjectOutcome::Skipped);
    };

    let columns: Vec<QualifiedName> = ctx.entry_types[row]
        .iter()
        .map(|field| ctx.qualify(&field.name))
        .collect();

    let table = ctx.table_mut(index);
    table.entry_name = Some(decl.name.clone());
    match linkage {
        Linkage::Augments(target) => table.augments_entry = Some(target),
        Linkage::Index(objects) => table.index_objects = Some(objects),
    }
    table.entry_objects = columns;
    let table_name = table.name.clone();

    diag_event!(
        sink,
        DiagLevel::Info,
        Diagnostic::EntryLinked {
            module: ctx.module,
            name: &decl.name,
            table: &table_name,
        }
    );
    Ok(ObjectOutcome::Loaded)
}

fn load_scalar(
    ctx: &mut ResolverContext<'_>,
    decl: &ObjectTypeDecl,
    sink: &mut dyn DiagnosticSink,
) -> Result<ObjectOutcome, ResolveError> {
    let oid = ctx.resolve_oid_ref(&decl.oid)?;

    let Some(resolved) = normalize_object_syntax(ctx, &decl.syntax)? else {
        diag_event!(
            sink,
            DiagLevel::Warn,
            Diagnostic::ObjectSkipped {
                module: ctx.module,
                name: &decl.name,
                syntax: &decl.syntax,
            }
        );
        return Ok(ObjectOutcome::Skipped);
    };

    let record = ObjectRecord {
        name: decl.name.clone(),
        oid,
        syntax: resolved.kind,
        syntax_options: resolved.options,
        not_accessible: decl.max_access == Some(MaxAccess::NotAccessible),
    };
    diag_event!(
        sink,
        DiagLevel::Info,
        Diagnostic::ObjectLoaded {
            module: ctx.module,
            name: &record.name,
            oid: &record.oid,
        }
    );
    ctx.objects.push(record);
    Ok(ObjectOutcome::Loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        IndexField, OidChain, OidRef, RawConstraint, SequenceField, SymbolKind, SymbolRecord,
        SymbolTable,
    };
    use crate::model::SyntaxKind;
    use crate::resolver::diag::NoopSink;
    use crate::resolver::imports::{ImportTable, RenameTable};
    use alloc::collections::{BTreeMap, BTreeSet};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    fn symbols() -> SymbolTable {
        let mut table = SymbolTable::new();
        for (name, parent, subids) in [
            ("org", "iso", &[3][..]),
            ("dod", "org", &[6]),
            ("internet", "dod", &[1]),
            ("private", "internet", &[4]),
            ("enterprises", "private", &[1]),
        ] {
            table.insert(
                "SNMPv2-SMI",
                name,
                SymbolRecord::node(
                    SymbolKind::MibIdentifier,
                    OidChain::new("SNMPv2-SMI", parent, subids),
                ),
            );
        }
        table.insert(
            "FOO-MIB",
            "fooMIB",
            SymbolRecord::node(
                SymbolKind::ModuleIdentity,
                OidChain::new("SNMPv2-SMI", "enterprises", &[32473]),
            ),
        );
        table
    }

    fn make_context<'a>(symbols: &'a SymbolTable) -> ResolverContext<'a> {
        let mut imports_map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        imports_map
            .entry(String::from("SNMPv2-SMI"))
            .or_default()
            .insert(String::from("enterprises"));
        let imports =
            ImportTable::build("FOO-MIB", &imports_map, &RenameTable::new(), &mut NoopSink);
        ResolverContext::new("FOO-MIB", symbols, imports)
    }

    fn table_decl() -> ObjectTypeDecl {
        ObjectTypeDecl {
            name: String::from("fooTable"),
            syntax: RawSyntax::Table {
                row: String::from("FooEntry"),
            },
            max_access: Some(MaxAccess::NotAccessible),
            augments: None,
            index: None,
            oid: OidRef::new("fooMIB", &[2]),
        }
    }

    fn entry_decl(index: Option<Vec<IndexField>>, augments: Option<&str>) -> ObjectTypeDecl {
        ObjectTypeDecl {
            name: String::from("fooEntry"),
            syntax: RawSyntax::Row(String::from("FooEntry")),
            max_access: Some(MaxAccess::NotAccessible),
            augments: augments.map(String::from),
            index,
            oid: OidRef::new("fooTable", &[1]),
        }
    }

    fn entry_fields() -> Vec<SequenceField> {
        vec![
            SequenceField::new("fooIndex", RawSyntax::scalar("Integer32")),
            SequenceField::new("fooValue", RawSyntax::scalar("OCTET STRING")),
        ]
    }

    #[test]
    fn test_table_then_indexed_entry() {
        let mut symbols = symbols();
        // The entry OID hangs off the table symbol
        symbols.insert(
            "FOO-MIB",
            "fooTable",
            SymbolRecord::node(
                SymbolKind::ObjectType,
                OidChain::new("FOO-MIB", "fooMIB", &[2]),
            ),
        );
        let fields = entry_fields();
        let mut ctx = make_context(&symbols);
        ctx.entry_types.insert(String::from("FooEntry"), &fields);

        let outcome = load_object_type(&mut ctx, &table_decl(), true, &mut NoopSink).unwrap();
        assert_eq!(outcome, ObjectOutcome::Loaded);
        assert_eq!(ctx.tables.len(), 1);
        assert_eq!(ctx.tables[0].oid.arcs(), &[1, 3, 6, 1, 4, 1, 32473, 2]);

        let decl = entry_decl(Some(vec![IndexField::new("fooIndex", false)]), None);
        let outcome = load_object_type(&mut ctx, &decl, true, &mut NoopSink).unwrap();
        assert_eq!(outcome, ObjectOutcome::Loaded);

        let linked = &ctx.tables[0];
        assert_eq!(linked.entry_name.as_deref(), Some("fooEntry"));
        assert_eq!(
            linked.index_objects,
            Some(vec![QualifiedName::new("FOO-MIB", "fooIndex")])
        );
        assert!(linked.augments_entry.is_none());
        assert_eq!(
            linked.entry_objects,
            vec![
                QualifiedName::new("FOO-MIB", "fooIndex"),
                QualifiedName::new("FOO-MIB", "fooValue"),
            ]
        );
    }

    #[test]
    fn test_entry_before_table_defers_then_links() {
        let mut symbols = symbols();
        symbols.insert(
            "FOO-MIB",
            "fooTable",
            SymbolRecord::node(
                SymbolKind::ObjectType,
                OidChain::new("FOO-MIB", "fooMIB", &[2]),
            ),
        );
        let fields = entry_fields();
        let mut ctx = make_context(&symbols);
        ctx.entry_types.insert(String::from("FooEntry"), &fields);

        let decl = entry_decl(Some(vec![IndexField::new("fooIndex", false)]), None);
        let outcome = load_object_type(&mut ctx, &decl, true, &mut NoopSink).unwrap();
        assert_eq!(outcome, ObjectOutcome::Deferred);
        assert!(ctx.tables.is_empty());

        load_object_type(&mut ctx, &table_decl(), true, &mut NoopSink).unwrap();
        let outcome = load_object_type(&mut ctx, &decl, false, &mut NoopSink).unwrap();
        assert_eq!(outcome, ObjectOutcome::Loaded);
        assert_eq!(ctx.tables[0].entry_name.as_deref(), Some("fooEntry"));
    }

    #[test]
    fn test_entry_without_table_is_fatal_on_retry() {
        let symbols = symbols();
        let fields = entry_fields();
        let mut ctx = make_context(&symbols);
        ctx.entry_types.insert(String::from("FooEntry"), &fields);

        let decl = entry_decl(Some(vec![IndexField::new("fooIndex", false)]), None);
        let err = load_object_type(&mut ctx, &decl, false, &mut NoopSink).unwrap_err();
        assert_eq!(
            err,
            ResolveError::MissingEntryTable {
                row: String::from("FooEntry"),
            }
        );
    }

    #[test]
    fn test_augments_linkage() {
        let mut symbols = symbols();
        symbols.insert(
            "FOO-MIB",
            "fooTable",
            SymbolRecord::node(
                SymbolKind::ObjectType,
                OidChain::new("FOO-MIB", "fooMIB", &[2]),
            ),
        );
        let fields = entry_fields();

        let mut imports_map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (module, name) in [("SNMPv2-SMI", "enterprises"), ("IF-MIB", "ifEntry")] {
            imports_map
                .entry(String::from(module))
                .or_default()
                .insert(String::from(name));
        }
        let imports =
            ImportTable::build("FOO-MIB", &imports_map, &RenameTable::new(), &mut NoopSink);
        let mut ctx = ResolverContext::new("FOO-MIB", &symbols, imports);
        ctx.entry_types.insert(String::from("FooEntry"), &fields);

        load_object_type(&mut ctx, &table_decl(), true, &mut NoopSink).unwrap();
        let decl = entry_decl(None, Some("ifEntry"));
        load_object_type(&mut ctx, &decl, true, &mut NoopSink).unwrap();

        let linked = &ctx.tables[0];
        // AUGMENTS targets resolve through the import table
        assert_eq!(
            linked.augments_entry,
            Some(QualifiedName::new("IF-MIB", "ifEntry"))
        );
        assert!(linked.index_objects.is_none());
    }

    #[test]
    fn test_entry_without_index_or_augments_is_skipped() {
        let mut symbols = symbols();
        symbols.insert(
            "FOO-MIB",
            "fooTable",
            SymbolRecord::node(
                SymbolKind::ObjectType,
                OidChain::new("FOO-MIB", "fooMIB", &[2]),
            ),
        );
        let fields = entry_fields();
        let mut ctx = make_context(&symbols);
        ctx.entry_types.insert(String::from("FooEntry"), &fields);

        load_object_type(&mut ctx, &table_decl(), true, &mut NoopSink).unwrap();
        let outcome =
            load_object_type(&mut ctx, &entry_decl(None, None), true, &mut NoopSink).unwrap();
        assert_eq!(outcome, ObjectOutcome::Skipped);

        // The table survives with linkage unset
        assert!(ctx.tables[0].entry_name.is_none());
        assert!(ctx.tables[0].entry_objects.is_empty());
    }

    #[test]
    fn test_scalar_loaded_with_not_accessible() {
        let mut symbols = symbols();
        symbols.insert(
            "FOO-MIB",
            "fooEntry",
            SymbolRecord::node(
                SymbolKind::ObjectType,
                OidChain::new("FOO-MIB", "fooMIB", &[2, 1]),
            ),
        );
        let mut ctx = make_context(&symbols);

        let decl = ObjectTypeDecl {
            name: String::from("fooIndex"),
            syntax: RawSyntax::constrained("Integer32", RawConstraint::Range(vec![1, 1024])),
            max_access: Some(MaxAccess::NotAccessible),
            augments: None,
            index: None,
            oid: OidRef::new("fooEntry", &[1]),
        };
        let outcome = load_object_type(&mut ctx, &decl, true, &mut NoopSink).unwrap();
        assert_eq!(outcome, ObjectOutcome::Loaded);

        let record = &ctx.objects[0];
        assert_eq!(record.oid.arcs(), &[1, 3, 6, 1, 4, 1, 32473, 2, 1, 1]);
        assert_eq!(record.syntax, SyntaxKind::Integer32);
        assert!(record.not_accessible);
    }

    #[test]
    fn test_unsupported_scalar_syntax_skipped_with_one_diagnostic() {
        struct CountingSink(usize);
        impl DiagnosticSink for CountingSink {
            fn level(&self) -> DiagLevel {
                DiagLevel::Warn
            }
            fn report(&mut self, _level: DiagLevel, diagnostic: Diagnostic<'_>) {
                if matches!(diagnostic, Diagnostic::ObjectSkipped { .. }) {
                    self.0 += 1;
                }
            }
        }

        let mut symbols = symbols();
        symbols.insert(
            "FOO-MIB",
            "Opaque64",
            SymbolRecord::type_declaration(
                OidChain::new("SNMPv2-SMI", "iso", &[]),
                crate::input::SymbolSyntax::plain("Opaque64", "FOO-MIB"),
            ),
        );
        let mut ctx = make_context(&symbols);
        let mut sink = CountingSink(0);

        let decl = ObjectTypeDecl {
            name: String::from("fooBlob"),
            syntax: RawSyntax::scalar("Opaque64"),
            max_access: Some(MaxAccess::ReadOnly),
            augments: None,
            index: None,
            oid: OidRef::new("fooMIB", &[9]),
        };
        let outcome = load_object_type(&mut ctx, &decl, true, &mut sink).unwrap();
        assert_eq!(outcome, ObjectOutcome::Skipped);
        assert!(ctx.objects.is_empty());
        assert_eq!(sink.0, 1);
    }
}
