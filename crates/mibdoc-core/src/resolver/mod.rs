//! Module resolution pipeline.
//!
//! Turns one parsed module plus the shared symbol table into a resolved
//! document, in two passes over the declaration list:
//!
//! ```text
//! imports -> [pass 1: identity + types] -> [pass 2: objects] -> document
//! ```
//!
//! Pass 1 registers every type declaration before any object resolves, so
//! objects may reference conventions declared later in the module. Pass 2
//! walks OBJECT-TYPE declarations in source order, deferring table entries
//! whose table has not been seen yet and retrying them at the end.
//!
//! Failures are all-or-nothing per module: the first fatal error aborts
//! resolution with declaration context attached. Unsupported syntax shapes
//! and unlinkable rows are not fatal; they are skipped with a diagnostic.

pub mod context;
pub mod diag;
pub mod error;
pub mod imports;
pub mod syntax;
mod tables;

pub use context::ResolverContext;
pub use diag::{DiagLevel, Diagnostic, DiagnosticSink, NoopSink};
pub use error::ResolveError;
pub use imports::{ImportTable, RenameTable};

use crate::diag_event;
use crate::input::{
    Declaration, ModuleIdentityDecl, ObjectTypeDecl, ParsedModule, SymbolTable, TypeDefDecl,
    TypeRhs,
};
use crate::model::ModuleDocument;
use alloc::vec::Vec;
use tables::{load_object_type, ObjectOutcome};

/// Resolve one parsed module into its output document.
///
/// `symbols` must cover the module's full import closure; `renames`
/// redirects imports of legacy aliases to their current owners.
pub fn resolve_module<'a>(
    module: &'a ParsedModule,
    symbols: &'a SymbolTable,
    renames: &RenameTable,
    sink: &mut dyn DiagnosticSink,
) -> Result<ModuleDocument, ResolveError> {
    let imports = ImportTable::build(&module.name, &module.imports, renames, sink);
    let mut ctx = ResolverContext::new(&module.name, symbols, imports);

    // Pass 1: module identity and type declarations
    for decl in &module.declarations {
        let result = match decl {
            Declaration::ModuleIdentity(d) => load_module_identity(&mut ctx, d, sink),
            Declaration::TypeDef(d) => load_type_declaration(&mut ctx, d, sink),
            Declaration::ObjectType(_) => Ok(()),
        };
        if let Err(error) = result {
            return Err(fail(&module.name, decl, error, sink));
        }
    }

    // Pass 2: objects, with entries deferred past their table
    let mut deferred: Vec<(&Declaration, &ObjectTypeDecl)> = Vec::new();
    for decl in &module.declarations {
        let Declaration::ObjectType(d) = decl else {
            continue;
        };
        match load_object_type(&mut ctx, d, true, sink) {
            Ok(ObjectOutcome::Deferred) => deferred.push((decl, d)),
            Ok(_) => {}
            Err(error) => return Err(fail(&module.name, decl, error, sink)),
        }
    }
    for (decl, d) in deferred {
        if let Err(error) = load_object_type(&mut ctx, d, false, sink) {
            return Err(fail(&module.name, decl, error, sink));
        }
    }

    Ok(ctx.into_document())
}

fn load_module_identity(
    ctx: &mut ResolverContext<'_>,
    decl: &ModuleIdentityDecl,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ResolveError> {
    let oid = ctx.resolve_oid_ref(&decl.oid)?;
    diag_event!(
        sink,
        DiagLevel::Info,
        Diagnostic::ModuleIdentity {
            module: ctx.module,
            name: &decl.name,
            oid: &oid,
        }
    );
    ctx.module_oid = Some(oid);
    Ok(())
}

fn load_type_declaration<'a>(
    ctx: &mut ResolverContext<'a>,
    decl: &'a TypeDefDecl,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ResolveError> {
    match &decl.rhs {
        TypeRhs::Sequence(fields) => {
            ctx.entry_types.insert(decl.name.clone(), fields.as_slice());
            diag_event!(
                sink,
                DiagLevel::Debug,
                Diagnostic::EntryTypeRegistered {
                    module: ctx.module,
                    name: &decl.name,
                    fields: fields.len(),
                }
            );
        }
        TypeRhs::TextualConvention(raw) | TypeRhs::Plain(raw) => {
            match syntax::normalize_object_syntax(ctx, raw)? {
                Some(resolved) => {
                    ctx.object_types.insert(decl.name.clone(), resolved);
                    diag_event!(
                        sink,
                        DiagLevel::Debug,
                        Diagnostic::TypeRegistered {
                            module: ctx.module,
                            name: &decl.name,
                        }
                    );
                }
                None => {
                    diag_event!(
                        sink,
                        DiagLevel::Warn,
                        Diagnostic::TypeSkipped {
                            module: ctx.module,
                            name: &decl.name,
                            syntax: raw,
                        }
                    );
                }
            }
        }
    }
    Ok(())
}

/// Report the failure and wrap it with declaration context.
fn fail(
    module: &str,
    decl: &Declaration,
    error: ResolveError,
    sink: &mut dyn DiagnosticSink,
) -> ResolveError {
    diag_event!(
        sink,
        DiagLevel::Error,
        Diagnostic::DeclarationFailed {
            module,
            kind: decl.kind(),
            name: decl.name(),
            error: &error,
        }
    );
    error.in_declaration(module, decl.kind(), decl.name())
}
