//! Syntax normalization.
//!
//! Maps raw SYNTAX shapes into the canonical `(kind, options)` vocabulary.
//! Shapes outside the vocabulary resolve to `None` and the caller drops the
//! owning declaration with a diagnostic; nothing is guessed at.

use crate::input::{RawBit, RawConstraint, RawEnumItem, RawSyntax, SymbolKind};
use crate::model::{
    BitOption, EnumOption, ResolvedSyntax, SyntaxKind, SyntaxOptions,
};
use crate::resolver::context::ResolverContext;
use crate::resolver::error::ResolveError;

/// Textual conventions recognized as named syntaxes without further
/// resolution. Fixed for output compatibility with downstream consumers.
pub const RECOGNIZED_CONVENTIONS: &[(&str, &str)] = &[
    ("SNMP-FRAMEWORK-MIB", "SnmpAdminString"),
    ("SNMPv2-TC", "DisplayString"),
    ("SNMPv2-TC", "MacAddress"),
    ("SNMPv2-TC", "PhysAddress"),
    ("Q-BRIDGE-MIB", "PortList"),
    ("BRIDGE-MIB", "BridgeId"),
];

fn is_recognized(module: &str, name: &str) -> bool {
    RECOGNIZED_CONVENTIONS
        .iter()
        .any(|&(m, n)| m == module && n == name)
}

/// Normalize an object's raw syntax.
///
/// `Ok(None)` means the shape is unsupported: the caller skips the owning
/// declaration. Errors are fatal (unknown symbols, bad constraint arity).
pub fn normalize_object_syntax(
    ctx: &mut ResolverContext<'_>,
    raw: &RawSyntax,
) -> Result<Option<ResolvedSyntax>, ResolveError> {
    match raw {
        RawSyntax::Scalar { name, constraint } => {
            normalize_scalar(ctx, name, constraint.as_ref())
        }
        // A row type name used as a scalar's syntax
        RawSyntax::Row(row) => lookup_named(ctx, row, None),
        RawSyntax::Bits(bits) => Ok(Some(ResolvedSyntax::with_options(
            SyntaxKind::Bits,
            bit_options(bits),
        ))),
        // Conceptual tables are classified before normalization ever runs
        RawSyntax::Table { .. } => Ok(None),
    }
}

fn normalize_scalar(
    ctx: &mut ResolverContext<'_>,
    name: &str,
    constraint: Option<&RawConstraint>,
) -> Result<Option<ResolvedSyntax>, ResolveError> {
    let options = match constraint {
        None => None,
        Some(RawConstraint::Enum(items)) => {
            return Ok(Some(ResolvedSyntax::with_options(
                SyntaxKind::Enum,
                enum_options(items),
            )));
        }
        Some(RawConstraint::Range(values) | RawConstraint::Size(values)) => {
            Some(range_options(values)?)
        }
    };

    if let Some(kind) = SyntaxKind::simple(name).or_else(|| SyntaxKind::application(name)) {
        return Ok(Some(ResolvedSyntax { kind, options }));
    }

    lookup_named(ctx, name, options)
}

/// Resolve a named type reference: local registry first, then the
/// recognized-convention allow-list, then the cross-module symbol table.
pub fn lookup_named(
    ctx: &mut ResolverContext<'_>,
    name: &str,
    options: Option<SyntaxOptions>,
) -> Result<Option<ResolvedSyntax>, ResolveError> {
    // A convention registered in this module carries its own options
    if let Some(resolved) = ctx.object_types.get(name) {
        return Ok(Some(resolved.clone()));
    }

    let owner = ctx.qualify(name);
    if is_recognized(&owner.module, &owner.name) {
        return Ok(Some(ResolvedSyntax {
            kind: SyntaxKind::Named(owner),
            options,
        }));
    }

    let record = ctx.lookup_symbol(&owner.module, &owner.name)?;
    if record.kind != SymbolKind::TypeDeclaration {
        return Ok(None);
    }
    let Some(syntax) = &record.syntax else {
        return Ok(None);
    };

    // Legacy kind tags from the upstream symbol-table builder
    if syntax.name == "Integer32" {
        if let Some(spec) = &syntax.enum_spec {
            return Ok(Some(ResolvedSyntax::with_options(
                SyntaxKind::Enum,
                enum_options(spec),
            )));
        }
    }
    let kind = match syntax.name.as_str() {
        "OctetString" => SyntaxKind::OctetString,
        "ObjectIdentifier" => SyntaxKind::ObjectIdentifier,
        other => {
            if let Some(kind) =
                SyntaxKind::simple(other).or_else(|| SyntaxKind::application(other))
            {
                kind
            } else if is_recognized(&syntax.module, &syntax.name) {
                SyntaxKind::Named(crate::model::QualifiedName::new(
                    &syntax.module,
                    &syntax.name,
                ))
            } else {
                return Ok(None);
            }
        }
    };

    Ok(Some(ResolvedSyntax { kind, options }))
}

/// Build range options from a 1-element (min=max) or 2-element (min, max)
/// constraint list. Any other arity is fatal.
fn range_options(values: &[i64]) -> Result<SyntaxOptions, ResolveError> {
    match *values {
        [value] => Ok(SyntaxOptions::Range {
            min: value,
            max: value,
        }),
        [min, max] => Ok(SyntaxOptions::Range { min, max }),
        _ => Err(ResolveError::BadConstraint { len: values.len() }),
    }
}

fn enum_options(items: &[RawEnumItem]) -> SyntaxOptions {
    SyntaxOptions::Enum(
        items
            .iter()
            .map(|item| EnumOption::new(item.value, &item.name))
            .collect(),
    )
}

fn bit_options(bits: &[RawBit]) -> SyntaxOptions {
    SyntaxOptions::Bits(
        bits.iter()
            .map(|bit| BitOption::new(bit.bit, &bit.name))
            .collect(),
    )
}
