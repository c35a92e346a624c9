//! Raw syntax shapes as emitted by the upstream parser.

use alloc::string::String;
use alloc::vec::Vec;

/// A raw SYNTAX clause, one variant per shape the parser emits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawSyntax {
    /// A named type, optionally constrained: `Integer32 (0..100)`,
    /// `DisplayString (SIZE (0..255))`, `INTEGER { up(1), down(2) }`.
    Scalar {
        /// Type name as written in the module.
        name: String,
        /// Subtype constraint, if any.
        constraint: Option<RawConstraint>,
    },

    /// A BITS clause: `BITS { flag1(0), flag2(1) }`.
    Bits(Vec<RawBit>),

    /// A reference to a row (sequence) type name used as a SYNTAX.
    Row(String),

    /// A conceptual-table marker: `SEQUENCE OF FooEntry`.
    Table {
        /// The row type name.
        row: String,
    },
}

impl RawSyntax {
    /// A bare named type with no constraint.
    #[must_use]
    pub fn scalar(name: &str) -> Self {
        Self::Scalar {
            name: String::from(name),
            constraint: None,
        }
    }

    /// A named type with a constraint.
    #[must_use]
    pub fn constrained(name: &str, constraint: RawConstraint) -> Self {
        Self::Scalar {
            name: String::from(name),
            constraint: Some(constraint),
        }
    }
}

/// A subtype constraint attached to a scalar syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawConstraint {
    /// Enumeration spec: `{ up(1), down(2) }`.
    Enum(Vec<RawEnumItem>),
    /// Numeric value range: `(0..100)` or a single value `(42)`.
    Range(Vec<i64>),
    /// Octet-string size range: `(SIZE (0..255))`.
    Size(Vec<i64>),
}

/// A single named value in an enumeration spec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEnumItem {
    /// Label.
    pub name: String,
    /// Numeric value.
    pub value: i64,
}

impl RawEnumItem {
    /// Create an enumeration item.
    #[must_use]
    pub fn new(name: &str, value: i64) -> Self {
        Self {
            name: String::from(name),
            value,
        }
    }
}

/// A single named bit in a BITS clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawBit {
    /// Label.
    pub name: String,
    /// Bit position.
    pub bit: u32,
}

impl RawBit {
    /// Create a bit definition.
    #[must_use]
    pub fn new(name: &str, bit: u32) -> Self {
        Self {
            name: String::from(name),
            bit,
        }
    }
}
