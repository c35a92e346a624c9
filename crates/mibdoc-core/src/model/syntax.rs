//! Canonical syntax descriptors.
//!
//! The closed vocabulary every resolved object's syntax is normalized into:
//! three simple primitives, eight application primitives, `ENUM`, `BITS`,
//! and qualified references to recognized textual conventions. Anything
//! the normalizer cannot map into this vocabulary is dropped, never guessed.

use super::name::QualifiedName;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A canonical syntax tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxKind {
    /// INTEGER
    Integer,
    /// OCTET STRING
    OctetString,
    /// OBJECT IDENTIFIER
    ObjectIdentifier,
    /// Counter32
    Counter32,
    /// Gauge32
    Gauge32,
    /// Integer32
    Integer32,
    /// Unsigned32
    Unsigned32,
    /// Counter64
    Counter64,
    /// TimeTicks
    TimeTicks,
    /// IpAddress
    IpAddress,
    /// Opaque
    Opaque,
    /// Enumerated INTEGER; values carried in [`SyntaxOptions::Enum`].
    Enum,
    /// BITS; bit positions carried in [`SyntaxOptions::Bits`].
    Bits,
    /// A recognized textual convention, qualified by its owning module.
    Named(QualifiedName),
}

impl SyntaxKind {
    /// Map a simple (universal) syntax name, if recognized.
    #[must_use]
    pub fn simple(name: &str) -> Option<Self> {
        match name {
            "INTEGER" => Some(Self::Integer),
            "OCTET STRING" => Some(Self::OctetString),
            "OBJECT IDENTIFIER" => Some(Self::ObjectIdentifier),
            _ => None,
        }
    }

    /// Map an application syntax name, if recognized.
    #[must_use]
    pub fn application(name: &str) -> Option<Self> {
        match name {
            "Counter32" => Some(Self::Counter32),
            "Gauge32" => Some(Self::Gauge32),
            "Integer32" => Some(Self::Integer32),
            "Unsigned32" => Some(Self::Unsigned32),
            "Counter64" => Some(Self::Counter64),
            "TimeTicks" => Some(Self::TimeTicks),
            "IpAddress" => Some(Self::IpAddress),
            "Opaque" => Some(Self::Opaque),
            _ => None,
        }
    }

    /// Parse any canonical tag from its display form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(kind) = Self::simple(s).or_else(|| Self::application(s)) {
            return Some(kind);
        }
        match s {
            "ENUM" => Some(Self::Enum),
            "BITS" => Some(Self::Bits),
            _ => QualifiedName::parse(s).map(Self::Named),
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "INTEGER"),
            Self::OctetString => write!(f, "OCTET STRING"),
            Self::ObjectIdentifier => write!(f, "OBJECT IDENTIFIER"),
            Self::Counter32 => write!(f, "Counter32"),
            Self::Gauge32 => write!(f, "Gauge32"),
            Self::Integer32 => write!(f, "Integer32"),
            Self::Unsigned32 => write!(f, "Unsigned32"),
            Self::Counter64 => write!(f, "Counter64"),
            Self::TimeTicks => write!(f, "TimeTicks"),
            Self::IpAddress => write!(f, "IpAddress"),
            Self::Opaque => write!(f, "Opaque"),
            Self::Enum => write!(f, "ENUM"),
            Self::Bits => write!(f, "BITS"),
            Self::Named(q) => write!(f, "{q}"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SyntaxKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SyntaxKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(alloc::format!("unknown syntax: {s}")))
    }
}

/// Options attached to a canonical syntax tag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum SyntaxOptions {
    /// A size or value range: `{"Min": 0, "Max": 255}`.
    Range {
        /// Lower bound.
        #[cfg_attr(feature = "serde", serde(rename = "Min"))]
        min: i64,
        /// Upper bound.
        #[cfg_attr(feature = "serde", serde(rename = "Max"))]
        max: i64,
    },
    /// Enumeration values in declaration order, duplicates preserved.
    Enum(Vec<EnumOption>),
    /// Named bit positions in declaration order.
    Bits(Vec<BitOption>),
}

/// One enumeration value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumOption {
    /// Numeric value.
    #[cfg_attr(feature = "serde", serde(rename = "Value"))]
    pub value: i64,
    /// Label.
    #[cfg_attr(feature = "serde", serde(rename = "Name"))]
    pub name: String,
}

impl EnumOption {
    /// Create an enumeration option.
    #[must_use]
    pub fn new(value: i64, name: &str) -> Self {
        Self {
            value,
            name: String::from(name),
        }
    }
}

/// One named bit position.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitOption {
    /// Bit position.
    #[cfg_attr(feature = "serde", serde(rename = "Bit"))]
    pub bit: u32,
    /// Label.
    #[cfg_attr(feature = "serde", serde(rename = "Name"))]
    pub name: String,
}

impl BitOption {
    /// Create a bit option.
    #[must_use]
    pub fn new(bit: u32, name: &str) -> Self {
        Self {
            bit,
            name: String::from(name),
        }
    }
}

/// A normalized `(kind, options)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSyntax {
    /// Canonical tag.
    pub kind: SyntaxKind,
    /// Attached options, if any.
    pub options: Option<SyntaxOptions>,
}

impl ResolvedSyntax {
    /// A bare kind with no options.
    #[must_use]
    pub fn plain(kind: SyntaxKind) -> Self {
        Self {
            kind,
            options: None,
        }
    }

    /// A kind with options attached.
    #[must_use]
    pub fn with_options(kind: SyntaxKind, options: SyntaxOptions) -> Self {
        Self {
            kind,
            options: Some(options),
        }
    }
}
