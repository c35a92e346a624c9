//! OID (Object Identifier) representation.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

/// A fully-resolved absolute OID.
///
/// The dotted rendering carries a leading dot (`.1.3.6.1.2.1`), matching
/// the document schema.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid {
    arcs: Vec<u32>,
}

impl Oid {
    /// Create a new OID from a vector of arcs.
    #[must_use]
    pub fn new(arcs: Vec<u32>) -> Self {
        Self { arcs }
    }

    /// Create an OID from a slice of arcs.
    #[must_use]
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: arcs.to_vec(),
        }
    }

    /// Parse an OID from dotted notation, with or without the leading dot.
    #[must_use]
    pub fn from_dotted(s: &str) -> Option<Self> {
        let s = s.strip_prefix('.').unwrap_or(s);
        if s.is_empty() {
            return Some(Self::new(Vec::new()));
        }
        let arcs: Result<Vec<u32>, _> = s.split('.').map(|p| p.parse()).collect();
        arcs.ok().map(Self::new)
    }

    /// Convert to dotted notation with a leading dot.
    #[must_use]
    pub fn to_dotted(&self) -> String {
        // Estimate capacity: avg ~3 chars per arc + 1 for the dot
        let mut result = String::with_capacity(self.arcs.len() * 4);
        for arc in &self.arcs {
            result.push('.');
            // write! to String is infallible
            let _ = write!(result, "{arc}");
        }
        result
    }

    /// Get the arcs as a slice.
    #[must_use]
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Get the number of arcs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Create a new OID by appending the given arcs.
    #[must_use]
    pub fn extend(&self, arcs: &[u32]) -> Self {
        // Pre-allocate exact capacity to avoid reallocation during push
        let mut result = Vec::with_capacity(self.arcs.len() + arcs.len());
        result.extend_from_slice(&self.arcs);
        result.extend_from_slice(arcs);
        Self::new(result)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dotted())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Oid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_dotted())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Oid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_dotted(&s)
            .ok_or_else(|| serde::de::Error::custom(alloc::format!("invalid OID: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dotted() {
        let oid = Oid::from_dotted(".1.3.6.1").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1]);
    }

    #[test]
    fn test_from_dotted_no_leading_dot() {
        let oid = Oid::from_dotted("1.3.6.1").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1]);
    }

    #[test]
    fn test_from_dotted_invalid() {
        assert!(Oid::from_dotted(".1.3.x.1").is_none());
    }

    #[test]
    fn test_to_dotted_leading_dot() {
        let oid = Oid::new(vec![1, 3, 6, 1, 2, 1]);
        assert_eq!(oid.to_dotted(), ".1.3.6.1.2.1");
    }

    #[test]
    fn test_extend() {
        let oid = Oid::from_slice(&[1, 3, 6, 1]);
        let child = oid.extend(&[2, 1]);
        assert_eq!(child.arcs(), &[1, 3, 6, 1, 2, 1]);
        // The original is untouched
        assert_eq!(oid.arcs(), &[1, 3, 6, 1]);
    }

    #[test]
    fn test_extend_empty() {
        let oid = Oid::from_slice(&[1, 3]);
        assert_eq!(oid.extend(&[]), oid);
    }

    #[test]
    fn test_display() {
        let oid = Oid::from_slice(&[1, 3, 6, 1]);
        assert_eq!(alloc::format!("{oid}"), ".1.3.6.1");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_string_form() {
        let oid = Oid::from_slice(&[1, 3, 6, 1, 4, 1]);
        let json = serde_json::to_string(&oid).unwrap();
        assert_eq!(json, "\".1.3.6.1.4.1\"");

        let back: Oid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, oid);
    }
}
