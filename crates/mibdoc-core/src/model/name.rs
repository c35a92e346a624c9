//! Qualified symbol names.

use alloc::string::String;
use core::fmt;

/// A `Module::Symbol` reference, the qualified form used for all
/// cross-module references in the output document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    /// Owning module.
    pub module: String,
    /// Symbol name within the module.
    pub name: String,
}

impl QualifiedName {
    /// Create a qualified name.
    #[must_use]
    pub fn new(module: &str, name: &str) -> Self {
        Self {
            module: String::from(module),
            name: String::from(name),
        }
    }

    /// Parse from the `Module::Symbol` form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (module, name) = s.split_once("::")?;
        if module.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(module, name))
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QualifiedName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QualifiedName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(alloc::format!("invalid qualified name: {s}")))
    }
}
