//! Identifier management using string interning for efficient string storage and comparison
//!
//! Node identifiers appear many times over (node list, edge endpoints, tooltip and
//! color tables, layout maps), so they are interned once and passed around as a
//! copyable [`Id`].

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use serde::{Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Efficient identifier type using string interning
///
/// # Examples
///
/// ```
/// use ragmap_core::identifier::Id;
///
/// let rag = Id::new("RAG");
/// let llm: Id = "LLM".into();
///
/// assert_eq!(rag, "RAG");
/// assert_ne!(rag, llm);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// Interning the same string twice yields equal identifiers.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{str_value}")
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner();
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_interning_is_stable() {
        let id1 = Id::new("VectorDB");
        let id2 = Id::new("VectorDB");
        let id3 = Id::new("Indexing");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_id_display() {
        let id = Id::new("Sampling (temperature/top-p)");
        assert_eq!(id.to_string(), "Sampling (temperature/top-p)");
    }

    #[test]
    fn test_id_from_str() {
        let id: Id = "LangGraph".into();
        assert_eq!(id, Id::new("LangGraph"));
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("Chunking");

        assert!(id == "Chunking");
        assert!(id != "Embeddings");

        let empty = Id::new("");
        assert!(empty == "");
    }

    #[test]
    fn test_partial_eq_str_ref() {
        let id = Id::new("Planner");
        let name = String::from("Planner");
        assert!(id == name.as_str());
    }

    #[test]
    fn test_id_is_copy() {
        let id1 = Id::new("copy_test");
        let id2 = id1;
        assert_eq!(id1, id2);
        assert_eq!(id1, "copy_test");
    }
}
