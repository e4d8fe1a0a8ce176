//! Typed record identifiers.
//!
//! Every admin record is keyed by a numeric primary key assigned by the BFF.
//! [`Id<T>`] tags that number with the record kind so a skill id can never be
//! used to address a project.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A type-safe wrapper around a BFF primary key.
pub struct Id<T> {
    value: i64,
    _phantom: PhantomData<fn() -> T>,
}

// Serialized as the bare number, matching the wire format.
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Self::new)
    }
}

impl<T> Id<T> {
    /// Wraps a raw primary key.
    ///
    /// # Example
    /// ```
    /// use folio::data::Skill;
    /// use folio::id::Id;
    ///
    /// let id = Id::<Skill>::new(7);
    /// assert_eq!(id.get(), 7);
    /// ```
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Returns the raw primary key.
    pub const fn get(&self) -> i64 {
        self.value
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Project, Skill};

    #[test]
    fn test_id_display() {
        let id = Id::<Skill>::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{id:?}"), "Id(42)");
    }

    #[test]
    fn test_id_equality_is_by_value() {
        let a: Id<Project> = 3.into();
        let b = Id::<Project>::new(3);
        assert_eq!(a, b);
        assert_ne!(a, Id::new(4));
    }

    #[test]
    fn test_serde() {
        let original = Id::<Skill>::new(9);

        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!(serialized, "9");

        let deserialized: Id<Skill> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(serde_json::from_str::<Id<Skill>>("\"abc\"").is_err());
    }
}
