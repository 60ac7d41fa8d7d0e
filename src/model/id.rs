//! Book identifiers
//!
//! Books are addressed externally by the 24-character hex form of the
//! store's `ObjectId`. Parsing only checks the format; whether a record with
//! that id exists is left to the store.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use thiserror::Error;

/// Returned when an external identifier is not a valid hex `ObjectId`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid book id: {0:?}")]
pub struct InvalidBookId(pub String);

/// Store-assigned identifier of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(ObjectId);

impl BookId {
    /// Parse the external hex form
    pub fn parse(external: &str) -> Result<Self, InvalidBookId> {
        ObjectId::parse_str(external)
            .map(Self)
            .map_err(|_| InvalidBookId(external.to_string()))
    }

    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// The underlying store identifier
    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    /// Lower-case hex encoding used in URLs and JSON
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<ObjectId> for BookId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<BookId> for ObjectId {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl FromStr for BookId {
    type Err = InvalidBookId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_hex() {
        let id = BookId::parse("5f8d0d55b54764421b7156c1").unwrap();
        assert_eq!(id.to_hex(), "5f8d0d55b54764421b7156c1");
        assert_eq!(id.to_string(), "5f8d0d55b54764421b7156c1");
    }

    #[test]
    fn test_parse_uppercase_normalizes() {
        let id = BookId::parse("5F8D0D55B54764421B7156C1").unwrap();
        assert_eq!(id.to_hex(), "5f8d0d55b54764421b7156c1");
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in [
            "",
            "abc",
            "not-an-object-id",
            "5f8d0d55b54764421b7156c",
            "5f8d0d55b54764421b7156c1a",
            "zf8d0d55b54764421b7156c1",
            " 5f8d0d55b54764421b7156c1",
        ] {
            let err = BookId::parse(bad).unwrap_err();
            assert_eq!(err, InvalidBookId(bad.to_string()));
        }
    }

    #[test]
    fn test_from_str_matches_parse() {
        let id: BookId = "5f8d0d55b54764421b7156c1".parse().unwrap();
        assert_eq!(id, BookId::parse("5f8d0d55b54764421b7156c1").unwrap());
        assert!("xyz".parse::<BookId>().is_err());
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = BookId::generate();
        let b = BookId::generate();
        assert_ne!(a, b);
        assert_eq!(BookId::parse(&a.to_hex()).unwrap(), a);
    }
}
