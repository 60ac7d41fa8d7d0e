//! Book record shapes
//!
//! [`Book`] is what travels over HTTP; [`BookDocument`] is what is stored.
//! Both omit empty string fields when serialized. On the wire a `null`
//! field reads as empty.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};

use super::id::BookId;

/// A book as seen by HTTP clients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Hex identifier, empty until the store assigns one
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub title: String,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub author: String,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub isbn: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Book {
    /// Convenience constructor without an id
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    /// Build the document to insert. Any client-supplied id is dropped.
    pub fn into_new_document(self) -> BookDocument {
        BookDocument {
            id: None,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
        }
    }
}

/// A book as stored in the `books` collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub isbn: String,
}

impl BookDocument {
    /// Identifier, if the store has assigned one
    pub fn book_id(&self) -> Option<BookId> {
        self.id.map(BookId::from)
    }
}

impl From<BookDocument> for Book {
    fn from(doc: BookDocument) -> Self {
        Self {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: doc.title,
            author: doc.author,
            isbn: doc.isbn,
        }
    }
}

/// Response body for a successful insert
///
/// Field name matches the acknowledgement shape existing clients read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertedBook {
    #[serde(rename = "InsertedID")]
    pub inserted_id: String,
}

impl From<BookId> for InsertedBook {
    fn from(id: BookId) -> Self {
        Self {
            inserted_id: id.to_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};
    use serde_json::json;

    #[test]
    fn test_empty_fields_omitted_from_json() {
        let book = Book::new("Dune", "", "");
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value, json!({"title": "Dune"}));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let book: Book = serde_json::from_value(json!({"author": "Herbert"})).unwrap();
        assert_eq!(book, Book::new("", "Herbert", ""));
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let book: Book = serde_json::from_value(json!({
            "id": null,
            "title": null,
            "author": "Herbert",
            "isbn": null
        }))
        .unwrap();
        assert_eq!(book, Book::new("", "Herbert", ""));
    }

    #[test]
    fn test_non_string_field_rejected() {
        assert!(serde_json::from_value::<Book>(json!({"title": 7})).is_err());
    }

    #[test]
    fn test_client_id_dropped_on_insert() {
        let book: Book = serde_json::from_value(json!({
            "id": "5f8d0d55b54764421b7156c1",
            "title": "T",
            "author": "A",
            "isbn": "I"
        }))
        .unwrap();

        let doc = book.into_new_document();
        assert!(doc.id.is_none());
        assert_eq!(doc.title, "T");
    }

    #[test]
    fn test_document_bson_shape() {
        let oid = ObjectId::parse_str("5f8d0d55b54764421b7156c1").unwrap();
        let document = BookDocument {
            id: Some(oid),
            title: "T".into(),
            author: String::new(),
            isbn: "I".into(),
        };

        let encoded = bson::to_document(&document).unwrap();
        assert_eq!(encoded, doc! {"_id": oid, "title": "T", "isbn": "I"});

        let decoded: BookDocument = bson::from_document(encoded).unwrap();
        assert_eq!(decoded, document);
    }

    #[test]
    fn test_new_document_has_no_id_key() {
        let encoded = bson::to_document(&Book::new("T", "A", "I").into_new_document()).unwrap();
        assert!(!encoded.contains_key("_id"));
    }

    #[test]
    fn test_document_to_wire_uses_hex_id() {
        let oid = ObjectId::parse_str("5f8d0d55b54764421b7156c1").unwrap();
        let book = Book::from(BookDocument {
            id: Some(oid),
            title: "T".into(),
            author: "A".into(),
            isbn: "I".into(),
        });

        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({"id": "5f8d0d55b54764421b7156c1", "title": "T", "author": "A", "isbn": "I"})
        );
    }

    #[test]
    fn test_inserted_book_shape() {
        let id = BookId::parse("5f8d0d55b54764421b7156c1").unwrap();
        let value = serde_json::to_value(InsertedBook::from(id)).unwrap();
        assert_eq!(value, json!({"InsertedID": "5f8d0d55b54764421b7156c1"}));
    }
}
