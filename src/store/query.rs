//! Typed filters and updates
//!
//! Handlers describe what they want with these values; each gateway renders
//! them for its backend.

use mongodb::bson::{doc, Document};

use crate::model::{Book, BookDocument, BookId};

/// Which books an operation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookFilter {
    /// Every book in the collection
    All,
    /// The book with this id
    ById(BookId),
}

impl BookFilter {
    /// Render as a MongoDB query document
    pub fn to_document(&self) -> Document {
        match self {
            BookFilter::All => doc! {},
            BookFilter::ById(id) => doc! { "_id": id.object_id() },
        }
    }

    /// Whether a stored document is selected by this filter
    pub fn matches(&self, book: &BookDocument) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::ById(id) => book.id == Some(id.object_id()),
        }
    }
}

/// Replacement values for the mutable fields of a book
///
/// All three are written unconditionally, empty strings included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl BookFields {
    /// Render as a MongoDB `$set` update
    pub fn to_update(&self) -> Document {
        doc! {
            "$set": {
                "title": self.title.as_str(),
                "author": self.author.as_str(),
                "isbn": self.isbn.as_str(),
            }
        }
    }

    /// Overwrite the fields of a stored document, leaving its id alone
    pub fn apply(&self, book: &mut BookDocument) {
        book.title = self.title.clone();
        book.author = self.author.clone();
        book.isbn = self.isbn.clone();
    }
}

impl From<&Book> for BookFields {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
        }
    }
}
