//! Book record model and identifier codec

mod book;
mod id;

pub use book::{Book, BookDocument, InsertedBook};
pub use id::{BookId, InvalidBookId};
