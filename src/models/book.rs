use serde_derive::{Deserialize, Serialize};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// A normalized search result as handed to the client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub title: String,
    pub authors: Vec<String>,
    pub thumbnail: String,
}

impl BookRecord {
    pub fn new<S: Into<String>>(title: S, authors: Vec<String>, thumbnail: S) -> Self {
        Self { title: title.into(), authors, thumbnail: thumbnail.into() }
    }

    /// Record shown when there is nothing to show.
    pub fn placeholder() -> Self {
        Self {
            title: "no result".to_string(),
            authors: vec!["no results".to_string()],
            thumbnail: "https://via.placeholder.com/50x75".to_string(),
        }
    }

    /// Favorites identity: same title and same authors in the same order.
    /// The thumbnail is ignored.
    pub fn is_same_book(&self, other: &BookRecord) -> bool {
        self.title == other.title
            && self.authors.len() == other.authors.len()
            && self.authors.iter().zip(other.authors.iter()).all(|(a, b)| a == b)
    }

    pub fn authors_line(&self) -> String {
        if self.authors.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            self.authors.join(", ")
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BooksResponse {
    pub books: Vec<BookRecord>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}
