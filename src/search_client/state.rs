use log::{debug, warn};

use crate::clients::books_client::PAGE_SIZE;
use crate::models::book::BookRecord;
use crate::models::errors::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Lookup,
    LoadMore,
}

impl RequestKind {
    pub fn error_message(&self) -> &'static str {
        match self {
            RequestKind::Lookup => "Lookup Error.",
            RequestKind::LoadMore => "LoadMore Error.",
        }
    }
}

/// Identifies one in-flight request. Only the ticket of the most recently
/// started request may change the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub kind: RequestKind,
    pub generation: u64,
    pub keyword: String,
    pub start_index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    keyword: String,
    books: Vec<BookRecord>,
    offset: u32,
    error: Option<String>,
    generation: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            books: vec![BookRecord::placeholder()],
            offset: 0,
            error: None,
            generation: 0,
        }
    }
}

impl SearchState {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_lookup(&mut self, keyword: &str) -> RequestTicket {
        self.keyword = keyword.to_string();
        self.next_ticket(RequestKind::Lookup, 0)
    }

    pub fn begin_load_more(&mut self) -> RequestTicket {
        self.next_ticket(RequestKind::LoadMore, self.offset)
    }

    fn next_ticket(&mut self, kind: RequestKind, start_index: u32) -> RequestTicket {
        self.generation += 1;
        RequestTicket {
            kind,
            generation: self.generation,
            keyword: self.keyword.clone(),
            start_index,
        }
    }

    /// Applies a response. Returns `false` when a newer request has been
    /// started since `ticket` was issued; the response is then dropped.
    ///
    /// A failed load-more resets the list to the placeholder, discarding
    /// the pages fetched so far, exactly like a failed lookup.
    pub fn apply(&mut self, ticket: &RequestTicket, result: Result<Vec<BookRecord>, SearchError>) -> bool {
        if ticket.generation != self.generation {
            debug!("dropping stale {:?} response (generation {}, current {})",
                ticket.kind, ticket.generation, self.generation);
            return false;
        }

        match result {
            Ok(books) => {
                match ticket.kind {
                    RequestKind::Lookup => self.books = books,
                    RequestKind::LoadMore => self.books.extend(books),
                }
                self.offset = ticket.start_index + PAGE_SIZE;
                self.error = None;
            }
            Err(err) => {
                warn!("{:?} for '{}' failed: {:?}", ticket.kind, ticket.keyword, err);
                self.books = vec![BookRecord::placeholder()];
                self.error = Some(ticket.kind.error_message().to_string());
            }
        }
        true
    }
}
