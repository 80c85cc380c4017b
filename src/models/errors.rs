use std::fmt;
use std::fmt::{Display, Formatter};

use serde::ser::{Serializer, SerializeStruct};
use serde::Serialize;
use thiserror::Error;

/// Failure talking to an HTTP peer: transport, status or body decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new<S: AsRef<str>>(message: S) -> Self {
        Self { message: message.as_ref().to_string() }
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for HttpError {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Title not found")]
    NotFound,

    #[error("Server error")]
    Upstream(HttpError),
}

impl From<HttpError> for SearchError {
    fn from(err: HttpError) -> Self {
        SearchError::Upstream(err)
    }
}

/// JSON body of every non-success proxy response.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
    pub cause: Option<String>,
}

impl ApiError {
    pub fn new<S: AsRef<str>>(message: S) -> Self {
        Self { message: message.as_ref().to_string(), cause: None }
    }

    pub fn with_cause<S: AsRef<str>, C: ToString>(message: S, cause: C) -> Self {
        Self { message: message.as_ref().to_string(), cause: Some(cause.to_string()) }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{} ({})", self.message, cause),
            None => write!(f, "{}", self.message)
        }
    }
}

impl Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        let len = if self.cause.is_some() { 2 } else { 1 };
        let mut state = serializer.serialize_struct("ApiError", len)?;
        state.serialize_field("message", &self.message)?;
        if let Some(cause) = &self.cause {
            state.serialize_field("e", cause)?;
        }
        state.end()
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}
