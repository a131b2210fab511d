use crate::transport::BoxError;
use std::fmt;
use thiserror::Error;

/// The client operation an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Fetch,
    List,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self {
            Operation::Create => "create",
            Operation::Fetch => "fetch",
            Operation::List => "list",
            Operation::Delete => "delete",
        };
        f.write_str(v)
    }
}

#[derive(Debug, Error)]
pub enum AccountApiError {
    #[error("could not build {operation} request: {reason}")]
    RequestBuild {
        operation: Operation,
        reason: String,
    },

    #[error("could not encode {operation} request body: {source}")]
    Encode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not make {operation} request: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: BoxError,
    },

    #[error("could not read {operation} response: {source}")]
    Read {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode {operation} response: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation} rejected by server: {source}")]
    Api {
        operation: Operation,
        #[source]
        source: ApiError,
    },
}

impl AccountApiError {
    pub fn operation(&self) -> Operation {
        match self {
            AccountApiError::RequestBuild { operation, .. }
            | AccountApiError::Encode { operation, .. }
            | AccountApiError::Transport { operation, .. }
            | AccountApiError::Read { operation, .. }
            | AccountApiError::Decode { operation, .. }
            | AccountApiError::Api { operation, .. } => *operation,
        }
    }

    /// The classified server rejection, if this error came from a non-2xx status.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            AccountApiError::Api { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request (400): {0}")]
    BadRequest(String),

    #[error("account not found (404)")]
    NotFound,

    #[error("version conflict (409): {0}")]
    Conflict(String),

    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        message: String,
    },
}

impl ApiError {
    pub fn status(&self) -> reqwest::StatusCode {
        match self {
            ApiError::BadRequest(_) => reqwest::StatusCode::BAD_REQUEST,
            ApiError::NotFound => reqwest::StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => reqwest::StatusCode::CONFLICT,
            ApiError::UnexpectedStatus { status, .. } => *status,
        }
    }
}
