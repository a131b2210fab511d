//! Rust client for the organisation accounts REST API.
//! Creates, fetches, lists and deletes bank account records, wrapping every
//! body in the `{"data": ...}` envelope the service speaks.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use client::Client;
pub use error::{AccountApiError, ApiError, Operation};
pub use models::{ACCOUNT_TYPE, Account, Attributes, Envelope, Params};
pub use transport::{BoxError, HttpTransport};
