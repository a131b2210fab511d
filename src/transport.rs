//! The HTTP capability the [`Client`](crate::Client) sends its requests through.
//!
//! `reqwest::Client` implements [`HttpTransport`] out of the box. Timeouts,
//! retries, TLS and connection pooling are the transport's business; the
//! account client never layers its own policy on top.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Request, Response, Url};
use std::error::Error;
use std::future::Future;

/// Error type transports report failures with.
pub type BoxError = Box<dyn Error + Send + Sync>;

pub trait HttpTransport: Send + Sync {
    /// Issue a `POST` carrying `body` with the given content type.
    fn post(
        &self,
        url: Url,
        content_type: &'static str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<Response, BoxError>> + Send;

    /// Issue a body-less `GET`.
    fn get(&self, url: Url) -> impl Future<Output = Result<Response, BoxError>> + Send;

    /// Send a request built by the caller, any method.
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response, BoxError>> + Send;
}

impl HttpTransport for reqwest::Client {
    async fn post(
        &self,
        url: Url,
        content_type: &'static str,
        body: Vec<u8>,
    ) -> Result<Response, BoxError> {
        let response = reqwest::Client::post(self, url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;
        Ok(response)
    }

    async fn get(&self, url: Url) -> Result<Response, BoxError> {
        let response = reqwest::Client::get(self, url).send().await?;
        Ok(response)
    }

    async fn execute(&self, request: Request) -> Result<Response, BoxError> {
        let response = reqwest::Client::execute(self, request).await?;
        Ok(response)
    }
}
