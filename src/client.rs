use crate::config::{self, DEFAULT_TIMEOUT};
use crate::error::{AccountApiError, ApiError, Operation};
use crate::models::{Account, AccountList, Envelope, ErrorBody, Params};
use crate::transport::HttpTransport;
use log::{debug, info};
use reqwest::{Client as HttpClient, Method, Request, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

const ACCOUNTS_PATH: [&str; 3] = ["v1", "organisation", "accounts"];
const JSON_CONTENT_TYPE: &str = "application/json";

/// Client for the `/v1/organisation/accounts` resource.
///
/// Stateless apart from its host and transport, so it can be shared between
/// tasks whenever the transport can.
#[derive(Debug, Clone)]
pub struct Client<T = HttpClient> {
    http: T,
    host: String,
}

impl Client<HttpClient> {
    /// Create a client backed by a default `reqwest` transport.
    pub fn new(host: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = HttpClient::builder().timeout(DEFAULT_TIMEOUT).build()?;
        let client = Self::with_transport(http, host);
        info!("Initialized account API client for {}", client.host);
        Ok(client)
    }

    /// Create a client for the host named by `ACCOUNT_API_HOST`.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(config::host_from_env())
    }
}

impl<T: HttpTransport> Client<T> {
    /// Create a client that sends its requests through `http`.
    pub fn with_transport(http: T, host: impl Into<String>) -> Self {
        Self {
            http,
            host: host.into(),
        }
    }

    /// Override the host (useful for tests or proxies).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        info!("Updated account API host to {}", self.host);
        self
    }

    /// Host every endpoint is resolved against.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Create a new bank account.
    pub async fn create(&self, account: &Account) -> Result<Account, AccountApiError> {
        let op = Operation::Create;
        let url = self.endpoint(op, None)?;
        let body = serde_json::to_vec(&Envelope { data: account })
            .map_err(|source| AccountApiError::Encode { operation: op, source })?;
        debug!("POST request to {} for account {}", url, account.id);
        let response = self
            .http
            .post(url, JSON_CONTENT_TYPE, body)
            .await
            .map_err(|source| AccountApiError::Transport { operation: op, source })?;
        let envelope: Envelope<Account> = self.decode(op, response).await?;
        Ok(envelope.data)
    }

    /// Fetch the bank account with the given id.
    pub async fn fetch(&self, id: &str) -> Result<Account, AccountApiError> {
        let op = Operation::Fetch;
        let url = self.endpoint(op, Some(id))?;
        let response = self.get(op, url).await?;
        let envelope: Envelope<Account> = self.decode(op, response).await?;
        Ok(envelope.data)
    }

    /// List bank accounts, one page at a time, in server order.
    pub async fn list(&self, params: &Params) -> Result<Vec<Account>, AccountApiError> {
        let op = Operation::List;
        let mut url = self.endpoint(op, None)?;
        let pairs = params.query_pairs();
        if !pairs.is_empty() {
            let query = pairs
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }
        let response = self.get(op, url).await?;
        let list: AccountList = self.decode(op, response).await?;
        debug!("Listed {} accounts", list.data.len());
        Ok(list.data)
    }

    /// Delete the given version of a bank account.
    pub async fn delete(&self, id: &str, version: i64) -> Result<(), AccountApiError> {
        let op = Operation::Delete;
        let mut url = self.endpoint(op, Some(id))?;
        url.set_query(Some(&format!("version={version}")));
        debug!("DELETE request to {}", url);
        let request = Request::new(Method::DELETE, url);
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| AccountApiError::Transport { operation: op, source })?;
        let status = response.status();
        debug!("Received status {}", status);
        if status.is_success() {
            return Ok(());
        }
        let body = read_body(op, response).await?;
        Err(AccountApiError::Api {
            operation: op,
            source: classify_status(status, &body),
        })
    }

    async fn get(&self, op: Operation, url: Url) -> Result<Response, AccountApiError> {
        debug!("GET request to {}", url);
        self.http
            .get(url)
            .await
            .map_err(|source| AccountApiError::Transport { operation: op, source })
    }

    async fn decode<D: DeserializeOwned>(
        &self,
        op: Operation,
        response: Response,
    ) -> Result<D, AccountApiError> {
        let status = response.status();
        debug!("Received status {}", status);
        let body = read_body(op, response).await?;
        if !status.is_success() {
            return Err(AccountApiError::Api {
                operation: op,
                source: classify_status(status, &body),
            });
        }
        serde_json::from_slice(&body)
            .map_err(|source| AccountApiError::Decode { operation: op, source })
    }

    fn endpoint(&self, op: Operation, id: Option<&str>) -> Result<Url, AccountApiError> {
        let build_error = |reason: String| AccountApiError::RequestBuild {
            operation: op,
            reason,
        };
        let mut url = Url::parse(&self.host)
            .map_err(|e| build_error(format!("invalid host {:?}: {e}", self.host)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| build_error(format!("host {:?} cannot be a base", self.host)))?;
            segments.pop_if_empty().extend(ACCOUNTS_PATH);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }
}

async fn read_body(op: Operation, response: Response) -> Result<Vec<u8>, AccountApiError> {
    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|source| AccountApiError::Read { operation: op, source })
}

fn classify_status(status: StatusCode, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .map(|e| e.error_message)
        .unwrap_or_else(|_| String::from_utf8_lossy(body).trim().to_string());
    match status {
        StatusCode::BAD_REQUEST => ApiError::BadRequest(message),
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::CONFLICT => ApiError::Conflict(message),
        _ => ApiError::UnexpectedStatus { status, message },
    }
}
