//! Async client for the PayLane REST API.
//!
//! [`Client`] exposes one method per payment [`Operation`] and routes all of
//! them through [`Client::call`]: resolve the endpoint, send the JSON body
//! with Basic Auth, classify the status, parse the body and remember whether
//! the API reported success.
//!
//! ## Features
//!
//! - Uses `reqwest` for async HTTP requests
//! - Supports optional timeout and `User-Agent`
//! - Integrates with `tracing` if the `telemetry` feature is enabled
//!
//! ## Error Handling
//!
//! Every method returns [`ClientError`]. Non-200 statuses are classified into
//! [`StatusError`](paylane::StatusError); transport failures carry the
//! underlying `reqwest` error unchanged. Nothing is retried.

use std::time::Duration;

use paylane::constants::CONTENT_TYPE_JSON;
use paylane::{ApiResponse, Credentials, Operation};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use url::Url;

#[cfg(feature = "telemetry")]
use tracing::instrument;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::request::{
    decode_response, encode_params, endpoint_url, parse_base_url, record_result_on_span,
    record_url_on_span,
};

/// A client for the PayLane REST API.
///
/// Calls take `&mut self`: the client tracks the URL and outcome of the call
/// in flight, so one instance serves one call at a time. Use one client per
/// task when calls need to overlap.
///
/// # Example
///
/// ```no_run
/// use paylane_http::{Client, ClientConfig};
/// use serde_json::json;
///
/// # async fn run() -> Result<(), paylane_http::ClientError> {
/// let mut client = Client::new(ClientConfig::new("merchant", "secret"))?;
/// let response = client
///     .card_sale(&json!({
///         "sale": {"amount": 100.00, "currency": "EUR", "description": "Order #1"},
///         "customer": {"name": "Jan Kowalski", "email": "jan@example.com"},
///         "card": {
///             "card_number": "4111111111111111",
///             "expiration_month": "03",
///             "expiration_year": "2030",
///             "name_on_card": "Jan Kowalski",
///             "card_code": "123"
///         }
///     }))
///     .await?;
/// if client.is_success() {
///     println!("sale id: {:?}", response.get("id_sale"));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    /// API base URL, always ending in `/`
    base_url: Url,
    /// Basic Auth credentials
    credentials: Credentials,
    /// Optional per-request timeout
    timeout: Option<Duration>,
    /// Optional `User-Agent` header value
    user_agent: Option<String>,
    /// Reqwest HTTP client
    http: reqwest::Client,
    /// URL of the most recent call
    last_url: Option<Url>,
    /// `success` flag of the most recent call
    status: bool,
}

impl Client {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the base URL does not parse or the HTTP
    /// client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Http {
                context: "Failed to build HTTP client",
                source: e,
            })?;
        Self::with_http_client(config, http)
    }

    /// Creates a client that sends requests through a pre-configured
    /// `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the base URL does not parse.
    pub fn with_http_client(
        config: ClientConfig,
        http: reqwest::Client,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: parse_base_url(&config.base_url)?,
            credentials: config.credentials,
            timeout: config.timeout,
            user_agent: config.user_agent,
            http,
            last_url: None,
            status: false,
        })
    }

    /// Returns the base URL used by this client.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the API username.
    #[must_use]
    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// Returns the configured timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the URL of the most recent call, if any call was made.
    #[must_use]
    pub const fn last_url(&self) -> Option<&Url> {
        self.last_url.as_ref()
    }

    /// Returns `true` if the most recent call returned `"success": true`.
    ///
    /// Reset to `false` at the start of every call, so a call that fails
    /// with an error leaves it `false`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status
    }

    /// Calls `operation` with `params` as the JSON body.
    ///
    /// This is the single request path behind every named operation method.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-200 status, or a
    /// body that is not a JSON object.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "paylane.client.call",
            skip_all,
            fields(
                operation = %operation,
                method = %operation.method(),
                url = tracing::field::Empty,
                paylane.success = tracing::field::Empty,
                otel.status_code = tracing::field::Empty,
                error.message = tracing::field::Empty,
            )
        )
    )]
    pub async fn call<P>(
        &mut self,
        operation: Operation,
        params: &P,
    ) -> Result<ApiResponse, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.status = false;
        let url = endpoint_url(&self.base_url, operation)?;
        record_url_on_span(&url);
        self.last_url = Some(url.clone());
        let body = encode_params(operation, params)?;

        let result = self.send(operation, url, body).await;
        record_result_on_span(&result);

        if let Ok(response) = &result {
            self.status = response.is_success();
        }
        result
    }

    async fn send(
        &self,
        operation: Operation,
        url: Url,
        body: Vec<u8>,
    ) -> Result<ApiResponse, ClientError> {
        let context = operation.name();
        let mut req = self
            .http
            .request(operation.method(), url)
            .basic_auth(self.credentials.username(), Some(self.credentials.password()))
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(body);
        if let Some(user_agent) = &self.user_agent {
            req = req.header(USER_AGENT, user_agent.as_str());
        }
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        let http_response = req
            .send()
            .await
            .map_err(|e| ClientError::Http { context, source: e })?;

        let status = http_response.status();
        let bytes = http_response
            .bytes()
            .await
            .map_err(|e| ClientError::ResponseBodyRead { context, source: e })?;
        decode_response(operation, status, &bytes)
    }

    for_each_operation!(operation_methods!(nonblocking));
}
