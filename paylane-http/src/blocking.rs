//! Blocking client for the PayLane REST API.
//!
//! Same operations and error handling as the async [`Client`](crate::Client),
//! sent through `reqwest::blocking`. Do not create or drop this client from
//! inside an async runtime; `reqwest::blocking` panics there.

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

/// A blocking client for the PayLane REST API.
///
/// # Example
///
/// ```no_run
/// use paylane_http::ClientConfig;
/// use paylane_http::blocking::Client;
/// use serde_json::json;
///
/// # fn run() -> Result<(), paylane_http::ClientError> {
/// let mut client = Client::new(ClientConfig::new("merchant", "secret"))?;
/// let info = client.get_sale_info(&json!({"id_sale": 1234567}))?;
/// assert_eq!(client.is_success(), info.is_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    base_url: Url,
    credentials: Credentials,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http: reqwest::blocking::Client,
    last_url: Option<Url>,
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
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| ClientError::Http {
                context: "Failed to build HTTP client",
                source: e,
            })?;
        Self::with_http_client(config, http)
    }

    /// Creates a client that sends requests through a pre-configured
    /// blocking `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the base URL does not parse.
    pub fn with_http_client(
        config: ClientConfig,
        http: reqwest::blocking::Client,
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

    /// Returns the URL of the most recent call, if any call was made.
    #[must_use]
    pub const fn last_url(&self) -> Option<&Url> {
        self.last_url.as_ref()
    }

    /// Returns `true` if the most recent call returned `"success": true`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status
    }

    /// Calls `operation` with `params` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-200 status, or a
    /// body that is not a JSON object.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "paylane.blocking_client.call",
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
    pub fn call<P>(&mut self, operation: Operation, params: &P) -> Result<ApiResponse, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.status = false;
        let url = endpoint_url(&self.base_url, operation)?;
        record_url_on_span(&url);
        self.last_url = Some(url.clone());
        let body = encode_params(operation, params)?;

        let result = self.send(operation, url, body);
        record_result_on_span(&result);

        if let Ok(response) = &result {
            self.status = response.is_success();
        }
        result
    }

    fn send(
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
            .map_err(|e| ClientError::Http { context, source: e })?;

        let status = http_response.status();
        let bytes = http_response
            .bytes()
            .map_err(|e| ClientError::ResponseBodyRead { context, source: e })?;
        decode_response(operation, status, &bytes)
    }

    for_each_operation!(operation_methods!(blocking));
}
