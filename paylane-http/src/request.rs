//! Request and response plumbing shared by the async and blocking clients.
//!
//! Both clients run the same pipeline: resolve the operation path against the
//! base URL, encode the parameters as a JSON body, send the request with Basic
//! Auth, then classify the status and parse the body. Only the send step
//! differs between them; everything else lives here.

use std::fmt::Display;

use http::StatusCode;
use paylane::{ApiResponse, Operation, classify_status};
use serde::Serialize;
use url::Url;

#[cfg(feature = "telemetry")]
use tracing::Span;

use crate::error::ClientError;

/// Parses a base URL, normalizing it to exactly one trailing slash so that
/// operation paths resolve beneath it rather than replacing its last segment.
pub(crate) fn parse_base_url(value: &str) -> Result<Url, ClientError> {
    let mut normalized = value.trim_end_matches('/').to_owned();
    normalized.push('/');
    Url::parse(&normalized).map_err(|e| ClientError::UrlParse {
        context: "Failed to parse base url",
        source: e,
    })
}

/// Resolves the full endpoint URL of `operation`.
pub(crate) fn endpoint_url(base: &Url, operation: Operation) -> Result<Url, ClientError> {
    base.join(operation.path())
        .map_err(|e| ClientError::UrlParse {
            context: operation.name(),
            source: e,
        })
}

/// Encodes request parameters as the JSON request body.
pub(crate) fn encode_params<P>(operation: Operation, params: &P) -> Result<Vec<u8>, ClientError>
where
    P: Serialize + ?Sized,
{
    serde_json::to_vec(params).map_err(|e| ClientError::JsonSerialization {
        context: operation.name(),
        source: e,
    })
}

/// Classifies the response status and parses a `200 OK` body.
pub(crate) fn decode_response(
    operation: Operation,
    status: StatusCode,
    body: &[u8],
) -> Result<ApiResponse, ClientError> {
    let context = operation.name();
    if let Err(source) = classify_status(status) {
        return Err(ClientError::Status {
            context,
            source,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }
    serde_json::from_slice(body).map_err(|e| ClientError::JsonDeserialization { context, source: e })
}

/// Records the URL of the call on the current span.
#[cfg(feature = "telemetry")]
pub(crate) fn record_url_on_span(url: &Url) {
    Span::current().record("url", url.as_str());
}

/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
pub(crate) const fn record_url_on_span(_url: &Url) {}

/// Records the outcome of a call on the current span, including status and errors.
#[cfg(feature = "telemetry")]
pub(crate) fn record_result_on_span<E: Display>(result: &Result<ApiResponse, E>) {
    let span = Span::current();
    match result {
        Ok(response) => {
            span.record("otel.status_code", "OK");
            span.record("paylane.success", response.is_success());
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "Request to PayLane failed");
        }
    }
}

/// Records the outcome of a call on the current span, including status and errors.
/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
pub(crate) const fn record_result_on_span<E: Display>(_result: &Result<ApiResponse, E>) {}

#[cfg(test)]
mod tests {
    use super::*;
    use paylane::StatusError;
    use serde_json::json;

    #[test]
    fn test_base_url_gets_single_trailing_slash() {
        let url = parse_base_url("https://direct.paylane.com/rest").unwrap();
        assert_eq!(url.as_str(), "https://direct.paylane.com/rest/");
        let url = parse_base_url("https://direct.paylane.com/rest///").unwrap();
        assert_eq!(url.as_str(), "https://direct.paylane.com/rest/");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = parse_base_url("not a url").unwrap_err();
        assert!(matches!(err, ClientError::UrlParse { .. }));
    }

    #[test]
    fn test_endpoint_urls_resolve_under_base() {
        let base = parse_base_url(paylane::constants::API_URI).unwrap();
        assert_eq!(
            endpoint_url(&base, Operation::CardSale).unwrap().as_str(),
            "https://direct.paylane.com/rest/cards/sale"
        );
        assert_eq!(
            endpoint_url(&base, Operation::SaleBy3dSecureAuthorization)
                .unwrap()
                .as_str(),
            "https://direct.paylane.com/rest/3DSecure/authSale"
        );
        assert_eq!(
            endpoint_url(&base, Operation::Refund).unwrap().as_str(),
            "https://direct.paylane.com/rest/refund"
        );
    }

    #[test]
    fn test_encode_params_as_json() {
        let body = encode_params(
            Operation::CardSale,
            &json!({"amount": 100, "currency": "USD"}),
        )
        .unwrap();
        let decoded: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(decoded, json!({"amount": 100, "currency": "USD"}));
    }

    #[test]
    fn test_decode_ok_body() {
        let response =
            decode_response(Operation::CardSale, StatusCode::OK, br#"{"success":true,"id":42}"#)
                .unwrap();
        assert_eq!(response, json!({"success": true, "id": 42}));
    }

    #[test]
    fn test_decode_classifies_status_before_parsing() {
        let err = decode_response(Operation::Refund, StatusCode::BAD_REQUEST, b"oops").unwrap_err();
        match err {
            ClientError::Status {
                context,
                source,
                body,
            } => {
                assert_eq!(context, "refund");
                assert_eq!(source, StatusError::BadRequest);
                assert_eq!(body, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_rejects_non_object_body() {
        let err = decode_response(Operation::CheckCard, StatusCode::OK, b"[]").unwrap_err();
        assert!(matches!(err, ClientError::JsonDeserialization { context: "check_card", .. }));
    }
}
