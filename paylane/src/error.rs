//! Error types for classifying PayLane API responses.
//!
//! The API reports request-level failures through the HTTP status code. Only
//! `200 OK` carries a usable body; every other status maps onto a
//! [`StatusError`] via [`classify_status`]. Business-level failures (declined
//! card, invalid amount) arrive as `200` with `"success": false` and are not
//! errors at this layer.

use http::StatusCode;

/// Non-200 HTTP status returned by the PayLane API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StatusError {
    /// The credentials were rejected (HTTP 401).
    #[error("401 Unauthorized")]
    Unauthorized,
    /// The request was malformed (HTTP 400).
    #[error("400 Bad Request")]
    BadRequest,
    /// The API failed while processing the request (HTTP 500).
    #[error("500 Internal Server Error")]
    InternalServerError,
    /// The API does not implement the requested method (HTTP 501).
    #[error("501 Not Implemented")]
    NotImplemented,
    /// Any other status besides `200 OK`.
    #[error("Response status code: {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),
}

impl StatusError {
    /// The HTTP status this error was classified from.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            Self::UnexpectedStatus(status) => *status,
        }
    }
}

/// Maps an HTTP status onto the PayLane error taxonomy.
///
/// Only `200 OK` is accepted. Other 2xx codes are treated as unexpected, since
/// the API never answers with them.
///
/// # Errors
///
/// Returns the matching [`StatusError`] for every status except `200 OK`.
///
/// # Example
///
/// ```rust
/// use http::StatusCode;
/// use paylane::{StatusError, classify_status};
///
/// assert!(classify_status(StatusCode::OK).is_ok());
/// assert_eq!(
///     classify_status(StatusCode::UNAUTHORIZED),
///     Err(StatusError::Unauthorized)
/// );
/// ```
pub fn classify_status(status: StatusCode) -> Result<(), StatusError> {
    match status.as_u16() {
        200 => Ok(()),
        401 => Err(StatusError::Unauthorized),
        400 => Err(StatusError::BadRequest),
        500 => Err(StatusError::InternalServerError),
        501 => Err(StatusError::NotImplemented),
        _ => Err(StatusError::UnexpectedStatus(status)),
    }
}

/// An operation name that does not match any [`Operation`](crate::Operation).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_is_accepted() {
        assert_eq!(classify_status(StatusCode::OK), Ok(()));
    }

    #[test]
    fn test_known_codes_are_classified() {
        let cases = [
            (401, StatusError::Unauthorized, "Unauthorized"),
            (400, StatusError::BadRequest, "Bad Request"),
            (500, StatusError::InternalServerError, "Internal Server Error"),
            (501, StatusError::NotImplemented, "Not Implemented"),
        ];
        for (code, expected, description) in cases {
            let status = StatusCode::from_u16(code).unwrap();
            let err = classify_status(status).unwrap_err();
            assert_eq!(err, expected);
            assert_eq!(err.status(), status);
            assert!(err.to_string().contains(description), "{err}");
            assert!(err.to_string().starts_with(&code.to_string()), "{err}");
        }
    }

    #[test]
    fn test_other_codes_carry_literal_status() {
        let err = classify_status(StatusCode::SERVICE_UNAVAILABLE).unwrap_err();
        assert_eq!(err, StatusError::UnexpectedStatus(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(err.to_string(), "Response status code: 503");
    }

    #[test]
    fn test_non_200_success_codes_are_unexpected() {
        let err = classify_status(StatusCode::CREATED).unwrap_err();
        assert_eq!(err.to_string(), "Response status code: 201");
        assert_eq!(err.status(), StatusCode::CREATED);
    }
}
