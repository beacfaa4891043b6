//! Parsed PayLane API responses.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::SUCCESS_FIELD;

/// A JSON object returned by the PayLane API, kept in full.
///
/// The API defines the schema; this type only knows about the `success`
/// flag every response carries. Everything else is reachable through
/// [`get`](Self::get) or by dereferencing to the underlying map.
///
/// # Example
///
/// ```rust
/// use paylane::ApiResponse;
/// use serde_json::json;
///
/// let response: ApiResponse = serde_json::from_value(json!({
///     "success": true,
///     "id_sale": 1234567
/// }))
/// .unwrap();
/// assert!(response.is_success());
/// assert_eq!(response.get("id_sale"), Some(&json!(1234567)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse(Map<String, Value>);

impl ApiResponse {
    /// Wraps an already-parsed JSON object.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the `success` flag of the response.
    ///
    /// A missing or non-boolean `success` field reads as `false`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.0
            .get(SUCCESS_FIELD)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Returns the value of a top-level field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the response, returning the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Deref for ApiResponse {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Map<String, Value>> for ApiResponse {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl From<ApiResponse> for Value {
    fn from(response: ApiResponse) -> Self {
        Self::Object(response.0)
    }
}

impl PartialEq<Value> for ApiResponse {
    fn eq(&self, other: &Value) -> bool {
        other.as_object() == Some(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> ApiResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_success_flag() {
        assert!(parse(json!({"success": true, "id": 42})).is_success());
        assert!(!parse(json!({"success": false})).is_success());
    }

    #[test]
    fn test_missing_or_malformed_success_reads_false() {
        assert!(!parse(json!({"id": 42})).is_success());
        assert!(!parse(json!({"success": "true"})).is_success());
        assert!(!parse(json!({"success": null})).is_success());
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(serde_json::from_value::<ApiResponse>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<ApiResponse>(json!(true)).is_err());
    }

    #[test]
    fn test_compares_equal_to_parsed_body() {
        let body = json!({
            "success": false,
            "error": {"error_number": 411, "error_description": "Card declined"}
        });
        let response = parse(body.clone());
        assert_eq!(response, body);
        assert_eq!(Value::from(response), body);
    }
}
