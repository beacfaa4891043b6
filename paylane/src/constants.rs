//! Wire constants for the PayLane REST API.

/// Production REST endpoint. Operation paths are resolved relative to it.
pub const API_URI: &str = "https://direct.paylane.com/rest/";

/// Content type sent with every request body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Response field carrying the outcome of the call.
pub const SUCCESS_FIELD: &str = "success";
