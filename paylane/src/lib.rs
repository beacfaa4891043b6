#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the PayLane REST payment API.
//!
//! This crate is transport-agnostic. It knows which operations the API
//! exposes, where each one lives and which verb it uses, how the API signals
//! success, and how HTTP status codes map onto client errors. The HTTP
//! transport lives in the `paylane-http` crate.
//!
//! # Modules
//!
//! - [`constants`] - API base URL and wire constants
//! - [`credentials`] - Basic Auth credentials
//! - [`error`] - HTTP status classification
//! - [`operation`] - The operation table (path and verb per payment action)
//! - [`response`] - Parsed API responses

pub mod constants;
pub mod credentials;
pub mod error;
pub mod operation;
pub mod response;

pub use credentials::Credentials;
pub use error::{StatusError, UnknownOperation, classify_status};
pub use operation::Operation;
pub use response::ApiResponse;
