#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport for the PayLane REST payment API.
//!
//! Sends [`paylane::Operation`]s to the API over HTTPS with Basic Auth and a
//! JSON body, and turns the answers into [`paylane::ApiResponse`]s or
//! [`ClientError`]s.
//!
//! # Modules
//!
//! - [`client`] - Async client, one method per payment operation
//! - `blocking` - Blocking client (feature: `blocking`)
//! - [`config`] - Client configuration
//! - [`error`] - Client error type
//!
//! # Feature Flags
//!
//! - `blocking` - Enables the `reqwest::blocking` based client
//! - `telemetry` - Enables tracing spans and error events for every call

#[macro_use]
mod macros;
mod request;

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod config;
pub mod error;

pub use client::Client;
pub use config::ClientConfig;
pub use error::ClientError;
pub use paylane::{ApiResponse, Credentials, Operation, StatusError};
