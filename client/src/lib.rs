//! Client library for the Tuskar management API.
//!
//! Authenticates against the identity service (or re-uses a supplied token),
//! resolves the management endpoint from the service catalog and exposes
//! per-resource clients for the v1 and v2 API generations.

pub mod auth;
mod client;
pub mod error;
mod http;
pub mod models;
pub mod v1;
pub mod v2;

pub use auth::{AuthParams, DEFAULT_ENDPOINT_TYPE, DEFAULT_SERVICE_TYPE};
pub use client::{get_client, ApiVersion, Client};
pub use error::Error;
