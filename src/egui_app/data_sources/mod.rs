//! Data Sources
//!
//! The transport layer: a blocking HTTP client wrapper, response-body
//! validation against the shared schemas, and one function per endpoint.
//! Call sites treat all of it as opaque; whatever fails comes back as a
//! `Caught` for the classifier.

pub mod request;
pub mod users_api;
pub mod validate;

pub use request::ApiClient;
