//! Shared Types
//!
//! This module defines the types that are shared between the desktop client
//! and the backend server. Both halves communicate only through these wire
//! shapes; no runtime objects cross the boundary.
//!
//! # Contents
//!
//! - `responses` - Success and error response envelopes
//! - `schemas` - Request/response schemas with field validation rules

pub mod responses;
pub mod schemas;

// Re-export commonly used types
pub use responses::{
    ErrorBody, ErrorResponseBody, SchemaErrorBody, SchemaIssue, SecondaryErrorBody, SuccessBody,
    SuccessStatus,
};
