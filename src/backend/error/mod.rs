//! Backend Error Module
//!
//! This module owns the whole server-side error pipeline.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - The closed set of typed application errors
//! - **`dispatch`** - The funnel that carries any failure out of a handler
//! - **`responder`** - The single middleware that translates a forwarded
//!   failure into the wire error body
//!
//! # Flow
//!
//! Handlers return `Result<_, ErrorDispatch>`. The `?` operator forwards
//! store errors, schema aggregates, typed application errors and generic
//! errors without translating them; the responder middleware at the top of
//! the stack picks the status and body exactly once per request.

pub mod dispatch;
pub mod responder;
pub mod types;

// Re-export commonly used types
pub use dispatch::ErrorDispatch;
pub use types::{AppError, ConflictingOperation};
