//! Backend Server Module
//!
//! Server-side code: the Axum application, the user routes, the typed error
//! hierarchy and the centralized error responder.
//!
//! # Architecture
//!
//! - **`error`** - Typed application errors, the dispatch funnel and the
//!   responder middleware
//! - **`users`** - User CRUD handlers, store queries and the result-shape
//!   checker
//! - **`routes`** - Router assembly, mock-error lab and the not-found
//!   fallback
//! - **`middleware`** - Request logging
//! - **`server`** - Pool lifecycle, application state and app construction

pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod users;
