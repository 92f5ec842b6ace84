//! VetDesk - Main Library
//!
//! VetDesk is a vet-clinic registration service: an Axum REST backend over
//! PostgreSQL and a native egui desktop client, connected by a JSON wire
//! contract.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between frontend and backend
//!   - Success and error response envelopes
//!   - Request/response schemas with field validation rules
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with the user CRUD routes
//!   - Typed application errors and the centralized error responder
//!   - PostgreSQL access through an explicitly managed connection pool
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Registration, login and password forms
//!   - Failure classification and the visual error boundary
//!
//! # Error Handling
//!
//! Every server failure funnels through one responder
//! (`backend::error::responder`) that translates it into one of two wire
//! shapes; the client mirrors that with one classifier
//! (`egui_app::errors::deal_with_errors`) that routes every caught failure
//! into exactly one user-facing treatment.
//!
//! # Usage
//!
//! Run the server:
//!
//! ```text
//! cargo run --bin vetdesk-server
//! ```
//!
//! Run the desktop client:
//!
//! ```text
//! cargo run --bin egui_app
//! ```

/// Shared wire-contract types and schemas
pub mod shared;

/// Backend server-side code
pub mod backend;

/// egui native desktop app
pub mod egui_app;
