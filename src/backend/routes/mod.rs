//! Route Configuration
//!
//! - `router` - assembles the full application router
//! - `user_routes` - the user CRUD surface
//! - `mock_errors` - the error lab: one route per failure lane of the
//!   responder

pub mod mock_errors;
pub mod router;
pub mod user_routes;
