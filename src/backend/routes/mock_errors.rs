/**
 * Mock Error Routes
 *
 * One route per failure lane of the responder, so every branch of the
 * pipeline can be exercised against a running server (and in tests)
 * without a database:
 *
 * - `GET  /mock/error` - a generic error
 * - `POST /mock/customerror` - a typed validation error
 * - `GET  /mock/pgerror` - a simulated driver unique violation
 * - `GET  /mock/unerror` - a failure that is not an error value at all
 * - `GET  /mock/zoderror` - a one-issue schema aggregate
 */
use std::borrow::Cow;

use axum::extract::OriginalUri;
use axum::routing::{get, post};
use axum::Router;
use sqlx::error::{DatabaseError, ErrorKind};
use validator::Validate;

use crate::backend::error::{AppError, ErrorDispatch};
use crate::backend::server::state::AppState;

/// A stand-in for a driver error, carrying an arbitrary vendor code.
///
/// The driver only materializes its own error type against a live
/// database, so the simulation routes (and the responder's tests) build
/// this one instead.
#[derive(Debug)]
pub struct SimulatedDbError {
    code: String,
    message: String,
}

impl SimulatedDbError {
    pub fn with_code(code: &str) -> Self {
        Self {
            code: code.to_string(),
            message: "Simulated database error".to_string(),
        }
    }

    pub fn unique_violation() -> Self {
        Self::with_code("23505")
    }
}

impl std::fmt::Display for SimulatedDbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl std::error::Error for SimulatedDbError {}

impl DatabaseError for SimulatedDbError {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.code))
    }

    fn kind(&self) -> ErrorKind {
        match self.code.as_str() {
            "23505" => ErrorKind::UniqueViolation,
            "23503" => ErrorKind::ForeignKeyViolation,
            _ => ErrorKind::Other,
        }
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }
}

/// A plain generic error, the way any untyped failure reaches the
/// responder.
async fn default_error() -> ErrorDispatch {
    anyhow::anyhow!("This is a test error!").into()
}

/// A typed application error.
async fn custom_error(OriginalUri(uri): OriginalUri) -> ErrorDispatch {
    AppError::validation("Field", uri.to_string()).into()
}

/// A driver error carrying the Postgres unique-violation code.
async fn pg_error() -> ErrorDispatch {
    sqlx::Error::Database(Box::new(SimulatedDbError::unique_violation())).into()
}

/// A failure that is not an error value: the handler aborts with an empty
/// object as payload.
async fn un_error() -> ErrorDispatch {
    std::panic::panic_any(serde_json::Value::Object(serde_json::Map::new()))
}

/// A sample payload whose one rule always fails on the empty value,
/// producing a real one-issue aggregate.
#[derive(Validate)]
struct SchemaSample {
    #[validate(length(min = 1, message = "Invalid input: expected string, received number"))]
    names: String,
}

/// A one-issue schema aggregate.
async fn zod_error() -> ErrorDispatch {
    let sample = SchemaSample {
        names: String::new(),
    };
    match sample.validate() {
        Err(errors) => errors.into(),
        Ok(()) => anyhow::anyhow!("mock sample unexpectedly passed validation").into(),
    }
}

/// Add the mock error routes to the router.
pub fn configure_mock_error_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/mock/error", get(default_error))
        .route("/mock/customerror", post(custom_error))
        .route("/mock/pgerror", get(pg_error))
        .route("/mock/unerror", get(un_error))
        .route("/mock/zoderror", get(zod_error))
}
