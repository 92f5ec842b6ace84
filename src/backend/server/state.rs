/**
 * Application State
 *
 * The process-wide resources, constructed once at startup and injected
 * into the router. The pool is the only shared handle; per-request data
 * (errors included) never outlives its request.
 */
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool. Opened at process start, drained at
    /// shutdown.
    pub db: PgPool,
}
