/**
 * Server Initialization
 *
 * Assembles the application from its explicit resources. Tests inject
 * their own pool here, so nothing below this point reads the environment.
 */
use axum::Router;
use sqlx::PgPool;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;

/// Create the Axum application around an already constructed pool.
pub fn create_app(pool: PgPool) -> Router<()> {
    let app_state = AppState { db: pool };
    create_router(app_state)
}
