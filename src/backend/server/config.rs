/**
 * Server Configuration
 *
 * Loads the PostgreSQL pool from the environment. The pool is constructed
 * lazily (connections are opened at first checkout, the way the original
 * driver pools behave), with explicit limits:
 *
 * - at most 20 clients
 * - idle clients closed after 30 seconds
 * - a checkout that cannot be served within 2 seconds fails, and that
 *   failure travels the generic error lane of the responder
 *
 * Migrations run at startup; a migration failure is logged but does not
 * prevent startup, since it usually means they already ran.
 */
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Build the connection pool from `DATABASE_URL` and run migrations.
pub async fn connect_database() -> anyhow::Result<PgPool> {
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;

    let pool = PgPoolOptions::new()
        .max_connections(20)
        .idle_timeout(Duration::from_secs(30))
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy(&database_url)
        .context("failed to create the database connection pool")?;

    tracing::info!("database connection pool created");

    match sqlx::migrate!().run(&pool).await {
        Ok(()) => tracing::info!("database migrations completed"),
        Err(error) => {
            tracing::warn!(%error, "migrations failed, continuing with the existing schema");
        }
    }

    Ok(pool)
}
