/**
 * VetDesk Server Entry Point
 *
 * Initializes tracing, opens the connection pool, serves the Axum app and
 * drains the pool once a shutdown is requested.
 */

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let pool = vetdesk::backend::server::config::connect_database().await?;
    let app = vetdesk::backend::server::init::create_app(pool.clone());

    let port = std::env::var("SERVER_PORT")
        .unwrap_or_else(|_| "4001".to_string())
        .parse::<u16>()
        .unwrap_or(4001);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("server listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Drain the pool before exiting so in-flight queries finish cleanly.
    pool.close().await;
    tracing::info!("pool drained, goodbye");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for the shutdown signal");
        return;
    }
    tracing::info!("shutdown requested");
}
