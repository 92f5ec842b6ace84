/**
 * Router Configuration
 *
 * Combines all route configurations into the application router.
 *
 * # Route Order
 *
 * 1. The service banner
 * 2. User routes
 * 3. Mock error routes
 * 4. The not-found fallback, which never answers directly: it constructs
 *    the typed route-not-found error from the full original path
 *    (including the query string) and forwards it to the responder
 *
 * # Middleware Order
 *
 * From the outside in: CORS, the error responder, the request logger.
 * The responder must wrap everything that can fail so that it is the only
 * writer of error bodies; CORS stays outside so even error replies carry
 * the headers.
 */
use axum::extract::OriginalUri;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::backend::error::responder::error_responder;
use crate::backend::error::{AppError, ErrorDispatch};
use crate::backend::middleware::request_log::request_log;
use crate::backend::routes::mock_errors::configure_mock_error_routes;
use crate::backend::routes::user_routes::configure_user_routes;
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::success;
use crate::shared::responses::{SuccessBody, SuccessStatus};

#[derive(Debug, Clone, Serialize)]
pub struct Banner {
    pub info: &'static str,
}

async fn service_banner() -> (StatusCode, Json<SuccessBody<Banner>>) {
    success(
        SuccessStatus::Ok,
        Banner {
            info: "VetDesk API over Axum and Postgres",
        },
        None,
    )
}

/// For any request that reached this point no route matched, so the full
/// original path becomes both the failing resource and the instance.
async fn route_fallback(OriginalUri(uri): OriginalUri) -> ErrorDispatch {
    let full_path = uri.to_string();
    AppError::route_not_found(full_path.clone(), full_path).into()
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin([HeaderValue::from_static("http://localhost:5173")])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Create the application router with all routes and middleware.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(service_banner));
    let router = configure_user_routes(router);
    let router = configure_mock_error_routes(router);
    let router = router.fallback(route_fallback);

    router
        .layer(axum::middleware::from_fn(request_log))
        .layer(axum::middleware::from_fn(error_responder))
        .layer(cors_layer())
        .with_state(app_state)
}
