/**
 * Request Logging
 *
 * One line per incoming request, emitted before routing runs. Error
 * logging is not done here; the responder logs every failure once at the
 * moment it renders the reply.
 */
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

pub async fn request_log(request: Request, next: Next) -> Response {
    tracing::info!(method = %request.method(), uri = %request.uri(), "request received");
    next.run(request).await
}
