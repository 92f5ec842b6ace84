/**
 * Centralized Error Responder
 *
 * The single point where a forwarded failure becomes a wire error body.
 * Handlers and the not-found fallback only construct and forward errors;
 * this middleware picks the status and the shape, so the wire contract has
 * exactly one place of change.
 *
 * # Classification Order
 *
 * 1. Store driver error carrying a uniqueness (`23505`) or foreign-key
 *    (`23503`) violation code: answered as a conflict scoped to the request
 *    URI.
 * 2. Store driver error with any other code: refused by `classify`; the
 *    driver loop falls back to the secondary 500 shape with a generic
 *    detail. Driver internals are logged, never sent.
 * 3. Driver failures without a database error (pool exhaustion, timeouts):
 *    treated as a generic error.
 * 4. Schema-validation aggregate: 400 with one issue entry per failed rule,
 *    each message starting with its field path.
 * 5. Typed application error: its own status and body, with the request URI
 *    substituted when the error did not set an instance.
 * 6. Generic error: secondary 500 shape, the error message as detail (or a
 *    fallback when the message is empty).
 * 7. A panic in a handler (a failure that is not an error value at all):
 *    secondary 500 shape with a fixed generic detail. The payload is
 *    logged when it is printable.
 *
 * The raw failure is logged here exactly once, before any rendering, so no
 * error leaves the process unobserved.
 *
 * # At-Most-Once
 *
 * The forwarded error is consumed by value out of the response extensions
 * and this middleware is the only writer of error bodies; a second write
 * for the same request is unrepresentable rather than runtime-checked.
 */
use std::panic::AssertUnwindSafe;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures_util::FutureExt;

use crate::backend::error::dispatch::{ErrorDispatch, ForwardedError};
use crate::shared::responses::{
    ErrorResponseBody, SchemaErrorBody, SchemaIssue, SecondaryErrorBody,
};
use crate::shared::schemas::field_issues;

/// Detail used when a generic error carries an empty message.
const EMPTY_ERROR_DETAIL: &str = "An Error occurred";
/// Detail used when the failure is not an error value at all.
const UNKNOWN_FAILURE_DETAIL: &str = "An unknown error occurred";
/// Detail used for driver errors the responder refuses to classify.
const UNHANDLED_DRIVER_DETAIL: &str = "An unexpected database error occurred";

/// What `classify` decided for a forwarded error.
#[derive(Debug, PartialEq)]
pub enum Disposition {
    /// Answer with this status and body
    Respond(StatusCode, ErrorResponseBody),
    /// A driver error the responder does not recognize; passed on to the
    /// driver loop's last-resort rendering
    Unhandled,
}

/// Decide status and body for a forwarded error. Pure; the request URI is
/// only used to scope the body's `instance`.
pub fn classify(error: &ErrorDispatch, instance: &str) -> Disposition {
    match error {
        ErrorDispatch::Driver(driver_error) => match driver_error.as_database_error() {
            Some(database_error) => match database_error.code().as_deref() {
                // Unique or foreign-key constraint violation in Postgres
                Some("23505") | Some("23503") => {
                    let conflict = crate::backend::error::AppError::conflict(instance);
                    Disposition::Respond(
                        conflict.status(),
                        ErrorResponseBody::Primary(conflict.to_body(instance)),
                    )
                }
                _ => Disposition::Unhandled,
            },
            // Pool exhaustion, timeouts and other non-database driver
            // failures carry no vendor code and get the generic treatment
            None => Disposition::Respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponseBody::Secondary(SecondaryErrorBody::new(
                    driver_error.to_string(),
                    instance,
                )),
            ),
        },
        ErrorDispatch::Schema(errors) => {
            let issues = field_issues(errors)
                .into_iter()
                .map(|issue| SchemaIssue {
                    message: format!("{} is {}", issue.path, issue.message),
                })
                .collect();
            Disposition::Respond(
                StatusCode::BAD_REQUEST,
                ErrorResponseBody::Schema(SchemaErrorBody::new(issues)),
            )
        }
        ErrorDispatch::App(app_error) => Disposition::Respond(
            app_error.status(),
            ErrorResponseBody::Primary(app_error.to_body(instance)),
        ),
        ErrorDispatch::Other(other) => {
            let message = other.to_string();
            let detail = if message.is_empty() {
                EMPTY_ERROR_DETAIL.to_string()
            } else {
                message
            };
            Disposition::Respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponseBody::Secondary(SecondaryErrorBody::new(detail, instance)),
            )
        }
    }
}

/// Terminal middleware. Runs the rest of the stack, then turns any
/// forwarded error (or panic) into the one structured reply.
pub async fn error_responder(request: Request, next: Next) -> Response {
    let instance = request.uri().to_string();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(mut response) => {
            let forwarded = response.extensions_mut().remove::<ForwardedError>();
            match forwarded {
                Some(ForwardedError(error)) => render(&error, &instance),
                None => response,
            }
        }
        Err(payload) => {
            let printable = payload
                .downcast_ref::<&str>()
                .map(|message| message.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned());
            match printable {
                Some(message) => tracing::error!(%instance, %message, "request failed with a non-error value"),
                None => tracing::error!(%instance, "request failed with a non-error value"),
            }
            secondary(UNKNOWN_FAILURE_DETAIL, &instance)
        }
    }
}

fn render(error: &ErrorDispatch, instance: &str) -> Response {
    tracing::trace!(?error, %instance, "forwarded error");
    tracing::error!(%error, %instance, "request failed");

    match classify(error, instance) {
        Disposition::Respond(status, body) => (status, Json(body)).into_response(),
        Disposition::Unhandled => {
            tracing::warn!(%instance, "driver error left unclassified");
            secondary(UNHANDLED_DRIVER_DETAIL, instance)
        }
    }
}

fn secondary(detail: &str, instance: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponseBody::Secondary(SecondaryErrorBody::new(
            detail, instance,
        ))),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::error::AppError;
    use crate::backend::routes::mock_errors::SimulatedDbError;
    use crate::shared::schemas::users::RegisterUserRequest;
    use assert_matches::assert_matches;
    use validator::Validate;

    fn driver(code: &str) -> ErrorDispatch {
        sqlx::Error::Database(Box::new(SimulatedDbError::with_code(code))).into()
    }

    #[test]
    fn unique_violations_become_conflicts() {
        let disposition = classify(&driver("23505"), "/users/register");
        let (status, body) = assert_matches!(disposition, Disposition::Respond(s, b) => (s, b));
        assert_eq!(status, StatusCode::CONFLICT);
        let body = assert_matches!(body, ErrorResponseBody::Primary(b) => b);
        assert_eq!(body.error_type, "/errors/conflict");
        assert_eq!(body.instance.as_deref(), Some("/users/register"));
    }

    #[test]
    fn foreign_key_violations_become_conflicts() {
        let disposition = classify(&driver("23503"), "/users/7");
        let (status, _) = assert_matches!(disposition, Disposition::Respond(s, b) => (s, b));
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn other_driver_codes_are_not_classified() {
        assert_eq!(classify(&driver("40001"), "/users"), Disposition::Unhandled);
        assert_eq!(classify(&driver("22003"), "/users"), Disposition::Unhandled);
    }

    #[test]
    fn pool_failures_get_the_generic_treatment() {
        let error: ErrorDispatch = sqlx::Error::PoolTimedOut.into();
        let disposition = classify(&error, "/users/all");
        let (status, body) = assert_matches!(disposition, Disposition::Respond(s, b) => (s, b));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_matches!(body, ErrorResponseBody::Secondary(_));
    }

    #[test]
    fn schema_aggregates_list_every_issue_path_first() {
        // bad email breaks two rules, bad password one
        let request = RegisterUserRequest {
            first_name: "Marta".to_string(),
            last_name: "Nowak".to_string(),
            email: "bad".to_string(),
            password: "123".to_string(),
        };
        let errors = request.validate().unwrap_err();

        let disposition = classify(&ErrorDispatch::Schema(errors), "/users/register");
        let (status, body) = assert_matches!(disposition, Disposition::Respond(s, b) => (s, b));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body = assert_matches!(body, ErrorResponseBody::Schema(b) => b);
        assert_eq!(body.issues.len(), 3);
        assert!(body.issues[0].message.starts_with("email is "));
        assert!(body.issues[1].message.starts_with("email is "));
        assert!(body.issues[2].message.starts_with("password is "));
    }

    #[test]
    fn typed_errors_answer_with_their_own_status() {
        let error: ErrorDispatch = AppError::not_found("User", "/users/9").into();
        let disposition = classify(&error, "/fallback");
        let (status, body) = assert_matches!(disposition, Disposition::Respond(s, b) => (s, b));
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body = assert_matches!(body, ErrorResponseBody::Primary(b) => b);
        assert_eq!(body.instance.as_deref(), Some("/users/9"));
    }

    #[test]
    fn generic_errors_use_their_message_as_detail() {
        let error: ErrorDispatch = anyhow::anyhow!("Critical email error").into();
        let disposition = classify(&error, "/users/confirmEmail");
        let (status, body) = assert_matches!(disposition, Disposition::Respond(s, b) => (s, b));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = assert_matches!(body, ErrorResponseBody::Secondary(b) => b);
        assert_eq!(body.detail, "Critical email error");
        assert_eq!(body.instance, "/users/confirmEmail");
    }

    #[test]
    fn empty_error_messages_get_a_fallback_detail() {
        let error: ErrorDispatch = anyhow::anyhow!("").into();
        let disposition = classify(&error, "/users");
        let body = assert_matches!(
            disposition,
            Disposition::Respond(_, ErrorResponseBody::Secondary(b)) => b
        );
        assert_eq!(body.detail, "An Error occurred");
    }
}
