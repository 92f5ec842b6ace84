/**
 * User Route Handlers
 *
 * One submodule per operation. Handlers share a small contract:
 *
 * - Input-shape checks run before any store access, so an obviously bad
 *   request never costs a pool checkout.
 * - On failure a handler only constructs the typed error (or lets the
 *   store error through with `?`); the responder middleware does all wire
 *   formatting.
 * - On success a handler answers through `success`, the single builder of
 *   the success envelope.
 */
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::backend::error::{AppError, ErrorDispatch};
use crate::shared::responses::{success_body, SuccessBody, SuccessStatus};

pub mod confirm_email;
pub mod delete;
pub mod get_by_id;
pub mod list;
pub mod login;
pub mod password;
pub mod register;

/// Resource name used in the user routes' not-found errors.
pub(crate) const RESOURCE_NOT_FOUND: &str = "User";

/// The uniform result of a user handler.
pub type HandlerResult<T> = Result<(StatusCode, Json<SuccessBody<T>>), ErrorDispatch>;

/// Build the success reply for a handler.
pub fn success<T: Serialize>(
    status: SuccessStatus,
    data: T,
    message: Option<&str>,
) -> (StatusCode, Json<SuccessBody<T>>) {
    (status.as_status_code(), Json(success_body(data, message)))
}

/// Resolve the id sent in a request body or path segment.
///
/// An absent or blank id is a validation failure; a present but
/// unparseable or zero id is a malformed request. Mirrors the client-side
/// form behavior so both halves refuse the same inputs.
pub(crate) fn parse_request_id(
    raw: Option<&str>,
    instance: &str,
) -> Result<i32, ErrorDispatch> {
    let raw = match raw {
        None => return Err(AppError::validation("Undefined id", instance).into()),
        Some(value) if value.trim().is_empty() => {
            return Err(AppError::validation("Empty id", instance).into())
        }
        Some(value) => value.trim(),
    };
    match raw.parse::<i32>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(AppError::bad_request(instance).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn an_absent_id_is_a_validation_failure() {
        let result = parse_request_id(None, "/users");
        let error = assert_matches!(result, Err(ErrorDispatch::App(e)) => e);
        assert_matches!(error, AppError::Validation { field, .. } if field == "Undefined id");
    }

    #[test]
    fn a_blank_id_is_a_validation_failure() {
        let result = parse_request_id(Some("   "), "/users");
        let error = assert_matches!(result, Err(ErrorDispatch::App(e)) => e);
        assert_matches!(error, AppError::Validation { field, .. } if field == "Empty id");
    }

    #[test]
    fn an_unparseable_id_is_a_bad_request() {
        let result = parse_request_id(Some("abc"), "/users");
        assert_matches!(result, Err(ErrorDispatch::App(AppError::BadRequest { .. })));
    }

    #[test]
    fn a_zero_id_is_a_bad_request() {
        let result = parse_request_id(Some("0"), "/users");
        assert_matches!(result, Err(ErrorDispatch::App(AppError::BadRequest { .. })));
    }

    #[test]
    fn a_numeric_id_parses() {
        assert_eq!(parse_request_id(Some(" 7 "), "/users").unwrap(), 7);
    }
}
