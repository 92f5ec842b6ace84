/**
 * Error Dispatch
 *
 * `ErrorDispatch` is the single funnel every handler failure flows through.
 * Handlers return `Result<_, ErrorDispatch>`; the `From` impls let `?`
 * forward a store error, a schema aggregate, a typed application error or a
 * generic error without translating it. Classification happens once, in the
 * responder.
 *
 * # Response Conversion
 *
 * `ErrorDispatch` implements `IntoResponse`, but it never renders a wire
 * body itself. The conversion parks the error in the response extensions,
 * where the responder middleware picks it up together with the request URI
 * and builds the one structured reply. Because the dispatch value is
 * consumed exactly once per request, a second reply cannot be attempted.
 */
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::backend::error::types::AppError;

/// Any failure a handler can forward.
#[derive(Debug, Error)]
pub enum ErrorDispatch {
    /// A typed application error
    #[error(transparent)]
    App(#[from] AppError),

    /// An error raised by the relational-store driver
    #[error(transparent)]
    Driver(#[from] sqlx::Error),

    /// A schema-validation aggregate of per-field issues
    #[error(transparent)]
    Schema(#[from] validator::ValidationErrors),

    /// An unclassified generic error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl From<bcrypt::BcryptError> for ErrorDispatch {
    fn from(error: bcrypt::BcryptError) -> Self {
        ErrorDispatch::Other(anyhow::Error::new(error))
    }
}

/// The forwarded error, carried through the response extensions to the
/// responder middleware.
#[derive(Debug, Clone)]
pub(crate) struct ForwardedError(pub(crate) Arc<ErrorDispatch>);

impl IntoResponse for ErrorDispatch {
    fn into_response(self) -> Response {
        // Placeholder status only. The responder replaces the whole
        // response; if it were ever bypassed the client would still get a
        // bare 500 instead of a hung connection.
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response
            .extensions_mut()
            .insert(ForwardedError(Arc::new(self)));
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn forward<T>(result: Result<T, ErrorDispatch>) -> Result<T, ErrorDispatch> {
        result
    }

    #[test]
    fn question_mark_forwards_app_errors_untranslated() {
        let result: Result<(), ErrorDispatch> =
            forward(Err(AppError::not_found("User", "/users/3").into()));
        assert_matches!(result, Err(ErrorDispatch::App(AppError::NotFound { .. })));
    }

    #[test]
    fn question_mark_forwards_driver_errors_untranslated() {
        let result: Result<(), ErrorDispatch> = forward(Err(sqlx::Error::RowNotFound.into()));
        assert_matches!(result, Err(ErrorDispatch::Driver(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn question_mark_forwards_schema_aggregates_untranslated() {
        use validator::Validate;
        let errors = crate::shared::schemas::users::UserIdBody { id: 0 }
            .validate()
            .unwrap_err();
        let result: Result<(), ErrorDispatch> = forward(Err(errors.into()));
        assert_matches!(result, Err(ErrorDispatch::Schema(_)));
    }

    #[test]
    fn into_response_parks_the_error_for_the_responder() {
        let dispatch: ErrorDispatch = AppError::conflict("/users").into();
        let response = dispatch.into_response();
        let forwarded = response.extensions().get::<ForwardedError>();
        assert!(forwarded.is_some());
        assert_matches!(
            forwarded.unwrap().0.as_ref(),
            ErrorDispatch::App(AppError::Conflict { .. })
        );
    }
}
