/**
 * Login Handler
 *
 * `POST /users/login`
 *
 * Both credentials must be present before the store is consulted. The user
 * is resolved by email through the single-row check (absent user answers
 * 404), then the password is verified against the stored bcrypt hash; a
 * mismatch answers 401 without revealing which part was wrong.
 */
use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, State};
use axum::Json;
use validator::Validate;

use crate::backend::error::AppError;
use crate::backend::server::state::AppState;
use crate::backend::users::check::expect_single;
use crate::backend::users::db;
use crate::backend::users::handlers::{success, HandlerResult, RESOURCE_NOT_FOUND};
use crate::shared::responses::SuccessStatus;
use crate::shared::schemas::users::{CredentialsBody, LoginRequest};

pub async fn login(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> HandlerResult<CredentialsBody> {
    let instance = uri.to_string();
    let Json(request) = payload.map_err(|_| AppError::bad_request(instance.as_str()))?;

    let (email, password) = match (request.email.as_deref(), request.password.as_deref()) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => return Err(AppError::validation("Login fields", instance.as_str()).into()),
    };

    let rows = db::find_user_by_email(&state.db, email).await?;
    let user = expect_single(rows, RESOURCE_NOT_FOUND, &instance)?;

    if !bcrypt::verify(password, &user.password)? {
        tracing::warn!(id = user.id, "login rejected, password mismatch");
        return Err(AppError::unauthorized(instance.as_str()).into());
    }

    let body = CredentialsBody {
        email: Some(user.email),
        id: user.id,
    };
    body.validate()?;

    tracing::info!(id = body.id, "user logged in");
    Ok(success(SuccessStatus::Ok, body, None))
}
