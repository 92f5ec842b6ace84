/**
 * Password Update Handler
 *
 * `PUT /users`
 *
 * The target id and the new password must both be present in the body; a
 * missing or blank part fails validation before any store access. The
 * update returns the touched id, so a zero-affected-rows outcome flows
 * through the single-row check and answers 404 with the request URI as the
 * failing instance.
 */
use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, State};
use axum::Json;
use validator::Validate;

use crate::backend::error::AppError;
use crate::backend::server::state::AppState;
use crate::backend::users::check::expect_single;
use crate::backend::users::db;
use crate::backend::users::handlers::{
    parse_request_id, success, HandlerResult, RESOURCE_NOT_FOUND,
};
use crate::shared::responses::SuccessStatus;
use crate::shared::schemas::users::{UpdatePasswordRequest, UserIdBody};

pub async fn update_password(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<UpdatePasswordRequest>, JsonRejection>,
) -> HandlerResult<UserIdBody> {
    let instance = uri.to_string();
    let Json(request) = payload.map_err(|_| AppError::bad_request(instance.as_str()))?;

    let id_raw = request.id.as_deref().unwrap_or_default();
    let new_password = request.new_password.as_deref().unwrap_or_default();
    if id_raw.is_empty() || new_password.is_empty() {
        return Err(AppError::validation("Update user fields", instance.as_str()).into());
    }

    let id = parse_request_id(Some(id_raw), &instance)?;
    let password_hash = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)?;

    let rows = db::update_user_password(&state.db, id, &password_hash).await?;
    let row = expect_single(rows, RESOURCE_NOT_FOUND, &instance)?;

    let body = UserIdBody { id: row.id };
    body.validate()?;

    tracing::info!(id = body.id, "password updated");
    Ok(success(SuccessStatus::Ok, body, None))
}
