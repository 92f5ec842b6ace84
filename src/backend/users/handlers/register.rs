/**
 * Registration Handler
 *
 * `POST /users/register`
 *
 * 1. Reject unreadable bodies before anything else.
 * 2. Run the shared field rules; a failed rule forwards the validation
 *    aggregate and never touches the store.
 * 3. Hash the password and insert. A duplicate email surfaces as the
 *    driver's unique violation, which the responder answers as 409.
 * 4. The returned id goes through the single-row check and the response
 *    schema before it is sent.
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
use crate::shared::schemas::users::{RegisterUserRequest, UserIdBody};

pub async fn register(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> HandlerResult<UserIdBody> {
    let instance = uri.to_string();
    let Json(request) = payload.map_err(|_| AppError::bad_request(instance.as_str()))?;

    request.validate()?;

    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)?;
    let rows = db::insert_user(
        &state.db,
        &request.first_name,
        &request.last_name,
        &request.email,
        &password_hash,
    )
    .await?;

    let row = expect_single(rows, RESOURCE_NOT_FOUND, &instance)?;
    let body = UserIdBody { id: row.id };
    body.validate()?;

    tracing::info!(id = body.id, "user registered");
    Ok(success(SuccessStatus::Created, body, Some("User added")))
}
