/**
 * Deletion Handler
 *
 * `DELETE /users/{id}`
 *
 * The delete returns the removed id; deleting an absent user is
 * indistinguishable from a miss at this layer, so the single-row check
 * turns the empty result into the 404 contract.
 */
use axum::extract::{OriginalUri, Path, State};

use crate::backend::server::state::AppState;
use crate::backend::users::check::expect_single;
use crate::backend::users::db;
use crate::backend::users::handlers::{
    parse_request_id, success, HandlerResult, RESOURCE_NOT_FOUND,
};
use crate::shared::responses::SuccessStatus;
use crate::shared::schemas::users::UserIdBody;

pub async fn delete(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> HandlerResult<UserIdBody> {
    let instance = uri.to_string();
    let id = parse_request_id(Some(&id), &instance)?;

    let rows = db::delete_user(&state.db, id).await?;
    let row = expect_single(rows, RESOURCE_NOT_FOUND, &instance)?;

    tracing::info!(id = row.id, "user deleted");
    Ok(success(SuccessStatus::Ok, UserIdBody { id: row.id }, None))
}
