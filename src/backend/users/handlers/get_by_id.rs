/**
 * Lookup-by-Id Handler
 *
 * `GET /users/{id}`
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

pub async fn get_by_id(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> HandlerResult<UserIdBody> {
    let instance = uri.to_string();
    let id = parse_request_id(Some(&id), &instance)?;

    let rows = db::find_user_by_id(&state.db, id).await?;
    let user = expect_single(rows, RESOURCE_NOT_FOUND, &instance)?;

    Ok(success(SuccessStatus::Ok, UserIdBody { id: user.id }, None))
}
