/**
 * Listing Handler
 *
 * `GET /users/all`
 *
 * An empty table answers 404 rather than an empty list. Passwords never
 * leave the server; rows are projected onto the wire record first.
 */
use axum::extract::{OriginalUri, State};

use crate::backend::error::AppError;
use crate::backend::server::state::AppState;
use crate::backend::users::db;
use crate::backend::users::handlers::{success, HandlerResult};
use crate::shared::responses::SuccessStatus;
use crate::shared::schemas::users::UserRecord;

pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> HandlerResult<Vec<UserRecord>> {
    let instance = uri.to_string();

    let rows = db::list_users(&state.db).await?;
    if rows.is_empty() {
        return Err(AppError::not_found("Users", instance.as_str()).into());
    }

    let records: Vec<UserRecord> = rows
        .into_iter()
        .map(|row| UserRecord {
            id: row.id,
            name: row.name,
            last_name: row.lastname,
            email: row.email,
        })
        .collect();

    Ok(success(SuccessStatus::Ok, records, None))
}
