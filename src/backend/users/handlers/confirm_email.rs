/**
 * Email Confirmation Handler
 *
 * `POST /users/confirmEmail`
 *
 * Sent as a POST so the pair travels in the body. The row is matched
 * case-insensitively; after a hit the handler re-compares the two emails,
 * and a mismatch at that point means the lookup and the row disagree,
 * which is an integrity failure rather than a user mistake.
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
use crate::shared::schemas::users::{ConfirmEmailRequest, EmailBody};

pub async fn confirm_email(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<ConfirmEmailRequest>, JsonRejection>,
) -> HandlerResult<EmailBody> {
    let instance = uri.to_string();
    let Json(request) = payload.map_err(|_| AppError::bad_request(instance.as_str()))?;

    let (id_raw, email) = match (request.id.as_deref(), request.email.as_deref()) {
        (Some(id), Some(email)) if !id.is_empty() && !email.is_empty() => (id, email),
        _ => return Err(AppError::validation("Body request", instance.as_str()).into()),
    };

    let id = parse_request_id(Some(id_raw), &instance)?;
    let rows = db::find_user_by_id_and_email(&state.db, id, email).await?;
    let user = expect_single(rows, RESOURCE_NOT_FOUND, &instance)?;

    if !email.eq_ignore_ascii_case(&user.email) {
        return Err(anyhow::anyhow!("Critical email error").into());
    }

    let body = EmailBody { email: user.email };
    body.validate()?;

    tracing::info!(id = user.id, "email confirmed");
    Ok(success(SuccessStatus::Ok, body, None))
}
