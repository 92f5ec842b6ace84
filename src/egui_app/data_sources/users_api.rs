/**
 * User Endpoints
 *
 * One function per server operation. Each call validates the reply's
 * inner body against the shared schema before handing it back, so a call
 * site never sees a malformed success.
 */
use crate::egui_app::data_sources::request::ApiClient;
use crate::egui_app::data_sources::validate::{validate_response_body, validate_response_list};
use crate::egui_app::errors::caught::Caught;
use crate::shared::responses::SuccessBody;
use crate::shared::schemas::users::{
    ConfirmEmailRequest, CredentialsBody, EmailBody, LoginRequest, RegisterUserRequest,
    UpdatePasswordRequest, UserIdBody, UserRecord,
};

pub fn register_user(
    api: &ApiClient,
    request: &RegisterUserRequest,
) -> Result<SuccessBody<UserIdBody>, Caught> {
    let body = api.post("/users/register", request)?;
    validate_response_body(&body)?;
    Ok(body)
}

pub fn login(
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<SuccessBody<CredentialsBody>, Caught> {
    let request = LoginRequest {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    };
    let body = api.post("/users/login", &request)?;
    validate_response_body(&body)?;
    Ok(body)
}

pub fn confirm_email(
    api: &ApiClient,
    id: &str,
    email: &str,
) -> Result<SuccessBody<EmailBody>, Caught> {
    let request = ConfirmEmailRequest {
        id: Some(id.to_string()),
        email: Some(email.to_string()),
    };
    let body = api.post("/users/confirmEmail", &request)?;
    validate_response_body(&body)?;
    Ok(body)
}

pub fn update_password(
    api: &ApiClient,
    id: &str,
    new_password: &str,
) -> Result<SuccessBody<UserIdBody>, Caught> {
    let request = UpdatePasswordRequest {
        id: Some(id.to_string()),
        new_password: Some(new_password.to_string()),
    };
    let body = api.put("/users", &request)?;
    validate_response_body(&body)?;
    Ok(body)
}

pub fn list_users(api: &ApiClient) -> Result<SuccessBody<Vec<UserRecord>>, Caught> {
    let body = api.get("/users/all")?;
    validate_response_list(&body)?;
    Ok(body)
}
