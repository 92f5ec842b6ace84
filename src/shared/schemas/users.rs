/**
 * User Schemas
 *
 * Request bodies for the user routes and the response inner bodies the
 * client validates after deserialization.
 *
 * The same base rules apply on both halves: the client runs them before
 * sending (so most mistakes never leave the form) and the server runs them
 * again on arrival. `RegisterUserForm` extends the base rules with the
 * form-only fields (password confirmation, terms acceptance).
 */
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Reject values containing markup. Mirrors the form rule that strips
/// anything looking like an HTML tag.
fn no_html_tags(value: &str) -> Result<(), ValidationError> {
    if value.contains('<') && value.contains('>') {
        let mut error = ValidationError::new("html_tags");
        error.message = Some("HTML tags are not allowed".into());
        return Err(error);
    }
    Ok(())
}

/// The registration form's terms checkbox must be accepted.
fn accepted_terms(terms: &bool) -> Result<(), ValidationError> {
    if !*terms {
        let mut error = ValidationError::new("terms");
        error.message = Some("You must accept our Terms and Privacy Policy".into());
        return Err(error);
    }
    Ok(())
}

/// Body of `POST /users/register`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[validate(
        length(min = 2, max = 15, message = "Name must be between 2 and 15 characters"),
        custom(function = no_html_tags)
    )]
    pub first_name: String,
    #[validate(
        length(min = 2, max = 15, message = "Last name must be between 2 and 15 characters"),
        custom(function = no_html_tags)
    )]
    pub last_name: String,
    #[validate(
        length(min = 9, message = "Email must be at least 9 characters"),
        email(message = "Must be a valid email")
    )]
    pub email: String,
    #[validate(
        length(min = 6, max = 20, message = "Password must be between 6 and 20 characters"),
        custom(function = no_html_tags)
    )]
    pub password: String,
}

/// The client-side registration form: the base rules plus confirmation and
/// terms, which never cross the wire.
#[derive(Debug, Clone, Default, Validate)]
pub struct RegisterUserForm {
    #[validate(
        length(min = 2, max = 15, message = "Name must be between 2 and 15 characters"),
        custom(function = no_html_tags)
    )]
    pub first_name: String,
    #[validate(
        length(min = 2, max = 15, message = "Last name must be between 2 and 15 characters"),
        custom(function = no_html_tags)
    )]
    pub last_name: String,
    #[validate(
        length(min = 9, message = "Email must be at least 9 characters"),
        email(message = "Must be a valid email")
    )]
    pub email: String,
    #[validate(
        length(min = 6, max = 20, message = "Password must be between 6 and 20 characters"),
        custom(function = no_html_tags),
        must_match(other = confirm_password, message = "Passwords don't match")
    )]
    pub password: String,
    #[validate(length(min = 6, max = 20, message = "Confirm Password is required"))]
    pub confirm_password: String,
    #[validate(custom(function = accepted_terms))]
    pub terms: bool,
}

impl RegisterUserForm {
    /// The wire request for a validated form.
    pub fn to_request(&self) -> RegisterUserRequest {
        RegisterUserRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Body of `POST /users/login`.
///
/// Fields are optional on purpose; presence is a business rule checked by
/// the handler, not a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /users/confirmEmail`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmEmailRequest {
    pub id: Option<String>,
    pub email: Option<String>,
}

/// Body of `PUT /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub id: Option<String>,
    pub new_password: Option<String>,
}

/// Inner body carrying just a user id, returned by the mutating routes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct UserIdBody {
    #[validate(range(min = 1, message = "User id must be a positive integer"))]
    pub id: i32,
}

/// Inner body of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsBody {
    pub email: Option<String>,
    #[validate(range(min = 1, message = "User id must be a positive integer"))]
    pub id: i32,
}

/// Inner body of a successful email confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct EmailBody {
    #[validate(email(message = "Must be a valid email"))]
    pub email: String,
}

/// One user as listed by `GET /users/all`. The password never leaves the
/// server.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[validate(range(min = 1, message = "User id must be a positive integer"))]
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
}
