/**
 * Application Error Types
 *
 * The closed set of typed errors a request can end in. Each variant fixes
 * its HTTP status, its stable category URI and its title; constructors take
 * only the variable parts (the failing field, resource or route, and the
 * request path the error is scoped to).
 *
 * # Invariants
 *
 * - A status outside [400,599] fails construction immediately. That is a
 *   programmer-error guard, not a user-facing condition, so it panics
 *   instead of producing a typed error.
 * - Instances are never mutated after construction and never log
 *   themselves. The responder consumes each one exactly once.
 *
 * # Wire Mapping
 *
 * `to_body` renders the primary error shape. The error's own `instance`
 * wins when set; otherwise the responder substitutes the URI of the request
 * being answered.
 */
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::responses::ErrorBody;

/// Store operations that can produce a conflicting result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictingOperation {
    Insert,
    Update,
    Delete,
}

impl std::fmt::Display for ConflictingOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConflictingOperation::Insert => "insert",
            ConflictingOperation::Update => "update",
            ConflictingOperation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// A typed application error.
///
/// The `Display` impl is the log message; the wire body comes from
/// `to_body`, never from formatting the error directly.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AppError {
    /// Invalid user input or a malformed request
    #[error("Invalid user input or malformed request")]
    BadRequest { instance: Option<String> },

    /// A named field failed a business rule
    #[error("{field} validation failed")]
    Validation {
        field: String,
        instance: Option<String>,
    },

    /// Missing or invalid credentials
    #[error("Authentication failure")]
    Unauthorized { instance: Option<String> },

    /// Authenticated but not permitted
    #[error("Authorization failure")]
    Forbidden { instance: Option<String> },

    /// A named resource is absent
    #[error("{resource} not found")]
    NotFound {
        resource: String,
        instance: Option<String>,
    },

    /// No route matched the request path
    #[error("{route_path} not found")]
    RouteNotFound {
        route_path: String,
        instance: Option<String>,
    },

    /// The store rejected the request over a uniqueness or foreign-key rule
    #[error("Conflict")]
    Conflict { instance: Option<String> },

    /// A mutation produced no affected row where one was required
    #[error("Conflict in {operation} operation")]
    ConflictOperation {
        operation: ConflictingOperation,
        instance: Option<String>,
    },

    /// A generic error with a caller-chosen status. Avoid it unless no
    /// specific variant fits.
    #[error("{message}")]
    Custom {
        message: String,
        status: u16,
        instance: Option<String>,
    },
}

/// Guard for the error status range.
///
/// Statuses outside [400,599] are rejected at construction, before any
/// error object exists.
pub fn checked_error_status(code: u16) -> StatusCode {
    assert!(
        (400..=599).contains(&code),
        "invalid status code: {code}. It must be between 400 and 599."
    );
    StatusCode::from_u16(code).expect("status codes in 400..=599 are valid")
}

impl AppError {
    pub fn bad_request(instance: impl Into<String>) -> Self {
        AppError::BadRequest {
            instance: Some(instance.into()),
        }
    }

    pub fn validation(field: impl Into<String>, instance: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            instance: Some(instance.into()),
        }
    }

    pub fn unauthorized(instance: impl Into<String>) -> Self {
        AppError::Unauthorized {
            instance: Some(instance.into()),
        }
    }

    pub fn forbidden(instance: impl Into<String>) -> Self {
        AppError::Forbidden {
            instance: Some(instance.into()),
        }
    }

    pub fn not_found(resource: impl Into<String>, instance: impl Into<String>) -> Self {
        AppError::NotFound {
            resource: resource.into(),
            instance: Some(instance.into()),
        }
    }

    pub fn route_not_found(route_path: impl Into<String>, instance: impl Into<String>) -> Self {
        AppError::RouteNotFound {
            route_path: route_path.into(),
            instance: Some(instance.into()),
        }
    }

    pub fn conflict(instance: impl Into<String>) -> Self {
        AppError::Conflict {
            instance: Some(instance.into()),
        }
    }

    pub fn conflict_operation(
        operation: ConflictingOperation,
        instance: impl Into<String>,
    ) -> Self {
        AppError::ConflictOperation {
            operation,
            instance: Some(instance.into()),
        }
    }

    /// Build a `Custom` error.
    ///
    /// # Panics
    ///
    /// Panics when `status` is outside [400,599].
    pub fn custom(message: impl Into<String>, status: u16, instance: Option<String>) -> Self {
        checked_error_status(status);
        AppError::Custom {
            message: message.into(),
            status,
            instance,
        }
    }

    /// The HTTP status this error responds with.
    pub fn status(&self) -> StatusCode {
        let code = match self {
            AppError::BadRequest { .. } | AppError::Validation { .. } => 400,
            AppError::Unauthorized { .. } => 401,
            AppError::Forbidden { .. } => 403,
            AppError::NotFound { .. } | AppError::RouteNotFound { .. } => 404,
            AppError::Conflict { .. } | AppError::ConflictOperation { .. } => 409,
            AppError::Custom { status, .. } => *status,
        };
        checked_error_status(code)
    }

    /// Stable machine-readable category id.
    pub fn type_uri(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "/errors/bad-request-error",
            AppError::Validation { .. } => "/errors/validation-error",
            AppError::Unauthorized { .. } => "/errors/unauthorized-error",
            AppError::Forbidden { .. } => "/errors/forbidden-error",
            AppError::NotFound { .. } => "/errors/not-found",
            AppError::RouteNotFound { .. } => "/errors/route-not-found",
            AppError::Conflict { .. } => "/errors/conflict",
            AppError::ConflictOperation { .. } => "/errors/conflict-operation",
            AppError::Custom { .. } => "/errors/internal-server-error",
        }
    }

    /// Short summary, identical across all instances of a variant.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "BadRequestError",
            AppError::Validation { .. } => "Field is invalid",
            AppError::Unauthorized { .. } => "UnauthorizedError",
            AppError::Forbidden { .. } => "ForbiddenError",
            AppError::NotFound { .. } => "NotFoundError",
            AppError::RouteNotFound { .. } => "Route path not found",
            AppError::Conflict { .. } => "Conflict",
            AppError::ConflictOperation { .. } => "Conflict operation in database",
            AppError::Custom { .. } => "Internal Server Error",
        }
    }

    /// Instance-specific explanation.
    pub fn detail(&self) -> String {
        match self {
            AppError::BadRequest { .. } => "Invalid user input or malformed request".to_string(),
            AppError::Validation { field, .. } => format!("The provided {field} is invalid."),
            AppError::Unauthorized { .. } => {
                "The login credentials could not be authenticated with the server".to_string()
            }
            AppError::Forbidden { .. } => {
                "The server understood the request but refuses to authorize it".to_string()
            }
            AppError::NotFound { resource, .. } => {
                format!("The requested {resource} could not be found on the server")
            }
            AppError::RouteNotFound { route_path, .. } => {
                format!("The requested {route_path} could not be found.")
            }
            AppError::Conflict { .. } => {
                "The request conflicts with the current state of the target resource".to_string()
            }
            AppError::ConflictOperation { operation, .. } => {
                format!("The {operation} operation in the database did not produce the expected result")
            }
            AppError::Custom { message, .. } => message.clone(),
        }
    }

    /// The request path this error was scoped to at construction, if any.
    pub fn instance(&self) -> Option<&str> {
        let instance = match self {
            AppError::BadRequest { instance }
            | AppError::Validation { instance, .. }
            | AppError::Unauthorized { instance }
            | AppError::Forbidden { instance }
            | AppError::NotFound { instance, .. }
            | AppError::RouteNotFound { instance, .. }
            | AppError::Conflict { instance }
            | AppError::ConflictOperation { instance, .. }
            | AppError::Custom { instance, .. } => instance,
        };
        instance.as_deref()
    }

    /// Render the primary wire shape. `fallback_instance` is the URI of the
    /// request being answered, used when the error was built without one.
    pub fn to_body(&self, fallback_instance: &str) -> ErrorBody {
        ErrorBody {
            status: self.status().as_u16(),
            error_type: self.type_uri().to_string(),
            title: self.title().to_string(),
            detail: Some(self.detail()),
            instance: Some(
                self.instance()
                    .unwrap_or(fallback_instance)
                    .to_string(),
            ),
            trace_id: None,
        }
    }
}
