/**
 * Response Envelopes
 *
 * Every endpoint answers with one of the wire shapes defined here, so the
 * client has a single deserialization path regardless of endpoint.
 *
 * # Success
 *
 * All 2xx responses carry a `SuccessBody<T>`: the payload under
 * `innerBodyData` plus an optional human message.
 *
 * # Errors
 *
 * Error responses use one of two shapes:
 *
 * - `ErrorBody` - the primary shape (RFC 9457 field set) mirroring a typed
 *   application error
 * - `SecondaryErrorBody` - the fixed 500 shape used for failures that carry
 *   no status of their own
 *
 * A schema-validation failure is reported with `SchemaErrorBody`, which
 * lists one entry per failed field rule.
 */
use serde::{Deserialize, Serialize};
use axum::http::StatusCode;

/// Success envelope for every 2xx response.
///
/// `inner_body_data` is the endpoint payload; the field is named to avoid a
/// clash with the transport layer's own `data` accessors on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBody<T> {
    pub inner_body_data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Primary error shape, following RFC 9457.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// The HTTP status code
    pub status: u16,
    /// URI-style category id, stable per error kind (e.g. `/errors/conflict`)
    #[serde(rename = "type")]
    pub error_type: String,
    /// Short human-readable summary, identical across instances of a kind
    pub title: String,
    /// Instance-specific explanation, such as which field failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// URI reference to the request that caused the error (e.g. `/users/12`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Correlation id for the failing request. Declared on the wire but not
    /// populated yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Secondary error shape, for failures that have no status code of their
/// own. Always 500.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryErrorBody {
    pub status: u16,
    pub title: String,
    pub detail: String,
    pub instance: String,
}

impl SecondaryErrorBody {
    pub fn new(detail: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            status: 500,
            title: "Internal Server Error".to_string(),
            detail: detail.into(),
            instance: instance.into(),
        }
    }
}

/// One failed field rule inside a `SchemaErrorBody`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemaIssue {
    /// Path-first message, e.g. `"email is Must be a valid email"`
    pub message: String,
}

/// Error shape for request bodies that failed schema validation, one issue
/// per failed rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaErrorBody {
    pub status: u16,
    pub title: String,
    pub issues: Vec<SchemaIssue>,
}

impl SchemaErrorBody {
    pub fn new(issues: Vec<SchemaIssue>) -> Self {
        Self {
            status: 400,
            title: "Request validation failed".to_string(),
            issues,
        }
    }
}

/// The full set of error bodies a response can carry. Serializes as the
/// inner shape directly.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorResponseBody {
    Primary(ErrorBody),
    Schema(SchemaErrorBody),
    Secondary(SecondaryErrorBody),
}

/// Accepted statuses for a success response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessStatus {
    Ok,
    Created,
    Accepted,
}

impl SuccessStatus {
    pub fn as_status_code(self) -> StatusCode {
        let code = match self {
            SuccessStatus::Ok => 200,
            SuccessStatus::Created => 201,
            SuccessStatus::Accepted => 202,
        };
        checked_success_status(code)
    }
}

/// Guard for the success status range.
///
/// A status outside [200,299] here is a programmer error, not a runtime
/// condition, so it fails construction immediately.
pub fn checked_success_status(code: u16) -> StatusCode {
    assert!(
        (200..=299).contains(&code),
        "invalid success status code: {code}. It must be between 200 and 299."
    );
    StatusCode::from_u16(code).expect("status codes in 200..=299 are valid")
}

/// The standard way of creating a success response body.
pub fn success_body<T>(data: T, message: Option<&str>) -> SuccessBody<T> {
    SuccessBody {
        inner_body_data: data,
        message: message.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn success_body_round_trips() {
        let body = success_body(vec![1, 2, 3], Some("User added"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["innerBodyData"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["message"], "User added");

        let back: SuccessBody<Vec<i32>> = serde_json::from_value(json).unwrap();
        assert_eq!(back, body);
    }

    #[test]
    fn success_body_message_absent_when_not_supplied() {
        let body = success_body(7, None);
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("message").is_none());
    }

    #[test]
    fn error_body_uses_wire_field_names() {
        let body = ErrorBody {
            status: 409,
            error_type: "/errors/conflict".to_string(),
            title: "Conflict".to_string(),
            detail: None,
            instance: Some("/users".to_string()),
            trace_id: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "/errors/conflict");
        assert_eq!(json["instance"], "/users");
        assert!(json.get("detail").is_none());
        assert!(json.get("traceId").is_none());
    }

    #[test]
    fn secondary_body_is_fixed_500() {
        let body = SecondaryErrorBody::new("An Error occurred", "/users/3");
        assert_eq!(body.status, 500);
        assert_eq!(body.title, "Internal Server Error");
    }

    #[test]
    fn success_statuses_map_to_accepted_range() {
        assert_eq!(SuccessStatus::Ok.as_status_code(), StatusCode::OK);
        assert_eq!(SuccessStatus::Created.as_status_code(), StatusCode::CREATED);
        assert_eq!(SuccessStatus::Accepted.as_status_code(), StatusCode::ACCEPTED);
    }

    #[test]
    #[should_panic(expected = "invalid success status code")]
    fn success_status_guard_rejects_errors() {
        checked_success_status(404);
    }

    proptest! {
        #[test]
        fn success_status_guard_accepts_entire_2xx_range(code in 200u16..=299) {
            let status = checked_success_status(code);
            prop_assert_eq!(status.as_u16(), code);
        }
    }
}
