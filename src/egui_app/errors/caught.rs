/**
 * Caught Failures
 *
 * `Caught` is everything a failed request or a guarded computation can
 * hand to the classifier. The transport error is its own variant because
 * the transport library marks its failures with a dedicated type; a plain
 * `Error` is not enough to recognize them.
 *
 * `Unknown` carries values that are not errors at all, such as the payload
 * of an aborted computation. They stay opaque; the classifier passes them
 * to the boundary unchanged.
 */
use std::any::Any;

use validator::ValidationErrors;

/// A value caught from a failed call.
pub enum Caught {
    /// A schema-validation aggregate, from the form rules or from checking
    /// a response body
    Schema(ValidationErrors),
    /// A transport-layer failure (connection, status, decoding)
    Transport(reqwest::Error),
    /// Any other genuine error
    Error(anyhow::Error),
    /// A value that is not an error at all
    Unknown(Box<dyn Any + Send>),
}

impl Caught {
    /// A printable rendering for the log. `Unknown` values are only
    /// described when they carry text.
    pub fn describe(&self) -> String {
        match self {
            Caught::Schema(errors) => format!("schema validation failed: {errors}"),
            Caught::Transport(error) => format!("transport failure: {error}"),
            Caught::Error(error) => error.to_string(),
            Caught::Unknown(payload) => {
                if let Some(text) = payload.downcast_ref::<&str>() {
                    format!("non-error value: {text}")
                } else if let Some(text) = payload.downcast_ref::<String>() {
                    format!("non-error value: {text}")
                } else {
                    "non-error value".to_string()
                }
            }
        }
    }
}

impl std::fmt::Debug for Caught {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Caught::Schema(errors) => f.debug_tuple("Schema").field(errors).finish(),
            Caught::Transport(error) => f.debug_tuple("Transport").field(error).finish(),
            Caught::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Caught::Unknown(_) => f.write_str("Unknown(..)"),
        }
    }
}

impl From<ValidationErrors> for Caught {
    fn from(errors: ValidationErrors) -> Self {
        Caught::Schema(errors)
    }
}

impl From<reqwest::Error> for Caught {
    fn from(error: reqwest::Error) -> Self {
        Caught::Transport(error)
    }
}

impl From<anyhow::Error> for Caught {
    fn from(error: anyhow::Error) -> Self {
        Caught::Error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_renders_text_payloads() {
        let caught = Caught::Unknown(Box::new("boom"));
        assert_eq!(caught.describe(), "non-error value: boom");
    }

    #[test]
    fn describe_keeps_opaque_payloads_opaque() {
        let caught = Caught::Unknown(Box::new(serde_json::json!({})));
        assert_eq!(caught.describe(), "non-error value");
    }

    #[test]
    fn transport_failures_are_their_own_variant() {
        // A builder error needs no network to produce
        let error = reqwest::blocking::Client::new()
            .get("htp:/not a url")
            .send()
            .unwrap_err();
        assert!(matches!(Caught::from(error), Caught::Transport(_)));
    }
}
