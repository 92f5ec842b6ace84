/**
 * Response Validation
 *
 * The server's replies are checked against the shared schemas after
 * deserialization; a reply that parses but breaks a rule is a schema
 * failure, handled exactly like a failed form rule.
 */
use validator::Validate;

use crate::egui_app::errors::caught::Caught;
use crate::shared::responses::SuccessBody;

/// Validate the inner body of a response.
pub fn validate_response_body<T: Validate>(body: &SuccessBody<T>) -> Result<(), Caught> {
    body.inner_body_data.validate().map_err(Caught::from)
}

/// Validate every element of a list response.
pub fn validate_response_list<T: Validate>(body: &SuccessBody<Vec<T>>) -> Result<(), Caught> {
    for item in &body.inner_body_data {
        item.validate().map_err(Caught::from)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::responses::success_body;
    use crate::shared::schemas::users::UserIdBody;
    use assert_matches::assert_matches;

    #[test]
    fn a_rule_breaking_reply_is_a_schema_failure() {
        let body = success_body(UserIdBody { id: 0 }, None);
        let result = validate_response_body(&body);
        assert_matches!(result, Err(Caught::Schema(_)));
    }

    #[test]
    fn a_conforming_reply_passes() {
        let body = success_body(UserIdBody { id: 12 }, Some("User added"));
        assert!(validate_response_body(&body).is_ok());
    }

    #[test]
    fn list_validation_checks_every_element() {
        let body = success_body(vec![UserIdBody { id: 1 }, UserIdBody { id: 0 }], None);
        assert_matches!(validate_response_list(&body), Err(Caught::Schema(_)));
    }
}
