/**
 * Failure Classifier
 *
 * Deal with errors that are caught manually (not by the boundary's render
 * guard). The raw value is logged first, unconditionally; after that
 * exactly one treatment fires:
 *
 * - a schema aggregate is recoverable by the user, so it becomes a log
 *   line with the joined issue list plus a transient notice, and never
 *   reaches the boundary;
 * - everything else (transport failures, genuine errors, values that are
 *   not errors at all) escalates to the boundary unchanged.
 */
use crate::egui_app::errors::caught::Caught;
use crate::egui_app::notices::Notices;
use crate::shared::schemas::field_issues;

/// Join issue messages the way a narrow list format renders them.
fn join_list<I: IntoIterator<Item = String>>(items: I) -> String {
    items.into_iter().collect::<Vec<_>>().join(", ")
}

/// Classify a caught failure into its one user-facing treatment.
///
/// `escalate` is the capability for handing an error to the nearest
/// visual boundary.
pub fn deal_with_errors(error: Caught, notices: &mut Notices, escalate: &mut dyn FnMut(Caught)) {
    tracing::trace!(caught = %error.describe(), "caught failure");

    match error {
        Caught::Schema(errors) => {
            let issue_messages = field_issues(&errors)
                .into_iter()
                .enumerate()
                .map(|(index, issue)| format!("Index{index}: {}", issue.message));
            tracing::error!("ValidationError: {}", join_list(issue_messages));
            notices.push("ValidationError");
        }
        other => escalate(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::schemas::users::RegisterUserRequest;
    use std::cell::RefCell;
    use validator::Validate;

    fn schema_failure() -> Caught {
        let request = RegisterUserRequest {
            first_name: "Marta".to_string(),
            last_name: "Nowak".to_string(),
            email: "bad".to_string(),
            password: "hunter42".to_string(),
        };
        Caught::Schema(request.validate().unwrap_err())
    }

    #[test]
    fn schema_failures_notify_and_never_escalate() {
        let mut notices = Notices::new();
        let escalated = RefCell::new(Vec::new());
        let mut escalate = |error: Caught| escalated.borrow_mut().push(error);

        deal_with_errors(schema_failure(), &mut notices, &mut escalate);

        assert_eq!(notices.active(), 1);
        assert!(escalated.borrow().is_empty());
    }

    #[test]
    fn genuine_errors_escalate_without_a_notice() {
        let mut notices = Notices::new();
        let escalated = RefCell::new(Vec::new());
        let mut escalate = |error: Caught| escalated.borrow_mut().push(error);

        deal_with_errors(
            Caught::Error(anyhow::anyhow!("request rejected")),
            &mut notices,
            &mut escalate,
        );

        assert_eq!(notices.active(), 0);
        assert_eq!(escalated.borrow().len(), 1);
    }

    #[test]
    fn non_error_values_escalate_unchanged() {
        let mut notices = Notices::new();
        let escalated = RefCell::new(Vec::new());
        let mut escalate = |error: Caught| escalated.borrow_mut().push(error);

        // A caught plain object, not an error
        let payload: Box<dyn std::any::Any + Send> = Box::new(serde_json::json!({}));
        deal_with_errors(Caught::Unknown(payload), &mut notices, &mut escalate);

        assert_eq!(notices.active(), 0);
        let escalated = escalated.borrow();
        let payload = match &escalated[0] {
            Caught::Unknown(payload) => payload,
            other => panic!("expected the value to pass through unchanged, got {other:?}"),
        };
        assert!(payload.downcast_ref::<serde_json::Value>().is_some());
    }

    #[test]
    fn join_list_reads_like_a_narrow_list() {
        let joined = join_list(vec!["Index0: a".to_string(), "Index1: b".to_string()]);
        assert_eq!(joined, "Index0: a, Index1: b");
    }
}
