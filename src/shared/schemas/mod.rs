/**
 * Request/Response Schemas
 *
 * Field rules for the bodies that cross the wire, shared by both halves so
 * the client can validate before sending and the server never trusts the
 * client's copy.
 *
 * Validation failures surface as `validator::ValidationErrors`, an
 * aggregate of per-field issues. `field_issues` flattens that aggregate
 * into a deterministic list for the wire body and the client log.
 */
use validator::ValidationErrors;

pub mod users;

/// One flattened field issue out of a `ValidationErrors` aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    /// Field path as reported by the validation library
    pub path: String,
    /// The rule's message, or its code when no message was configured
    pub message: String,
}

/// Flatten a validation aggregate into per-field issues, ordered by path so
/// the output is deterministic.
pub fn field_issues(errors: &ValidationErrors) -> Vec<FieldIssue> {
    let by_field = errors.field_errors();
    let mut issues: Vec<FieldIssue> = by_field
        .iter()
        .flat_map(|(path, field_errors)| {
            field_errors.iter().map(|error| FieldIssue {
                path: path.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string()),
            })
        })
        .collect();
    issues.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.message.cmp(&b.message)));
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 2, message = "Name is required"))]
        first_name: String,
        #[validate(length(min = 2, message = "Last name is required"))]
        last_name: String,
        // no message on purpose, the issue falls back to the rule code
        #[validate(email)]
        email: String,
    }

    fn sample(first_name: &str, last_name: &str, email: &str) -> Sample {
        Sample {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn flattens_one_issue_per_failed_rule() {
        let errors = sample("M", "Nowak", "bad").validate().unwrap_err();

        let issues = field_issues(&errors);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].path, "email");
        assert_eq!(issues[1].path, "first_name");
        assert_eq!(issues[1].message, "Name is required");
    }

    #[test]
    fn falls_back_to_the_rule_code_without_a_message() {
        let errors = sample("Marta", "Nowak", "bad").validate().unwrap_err();

        let issues = field_issues(&errors);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "email");
    }

    #[test]
    fn output_is_ordered_by_path() {
        let errors = sample("N", "M", "marta@example.com").validate().unwrap_err();

        let paths: Vec<_> = field_issues(&errors).into_iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["first_name", "last_name"]);
    }
}
