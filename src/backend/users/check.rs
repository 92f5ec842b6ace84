/**
 * Result-Shape Checker
 *
 * The default check after any store operation that is expected to touch
 * exactly one logical row. Handlers never translate row counts themselves;
 * this function is the sole authority for the zero-rows contract.
 *
 * - No row: the resource is absent from the caller's point of view, so the
 *   outcome is a typed not-found error carrying the resource name and the
 *   request URI.
 * - More than one row for a by-key lookup: an integrity violation, not a
 *   user-facing condition. It surfaces as a generic error and ends in the
 *   secondary 500 shape.
 */
use crate::backend::error::{AppError, ErrorDispatch};

/// Reduce a result set to the single row it must contain.
pub fn expect_single<T>(
    rows: Vec<T>,
    resource: &str,
    instance: &str,
) -> Result<T, ErrorDispatch> {
    let mut rows = rows.into_iter();
    match (rows.next(), rows.next()) {
        (None, _) => Err(AppError::not_found(resource, instance).into()),
        (Some(row), None) => Ok(row),
        (Some(_), Some(_)) => Err(anyhow::anyhow!(
            "Critical error, duplicate {resource} rows for a single-row lookup"
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn an_empty_result_is_a_not_found() {
        let result = expect_single(Vec::<i32>::new(), "User", "/users/3");
        let error = assert_matches!(result, Err(ErrorDispatch::App(e)) => e);
        assert_matches!(&error, AppError::NotFound { resource, .. } if resource == "User");
        assert_eq!(error.instance(), Some("/users/3"));
    }

    #[test]
    fn a_single_row_passes_through() {
        assert_eq!(expect_single(vec![42], "User", "/users/3").unwrap(), 42);
    }

    #[test]
    fn duplicate_rows_are_an_integrity_error_not_a_not_found() {
        let result = expect_single(vec![1, 2], "User", "/users/3");
        let error = assert_matches!(result, Err(ErrorDispatch::Other(e)) => e);
        assert!(error.to_string().contains("Critical error"));
    }
}
