//! Environment variable expansion for configuration strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::ConfigError;

static REFERENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^}]*\}").unwrap());

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// An unset variable without a default is an error naming `field`.
/// Text outside `${...}`, including a bare `$VAR` or `$5`, is kept as is.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut last = 0;
    for reference in REFERENCE_PATTERN.find_iter(value) {
        expanded.push_str(&value[last..reference.start()]);
        expanded.push_str(&expand_reference(reference.as_str(), field)?);
        last = reference.end();
    }
    expanded.push_str(&value[last..]);
    Ok(expanded)
}

/// Expand a single `${...}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |var| match std::env::var(var) {
        Ok(val) => Ok(Some(val)),
        Err(_) => Err(UnsetVar(var.to_owned())),
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that was referenced but not set.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MDREPORT_TEST_DATE", "May 2026");
        }
        let result = expand_env("${MDREPORT_TEST_DATE}", "document.date").unwrap();
        assert_eq!(result, "May 2026");
        unsafe {
            std::env::remove_var("MDREPORT_TEST_DATE");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MDREPORT_TEST_UNSET");
        }
        let result = expand_env("${MDREPORT_TEST_UNSET:-weasyprint}", "pdf.command").unwrap();
        assert_eq!(result, "weasyprint");
    }

    #[test]
    fn test_expand_embedded() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MDREPORT_TEST_PRODUCT", "Intake");
        }
        let result = expand_env("Report for ${MDREPORT_TEST_PRODUCT}", "document.title").unwrap();
        assert_eq!(result, "Report for Intake");
        unsafe {
            std::env::remove_var("MDREPORT_TEST_PRODUCT");
        }
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MDREPORT_TEST_MISSING");
        }
        let err = expand_env("${MDREPORT_TEST_MISSING}", "document.title").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MDREPORT_TEST_MISSING"));
        assert!(err.to_string().contains("document.title"));
    }

    #[test]
    fn test_bare_dollar_kept_next_to_reference() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MDREPORT_TEST_UNIT", "page");
            std::env::remove_var("MDREPORT_TEST_SKIPPED");
        }
        let result = expand_env(
            "Costs $5 per ${MDREPORT_TEST_UNIT}, $MDREPORT_TEST_SKIPPED stays",
            "document.abstract",
        )
        .unwrap();
        assert_eq!(result, "Costs $5 per page, $MDREPORT_TEST_SKIPPED stays");
        unsafe {
            std::env::remove_var("MDREPORT_TEST_UNIT");
        }
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("plain", "f").unwrap(), "plain");
        assert_eq!(expand_env("costs $5", "f").unwrap(), "costs $5");
    }
}
