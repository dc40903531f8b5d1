//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// `field` names the config key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(
            expand_env("build/sidebars.json", "export.path").unwrap(),
            "build/sidebars.json"
        );
    }

    #[test]
    fn test_expands_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NAVTREE_EXPAND_TEST_DIR", "site");
        }

        assert_eq!(
            expand_env("${NAVTREE_EXPAND_TEST_DIR}/sidebars.json", "export.path").unwrap(),
            "site/sidebars.json"
        );

        unsafe {
            std::env::remove_var("NAVTREE_EXPAND_TEST_DIR");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NAVTREE_EXPAND_TEST_UNSET");
        }

        assert_eq!(
            expand_env("${NAVTREE_EXPAND_TEST_UNSET:-out}/s.json", "export.path").unwrap(),
            "out/s.json"
        );
    }

    #[test]
    fn test_missing_var_names_field_and_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NAVTREE_EXPAND_TEST_MISSING");
        }

        let err = expand_env("${NAVTREE_EXPAND_TEST_MISSING}", "sidebars.source").unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("sidebars.source"), "got: {msg}");
        assert!(msg.contains("NAVTREE_EXPAND_TEST_MISSING"), "got: {msg}");
    }
}
