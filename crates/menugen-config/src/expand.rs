//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config field for error reporting.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("docs", "site.source_dir").unwrap(), "docs");
    }

    #[test]
    fn test_default_used_when_unset() {
        let value = expand_env("${MENUGEN_TEST_SURELY_UNSET:-pages}", "site.source_dir").unwrap();
        assert_eq!(value, "pages");
    }

    #[test]
    fn test_missing_var_is_error() {
        let err = expand_env("${MENUGEN_TEST_SURELY_UNSET}", "site.source_dir").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("site.source_dir"));
        assert!(msg.contains("MENUGEN_TEST_SURELY_UNSET"));
    }
}
