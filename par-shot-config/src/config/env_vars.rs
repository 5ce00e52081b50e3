//! Environment variable allowlist and path expansion for the output directory.
//!
//! Only allowlisted variables (and `PAR_SHOT_*` prefixed ones) are resolved so
//! that a shared config file cannot smuggle arbitrary environment values into
//! the paths screenshots are written to.

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Matches `${VAR_NAME}` or `${VAR_NAME:-default_value}`.
static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?}")
        .expect("env-var substitution regex is a compile-time constant and must be valid")
});

/// Environment variables that may be substituted into config paths.
pub const ALLOWED_ENV_VARS: &[&str] = &[
    "HOME",
    "USER",
    "USERNAME",
    "USERPROFILE",
    "XDG_CONFIG_HOME",
    "XDG_DATA_HOME",
    "XDG_PICTURES_DIR",
    "XDG_DOWNLOAD_DIR",
    "TMPDIR",
    "TEMP",
    "TMP",
    "APPDATA",
    "LOCALAPPDATA",
];

/// A variable is allowed if it is in [`ALLOWED_ENV_VARS`] or starts with `PAR_SHOT_`.
pub fn is_env_var_allowed(var_name: &str) -> bool {
    ALLOWED_ENV_VARS.contains(&var_name) || var_name.starts_with("PAR_SHOT_")
}

/// Substitute `${VAR}` patterns with environment values.
///
/// - Unset variables fall back to the `:-default` text when present,
///   otherwise the placeholder is left unchanged.
/// - `$${VAR}` is an escape and produces the literal `${VAR}`.
/// - Non-allowlisted variables are left as-is and a warning is logged.
pub fn substitute_variables(input: &str) -> String {
    let escaped_placeholder = "\x00ESC_DOLLAR\x00";
    let working = input.replace("$${", escaped_placeholder);

    let result = ENV_VAR_PATTERN.replace_all(&working, |caps: &regex::Captures| {
        let var_name = &caps[1];

        if !is_env_var_allowed(var_name) {
            log::warn!("Config references non-allowlisted environment variable ${{{var_name}}}, skipped");
            return caps[0].to_string();
        }

        match std::env::var(var_name) {
            Ok(val) => val,
            Err(_) => caps
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| caps[0].to_string()),
        }
    });

    result.replace(escaped_placeholder, "${")
}

/// Expand allow-listed variables and a leading `~` into a filesystem path.
pub fn expand_path(raw: &str) -> PathBuf {
    let substituted = substitute_variables(raw.trim());

    if substituted == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = substituted
        .strip_prefix("~/")
        .or_else(|| substituted.strip_prefix("~\\"))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    PathBuf::from(substituted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaped_dollar_is_literal() {
        assert_eq!(substitute_variables("$${HOME}/x"), "${HOME}/x");
    }

    #[test]
    fn test_non_allowlisted_var_left_untouched() {
        assert_eq!(
            substitute_variables("${AWS_SECRET_ACCESS_KEY}/shots"),
            "${AWS_SECRET_ACCESS_KEY}/shots"
        );
    }

    #[test]
    fn test_unset_allowlisted_var_uses_default() {
        let out = substitute_variables("${PAR_SHOT_SURELY_UNSET_VAR:-/tmp/shots}");
        assert_eq!(out, "/tmp/shots");
    }

    #[test]
    fn test_expand_tilde_uses_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/Downloads"), home.join("Downloads"));
            assert_eq!(expand_path("~"), home);
        }
    }

    #[test]
    fn test_plain_path_passes_through() {
        assert_eq!(expand_path("/var/tmp/out"), PathBuf::from("/var/tmp/out"));
    }
}
