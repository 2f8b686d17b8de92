// ============================================================================
// mpf-component-core/src/path_expansion.rs
// ============================================================================
//
// PATH EXPANSION: Environment variable expansion in paths
//
// Component configuration often refers to model or plugin files relative to
// an install location given by an environment variable, e.g.
// `$MPF_HOME/plugins/models` or `${MPF_HOME}/plugins/models`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// `${NAME}` or `$NAME`, where NAME is a run of letters, digits and underscores.
static VAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?:\{([A-Za-z0-9_]+)\}|([A-Za-z0-9_]+))").expect("valid env var pattern")
});

/// Replaces `$NAME` and `${NAME}` with the value of the environment variable
/// `NAME`. Tokens naming unset variables are left as written.
#[must_use]
pub fn expand_env_vars(path: &str) -> String {
    expand_with(path, |name| std::env::var(name).ok())
}

/// Like [`expand_env_vars`], with variable values supplied by `lookup`.
pub fn expand_with<F>(path: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    VAR_PATTERN
        .replace_all(path, |caps: &Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            lookup(name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "MPF_HOME" => Some("/opt/mpf".to_string()),
            "MODEL" => Some("yolo".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_expands_both_forms() {
        assert_eq!(expand_with("$MPF_HOME/plugins", lookup), "/opt/mpf/plugins");
        assert_eq!(expand_with("${MPF_HOME}/plugins", lookup), "/opt/mpf/plugins");
        assert_eq!(
            expand_with("${MPF_HOME}/models/$MODEL.cfg", lookup),
            "/opt/mpf/models/yolo.cfg"
        );
    }

    #[test]
    fn test_unset_variables_are_kept() {
        assert_eq!(expand_with("$UNSET/dir", lookup), "$UNSET/dir");
        assert_eq!(expand_with("${UNSET}/dir", lookup), "${UNSET}/dir");
    }

    #[test]
    fn test_longest_name_wins() {
        // $MPF_HOMEDIR is a different variable than $MPF_HOME.
        assert_eq!(expand_with("$MPF_HOMEDIR/x", lookup), "$MPF_HOMEDIR/x");
    }

    #[test]
    fn test_plain_paths_are_unchanged() {
        assert_eq!(expand_with("/tmp/no/vars", lookup), "/tmp/no/vars");
        assert_eq!(expand_with("cost$", lookup), "cost$");
    }
}
