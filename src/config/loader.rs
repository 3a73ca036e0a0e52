//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::RouterConfig;
use crate::config::validation::validate_routes;
use crate::error::{ConfigError, ConfigurationError};

/// Environment variable carrying the base URL injected at build/deploy time.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content)?;
    validate_routes(&config.routes).map_err(ConfigurationError)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), routes = config.routes.len(), "Configuration file loaded");
    Ok(config)
}

/// `BASE_URL` when it is set and non-empty.
pub fn env_base_url() -> Option<String> {
    base_url_override(std::env::var(BASE_URL_ENV).ok())
}

/// Override the base URL from the environment.
pub fn apply_env_overrides(config: &mut RouterConfig) {
    if let Some(base) = env_base_url() {
        tracing::debug!(base_url = %base, "Base URL taken from environment");
        config.history.base_url = base;
    }
}

fn base_url_override(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::ValidationError;

    #[test]
    fn test_parse_reports_validation_errors() {
        let err = parse_config(
            r#"
            [[routes]]
            path = "/"
            name = "editor"
            view = "EditorPage"

            [[routes]]
            path = "/"
            name = "editor"
            view = "PreviewPage"
            "#,
        )
        .unwrap_err();

        match err {
            ConfigError::Invalid(ConfigurationError(errors)) => {
                assert_eq!(
                    errors,
                    vec![
                        ValidationError::DuplicatePath { path: "/".into() },
                        ValidationError::DuplicateName { name: "editor".into() },
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_syntax_error() {
        assert!(matches!(parse_config("[history"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/view-router.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_base_url_override_ignores_blank() {
        assert_eq!(base_url_override(None), None);
        assert_eq!(base_url_override(Some("  ".into())), None);
        assert_eq!(base_url_override(Some("/app/".into())), Some("/app/".into()));
    }
}
