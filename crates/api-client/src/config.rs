use shared_types::AppConfig;

/// Parse `config.toml` contents. Invalid input falls back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
            AppConfig::default()
        }
    }
}

/// Resolve the API base URL: a non-empty override wins over the config file.
/// Trailing slashes are stripped.
pub fn resolve_base_url(config_contents: &str, override_url: Option<&str>) -> String {
    let base = match override_url.map(str::trim).filter(|u| !u.is_empty()) {
        Some(url) => url.to_string(),
        None => parse_config(config_contents).api.base_url,
    };
    base.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::DEFAULT_API_BASE_URL;

    #[test]
    fn invalid_toml_falls_back_to_default() {
        let config = parse_config("[api\nbase_url = ");
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn override_wins_over_file() {
        let file = "[api]\nbase_url = \"http://from-file:8080\"\n";
        assert_eq!(
            resolve_base_url(file, Some("https://override.example.com/")),
            "https://override.example.com"
        );
        assert_eq!(resolve_base_url(file, None), "http://from-file:8080");
    }

    #[test]
    fn blank_override_is_ignored() {
        assert_eq!(resolve_base_url("", Some("  ")), DEFAULT_API_BASE_URL);
    }
}
