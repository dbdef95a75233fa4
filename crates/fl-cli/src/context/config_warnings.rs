use fl_config::FieldlineConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &FieldlineConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &FieldlineConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() && has_env_prefix(&env_keys, "FIELDLINE_API") {
        warnings.push(
            "API config appears default while FIELDLINE_API* env vars exist. Use double underscores (example: FIELDLINE_API__BASE_URL)."
                .to_string(),
        );
    }

    if config.auth.actor().is_none()
        && (has_env_prefix(&env_keys, "FIELDLINE_AUTH_USER")
            || has_env_prefix(&env_keys, "FIELDLINE_AUTH_ROLE"))
    {
        warnings.push(
            "Auth actor appears default while FIELDLINE_AUTH_* env vars exist. Use double underscores (example: FIELDLINE_AUTH__ROLE)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
