//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and file manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use fl_config::FieldlineConfig;
use fl_core::enums::UserRole;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://svc.example.com/api/"
timeout_secs = 30
user_agent = "fieldline-test"
"#,
        )?;

        let config: FieldlineConfig = Figment::from(Serialized::defaults(FieldlineConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://svc.example.com/api/");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.user_agent, "fieldline-test");
        assert_eq!(
            config.api.normalized_base_url().expect("valid url"),
            "https://svc.example.com/api"
        );
        Ok(())
    });
}

#[test]
fn loads_auth_actor_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[auth]
token = "tok-123"
user_id = 42
role = "SERVICE_PERSON"
"#,
        )?;

        let config: FieldlineConfig = Figment::from(Serialized::defaults(FieldlineConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.auth.has_token());
        let actor = config.auth.actor().expect("actor configured");
        assert_eq!(actor.id, 42);
        assert_eq!(actor.role, UserRole::ServicePerson);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".fieldline")?;
        jail.create_file(
            ".fieldline/config.toml",
            r#"
[general]
default_limit = 50
"#,
        )?;

        let config = FieldlineConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[api]\nbase_url = \"http://localhost:5000\"\n")?;

        let config = FieldlineConfig::load_from(std::path::Path::new("custom.toml"))
            .expect("config loads");
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.general.default_limit, 20);
        assert!(config.auth.actor().is_none());
        Ok(())
    });
}
