//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use wpd_config::WpdConfig;

#[test]
fn loads_directory_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "wpd.toml",
            r#"
[directory]
api_base = "http://localhost:8080"
web_base = "http://localhost:8081"
timeout_secs = 3
user_agent = "wpd-test/0.0"
"#,
        )?;

        let config: WpdConfig = Figment::from(Serialized::defaults(WpdConfig::default()))
            .merge(Toml::file("wpd.toml"))
            .extract()?;

        assert_eq!(config.directory.api_base, "http://localhost:8080");
        assert_eq!(config.directory.web_base, "http://localhost:8081");
        assert_eq!(config.directory.timeout_secs, 3);
        assert_eq!(config.directory.user_agent, "wpd-test/0.0");
        Ok(())
    });
}

#[test]
fn loads_advisor_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "wpd.toml",
            r#"
[advisor]
maintenance_window_months = 12
compat_lookahead_steps = 1
"#,
        )?;

        let config: WpdConfig = Figment::from(Serialized::defaults(WpdConfig::default()))
            .merge(Toml::file("wpd.toml"))
            .extract()?;

        assert_eq!(config.advisor.maintenance_window_months, 12);
        assert_eq!(config.advisor.compat_lookahead_steps, 1);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults_for_the_rest() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "wpd.toml",
            r#"
[directory]
timeout_secs = 30
"#,
        )?;

        let config: WpdConfig = Figment::from(Serialized::defaults(WpdConfig::default()))
            .merge(Toml::file("wpd.toml"))
            .extract()?;

        assert_eq!(config.directory.timeout_secs, 30);
        assert_eq!(config.directory.api_base, "https://api.wordpress.org");
        assert_eq!(config.advisor.maintenance_window_months, 24);
        Ok(())
    });
}
