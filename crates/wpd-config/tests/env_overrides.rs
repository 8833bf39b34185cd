//! Integration tests for environment variable overrides.
//!
//! `WPD_` prefixed variables with `__` nesting must beat every TOML layer.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use wpd_config::WpdConfig;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("WPD_DIRECTORY__TIMEOUT_SECS", "5");
        jail.set_env("WPD_ADVISOR__COMPAT_LOOKAHEAD_STEPS", "2");

        let config: WpdConfig = Figment::from(Serialized::defaults(WpdConfig::default()))
            .merge(Env::prefixed("WPD_").split("__"))
            .extract()?;

        assert_eq!(config.directory.timeout_secs, 5);
        assert_eq!(config.advisor.compat_lookahead_steps, 2);
        Ok(())
    });
}

#[test]
fn env_vars_override_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "wpd.toml",
            r#"
[directory]
api_base = "http://from-toml"
"#,
        )?;
        jail.set_env("WPD_DIRECTORY__API_BASE", "http://from-env");

        let config: WpdConfig = Figment::from(Serialized::defaults(WpdConfig::default()))
            .merge(Toml::file("wpd.toml"))
            .merge(Env::prefixed("WPD_").split("__"))
            .extract()?;

        assert_eq!(config.directory.api_base, "http://from-env");
        Ok(())
    });
}

#[test]
fn unprefixed_env_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("DIRECTORY__TIMEOUT_SECS", "99");

        let config: WpdConfig = Figment::from(Serialized::defaults(WpdConfig::default()))
            .merge(Env::prefixed("WPD_").split("__"))
            .extract()?;

        assert_eq!(config.directory.timeout_secs, 10);
        Ok(())
    });
}
