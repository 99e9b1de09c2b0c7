//! Runtime settings: built-in defaults overlaid with `RADAR_*` environment
//! variables (a `.env` file is honoured by `main`).

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Which canned identity the one-click login uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginAs {
    Anonymous,
    Member,
    Admin,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RadarConfig {
    pub fixtures_dir: PathBuf,
    pub login_as: LoginAs,
    pub trending_limit: usize,
}

impl RadarConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_env(None)
    }

    /// `vars` replaces the process environment; used by tests.
    fn from_env(vars: Option<HashMap<String, String>>) -> anyhow::Result<Self> {
        config::Config::builder()
            .set_default("fixtures_dir", "./data")?
            .set_default("login_as", "member")?
            .set_default("trending_limit", 8_i64)?
            .add_source(
                config::Environment::with_prefix("RADAR")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()
            .context("failed to assemble configuration")?
            .try_deserialize()
            .context("invalid RADAR_* configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn defaults_apply() {
        let cfg = RadarConfig::from_env(vars(&[])).unwrap();
        assert_eq!(cfg.fixtures_dir, PathBuf::from("./data"));
        assert_eq!(cfg.login_as, LoginAs::Member);
        assert_eq!(cfg.trending_limit, 8);
    }

    #[test]
    fn environment_overrides() {
        let cfg = RadarConfig::from_env(vars(&[
            ("RADAR_FIXTURES_DIR", "/srv/fixtures"),
            ("RADAR_LOGIN_AS", "admin"),
            ("RADAR_TRENDING_LIMIT", "3"),
        ]))
        .unwrap();
        assert_eq!(cfg.fixtures_dir, PathBuf::from("/srv/fixtures"));
        assert_eq!(cfg.login_as, LoginAs::Admin);
        assert_eq!(cfg.trending_limit, 3);
    }

    #[test]
    fn unknown_login_is_rejected() {
        assert!(RadarConfig::from_env(vars(&[("RADAR_LOGIN_AS", "root")])).is_err());
    }
}
