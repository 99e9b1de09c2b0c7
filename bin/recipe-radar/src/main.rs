//! # Recipe Radar Binary
//!
//! Assembles the store from compile-time selected plugins, signs in through
//! the configured identity and prints the home-page and back-office summary.

mod config;

use std::sync::Arc;

use log::{info, warn};
use rr_core::{AnalyticsReport, Store, SystemClock, User};
use serde::Serialize;

use crate::config::{LoginAs, RadarConfig};

#[cfg(feature = "fixtures-json")]
use rr_core::FixtureSource;
#[cfg(feature = "fixtures-json")]
use rr_fixtures_json::JsonFixtureSource;

#[cfg(feature = "auth-mock")]
use rr_auth_mock::{AnonymousIdentity, FixtureIdentity};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    viewer: Option<&'a str>,
    trending: Vec<&'a str>,
    recommended: Vec<&'a str>,
    favorites: Vec<&'a str>,
    regions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analytics: Option<AnalyticsReport>,
}

fn names<'a>(recipes: impl IntoIterator<Item = &'a rr_core::Recipe>) -> Vec<&'a str> {
    recipes.into_iter().map(|r| r.name.as_str()).collect()
}

#[cfg(feature = "auth-mock")]
fn sign_in(store: &mut Store, login: LoginAs) -> Option<User> {
    let result = match login {
        LoginAs::Anonymous => store.sign_in(&AnonymousIdentity),
        LoginAs::Member => store.sign_in(&FixtureIdentity::member()),
        LoginAs::Admin => store.sign_in(&FixtureIdentity::admin()),
    };
    match result {
        Ok(user) => {
            info!("signed in as {} (admin={})", user.name, user.is_admin);
            Some(user)
        }
        Err(e) => {
            warn!("{e}; browsing anonymously");
            None
        }
    }
}

#[cfg(not(feature = "auth-mock"))]
fn sign_in(_store: &mut Store, login: LoginAs) -> Option<User> {
    if login != LoginAs::Anonymous {
        warn!("built without an identity plugin; browsing anonymously");
    }
    None
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = RadarConfig::load()?;

    // 1. Seed data
    #[cfg(feature = "fixtures-json")]
    let seed = JsonFixtureSource::new(&config.fixtures_dir).load()?;
    #[cfg(not(feature = "fixtures-json"))]
    let seed = rr_core::Seed::default();

    let mut store = Store::from_seed(seed, Arc::new(SystemClock))?;

    // 2. Identity
    let viewer = sign_in(&mut store, config.login_as);

    // 3. Summary
    let summary = Summary {
        viewer: viewer.as_ref().map(|u| u.name.as_str()),
        trending: names(store.trending(config.trending_limit)),
        recommended: viewer
            .as_ref()
            .map(|u| names(store.recommended(u)))
            .unwrap_or_default(),
        favorites: viewer
            .as_ref()
            .map(|u| names(store.favorite_recipes(u)))
            .unwrap_or_default(),
        regions: store.regions(),
        analytics: viewer
            .as_ref()
            .filter(|u| u.is_admin)
            .map(|_| store.analytics()),
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
