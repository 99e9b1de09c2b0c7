//! # rr-fixtures-json Implementation
//!
//! Loads the seed data from a directory of JSON fixtures:
//! `recipes.json`, `groups.json` and `users.json`, each a JSON array.
//!
//! Parsing is schema-checked by serde; the invariants across entities are
//! checked afterwards by `Store::from_seed`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rr_core::models::Seed;
use rr_core::traits::FixtureSource;
use serde::de::DeserializeOwned;

pub const RECIPES_FILE: &str = "recipes.json";
pub const GROUPS_FILE: &str = "groups.json";
pub const USERS_FILE: &str = "users.json";

pub struct JsonFixtureSource {
    dir: PathBuf,
}

impl JsonFixtureSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Parses one fixture file. A missing optional file yields an empty list.
    fn read_list<T: DeserializeOwned>(&self, file: &str, required: bool) -> anyhow::Result<Vec<T>> {
        let path = self.dir.join(file);
        if !path.exists() {
            if required {
                anyhow::bail!("fixture {} is missing", path.display());
            }
            log::warn!("fixture {} not found, starting empty", path.display());
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let items: Vec<T> = serde_json::from_str(&raw)
            .with_context(|| format!("malformed fixture {}", path.display()))?;
        log::debug!("loaded {} entries from {}", items.len(), path.display());
        Ok(items)
    }
}

impl FixtureSource for JsonFixtureSource {
    fn load(&self) -> anyhow::Result<Seed> {
        Ok(Seed {
            recipes: self.read_list(RECIPES_FILE, true)?,
            groups: self.read_list(GROUPS_FILE, false)?,
            users: self.read_list(USERS_FILE, false)?,
        })
    }
}
