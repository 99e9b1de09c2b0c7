//! User-side bookkeeping: favorites, suspension, profile edits.

use chrono::{DateTime, Duration, Utc};

use crate::error::{AppError, Result};
use crate::models::{ProfilePatch, User};

impl User {
    /// Active iff an expiry is set and still in the future.
    pub fn is_suspended(&self, now: DateTime<Utc>) -> bool {
        self.suspended_until.is_some_and(|until| until > now)
    }

    pub fn suspend(&mut self, days: u32, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        if days == 0 {
            return Err(AppError::invalid("suspension must last at least one day"));
        }
        let until = now + Duration::days(i64::from(days));
        self.suspended_until = Some(until);
        Ok(until)
    }

    pub fn unsuspend(&mut self) {
        self.suspended_until = None;
    }

    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.favorites.contains(recipe_id)
    }

    /// Flips the favorite mark. Returns `true` when the recipe is now a favorite.
    pub fn toggle_favorite(&mut self, recipe_id: &str) -> bool {
        if self.favorites.remove(recipe_id) {
            false
        } else {
            self.favorites.insert(recipe_id.to_string());
            true
        }
    }

    pub fn apply_profile(&mut self, patch: ProfilePatch) -> Result<()> {
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(AppError::invalid("name cannot be empty"));
            }
        }
        if let Some(email) = &patch.email {
            if !email.contains('@') {
                return Err(AppError::invalid("email must be a valid address"));
            }
        }

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
        if let Some(pref) = patch.dietary_preference {
            self.dietary_preference = pref;
        }
        Ok(())
    }
}
