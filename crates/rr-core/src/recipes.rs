//! Tip aggregation and recipe bookkeeping.
//!
//! These methods keep `rating` / `rating_count` consistent with `tips`; the
//! store only finds the recipe and hands over the clock reading.

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::models::{Recipe, RecipeDraft, Tip};
use crate::validation;

/// Whether an upsert created a new tip or rewrote the caller's existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipOutcome {
    Created,
    Updated,
}

impl Recipe {
    /// Builds a fresh, unrated recipe from a validated draft.
    pub fn from_draft(id: String, draft: RecipeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            region: draft.region,
            description: draft.description,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            servings: draft.servings,
            image: draft.image,
            ingredients: draft.ingredients,
            steps: draft.steps,
            published: draft.published,
            dietary_type: draft.dietary_type,
            rating: 0.0,
            rating_count: 0,
            favorite_count: 0,
            tips: Vec::new(),
        }
    }

    /// Replaces the editable fields. Tips and counters are left alone.
    pub fn apply_draft(&mut self, draft: RecipeDraft) {
        self.name = draft.name;
        self.region = draft.region;
        self.description = draft.description;
        self.prep_time = draft.prep_time;
        self.cook_time = draft.cook_time;
        self.servings = draft.servings;
        self.image = draft.image;
        self.ingredients = draft.ingredients;
        self.steps = draft.steps;
        self.published = draft.published;
        self.dietary_type = draft.dietary_type;
    }

    /// Mean and count over the current tips. No tips means 0 / 0.
    pub fn recompute_rating(&mut self) {
        let count = self.tips.len();
        let total: u32 = self.tips.iter().map(|t| u32::from(t.rating)).sum();
        self.rating = if count == 0 {
            0.0
        } else {
            f64::from(total) / count as f64
        };
        self.rating_count = count as u32;
    }

    pub fn tip_by_user(&self, user_id: &str) -> Option<&Tip> {
        self.tips.iter().find(|t| t.user_id == user_id)
    }

    /// Adds the user's tip, or rewrites it in place if they already left one.
    /// `id` is only used when a new tip is created.
    pub fn upsert_tip(
        &mut self,
        id: String,
        user_id: &str,
        user_name: &str,
        text: &str,
        rating: u8,
        now: DateTime<Utc>,
    ) -> Result<TipOutcome> {
        validation::tip(text, rating)?;

        let outcome = match self.tips.iter_mut().find(|t| t.user_id == user_id) {
            Some(existing) => {
                existing.tip = text.to_string();
                existing.rating = rating;
                existing.modified_at = now;
                TipOutcome::Updated
            }
            None => {
                self.tips.push(Tip {
                    id,
                    user_id: user_id.to_string(),
                    user_name: user_name.to_string(),
                    tip: text.to_string(),
                    rating,
                    created_at: now,
                    modified_at: now,
                });
                TipOutcome::Created
            }
        };
        self.recompute_rating();
        Ok(outcome)
    }

    pub fn delete_tip(&mut self, tip_id: &str) -> Result<Tip> {
        let idx = self
            .tips
            .iter()
            .position(|t| t.id == tip_id)
            .ok_or_else(|| AppError::not_found("Tip", tip_id))?;
        let removed = self.tips.remove(idx);
        self.recompute_rating();
        Ok(removed)
    }

    /// Moves the favorite counter by one, never below zero.
    pub fn adjust_favorite_count(&mut self, favorited: bool) {
        self.favorite_count = if favorited {
            self.favorite_count.saturating_add(1)
        } else {
            self.favorite_count.saturating_sub(1)
        };
    }
}

/// Next recipe id: one past the largest numeric id, ignoring non-numeric ones.
pub fn next_recipe_id<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    let max = ids
        .into_iter()
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}
