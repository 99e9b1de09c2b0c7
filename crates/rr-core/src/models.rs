//! # Domain Models
//!
//! These structs represent the core entities of Recipe Radar.
//! Field names serialize in camelCase so the JSON fixtures and snapshots keep
//! the shape the frontend already consumes.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Diet classification of a single recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryType {
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    Vegan,
}

/// What a user wants to see on their feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DietaryPreference {
    #[default]
    All,
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    Vegan,
}

/// A recipe with its community tips.
///
/// `rating` and `rating_count` are derived from `tips` and are rewritten by
/// every tip mutation; see [`Recipe::recompute_rating`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// Cuisine, e.g. "Italian". Doubles as the browse category.
    pub region: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub published: bool,
    pub dietary_type: DietaryType,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub favorite_count: u32,
    #[serde(default)]
    pub tips: Vec<Tip>,
}

/// Free-text advice plus a 1-5 star rating. One per user per recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub tip: String,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// A community discussion group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: String,
    pub creator_id: String,
    pub creator_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub members: BTreeSet<String>,
    /// Newest first.
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: BTreeSet<String>,
    #[serde(default)]
    pub dislikes: BTreeSet<String>,
    /// Newest first.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A registered user (member or admin).
///
/// Suspension is never stored as a flag; ask [`User::is_suspended`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    /// Recipe ids.
    #[serde(default)]
    pub favorites: BTreeSet<String>,
    /// Region names.
    #[serde(default)]
    pub favorite_cuisines: BTreeSet<String>,
    /// Recipe ids in visit order; repeats allowed.
    #[serde(default)]
    pub read_history: Vec<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub dietary_preference: DietaryPreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspended_until: Option<DateTime<Utc>>,
}

/// Editable recipe fields, as submitted by the admin recipe form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    pub region: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default = "default_published")]
    pub published: bool,
    pub dietary_type: DietaryType,
}

fn default_published() -> bool {
    true
}

/// Partial profile update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub dietary_preference: Option<DietaryPreference>,
}

/// Which way a user reacts to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
}

/// Everything a store is seeded with at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    pub recipes: Vec<Recipe>,
    pub groups: Vec<Group>,
    pub users: Vec<User>,
}
