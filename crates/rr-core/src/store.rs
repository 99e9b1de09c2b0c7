//! # Store
//!
//! The in-memory aggregate holding every recipe, group and user.
//!
//! Each mutation takes `&mut self`, runs to completion, and hands back a
//! cloned snapshot of what changed. A failed mutation leaves the store as it
//! was: lookups and validation happen before anything is written.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use uuid::Uuid;

use crate::analytics::{self, AnalyticsReport};
use crate::cooking::CookingFlow;
use crate::discovery;
use crate::error::{AppError, Result};
use crate::models::{
    Comment, Group, Post, ProfilePatch, Reaction, Recipe, RecipeDraft, Seed, Tip, User,
};
use crate::recipes::{next_recipe_id, TipOutcome};
use crate::traits::{Clock, IdentityProvider};
use crate::validation;

fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::now_v7().simple())
}

pub struct Store {
    recipes: Vec<Recipe>,
    groups: Vec<Group>,
    users: Vec<User>,
    clock: Arc<dyn Clock>,
}

impl Store {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            recipes: Vec::new(),
            groups: Vec::new(),
            users: Vec::new(),
            clock,
        }
    }

    /// Builds a store from seed data, rejecting anything that would break an
    /// invariant. Stored ratings are recomputed from the tips.
    pub fn from_seed(seed: Seed, clock: Arc<dyn Clock>) -> Result<Self> {
        check_seed(&seed)?;

        let mut recipes = seed.recipes;
        for recipe in &mut recipes {
            let (rating, count) = (recipe.rating, recipe.rating_count);
            recipe.recompute_rating();
            if (recipe.rating - rating).abs() > f64::EPSILON || recipe.rating_count != count {
                warn!(
                    "recipe {} seeded with rating {rating}/{count}, recomputed {}/{}",
                    recipe.id, recipe.rating, recipe.rating_count
                );
            }
        }

        info!(
            "store seeded: {} recipes, {} groups, {} users",
            recipes.len(),
            seed.groups.len(),
            seed.users.len()
        );
        Ok(Self {
            recipes,
            groups: seed.groups,
            users: seed.users,
            clock,
        })
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // ── Lookups ─────────────────────────────────────────────────────────────

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn recipe(&self, id: &str) -> Result<&Recipe> {
        self.recipes
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("Recipe", id))
    }

    pub fn group(&self, id: &str) -> Result<&Group> {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| AppError::not_found("Group", id))
    }

    pub fn user(&self, id: &str) -> Result<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found("User", id))
    }

    fn recipe_mut(&mut self, id: &str) -> Result<&mut Recipe> {
        self.recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("Recipe", id))
    }

    fn group_mut(&mut self, id: &str) -> Result<&mut Group> {
        self.groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| AppError::not_found("Group", id))
    }

    fn user_mut(&mut self, id: &str) -> Result<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::not_found("User", id))
    }

    // ── Sign-in ─────────────────────────────────────────────────────────────

    /// Resolves the acting user through `provider`. Unknown identities are
    /// registered from the provider's profile; suspended users are refused.
    pub fn sign_in(&mut self, provider: &dyn IdentityProvider) -> Result<User> {
        let profile = provider
            .current_user()
            .ok_or_else(|| AppError::Unauthorized("nobody is signed in".into()))?;
        let now = self.now();

        if let Ok(known) = self.user(&profile.id) {
            if known.is_suspended(now) {
                return Err(AppError::Unauthorized(format!(
                    "user {} is suspended",
                    known.id
                )));
            }
            debug!("user {} signed in", known.id);
            return Ok(known.clone());
        }

        if profile.is_suspended(now) {
            return Err(AppError::Unauthorized(format!(
                "user {} is suspended",
                profile.id
            )));
        }
        info!("registering user {} on first sign-in", profile.id);
        self.users.push(profile.clone());
        Ok(profile)
    }

    // ── Recipes ─────────────────────────────────────────────────────────────

    pub fn add_recipe(&mut self, draft: RecipeDraft) -> Result<Recipe> {
        validation::recipe(&draft)?;
        let id = next_recipe_id(self.recipes.iter().map(|r| r.id.as_str()));
        let recipe = Recipe::from_draft(id, draft);
        info!("recipe {} added: {}", recipe.id, recipe.name);
        self.recipes.push(recipe.clone());
        Ok(recipe)
    }

    pub fn update_recipe(&mut self, id: &str, draft: RecipeDraft) -> Result<Recipe> {
        validation::recipe(&draft)?;
        let recipe = self.recipe_mut(id)?;
        recipe.apply_draft(draft);
        info!("recipe {id} updated");
        Ok(recipe.clone())
    }

    pub fn delete_recipe(&mut self, id: &str) -> Result<Recipe> {
        let idx = self
            .recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("Recipe", id))?;
        info!("recipe {id} deleted");
        Ok(self.recipes.remove(idx))
    }

    pub fn toggle_publish(&mut self, id: &str) -> Result<Recipe> {
        let recipe = self.recipe_mut(id)?;
        recipe.published = !recipe.published;
        info!("recipe {id} published={}", recipe.published);
        Ok(recipe.clone())
    }

    // ── Tips ────────────────────────────────────────────────────────────────

    /// Adds the user's tip or rewrites the one they already left, then
    /// recomputes the recipe's rating.
    pub fn upsert_tip(
        &mut self,
        recipe_id: &str,
        user_id: &str,
        user_name: &str,
        text: &str,
        rating: u8,
    ) -> Result<Recipe> {
        let now = self.now();
        let recipe = self.recipe_mut(recipe_id)?;
        let outcome = recipe.upsert_tip(new_id("tip"), user_id, user_name, text, rating, now)?;
        debug!(
            "tip {} on recipe {recipe_id} by {user_id}: rating now {:.2} over {}",
            match outcome {
                TipOutcome::Created => "created",
                TipOutcome::Updated => "updated",
            },
            recipe.rating,
            recipe.rating_count
        );
        Ok(recipe.clone())
    }

    pub fn delete_tip(&mut self, recipe_id: &str, tip_id: &str) -> Result<Recipe> {
        let recipe = self.recipe_mut(recipe_id)?;
        let removed = recipe.delete_tip(tip_id)?;
        info!(
            "tip {tip_id} by {} removed from recipe {recipe_id}",
            removed.user_id
        );
        Ok(recipe.clone())
    }

    /// Every tip a user wrote, paired with the owning recipe id.
    pub fn tips_by_user(&self, user_id: &str) -> Vec<(String, Tip)> {
        self.recipes
            .iter()
            .flat_map(|r| {
                r.tips
                    .iter()
                    .filter(|t| t.user_id == user_id)
                    .map(move |t| (r.id.clone(), t.clone()))
            })
            .collect()
    }

    // ── Favorites & history ─────────────────────────────────────────────────

    /// Flips the recipe in the user's favorites and moves the recipe's
    /// counter by one. Returns the updated user and recipe.
    pub fn toggle_favorite(&mut self, user_id: &str, recipe_id: &str) -> Result<(User, Recipe)> {
        self.recipe(recipe_id)?;
        let user = self.user_mut(user_id)?;
        let favorited = user.toggle_favorite(recipe_id);
        let user = user.clone();

        let recipe = self.recipe_mut(recipe_id)?;
        recipe.adjust_favorite_count(favorited);
        debug!(
            "user {user_id} favorite {recipe_id}={favorited}, count {}",
            recipe.favorite_count
        );
        Ok((user, recipe.clone()))
    }

    pub fn record_visit(&mut self, user_id: &str, recipe_id: &str) -> Result<User> {
        self.recipe(recipe_id)?;
        let user = self.user_mut(user_id)?;
        user.read_history.push(recipe_id.to_string());
        Ok(user.clone())
    }

    pub fn start_cooking(&self, recipe_id: &str) -> Result<CookingFlow> {
        CookingFlow::start(self.recipe(recipe_id)?)
    }

    // ── Users ───────────────────────────────────────────────────────────────

    pub fn update_profile(&mut self, user_id: &str, patch: ProfilePatch) -> Result<User> {
        let user = self.user_mut(user_id)?;
        user.apply_profile(patch)?;
        Ok(user.clone())
    }

    pub fn set_favorite_cuisines<I, S>(&mut self, user_id: &str, cuisines: I) -> Result<User>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let user = self.user_mut(user_id)?;
        user.favorite_cuisines = cuisines.into_iter().map(Into::into).collect();
        Ok(user.clone())
    }

    pub fn suspend_user(&mut self, user_id: &str, days: u32) -> Result<User> {
        let now = self.now();
        let user = self.user_mut(user_id)?;
        let until = user.suspend(days, now)?;
        info!("user {user_id} suspended until {until}");
        Ok(user.clone())
    }

    pub fn unsuspend_user(&mut self, user_id: &str) -> Result<User> {
        let user = self.user_mut(user_id)?;
        user.unsuspend();
        info!("user {user_id} unsuspended");
        Ok(user.clone())
    }

    pub fn is_suspended(&self, user_id: &str) -> Result<bool> {
        Ok(self.user(user_id)?.is_suspended(self.now()))
    }

    pub fn toggle_admin(&mut self, user_id: &str) -> Result<User> {
        let user = self.user_mut(user_id)?;
        user.is_admin = !user.is_admin;
        info!("user {user_id} admin={}", user.is_admin);
        Ok(user.clone())
    }

    pub fn delete_user(&mut self, user_id: &str) -> Result<User> {
        let idx = self
            .users
            .iter()
            .position(|u| u.id == user_id)
            .ok_or_else(|| AppError::not_found("User", user_id))?;
        info!("user {user_id} deleted");
        Ok(self.users.remove(idx))
    }

    // ── Community ───────────────────────────────────────────────────────────

    pub fn create_group(&mut self, name: &str, description: &str, creator: &User) -> Result<Group> {
        validation::group(name, description)?;
        let group = Group {
            id: new_id("group"),
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            creator_id: creator.id.clone(),
            creator_name: creator.name.clone(),
            created_at: self.now(),
            members: [creator.id.clone()].into_iter().collect(),
            posts: Vec::new(),
        };
        info!("group {} created by {}", group.id, creator.id);
        self.groups.insert(0, group.clone());
        Ok(group)
    }

    pub fn delete_group(&mut self, group_id: &str) -> Result<Group> {
        let idx = self
            .groups
            .iter()
            .position(|g| g.id == group_id)
            .ok_or_else(|| AppError::not_found("Group", group_id))?;
        info!("group {group_id} deleted");
        Ok(self.groups.remove(idx))
    }

    /// Returns the group and whether membership changed.
    pub fn join_group(&mut self, group_id: &str, user_id: &str) -> Result<(Group, bool)> {
        let group = self.group_mut(group_id)?;
        let joined = group.join(user_id);
        if joined {
            debug!("user {user_id} joined group {group_id}");
        }
        Ok((group.clone(), joined))
    }

    pub fn leave_group(&mut self, group_id: &str, user_id: &str) -> Result<(Group, bool)> {
        let group = self.group_mut(group_id)?;
        let left = group.leave(user_id);
        if left {
            debug!("user {user_id} left group {group_id}");
        }
        Ok((group.clone(), left))
    }

    /// Known users among the group's members. Deleted users are skipped.
    pub fn group_members(&self, group_id: &str) -> Result<Vec<User>> {
        let group = self.group(group_id)?;
        Ok(self
            .users
            .iter()
            .filter(|u| group.is_member(&u.id))
            .cloned()
            .collect())
    }

    pub fn add_post(&mut self, group_id: &str, content: &str, author: &User) -> Result<Post> {
        validation::post(content)?;
        let now = self.now();
        let group = self.group_mut(group_id)?;
        let post = Post::new(new_id("post"), &author.id, &author.name, content.trim(), now);
        debug!("post {} added to group {group_id}", post.id);
        group.add_post(post.clone());
        Ok(post)
    }

    pub fn add_comment(
        &mut self,
        group_id: &str,
        post_id: &str,
        content: &str,
        author: &User,
    ) -> Result<Comment> {
        validation::comment(content)?;
        let now = self.now();
        let post = self.group_mut(group_id)?.post_mut(post_id)?;
        let comment = Comment {
            id: new_id("comment"),
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            content: content.trim().to_string(),
            created_at: now,
        };
        post.add_comment(comment.clone());
        debug!("comment {} added to post {post_id}", comment.id);
        Ok(comment)
    }

    pub fn toggle_reaction(
        &mut self,
        group_id: &str,
        post_id: &str,
        user_id: &str,
        reaction: Reaction,
    ) -> Result<Post> {
        let post = self.group_mut(group_id)?.post_mut(post_id)?;
        post.toggle_reaction(user_id, reaction);
        debug!(
            "post {post_id}: {} likes, {} dislikes",
            post.likes.len(),
            post.dislikes.len()
        );
        Ok(post.clone())
    }

    // ── Discovery & analytics ───────────────────────────────────────────────

    pub fn search(&self, query: &str) -> Option<Vec<&Recipe>> {
        discovery::search(&self.recipes, query)
    }

    pub fn browse(&self, viewer: Option<&User>) -> Vec<&Recipe> {
        discovery::for_viewer(&self.recipes, viewer)
    }

    pub fn trending(&self, limit: usize) -> Vec<&Recipe> {
        discovery::trending(&self.recipes, limit)
    }

    pub fn recommended(&self, user: &User) -> Vec<&Recipe> {
        discovery::recommended(&self.recipes, user)
    }

    pub fn favorite_recipes(&self, user: &User) -> Vec<&Recipe> {
        discovery::favorites(&self.recipes, user)
    }

    pub fn regions(&self) -> Vec<String> {
        discovery::regions(&self.recipes)
    }

    pub fn by_region(&self, region: &str) -> Vec<&Recipe> {
        discovery::by_region(&self.recipes, region)
    }

    pub fn analytics(&self) -> AnalyticsReport {
        analytics::report(&self.recipes, &self.users)
    }
}

fn unique<'a>(entity: &str, ids: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::Conflict(format!("duplicate {entity} id {id}")));
        }
    }
    Ok(())
}

/// Rejects seed data the mutation API could never have produced.
fn check_seed(seed: &Seed) -> Result<()> {
    unique("recipe", seed.recipes.iter().map(|r| r.id.as_str()))?;
    unique("group", seed.groups.iter().map(|g| g.id.as_str()))?;
    unique("user", seed.users.iter().map(|u| u.id.as_str()))?;

    for recipe in &seed.recipes {
        unique("tip", recipe.tips.iter().map(|t| t.id.as_str()))?;
        let mut authors = HashSet::new();
        for tip in &recipe.tips {
            validation::tip(&tip.tip, tip.rating).map_err(|e| {
                AppError::InvalidInput(format!("recipe {} tip {}: {e}", recipe.id, tip.id))
            })?;
            if !authors.insert(tip.user_id.as_str()) {
                return Err(AppError::Conflict(format!(
                    "recipe {} has more than one tip from user {}",
                    recipe.id, tip.user_id
                )));
            }
        }
    }

    for group in &seed.groups {
        unique("post", group.posts.iter().map(|p| p.id.as_str()))?;
        for post in &group.posts {
            unique("comment", post.comments.iter().map(|c| c.id.as_str()))?;
            if let Some(both) = post.likes.intersection(&post.dislikes).next() {
                return Err(AppError::InvalidInput(format!(
                    "post {} is both liked and disliked by {both}",
                    post.id
                )));
            }
        }
    }
    Ok(())
}
