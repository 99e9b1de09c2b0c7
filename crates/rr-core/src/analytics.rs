//! Back-office numbers: totals, recipes per region, visit rankings.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Recipe, User};

pub const TOP_VISITED_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub total_recipes: usize,
    pub total_users: usize,
    pub total_tips: usize,
    pub recipes_by_region: Vec<Count>,
    pub top_visited_recipes: Vec<Count>,
    pub visits_by_cuisine: Vec<Count>,
}

/// Highest first; equal counts ordered by name so reports are reproducible.
fn ranked(counts: HashMap<String, u64>) -> Vec<Count> {
    let mut out: Vec<Count> = counts
        .into_iter()
        .map(|(name, value)| Count { name, value })
        .collect();
    out.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    out
}

pub fn report(recipes: &[Recipe], users: &[User]) -> AnalyticsReport {
    let by_id: HashMap<&str, &Recipe> = recipes.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut per_region: HashMap<String, u64> = HashMap::new();
    for recipe in recipes {
        *per_region.entry(recipe.region.clone()).or_default() += 1;
    }

    let mut visits: HashMap<&str, u64> = HashMap::new();
    for id in users.iter().flat_map(|u| u.read_history.iter()) {
        *visits.entry(id.as_str()).or_default() += 1;
    }

    let mut per_cuisine: HashMap<String, u64> = HashMap::new();
    for (id, count) in &visits {
        if let Some(recipe) = by_id.get(id) {
            *per_cuisine.entry(recipe.region.clone()).or_default() += count;
        }
    }

    let label = |id: &str| match by_id.get(id) {
        Some(recipe) => recipe.name.clone(),
        None => format!("Recipe {id}"),
    };
    // Ranked per id, labelled afterwards; equal counts ordered by id.
    let mut per_recipe: Vec<(&str, u64)> = visits.into_iter().collect();
    per_recipe.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    per_recipe.truncate(TOP_VISITED_LIMIT);
    let top_visited_recipes = per_recipe
        .into_iter()
        .map(|(id, value)| Count { name: label(id), value })
        .collect();

    AnalyticsReport {
        total_recipes: recipes.len(),
        total_users: users.len(),
        total_tips: recipes.iter().map(|r| r.tips.len()).sum(),
        recipes_by_region: ranked(per_region),
        top_visited_recipes,
        visits_by_cuisine: ranked(per_cuisine),
    }
}
