//! Browsing helpers: dietary filtering, search, trending and recommendations.
//!
//! Everything here reads recipes and never mutates them.

use std::collections::BTreeSet;

use crate::models::{DietaryPreference, DietaryType, Recipe, User};

pub const DEFAULT_TRENDING_LIMIT: usize = 8;

/// Cuisine name (lowercase) to the countries a search may use for it.
const COUNTRY_ALIASES: &[(&str, &[&str])] = &[
    ("italian", &["italy"]),
    ("indian", &["india"]),
    ("french", &["france"]),
    ("spanish", &["spain"]),
    ("mexican", &["mexico"]),
    ("japanese", &["japan"]),
    ("moroccan", &["morocco"]),
    ("kids", &["usa", "united states", "america"]),
];

fn aliases_for(region: &str) -> &'static [&'static str] {
    COUNTRY_ALIASES
        .iter()
        .find(|(cuisine, _)| *cuisine == region)
        .map(|(_, countries)| *countries)
        .unwrap_or(&[])
}

impl DietaryPreference {
    pub fn admits(self, dietary_type: DietaryType) -> bool {
        match self {
            DietaryPreference::All | DietaryPreference::NonVegetarian => true,
            DietaryPreference::Vegetarian => {
                matches!(dietary_type, DietaryType::Vegetarian | DietaryType::Vegan)
            }
            DietaryPreference::Vegan => dietary_type == DietaryType::Vegan,
        }
    }
}

pub fn published(recipes: &[Recipe]) -> impl Iterator<Item = &Recipe> {
    recipes.iter().filter(|r| r.published)
}

/// Published recipes the viewer's diet allows. Anonymous viewers see all.
pub fn for_viewer<'a>(recipes: &'a [Recipe], viewer: Option<&User>) -> Vec<&'a Recipe> {
    let pref = viewer.map(|u| u.dietary_preference).unwrap_or_default();
    published(recipes)
        .filter(|r| pref.admits(r.dietary_type))
        .collect()
}

/// Case-insensitive match on name, region, or a country the region maps to.
/// A blank query is not a search and yields `None`.
pub fn search<'a>(recipes: &'a [Recipe], query: &str) -> Option<Vec<&'a Recipe>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    Some(
        published(recipes)
            .filter(|r| matches_query(r, &query))
            .collect(),
    )
}

fn matches_query(recipe: &Recipe, query: &str) -> bool {
    let region = recipe.region.to_lowercase();
    recipe.name.to_lowercase().contains(query)
        || region.contains(query)
        || aliases_for(&region).iter().any(|country| country.contains(query))
}

/// Most-rated published recipes first. Ties keep catalogue order.
pub fn trending(recipes: &[Recipe], limit: usize) -> Vec<&Recipe> {
    let mut ranked: Vec<&Recipe> = published(recipes).collect();
    ranked.sort_by(|a, b| b.rating_count.cmp(&a.rating_count));
    ranked.truncate(limit);
    ranked
}

pub fn recommended<'a>(recipes: &'a [Recipe], user: &User) -> Vec<&'a Recipe> {
    if user.favorite_cuisines.is_empty() {
        return Vec::new();
    }
    for_viewer(recipes, Some(user))
        .into_iter()
        .filter(|r| user.favorite_cuisines.contains(&r.region))
        .collect()
}

/// Distinct regions of published recipes, sorted.
pub fn regions(recipes: &[Recipe]) -> Vec<String> {
    published(recipes)
        .map(|r| r.region.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Published recipes of exactly this region.
pub fn by_region<'a>(recipes: &'a [Recipe], region: &str) -> Vec<&'a Recipe> {
    published(recipes)
        .filter(|r| r.region == region)
        .collect()
}

pub fn favorites<'a>(recipes: &'a [Recipe], user: &User) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| user.is_favorite(&r.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeDraft;

    fn recipe(id: &str, name: &str, region: &str, diet: DietaryType, count: u32) -> Recipe {
        let mut r = Recipe::from_draft(
            id.into(),
            RecipeDraft {
                name: name.into(),
                region: region.into(),
                description: "A test recipe for discovery.".into(),
                prep_time: "5 mins".into(),
                cook_time: "5 mins".into(),
                servings: "1".into(),
                image: "https://images.example.com/x.jpg".into(),
                ingredients: vec!["Salt".into()],
                steps: vec!["Mix".into()],
                published: true,
                dietary_type: diet,
            },
        );
        r.rating_count = count;
        r
    }

    fn catalogue() -> Vec<Recipe> {
        let mut hidden = recipe("5", "Secret Curry", "Indian", DietaryType::Vegan, 99);
        hidden.published = false;
        let mut tagine = recipe("6", "Tagine", "Moroccan", DietaryType::Vegan, 0);
        tagine.published = false;
        vec![
            recipe("1", "Margherita", "Italian", DietaryType::Vegetarian, 10),
            recipe("2", "Butter Chicken", "Indian", DietaryType::NonVegetarian, 30),
            recipe("3", "Chana Masala", "Indian", DietaryType::Vegan, 30),
            recipe("4", "Mac and Cheese", "Kids", DietaryType::Vegetarian, 2),
            hidden,
            tagine,
        ]
    }

    fn ids(found: &[&Recipe]) -> Vec<String> {
        found.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn blank_query_is_not_a_search() {
        assert!(search(&catalogue(), "   ").is_none());
    }

    #[test]
    fn search_by_name_region_and_country() {
        let all = catalogue();
        assert_eq!(ids(&search(&all, "MARGH").unwrap()), ["1"]);
        assert_eq!(ids(&search(&all, "indian").unwrap()), ["2", "3"]);
        assert_eq!(ids(&search(&all, "italy").unwrap()), ["1"]);
        assert_eq!(ids(&search(&all, "united").unwrap()), ["4"]);
        assert!(search(&all, "secret").unwrap().is_empty());
    }

    #[test]
    fn dietary_filtering() {
        let all = catalogue();
        let mut user = crate::models::User {
            id: "u1".into(),
            name: "Al".into(),
            email: "al@example.com".into(),
            is_admin: false,
            favorites: Default::default(),
            favorite_cuisines: Default::default(),
            read_history: vec![],
            country: String::new(),
            dietary_preference: DietaryPreference::Vegetarian,
            suspended_until: None,
        };
        assert_eq!(ids(&for_viewer(&all, Some(&user))), ["1", "3", "4"]);
        user.dietary_preference = DietaryPreference::Vegan;
        assert_eq!(ids(&for_viewer(&all, Some(&user))), ["3"]);
        assert_eq!(for_viewer(&all, None).len(), 4);

        assert!(recommended(&all, &user).is_empty());
        user.favorite_cuisines.insert("Indian".into());
        assert_eq!(ids(&recommended(&all, &user)), ["3"]);
    }

    #[test]
    fn trending_is_stable_and_limited() {
        let all = catalogue();
        assert_eq!(ids(&trending(&all, 3)), ["2", "3", "1"]);
        assert_eq!(trending(&all, DEFAULT_TRENDING_LIMIT).len(), 4);
    }

    #[test]
    fn regions_are_distinct_and_sorted() {
        assert_eq!(regions(&catalogue()), ["Indian", "Italian", "Kids"]);
    }

    #[test]
    fn by_region_matches_exactly() {
        let all = catalogue();
        assert_eq!(ids(&by_region(&all, "Indian")), ["2", "3"]);
        assert!(by_region(&all, "indian").is_empty());
        assert!(by_region(&all, "Moroccan").is_empty());
    }
}
