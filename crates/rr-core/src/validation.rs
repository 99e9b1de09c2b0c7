//! Form validation shared by every mutation that takes user text.
//!
//! Lengths are counted in chars on the trimmed input.

use crate::error::{AppError, Result};
use crate::models::RecipeDraft;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub const GROUP_NAME_LEN: (usize, usize) = (3, 50);
pub const GROUP_DESCRIPTION_LEN: (usize, usize) = (10, 200);
pub const POST_MAX_LEN: usize = 1000;
pub const COMMENT_MAX_LEN: usize = 500;

pub const RECIPE_NAME_MIN: usize = 3;
pub const RECIPE_REGION_MIN: usize = 2;
pub const RECIPE_DESCRIPTION_MIN: usize = 10;

fn char_len(s: &str) -> usize {
    s.trim().chars().count()
}

fn required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid(format!("{field} is required")));
    }
    Ok(())
}

fn bounded(field: &str, value: &str, (min, max): (usize, usize)) -> Result<()> {
    let len = char_len(value);
    if len < min {
        return Err(AppError::invalid(format!(
            "{field} must be at least {min} characters long"
        )));
    }
    if len > max {
        return Err(AppError::invalid(format!(
            "{field} cannot exceed {max} characters"
        )));
    }
    Ok(())
}

pub fn rating(value: u8) -> Result<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(AppError::invalid(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {value}"
        )));
    }
    Ok(())
}

pub fn tip(text: &str, value: u8) -> Result<()> {
    rating(value)?;
    required("tip", text)
}

pub fn group(name: &str, description: &str) -> Result<()> {
    bounded("group name", name, GROUP_NAME_LEN)?;
    bounded("description", description, GROUP_DESCRIPTION_LEN)
}

pub fn post(content: &str) -> Result<()> {
    bounded("post", content, (1, POST_MAX_LEN))
}

pub fn comment(content: &str) -> Result<()> {
    bounded("comment", content, (1, COMMENT_MAX_LEN))
}

pub fn recipe(draft: &RecipeDraft) -> Result<()> {
    bounded("name", &draft.name, (RECIPE_NAME_MIN, usize::MAX))?;
    bounded("region", &draft.region, (RECIPE_REGION_MIN, usize::MAX))?;
    bounded("description", &draft.description, (RECIPE_DESCRIPTION_MIN, usize::MAX))?;
    required("prep time", &draft.prep_time)?;
    required("cook time", &draft.cook_time)?;
    required("servings", &draft.servings)?;
    image_url(&draft.image)?;

    if draft.ingredients.is_empty() {
        return Err(AppError::invalid("at least one ingredient is required"));
    }
    if draft.ingredients.iter().any(|i| i.trim().is_empty()) {
        return Err(AppError::invalid("ingredient cannot be empty"));
    }
    if draft.steps.is_empty() {
        return Err(AppError::invalid("at least one step is required"));
    }
    if draft.steps.iter().any(|s| s.trim().is_empty()) {
        return Err(AppError::invalid("step cannot be empty"));
    }
    Ok(())
}

fn image_url(url: &str) -> Result<()> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => Ok(()),
        _ => Err(AppError::invalid("image must be a valid image URL")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DietaryType;

    fn draft() -> RecipeDraft {
        RecipeDraft {
            name: "Margherita".into(),
            region: "Italian".into(),
            description: "Tomato, mozzarella and basil.".into(),
            prep_time: "20 mins".into(),
            cook_time: "10 mins".into(),
            servings: "2".into(),
            image: "https://images.example.com/pizza.jpg".into(),
            ingredients: vec!["Flour".into(), "Tomato".into()],
            steps: vec!["Knead".into(), "Bake".into()],
            published: true,
            dietary_type: DietaryType::Vegetarian,
        }
    }

    #[test]
    fn rating_bounds() {
        assert!(rating(0).is_err());
        assert!(rating(1).is_ok());
        assert!(rating(5).is_ok());
        assert!(rating(6).is_err());
    }

    #[test]
    fn blank_tip_is_rejected() {
        assert_eq!(
            tip("   ", 4),
            Err(AppError::InvalidInput("tip is required".into()))
        );
        assert!(tip("Use fresh basil", 4).is_ok());
    }

    #[test]
    fn group_lengths() {
        assert!(group("ab", "A long enough description").is_err());
        assert!(group("Bakers", "too short").is_err());
        assert!(group(&"x".repeat(51), "A long enough description").is_err());
        assert!(group("Bakers", "A long enough description").is_ok());
    }

    #[test]
    fn post_and_comment_limits() {
        assert!(post("").is_err());
        assert!(post(&"a".repeat(POST_MAX_LEN)).is_ok());
        assert!(post(&"a".repeat(POST_MAX_LEN + 1)).is_err());
        assert!(comment(&"a".repeat(COMMENT_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn recipe_draft_checks() {
        assert!(recipe(&draft()).is_ok());

        let mut bad = draft();
        bad.image = "not a url".into();
        assert!(recipe(&bad).is_err());

        let mut bad = draft();
        bad.steps.clear();
        assert!(recipe(&bad).is_err());

        let mut bad = draft();
        bad.ingredients.push(" ".into());
        assert!(recipe(&bad).is_err());
    }
}
