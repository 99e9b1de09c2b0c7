//! Step-by-step cooking flow for a single recipe.
//!
//! Each step has to be confirmed before moving on. Rating unlocks once the
//! last step is confirmed and the flow is finished.

use crate::error::{AppError, Result};
use crate::models::Recipe;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookingFlow {
    recipe_id: String,
    steps: Vec<String>,
    current: usize,
    confirmed: bool,
    finished: bool,
}

impl CookingFlow {
    pub fn start(recipe: &Recipe) -> Result<Self> {
        if recipe.steps.is_empty() {
            return Err(AppError::invalid(format!(
                "recipe {} has no steps to cook",
                recipe.id
            )));
        }
        Ok(Self {
            recipe_id: recipe.id.clone(),
            steps: recipe.steps.clone(),
            current: 0,
            confirmed: false,
            finished: false,
        })
    }

    pub fn recipe_id(&self) -> &str {
        &self.recipe_id
    }

    /// Zero-based index of the step on screen.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &str {
        &self.steps[self.current]
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn can_rate(&self) -> bool {
        self.finished
    }

    /// Sets the "I have completed this step" mark.
    pub fn set_confirmed(&mut self, confirmed: bool) {
        if !self.finished {
            self.confirmed = confirmed;
        }
    }

    /// Advances one step. Returns `false` if blocked.
    pub fn next(&mut self) -> bool {
        if !self.confirmed || self.is_last_step() || self.finished {
            return false;
        }
        self.current += 1;
        self.confirmed = false;
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.current == 0 || self.finished {
            return false;
        }
        self.current -= 1;
        self.confirmed = false;
        true
    }

    pub fn finish(&mut self) -> bool {
        if self.confirmed && self.is_last_step() {
            self.finished = true;
        }
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietaryType, RecipeDraft};

    fn recipe(steps: &[&str]) -> Recipe {
        Recipe::from_draft(
            "4".into(),
            RecipeDraft {
                name: "Tortilla".into(),
                region: "Spanish".into(),
                description: "Potato and egg omelette.".into(),
                prep_time: "10 mins".into(),
                cook_time: "25 mins".into(),
                servings: "4".into(),
                image: "https://images.example.com/tortilla.jpg".into(),
                ingredients: vec!["Eggs".into()],
                steps: steps.iter().map(|s| s.to_string()).collect(),
                published: true,
                dietary_type: DietaryType::Vegetarian,
            },
        )
    }

    #[test]
    fn cannot_skip_unconfirmed_step() {
        let mut flow = CookingFlow::start(&recipe(&["Peel", "Fry", "Flip"])).unwrap();
        assert!(!flow.next());
        assert_eq!(flow.current(), 0);

        flow.set_confirmed(true);
        assert!(flow.next());
        assert_eq!(flow.current_step(), "Fry");
        assert!(!flow.is_confirmed());
    }

    #[test]
    fn walk_to_the_end_and_rate() {
        let mut flow = CookingFlow::start(&recipe(&["Peel", "Fry"])).unwrap();
        assert!(!flow.finish());

        flow.set_confirmed(true);
        flow.next();
        assert!(flow.is_last_step());
        assert!(!flow.next());
        assert!(!flow.can_rate());

        flow.set_confirmed(true);
        assert!(flow.finish());
        assert!(flow.can_rate());
        assert!(!flow.previous());
    }

    #[test]
    fn previous_resets_confirmation() {
        let mut flow = CookingFlow::start(&recipe(&["Peel", "Fry"])).unwrap();
        assert!(!flow.previous());
        flow.set_confirmed(true);
        flow.next();
        flow.set_confirmed(true);
        assert!(flow.previous());
        assert_eq!(flow.current(), 0);
        assert!(!flow.is_confirmed());
    }

    #[test]
    fn empty_recipe_has_no_flow() {
        assert!(CookingFlow::start(&recipe(&[])).is_err());
    }
}
