use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::meal_plan::entities::MealSlot;

/// Which meal slots the user asked to plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealSelection {
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
    pub snacks: bool,
}

impl MealSelection {
    pub fn includes(&self, slot: MealSlot) -> bool {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snacks => self.snacks,
        }
    }

    /// Selected slots in scan order.
    pub fn slots(&self) -> Vec<MealSlot> {
        MealSlot::ALL
            .into_iter()
            .filter(|slot| self.includes(*slot))
            .collect()
    }
}

impl Default for MealSelection {
    fn default() -> Self {
        Self {
            breakfast: true,
            lunch: true,
            dinner: true,
            snacks: false,
        }
    }
}

/// User preferences for one plan submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Preferences {
    pub dietary_restrictions: String,
    pub preferred_cuisines: String,
    pub number_of_days: u32,
    pub meals: MealSelection,
    pub calorie_target: Option<u32>,
    pub other_requests: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dietary_restrictions: String::new(),
            preferred_cuisines: String::new(),
            number_of_days: 3,
            meals: MealSelection::default(),
            calorie_target: None,
            other_requests: None,
        }
    }
}

/// Outcome of checking a plan against a forbidden token set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Distinct offending tokens, in the order they were first found.
    pub violations: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            violations: Vec::new(),
        }
    }

    pub fn from_violations(violations: Vec<String>) -> Self {
        Self {
            is_valid: violations.is_empty(),
            violations,
        }
    }
}
