use mealplan_core::domain::meal_plan::value_objects::{MealSelection, Preferences};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanValidator {
    #[serde(default)]
    #[validate(length(max = 500, message = "dietaryRestrictions is too long"))]
    pub dietary_restrictions: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "preferredCuisines is too long"))]
    pub preferred_cuisines: String,

    /// The upper bound comes from the server configuration.
    #[validate(range(min = 1, message = "numberOfDays must be at least 1"))]
    pub number_of_days: u32,

    #[serde(default)]
    pub meals: MealSelection,

    #[serde(default)]
    #[validate(range(min = 1, max = 10000, message = "calorieTarget is out of range"))]
    pub calorie_target: Option<u32>,

    #[serde(default)]
    #[validate(length(max = 1000, message = "otherRequests is too long"))]
    pub other_requests: Option<String>,
}

impl From<GeneratePlanValidator> for Preferences {
    fn from(payload: GeneratePlanValidator) -> Self {
        Self {
            dietary_restrictions: payload.dietary_restrictions,
            preferred_cuisines: payload.preferred_cuisines,
            number_of_days: payload.number_of_days,
            meals: payload.meals,
            calorie_target: payload.calorie_target,
            other_requests: payload.other_requests,
        }
    }
}
