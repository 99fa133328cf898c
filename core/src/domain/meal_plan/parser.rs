use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::{DayPlan, GeneratedPlan, GroceryItem, MealSlot},
        value_objects::Preferences,
    },
};

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```(?:json|JSON)?[ \t]*\r?\n?(.*?)\r?\n?[ \t]*```$")
        .expect("fence pattern is valid")
});

/// Remove one enclosing Markdown code fence, if present.
///
/// Text without a fence is returned trimmed and otherwise untouched.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    match FENCE_RE.captures(trimmed).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => trimmed,
    }
}

/// Parse a raw provider payload into a plan.
///
/// Fails with [`CoreError::MalformedResponse`] when the payload is not JSON,
/// when `mealPlan` or `groceryList` is missing, or when either does not
/// match the expected shape.
pub fn parse_plan(raw: &str) -> Result<GeneratedPlan, CoreError> {
    let json = strip_code_fences(raw);

    let parsed: Value = serde_json::from_str(json).map_err(|e| {
        tracing::error!("Failed to parse LLM response: {}", e);
        CoreError::MalformedResponse(format!("Failed to parse LLM response: {}", e))
    })?;

    let meal_plan: Vec<DayPlan> = serde_json::from_value(required_field(&parsed, "mealPlan")?)
        .map_err(|e| {
            tracing::error!("Invalid mealPlan format: {}", e);
            CoreError::MalformedResponse(format!("Invalid mealPlan format: {}", e))
        })?;

    let grocery_list: Vec<GroceryItem> =
        serde_json::from_value(required_field(&parsed, "groceryList")?).map_err(|e| {
            tracing::error!("Invalid groceryList format: {}", e);
            CoreError::MalformedResponse(format!("Invalid groceryList format: {}", e))
        })?;

    Ok(GeneratedPlan {
        meal_plan,
        grocery_list,
    })
}

fn required_field(parsed: &Value, field: &str) -> Result<Value, CoreError> {
    match parsed.get(field) {
        Some(value) if !value.is_null() => Ok(value.clone()),
        _ => Err(CoreError::MalformedResponse(format!(
            "No {} field in response",
            field
        ))),
    }
}

/// Bring a parsed plan in line with the submitted preferences.
///
/// Meal slots the user did not ask for are dropped. A day count that
/// differs from the request, or a negative calorie figure, is a contract
/// violation by the provider.
pub fn normalize_plan(
    mut plan: GeneratedPlan,
    preferences: &Preferences,
) -> Result<GeneratedPlan, CoreError> {
    let expected_days = preferences.number_of_days as usize;
    if plan.meal_plan.len() != expected_days {
        return Err(CoreError::MalformedResponse(format!(
            "Expected {} days in mealPlan, got {}",
            expected_days,
            plan.meal_plan.len()
        )));
    }

    for day in &mut plan.meal_plan {
        for slot in MealSlot::ALL {
            if preferences.meals.includes(slot) {
                continue;
            }
            if day.meals.slot_mut(slot).take().is_some() {
                tracing::warn!(day = %day.day, %slot, "dropping meal slot that was not requested");
            }
        }

        if let Some((slot, _)) = day
            .meals
            .iter()
            .find(|(_, meal)| meal.calories.is_some_and(|c| c < 0.0))
        {
            return Err(CoreError::MalformedResponse(format!(
                "Negative calories for {} on {}",
                slot, day.day
            )));
        }
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meal_plan::value_objects::MealSelection;

    const PLAN_JSON: &str = r#"{
        "mealPlan": [
            {
                "day": "Day 1",
                "meals": {
                    "breakfast": { "name": "Oats", "description": "Steel-cut oats", "calories": 320 },
                    "dinner": { "name": "Curry", "description": "Chickpea curry" }
                }
            }
        ],
        "groceryList": [
            { "item": "Oats", "quantity": "1 bag", "category": "Pantry" },
            { "item": "Chickpeas", "quantity": "2 cans" }
        ]
    }"#;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  ```json {\"a\":1} ```  "), "{\"a\":1}");
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_parse_plain_json() {
        let plan = parse_plan(PLAN_JSON).unwrap();
        assert_eq!(plan.meal_plan.len(), 1);
        assert_eq!(
            plan.meal_plan[0].meals.breakfast.as_ref().unwrap().calories,
            Some(320.0)
        );
        assert!(plan.meal_plan[0].meals.dinner.as_ref().unwrap().calories.is_none());
        assert_eq!(plan.grocery_list.len(), 2);
        assert!(plan.grocery_list[1].category.is_none());
    }

    #[test]
    fn test_parse_fenced_json() {
        let fenced = format!("```json\n{}\n```", PLAN_JSON);
        assert_eq!(parse_plan(&fenced).unwrap(), parse_plan(PLAN_JSON).unwrap());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_plan("Here is your plan: Day 1 ...").unwrap_err();
        assert!(matches!(err, CoreError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let missing_grocery = r#"{ "mealPlan": [] }"#;
        let missing_plan = r#"{ "groceryList": [] }"#;
        let null_plan = r#"{ "mealPlan": null, "groceryList": [] }"#;

        for raw in [missing_grocery, missing_plan, null_plan] {
            assert!(matches!(
                parse_plan(raw),
                Err(CoreError::MalformedResponse(_))
            ));
        }
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let raw = r#"{ "mealPlan": "three days", "groceryList": [] }"#;
        assert!(matches!(parse_plan(raw), Err(CoreError::MalformedResponse(_))));
    }

    #[test]
    fn test_normalize_drops_unrequested_slots() {
        let prefs = Preferences {
            number_of_days: 1,
            meals: MealSelection {
                breakfast: true,
                lunch: false,
                dinner: false,
                snacks: false,
            },
            ..Preferences::default()
        };
        let plan = normalize_plan(parse_plan(PLAN_JSON).unwrap(), &prefs).unwrap();
        assert!(plan.meal_plan[0].meals.breakfast.is_some());
        assert!(plan.meal_plan[0].meals.dinner.is_none());
    }

    #[test]
    fn test_normalize_rejects_day_count_mismatch() {
        let prefs = Preferences {
            number_of_days: 2,
            ..Preferences::default()
        };
        assert!(matches!(
            normalize_plan(parse_plan(PLAN_JSON).unwrap(), &prefs),
            Err(CoreError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_normalize_rejects_negative_calories() {
        let raw = r#"{
            "mealPlan": [{ "day": "Day 1", "meals": { "lunch": { "name": "Soup", "description": "Lentil", "calories": -5 } } }],
            "groceryList": []
        }"#;
        let prefs = Preferences {
            number_of_days: 1,
            ..Preferences::default()
        };
        assert!(matches!(
            normalize_plan(parse_plan(raw).unwrap(), &prefs),
            Err(CoreError::MalformedResponse(_))
        ));
    }
}
