use crate::domain::{
    diet::ForbiddenSet,
    meal_plan::{entities::GeneratedPlan, value_objects::ValidationResult},
};

/// Check a plan against forbidden ingredient tokens.
///
/// Meals are scanned first (days in order, slots breakfast to snacks, name
/// and description together), then grocery item names in list order. A
/// token counts as present when it is a substring of the lowercased text,
/// so "buttermilk" trips both "butter" and "milk". Each token is reported
/// once, in the order it was first found.
pub fn validate(plan: &GeneratedPlan, forbidden: &ForbiddenSet) -> ValidationResult {
    if forbidden.is_empty() {
        return ValidationResult::valid();
    }

    let meal_texts = plan.meal_plan.iter().flat_map(|day| {
        day.meals
            .iter()
            .map(|(_, meal)| format!("{} {}", meal.name, meal.description).to_lowercase())
    });
    let grocery_texts = plan.grocery_list.iter().map(|item| item.item.to_lowercase());

    let mut violations: Vec<String> = Vec::new();
    for text in meal_texts.chain(grocery_texts) {
        for token in forbidden {
            if text.contains(token.as_str()) && !violations.contains(token) {
                violations.push(token.clone());
            }
        }

        if violations.len() == forbidden.len() {
            break;
        }
    }

    ValidationResult::from_violations(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        diet::classify,
        meal_plan::entities::{DayMeals, DayPlan, GroceryItem, Meal},
    };

    fn forbidden(tokens: &[&str]) -> ForbiddenSet {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn day(label: &str, meals: DayMeals) -> DayPlan {
        DayPlan {
            day: label.to_string(),
            meals,
        }
    }

    fn grocery(name: &str) -> GroceryItem {
        GroceryItem::new(name, "1", "Pantry")
    }

    fn sample_plan() -> GeneratedPlan {
        GeneratedPlan {
            meal_plan: vec![
                day(
                    "Day 1",
                    DayMeals {
                        breakfast: Some(Meal::new("Cheese Omelette", "Two eggs", 400.0)),
                        dinner: Some(Meal::new("Grilled Chicken", "With rice", 600.0)),
                        ..DayMeals::default()
                    },
                ),
                day(
                    "Day 2",
                    DayMeals {
                        lunch: Some(Meal::new("Tuna Melt", "Tuna with cheddar", 500.0)),
                        ..DayMeals::default()
                    },
                ),
            ],
            grocery_list: vec![grocery("Whole Milk"), grocery("Rice")],
        }
    }

    #[test]
    fn test_empty_forbidden_set_is_valid() {
        let result = validate(&sample_plan(), &ForbiddenSet::new());
        assert!(result.is_valid);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_unrestricted_text_accepts_any_plan() {
        let result = validate(&sample_plan(), &classify("no preference at all").forbidden);
        assert_eq!(result, ValidationResult::valid());
    }

    #[test]
    fn test_grocery_item_violation() {
        let plan = GeneratedPlan {
            meal_plan: vec![],
            grocery_list: vec![grocery("Whole Milk")],
        };
        let result = validate(&plan, &forbidden(&["milk", "honey"]));
        assert!(!result.is_valid);
        assert_eq!(result.violations, vec!["milk".to_string()]);
    }

    #[test]
    fn test_token_reported_once() {
        let meal = || Some(Meal::new("Chicken Salad", "Grilled chicken", 300.0));
        let plan = GeneratedPlan {
            meal_plan: vec![
                day(
                    "Day 1",
                    DayMeals {
                        lunch: meal(),
                        dinner: meal(),
                        ..DayMeals::default()
                    },
                ),
                day(
                    "Day 2",
                    DayMeals {
                        breakfast: meal(),
                        ..DayMeals::default()
                    },
                ),
            ],
            grocery_list: vec![],
        };
        let result = validate(&plan, &forbidden(&["chicken"]));
        assert_eq!(result.violations, vec!["chicken".to_string()]);
    }

    #[test]
    fn test_first_seen_order_follows_scan_order() {
        let result = validate(&sample_plan(), &forbidden(&["milk", "chicken", "egg", "cheese"]));
        // Day 1 breakfast ("cheese", "egg"), Day 1 dinner ("chicken"), grocery ("milk").
        assert_eq!(result.violations, vec!["cheese", "egg", "chicken", "milk"]);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let mut reversed = ForbiddenSet::new();
        for token in ["milk", "chicken", "egg", "cheese"].iter().rev() {
            reversed.insert(token.to_string());
        }
        let a = validate(&sample_plan(), &forbidden(&["milk", "chicken", "egg", "cheese"]));
        let b = validate(&sample_plan(), &reversed);
        assert_eq!(a, b);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let plan = GeneratedPlan {
            meal_plan: vec![day(
                "Day 1",
                DayMeals {
                    breakfast: Some(Meal::new("Pancakes", "Made with BUTTERMILK", 450.0)),
                    ..DayMeals::default()
                },
            )],
            grocery_list: vec![],
        };
        let result = validate(&plan, &forbidden(&["butter", "milk"]));
        assert_eq!(result.violations, vec!["butter", "milk"]);
    }

    #[test]
    fn test_grocery_category_is_not_scanned() {
        let plan = GeneratedPlan {
            meal_plan: vec![],
            grocery_list: vec![GroceryItem::new("Oat Drink", "1 carton", "Dairy Alternatives")],
        };
        assert!(validate(&plan, &forbidden(&["dairy"])).is_valid);
    }
}
