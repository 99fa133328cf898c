use crate::domain::diet::entities::{Diet, DietRule};

static DIET_RULES: [DietRule; 6] = [
    DietRule {
        diet: Diet::Vegan,
        keywords: &["vegan", "plant-based", "plant based"],
        forbidden: &[
            "meat", "chicken", "beef", "pork", "fish", "seafood", "milk", "dairy", "cheese", "egg",
            "honey", "yogurt", "butter", "cream",
        ],
    },
    DietRule {
        diet: Diet::Vegetarian,
        keywords: &["vegetarian"],
        forbidden: &["meat", "chicken", "beef", "pork", "fish", "seafood"],
    },
    DietRule {
        diet: Diet::Pescatarian,
        keywords: &["pescatarian"],
        forbidden: &["meat", "chicken", "beef", "pork"],
    },
    DietRule {
        diet: Diet::DairyFree,
        keywords: &["dairy-free", "dairy free", "no dairy"],
        forbidden: &["milk", "cheese", "yogurt", "butter", "cream", "dairy"],
    },
    DietRule {
        diet: Diet::GlutenFree,
        keywords: &["gluten-free", "gluten free", "no gluten"],
        forbidden: &[
            "wheat", "gluten", "bread", "pasta", "flour", "barley", "rye",
        ],
    },
    DietRule {
        diet: Diet::EggFree,
        keywords: &["egg-free", "egg free", "no eggs"],
        forbidden: &["egg", "eggs"],
    },
];

/// All diet rules, in canonical order.
pub fn diet_rules() -> &'static [DietRule] {
    &DIET_RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_has_keywords_and_tokens() {
        for rule in diet_rules() {
            assert!(!rule.keywords.is_empty(), "{} has no keywords", rule.diet);
            assert!(!rule.forbidden.is_empty(), "{} has no tokens", rule.diet);
        }
    }

    #[test]
    fn test_entries_are_lowercase() {
        for rule in diet_rules() {
            for entry in rule.keywords.iter().chain(rule.forbidden.iter()) {
                assert_eq!(*entry, entry.to_lowercase());
            }
        }
    }

    #[test]
    fn test_one_rule_per_diet_in_canonical_order() {
        let diets: Vec<Diet> = diet_rules().iter().map(|rule| rule.diet).collect();
        assert_eq!(
            diets,
            vec![
                Diet::Vegan,
                Diet::Vegetarian,
                Diet::Pescatarian,
                Diet::DairyFree,
                Diet::GlutenFree,
                Diet::EggFree,
            ]
        );
    }

    #[test]
    fn test_vegan_covers_dairy_and_egg() {
        let vegan = &diet_rules()[0];
        assert_eq!(vegan.diet, Diet::Vegan);
        for token in ["milk", "dairy", "egg", "honey", "meat"] {
            assert!(vegan.forbidden.contains(&token));
        }
    }
}
