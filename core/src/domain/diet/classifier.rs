use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::diet::{entities::Diet, table::diet_rules};

/// Lowercase ingredient tokens a plan must not mention.
///
/// Ordered so that prompts and scans iterate deterministically.
pub type ForbiddenSet = BTreeSet<String>;

/// Result of classifying a free-text dietary restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Classification {
    pub diets: BTreeSet<Diet>,
    pub forbidden: ForbiddenSet,
}

impl Classification {
    pub fn is_active(&self, diet: Diet) -> bool {
        self.diets.contains(&diet)
    }

    pub fn is_unrestricted(&self) -> bool {
        self.forbidden.is_empty()
    }
}

/// Determine which canonical diets a restriction text mentions.
///
/// Matching is a case-insensitive substring test of every rule's keywords;
/// the forbidden tokens of every matching rule are unioned. Blank text
/// yields an empty classification.
pub fn classify(dietary_text: &str) -> Classification {
    let text = dietary_text.trim().to_lowercase();
    let mut classification = Classification::default();

    if text.is_empty() {
        return classification;
    }

    for rule in diet_rules().iter().filter(|rule| rule.matches(&text)) {
        classification.diets.insert(rule.diet);
        classification
            .forbidden
            .extend(rule.forbidden.iter().map(|token| token.to_string()));
    }

    classification
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_unrestricted() {
        for text in ["", "   ", "\n\t"] {
            let classification = classify(text);
            assert!(classification.diets.is_empty());
            assert!(classification.is_unrestricted());
        }
    }

    #[test]
    fn test_unrecognised_text_is_unrestricted() {
        let classification = classify("I like spicy food, nothing else");
        assert!(classification.diets.is_empty());
        assert!(classification.forbidden.is_empty());
    }

    #[test]
    fn test_vegan_keywords_any_case() {
        for text in ["vegan", "Strict VEGAN please", "Plant-Based", "mostly plant based"] {
            let classification = classify(text);
            assert!(classification.is_active(Diet::Vegan), "{text}");
            for token in ["meat", "dairy", "egg", "honey"] {
                assert!(classification.forbidden.contains(token), "{text}: {token}");
            }
        }
    }

    #[test]
    fn test_overlapping_diets_union_tokens() {
        let classification = classify("vegan, gluten-free and egg-free");
        assert!(classification.is_active(Diet::Vegan));
        assert!(classification.is_active(Diet::GlutenFree));
        assert!(classification.is_active(Diet::EggFree));
        assert!(classification.forbidden.contains("honey"));
        assert!(classification.forbidden.contains("wheat"));
        assert!(classification.forbidden.contains("eggs"));
        // Listed by both vegan and egg-free.
        assert_eq!(
            classification
                .forbidden
                .iter()
                .filter(|t| t.as_str() == "egg")
                .count(),
            1
        );
    }

    #[test]
    fn test_no_implication_graph() {
        // Vegan tokens already include dairy, but dairy-free is not marked active.
        let classification = classify("vegan");
        assert!(!classification.is_active(Diet::DairyFree));
        assert!(!classification.is_active(Diet::EggFree));
    }

    #[test]
    fn test_keyword_variants() {
        assert!(classify("No Dairy").is_active(Diet::DairyFree));
        assert!(classify("dairy free").is_active(Diet::DairyFree));
        assert!(classify("no gluten please").is_active(Diet::GlutenFree));
        assert!(classify("no eggs").is_active(Diet::EggFree));
        assert!(classify("Pescatarian").is_active(Diet::Pescatarian));
        assert!(classify("vegetarian").is_active(Diet::Vegetarian));
    }

    #[test]
    fn test_vegetarian_is_not_vegan() {
        let classification = classify("vegetarian");
        assert!(!classification.is_active(Diet::Vegan));
        assert!(!classification.forbidden.contains("milk"));
    }

    #[test]
    fn test_classify_is_idempotent() {
        let text = "Pescatarian, dairy free, no eggs";
        assert_eq!(classify(text), classify(text));
    }
}
