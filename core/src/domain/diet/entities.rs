use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical diets recognised in free-text restrictions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    Vegan,
    Vegetarian,
    Pescatarian,
    DairyFree,
    GlutenFree,
    EggFree,
}

impl Diet {
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Diet::Vegan => "vegan",
            Diet::Vegetarian => "vegetarian",
            Diet::Pescatarian => "pescatarian",
            Diet::DairyFree => "dairy-free",
            Diet::GlutenFree => "gluten-free",
            Diet::EggFree => "egg-free",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Recognition keywords and forbidden ingredient tokens for one diet.
///
/// Keywords and tokens are lowercase. Each rule is self-contained: a rule
/// that implies another (vegan implies dairy-free) lists the implied tokens
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DietRule {
    pub diet: Diet,
    pub keywords: &'static [&'static str],
    pub forbidden: &'static [&'static str],
}

impl DietRule {
    /// True if any recognition keyword occurs in the already-lowercased text.
    pub fn matches(&self, lowercase_text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowercase_text.contains(keyword))
    }
}
