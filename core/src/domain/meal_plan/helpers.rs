use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::meal_plan::entities::GroceryItem;

pub const UNCATEGORIZED: &str = "Miscellaneous";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroceryCategory {
    pub category: String,
    pub items: Vec<GroceryItem>,
}

/// Group grocery items by category for display.
///
/// Categories keep the order in which they first appear and items keep
/// their list order. Items without a category, or with a blank one, land in
/// [`UNCATEGORIZED`].
pub fn group_by_category(items: &[GroceryItem]) -> Vec<GroceryCategory> {
    let mut groups: Vec<GroceryCategory> = Vec::new();

    for item in items {
        let category = item
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED);

        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(GroceryCategory {
                category: category.to_string(),
                items: vec![item.clone()],
            }),
        }
    }

    groups
}
