pub mod classify_restrictions;
pub mod get_diet_rules;
