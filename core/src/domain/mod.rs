pub mod common;
pub mod diet;
pub mod meal_plan;
