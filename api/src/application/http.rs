pub mod diet;
pub mod health;
pub mod meal_plan;
pub mod server;
