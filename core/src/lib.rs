//! Core business logic for the meal planner: dietary restriction
//! classification, plan validation, prompt construction and the plan
//! request orchestration over a generation provider.

pub mod application;
pub mod domain;
pub mod infrastructure;
