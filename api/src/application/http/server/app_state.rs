use std::sync::Arc;

use mealplan_core::application::MealPlannerService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MealPlannerService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealPlannerService) -> Self {
        Self { args, service }
    }
}
