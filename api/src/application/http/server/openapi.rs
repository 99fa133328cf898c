use crate::application::http::{
    diet::router::DietApiDoc, health::__path_liveness, meal_plan::router::MealPlanApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Meal Planner API"
    ),
    paths(liveness),
    nest(
        (path = "/meal-plans", api = MealPlanApiDoc),
        (path = "/diets", api = DietApiDoc),
    )
)]
pub struct ApiDoc;
