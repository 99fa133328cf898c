use axum::extract::State;
use chrono::{DateTime, Utc};
use mealplan_core::domain::meal_plan::{
    entities::GeneratedPlan,
    helpers::{GroceryCategory, group_by_category},
    ports::MealPlanService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::meal_plan::validators::GeneratePlanValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanResponse {
    pub data: GeneratedPlan,
    /// True when the plan came from the local demo generator.
    pub demo: bool,
    pub generated_at: DateTime<Utc>,
    pub grocery_by_category: Vec<GroceryCategory>,
}

#[utoipa::path(
    post,
    path = "",
    tag = "meal-plan",
    summary = "Generate a meal plan",
    description = "Generates a multi-day meal plan and a consolidated grocery list. The plan is rejected when it contains an ingredient the dietary restrictions exclude.",
    responses(
        (status = 200, body = GeneratePlanResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse),
    ),
    request_body = GeneratePlanValidator
)]
pub async fn generate_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GeneratePlanValidator>,
) -> Result<Response<GeneratePlanResponse>, ApiError> {
    let plan = state
        .service
        .request_plan(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GeneratePlanResponse {
        grocery_by_category: group_by_category(&plan.grocery_list),
        demo: state.service.is_demo_mode(),
        generated_at: Utc::now(),
        data: plan,
    }))
}
