use mealplan_core::domain::diet::{Diet, classify};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::diet::validators::ClassifyRestrictionsValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationData {
    pub diets: Vec<Diet>,
    pub forbidden_ingredients: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClassifyRestrictionsResponse {
    pub data: ClassificationData,
}

#[utoipa::path(
    post,
    path = "/classify",
    tag = "diet",
    summary = "Classify dietary restrictions",
    description = "Returns the diets recognised in a free-text restriction and the ingredient tokens they exclude.",
    responses(
        (status = 200, body = ClassifyRestrictionsResponse),
        (status = 400, body = ApiErrorResponse),
    ),
    request_body = ClassifyRestrictionsValidator
)]
pub async fn classify_restrictions(
    ValidateJson(payload): ValidateJson<ClassifyRestrictionsValidator>,
) -> Result<Response<ClassifyRestrictionsResponse>, ApiError> {
    let classification = classify(&payload.dietary_restrictions);

    Ok(Response::OK(ClassifyRestrictionsResponse {
        data: ClassificationData {
            diets: classification.diets.into_iter().collect(),
            forbidden_ingredients: classification.forbidden.into_iter().collect(),
        },
    }))
}
