use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealplan_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("The generated plan contains ingredients your restrictions exclude")]
    DietaryViolation(Vec<String>),

    #[error("{0}")]
    ProviderAuth(String),

    #[error("The meal plan provider returned an unusable answer, please try again")]
    MalformedResponse,

    #[error("The meal plan provider is unavailable, please try again later")]
    ServiceUnavailable,

    #[error("Internal server error")]
    InternalServerError,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<String>>,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_INVALID_INPUT"),
            ApiError::DietaryViolation(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_DIETARY_VIOLATION")
            }
            ApiError::ProviderAuth(_) => (StatusCode::BAD_GATEWAY, "E_PROVIDER_AUTH"),
            ApiError::MalformedResponse => (StatusCode::BAD_GATEWAY, "E_MALFORMED_RESPONSE"),
            ApiError::ServiceUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "E_PROVIDER_UNAVAILABLE")
            }
            ApiError::InternalServerError => (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL"),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::DietaryViolation { tokens } => ApiError::DietaryViolation(tokens),
            CoreError::ProviderAuthError(message) => ApiError::ProviderAuth(message),
            CoreError::MalformedResponse(_) => ApiError::MalformedResponse,
            CoreError::ProviderUnavailable(_) => ApiError::ServiceUnavailable,
            CoreError::InternalServerError => ApiError::InternalServerError,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.to_string();
        let violations = match self {
            ApiError::DietaryViolation(tokens) => Some(tokens),
            _ => None,
        };

        (
            status,
            Json(ApiErrorResponse {
                code: code.to_string(),
                status: status.as_u16(),
                message,
                violations,
            }),
        )
            .into_response()
    }
}

/// JSON extractor that runs `validator` rules before the handler sees the body.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(errors.to_string()))?;

        Ok(ValidateJson(value))
    }
}
