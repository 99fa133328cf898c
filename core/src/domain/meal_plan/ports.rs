use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{entities::GeneratedPlan, value_objects::Preferences},
};

/// Sampling parameters sent with every generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 4096,
        }
    }
}

/// LLM Client trait for calling the generation provider
///
/// Implementations make exactly one call per invocation and report a
/// rejected credential as [`CoreError::ProviderAuthError`]; every other
/// provider failure is [`CoreError::ProviderUnavailable`].
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        params: GenerationParams,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for meal plan generation
#[cfg_attr(test, mockall::automock)]
pub trait MealPlanService: Send + Sync {
    fn request_plan(
        &self,
        preferences: Preferences,
    ) -> impl Future<Output = Result<GeneratedPlan, CoreError>> + Send;
}
