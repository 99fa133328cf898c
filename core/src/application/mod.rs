use std::time::Duration;

use crate::{
    domain::{
        common::{MealPlannerConfig, entities::app_errors::CoreError, services::Service},
        meal_plan::ports::GenerationParams,
    },
    infrastructure::llm::GeminiLLMClient,
};

pub type MealPlannerService = Service<GeminiLLMClient>;

/// Wire the core service from configuration.
///
/// A live Gemini client is built only when the configured key designates a
/// live provider; otherwise every request is served by the demo generator.
pub fn create_service(config: MealPlannerConfig) -> Result<MealPlannerService, CoreError> {
    let llm_client = match config.llm.live_api_key() {
        Some(api_key) => {
            let client = GeminiLLMClient::new(
                api_key.to_string(),
                config.llm.gemini_model.clone(),
                config.llm.gemini_base_url.clone(),
                Duration::from_secs(config.llm.timeout_secs),
            )?;
            tracing::info!(model = %client.model_name(), "Gemini provider configured");
            Some(client)
        }
        None => {
            tracing::warn!("No Gemini API key configured, running in demo mode");
            None
        }
    };

    let generation = GenerationParams {
        temperature: config.llm.temperature,
        max_output_tokens: config.llm.max_output_tokens,
    };

    Ok(Service::new(llm_client, generation, config.planner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{DEMO_MODE_SENTINEL, LLMConfig};

    fn config_with_key(key: Option<&str>) -> MealPlannerConfig {
        MealPlannerConfig {
            llm: LLMConfig {
                gemini_api_key: key.map(str::to_string),
                ..LLMConfig::default()
            },
            ..MealPlannerConfig::default()
        }
    }

    #[test]
    fn test_demo_mode_without_live_key() {
        for key in [None, Some(""), Some(DEMO_MODE_SENTINEL)] {
            let service = create_service(config_with_key(key)).unwrap();
            assert!(service.is_demo_mode());
        }
    }

    #[test]
    fn test_live_mode_with_key() {
        let service = create_service(config_with_key(Some("some-key"))).unwrap();
        assert!(!service.is_demo_mode());
        assert_eq!(service.max_days(), 14);
    }
}
