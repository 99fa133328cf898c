use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diet::classify,
    meal_plan::{
        demo::synthesize,
        entities::GeneratedPlan,
        parser::{normalize_plan, parse_plan},
        ports::{LLMClient, MealPlanService},
        prompt::build_prompt,
        schema::get_meal_plan_schema,
        validator::validate,
        value_objects::Preferences,
    },
};

impl<LLM> MealPlanService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(
        skip(self, preferences),
        fields(request_id = %Uuid::new_v4(), days = preferences.number_of_days)
    )]
    async fn request_plan(&self, preferences: Preferences) -> Result<GeneratedPlan, CoreError> {
        // 1. Reject out-of-range input before touching any provider
        check_preferences(&preferences, self.max_days())?;

        // 2. Fall back to the demo generator without a live provider
        let Some(llm_client) = self.llm_client.as_ref() else {
            info!("no live provider configured, serving demo plan");
            return Ok(self.demo_plan(&preferences));
        };

        // 3. Classify restrictions and build the prompt
        let classification = classify(&preferences.dietary_restrictions);
        let prompt = build_prompt(&preferences, &classification.forbidden);
        debug!(
            prompt_len = prompt.len(),
            diets = ?classification.diets,
            "requesting plan from provider"
        );

        // 4. Call LLM, once
        let raw_response = llm_client
            .generate_with_text(prompt, self.generation, get_meal_plan_schema())
            .await?;

        // 5. Parse and normalize response
        let plan = normalize_plan(parse_plan(&raw_response)?, &preferences)?;

        // 6. Refuse plans that break the stated restrictions
        if !classification.is_unrestricted() {
            let validation = validate(&plan, &classification.forbidden);
            if !validation.is_valid {
                warn!(
                    violations = ?validation.violations,
                    "provider ignored dietary restrictions"
                );
                return Err(CoreError::DietaryViolation {
                    tokens: validation.violations,
                });
            }
        }

        info!(
            grocery_items = plan.grocery_list.len(),
            "generated plan accepted"
        );
        Ok(plan)
    }
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    fn demo_plan(&self, preferences: &Preferences) -> GeneratedPlan {
        match self.planner.demo_seed {
            Some(seed) => synthesize(preferences, &mut StdRng::seed_from_u64(seed)),
            None => synthesize(preferences, &mut rand::thread_rng()),
        }
    }
}

fn check_preferences(preferences: &Preferences, max_days: u32) -> Result<(), CoreError> {
    if preferences.number_of_days < 1 {
        return Err(CoreError::InvalidInput(
            "number_of_days must be at least 1".to_string(),
        ));
    }

    if preferences.number_of_days > max_days {
        return Err(CoreError::InvalidInput(format!(
            "number_of_days must be at most {}",
            max_days
        )));
    }

    if preferences.calorie_target == Some(0) {
        return Err(CoreError::InvalidInput(
            "calorie_target must be positive".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::PlannerConfig,
        meal_plan::{
            ports::{GenerationParams, MockLLMClient},
            value_objects::MealSelection,
        },
    };

    const CLEAN_PLAN: &str = r#"{
        "mealPlan": [
            { "day": "Day 1", "meals": {
                "breakfast": { "name": "Tofu Scramble", "description": "Tofu with spinach", "calories": 300 },
                "dinner": { "name": "Lentil Curry", "description": "Red lentils in tomato sauce", "calories": 550 }
            } }
        ],
        "groceryList": [
            { "item": "Tofu", "quantity": "1 block", "category": "Plant-Based" },
            { "item": "Red Lentils", "quantity": "1 bag", "category": "Pantry" }
        ]
    }"#;

    fn preferences(text: &str, days: u32) -> Preferences {
        Preferences {
            dietary_restrictions: text.to_string(),
            number_of_days: days,
            meals: MealSelection {
                breakfast: true,
                lunch: false,
                dinner: true,
                snacks: false,
            },
            ..Preferences::default()
        }
    }

    fn live_service(llm_client: MockLLMClient) -> Service<MockLLMClient> {
        Service::new(
            Some(llm_client),
            GenerationParams::default(),
            PlannerConfig::default(),
        )
    }

    fn demo_service() -> Service<MockLLMClient> {
        Service::new(None, GenerationParams::default(), PlannerConfig::default())
    }

    fn responding_with(body: &str) -> MockLLMClient {
        let body = body.to_string();
        let mut llm_client = MockLLMClient::new();
        llm_client
            .expect_generate_with_text()
            .times(1)
            .returning(move |_, _, _| {
                let body = body.clone();
                Box::pin(async move { Ok(body) })
            });
        llm_client
    }

    #[tokio::test]
    async fn test_zero_days_is_invalid_input_without_provider_call() {
        let mut llm_client = MockLLMClient::new();
        llm_client.expect_generate_with_text().never();

        let result = live_service(llm_client)
            .request_plan(preferences("vegan", 0))
            .await;
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_zero_days_is_invalid_in_demo_mode() {
        let result = demo_service().request_plan(preferences("", 0)).await;
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_too_many_days_and_zero_calories_are_invalid() {
        let service = demo_service();
        assert!(matches!(
            service.request_plan(preferences("", 15)).await,
            Err(CoreError::InvalidInput(_))
        ));

        let prefs = Preferences {
            calorie_target: Some(0),
            ..preferences("", 2)
        };
        assert!(matches!(
            service.request_plan(prefs).await,
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_configured_day_limit_is_enforced() {
        let service: Service<MockLLMClient> = Service::new(
            None,
            GenerationParams::default(),
            PlannerConfig {
                max_days: 5,
                ..PlannerConfig::default()
            },
        );
        assert_eq!(service.max_days(), 5);

        assert!(service.request_plan(preferences("", 5)).await.is_ok());
        assert!(matches!(
            service.request_plan(preferences("", 6)).await,
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_demo_mode_serves_synthesized_plan() {
        let service = demo_service();
        assert!(service.is_demo_mode());

        let plan = service
            .request_plan(preferences("strict vegan", 3))
            .await
            .unwrap();
        assert_eq!(plan.meal_plan.len(), 3);
        assert!(plan.meal_plan.iter().all(|d| d.meals.lunch.is_none()));
        assert!(validate(&plan, &classify("strict vegan").forbidden).is_valid);
    }

    #[tokio::test]
    async fn test_seeded_demo_mode_is_repeatable() {
        let service: Service<MockLLMClient> = Service::new(
            None,
            GenerationParams::default(),
            PlannerConfig {
                demo_seed: Some(11),
                ..PlannerConfig::default()
            },
        );
        let a = service.request_plan(preferences("vegetarian", 5)).await.unwrap();
        let b = service.request_plan(preferences("vegetarian", 5)).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_live_plan_is_returned() {
        let plan = live_service(responding_with(CLEAN_PLAN))
            .request_plan(preferences("vegan", 1))
            .await
            .unwrap();
        assert_eq!(plan.meal_plan[0].day, "Day 1");
        assert_eq!(plan.grocery_list.len(), 2);
    }

    #[tokio::test]
    async fn test_prompt_and_params_reach_provider() {
        let mut llm_client = MockLLMClient::new();
        llm_client
            .expect_generate_with_text()
            .withf(|prompt, params, schema| {
                prompt.contains("honey")
                    && prompt.contains("- Number of days: 1")
                    && *params == GenerationParams::default()
                    && schema.get("required").is_some()
            })
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(CLEAN_PLAN.to_string()) }));

        let result = live_service(llm_client)
            .request_plan(preferences("vegan", 1))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fenced_response_is_accepted() {
        let fenced = format!("```json\n{}\n```", CLEAN_PLAN);
        let result = live_service(responding_with(&fenced))
            .request_plan(preferences("", 1))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_violating_plan_is_rejected() {
        let body = r#"{
            "mealPlan": [
                { "day": "Day 1", "meals": {
                    "breakfast": { "name": "Porridge", "description": "Oats with berries" }
                } }
            ],
            "groceryList": [ { "item": "Whole Milk", "quantity": "1 carton" } ]
        }"#;
        let result = live_service(responding_with(body))
            .request_plan(preferences("vegan", 1))
            .await;
        assert_eq!(
            result,
            Err(CoreError::DietaryViolation {
                tokens: vec!["milk".to_string()]
            })
        );
    }

    #[tokio::test]
    async fn test_unrestricted_request_skips_ingredient_scan() {
        let body = r#"{
            "mealPlan": [
                { "day": "Day 1", "meals": {
                    "breakfast": { "name": "Cheese Omelette", "description": "Eggs with cheddar" }
                } }
            ],
            "groceryList": [ { "item": "Whole Milk", "quantity": "1 carton" } ]
        }"#;
        let plan = live_service(responding_with(body))
            .request_plan(preferences("no preference", 1))
            .await
            .unwrap();
        assert_eq!(plan.grocery_list[0].item, "Whole Milk");
    }

    #[tokio::test]
    async fn test_malformed_responses() {
        for body in [
            "not json at all",
            r#"{ "mealPlan": [] }"#,
            r#"{ "mealPlan": [], "groceryList": [] }"#,
        ] {
            let result = live_service(responding_with(body))
                .request_plan(preferences("", 1))
                .await;
            assert!(
                matches!(result, Err(CoreError::MalformedResponse(_))),
                "{body}: {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_provider_errors_pass_through() {
        for error in [
            CoreError::ProviderAuthError("API key not valid".to_string()),
            CoreError::ProviderUnavailable("timed out".to_string()),
        ] {
            let expected = error.clone();
            let mut llm_client = MockLLMClient::new();
            llm_client
                .expect_generate_with_text()
                .times(1)
                .returning(move |_, _, _| {
                    let error = error.clone();
                    Box::pin(async move { Err(error) })
                });

            let result = live_service(llm_client)
                .request_plan(preferences("", 1))
                .await;
            assert_eq!(result, Err(expected));
        }
    }
}
