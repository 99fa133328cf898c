use crate::domain::{
    common::PlannerConfig,
    meal_plan::ports::{GenerationParams, LLMClient},
};

/// Core service holding the immutable settings every operation reads.
///
/// `llm_client` is `None` when no live provider is configured; requests are
/// then served by the demo generator.
#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: Option<LLM>,
    pub(crate) generation: GenerationParams,
    pub(crate) planner: PlannerConfig,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(
        llm_client: Option<LLM>,
        generation: GenerationParams,
        planner: PlannerConfig,
    ) -> Self {
        Self {
            llm_client,
            generation,
            planner,
        }
    }

    pub fn is_demo_mode(&self) -> bool {
        self.llm_client.is_none()
    }

    pub fn max_days(&self) -> u32 {
        self.planner.max_days
    }
}
