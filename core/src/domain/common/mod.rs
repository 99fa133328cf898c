use std::fmt;

pub mod entities;
pub mod services;

/// Credential value that explicitly routes requests to the demo generator.
pub const DEMO_MODE_SENTINEL: &str = "DEMO_MODE";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug, Default)]
pub struct MealPlannerConfig {
    pub llm: LLMConfig,
    pub planner: PlannerConfig,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
}

impl LLMConfig {
    /// Returns the credential only when it designates a live provider.
    ///
    /// An absent key, a blank key and the [`DEMO_MODE_SENTINEL`] all mean
    /// that no live provider is configured.
    pub fn live_api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != DEMO_MODE_SENTINEL)
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            temperature: 0.7,
            max_output_tokens: 4096,
            timeout_secs: 30,
        }
    }
}

// Hand-written so the credential never ends up in logs.
impl fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LLMConfig")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Upper bound on the number of planned days.
    pub max_days: u32,
    /// When set, demo plans are drawn from a generator seeded with this value.
    pub demo_seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_days: 14,
            demo_seed: None,
        }
    }
}
