use clap::{Args as ClapArgs, Parser};
use mealplan_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, LLMConfig, MealPlannerConfig, PlannerConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealplan-api", version, about = "Meal Planner HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub planner: PlannerArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Clone, ClapArgs)]
pub struct LlmArgs {
    /// Gemini credential. Leave unset, empty or `DEMO_MODE` to serve demo plans.
    #[arg(
        long = "gemini-api-key",
        env = "GEMINI_API_KEY",
        hide_env_values = true
    )]
    pub gemini_api_key: Option<String>,

    #[arg(
        long = "gemini-model",
        env = "GEMINI_MODEL",
        default_value = DEFAULT_GEMINI_MODEL
    )]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: String,

    #[arg(
        long = "llm-temperature",
        env = "LLM_TEMPERATURE",
        default_value_t = 0.7
    )]
    pub temperature: f32,

    #[arg(
        long = "llm-max-output-tokens",
        env = "LLM_MAX_OUTPUT_TOKENS",
        default_value_t = 4096
    )]
    pub max_output_tokens: u32,

    #[arg(
        long = "llm-timeout-secs",
        env = "LLM_TIMEOUT_SECS",
        default_value_t = 30
    )]
    pub timeout_secs: u64,
}

// Keeps the credential out of startup logs.
impl std::fmt::Debug for LlmArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmArgs")
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

#[derive(Debug, Clone, ClapArgs)]
pub struct PlannerArgs {
    /// Seed for reproducible demo plans.
    #[arg(long = "demo-seed", env = "DEMO_SEED")]
    pub demo_seed: Option<u64>,

    #[arg(long = "max-days", env = "MAX_DAYS", default_value_t = 14)]
    pub max_days: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(
        long = "server-root-path",
        env = "SERVER_ROOT_PATH",
        default_value = ""
    )]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for MealPlannerConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                temperature: args.llm.temperature,
                max_output_tokens: args.llm.max_output_tokens,
                timeout_secs: args.llm.timeout_secs,
            },
            planner: PlannerConfig {
                max_days: args.planner.max_days,
                demo_seed: args.planner.demo_seed,
            },
        }
    }
}
