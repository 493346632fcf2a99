use serde::{Deserialize, Serialize};

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Configuration for OpenAI-compatible LLM providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAICompatibleConfig {
    /// Falls back to the provider's public endpoint when omitted
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub llm_api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

impl OpenAICompatibleConfig {
    /// Groq settings with the key taken from `GROQ_API_KEY`, read once here.
    pub fn groq_from_env() -> Self {
        Self {
            base_url: None,
            llm_api_key: std::env::var(GROQ_API_KEY_ENV).unwrap_or_default(),
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

/// Pool of LLM provider configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatelessLLMConfigs {
    #[serde(default)]
    pub groq_llm: Option<OpenAICompatibleConfig>,

    #[serde(default)]
    pub openai_llm: Option<OpenAICompatibleConfig>,

    #[serde(default)]
    pub openai_compatible_llm: Option<OpenAICompatibleConfig>,
}

impl StatelessLLMConfigs {
    pub fn get(&self, llm_provider: &str) -> Option<&OpenAICompatibleConfig> {
        match llm_provider {
            "groq_llm" => self.groq_llm.as_ref(),
            "openai_llm" => self.openai_llm.as_ref(),
            "openai_compatible_llm" => self.openai_compatible_llm.as_ref(),
            _ => None,
        }
    }
}

/// Which provider translates, and the settings for each known provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_llm_provider")]
    pub llm_provider: String,

    #[serde(default)]
    pub llm_configs: StatelessLLMConfigs,
}

fn default_llm_provider() -> String {
    "groq_llm".to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_llm_provider(),
            llm_configs: StatelessLLMConfigs {
                groq_llm: Some(OpenAICompatibleConfig::groq_from_env()),
                ..Default::default()
            },
        }
    }
}
