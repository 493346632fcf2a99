use std::sync::Arc;
use tracing::{info, warn};
use anyhow::Result;

use crate::agent::stateless_llm::StatelessLLMInterface;
use crate::agent::stateless_llm::openai_compatible_llm::OpenAICompatibleLLM;
use crate::config_manager::{OpenAICompatibleConfig, GROQ_BASE_URL, OPENAI_BASE_URL};

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Create an LLM based on the configuration.
    ///
    /// # Arguments
    /// * `llm_provider` - The type of LLM to create
    /// * `config` - Settings for that provider
    pub fn create_llm(
        llm_provider: &str,
        config: &OpenAICompatibleConfig,
    ) -> Result<Arc<dyn StatelessLLMInterface>> {
        info!("Initializing LLM: {}", llm_provider);

        let default_base_url = match llm_provider {
            "groq_llm" => Some(GROQ_BASE_URL),
            "openai_llm" => Some(OPENAI_BASE_URL),
            "openai_compatible_llm" => None,
            _ => anyhow::bail!("Unsupported LLM provider: {}", llm_provider),
        };
        let base_url = config
            .base_url
            .as_deref()
            .or(default_base_url)
            .ok_or_else(|| anyhow::anyhow!("{} requires base_url", llm_provider))?
            .to_string();

        // Not validated further; the provider will reject a bad key
        if config.llm_api_key.is_empty() || config.llm_api_key.contains("${") {
            warn!("No API key configured for {}", llm_provider);
        }

        Ok(Arc::new(OpenAICompatibleLLM::new(
            config.model.clone(),
            base_url,
            config.llm_api_key.clone(),
            config.temperature,
        )))
    }
}
