use async_trait::async_trait;

use crate::agent::input_types::ChatMessage;
use crate::error::LlmError;

/// Interface for a stateless language model
/// Stateless means the LLM doesn't store memory, system prompts, or user messages
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Send the full prompt in one request and return the completion text unmodified
    async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;
}
