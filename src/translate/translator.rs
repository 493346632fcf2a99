use std::sync::Arc;
use tracing::{debug, info};

use crate::agent::StatelessLLMInterface;
use crate::error::LlmError;
use crate::translate::interface::TranslateRequest;
use crate::translate::prompt::compose;
use crate::translate::store::ResultStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field was blank; nothing was sent
    Ignored,
    Translated(String),
}

/// Bridges one form submission to one completion request
pub struct Translator {
    llm: Arc<dyn StatelessLLMInterface>,
}

impl Translator {
    pub fn new(llm: Arc<dyn StatelessLLMInterface>) -> Self {
        Self { llm }
    }

    /// Compose, call the provider once, and record the result in `store`.
    ///
    /// On error the store keeps whatever it held before.
    pub async fn submit(
        &self,
        store: &mut ResultStore,
        request: &TranslateRequest,
    ) -> Result<SubmitOutcome, LlmError> {
        let Some(messages) = compose(&request.text, &request.language) else {
            debug!("Ignoring submission with a blank field");
            return Ok(SubmitOutcome::Ignored);
        };

        let text = self.llm.chat_completion(&messages).await?;
        info!(
            "Translated {} chars into {}",
            request.text.chars().count(),
            request.language
        );

        store.set(text.clone(), request.language.clone());
        Ok(SubmitOutcome::Translated(text))
    }
}
