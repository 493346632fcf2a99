use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single translation a session remembers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTranslation {
    pub text: String,
    pub target_language: String,
    pub translated_at: DateTime<Utc>,
}

/// Holds at most one result. Only a successful completion writes to it and
/// nothing clears it.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    last: Option<StoredTranslation>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&StoredTranslation> {
        self.last.as_ref()
    }

    pub fn set(&mut self, text: String, target_language: String) {
        self.last = Some(StoredTranslation {
            text,
            target_language,
            translated_at: Utc::now(),
        });
    }
}
