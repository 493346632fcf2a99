use serde::{Deserialize, Serialize};

/// Field values of one submission; the same shape arrives as a form or as JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    Translated,
    Ignored,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub status: SubmitStatus,
    pub translated_text: Option<String>,
}
