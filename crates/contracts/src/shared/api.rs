use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// JSON envelope every backend endpoint wraps its response in.
///
/// `status` reports business-level success; `errors` carries per-field
/// validation messages keyed by field name on rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl<T> ApiEnvelope<T> {
    /// Collapse the envelope's failure information into one display string.
    ///
    /// Field errors win over the top-level message; when the envelope
    /// carries neither, `fallback` is returned.
    pub fn error_summary(&self, fallback: &str) -> String {
        if let Some(errors) = &self.errors {
            let mut messages: Vec<String> = errors
                .values()
                .flat_map(|msgs| msgs.iter().cloned())
                .collect();
            messages.sort();
            if !messages.is_empty() {
                return messages.join(" ");
            }
        }
        if !self.message.trim().is_empty() {
            return self.message.clone();
        }
        fallback.to_string()
    }
}
