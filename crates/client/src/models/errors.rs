//! Error body returned by the API on non-success responses.

use serde::Deserialize;

/// `{"status": 400, "id": "...", "code": "...", "message": "..."}`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub id: Option<String>,
    pub code: Option<String>,
    pub message: String,
}

impl ApiErrorBody {
    /// `code: message` when a code is present, otherwise the message alone.
    pub(crate) fn summary(&self) -> String {
        match &self.code {
            Some(code) => format!("{}: {}", code, self.message),
            None => self.message.clone(),
        }
    }
}
