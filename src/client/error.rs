//! Error body returned by the Gemini API.

use serde::Deserialize;

/// `{"error": {"code": 400, "message": "...", "status": "INVALID_ARGUMENT"}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

impl ErrorResponse {
    pub fn into_error(self, status: u16) -> crate::Error {
        crate::Error::Api {
            message: self.error.message,
            status: Some(self.error.code.unwrap_or(status)),
            error_type: self.error.status,
        }
    }

    /// Interpret a non-success body, falling back to the raw text when it is
    /// not the documented error shape.
    pub fn parse(status: u16, body: &str) -> crate::Error {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(error) => error.into_error(status),
            Err(_) => crate::Error::Api {
                message: if body.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.trim().to_string()
                },
                status: Some(status),
                error_type: None,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: Option<u16>,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
