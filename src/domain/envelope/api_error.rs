use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error condition reported inside a response envelope.
///
/// `code` conventionally mirrors the HTTP status of the response carrying it,
/// but nothing enforces that. Zero-valued fields are omitted on the wire and
/// default to zero when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub code: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl ApiError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// True when every field is zero-valued
    pub fn is_empty(&self) -> bool {
        self.code == 0 && self.message.is_empty()
    }

    /// Reason phrase registered for `code`, empty for unknown codes
    pub fn status_text(&self) -> &'static str {
        u16::try_from(self.code)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .and_then(|status| status.canonical_reason())
            .unwrap_or("")
    }

    /// Wildcard match: each non-zero field of `target` must equal ours.
    pub fn is(&self, target: &ApiError) -> bool {
        (target.code == 0 || target.code == self.code)
            && (target.message.is_empty() || target.message == self.message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{} {}", self.code, self.status_text())
        } else {
            write!(f, "{} ({} {})", self.message, self.code, self.status_text())
        }
    }
}

impl std::error::Error for ApiError {}

fn is_zero(code: &i64) -> bool {
    *code == 0
}
