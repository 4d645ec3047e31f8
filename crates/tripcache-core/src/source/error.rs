use thiserror::Error;

/// Maximum length for response bodies carried inside error values
const MAX_ERROR_BODY_LENGTH: usize = 500;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SourceError {
    /// Truncate a response body to avoid dragging huge payloads around
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let truncated: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
            format!("{}... (truncated, {} total bytes)", truncated, body.len())
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        SourceError::Status {
            status: status.as_u16(),
            body: Self::truncate_body(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(2000);
        let err = SourceError::from_status(reqwest::StatusCode::BAD_GATEWAY, &body);
        match err {
            SourceError::Status { status, body } => {
                assert_eq!(status, 502);
                assert!(body.len() < 600);
                assert!(body.contains("truncated"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
