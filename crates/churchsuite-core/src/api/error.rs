use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response (status {status}): {message}")]
    InvalidResponse { status: StatusCode, message: String },

    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to encode query string: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("No temporary auth code provided")]
    MissingAuthorizationCode,

    #[error("No access token set")]
    MissingAccessToken,

    #[error("OAuth2 options are required for this client")]
    MissingOAuth2Config,
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Maximum length for response bodies quoted in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    pub fn invalid_response(status: StatusCode, source: &serde_json::Error, body: &str) -> Self {
        ApiError::InvalidResponse {
            status,
            message: format!("{}: {}", source, Self::truncate_body(body)),
        }
    }

    /// True for failures raised before any request was sent.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ApiError::MissingAuthorizationCode
                | ApiError::MissingAccessToken
                | ApiError::MissingOAuth2Config
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_body() {
        assert_eq!(ApiError::truncate_body("short"), "short");

        let long = "x".repeat(600);
        let truncated = ApiError::truncate_body(&long);
        assert!(truncated.starts_with(&"x".repeat(500)));
        assert!(truncated.ends_with("(truncated, 600 total bytes)"));
    }

    #[test]
    fn test_truncate_body_respects_char_boundaries() {
        let body = format!("{}é{}", "a".repeat(499), "b".repeat(10));
        let truncated = ApiError::truncate_body(&body);
        assert!(truncated.starts_with(&"a".repeat(499)));
        assert!(!truncated.contains('é'));
    }

    #[test]
    fn test_invalid_response_message() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let api_err = ApiError::invalid_response(StatusCode::BAD_GATEWAY, &err, "<html>");
        let message = api_err.to_string();
        assert!(message.contains("502"));
        assert!(message.contains("<html>"));
    }

    #[test]
    fn test_precondition_errors() {
        assert!(ApiError::MissingAuthorizationCode.is_precondition());
        assert!(ApiError::MissingAccessToken.is_precondition());
        assert!(ApiError::MissingOAuth2Config.is_precondition());
        assert!(!ApiError::InvalidHeader("X-Auth").is_precondition());
    }
}
