use crate::api::models::LyricsRequest;
use once_cell::sync::Lazy;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Path of the generation endpoint, relative to the serving host.
pub const LYRICS_API_PATH: &str = "/lyrics-api";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Where the lyrics API lives. On the web build this is replaced with the
/// page origin once the app mounts; the default matches a locally running
/// backend for the desktop build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

pub struct LyricsApiClient {
    base_url: String,
}

impl LyricsApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Submit one generation request. The success body is opaque text and is
    /// returned verbatim; any failure collapses into a single user-facing
    /// message. No retry and no timeout: the caller owns the one in-flight
    /// request and simply waits it out.
    pub async fn generate_lyrics(&self, request: &LyricsRequest) -> Result<String, String> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), LYRICS_API_PATH);

        #[cfg(not(target_arch = "wasm32"))]
        let started_at = std::time::Instant::now();

        let response = HTTP_CLIENT
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|error| error.to_string())?;

        let status = response.status();
        let body = response.text().await.map_err(|error| error.to_string())?;

        #[cfg(not(target_arch = "wasm32"))]
        crate::diagnostics::log_perf(
            "lyrics-api generate",
            started_at,
            &format!("status {}", status.as_u16()),
        );

        if status.is_success() {
            Ok(body)
        } else {
            Err(error_message_from_body(status.as_u16(), &body))
        }
    }
}

/// Pull a human-readable message out of an error response. The backend sends
/// `{"message": "..."}`, but proxies and crashes can hand back anything, so
/// fall back to the raw body and then to the bare status code.
pub fn error_message_from_body(status: u16, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .map(str::to_string)
        });

    if let Some(message) = from_json {
        return message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Request failed with status {status}")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_is_extracted_from_error_body() {
        let message = error_message_from_body(404, r#"{"message":"model not found"}"#);
        assert_eq!(message, "model not found");
    }

    #[test]
    fn non_json_error_body_is_shown_raw() {
        let message = error_message_from_body(502, "Bad Gateway");
        assert_eq!(message, "Bad Gateway");
    }

    #[test]
    fn json_without_message_falls_back_to_body_text() {
        let message = error_message_from_body(500, r#"{"error":"boom"}"#);
        assert_eq!(message, r#"{"error":"boom"}"#);
    }

    #[test]
    fn empty_error_body_reports_the_status() {
        let message = error_message_from_body(503, "");
        assert_eq!(message, "Request failed with status 503");
    }

    #[test]
    fn blank_message_field_is_not_trusted() {
        let message = error_message_from_body(500, r#"{"message":"  "}"#);
        assert_eq!(message, r#"{"message":"  "}"#);
    }
}
