//! Gemini API key provider (Generative Language API).

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Map, Value, json};

use super::Transport;
use super::shared::{USER_AGENT, resolve_api_key, resolve_base_url};
use crate::strategy::{Section, StrategyError, UpstreamErrorKind};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked for the API key, in order.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Gemini API configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// `None` when no credential is configured anywhere.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl GeminiConfig {
    /// Creates a new config from environment.
    ///
    /// Authentication resolution order:
    /// 1. `config_api_key` parameter (from config file)
    /// 2. `GEMINI_API_KEY` environment variable
    /// 3. `API_KEY` environment variable
    ///
    /// A missing key is not an error here; it surfaces as
    /// [`StrategyError::Configuration`] when a request is attempted.
    ///
    /// # Errors
    /// Returns an error if the configured base URL is invalid.
    pub fn from_env(
        model: String,
        config_base_url: Option<&str>,
        config_api_key: Option<&str>,
    ) -> Result<Self> {
        let api_key = resolve_api_key(config_api_key, API_KEY_ENV_VARS);
        let base_url = resolve_base_url(
            config_base_url,
            "GEMINI_BASE_URL",
            DEFAULT_BASE_URL,
            "Gemini",
        )?;

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }
}

/// HTTP transport for `models/{model}:generateContent`.
#[derive(Debug, Clone)]
pub struct GeminiTransport {
    base_url: String,
    http: reqwest::Client,
}

impl GeminiTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }
}

impl Transport for GeminiTransport {
    async fn generate_content(
        &self,
        api_key: &str,
        model: &str,
        request: &Value,
    ) -> Result<Option<String>, StrategyError> {
        let url = format!("{}/models/{model}:generateContent", self.base_url);

        let response = self
            .http
            .post(url)
            .headers(build_headers(api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StrategyError::http_status(status.as_u16(), &body));
        }
        let body = response
            .text()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        let value: Value = serde_json::from_str(&body).map_err(|e| StrategyError::Upstream {
            kind: UpstreamErrorKind::Parse,
            message: format!("Failed to parse Gemini response envelope: {e}"),
            details: Some(body.clone()),
        })?;
        Ok(extract_text(&value))
    }
}

/// Builds a JSON-mode `generateContent` request for the strategy prompt.
pub fn build_strategy_request(prompt: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{
                "text": prompt
            }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": strategy_response_schema(),
        },
    })
}

/// Declared output schema: an object of eight required string properties.
pub fn strategy_response_schema() -> Value {
    let mut properties = Map::new();
    for section in Section::all() {
        properties.insert(
            section.field_name().to_string(),
            json!({
                "type": "STRING",
                "description": section.schema_description(),
            }),
        );
    }
    let required: Vec<&str> = Section::all().iter().map(Section::field_name).collect();

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

/// Concatenates the text parts of the first candidate.
///
/// Thought parts are skipped. Returns `None` when there is no text.
pub fn extract_text(value: &Value) -> Option<String> {
    let payload = value.get("response").unwrap_or(value);
    let parts = payload
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter(|part| !part.get("thought").and_then(Value::as_bool).unwrap_or(false))
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    (!text.is_empty()).then_some(text)
}

fn classify_reqwest_error(e: &reqwest::Error) -> StrategyError {
    if e.is_timeout() {
        StrategyError::upstream(UpstreamErrorKind::Timeout, format!("Request timed out: {e}"))
    } else if e.is_connect() {
        StrategyError::upstream(UpstreamErrorKind::Network, format!("Connection failed: {e}"))
    } else {
        StrategyError::upstream(UpstreamErrorKind::Network, format!("Network error: {e}"))
    }
}

fn build_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-goog-api-key",
        HeaderValue::from_str(api_key).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    headers.insert("accept", HeaderValue::from_static("application/json"));
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    headers.insert("user-agent", HeaderValue::from_static(USER_AGENT));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_strategy_request_requests_json_mode() {
        let request = build_strategy_request("Analyze the niche");

        assert_eq!(request["contents"][0]["role"], json!("user"));
        assert_eq!(
            request["contents"][0]["parts"][0]["text"],
            json!("Analyze the niche")
        );
        assert_eq!(
            request["generationConfig"]["responseMimeType"],
            json!("application/json")
        );
    }

    #[test]
    fn test_response_schema_declares_eight_required_strings() {
        let schema = strategy_response_schema();
        assert_eq!(schema["type"], json!("OBJECT"));
        assert_eq!(
            schema["required"],
            json!([
                "nicheAnalysis",
                "videoBlueprint",
                "script",
                "seo",
                "thumbnails",
                "shorts",
                "uploadStrategy",
                "monetization"
            ])
        );
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 8);
        assert!(properties.values().all(|p| p["type"] == json!("STRING")));
        assert!(
            properties["seo"]["description"]
                .as_str()
                .unwrap()
                .contains("Hashtags")
        );
    }

    #[test]
    fn test_extract_text_joins_parts_and_skips_thoughts() {
        let value = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "thinking...", "thought": true },
                        { "text": "{\"a\":" },
                        { "text": "1}" }
                    ]
                }
            }]
        });
        assert_eq!(extract_text(&value).as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_extract_text_unwraps_response_envelope() {
        let value = json!({
            "response": {
                "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
            }
        });
        assert_eq!(extract_text(&value).as_deref(), Some("ok"));
    }

    #[test]
    fn test_extract_text_none_without_text() {
        assert_eq!(extract_text(&json!({})), None);
        assert_eq!(extract_text(&json!({ "candidates": [] })), None);
        let blocked = json!({
            "candidates": [{ "content": { "parts": [] }, "finishReason": "SAFETY" }]
        });
        assert_eq!(extract_text(&blocked), None);
    }

    #[test]
    fn test_build_headers() {
        let headers = build_headers("secret");
        assert_eq!(headers["x-goog-api-key"], "secret");
        assert_eq!(headers["accept"], "application/json");
        assert!(
            headers["user-agent"]
                .to_str()
                .unwrap()
                .starts_with("tubeflow/")
        );
    }
}
