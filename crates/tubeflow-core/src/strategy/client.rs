use tracing::{debug, warn};

use super::{StrategyDocument, StrategyError};
use crate::prompts::render_strategy_prompt;
use crate::providers::gemini::{API_KEY_ENV_VARS, build_strategy_request};
use crate::providers::{GeminiConfig, GeminiTransport, Transport};
use crate::strategy::UpstreamErrorKind;

/// Strategy-request client.
///
/// Owns its configuration and transport; construct one per caller and pass
/// it by reference. The client does not guard against concurrent use, so
/// callers keep at most one request in flight.
pub struct StrategyClient<T = GeminiTransport> {
    config: GeminiConfig,
    transport: T,
}

impl StrategyClient<GeminiTransport> {
    /// Creates a client that talks HTTP to `config.base_url`.
    pub fn new(config: GeminiConfig) -> Self {
        let transport = GeminiTransport::new(config.base_url.clone());
        Self { config, transport }
    }
}

impl<T: Transport> StrategyClient<T> {
    pub fn with_transport(config: GeminiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generates the eight-section strategy for `niche`.
    ///
    /// Single request, no retry. `niche` is free text inserted verbatim.
    ///
    /// # Errors
    /// - [`StrategyError::Configuration`] when no API key is configured
    ///   (checked before any transport call)
    /// - [`StrategyError::Upstream`] when the call fails or returns no text
    /// - [`StrategyError::Schema`] when the text is not a complete document
    pub async fn generate_strategy(&self, niche: &str) -> Result<StrategyDocument, StrategyError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(StrategyError::Configuration {
                env_var: API_KEY_ENV_VARS[0],
            });
        };

        let prompt = render_strategy_prompt(niche).map_err(|e| {
            StrategyError::upstream(UpstreamErrorKind::Parse, format!("{e:#}"))
        })?;
        let request = build_strategy_request(&prompt);

        debug!(
            model = %self.config.model,
            niche_len = niche.len(),
            "requesting strategy"
        );

        let text = self
            .transport
            .generate_content(api_key, &self.config.model, &request)
            .await?
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(StrategyError::empty_body)?;

        parse_document(text)
    }
}

/// Parses model output into a document, keeping the raw text on failure.
///
/// # Errors
/// Returns [`StrategyError::Schema`] for invalid JSON or a missing/non-string
/// field.
pub fn parse_document(text: String) -> Result<StrategyDocument, StrategyError> {
    match serde_json::from_str::<StrategyDocument>(&text) {
        Ok(document) => {
            debug!(bytes = text.len(), "strategy parsed");
            Ok(document)
        }
        Err(e) => {
            warn!(error = %e, "failed to parse strategy response");
            Err(StrategyError::Schema {
                detail: e.to_string(),
                raw_body: text,
            })
        }
    }
}
