//! Generative-text provider plumbing.

pub mod gemini;
pub mod shared;

use std::future::Future;

use serde_json::Value;

pub use gemini::{GeminiConfig, GeminiTransport};
pub use shared::{USER_AGENT, resolve_api_key, resolve_base_url};

use crate::strategy::StrategyError;

/// One outbound `generateContent` call.
///
/// Implementations send `request` for `model` and return the model's text
/// output, or `None` when the response carried no text. Failures are
/// reported as [`StrategyError::Upstream`].
pub trait Transport {
    fn generate_content(
        &self,
        api_key: &str,
        model: &str,
        request: &Value,
    ) -> impl Future<Output = Result<Option<String>, StrategyError>> + Send;
}
