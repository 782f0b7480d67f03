use std::fmt;

/// Failure categories for an upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// HTTP status error (4xx, 5xx)
    HttpStatus,
    /// Connection timeout or request timeout
    Timeout,
    /// Connection or request failure before a status was received
    Network,
    /// Response envelope was not the expected Gemini shape
    Parse,
    /// The model returned no text
    EmptyBody,
}

impl fmt::Display for UpstreamErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamErrorKind::HttpStatus => write!(f, "http_status"),
            UpstreamErrorKind::Timeout => write!(f, "timeout"),
            UpstreamErrorKind::Network => write!(f, "network"),
            UpstreamErrorKind::Parse => write!(f, "parse"),
            UpstreamErrorKind::EmptyBody => write!(f, "empty_body"),
        }
    }
}

/// Errors from [`super::StrategyClient::generate_strategy`].
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    /// No API credential configured. Raised before any network call.
    #[error("API Key is missing. Set {env_var} or api_key in [gemini].")]
    Configuration { env_var: &'static str },

    /// The service could not be reached, failed, or returned no text.
    #[error("{message}")]
    Upstream {
        kind: UpstreamErrorKind,
        message: String,
        /// Optional additional details (e.g., raw error body)
        details: Option<String>,
    },

    /// The returned text is not a valid strategy document.
    #[error("Failed to parse the strategy response: {detail}")]
    Schema {
        detail: String,
        /// Model output as received, kept for diagnostics.
        raw_body: String,
    },
}

impl StrategyError {
    /// Creates an upstream error without details.
    pub fn upstream(kind: UpstreamErrorKind, message: impl Into<String>) -> Self {
        Self::Upstream {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error, lifting `error.message` out of a JSON body.
    pub fn http_status(status: u16, body: &str) -> Self {
        let details = (!body.is_empty()).then(|| body.to_string());
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                json.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(|msg| format!("HTTP {status}: {msg}"))
            })
            .unwrap_or_else(|| format!("HTTP {status}"));

        Self::Upstream {
            kind: UpstreamErrorKind::HttpStatus,
            message,
            details,
        }
    }

    /// Creates the error for a response with no text.
    pub fn empty_body() -> Self {
        Self::upstream(UpstreamErrorKind::EmptyBody, "No data returned from Gemini.")
    }

    /// Upstream kind, if this is an upstream error.
    pub fn upstream_kind(&self) -> Option<UpstreamErrorKind> {
        match self {
            Self::Upstream { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
