//! Remote Rewrite Agent
//!
//! Calls the remote chat-completions endpoint to rewrite a fact in a given
//! comedic style, falling back to the local template transformer on any
//! failure. The caller-facing contract is infallible.

use std::time::Duration;

use async_trait::async_trait;
use rand::{rngs::StdRng, Rng, SeedableRng};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use kumo::domain::Style;
use kumo::ports::StyleRewriter;

use crate::services::fallback::witty_fallback;

const BASE_URL: &str = "https://api.perplexity.ai";
const DEFAULT_MODEL: &str = "sonar-pro";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const TEMPERATURE: f32 = 0.8;

/// Probability of asking the remote service for a brand-new fact instead
/// of rephrasing the stored one. Fixed design parameter.
const GENERATE_NEW_PROBABILITY: f64 = 0.3;

/// How a single remote call is phrased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteMode {
    /// Ask for an original fact in the requested style
    GenerateNew,
    /// Ask to rephrase the stored fact in the requested style
    Rephrase,
}

impl RewriteMode {
    /// Weighted coin flip: 30% generate-new, 70% rephrase.
    pub fn draw(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(GENERATE_NEW_PROBABILITY) {
            RewriteMode::GenerateNew
        } else {
            RewriteMode::Rephrase
        }
    }
}

/// Agent calling the remote text-generation service.
#[derive(Clone)]
pub struct RewriteAgent {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    seed: Option<u64>,
}

impl RewriteAgent {
    /// Creates a new agent using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            seed: None,
        }
    }

    /// Overrides the model name if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the endpoint base URL (tests point this at a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Fixes the RNG seed so mode and fallback draws are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Rewrite `fact` with an injected RNG. Never fails: remote trouble
    /// routes to the local fallback, and a well-formed response with no
    /// usable content yields the original fact unchanged.
    pub async fn rewrite_with_rng(
        &self,
        fact: &str,
        style: Style,
        rng: &mut (impl Rng + Send),
    ) -> String {
        let mode = RewriteMode::draw(rng);
        let prompt = build_prompt(fact, style, mode);
        tracing::debug!("remote rewrite: style={} mode={:?}", style, mode);

        match self.call_remote(&prompt).await {
            Ok(payload) => match extract_rewrite(&payload) {
                Some(witty) => witty,
                None => {
                    tracing::warn!("remote service returned no usable content, keeping original fact");
                    fact.to_string()
                }
            },
            Err(err) => {
                tracing::warn!("remote rewrite failed ({}), using local fallback", err);
                witty_fallback(fact, Some(style), rng)
            }
        }
    }

    async fn call_remote(&self, prompt: &str) -> Result<Value, RewriteError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessageBody {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(|err| RewriteError::RequestFailed(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(RewriteError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|err| RewriteError::ParseError(err.to_string()))
    }
}

#[async_trait]
impl StyleRewriter for RewriteAgent {
    async fn rewrite(&self, fact: &str, style: Style) -> String {
        let mut rng = self.rng();
        self.rewrite_with_rng(fact, style, &mut rng).await
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessageBody>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessageBody {
    role: &'static str,
    content: String,
}

/// Remote rewrite error types
#[derive(Debug, Clone)]
pub enum RewriteError {
    RequestFailed(String),
    ParseError(String),
    ApiError { status: u16, message: String },
}

impl std::fmt::Display for RewriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RewriteError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            RewriteError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            RewriteError::ApiError { status, message } => {
                write!(f, "API error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for RewriteError {}

// ============================================
// Helper Functions
// ============================================

fn build_prompt(fact: &str, style: Style, mode: RewriteMode) -> String {
    match mode {
        RewriteMode::GenerateNew => format!(
            "Generate a new, original cloud computing fun fact in the {} style. \
             Make it concise (1-2 sentences), clever, witty, and sarcastic. \
             Use puns, unexpected metaphors, or dry humor. \
             Keep it family-friendly and return only the fact string without \
             surrounding quotes or explanations.",
            style
        ),
        RewriteMode::Rephrase => format!(
            "Rewrite the following cloud computing fact in the {} style as a \
             concise (1-2 sentence), clever, witty, and sarcastic line. \
             Use puns, unexpected metaphors, or dry humor, keep it \
             family-friendly, and do not add any extra explanation or \
             disclaimers. Return only the rewritten fact string without \
             surrounding quotes.\n\nFact: {}",
            style, fact
        ),
    }
}

/// Tolerant extraction across the payload shapes different bridges return.
/// Prefers `choices[0].message.content`, then the flatter `choices[0].text`;
/// whitespace-trimmed, with empty text treated as absent.
fn extract_rewrite(root: &Value) -> Option<String> {
    let first = root.get("choices")?.as_array()?.first()?;

    let content = first
        .get("message")
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .or_else(|| first.get("text").and_then(Value::as_str))?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
