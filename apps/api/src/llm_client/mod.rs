//! LLM Client: the single point of entry for all upstream text-generation calls.
//!
//! Both supported providers speak the OpenAI-compatible chat completions protocol,
//! so one client type covers them; a `ProviderKind` picks endpoint, model and tuning.
//! No other module may talk to a provider API directly.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;
pub mod selection;

const PERPLEXITY_API_URL: &str = "https://api.perplexity.ai/chat/completions";
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// Models are pinned per provider; not configurable.
pub const PERPLEXITY_MODEL: &str = "llama-3.1-sonar-small-128k-online";
pub const OPENAI_MODEL: &str = "gpt-4o";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Perplexity,
    #[serde(rename = "openai")]
    OpenAi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Perplexity => "perplexity",
            ProviderKind::OpenAi => "openai",
        }
    }

    fn endpoint(&self) -> &'static str {
        match self {
            ProviderKind::Perplexity => PERPLEXITY_API_URL,
            ProviderKind::OpenAi => OPENAI_API_URL,
        }
    }

    pub fn model(&self) -> &'static str {
        match self {
            ProviderKind::Perplexity => PERPLEXITY_MODEL,
            ProviderKind::OpenAi => OPENAI_MODEL,
        }
    }

    fn tuning(&self) -> Tuning {
        match self {
            ProviderKind::Perplexity => Tuning {
                max_tokens: Some(1000),
                temperature: Some(0.7),
                top_p: Some(0.9),
                frequency_penalty: Some(0.5),
                presence_penalty: Some(0.0),
                stream: Some(false),
                response_format: None,
            },
            ProviderKind::OpenAi => Tuning {
                response_format: Some(ResponseFormat {
                    format_type: "json_object",
                }),
                ..Tuning::default()
            },
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed two-message instruction sent for every capability call.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// A chat-style completion backend. `AiGateway` holds an ordered list of these.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Sends the prompt pair and returns the raw reply text.
    async fn complete(&self, prompt: &PromptPair) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    #[serde(flatten)]
    tuning: Tuning,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Clone, Default, Serialize)]
struct Tuning {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Clone, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatReply,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the message text of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client for one OpenAI-compatible chat completions provider.
/// Issues exactly one request per call; fallback is the gateway's job.
#[derive(Clone)]
pub struct ChatCompletionsClient {
    client: Client,
    kind: ProviderKind,
    endpoint: String,
    api_key: String,
}

impl ChatCompletionsClient {
    pub fn new(kind: ProviderKind, api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            kind,
            endpoint: kind.endpoint().to_string(),
            api_key,
        })
    }

    /// Points the client at a different chat completions URL.
    #[cfg(test)]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn request_body<'a>(&self, prompt: &'a PromptPair) -> ChatRequest<'a> {
        ChatRequest {
            model: self.kind.model(),
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            tuning: self.kind.tuning(),
        }
    }
}

#[async_trait]
impl CompletionProvider for ChatCompletionsClient {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn complete(&self, prompt: &PromptPair) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;

        if let Some(usage) = &chat.usage {
            debug!(
                provider = %self.kind,
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat.text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Pulls the JSON payload out of LLM output.
///
/// Takes the first fenced block if the reply has one, otherwise the first balanced
/// `{...}` or `[...]` span. Prose and citations around the payload are dropped.
/// Text with no JSON-looking span comes back trimmed and unchanged.
pub fn extract_json(text: &str) -> &str {
    let text = text.trim();

    if let Some(open) = text.find("```") {
        let body = &text[open + 3..];
        // Skip the info string (```json) up to the end of its line.
        let body = match body.find('\n') {
            Some(nl) if body[..nl].trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
                &body[nl + 1..]
            }
            _ => body.strip_prefix("json").unwrap_or(body),
        };
        let body = body.find("```").map_or(body, |close| &body[..close]);
        return body.trim();
    }

    match text.find(|c| c == '{' || c == '[') {
        Some(start) => balanced_span(&text[start..]),
        None => text,
    }
}

/// The prefix of `text` (which starts with an opener) up to its matching closer.
/// Brackets inside string literals are ignored. Unbalanced input is returned whole.
fn balanced_span(text: &str) -> &str {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return &text[..i + 1];
                }
            }
            _ => {}
        }
    }

    text
}
