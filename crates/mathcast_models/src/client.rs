//! Chat completion client for OpenAI-compatible endpoints.

use crate::prompts;
use crate::usage::UsageTracker;
use async_trait::async_trait;
use mathcast_core::{AnimationPlan, VideoRequest};
use mathcast_error::{CapabilityError, CapabilityErrorKind, ConfigError, MathcastResult};
use mathcast_interface::{GeneratedContent, MathModel, ModelUsage, PlanDraft, RepairContext};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio_retry2::{strategy::jitter, strategy::ExponentialBackoff, Retry, RetryError};
use tracing::{debug, instrument, warn};

/// Connection settings for the chat endpoint.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Base URL ending at the API root (e.g. `https://api.openai.com/v1`)
    pub base_url: String,
    /// Bearer token
    pub api_key: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Retry attempts for transient HTTP failures
    pub max_retries: usize,
    /// Initial backoff delay in milliseconds
    pub initial_backoff_ms: u64,
}

impl ChatConfig {
    /// Reads the configuration from `MATHCAST_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when `MATHCAST_API_KEY` is unset.
    pub fn from_env() -> MathcastResult<Self> {
        let api_key = std::env::var("MATHCAST_API_KEY")
            .map_err(|_| ConfigError::new("MATHCAST_API_KEY not set"))?;
        Ok(Self {
            base_url: std::env::var("MATHCAST_MODEL_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            api_key,
            model: std::env::var("MATHCAST_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            max_retries: 3,
            initial_backoff_ms: 500,
        })
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Deserialize, Default)]
struct TokenUsage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

/// [`MathModel`] backed by an OpenAI-compatible chat completion endpoint.
///
/// Transient failures (connection errors, 429, 5xx) are retried with
/// exponential backoff and jitter; other statuses fail immediately.
pub struct ChatClient {
    client: reqwest::Client,
    config: ChatConfig,
    usage: UsageTracker,
}

impl ChatClient {
    /// Creates a client with the given configuration.
    pub fn new(config: ChatConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            usage: UsageTracker::new(),
        }
    }

    /// Creates a client configured from the environment.
    pub fn from_env() -> MathcastResult<Self> {
        Ok(Self::new(ChatConfig::from_env()?))
    }

    /// Snapshot of per-operation usage for the run metrics.
    pub fn usage_snapshot(&self) -> HashMap<String, ModelUsage> {
        self.usage.snapshot()
    }

    async fn request_once(
        &self,
        system: &str,
        user: &str,
    ) -> Result<ChatResponse, CapabilityError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: 0.7,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                CapabilityError::new(CapabilityErrorKind::Api {
                    status: 0,
                    message: format!("request failed: {e}"),
                })
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(CapabilityError::new(CapabilityErrorKind::Api {
                status,
                message,
            }));
        }

        response.json::<ChatResponse>().await.map_err(|e| {
            CapabilityError::new(CapabilityErrorKind::MalformedResponse(format!(
                "failed to parse completion: {e}"
            )))
        })
    }

    /// Whether a capability failure is worth retrying.
    fn is_transient(err: &CapabilityError) -> bool {
        matches!(
            err.kind,
            CapabilityErrorKind::Api { status, .. }
                if status == 0 || status == 429 || status >= 500
        )
    }

    #[instrument(skip(self, system, user))]
    async fn chat(&self, operation: &str, system: &str, user: &str) -> MathcastResult<String> {
        let strategy = ExponentialBackoff::from_millis(self.config.initial_backoff_ms)
            .factor(2)
            .max_delay(Duration::from_secs(30))
            .map(jitter)
            .take(self.config.max_retries);

        let response = Retry::spawn(strategy, || async move {
            match self.request_once(system, user).await {
                Ok(response) => Ok(response),
                Err(e) if Self::is_transient(&e) => {
                    warn!(error = %e, operation, "transient model failure, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => Err(RetryError::Permanent(e)),
            }
        })
        .await?;

        if let Some(usage) = &response.usage {
            self.usage
                .record(operation, usage.prompt_tokens, usage.completion_tokens);
        }

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                CapabilityError::new(CapabilityErrorKind::MalformedResponse(
                    "completion contained no choices".to_string(),
                ))
            })?;
        debug!(operation, chars = content.len(), "model call complete");
        Ok(content)
    }
}

#[async_trait]
impl MathModel for ChatClient {
    #[instrument(skip_all)]
    async fn explain(&self, request: &VideoRequest) -> MathcastResult<String> {
        let explanation = self
            .chat("explain", prompts::EXPLAIN_SYSTEM, &prompts::explain_user(request))
            .await?;
        if explanation.trim().is_empty() {
            return Err(CapabilityError::new(CapabilityErrorKind::Explain(
                "model returned an empty explanation".to_string(),
            )))?;
        }
        Ok(explanation)
    }

    #[instrument(skip_all)]
    async fn plan(&self, request: &VideoRequest, explanation: &str) -> MathcastResult<PlanDraft> {
        let response = self
            .chat("plan", prompts::PLAN_SYSTEM, &prompts::plan_user(request, explanation))
            .await?;
        let json = crate::prompts::extract_json(&response);
        serde_json::from_str(&json).map_err(|e| {
            CapabilityError::new(CapabilityErrorKind::MalformedResponse(format!(
                "plan draft did not parse: {e}"
            )))
            .into()
        })
    }

    #[instrument(skip_all, fields(sections = plan.sections.len()))]
    async fn generate_content(&self, plan: &AnimationPlan) -> MathcastResult<GeneratedContent> {
        let response = self
            .chat("generate_content", prompts::CONTENT_SYSTEM, &prompts::content_user(plan))
            .await?;
        let json = crate::prompts::extract_json(&response);
        let content: GeneratedContent = serde_json::from_str(&json).map_err(|e| {
            CapabilityError::new(CapabilityErrorKind::MalformedResponse(format!(
                "generated content did not parse: {e}"
            )))
        })?;

        for section in &plan.sections {
            if !content.scripts.contains_key(&section.id) {
                return Err(CapabilityError::new(CapabilityErrorKind::ContentGeneration(
                    format!("no script generated for section '{}'", section.id),
                )))?;
            }
        }
        Ok(content)
    }

    #[instrument(skip_all, fields(section = %context.section_id(), attempt = context.attempt()))]
    async fn fix_code(&self, context: &RepairContext) -> MathcastResult<Option<String>> {
        let response = self
            .chat("fix_code", prompts::REPAIR_SYSTEM, &prompts::repair_user(context))
            .await?;
        if response.contains(prompts::REFUSAL_SENTINEL) {
            return Ok(None);
        }
        let code = crate::prompts::extract_code_block(&response);
        if code.is_empty() {
            return Ok(None);
        }
        Ok(Some(code))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn usage(&self) -> HashMap<String, ModelUsage> {
        self.usage.snapshot()
    }
}
