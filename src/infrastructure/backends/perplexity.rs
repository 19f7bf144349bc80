#[cfg(test)]
#[path = "perplexity_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Serialize;
use serde_json::Value;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::collapse_completion;
use crate::domain::models::Author;
use crate::domain::models::Backend;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::CompletionError;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::ModelName;
use crate::domain::models::Role;
use crate::domain::services::normalize_roles;

pub const PREAMBLE: &str = "국립강릉원주대학교 정보를 정확하고 간결하게 제공하는 도우미입니다.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub frequency_penalty: f64,
}

impl CompletionRequest {
    /// Always starts with exactly one system message, followed by the history
    /// with alternating roles.
    pub fn new(model: ModelName, history: &[Message]) -> CompletionRequest {
        let mut messages = vec![Message::system(PREAMBLE)];
        messages.extend(
            history
                .iter()
                .filter(|message| return message.role != Role::System)
                .cloned(),
        );

        return CompletionRequest {
            model: model.to_string(),
            messages: normalize_roles(messages),
            max_tokens: 1024,
            temperature: 0.2,
            frequency_penalty: 0.5,
        };
    }
}

fn parse_answer(body: &str) -> Result<String, CompletionError> {
    let value: Value = serde_json::from_str(body).map_err(|err| {
        return CompletionError::Decode {
            message: err.to_string(),
        };
    })?;

    let first_choice = value
        .get("choices")
        .and_then(|choices| return choices.as_array())
        .and_then(|choices| return choices.first());

    let choice = match first_choice {
        Some(choice) => choice,
        None => return Err(CompletionError::EmptyResponse),
    };

    match choice.pointer("/message/content").and_then(Value::as_str) {
        Some(content) => return Ok(content.to_string()),
        None => {
            return Err(CompletionError::Unexpected(
                "응답에 message.content가 없습니다.".to_string(),
            ));
        }
    }
}

pub struct Perplexity {
    url: String,
    token: String,
}

impl Default for Perplexity {
    fn default() -> Perplexity {
        return Perplexity {
            url: Config::get(ConfigKey::ApiURL),
            token: Config::get(ConfigKey::ApiToken),
        };
    }
}

impl Perplexity {
    /// Sends a single request. No retries, no timeout.
    pub async fn complete(&self, req: &CompletionRequest) -> Result<String, CompletionError> {
        let url = format!("{url}/chat/completions", url = self.url.trim_end_matches('/'));
        let res = reqwest::Client::new()
            .post(&url)
            .bearer_auth(&self.token)
            .json(req)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = ?err, "Perplexity is not reachable");
                return CompletionError::Transport {
                    message: err.to_string(),
                };
            })?;

        let status = res.status();
        let status_err = res.error_for_status_ref().err();
        let body = res.text().await.map_err(|err| {
            return CompletionError::Transport {
                message: err.to_string(),
            };
        })?;

        if let Some(err) = status_err {
            tracing::error!(status = status.as_u16(), body = %body, "completion request failed");
            let detail = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|value| return serde_json::to_string(&value).ok());

            return Err(CompletionError::Status {
                message: err.to_string(),
                body: detail,
            });
        }

        tracing::debug!(status = status.as_u16(), body = %body, "completion response");
        return parse_answer(&body);
    }

    /// Requests an answer for `history` and collapses any failure into the
    /// text shown in its place.
    pub async fn send(&self, history: &[Message], model: ModelName) -> String {
        let req = CompletionRequest::new(model, history);
        let result = self.complete(&req).await;
        if let Err(err) = &result {
            tracing::error!(kind = err.kind(), error = %err, "completion failed");
        }

        return collapse_completion(&result);
    }
}

#[async_trait]
impl Backend for Perplexity {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.token.is_empty() {
            bail!("Perplexity API token is not defined. Set PPLX_API_KEY, pass --api-token, or add api-token to your config file.");
        }
        if self.url.is_empty() {
            bail!("Perplexity API URL is not defined");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn list_models(&self) -> Result<Vec<String>> {
        let models = ModelName::iter()
            .map(|model| return model.to_string())
            .collect();

        return Ok(models);
    }

    #[allow(clippy::implicit_return)]
    async fn get_completion<'a>(
        &self,
        prompt: BackendPrompt,
        tx: &'a mpsc::UnboundedSender<Event>,
    ) -> Result<()> {
        let req = CompletionRequest::new(prompt.model, &prompt.history);
        let request = serde_json::to_string_pretty(&req)?;
        tracing::debug!(
            model = %req.model,
            messages = req.messages.len(),
            "requesting completion"
        );

        let result = self.complete(&req).await;
        if let Err(err) = &result {
            tracing::error!(kind = err.kind(), error = %err, "completion failed");
        }

        tx.send(Event::BackendPromptResponse(BackendResponse {
            author: Author::Assistant,
            result,
            request: Some(request),
        }))?;

        return Ok(());
    }
}
