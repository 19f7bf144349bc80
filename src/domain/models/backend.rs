#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::Author;
use super::Event;
use super::Message;
use super::ModelName;

pub struct BackendPrompt {
    pub history: Vec<Message>,
    pub model: ModelName,
}

impl BackendPrompt {
    pub fn new(history: Vec<Message>, model: ModelName) -> BackendPrompt {
        return BackendPrompt { history, model };
    }
}

fn status_detail(body: &Option<String>) -> String {
    if let Some(body) = body {
        return format!("\n상세: {body}");
    }

    return "".to_string();
}

/// Every way a completion can fail. The `Display` output is what the chat
/// shows in place of an answer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    #[error("응답을 처리하는 중 오류가 발생했습니다.")]
    EmptyResponse,
    #[error("API 요청 중 오류 발생: {message}")]
    Transport { message: String },
    #[error("API 요청 중 오류 발생: {message}")]
    Decode { message: String },
    #[error("API 요청 중 오류 발생: {message}{}", status_detail(.body))]
    Status {
        message: String,
        body: Option<String>,
    },
    #[error("오류 발생: {0}")]
    Unexpected(String),
}

impl CompletionError {
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::EmptyResponse => return "empty_response",
            CompletionError::Transport { .. } => return "transport",
            CompletionError::Decode { .. } => return "decode",
            CompletionError::Status { .. } => return "status",
            CompletionError::Unexpected(_) => return "unexpected",
        }
    }
}

pub struct BackendResponse {
    pub author: Author,
    pub result: Result<String, CompletionError>,
    /// Pretty printed request payload, shown in the side panel in debug mode.
    pub request: Option<String>,
}

/// Collapses a completion result into the single string shown in place of
/// an answer.
pub fn collapse_completion(result: &Result<String, CompletionError>) -> String {
    match result {
        Ok(text) => return text.to_string(),
        Err(err) => return err.to_string(),
    }
}

impl BackendResponse {
    pub fn text(&self) -> String {
        return collapse_completion(&self.result);
    }
}

#[async_trait]
pub trait Backend {
    /// Used at startup to verify all configurations are available to work with
    /// the backend.
    async fn health_check(&self) -> Result<()>;

    /// Lists the model names the provider accepts.
    async fn list_models(&self) -> Result<Vec<String>>;

    /// Requests a completion for the full history. The answer, or the error
    /// that replaced it, is sent through the channel as a single
    /// `Event::BackendPromptResponse`.
    async fn get_completion<'a>(
        &self,
        prompt: BackendPrompt,
        tx: &'a mpsc::UnboundedSender<Event>,
    ) -> Result<()>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
