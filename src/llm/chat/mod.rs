pub mod openai;

pub use openai::OpenAIChatClient;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::error::Error as StdError;

use crate::models::chat::{ ChatMessage, ChatResponse };

/// Seam over the chat-completion API so the orchestrator can be exercised
/// against an in-memory fake.
#[async_trait]
pub trait ChatCompletionApi: Send + Sync {
    /// One blocking round trip: the full conversation so far, optionally a
    /// tool schema and a tool-choice mode, back a structured reply.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        tools: Option<&[JsonValue]>,
        tool_choice: Option<&str>
    ) -> Result<ChatResponse, Box<dyn StdError + Send + Sync>>;
}
