use log::info;
use std::error::Error;
use std::sync::Arc;

use crate::errors::AgentError;
use crate::llm::chat::ChatCompletionApi;
use crate::models::chat::{ ChatMessage, ChatResponse };
use crate::tools::{ self, ToolName, WeatherToolArgs };
use crate::weather::WeatherLookup;

const USER_PROMPT: &str =
    "What's the weather like in shanghai, beijing, and sanya? Please express the result in Chinese.";

/// Drives one two-round exchange with the chat API: offer the weather tool,
/// execute whatever invocations the model requests, then ask for the final
/// answer with the accumulated conversation.
pub struct WeatherAgent {
    chat_client: Arc<dyn ChatCompletionApi>,
    weather_client: Arc<dyn WeatherLookup>,
}

impl WeatherAgent {
    pub fn new(chat_client: Arc<dyn ChatCompletionApi>, weather_client: Arc<dyn WeatherLookup>) -> Self {
        Self {
            chat_client,
            weather_client,
        }
    }

    /// Returns `Ok(None)` when the model answers directly without requesting
    /// any tool call; that ends the run with no weather lookup and no second
    /// round.
    pub async fn run_conversation(&self) -> Result<Option<ChatResponse>, Box<dyn Error + Send + Sync>> {
        let mut messages = vec![ChatMessage::user(USER_PROMPT)];
        let tools = tools::tool_schema();

        let first = self.chat_client
            .complete(&messages, Some(&tools), Some("auto")).await?;
        let reply = first.choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::UnexpectedResponse("no choices in chat completion".to_string()))?
            .message;

        let tool_calls = match reply.tool_calls.clone() {
            Some(calls) if !calls.is_empty() => calls,
            _ => {
                info!("Model requested no tool calls, ending after first round");
                return Ok(None);
            }
        };

        info!("Model requested {} tool call(s)", tool_calls.len());
        messages.push(reply);

        for call in &tool_calls {
            let tool: ToolName = call.function.name.parse()?;
            let args: WeatherToolArgs = serde_json
                ::from_str(&call.function.arguments)
                .map_err(|e| AgentError::BadToolArguments {
                    tool: call.function.name.clone(),
                    source: e,
                })?;

            let result = match tool {
                ToolName::GetCurrentWeather => {
                    tools::get_current_weather(
                        self.weather_client.as_ref(),
                        &args.location,
                        args.unit.as_deref()
                    ).await?
                }
            };

            messages.push(ChatMessage::tool(&call.id, tool.as_str(), result));
        }

        let second = self.chat_client.complete(&messages, None, None).await?;
        Ok(Some(second))
    }
}
