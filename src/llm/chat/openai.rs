use async_trait::async_trait;
use log::info;
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION } };
use serde_json::Value as JsonValue;
use std::error::Error as StdError;

use super::ChatCompletionApi;
use crate::errors::AgentError;
use crate::models::chat::{ ChatMessage, ChatRequest, ChatResponse };

const DEFAULT_MODEL: &str = "gpt-3.5-turbo-1106";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAIChatClient {
    http: HttpClient,
    model: String,
    base_url: String,
}

impl OpenAIChatClient {
    pub fn new(
        api_key: String,
        model: Option<String>,
        base_url: Option<String>
    ) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let chat_model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| format!("Invalid API key format: {}", e))?
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Box::new(e) as Box<dyn StdError + Send + Sync>)?;

        Ok(Self {
            http,
            model: chat_model,
            base_url: api_url,
        })
    }
}

#[async_trait]
impl ChatCompletionApi for OpenAIChatClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        tools: Option<&[JsonValue]>,
        tool_choice: Option<&str>
    ) -> Result<ChatResponse, Box<dyn StdError + Send + Sync>> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let req = ChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            tools: tools.map(|t| t.to_vec()),
            tool_choice: tool_choice.map(|c| c.to_string()),
        };

        info!("Chat completion request: model={}, messages={}", self.model, messages.len());

        let body = self.http.post(&url)
            .json(&req)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        // Decode at the boundary so a shape mismatch fails here, not deeper in
        // the conversation logic.
        let resp: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            AgentError::UnexpectedResponse(format!("chat completion body did not decode: {}", e))
        })?;

        if resp.choices.is_empty() {
            return Err(AgentError::UnexpectedResponse("no choices in chat completion".to_string()).into());
        }

        Ok(resp)
    }
}
