use serde::{ Serialize, Deserialize };
use serde_json::Value as JsonValue;

/// One entry in the conversation replayed to the chat API on every call.
/// The API is stateless, so the full ordered history is sent each round and
/// must be preserved verbatim.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
            name: None,
        }
    }

    /// A `tool`-role message carrying a locally produced result, tagged with
    /// the id and name of the invocation that requested it.
    pub fn tool(
        tool_call_id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>
    ) -> Self {
        Self {
            role: "tool".to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
            name: Some(name.into()),
        }
    }
}

/// A model-issued request to run a named local function. `arguments` is a
/// JSON-encoded string, not a JSON object, per the OpenAI wire format.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionCall,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

#[derive(Serialize, Debug)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_serializes_without_tool_fields() {
        let msg = ChatMessage::user("hello");
        let wire = serde_json::to_value(&msg).unwrap();
        assert_eq!(wire["role"], "user");
        assert_eq!(wire["content"], "hello");
        let obj = wire.as_object().unwrap();
        assert!(!obj.contains_key("tool_calls"));
        assert!(!obj.contains_key("tool_call_id"));
        assert!(!obj.contains_key("name"));
    }

    #[test]
    fn tool_message_carries_id_and_name() {
        let msg = ChatMessage::tool("call_1", "get_current_weather", r#"{"temperature": "unknown"}"#);
        let wire = serde_json::to_value(&msg).unwrap();
        assert_eq!(wire["role"], "tool");
        assert_eq!(wire["tool_call_id"], "call_1");
        assert_eq!(wire["name"], "get_current_weather");
        let content = wire["content"].as_str().unwrap();
        assert!(serde_json::from_str::<JsonValue>(content).is_ok());
    }

    #[test]
    fn assistant_reply_with_tool_calls_deserializes() {
        let body = r#"{
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {
                            "name": "get_current_weather",
                            "arguments": "{\"location\": \"Shanghai, CA\"}"
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        }"#;
        let resp: ChatResponse = serde_json::from_str(body).unwrap();
        let msg = &resp.choices[0].message;
        assert!(msg.content.is_none());
        let calls = msg.tool_calls.as_ref().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].id, "call_abc");
        assert_eq!(calls[0].function.name, "get_current_weather");
    }

    #[test]
    fn request_omits_tools_when_absent() {
        let req = ChatRequest {
            model: "gpt-3.5-turbo-1106".to_string(),
            messages: vec![ChatMessage::user("hi")],
            tools: None,
            tool_choice: None,
        };
        let wire = serde_json::to_value(&req).unwrap();
        let obj = wire.as_object().unwrap();
        assert!(!obj.contains_key("tools"));
        assert!(!obj.contains_key("tool_choice"));
    }
}
