use serde::Deserialize;
use serde_json::{ json, Value as JsonValue };
use std::error::Error as StdError;
use std::str::FromStr;

use crate::errors::AgentError;
use crate::weather::WeatherLookup;

/// The registry is fixed and tiny, so dispatch is a closed enum rather than a
/// name-to-callable map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    GetCurrentWeather,
}

impl ToolName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GetCurrentWeather => "get_current_weather",
        }
    }
}

impl FromStr for ToolName {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get_current_weather" => Ok(ToolName::GetCurrentWeather),
            other => Err(AgentError::UnknownTool(other.to_string())),
        }
    }
}

/// Arguments the model supplies for `get_current_weather`. `unit` is part of
/// the advertised schema but does not influence the lookup.
#[derive(Deserialize, Debug, Clone)]
pub struct WeatherToolArgs {
    pub location: String,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Schema list advertised to the model on the first round.
pub fn tool_schema() -> Vec<JsonValue> {
    vec![
        json!({
            "type": "function",
            "function": {
                "name": ToolName::GetCurrentWeather.as_str(),
                "description": "Get the current weather in a given location",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "location": {
                            "type": "string",
                            "description": "The city and state, e.g. San Francisco, CA",
                        },
                        "unit": { "type": "string", "enum": ["celsius", "fahrenheit"] },
                    },
                    "required": ["location"],
                },
            },
        })
    ]
}

/// City resolver: maps a free-text location to one of the supported cities by
/// case-insensitive substring match, first match wins, and delegates to the
/// weather lookup. An unmatched location yields a fixed fallback value with no
/// network call; that is a defined outcome, not an error.
pub async fn get_current_weather(
    weather: &dyn WeatherLookup,
    location: &str,
    _unit: Option<&str>
) -> Result<String, Box<dyn StdError + Send + Sync>> {
    let lowered = location.to_lowercase();
    if lowered.contains("shanghai") {
        weather.query_city_weather("上海").await
    } else if lowered.contains("beijing") {
        weather.query_city_weather("北京").await
    } else if lowered.contains("sanya") {
        weather.query_city_weather("三亚").await
    } else {
        Ok(json!({ "location": location, "temperature": "unknown" }).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records requested cities and answers with a canned body.
    struct FakeWeather {
        calls: Mutex<Vec<String>>,
    }

    impl FakeWeather {
        fn new() -> Self {
            Self { calls: Mutex::new(Vec::new()) }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherLookup for FakeWeather {
        async fn query_city_weather(
            &self,
            city: &str
        ) -> Result<String, Box<dyn StdError + Send + Sync>> {
            self.calls.lock().unwrap().push(city.to_string());
            Ok(json!({ "lives": [{ "city": city, "weather": "晴" }] }).to_string())
        }
    }

    #[tokio::test]
    async fn shanghai_resolves_to_local_name() {
        let weather = FakeWeather::new();
        let result = get_current_weather(&weather, "Shanghai, CA", None).await.unwrap();
        assert_eq!(weather.calls(), vec!["上海".to_string()]);
        assert!(serde_json::from_str::<JsonValue>(&result).is_ok());
    }

    #[tokio::test]
    async fn match_is_case_insensitive_and_ignores_surrounding_text() {
        let weather = FakeWeather::new();
        get_current_weather(&weather, "somewhere near BEIJING, China", None).await.unwrap();
        get_current_weather(&weather, "sunny sanya beach", Some("fahrenheit")).await.unwrap();
        assert_eq!(weather.calls(), vec!["北京".to_string(), "三亚".to_string()]);
    }

    #[tokio::test]
    async fn unmatched_location_returns_fallback_without_lookup() {
        let weather = FakeWeather::new();
        let result = get_current_weather(&weather, "Unknown Town", None).await.unwrap();
        assert!(weather.calls().is_empty());
        let value: JsonValue = serde_json::from_str(&result).unwrap();
        assert_eq!(value, json!({ "location": "Unknown Town", "temperature": "unknown" }));
    }

    #[tokio::test]
    async fn fallback_preserves_input_casing() {
        let weather = FakeWeather::new();
        let result = get_current_weather(&weather, "MiXeD CaSe ToWn", None).await.unwrap();
        let value: JsonValue = serde_json::from_str(&result).unwrap();
        assert_eq!(value["location"], "MiXeD CaSe ToWn");
    }

    #[test]
    fn tool_name_round_trips() {
        let parsed: ToolName = "get_current_weather".parse().unwrap();
        assert_eq!(parsed, ToolName::GetCurrentWeather);
        assert!(matches!(
            "lookup_stock_price".parse::<ToolName>(),
            Err(AgentError::UnknownTool(name)) if name == "lookup_stock_price"
        ));
    }

    #[test]
    fn schema_requires_location_only() {
        let schema = tool_schema();
        assert_eq!(schema.len(), 1);
        let function = &schema[0]["function"];
        assert_eq!(function["name"], "get_current_weather");
        assert_eq!(function["parameters"]["required"], json!(["location"]));
    }
}
